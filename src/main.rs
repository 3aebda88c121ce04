use anyhow::Result;
use colored::Colorize;

use roster_cards::cli::Command;
use roster_cards::{handle_completions, handle_render, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Render {
            endpoint,
            output,
            fragment,
        } => handle_render(endpoint.clone(), output.clone(), *fragment),
        Command::Serve { port, endpoint } => handle_serve(*port, endpoint.clone()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
