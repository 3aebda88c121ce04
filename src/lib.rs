pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod render;
pub mod services;
pub mod stats;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::io;
use std::path::PathBuf;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::render::RenderService;
use crate::services::roster::RenderOutcome;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

/// Render once; the error page is still written, but the command reports failure
pub fn handle_render(endpoint: Option<String>, output: Option<PathBuf>, fragment: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env().with_base_url(endpoint);
        let service = RenderService::new(config, output, fragment);
        match service.run().await? {
            RenderOutcome::Rendered { .. } => Ok(()),
            RenderOutcome::Failed => anyhow::bail!("Error loading data."),
        }
    })
}

pub fn handle_serve(port: u16, endpoint: Option<String>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env().with_base_url(endpoint);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
