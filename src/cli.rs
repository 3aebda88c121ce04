use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "team roster card renderer")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch the roster once and render it
    Render {
        /// Base URL of the team backend (overrides ROSTER_API_URL)
        #[arg(short, long)]
        endpoint: Option<String>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit only the container element, not a full page
        #[arg(long)]
        fragment: bool,
    },
    /// Start the roster page server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Base URL of the team backend (overrides ROSTER_API_URL)
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
