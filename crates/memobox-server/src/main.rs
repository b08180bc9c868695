//! MemoBox state service - entry point
//!
//! Startup sequence: parse CLI, load configuration, initialize logging,
//! build the store gate, launch the endpoint. A store that cannot be
//! built does not abort the process; the endpoint still answers with the
//! configuration-error response so the failure is visible to callers.

use clap::Parser;

/// Command line interface for the MemoBox state service
#[derive(Parser, Debug)]
#[command(name = "memobox")]
#[command(about = "MemoBox state service - persists one JSON application state blob")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured port
    #[arg(long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    memobox_server::run_with_overrides(cli.config.as_deref(), cli.host, cli.port).await
}
