//! candela CLI - fetch and average OKX historical candles.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::Path;

mod commands;
mod logging;

/// Output of `fetch`, input of `average`.
pub(crate) const DATA_FILE: &str = "data.json";

/// Output of `average`.
pub(crate) const AVERAGED_FILE: &str = "data_5min.json";

#[derive(Parser)]
#[command(name = "candela")]
#[command(about = "Fetch and average OKX historical candles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch BTC-USDT history candles into data.json
    Fetch,

    /// Average close over 5-candle windows of data.json into data_5min.json
    Average,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();
    logging::init(cli.verbose, cli.quiet)?;

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch => commands::fetch::fetch(Path::new(DATA_FILE), cli.quiet).await,
        Commands::Average => {
            commands::average::average(Path::new(DATA_FILE), Path::new(AVERAGED_FILE), cli.quiet)
        }
    }
}
