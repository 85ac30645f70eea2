//! HierGrid CLI - render record hierarchies from JSON files

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "hiergrid")]
#[command(about = "HierGrid: expandable tree grids for self-referencing records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the HierGrid CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
