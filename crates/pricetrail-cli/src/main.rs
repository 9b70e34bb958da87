//! Pricetrail CLI
//!
//! Command-line interface for pricetrail

use clap::{Parser, Subcommand};
use pricetrail_core::logging::{self, Profile};

mod commands;
mod notify;
mod source;

#[derive(Debug, Parser)]
#[command(name = "pricetrail")]
#[command(about = "Pricetrail - Product price tracking and change detection", long_about = None)]
struct Cli {
    /// Emit JSON logs instead of human-readable output
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ingest a snapshot batch, update the ledger, and report changes
    Track(commands::track::TrackArgs),
    /// Show the recorded price history for one product
    History(commands::history::HistoryArgs),
}

fn main() {
    let cli = Cli::parse();

    logging::init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Track(args) => commands::track::execute(args),
        Commands::History(args) => commands::history::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
