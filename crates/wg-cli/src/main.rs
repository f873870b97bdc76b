//! wglog CLI
//!
//! Command-line interface for writing leveled log lines

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "wglog")]
#[command(about = "wglog - Write leveled, timestamped log lines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write one line at a level
    Write(commands::write::WriteArgs),
    /// List the severity levels
    Levels,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Write(args) => commands::write::execute(args),
        Commands::Levels => commands::levels::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
