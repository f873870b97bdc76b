//! Write command
//!
//! Usage: wglog write [--dest <DEST>] [--level <LEVEL>] [--config <FILE>] <MESSAGE>...

use clap::Args;
use std::path::PathBuf;
use wg_log::{LoggerConfig, Severity};

#[derive(Debug, Args)]
pub struct WriteArgs {
    /// Message words, joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Level of the line
    #[arg(short, long, default_value = "info")]
    pub level: Severity,

    /// Destination: stdout, stderr, - or a file path (default: stderr)
    #[arg(short, long, conflicts_with = "config")]
    pub dest: Option<String>,

    /// TOML logger configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Execute write command
pub fn execute(args: WriteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => LoggerConfig::load(path)?,
        None => LoggerConfig::default(),
    };
    if let Some(dest) = args.dest {
        config.destination = dest;
    }

    // WG_DEBUG is read here, once, at the program boundary
    let logger = config.with_env().build()?;
    logger.log(args.level, format_args!("{}", args.message.join(" ")));
    logger.destroy()?;

    Ok(())
}
