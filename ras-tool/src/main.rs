//! Main entry point for the ras-tool CLI

mod cli;
mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set verbosity
    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if cli.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }

    let config = cli.source_config();

    // Execute command
    match cli.command {
        Commands::Info { file } => commands::inspect::execute_info(&file, &config),
        Commands::Dump {
            file,
            offset,
            length,
        } => commands::inspect::execute_dump(&file, &config, offset, length),
        Commands::Read {
            file,
            kind,
            offset,
            count,
        } => commands::decode::execute_read(&file, &config, kind, offset, count),
        Commands::Lines { file, offset, max } => {
            commands::decode::execute_lines(&file, &config, offset, max)
        }
        Commands::String {
            file,
            length,
            offset,
            encoding,
        } => commands::decode::execute_string(&file, &config, length, offset, &encoding),
    }
}
