//! trimaze CLI
//!
//! Validates triangular mazes and traces wall-following paths through them.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;
use trimaze_core::Hand;

use crate::cli::{Cli, Commands};
use crate::commands::trace::run_trace;
use crate::commands::validate::run_validate;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(walk_failed) => {
            if walk_failed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Validate { file } => run_validate(cli, file),
        Commands::Trace {
            start,
            hand,
            limits,
        } => run_trace(cli, start, *hand, limits),
        Commands::Rpath { start, limits } => run_trace(cli, start, Some(Hand::Right), limits),
        Commands::Lpath { start, limits } => run_trace(cli, start, Some(Hand::Left), limits),
    }
}
