//! Trace command implementation

use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use trimaze_core::{Hand, OutputFormat, Position, trace};

use crate::cli::{Cli, LimitArgs, StartArgs};
use crate::output::output_trace;

use super::{load_config, open_grid};

/// Walks the maze from the start cell and prints every visited cell.
///
/// `hand` overrides the configured hand when set. Returns `true` if the walk
/// stopped before leaving the maze.
pub fn run_trace(
    cli: &Cli,
    start: &StartArgs,
    hand: Option<Hand>,
    limits: &LimitArgs,
) -> Result<bool> {
    let config = load_config(cli)?;
    let format = cli.format.unwrap_or(config.format);
    let hand = hand.unwrap_or(config.hand);
    let max_steps = limits
        .max_steps
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
        .or(config.max_steps);
    // A JSON document must close, so an endless walk is cut at its first repeat.
    let detect_cycles =
        limits.detect_cycles || config.detect_cycles || format == OutputFormat::Json;

    let grid = open_grid(&start.file)?;

    let mut walker =
        trace(&grid, Position::new(start.row, start.col), hand).into_diagnostic()?;
    if let Some(limit) = max_steps {
        walker = walker.with_step_limit(limit);
    }
    walker = walker.detect_cycles(detect_cycles);

    match output_trace(walker, hand, format)? {
        Some(failure) => {
            error!("{}", failure);
            Ok(true)
        }
        None => {
            info!("Reached the edge of the maze");
            Ok(false)
        }
    }
}
