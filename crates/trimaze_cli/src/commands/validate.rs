//! Validate command implementation

use std::path::Path;

use miette::Result;
use tracing::debug;

use crate::cli::Cli;
use crate::output::output_validation;

use super::{load_config, open_grid};

pub fn run_validate(cli: &Cli, file: &Path) -> Result<bool> {
    let config = load_config(cli)?;
    let format = cli.format.unwrap_or(config.format);

    let grid = open_grid(file)?;
    debug!("Loaded {}x{} maze", grid.rows(), grid.cols());

    let outcome = trimaze_core::validate(&grid);
    if let Err(violation) = &outcome {
        debug!("{}", violation);
    }

    output_validation(&outcome, format)?;

    // An inconsistent maze is a normal answer, not a failure.
    Ok(false)
}
