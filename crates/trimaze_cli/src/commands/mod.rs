//! Command implementations

pub mod trace;
pub mod validate;

use std::fs::File;
use std::io;
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, info};
use trimaze_core::{Grid, MazeConfig, load_grid};

use crate::cli::Cli;

/// Reads a grid from `path`, or from standard input when `path` is `-`.
pub fn open_grid(path: &Path) -> Result<Grid> {
    if path.as_os_str() == "-" {
        debug!("Reading maze from standard input");
        return load_grid(io::stdin().lock()).into_diagnostic();
    }

    let file = File::open(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Error opening file {}", path.display()))?;
    load_grid(io::BufReader::new(file))
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to load maze from {}", path.display()))
}

/// Loads the `--config` file, or a config discovered in the working directory.
pub fn load_config(cli: &Cli) -> Result<MazeConfig> {
    if let Some(ref path) = cli.config {
        return MazeConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = MazeConfig::discover(".") {
        info!("Using config: {}", path.display());
        return MazeConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(MazeConfig::new())
}
