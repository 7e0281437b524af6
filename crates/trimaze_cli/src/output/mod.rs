//! Output formatting module

mod json;
mod text;

use std::io::{self, Write};

use miette::{IntoDiagnostic, Result};
use tracing::debug;
use trimaze_core::{Hand, OutputFormat, TraversalError, Violation, Walker};

pub fn output_validation(outcome: &Result<(), Violation>, format: OutputFormat) -> Result<()> {
    finish(write_validation(outcome, format, io::stdout().lock()))
}

/// Drives `walker` to completion, printing as it goes.
///
/// Returns the error that stopped the walk, if any.
pub fn output_trace(
    walker: Walker<'_>,
    hand: Hand,
    format: OutputFormat,
) -> Result<Option<TraversalError>> {
    finish(write_trace(walker, hand, format, io::stdout().lock()))
}

fn write_validation<W: Write>(
    outcome: &Result<(), Violation>,
    format: OutputFormat,
    out: W,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => json::output_validation(outcome, out),
        OutputFormat::Text => text::output_validation(outcome, out),
    }
}

fn write_trace<W: Write>(
    walker: Walker<'_>,
    hand: Hand,
    format: OutputFormat,
    out: W,
) -> io::Result<Option<TraversalError>> {
    match format {
        OutputFormat::Json => json::output_trace(walker, hand, out),
        OutputFormat::Text => text::output_trace(walker, out),
    }
}

/// A reader that went away (`trimaze rpath ... | head`) ends output normally.
fn finish<T: Default>(written: io::Result<T>) -> Result<T> {
    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed by reader");
            Ok(T::default())
        }
        other => other.into_diagnostic(),
    }
}
