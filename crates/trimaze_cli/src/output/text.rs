//! Text output formatter

use std::io::{self, Write};

use trimaze_core::{TraversalError, Violation, Walker};

pub fn output_validation<W: Write>(
    outcome: &Result<(), Violation>,
    mut out: W,
) -> io::Result<()> {
    match outcome {
        Ok(()) => writeln!(out, "Valid")?,
        Err(_) => writeln!(out, "Invalid")?,
    }
    out.flush()
}

/// Writes one `row,col` line per cell as soon as the walker reaches it.
pub fn output_trace<W: Write>(
    walker: Walker<'_>,
    mut out: W,
) -> io::Result<Option<TraversalError>> {
    let mut failure = None;
    for step in walker {
        match step {
            Ok(position) => writeln!(out, "{}", position)?,
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }
    out.flush()?;
    Ok(failure)
}
