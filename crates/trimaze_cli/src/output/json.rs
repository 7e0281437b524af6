//! JSON output formatter

use std::cell::{Cell, RefCell};
use std::io::{self, Write};

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use trimaze_core::{Hand, TraversalError, Violation, Walker};

pub fn output_validation<W: Write>(
    outcome: &Result<(), Violation>,
    mut out: W,
) -> io::Result<()> {
    let output = serde_json::json!({
        "valid": outcome.is_ok(),
        "violation": outcome.as_ref().err(),
    });
    serde_json::to_writer_pretty(&mut out, &output)?;
    writeln!(out)?;
    out.flush()
}

/// Serializes the cells of a walk as they are produced.
///
/// The walker runs inside `serialize`; the error that stopped it, if any, is
/// left in `failure`.
struct PathSeq<'a, 'g> {
    walker: RefCell<&'a mut Walker<'g>>,
    failure: &'a Cell<Option<TraversalError>>,
}

impl Serialize for PathSeq<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut walker = self.walker.borrow_mut();
        let mut seq = serializer.serialize_seq(None)?;
        for step in &mut **walker {
            match step {
                Ok(position) => seq.serialize_element(&position)?,
                Err(e) => {
                    self.failure.set(Some(e));
                    break;
                }
            }
        }
        seq.end()
    }
}

/// Streams `{"hand", "path", "exit", "error"}` to `out`.
pub fn output_trace<W: Write>(
    mut walker: Walker<'_>,
    hand: Hand,
    out: W,
) -> io::Result<Option<TraversalError>> {
    let failure = Cell::new(None);
    let mut serializer = serde_json::Serializer::pretty(out);

    let mut map = (&mut serializer).serialize_map(None)?;
    map.serialize_entry("hand", &hand)?;
    map.serialize_entry(
        "path",
        &PathSeq {
            walker: RefCell::new(&mut walker),
            failure: &failure,
        },
    )?;
    let failure = failure.get();
    map.serialize_entry("exit", &failure.is_none().then(|| walker.position()))?;
    map.serialize_entry("error", &failure.map(|e| e.to_string()))?;
    SerializeMap::end(map)?;

    let mut out = serializer.into_inner();
    writeln!(out)?;
    out.flush()?;
    Ok(failure)
}
