//! Grid loader.
//!
//! Reads the textual maze format: whitespace separated decimal integers,
//! `rows` and `cols` first, followed by `rows * cols` cell masks in
//! row-major order.

use std::io::Read;
use std::str::FromStr;

use tracing::debug;

use crate::{CellMask, Grid, MazeError};

/// Longest accepted numeric token, in digits.
pub const MAX_TOKEN_DIGITS: usize = 4;

/// Reads a grid from `reader`.
///
/// The whole stream is consumed. No grid is returned unless every declared
/// cell was read.
pub fn load_grid<R: Read>(mut reader: R) -> Result<Grid, MazeError> {
    let mut source = Vec::new();
    reader.read_to_end(&mut source)?;
    parse_grid(&source)
}

/// Parses a grid from raw input bytes.
pub fn parse_grid(source: &[u8]) -> Result<Grid, MazeError> {
    let mut tokens = Tokens::new(source);

    let rows = read_dimension(&mut tokens, "rows")?;
    let cols = read_dimension(&mut tokens, "cols")?;
    debug!("Loading {}x{} grid", rows, cols);

    let expected = rows
        .checked_mul(cols)
        .ok_or(MazeError::Allocation { rows, cols })?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(expected)
        .map_err(|_| MazeError::Allocation { rows, cols })?;

    while cells.len() < expected {
        let Some((offset, value)) = tokens.next_number()? else {
            return Err(MazeError::TruncatedInput {
                expected,
                found: cells.len(),
            });
        };
        let bits = u8::try_from(value).map_err(|_| {
            MazeError::format_at(format!("cell value {} does not fit in a byte", value), offset)
        })?;
        cells.push(CellMask::new(bits));
    }

    if tokens.next_number()?.is_some() {
        debug!("Ignoring input after the last cell");
    }

    Grid::new(rows, cols, cells)
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s.as_bytes())
    }
}

fn read_dimension(tokens: &mut Tokens<'_>, name: &str) -> Result<usize, MazeError> {
    match tokens.next_number()? {
        Some((_, 0)) => Err(MazeError::format(format!(
            "{} must be a positive whole number",
            name
        ))),
        Some((_, value)) => Ok(value),
        None => Err(MazeError::format(format!("missing {}", name))),
    }
}

/// Iterator over whitespace separated tokens with their byte offsets.
struct Tokens<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a [u8]) -> Self {
        Self { source, pos: 0 }
    }

    fn next_token(&mut self) -> Option<(usize, &'a [u8])> {
        while self.pos < self.source.len() && self.source[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == self.source.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < self.source.len() && !self.source[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Some((start, &self.source[start..self.pos]))
    }

    /// Returns the next token as a number, `None` at end of input.
    fn next_number(&mut self) -> Result<Option<(usize, usize)>, MazeError> {
        let Some((offset, token)) = self.next_token() else {
            return Ok(None);
        };

        if !token.iter().all(u8::is_ascii_digit) {
            return Err(MazeError::format_at(
                "only digits and whitespace are allowed",
                offset,
            ));
        }
        if token.len() > MAX_TOKEN_DIGITS {
            return Err(MazeError::format_at(
                format!("number longer than {} digits", MAX_TOKEN_DIGITS),
                offset,
            ));
        }

        let value = token
            .iter()
            .fold(0usize, |acc, digit| acc * 10 + usize::from(digit - b'0'));
        Ok(Some((offset, value)))
    }
}
