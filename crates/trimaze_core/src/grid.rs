//! Grid and cell types.
//!
//! A maze is a rectangle of triangles. Cells alternate between apex-down and
//! apex-up along every row and column, so neighbouring triangles in a row
//! share their slanted left/right edges and vertically adjacent triangles
//! share a horizontal edge.

use std::fmt;

use serde::Serialize;

use crate::MazeError;

/// One of the three edges of a triangular cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Edge 0.
    Left = 0,
    /// Edge 1.
    Right = 1,
    /// Edge 2: top of an apex-down cell, bottom of an apex-up cell.
    Horizontal = 2,
}

impl Edge {
    /// All edges in index order.
    pub const ALL: [Edge; 3] = [Edge::Left, Edge::Right, Edge::Horizontal];

    /// Returns the edge index (0, 1 or 2).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the edge with the given index, modulo 3.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Edge::Left,
            1 => Edge::Right,
            _ => Edge::Horizontal,
        }
    }
}

/// Orientation of a triangular cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// "V" shape: the horizontal edge is on top.
    ApexDown,
    /// "A" shape: the horizontal edge is at the bottom.
    ApexUp,
}

impl Orientation {
    /// Orientation of the cell at 1-based `(row, col)`.
    #[inline]
    pub const fn of(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            Orientation::ApexDown
        } else {
            Orientation::ApexUp
        }
    }
}

/// Wall bitmask of a single cell.
///
/// Bit `n` is set when edge `n` is a wall. Only the low three bits carry
/// meaning; a mask using any other bit is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct CellMask(u8);

impl CellMask {
    /// Highest well-formed mask value (all three walls).
    pub const MAX: u8 = 0b111;

    /// Wraps a raw mask value.
    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw mask value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if `edge` is a wall.
    #[inline]
    pub const fn has_wall(self, edge: Edge) -> bool {
        (self.0 >> edge.index()) & 1 == 1
    }

    /// Returns true if no undefined bit is set.
    #[inline]
    pub const fn is_well_formed(self) -> bool {
        self.0 <= Self::MAX
    }
}

impl From<u8> for CellMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 1-based cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// Row (1-indexed).
    pub row: usize,
    /// Column (1-indexed).
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// An immutable rectangle of cell masks stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellMask>,
}

impl Grid {
    /// Builds a grid from its dimensions and row-major cells.
    ///
    /// Fails if either dimension is zero or `cells` does not hold exactly
    /// `rows * cols` masks.
    pub fn new(rows: usize, cols: usize, cells: Vec<CellMask>) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::format(format!(
                "rows and cols must be positive, got {}x{}",
                rows, cols
            )));
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(MazeError::Allocation { rows, cols })?;
        if cells.len() > expected {
            return Err(MazeError::format(format!(
                "{} cells given for a {}x{} grid",
                cells.len(),
                rows,
                cols
            )));
        }
        if cells.len() < expected {
            return Err(MazeError::TruncatedInput {
                expected,
                found: cells.len(),
            });
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[CellMask] {
        &self.cells
    }

    /// Returns true if the 1-based `(row, col)` lies inside the grid.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col)
    }

    /// Returns the mask of the cell at 1-based `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<CellMask, MazeError> {
        if !self.contains(row, col) {
            return Err(MazeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[self.index_of(row, col)])
    }

    /// Orientation of the cell at 1-based `(row, col)`.
    #[inline]
    pub fn orientation(&self, row: usize, col: usize) -> Orientation {
        Orientation::of(row, col)
    }

    /// Converts a row-major index back into a 1-based position.
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols + 1, index % self.cols + 1)
    }

    #[inline]
    pub(crate) fn index_of(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.cols + (col - 1)
    }
}

impl fmt::Display for Grid {
    /// Renders the grid in its textual input format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
