//! Maze error types.

use thiserror::Error;

use crate::validator::Violation;

/// Errors that can occur while loading, validating or tracing a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    /// Malformed dimensions or a non-numeric token.
    #[error("Format error: {message}")]
    Format {
        /// Error message.
        message: String,
        /// Byte offset of the offending token, when known.
        offset: Option<usize>,
    },

    /// The input ended before every cell was read.
    #[error("Unexpected end of input: expected {expected} cells, found {found}")]
    TruncatedInput {
        /// Number of cells declared by the dimensions.
        expected: usize,
        /// Number of cells actually present.
        found: usize,
    },

    /// The cell buffer could not be allocated.
    #[error("Unable to allocate memory for a {rows}x{cols} grid")]
    Allocation {
        /// Declared row count.
        rows: usize,
        /// Declared column count.
        cols: usize,
    },

    /// The grid failed border validation.
    #[error("Not a valid maze: {0}")]
    InvalidMaze(Violation),

    /// A cell access fell outside the grid.
    #[error("Cell {row},{col} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row (1-indexed).
        row: usize,
        /// Requested column (1-indexed).
        col: usize,
        /// Row count of the grid.
        rows: usize,
        /// Column count of the grid.
        cols: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
            offset: None,
        }
    }

    /// Creates a format error at a byte offset.
    pub fn format_at(message: impl Into<String>, offset: usize) -> Self {
        Self::Format {
            message: message.into(),
            offset: Some(offset),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Errors raised by a running walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// Every edge of the current cell is a wall.
    #[error("Cell {row},{col} has no open edge")]
    NoOpenEdge { row: usize, col: usize },

    /// The walk emitted more cells than the configured limit.
    #[error("Step limit of {limit} exceeded")]
    StepLimitExceeded { limit: usize },

    /// The walker re-entered a cell through the same edge, so it can never exit.
    #[error("Walk cycles forever after re-entering cell {row},{col}")]
    Cycle { row: usize, col: usize },
}
