//! # trimaze_core
//!
//! Triangular maze model and algorithms.
//!
//! This crate provides:
//! - The immutable `Grid` of 3-bit wall masks
//! - A loader for the whitespace separated text format
//! - A border consistency validator
//! - A lazy wall-following `Walker`
//!
//! ## Example
//!
//! ```rust
//! use trimaze_core::{Grid, Hand, Position, trace};
//!
//! let grid: Grid = "1 1\n0".parse().unwrap();
//! let path: Vec<_> = trace(&grid, Position::new(1, 1), Hand::Right)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(path, vec![Position::new(1, 1)]);
//! ```

mod config;
mod error;
mod grid;
mod loader;
pub mod traversal;
pub mod validator;

pub use config::{CONFIG_FILE_NAME, MazeConfig, OutputFormat};
pub use error::{MazeError, TraversalError};
pub use grid::{CellMask, Edge, Grid, Orientation, Position};
pub use loader::{MAX_TOKEN_DIGITS, load_grid, parse_grid};
pub use traversal::{Hand, Walker, entry_edge, next_edge, trace, transition};
pub use validator::{Violation, ViolationKind, is_valid, validate};
