//! Border consistency checks.
//!
//! A wall on an interior edge must be recorded by both cells that share the
//! edge. Edges on the outside of the rectangle have no second cell and are
//! always consistent.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{Edge, Grid, Orientation, Position};

/// What kind of inconsistency a cell exhibits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ViolationKind {
    /// The mask uses bits beyond the three edge bits.
    MalformedCell { mask: u8 },
    /// Left wall not mirrored by the right wall of the cell to the left.
    LeftMismatch,
    /// Right wall not mirrored by the left wall of the cell to the right.
    RightMismatch,
    /// Horizontal wall not mirrored by the vertically adjacent cell.
    HorizontalMismatch,
}

/// The first inconsistency found in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Cell at which the check failed.
    pub position: Position,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Position { row, col } = self.position;
        match self.kind {
            ViolationKind::MalformedCell { mask } => {
                write!(f, "cell {},{} has out-of-range mask {}", row, col, mask)
            }
            ViolationKind::LeftMismatch => write!(
                f,
                "left wall of cell {},{} is missing on its left neighbour",
                row, col
            ),
            ViolationKind::RightMismatch => write!(
                f,
                "right wall of cell {},{} is missing on its right neighbour",
                row, col
            ),
            ViolationKind::HorizontalMismatch => write!(
                f,
                "horizontal wall of cell {},{} is missing on its vertical neighbour",
                row, col
            ),
        }
    }
}

/// Returns true if every shared edge agrees on both sides and every mask is
/// well formed.
pub fn is_valid(grid: &Grid) -> bool {
    validate(grid).is_ok()
}

/// Checks the grid in a single row-major pass and reports the first
/// inconsistency.
pub fn validate(grid: &Grid) -> Result<(), Violation> {
    let result =
        (0..grid.cells().len()).try_for_each(|index| check_cell(grid, grid.position_of(index)));

    match &result {
        Ok(()) => debug!("Grid {}x{} is consistent", grid.rows(), grid.cols()),
        Err(violation) => debug!("Grid is inconsistent: {}", violation),
    }
    result
}

fn check_cell(grid: &Grid, position: Position) -> Result<(), Violation> {
    let Position { row, col } = position;
    let mask = grid.cells()[grid.index_of(row, col)];
    let fail = |kind| Err(Violation { position, kind });

    if !mask.is_well_formed() {
        return fail(ViolationKind::MalformedCell { mask: mask.bits() });
    }

    if mask.has_wall(Edge::Left) && col > 1 && !wall_at(grid, row, col - 1, Edge::Right) {
        return fail(ViolationKind::LeftMismatch);
    }

    if mask.has_wall(Edge::Right) && col < grid.cols() && !wall_at(grid, row, col + 1, Edge::Left)
    {
        return fail(ViolationKind::RightMismatch);
    }

    if mask.has_wall(Edge::Horizontal) {
        let neighbour_row = match grid.orientation(row, col) {
            Orientation::ApexDown => row.checked_sub(1).filter(|&r| r >= 1),
            Orientation::ApexUp => Some(row + 1).filter(|&r| r <= grid.rows()),
        };
        if let Some(other) = neighbour_row
            && !wall_at(grid, other, col, Edge::Horizontal)
        {
            return fail(ViolationKind::HorizontalMismatch);
        }
    }

    Ok(())
}

#[inline]
fn wall_at(grid: &Grid, row: usize, col: usize, edge: Edge) -> bool {
    grid.cells()[grid.index_of(row, col)].has_wall(edge)
}
