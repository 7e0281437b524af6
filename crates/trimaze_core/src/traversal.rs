//! Wall-following traversal.
//!
//! The walker keeps one hand on a wall: in every cell it tries the edges in
//! rotation starting after the edge it came in through, and crosses the
//! first one that is open. Apex-up and apex-down triangles are mirror images,
//! so the same physical turn rotates edge indices in opposite directions.

use std::collections::HashSet;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Edge, Grid, MazeError, Orientation, Position, TraversalError, validator};

/// Which hand stays on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    #[default]
    Right,
}

impl FromStr for Hand {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "l" => Ok(Hand::Left),
            "right" | "r" => Ok(Hand::Right),
            other => Err(MazeError::config(format!(
                "unknown hand '{}', expected 'left' or 'right'",
                other
            ))),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::Left => f.write_str("left"),
            Hand::Right => f.write_str("right"),
        }
    }
}

/// Returns the edge to try after `previous` in a cell of the given
/// orientation.
pub fn next_edge(previous: Edge, orientation: Orientation, hand: Hand) -> Edge {
    let forward = matches!(
        (orientation, hand),
        (Orientation::ApexUp, Hand::Left) | (Orientation::ApexDown, Hand::Right)
    );
    // -1 mod 3 == +2
    let step = if forward { 1 } else { 2 };
    Edge::from_index(previous.index() + step)
}

/// The move made by crossing one edge of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Row delta.
    pub d_row: isize,
    /// Column delta.
    pub d_col: isize,
    /// Edge crossed, numbered from the side of the next cell.
    pub entry: Edge,
}

const fn step(d_row: isize, d_col: isize, entry: Edge) -> Step {
    Step {
        d_row,
        d_col,
        entry,
    }
}

/// Moves out of an apex-down cell, indexed by edge.
const APEX_DOWN_STEPS: [Step; 3] = [
    step(0, -1, Edge::Right),
    step(0, 1, Edge::Left),
    step(-1, 0, Edge::Horizontal),
];

/// Moves out of an apex-up cell, indexed by edge.
const APEX_UP_STEPS: [Step; 3] = [
    step(0, -1, Edge::Right),
    step(0, 1, Edge::Left),
    step(1, 0, Edge::Horizontal),
];

/// Looks up the move made by crossing `edge` of a cell.
#[inline]
pub fn transition(orientation: Orientation, edge: Edge) -> Step {
    match orientation {
        Orientation::ApexDown => APEX_DOWN_STEPS[edge.index()],
        Orientation::ApexUp => APEX_UP_STEPS[edge.index()],
    }
}

/// Edge crossed when entering the grid at column `col`.
///
/// The first column is entered through the left edge, the last through the
/// right edge, anything else through the top or bottom.
pub fn entry_edge(grid: &Grid, col: usize) -> Edge {
    if col == 1 {
        Edge::Left
    } else if col == grid.cols() {
        Edge::Right
    } else {
        Edge::Horizontal
    }
}

/// Validates `grid`, checks `start` and returns a walker entering it from the
/// nearest boundary.
pub fn trace(grid: &Grid, start: Position, hand: Hand) -> Result<Walker<'_>, MazeError> {
    validator::validate(grid).map_err(MazeError::InvalidMaze)?;
    grid.cell(start.row, start.col)?;

    let entry = entry_edge(grid, start.col);
    debug!("Tracing from {} via {:?} edge, {} hand", start, entry, hand);
    Ok(Walker::new(grid, start, entry, hand))
}

/// Lazy sequence of the cells visited by a wall follower.
///
/// Each in-bounds cell is yielded before the walker moves past it. The
/// sequence ends once the walker leaves the grid. A fully walled cell yields
/// [`TraversalError::NoOpenEdge`] after the cell itself; after any error the
/// iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Walker<'g> {
    grid: &'g Grid,
    position: Position,
    entry: Edge,
    hand: Hand,
    emitted: usize,
    step_limit: Option<usize>,
    seen: Option<HashSet<(Position, Edge)>>,
    pending: Option<TraversalError>,
    done: bool,
}

impl<'g> Walker<'g> {
    /// Creates a walker at `start` that entered through `entry`.
    ///
    /// No validation is performed; see [`trace`] for the checked entry point.
    pub fn new(grid: &'g Grid, start: Position, entry: Edge, hand: Hand) -> Self {
        Self {
            grid,
            position: start,
            entry,
            hand,
            emitted: 0,
            step_limit: None,
            seen: None,
            pending: None,
            done: false,
        }
    }

    /// Stops with [`TraversalError::StepLimitExceeded`] once `limit` cells
    /// have been yielded and the walker is still inside.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Stops with [`TraversalError::Cycle`] when the walker re-enters a cell
    /// through the same edge.
    pub fn detect_cycles(mut self, enabled: bool) -> Self {
        self.seen = enabled.then(HashSet::new);
        self
    }

    /// Current position. Outside the grid once the walk has finished.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Edge through which the current cell was entered.
    pub fn entry(&self) -> Edge {
        self.entry
    }

    /// Number of cells yielded so far.
    pub fn steps(&self) -> usize {
        self.emitted
    }

    fn fail(&mut self, error: TraversalError) -> Option<Result<Position, TraversalError>> {
        self.done = true;
        Some(Err(error))
    }

    fn open_edge(&self) -> Option<Edge> {
        let Position { row, col } = self.position;
        let mask = self.grid.cells()[self.grid.index_of(row, col)];
        let orientation = self.grid.orientation(row, col);

        let mut edge = self.entry;
        for _ in 0..Edge::ALL.len() {
            edge = next_edge(edge, orientation, self.hand);
            if !mask.has_wall(edge) {
                return Some(edge);
            }
        }
        None
    }
}

impl Iterator for Walker<'_> {
    type Item = Result<Position, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(error) = self.pending.take() {
            return self.fail(error);
        }

        let current = self.position;
        if !self.grid.contains(current.row, current.col) {
            debug!("Left the grid at {} after {} cells", current, self.emitted);
            self.done = true;
            return None;
        }

        if let Some(limit) = self.step_limit
            && self.emitted >= limit
        {
            return self.fail(TraversalError::StepLimitExceeded { limit });
        }
        if let Some(seen) = &mut self.seen
            && !seen.insert((current, self.entry))
        {
            return self.fail(TraversalError::Cycle {
                row: current.row,
                col: current.col,
            });
        }

        self.emitted += 1;
        match self.open_edge() {
            Some(edge) => {
                let Step {
                    d_row,
                    d_col,
                    entry,
                } = transition(self.grid.orientation(current.row, current.col), edge);
                self.position = Position::new(
                    current.row.saturating_add_signed(d_row),
                    current.col.saturating_add_signed(d_col),
                );
                self.entry = entry;
                trace!("{} -> {} via {:?}", current, self.position, edge);
            }
            None => {
                self.pending = Some(TraversalError::NoOpenEdge {
                    row: current.row,
                    col: current.col,
                });
            }
        }

        Some(Ok(current))
    }
}

impl FusedIterator for Walker<'_> {}
