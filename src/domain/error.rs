//! Error types for maze construction, solving and tracking.

use thiserror::Error;

use super::grid::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A maze needs at least one cell.
    #[error("invalid maze size: {0} (must be at least 1)")]
    InvalidSize(usize),

    #[error("cell {cell} out of range (maze has {cell_count} cells)")]
    CellOutOfRange {
        cell: Cell,
        cell_count: usize,
    },

    /// A tracker was handed a path with no cells.
    #[error("solution path is empty")]
    EmptyPath,

    /// Only possible if the passage graph is not a spanning tree.
    #[error("no passage connects cell {start} to cell {goal}")]
    Unreachable {
        start: Cell,
        goal: Cell,
    },
}
