//! Events emitted by a walk step.
//! The presentation layer consumes these for feedback (scoring, sound, hints).

use crate::domain::grid::{Cell, Direction};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WalkEvent {
    /// A wall or the maze edge blocked the move.
    Bumped { at: Cell, dir: Direction },
    Moved { from: Cell, to: Cell },
    LeftPath { at: Cell },
    RejoinedPath { at: Cell },
    GoalReached { at: Cell, steps: usize },
}
