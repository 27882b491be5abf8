//! Path tracker: follows a walker against the solved route.
//!
//! ## Two stacks
//!
//!   - `route`  — solution cells from the rejoin point to the goal.
//!                Top of the stack is the walker's cell while on the path.
//!   - `detour` — cells walked since leaving the route, most recent on top.
//!
//! The remaining path (front = where the walker stands) is the detour read
//! newest-first followed by the route read top-down. Walking back along the
//! detour pops it, so returning to the route cancels the deviation.
//!
//! State: every pop moves to `OnPath`, every push to `OffPath`. Stepping
//! back along a detour therefore counts as on path before the route is
//! actually rejoined.

use log::debug;

use crate::domain::error::MazeError;
use crate::domain::grid::Cell;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathState {
    OnPath,
    OffPath,
}

#[derive(Clone, Debug)]
pub struct PathTracker {
    /// Reversed solution: goal at index 0.
    route: Vec<Cell>,
    detour: Vec<Cell>,
    state: PathState,
    breadcrumbs: Vec<Cell>,
}

impl PathTracker {
    /// Start tracking a solved path. The walker is assumed to stand on `path[0]`.
    pub fn new(path: Vec<Cell>) -> Result<Self, MazeError> {
        let first = *path.first().ok_or(MazeError::EmptyPath)?;
        let mut route = path;
        route.reverse();
        Ok(PathTracker {
            route,
            detour: Vec::new(),
            state: PathState::OnPath,
            breadcrumbs: vec![first],
        })
    }

    /// Cell the walker currently occupies.
    pub fn current(&self) -> Cell {
        match self.detour.last() {
            Some(&cell) => cell,
            // route is never emptied: popping requires a next step below the top
            None => self.route[self.route.len() - 1],
        }
    }

    /// The walker has moved to `cell`.
    ///
    /// Stepping onto the next cell of the remaining path consumes the current
    /// one and moves to `OnPath`; any other cell extends the detour and moves
    /// to `OffPath`. Re-reporting the current cell changes nothing.
    pub fn arrived_at(&mut self, cell: Cell) -> PathState {
        if cell == self.current() {
            return self.state;
        }
        if self.hint() == Some(cell) {
            if self.detour.pop().is_none() {
                self.route.pop();
            }
            self.state = PathState::OnPath;
        } else {
            self.detour.push(cell);
            self.state = PathState::OffPath;
        }
        self.breadcrumbs.push(cell);

        debug!("walker at {} ({:?}, {} cells to go)", cell, self.state, self.remaining_len());
        self.state
    }

    pub fn state(&self) -> PathState {
        self.state
    }

    pub fn is_on_path(&self) -> bool {
        self.state() == PathState::OnPath
    }

    /// Remaining path, starting at the walker's cell and ending at the goal.
    pub fn remaining_path(&self) -> Vec<Cell> {
        self.detour
            .iter()
            .rev()
            .chain(self.route.iter().rev())
            .copied()
            .collect()
    }

    pub fn remaining_len(&self) -> usize {
        self.detour.len() + self.route.len()
    }

    /// Next step toward the goal; `None` once the goal is reached.
    pub fn hint(&self) -> Option<Cell> {
        match self.detour.len() {
            0 => self.route.len().checked_sub(2).map(|i| self.route[i]),
            1 => self.route.last().copied(),
            n => Some(self.detour[n - 2]),
        }
    }

    /// The walker stands on the goal.
    pub fn is_complete(&self) -> bool {
        self.detour.is_empty() && self.route.len() == 1
    }

    /// Every cell the walker has occupied, in order, starting cell included.
    pub fn breadcrumbs(&self) -> &[Cell] {
        &self.breadcrumbs
    }
}
