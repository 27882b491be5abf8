//! A walk: one walker moving through one maze, one cell per step.
//!
//! Processing order for `step`:
//!   1. Ignore input once the goal is reached
//!   2. Reject moves blocked by a wall or the maze edge
//!   3. Move and feed the new cell to the path tracker
//!   4. Report path transitions and goal arrival
//!
//! Changing difficulty means building a new `Walk` around a new `Maze`.

use log::info;

use crate::domain::error::MazeError;
use crate::domain::grid::{self, Cell, Direction};
use crate::domain::maze::Maze;
use super::event::WalkEvent;
use super::tracker::{PathState, PathTracker};

#[derive(Clone, Debug)]
pub struct Walk {
    maze: Maze,
    tracker: PathTracker,
    position: Cell,
    steps: usize,
    finished: bool,
}

impl Walk {
    /// Place a walker on the maze start with the start → goal route solved.
    pub fn new(maze: Maze) -> Result<Self, MazeError> {
        let route = maze.solve_route()?;
        let tracker = PathTracker::new(route)?;
        let position = maze.start();
        let finished = maze.is_at_goal(position);
        Ok(Walk { maze, tracker, position, steps: 0, finished })
    }

    pub fn step(&mut self, dir: Direction) -> Vec<WalkEvent> {
        if self.finished {
            return vec![];
        }

        let from = self.position;
        let to = match grid::neighbor_in(from, dir, self.maze.size()) {
            Some(to) if self.maze.can_move(from, dir) => to,
            _ => return vec![WalkEvent::Bumped { at: from, dir }],
        };

        let before = self.tracker.state();
        let after = self.tracker.arrived_at(to);
        self.position = to;
        self.steps += 1;

        let mut events = vec![WalkEvent::Moved { from, to }];
        match (before, after) {
            (PathState::OnPath, PathState::OffPath) => {
                events.push(WalkEvent::LeftPath { at: to });
            }
            (PathState::OffPath, PathState::OnPath) => {
                events.push(WalkEvent::RejoinedPath { at: to });
            }
            _ => {}
        }

        if self.maze.is_at_goal(to) {
            self.finished = true;
            info!("goal reached in {} steps", self.steps);
            events.push(WalkEvent::GoalReached { at: to, steps: self.steps });
        }
        events
    }

    /// Take steps until the goal is reached or the directions run out.
    pub fn replay(&mut self, dirs: &[Direction]) -> Vec<WalkEvent> {
        let mut events = Vec::new();
        for &dir in dirs {
            if self.finished {
                break;
            }
            events.extend(self.step(dir));
        }
        events
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn tracker(&self) -> &PathTracker {
        &self.tracker
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Directions that walk `path` cell by cell. Stops at the first gap.
pub fn directions_along(path: &[Cell], size: usize) -> Vec<Direction> {
    path.windows(2)
        .map_while(|pair| grid::direction_between(pair[0], pair[1], size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid::Direction::*;

    /// 3×3 comb: spine 0-3-6 going down, teeth going right.
    ///
    ///   0 ─ 1 ─ 2
    ///   │
    ///   3 ─ 4 ─ 5
    ///   │
    ///   6 ─ 7 ─ 8
    fn comb_walk() -> Walk {
        let mut m = Maze::walled(3).unwrap();
        for (a, b) in [(0, 3), (3, 6), (0, 1), (1, 2), (3, 4), (4, 5), (6, 7), (7, 8)] {
            m.carve(a, b);
        }
        Walk::new(m).unwrap()
    }

    #[test]
    fn new_walk_starts_at_start_on_path() {
        let w = comb_walk();
        assert_eq!(w.position(), 0);
        assert_eq!(w.tracker().remaining_path(), vec![0, 3, 6, 7, 8]);
        assert!(w.tracker().is_on_path());
        assert!(!w.is_finished());
    }

    #[test]
    fn walls_block_movement() {
        let mut w = comb_walk();
        assert_eq!(w.step(Up), vec![WalkEvent::Bumped { at: 0, dir: Up }]);
        assert_eq!(w.step(Left), vec![WalkEvent::Bumped { at: 0, dir: Left }]);
        w.step(Right);
        // 1 → 4 is walled
        assert_eq!(w.step(Down), vec![WalkEvent::Bumped { at: 1, dir: Down }]);
        assert_eq!(w.position(), 1);
        assert_eq!(w.steps(), 1);
    }

    #[test]
    fn detour_and_return_emit_transitions() {
        let mut w = comb_walk();
        assert_eq!(
            w.step(Right),
            vec![WalkEvent::Moved { from: 0, to: 1 }, WalkEvent::LeftPath { at: 1 }]
        );
        assert_eq!(w.step(Right), vec![WalkEvent::Moved { from: 1, to: 2 }]);
        // stepping back toward the route already counts as on path
        assert_eq!(
            w.step(Left),
            vec![WalkEvent::Moved { from: 2, to: 1 }, WalkEvent::RejoinedPath { at: 1 }]
        );
        assert_eq!(w.step(Left), vec![WalkEvent::Moved { from: 1, to: 0 }]);
        assert!(w.tracker().is_on_path());
        assert_eq!(w.tracker().hint(), Some(3));
    }

    #[test]
    fn following_directions_reaches_goal() {
        let mut w = comb_walk();
        let dirs = directions_along(&w.tracker().remaining_path(), 3);
        assert_eq!(dirs, vec![Down, Down, Right, Right]);

        let events = w.replay(&dirs);
        assert_eq!(events.last(), Some(&WalkEvent::GoalReached { at: 8, steps: 4 }));
        assert!(w.is_finished());
        assert!(w.tracker().is_complete());
        assert_eq!(w.tracker().breadcrumbs(), &[0, 3, 6, 7, 8]);
        // finished walks ignore input
        assert!(w.step(Left).is_empty());
    }

    #[test]
    fn single_cell_maze_is_finished_immediately() {
        let w = Walk::new(Maze::walled(1).unwrap()).unwrap();
        assert!(w.is_finished());
    }

    #[test]
    fn directions_stop_at_gap() {
        assert_eq!(directions_along(&[0, 1, 5, 6], 3), vec![Right]);
        assert!(directions_along(&[4], 3).is_empty());
    }
}
