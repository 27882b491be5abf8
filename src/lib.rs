//! Perfect-maze generation, shortest-path solving and walk tracking.
//!
//! ```
//! use mazewalk::{create_maze, solve, PathTracker};
//!
//! let maze = create_maze(5, Some(7)).unwrap();
//! assert_eq!(maze.passage_count(), 24);
//!
//! let path = solve(&maze, maze.start(), maze.goal()).unwrap();
//! let mut tracker = PathTracker::new(path.clone()).unwrap();
//! if let Some(&next) = path.get(1) {
//!     tracker.arrived_at(next);
//! }
//! assert!(tracker.is_on_path());
//! ```

pub mod config;
pub mod domain;
pub mod sim;
pub mod ui;

pub use config::{Difficulty, MazewalkConfig};
pub use domain::error::MazeError;
pub use domain::grid::{neighbors, Cell, Direction};
pub use domain::maze::{create_maze, Maze};
pub use domain::solver::solve;
pub use sim::event::WalkEvent;
pub use sim::tracker::{PathState, PathTracker};
pub use sim::walk::Walk;
