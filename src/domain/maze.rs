//! The maze graph: which grid-adjacent cells are joined by a passage.
//!
//! Storage is sparse: one 4-bit mask per cell, one bit per `Direction`.
//! A set bit means the wall on that side has been carved away. Every carve
//! sets the bit on both cells, so `has_wall_between(a, b) == has_wall_between(b, a)`.
//!
//! Only the generator mutates a maze. Once `create_maze` returns, the graph
//! is read-only for its whole lifetime; a new difficulty means a new `Maze`.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::error::MazeError;
use super::generator;
use super::grid::{self, Cell, Direction};
use super::solver;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    size: usize,
    cell_count: usize,
    passages: Vec<u8>,
    start: Cell,
    goal: Cell,
}

/// Build and carve a maze of `size × size` cells.
///
/// With `Some(seed)` the result is reproducible; with `None` the thread-local
/// generator supplies the randomness.
pub fn create_maze(size: usize, seed: Option<u64>) -> Result<Maze, MazeError> {
    let maze = match seed {
        Some(seed) => generator::generate(size, &mut StdRng::seed_from_u64(seed))?,
        None => generator::generate(size, &mut rand::rng())?,
    };
    debug!(
        "created {}x{} maze (seed {:?}, {} passages)",
        size,
        size,
        seed,
        maze.passage_count()
    );
    Ok(maze)
}

impl Maze {
    /// A maze with every grid-adjacent pair walled off.
    pub(crate) fn walled(size: usize) -> Result<Self, MazeError> {
        let cell_count = size
            .checked_mul(size)
            .filter(|&count| count > 0)
            .ok_or(MazeError::InvalidSize(size))?;
        Ok(Maze {
            size,
            cell_count,
            passages: vec![0; cell_count],
            start: 0,
            goal: cell_count - 1,
        })
    }

    /// Remove the wall between two grid-adjacent cells (both sides).
    pub(crate) fn carve(&mut self, a: Cell, b: Cell) {
        let dir = grid::direction_between(a, b, self.size)
            .unwrap_or_else(|| panic!("cells {a} and {b} are not grid-adjacent"));
        self.passages[a] |= dir.bit();
        self.passages[b] |= dir.opposite().bit();
    }

    // ── Dimensions ──

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell < self.cell_count
    }

    // ── Endpoints ──

    /// Top-left cell; where a walk begins.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Bottom-right cell.
    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn is_at_goal(&self, cell: Cell) -> bool {
        cell == self.goal
    }

    // ── Walls and passages ──

    /// True unless a passage joins `a` and `b`.
    /// Pairs that are not grid-adjacent always count as walled.
    ///
    /// Panics if either cell is outside the maze.
    pub fn has_wall_between(&self, a: Cell, b: Cell) -> bool {
        self.check(a);
        self.check(b);
        match grid::direction_between(a, b, self.size) {
            Some(dir) => self.passages[a] & dir.bit() == 0,
            None => true,
        }
    }

    /// Whether a walker at `cell` may step in `dir`.
    pub fn can_move(&self, cell: Cell, dir: Direction) -> bool {
        self.check(cell);
        self.passages[cell] & dir.bit() != 0
    }

    /// Grid neighbours of `cell` with no wall in between, in `Direction::ALL` order.
    ///
    /// Panics if `cell` is outside the maze.
    pub fn reachable_neighbors(&self, cell: Cell) -> Vec<Cell> {
        self.check(cell);
        Direction::ALL
            .iter()
            .filter(|dir| self.passages[cell] & dir.bit() != 0)
            .filter_map(|&dir| grid::neighbor_in(cell, dir, self.size))
            .collect()
    }

    /// Number of carved passages (each counted once).
    pub fn passage_count(&self) -> usize {
        let ends: u32 = self.passages.iter().map(|m| m.count_ones()).sum();
        ends as usize / 2
    }

    /// Shortest path from `start()` to `goal()`.
    pub fn solve_route(&self) -> Result<Vec<Cell>, MazeError> {
        solver::solve(self, self.start, self.goal)
    }

    fn check(&self, cell: Cell) {
        assert!(
            self.contains(cell),
            "cell {} out of range (maze has {} cells)",
            cell,
            self.cell_count
        );
    }
}
