//! Randomized Prim's algorithm.
//!
//! Grows a spanning tree outward from a random seed cell:
//!   1. Seed cell joins the maze; its neighbours form the frontier.
//!   2. A random frontier cell is linked to a random neighbour already in the
//!      maze, and its own outside neighbours join the frontier.
//!   3. Repeat until the frontier is empty.
//!
//! Every cell is linked exactly once, so a `size²`-cell maze ends up with
//! `size² - 1` passages and no cycles.
//!
//! Randomness is injected so tests can pin a seed.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::error::MazeError;
use super::grid::{self, Cell};
use super::maze::Maze;

pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Maze, MazeError> {
    let mut maze = Maze::walled(size)?;
    let count = maze.cell_count();

    let mut in_maze = vec![false; count];
    let mut in_frontier = vec![false; count];
    let mut frontier: Vec<Cell> = Vec::with_capacity(count);

    let seed_cell = rng.random_range(0..count);
    in_maze[seed_cell] = true;
    for n in grid::neighbors(seed_cell, size) {
        in_frontier[n] = true;
        frontier.push(n);
    }

    let mut linked: Vec<Cell> = Vec::with_capacity(4);
    while !frontier.is_empty() {
        let idx = rng.random_range(0..frontier.len());
        let cell = frontier.swap_remove(idx);
        in_frontier[cell] = false;

        // a cell can be reached from several sides; only the first pick counts
        if in_maze[cell] {
            continue;
        }

        let neighbors = grid::neighbors(cell, size);
        linked.clear();
        linked.extend(neighbors.iter().copied().filter(|&n| in_maze[n]));
        if let Some(&anchor) = linked.choose(rng) {
            maze.carve(anchor, cell);
        }

        for n in neighbors {
            if !in_maze[n] && !in_frontier[n] {
                in_frontier[n] = true;
                frontier.push(n);
            }
        }
        in_maze[cell] = true;
    }

    debug!(
        "prim: seeded at cell {}, carved {} passages over {} cells",
        seed_cell,
        maze.passage_count(),
        count
    );
    Ok(maze)
}
