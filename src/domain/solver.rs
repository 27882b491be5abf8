//! Breadth-first path solver.
//!
//! BFS from `start` over open passages, recording cells in the order they
//! are dequeued and stopping as soon as `goal` comes off the queue.
//!
//! The path is rebuilt by walking that order backwards from the goal and
//! accepting each cell that is open to the current tail. In a spanning tree
//! every cell has exactly one earlier-visited open neighbour (its BFS parent),
//! so the greedy scan can never pick a wrong branch.

use std::collections::VecDeque;

use log::debug;

use super::error::MazeError;
use super::grid::Cell;
use super::maze::Maze;

/// Unique passage route from `start` to `goal`, start first, goal last.
pub fn solve(maze: &Maze, start: Cell, goal: Cell) -> Result<Vec<Cell>, MazeError> {
    for cell in [start, goal] {
        if !maze.contains(cell) {
            return Err(MazeError::CellOutOfRange { cell, cell_count: maze.cell_count() });
        }
    }

    let order = visit_order(maze, start, goal);
    if order.last() != Some(&goal) {
        return Err(MazeError::Unreachable { start, goal });
    }

    let mut path = vec![goal];
    let mut tail = goal;
    let mut open = maze.reachable_neighbors(tail);
    for &cell in order.iter().rev().skip(1) {
        if tail == start {
            break;
        }
        if open.contains(&cell) {
            path.push(cell);
            tail = cell;
            open = maze.reachable_neighbors(tail);
        }
    }
    path.reverse();

    debug!(
        "bfs {} -> {}: visited {} cells, path length {}",
        start,
        goal,
        order.len(),
        path.len()
    );
    Ok(path)
}

/// Cells in dequeue order, ending at `goal` if it was reached.
fn visit_order(maze: &Maze, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut seen = vec![false; maze.cell_count()];
    let mut queue: VecDeque<Cell> = VecDeque::with_capacity(64);
    let mut order = Vec::with_capacity(maze.cell_count());

    seen[start] = true;
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        order.push(cell);
        if cell == goal {
            break;
        }
        for n in maze.reachable_neighbors(cell) {
            if !seen[n] {
                seen[n] = true;
                queue.push_back(n);
            }
        }
    }
    order
}
