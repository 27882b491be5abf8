//! Grid topology: pure index arithmetic over an N×N grid of cells.
//!
//! A cell is a linear index in `[0, size²)`.
//!   - row    = `cell % size`
//!   - column = `cell / size`
//!
//! Stepping `Right` adds 1 and `Down` adds `size`, so on screen a "row" runs
//! vertically. Renderers rely on this mapping; keep it.

/// Linear cell index.
pub type Cell = usize;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Neighbour enumeration order. Fixed so that generation is reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }

    /// Bit used by the sparse passage mask in `Maze`.
    pub(crate) fn bit(self) -> u8 {
        match self {
            Direction::Right => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Up => 0b1000,
        }
    }
}

/// The cell one step from `cell` in `dir`, or `None` at the grid boundary.
pub fn neighbor_in(cell: Cell, dir: Direction, size: usize) -> Option<Cell> {
    let count = size.checked_mul(size)?;
    if cell >= count {
        return None;
    }
    match dir {
        // same line only: stepping off the last column would wrap
        Direction::Right => {
            let next = cell + 1;
            (next < count && next % size != 0).then_some(next)
        }
        Direction::Down => (cell + size < count).then(|| cell + size),
        Direction::Left => (cell >= 1 && cell % size != 0).then(|| cell - 1),
        Direction::Up => cell.checked_sub(size),
    }
}

/// All grid-adjacent cells, in `Direction::ALL` order.
pub fn neighbors(cell: Cell, size: usize) -> Vec<Cell> {
    Direction::ALL
        .iter()
        .filter_map(|&dir| neighbor_in(cell, dir, size))
        .collect()
}

/// Direction leading from `from` to `to`, if they are grid-adjacent.
pub fn direction_between(from: Cell, to: Cell, size: usize) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&dir| neighbor_in(from, dir, size) == Some(to))
}

/// Cell at `row` (`cell % size`) and column (`cell / size`).
pub fn cell_at(row: usize, col: usize, size: usize) -> Cell {
    col * size + row
}
