//! Text rendering of a maze for diagnostics.
//!
//! Layout (one text row of cells, then one row of floors, per maze line):
//!
//!   MazeSize = 2x2, # of Cells = 4
//!   |---|---|
//!   | X   X |
//!   |   |   |
//!   |   | X |
//!   |---|---|
//!
//! Text line `line` holds the cells `grid::cell_at(j, line, size)`, so stepping
//! right adds 1 and stepping down adds `size`, matching `domain::grid`.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::domain::grid::{self, Cell};
use crate::domain::maze::Maze;

const PATH_LEGEND: &str = "Cell on shortest path is marked with an 'X'.";
const PATH_COLOR: Color = Color::Rgb { r: 0, g: 106, b: 108 };
const WALL_COLOR: Color = Color::Grey;

/// Render `maze` as ASCII art, marking the cells of `path` with `X`.
pub fn render_ascii(maze: &Maze, path: Option<&[Cell]>) -> String {
    let size = maze.size();
    let count = maze.cell_count();
    let mut on_path = vec![false; count];
    if let Some(path) = path {
        for &cell in path.iter().filter(|&&c| c < count) {
            on_path[cell] = true;
        }
    }

    let mut out = String::with_capacity((size * 4 + 2) * (size * 2 + 2) + 64);
    out.push_str(&format!("MazeSize = {size}x{size}, # of Cells = {count}\n"));
    out.push_str(&"|---".repeat(size));
    out.push_str("|\n");

    for line in 0..size {
        out.push('|');
        for j in 0..size {
            let cell = grid::cell_at(j, line, size);
            out.push_str(if on_path[cell] { " X " } else { "   " });
            let open_right = j + 1 < size && !maze.has_wall_between(cell, cell + 1);
            out.push(if open_right { ' ' } else { '|' });
        }
        out.push('\n');

        for j in 0..size {
            let cell = grid::cell_at(j, line, size);
            out.push('|');
            let open_below = line + 1 < size && !maze.has_wall_between(cell, cell + size);
            out.push_str(if open_below { "   " } else { "---" });
        }
        out.push_str("|\n");
    }

    if path.is_some() {
        out.push_str(PATH_LEGEND);
        out.push('\n');
    }
    out
}

/// Write a rendering to a terminal, colouring walls and path markers.
pub fn print_maze<W: Write>(out: &mut W, text: &str, color: bool) -> io::Result<()> {
    if !color {
        out.write_all(text.as_bytes())?;
        return out.flush();
    }

    // the legend mentions 'X' too; only colour the grid
    let (grid, legend) = match text.find(PATH_LEGEND) {
        Some(i) => text.split_at(i),
        None => (text, ""),
    };

    let mut header = true;
    for ch in grid.chars() {
        if header {
            queue!(out, Print(ch))?;
            header = ch != '\n';
            continue;
        }
        match ch {
            'X' => queue!(out, SetForegroundColor(PATH_COLOR), Print(ch), ResetColor)?,
            '|' | '-' => queue!(out, SetForegroundColor(WALL_COLOR), Print(ch), ResetColor)?,
            _ => queue!(out, Print(ch))?,
        }
    }
    queue!(out, Print(legend))?;
    out.flush()
}
