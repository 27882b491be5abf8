pub mod error;
pub mod generator;
pub mod grid;
pub mod maze;
pub mod solver;
