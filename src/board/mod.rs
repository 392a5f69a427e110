//! Board grid: which piece occupies which square.

mod grid;

pub use grid::BoardState;
