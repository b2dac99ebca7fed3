//! The playing surface.
//!
//! ## Components
//!
//! - **position**: signed grid coordinates and card translation
//! - **grid**: bounds-checked tile occupancy, layout parsing, the board
//!   with its crown marker

pub mod grid;
pub mod position;

pub use grid::{Board, Tile, TileGrid, CROWN_START, GRID_SIZE};
pub use position::GridPosition;
