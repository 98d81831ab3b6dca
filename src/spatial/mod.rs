//! Tile grid geometry for slicing sprite sheets

/// Tile counts, tile dimensions and tile rectangles
pub mod grid;

pub use grid::{TileGrid, TileRect};
