//! Regular tile grids laid over a sprite sheet
//!
//! Tiles share one size: the image dimension divided by the tile count, rounded
//! down. Remainder pixels along the right and bottom edges belong to no tile.

use crate::io::configuration::MAX_TILE_ASPECT_RATIO;
use crate::io::error::{Result, detection_failed, invalid_parameter};

/// Pixel rectangle of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Zero-based column of the tile within the grid
    pub column: usize,
    /// Zero-based row of the tile within the grid
    pub row: usize,
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Column and row layout of equally sized tiles over an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    columns: usize,
    rows: usize,
    tile_width: u32,
    tile_height: u32,
}

impl TileGrid {
    /// Build a grid from user-supplied tile counts
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if either count is zero or exceeds the
    /// number of pixels along its dimension
    pub fn from_counts(width: u32, height: u32, columns: usize, rows: usize) -> Result<Self> {
        if let Some(reason) = count_problem(width, columns) {
            return Err(invalid_parameter("columns", &columns, &reason));
        }
        if let Some(reason) = count_problem(height, rows) {
            return Err(invalid_parameter("rows", &rows, &reason));
        }

        Ok(Self::new_unchecked(width, height, columns, rows))
    }

    /// Build a grid from automatically detected tile counts
    ///
    /// Detected counts are held to a stricter standard than manual ones: tiles
    /// much longer on one side than the other indicate that the width and height
    /// estimates disagree.
    ///
    /// # Errors
    ///
    /// Returns a detection failure if either count is out of range or the
    /// resulting tile aspect ratio exceeds the configured maximum
    pub fn from_detected_counts(
        width: u32,
        height: u32,
        columns: usize,
        rows: usize,
    ) -> Result<Self> {
        let grid = Self::from_partially_detected_counts(width, height, columns, rows)?;
        let aspect_ratio = grid.aspect_ratio();
        if aspect_ratio > MAX_TILE_ASPECT_RATIO {
            return Err(detection_failed(
                columns,
                rows,
                &format!(
                    "{}x{} pixel tiles have aspect ratio {aspect_ratio:.1}, above {MAX_TILE_ASPECT_RATIO}",
                    grid.tile_width, grid.tile_height
                ),
            ));
        }

        Ok(grid)
    }

    /// Build a grid where one count was entered manually and the other detected
    ///
    /// A manual count pins one tile side, so the aspect ratio carries no
    /// information about whether the two estimates agree and is not checked.
    ///
    /// # Errors
    ///
    /// Returns a detection failure if either count is out of range
    pub fn from_partially_detected_counts(
        width: u32,
        height: u32,
        columns: usize,
        rows: usize,
    ) -> Result<Self> {
        if let Some(reason) =
            count_problem(width, columns).or_else(|| count_problem(height, rows))
        {
            return Err(detection_failed(columns, rows, &reason));
        }

        Ok(Self::new_unchecked(width, height, columns, rows))
    }

    const fn new_unchecked(width: u32, height: u32, columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            tile_width: width / columns as u32,
            tile_height: height / rows as u32,
        }
    }

    /// Number of tile columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of tile rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Width of every tile in pixels
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Height of every tile in pixels
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Total number of tiles
    pub const fn total(&self) -> usize {
        self.columns * self.rows
    }

    /// Ratio of the longer tile side to the shorter one
    pub fn aspect_ratio(&self) -> f64 {
        let (w, h) = (f64::from(self.tile_width), f64::from(self.tile_height));
        w.max(h) / w.min(h)
    }

    /// Tile rectangles in row-major order (rows outer, columns inner)
    pub fn tiles(&self) -> impl Iterator<Item = TileRect> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| TileRect {
                column,
                row,
                x: column as u32 * self.tile_width,
                y: row as u32 * self.tile_height,
                width: self.tile_width,
                height: self.tile_height,
            })
        })
    }
}

fn count_problem(pixels: u32, count: usize) -> Option<String> {
    if count == 0 {
        Some("must be greater than zero".to_string())
    } else if count > pixels as usize {
        Some(format!("exceeds the {pixels} pixel image dimension"))
    } else {
        None
    }
}
