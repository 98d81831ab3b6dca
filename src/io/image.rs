//! Sprite sheet loading, alpha mask extraction and tile export

use crate::io::configuration::{ALPHA_SCALE, OUTPUT_EXTENSION};
use crate::io::error::{Result, SliceError, WithContext};
use crate::spatial::TileGrid;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// A decoded sprite sheet together with the path it came from
pub struct SpriteSheet {
    path: PathBuf,
    pixels: RgbaImage,
}

impl SpriteSheet {
    /// Load a sprite sheet from disk, converting it to RGBA
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file at the given path cannot be opened or read
    /// - The file is not a supported image format
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| SliceError::ImageLoad {
            path: path_buf.clone(),
            source: e,
        })?;

        Ok(Self {
            path: path_buf,
            pixels: img.to_rgba8(),
        })
    }

    /// Wrap already decoded pixels
    pub fn from_rgba<P: AsRef<Path>>(path: P, pixels: RgbaImage) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pixels,
        }
    }

    /// Path the sheet was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded RGBA pixels
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Image dimensions as `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// File name without extension, used to name outputs
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    /// Alpha channel as a `(height, width)` mask normalized to `[0, 1]`
    pub fn alpha_mask(&self) -> Array2<f64> {
        let (width, height) = self.dimensions();
        let mut mask = Array2::zeros((height as usize, width as usize));

        for (x, y, pixel) in self.pixels.enumerate_pixels() {
            let Rgba([_, _, _, alpha]) = *pixel;
            if let Some(value) = mask.get_mut((y as usize, x as usize)) {
                *value = f64::from(alpha) / ALPHA_SCALE;
            }
        }

        mask
    }
}

/// Folder receiving the tiles of `sheet_path` sliced with `grid`
///
/// Named `<stem>_XTiles<columns>YTiles<rows>_TotalImages<total>` and placed in
/// `output_root` when given, otherwise next to the sheet.
pub fn output_directory(sheet_path: &Path, grid: &TileGrid, output_root: Option<&Path>) -> PathBuf {
    let stem = sheet_path.file_stem().unwrap_or_default();
    let folder_name = format!(
        "{}_XTiles{}YTiles{}_TotalImages{}",
        stem.to_string_lossy(),
        grid.columns(),
        grid.rows(),
        grid.total()
    );

    match output_root.or_else(|| sheet_path.parent()) {
        Some(parent) => parent.join(folder_name),
        None => PathBuf::from(folder_name),
    }
}

/// File name of the tile at `column`, `row`
pub fn sprite_file_name(stem: &str, column: usize, row: usize) -> String {
    format!("{stem}_{column}_{row}.{OUTPUT_EXTENSION}")
}

/// Cut `sheet` along `grid` and save every tile into `destination`
///
/// Tiles are written row by row; `on_tile` receives the running count after each
/// save. Returns the number of tiles written.
///
/// # Errors
///
/// Returns an error if:
/// - The destination directory cannot be created
/// - A tile cannot be encoded or written
pub fn export_tiles<F>(
    sheet: &SpriteSheet,
    grid: &TileGrid,
    destination: &Path,
    mut on_tile: F,
) -> Result<usize>
where
    F: FnMut(usize),
{
    std::fs::create_dir_all(destination).with_path(destination, "create directory")?;

    let stem = sheet.stem();
    let mut written = 0;

    for rect in grid.tiles() {
        let tile =
            image::imageops::crop_imm(sheet.pixels(), rect.x, rect.y, rect.width, rect.height)
                .to_image();
        let tile_path = destination.join(sprite_file_name(&stem, rect.column, rect.row));

        tile.save(&tile_path).map_err(|e| SliceError::ImageExport {
            path: tile_path.clone(),
            source: e,
        })?;

        written += 1;
        on_tile(written);
    }

    Ok(written)
}
