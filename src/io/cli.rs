//! Command-line interface for slicing sprite sheets, singly or in batches

use crate::analysis::estimator::{TileSizeEstimator, tile_count};
use crate::analysis::projection::CollapseAxis;
use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{Result, WithContext, path_error};
use crate::io::image::{SpriteSheet, export_tiles, output_directory};
use crate::io::progress::ProgressManager;
use crate::spatial::TileGrid;
use clap::Parser;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "spriteslice")]
#[command(
    author,
    version,
    about = "Slice sprite sheets into tiles, detecting the tile grid from transparency"
)]
/// Command-line arguments for the sprite sheet slicer
pub struct Cli {
    /// Sprite sheet image or directory of sheets to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of tile columns (skips horizontal detection)
    #[arg(short = 'x', long)]
    pub columns: Option<usize>,

    /// Number of tile rows (skips vertical detection)
    #[arg(short = 'y', long)]
    pub rows: Option<usize>,

    /// Directory receiving the output folders (defaults to each sheet's directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Report the tile grid without writing any tiles
    #[arg(short, long)]
    pub detect_only: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process sheets even if their output folder exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output folders should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.detect_only
    }
}

/// Check whether `path` names a sprite sheet format the slicer reads
pub fn is_supported_sheet(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

// Output folders and tile files are named after the stem alone, so hero.gif
// and hero.png would write into each other's folder
fn check_distinct_stems(files: &[PathBuf]) -> Result<()> {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::new();

    for file in files {
        let stem = file.file_stem().unwrap_or_default();
        if let Some(previous) = seen.insert(stem, file.as_path()) {
            return Err(path_error(
                file,
                &format!(
                    "Shares the output name '{}' with {}; rename one of the sheets",
                    stem.to_string_lossy(),
                    previous.display()
                ),
            ));
        }
    }

    Ok(())
}

/// Application state for one slicing run
///
/// Owns the parsed options, the tile size estimator and the progress display,
/// and threads them through every sheet it processes
pub struct FileProcessor {
    cli: Cli,
    estimator: TileSizeEstimator,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            estimator: TileSizeEstimator::new(),
            progress_manager,
        }
    }

    /// Process sheets according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, tile detection or tile export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if is_supported_sheet(target) {
                Ok(vec![target.clone()])
            } else {
                Err(path_error(
                    target,
                    "Target file must be a PNG, JPEG, BMP or GIF image",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if path.is_file() && is_supported_sheet(&path) {
                    files.push(path);
                }
            }
            files.sort();
            check_distinct_stems(&files)?;
            Ok(files)
        } else {
            Err(path_error(
                target,
                "Target must be an image file or directory",
            ))
        }
    }

    /// Determine the tile grid for a sheet
    ///
    /// Manual counts win; detection only runs for axes without one. When both
    /// counts are manual the alpha mask is never built, and the tile aspect
    /// check only applies when both counts were detected.
    ///
    /// # Errors
    ///
    /// Returns an error if a manual count is invalid, an axis shows no
    /// periodicity, or the detected counts are implausible
    pub fn resolve_grid(&mut self, sheet: &SpriteSheet) -> Result<TileGrid> {
        let (width, height) = sheet.dimensions();

        if let (Some(columns), Some(rows)) = (self.cli.columns, self.cli.rows) {
            return TileGrid::from_counts(width, height, columns, rows);
        }

        // A bad manual count is reported as such, not as a detection failure
        if let Some(columns) = self.cli.columns {
            TileGrid::from_counts(width, height, columns, 1)?;
        }
        if let Some(rows) = self.cli.rows {
            TileGrid::from_counts(width, height, 1, rows)?;
        }

        let mask = sheet.alpha_mask();
        let columns = match self.cli.columns {
            Some(columns) => columns,
            None => tile_count(width, self.estimator.estimate(&mask, CollapseAxis::Rows)?),
        };
        let rows = match self.cli.rows {
            Some(rows) => rows,
            None => tile_count(height, self.estimator.estimate(&mask, CollapseAxis::Columns)?),
        };

        if self.cli.columns.is_none() && self.cli.rows.is_none() {
            TileGrid::from_detected_counts(width, height, columns, rows)
        } else {
            TileGrid::from_partially_detected_counts(width, height, columns, rows)
        }
    }

    // Allow print for the detection report
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let sheet = SpriteSheet::open(input_path)?;
        let grid = self.resolve_grid(&sheet)?;

        if self.cli.detect_only {
            let (width, height) = sheet.dimensions();
            println!(
                "{}: dimensions {width}x{height}, tiles {} x {} of {}x{} px, total images {}",
                input_path.display(),
                grid.columns(),
                grid.rows(),
                grid.tile_width(),
                grid.tile_height(),
                grid.total()
            );
            return Ok(());
        }

        let destination = output_directory(input_path, &grid, self.cli.output.as_deref());
        if self.cli.skip_existing() && destination.exists() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_sheet(&format!(
                    "Skipping: {} (output exists at {})",
                    input_path.display(),
                    destination.display()
                ));
            }
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_sheet(input_path, grid.total());
        }

        let progress = self.progress_manager.as_ref();
        let written = export_tiles(&sheet, &grid, &destination, |written| {
            if let Some(pm) = progress {
                pm.tile_written(written);
            }
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_sheet(&format!(
                "Extracted {written} tiles from {} into {}",
                input_path.display(),
                destination.display()
            ));
        }

        Ok(())
    }
}
