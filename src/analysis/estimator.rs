//! Tile size estimation from the periodicity of alpha-channel projections
//!
//! Transparent gutters between sprites make the mean alpha along an axis rise
//! and fall once per tile. The strongest non-zero frequency of that projection
//! therefore counts the tiles across the sheet, and the projection length over
//! that count is the tile size.

use crate::analysis::projection::{CollapseAxis, is_flat, project};
use crate::analysis::spectrum::{SpectrumAnalyzer, dominant_frequency};
use crate::io::configuration::{FLATNESS_TOLERANCE, MIN_PROJECTION_LENGTH};
use crate::io::error::{Result, SliceError, computation_error, degenerate_input};
use ndarray::Array2;

/// Estimates repeating tile sizes, sharing FFT plans between estimates
#[derive(Default)]
pub struct TileSizeEstimator {
    analyzer: SpectrumAnalyzer,
}

impl TileSizeEstimator {
    /// Create an estimator with an empty plan cache
    pub fn new() -> Self {
        Self {
            analyzer: SpectrumAnalyzer::new(),
        }
    }

    /// Estimate the repeating tile size along the axis left after collapsing `axis`
    ///
    /// Collapsing [`CollapseAxis::Rows`] yields the tile width, collapsing
    /// [`CollapseAxis::Columns`] the tile height. The estimate is not aligned to
    /// pixel boundaries; see [`tile_count`] for the conversion to a tile count.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mask contains negative or non-finite values
    /// - The projection has fewer than two samples
    /// - The projection is constant, so no periodicity exists
    /// - The spectrum peak is not a finite number
    pub fn estimate(&mut self, mask: &Array2<f64>, axis: CollapseAxis) -> Result<f64> {
        validate_mask(mask)?;

        let projection = project(mask, axis)?;
        let length = projection.len();

        if length < MIN_PROJECTION_LENGTH {
            return Err(degenerate_input(
                axis.direction(),
                &format!(
                    "projection has {length} sample(s), at least {MIN_PROJECTION_LENGTH} are required"
                ),
            ));
        }

        if is_flat(&projection, FLATNESS_TOLERANCE) {
            return Err(degenerate_input(
                axis.direction(),
                &"alpha channel does not vary along this axis",
            ));
        }

        let magnitudes = self.analyzer.magnitudes(&projection.to_vec());
        let (peak_index, peak_magnitude) = dominant_frequency(&magnitudes).ok_or_else(|| {
            degenerate_input(axis.direction(), &"spectrum has no non-zero frequency bin")
        })?;

        if !peak_magnitude.is_finite() {
            return Err(computation_error(
                "spectrum peak",
                &format!("magnitude at bin {peak_index} is {peak_magnitude}"),
            ));
        }

        Ok(length as f64 / peak_index as f64)
    }
}

/// Estimate the repeating tile size of `mask` along one axis
///
/// Convenience wrapper building a fresh [`TileSizeEstimator`].
///
/// # Errors
///
/// Returns an error under the same conditions as [`TileSizeEstimator::estimate`]
pub fn estimate_tile_size(mask: &Array2<f64>, axis: CollapseAxis) -> Result<f64> {
    TileSizeEstimator::new().estimate(mask, axis)
}

/// Number of whole tiles of `tile_size` pixels across `total` pixels
///
/// Rounds to the nearest count. Non-finite or non-positive sizes give zero.
pub fn tile_count(total: u32, tile_size: f64) -> usize {
    if !tile_size.is_finite() || tile_size <= 0.0 {
        return 0;
    }

    (f64::from(total) / tile_size).round() as usize
}

fn validate_mask(mask: &Array2<f64>) -> Result<()> {
    if let Some(&value) = mask.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(SliceError::InvalidSourceData {
            reason: format!("mask values must be finite and non-negative, found {value}"),
        });
    }

    Ok(())
}
