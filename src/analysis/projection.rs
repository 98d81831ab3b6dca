//! Mean projection of a two-dimensional mask onto a single axis

use crate::io::error::{Result, SliceError, degenerate_input, invalid_parameter};
use ndarray::{Array1, Array2, Axis};

/// Mask axis averaged away when building a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollapseAxis {
    /// Average over rows (axis 0), leaving one sample per column
    ///
    /// The projection reveals horizontal periodicity, i.e. the tile width.
    Rows,
    /// Average over columns (axis 1), leaving one sample per row
    ///
    /// The projection reveals vertical periodicity, i.e. the tile height.
    Columns,
}

impl CollapseAxis {
    /// Numeric axis index in `(height, width)` mask layout
    pub const fn index(self) -> usize {
        match self {
            Self::Rows => 0,
            Self::Columns => 1,
        }
    }

    /// Direction of the periodicity this axis reveals
    pub const fn direction(self) -> &'static str {
        match self {
            Self::Rows => "horizontal",
            Self::Columns => "vertical",
        }
    }

    /// Equivalent `ndarray` axis
    pub const fn as_ndarray_axis(self) -> Axis {
        Axis(self.index())
    }
}

impl TryFrom<usize> for CollapseAxis {
    type Error = SliceError;

    fn try_from(axis: usize) -> Result<Self> {
        match axis {
            0 => Ok(Self::Rows),
            1 => Ok(Self::Columns),
            _ => Err(invalid_parameter(
                "axis",
                &axis,
                &"masks are two-dimensional; axis must be 0 or 1",
            )),
        }
    }
}

/// Average `mask` along `axis`
///
/// The result has one sample per entry of the other dimension: width samples
/// when collapsing rows, height samples when collapsing columns.
///
/// # Errors
///
/// Returns a degenerate input error if the collapsed axis is empty
pub fn project(mask: &Array2<f64>, axis: CollapseAxis) -> Result<Array1<f64>> {
    mask.mean_axis(axis.as_ndarray_axis()).ok_or_else(|| {
        degenerate_input(
            axis.direction(),
            &"mask has no samples along the collapsed axis",
        )
    })
}

/// Check whether the projection is numerically constant
///
/// Empty projections count as flat.
pub fn is_flat(projection: &Array1<f64>, tolerance: f64) -> bool {
    let (min, max) = projection
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    max - min <= tolerance
}
