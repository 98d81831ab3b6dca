//! Error types and context management for slicing operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder path used until a caller attaches real context
const UNKNOWN_PATH: &str = "<unknown>";

/// Main error type for all slicing operations
#[derive(Debug)]
pub enum SliceError {
    /// Failed to load a sprite sheet from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save an extracted tile
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// User-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Mask data doesn't meet estimator requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// No reliable periodicity can be found along an axis
    ///
    /// Raised when:
    /// - The projection has fewer than two samples
    /// - The projection is numerically constant (no alpha variation)
    DegenerateInput {
        /// Direction of the analyzed periodicity
        axis: &'static str,
        /// Description of the degeneracy
        reason: String,
    },

    /// Detected tile counts cannot describe a plausible grid
    DetectionFailed {
        /// Detected number of tile columns
        columns: usize,
        /// Detected number of tile rows
        rows: usize,
        /// Explanation of why the counts were rejected
        reason: String,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::DegenerateInput { axis, reason } => {
                write!(
                    f,
                    "No {axis} tile periodicity found: {reason} (enter tile counts manually with --columns/--rows)"
                )
            }
            Self::DetectionFailed {
                columns,
                rows,
                reason,
            } => {
                write!(
                    f,
                    "Tile detection failed for {columns}x{rows} tiles: {reason} (enter tile counts manually with --columns/--rows)"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for slicing results
pub type Result<T> = std::result::Result<T, SliceError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File or directory the failing operation touched
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Attaches path and operation details to errors converted with `?`
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add path and operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<SliceError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors built from foreign error types carry placeholder context
            match &mut error {
                SliceError::ImageLoad { path, .. } | SliceError::ImageExport { path, .. } => {
                    if let Some(ref context_path) = context.path {
                        path.clone_from(context_path);
                    }
                }
                SliceError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(ref context_path) = context.path {
                        path.clone_from(context_path);
                    }
                    if let Some(context_operation) = context.operation {
                        *operation = context_operation;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            operation: Some(operation),
        })
    }
}

impl From<image::ImageError> for SliceError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for SliceError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SliceError {
    SliceError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate input error for the given periodicity direction
pub fn degenerate_input(axis: &'static str, reason: &impl ToString) -> SliceError {
    SliceError::DegenerateInput {
        axis,
        reason: reason.to_string(),
    }
}

/// Create a detection failure error
pub fn detection_failed(columns: usize, rows: usize, reason: &impl ToString) -> SliceError {
    SliceError::DetectionFailed {
        columns,
        rows,
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SliceError {
    SliceError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable target path
pub fn path_error(path: &Path, reason: &str) -> SliceError {
    SliceError::InvalidParameter {
        parameter: "path",
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}
