//! Sprite sheet slicing with frequency-domain tile size detection
//!
//! The alpha channel of a sheet is projected onto each axis, the dominant
//! non-zero frequency of that projection gives the repeating tile size, and the
//! sheet is cut into a regular grid of tiles written out as individual images.

#![forbid(unsafe_code)]

/// Alpha projections, spectra and tile size estimation
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Tile grid geometry
pub mod spatial;

pub use io::error::{Result, SliceError};
