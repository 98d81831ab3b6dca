//! Command-line handling, image input/output, progress display and errors

/// Command-line parsing and batch orchestration
pub mod cli;
/// Detection constants and runtime defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Sprite sheet loading and tile export
pub mod image;
/// Progress bars for batch slicing
pub mod progress;
