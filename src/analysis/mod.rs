//! Tile size estimation from alpha-channel periodicity

/// Mean projection of a mask onto one axis
pub mod projection;
/// Magnitude spectra and peak picking
pub mod spectrum;
/// Tile size estimation built on projections and spectra
pub mod estimator;
