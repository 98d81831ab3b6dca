//! Magnitude spectra of real signals and dominant frequency selection

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

/// Number of bins in the spectrum of a real signal of length `signal_len`
pub const fn spectrum_len(signal_len: usize) -> usize {
    signal_len / 2 + 1
}

/// Computes magnitude spectra, reusing FFT plans across calls
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f64>,
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumAnalyzer {
    /// Create an analyzer with an empty plan cache
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Magnitudes of the real discrete Fourier transform of `signal`
    ///
    /// Returns bins `0..=n/2`; the remaining bins of a real input mirror these.
    /// An empty signal yields an empty spectrum.
    pub fn magnitudes(&mut self, signal: &[f64]) -> Vec<f64> {
        if signal.is_empty() {
            return Vec::new();
        }

        let mut buffer: Vec<Complex<f64>> =
            signal.iter().map(|&v| Complex::new(v, 0.0)).collect();
        let fft = self.planner.plan_fft_forward(signal.len());
        fft.process(&mut buffer);

        buffer
            .iter()
            .take(spectrum_len(signal.len()))
            .map(|c| c.norm())
            .collect()
    }
}

/// Strongest bin of a spectrum, ignoring the DC component at bin 0
///
/// Returns `(index, magnitude)`; on ties the lowest index wins. Returns `None`
/// when the spectrum has no non-zero frequency bin.
pub fn dominant_frequency(magnitudes: &[f64]) -> Option<(usize, f64)> {
    magnitudes
        .iter()
        .copied()
        .enumerate()
        .skip(1)
        .fold(None, |best, (index, magnitude)| match best {
            Some((_, best_magnitude)) if magnitude <= best_magnitude => best,
            _ => Some((index, magnitude)),
        })
}
