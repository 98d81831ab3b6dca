//! Tests for tile size estimation on synthetic sprite sheet masks

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use spriteslice::SliceError;
    use spriteslice::analysis::estimator::{TileSizeEstimator, estimate_tile_size, tile_count};
    use spriteslice::analysis::projection::CollapseAxis;

    /// Vertical stripes: each of `stripes` periods is opaque on its left half
    fn vertical_stripes(width: usize, height: usize, stripes: usize) -> Array2<f64> {
        let period = width / stripes;
        Array2::from_shape_fn((height, width), |(_, x)| {
            if x % period < period / 2 { 1.0 } else { 0.0 }
        })
    }

    /// Sprites of `tile_width` x `tile_height` pixels separated by a transparent
    /// gutter on the right and bottom
    fn sprite_grid(
        width: usize,
        height: usize,
        (tile_width, tile_height): (usize, usize),
        gutter: usize,
    ) -> Array2<f64> {
        Array2::from_shape_fn((height, width), |(y, x)| {
            if x % tile_width < tile_width - gutter && y % tile_height < tile_height - gutter {
                1.0
            } else {
                0.0
            }
        })
    }

    fn roll_columns(mask: &Array2<f64>, shift: usize) -> Array2<f64> {
        let (height, width) = mask.dim();
        Array2::from_shape_fn((height, width), |(y, x)| mask[(y, (x + shift) % width)])
    }

    // Tests stripe counts are recovered from the horizontal estimate
    // Verified by dividing the projection length by the peak index plus one
    #[test]
    fn test_stripe_counts_recovered() {
        for stripes in [2, 4, 8] {
            for width in [64, 128] {
                let mask = vertical_stripes(width, 16, stripes);

                let tile_size = estimate_tile_size(&mask, CollapseAxis::Rows).unwrap();

                assert_eq!(
                    tile_count(width as u32, tile_size),
                    stripes,
                    "width {width}, {stripes} stripes, estimate {tile_size}"
                );
            }
        }
    }

    // Tests circular shifts of the pattern leave the estimate unchanged
    // Verified by taking `re` instead of `norm()` of each frequency bin
    #[test]
    fn test_estimate_is_shift_invariant() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut estimator = TileSizeEstimator::new();
        let mask = vertical_stripes(96, 8, 4);
        let baseline = estimator.estimate(&mask, CollapseAxis::Rows).unwrap();

        for _ in 0..10 {
            let shift = rng.random_range(1..96);
            let shifted = roll_columns(&mask, shift);

            let estimate = estimator.estimate(&shifted, CollapseAxis::Rows).unwrap();

            assert!(
                (estimate - baseline).abs() < 1e-9,
                "shift {shift} changed estimate from {baseline} to {estimate}"
            );
        }
    }

    // Tests doubling the stripe count halves the tile size
    // Verified by multiplying by the peak index
    #[test]
    fn test_doubling_stripes_halves_estimate() {
        let mut estimator = TileSizeEstimator::default();

        for stripes in [2, 4, 8] {
            let coarse = estimator
                .estimate(&vertical_stripes(128, 4, stripes), CollapseAxis::Rows)
                .unwrap();
            let fine = estimator
                .estimate(&vertical_stripes(128, 4, stripes * 2), CollapseAxis::Rows)
                .unwrap();

            assert!(
                (coarse / fine - 2.0).abs() < 1e-9,
                "{stripes} stripes: {coarse} vs {fine}"
            );
        }
    }

    // Tests a 256x128 sheet of 32x64 sprites yields distinct tile widths and heights
    // Verified by collapsing rows for both estimates
    #[test]
    fn test_sprite_grid_end_to_end() {
        let mask = sprite_grid(256, 128, (32, 64), 8);
        let mut estimator = TileSizeEstimator::new();

        let tile_width = estimator.estimate(&mask, CollapseAxis::Rows).unwrap();
        let tile_height = estimator.estimate(&mask, CollapseAxis::Columns).unwrap();

        assert!((tile_width - 32.0).abs() < 1e-9);
        assert!((tile_height - 64.0).abs() < 1e-9);
        assert_eq!(tile_count(256, tile_width), 8);
        assert_eq!(tile_count(128, tile_height), 2);
    }

    // Tests uniform alpha is reported as degenerate rather than returning noise
    // Verified by removing the flatness check
    #[test]
    fn test_uniform_alpha_is_degenerate() {
        for value in [0.0, 0.5, 1.0] {
            let mask = Array2::from_elem((32, 64), value);

            for axis in [CollapseAxis::Rows, CollapseAxis::Columns] {
                let result = estimate_tile_size(&mask, axis);
                assert!(
                    matches!(result, Err(SliceError::DegenerateInput { .. })),
                    "alpha {value} on {axis:?}: {result:?}"
                );
            }
        }
    }

    // Tests stripes along one axis leave the other axis degenerate
    // Verified by mapping both collapse directions to the same ndarray axis
    #[test]
    fn test_stripes_have_no_vertical_periodicity() {
        let mask = vertical_stripes(64, 32, 4);

        let result = estimate_tile_size(&mask, CollapseAxis::Columns);

        assert!(matches!(
            result,
            Err(SliceError::DegenerateInput {
                axis: "vertical",
                ..
            })
        ));
    }

    // Tests single-sample projections are rejected
    // Verified by removing the minimum length check
    #[test]
    fn test_short_projection_is_degenerate() {
        let mask = Array2::from_shape_fn((8, 1), |(y, _)| (y % 2) as f64);

        let result = estimate_tile_size(&mask, CollapseAxis::Rows);

        assert!(matches!(
            result,
            Err(SliceError::DegenerateInput { ref reason, .. }) if reason.contains("1 sample")
        ));
    }

    // Tests the smallest valid projection still produces a finite estimate
    // Verified by excluding the Nyquist bin
    #[test]
    fn test_two_sample_projection() {
        let mask = Array2::from_shape_fn((3, 2), |(_, x)| x as f64);

        let tile_size = estimate_tile_size(&mask, CollapseAxis::Rows).unwrap();

        assert!((tile_size - 2.0).abs() < 1e-12);
    }

    // Tests invalid mask values are rejected before any transform
    // Verified by removing mask validation
    #[test]
    fn test_invalid_mask_values() {
        for bad in [-0.5, f64::NAN, f64::INFINITY] {
            let mut mask = vertical_stripes(16, 4, 2);
            mask[(1, 1)] = bad;

            let result = estimate_tile_size(&mask, CollapseAxis::Rows);

            assert!(
                matches!(result, Err(SliceError::InvalidSourceData { .. })),
                "value {bad}: {result:?}"
            );
        }
    }

    // Tests estimates are always finite and positive when they succeed
    // Verified by letting the zero-frequency bin win the peak search
    #[test]
    fn test_estimates_are_finite() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut estimator = TileSizeEstimator::new();

        for _ in 0..20 {
            let mask = Array2::from_shape_fn((12, 40), |_| rng.random_range(0.0..1.0));

            for axis in [CollapseAxis::Rows, CollapseAxis::Columns] {
                if let Ok(tile_size) = estimator.estimate(&mask, axis) {
                    assert!(tile_size.is_finite());
                    assert!(tile_size > 0.0);
                }
            }
        }
    }

    // Tests conversion from tile size to tile count
    // Verified by truncating instead of rounding
    #[test]
    fn test_tile_count() {
        assert_eq!(tile_count(256, 32.0), 8);
        assert_eq!(tile_count(100, 33.3), 3);
        assert_eq!(tile_count(100, 40.0), 3);
        assert_eq!(tile_count(100, 0.0), 0);
        assert_eq!(tile_count(100, -4.0), 0);
        assert_eq!(tile_count(100, f64::NAN), 0);
        assert_eq!(tile_count(100, f64::INFINITY), 0);
    }
}
