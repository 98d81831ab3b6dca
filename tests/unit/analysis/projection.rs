//! Tests for axis projections and flatness detection

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Array2, array};
    use spriteslice::SliceError;
    use spriteslice::analysis::projection::{CollapseAxis, is_flat, project};

    // Tests collapsing rows averages each column
    // Verified by summing instead of averaging
    #[test]
    fn test_project_rows_gives_column_means() {
        let mask = array![[0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];

        let projection = project(&mask, CollapseAxis::Rows).unwrap();

        assert_eq!(projection, array![0.5, 1.0, 0.0]);
    }

    // Tests collapsing columns averages each row
    // Verified by collapsing the wrong axis
    #[test]
    fn test_project_columns_gives_row_means() {
        let mask = array![[0.0, 1.0, 0.5], [1.0, 1.0, 1.0]];

        let projection = project(&mask, CollapseAxis::Columns).unwrap();

        assert_eq!(projection.len(), 2);
        assert!((projection[0] - 0.5).abs() < 1e-12);
        assert!((projection[1] - 1.0).abs() < 1e-12);
    }

    // Tests an empty collapsed axis is reported instead of producing NaN
    // Verified by unwrapping the mean
    #[test]
    fn test_project_empty_axis_is_degenerate() {
        let mask = Array2::<f64>::zeros((0, 4));

        let result = project(&mask, CollapseAxis::Rows);

        assert!(matches!(
            result,
            Err(SliceError::DegenerateInput {
                axis: "horizontal",
                ..
            })
        ));
    }

    // Tests numeric axis conversion follows the (height, width) layout
    // Verified by swapping the axis mapping
    #[test]
    fn test_axis_from_index() {
        assert_eq!(CollapseAxis::try_from(0).unwrap(), CollapseAxis::Rows);
        assert_eq!(CollapseAxis::try_from(1).unwrap(), CollapseAxis::Columns);
        assert!(matches!(
            CollapseAxis::try_from(2),
            Err(SliceError::InvalidParameter {
                parameter: "axis",
                ..
            })
        ));

        assert_eq!(CollapseAxis::Rows.index(), 0);
        assert_eq!(CollapseAxis::Columns.index(), 1);
    }

    // Tests direction labels match the periodicity each axis reveals
    // Verified by swapping labels
    #[test]
    fn test_axis_direction() {
        assert_eq!(CollapseAxis::Rows.direction(), "horizontal");
        assert_eq!(CollapseAxis::Columns.direction(), "vertical");
    }

    // Tests flatness uses the spread between extremes
    // Verified by comparing only the first two samples
    #[test]
    fn test_is_flat() {
        assert!(is_flat(&array![0.25, 0.25, 0.25], 1e-9));
        assert!(is_flat(&Array1::<f64>::zeros(0), 1e-9));
        assert!(!is_flat(&array![0.25, 0.25, 0.75], 1e-9));
        assert!(is_flat(&array![0.25, 0.25 + 1e-12], 1e-9));
    }
}
