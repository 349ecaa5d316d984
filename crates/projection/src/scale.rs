use crate::error::ProjectionError;
use ndarray::{Array2, Axis};

/// Pack equal-length vectors into an `N x D` matrix.
pub fn to_matrix(vectors: &[&[f32]]) -> Result<Array2<f64>, ProjectionError> {
    let first = vectors.first().ok_or(ProjectionError::EmptyBatch)?;
    let dims = first.len();
    if dims == 0 {
        return Err(ProjectionError::DimensionMismatch {
            index: 0,
            expected: 1,
            got: 0,
        });
    }

    let mut flat = Vec::with_capacity(vectors.len() * dims);
    for (index, v) in vectors.iter().enumerate() {
        if v.len() != dims {
            return Err(ProjectionError::DimensionMismatch {
                index,
                expected: dims,
                got: v.len(),
            });
        }
        flat.extend(v.iter().map(|&x| f64::from(x)));
    }

    Array2::from_shape_vec((vectors.len(), dims), flat).map_err(|_| ProjectionError::EmptyBatch)
}

/// Standardize each column to zero mean and unit (population) variance.
///
/// Columns with zero variance are only centered, so a single-row batch comes
/// back as the zero vector instead of dividing by zero.
pub fn standardize(data: &Array2<f64>) -> Result<Array2<f64>, ProjectionError> {
    let mean = data.mean_axis(Axis(0)).ok_or(ProjectionError::EmptyBatch)?;
    let std = data.std_axis(Axis(0), 0.0);

    let mut out = data - &mean;
    for (mut column, &s) in out.axis_iter_mut(Axis(1)).zip(std.iter()) {
        if s > f64::EPSILON {
            column.mapv_inplace(|x| x / s);
        }
    }
    Ok(out)
}

/// Whether the rows of `data` are not all the same point.
pub(crate) fn has_spread(data: &Array2<f64>) -> bool {
    data.nrows() > 1 && data.var_axis(Axis(0), 0.0).sum() > f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn standardized_columns_have_zero_mean_unit_variance() {
        let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let out = standardize(&data).unwrap();
        for column in out.axis_iter(Axis(1)) {
            let mean = column.mean().unwrap();
            let var = column.mapv(|x| (x - mean).powi(2)).mean().unwrap();
            assert!(mean.abs() < 1e-12);
            assert!((var - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_column_is_centered_only() {
        let data = array![[5.0, 1.0], [5.0, 3.0]];
        let out = standardize(&data).unwrap();
        assert_eq!(out.column(0).to_vec(), vec![0.0, 0.0]);
        assert_eq!(out.column(1).to_vec(), vec![-1.0, 1.0]);
    }

    #[test]
    fn single_row_becomes_origin() {
        let data = array![[0.3, -2.0, 7.5]];
        let out = standardize(&data).unwrap();
        assert!(out.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn to_matrix_rejects_ragged_rows() {
        let a = [1.0f32, 2.0];
        let b = [1.0f32];
        let err = to_matrix(&[&a, &b]).unwrap_err();
        assert!(matches!(
            err,
            ProjectionError::DimensionMismatch {
                index: 1,
                expected: 2,
                got: 1
            }
        ));
        assert!(matches!(to_matrix(&[]).unwrap_err(), ProjectionError::EmptyBatch));
    }

    #[test]
    fn spread_detects_identical_rows() {
        assert!(!has_spread(&array![[1.0, 2.0], [1.0, 2.0]]));
        assert!(!has_spread(&array![[4.0, 4.0]]));
        assert!(has_spread(&array![[1.0, 2.0], [1.0, 2.5]]));
    }
}
