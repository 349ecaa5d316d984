//! Copies between the workspace `ndarray` and the one linfa is built on.

use ndarray::Array2;

pub(crate) type LinfaMatrix = linfa_ndarray::Array2<f64>;

/// Copy `data` into a linfa matrix, appending zero columns up to `min_cols`.
pub(crate) fn to_linfa(data: &Array2<f64>, min_cols: usize) -> LinfaMatrix {
    let (rows, cols) = data.dim();
    LinfaMatrix::from_shape_fn((rows, cols.max(min_cols)), |(i, j)| {
        if j < cols { data[[i, j]] } else { 0.0 }
    })
}

/// Copy a linfa matrix back, keeping the first `width` columns and
/// zero-filling any it lacks.
pub(crate) fn from_linfa(data: &LinfaMatrix, width: usize) -> Array2<f64> {
    let (rows, cols) = data.dim();
    Array2::from_shape_fn((rows, width), |(i, j)| if j < cols { data[[i, j]] } else { 0.0 })
}
