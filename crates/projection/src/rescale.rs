use ndarray::{Array2, Axis};

/// Min-max rescale each column independently to `[-1, 1]`.
///
/// A column whose min equals its max is left as is.
pub fn rescale_axes(coords: &mut Array2<f64>) {
    for mut column in coords.axis_iter_mut(Axis(1)) {
        let (min, max) = column
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        if max > min {
            let span = max - min;
            column.mapv_inplace(|x| (2.0 * (x - min) / span - 1.0).clamp(-1.0, 1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn axes_span_exactly_minus_one_to_one() {
        let mut coords = array![[0.0, 100.0, 3.0], [5.0, -50.0, 3.0], [10.0, 25.0, 3.0]];
        rescale_axes(&mut coords);
        assert_eq!(coords.column(0).to_vec(), vec![-1.0, 0.0, 1.0]);
        assert_eq!(coords.column(1).to_vec(), vec![1.0, -1.0, 0.0]);
    }

    #[test]
    fn constant_axis_is_untouched() {
        let mut coords = array![[1.0, 3.0, 0.0], [2.0, 3.0, 0.0]];
        rescale_axes(&mut coords);
        assert_eq!(coords.column(1).to_vec(), vec![3.0, 3.0]);
        assert_eq!(coords.column(2).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn empty_matrix_is_fine() {
        let mut coords = Array2::<f64>::zeros((0, 3));
        rescale_axes(&mut coords);
        assert_eq!(coords.nrows(), 0);
    }
}
