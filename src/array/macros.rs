/// Build an `Array<f64>` from a literal list.
///
/// A flat list gives a sequence and a list of bracketed rows gives a grid.
/// Every element goes through `as f64`, so integer and float literals can be
/// mixed freely and all come out as floating point:
///
/// ```
/// use arraylab::array;
///
/// let seq = array![10, 100, 1000.];
/// assert_eq!(seq.as_slice(), &[10.0, 100.0, 1000.0]);
///
/// let grid = array![[1., 2., 3.], [4., 5., 6.]];
/// assert_eq!(grid.shape(), &[2, 3]);
/// ```
///
/// Rows of different lengths do not compile:
///
/// ```compile_fail
/// use arraylab::array;
///
/// let ragged = array![[1., 2.], [3.]];
/// ```
#[macro_export]
macro_rules! array {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Array::<f64>::from_nested([$([$($x as f64),*]),+])
    };
    ($($x:expr),* $(,)?) => {
        $crate::Array::<f64>::from(::std::vec![$($x as f64),*])
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_promotes_integers() {
        let seq = array![10, 100, 1000.];
        assert_eq!(seq.ndim(), 1);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.as_slice(), &[10.0, 100.0, 1000.0]);
    }

    #[test]
    fn test_nested_rows() {
        let grid = array![[1, 2, 3], [4., 5., 6.],];
        assert_eq!(grid.shape(), &[2, 3]);
        assert_eq!(grid[(1, 2)], 6.0);
    }

    #[test]
    fn test_negative_and_empty() {
        assert_eq!(array![-1, 2.5].as_slice(), &[-1.0, 2.5]);
        assert!(array![].is_empty());
    }
}
