use std::ops::{Index, IndexMut};

use num_traits::{Num, One, Zero};

use crate::error::{ArrayError, ArrayResult};

/// A dense N-dimensional array stored in row-major (C-style) order.
///
/// A one-dimensional array plays the role of a sequence, a two-dimensional one
/// the role of a grid. The element buffer always holds exactly
/// `shape.iter().product()` values, so an empty shape is a zero-dimensional
/// scalar with a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T> Array<T> {
    /// Create an array from a vector with the given shape.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> ArrayResult<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(ArrayError::DataLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self::from_parts(data, shape))
    }

    /// Build a two-dimensional array from a list of rows.
    ///
    /// Every row must have the length of the first one; the first row that
    /// does not is reported as [`ArrayError::RaggedRows`]. An empty list
    /// yields a `0 x 0` grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> ArrayResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(ArrayError::RaggedRows {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
        }
        let shape = vec![rows.len(), cols];
        let data = rows.into_iter().flatten().collect();
        Ok(Self::from_parts(data, shape))
    }

    /// Build a grid from a fixed-size nested array. Ragged rows are
    /// rejected by the type system, so this cannot fail.
    pub fn from_nested<const R: usize, const C: usize>(rows: [[T; C]; R]) -> Self {
        let data = rows.into_iter().flatten().collect();
        Self::from_parts(data, vec![R, C])
    }

    /// Callers guarantee `data.len()` matches the shape product.
    pub(crate) fn from_parts(data: Vec<T>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());
        let strides = compute_strides(&shape);
        Array {
            data,
            shape,
            strides,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert a multi-dimensional index to a flat offset into the buffer.
    ///
    /// Panics when the number of indices differs from the number of axes.
    pub fn ravel_index(&self, indices: &[usize]) -> usize {
        assert_eq!(indices.len(), self.shape.len(), "Index dimension mismatch");
        indices
            .iter()
            .zip(&self.strides)
            .map(|(&idx, &stride)| idx * stride)
            .sum()
    }

    fn in_bounds(&self, indices: &[usize]) -> bool {
        indices.len() == self.shape.len()
            && indices.iter().zip(&self.shape).all(|(idx, dim)| idx < dim)
    }

    /// Flat offset for the `Index` operators; every axis is bounds-checked.
    fn checked_offset(&self, indices: &[usize]) -> usize {
        if !self.in_bounds(indices) {
            panic!(
                "index {:?} is out of bounds for array of shape {:?}",
                indices, self.shape
            );
        }
        self.ravel_index(indices)
    }

    /// Get element at multi-dimensional index
    pub fn get(&self, indices: &[usize]) -> Option<&T> {
        if !self.in_bounds(indices) {
            return None;
        }
        self.data.get(self.ravel_index(indices))
    }

    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut T> {
        if !self.in_bounds(indices) {
            return None;
        }
        let flat_index = self.ravel_index(indices);
        self.data.get_mut(flat_index)
    }

    /// Reinterpret the buffer with a new shape of the same total size.
    pub fn into_shape(self, new_shape: Vec<usize>) -> ArrayResult<Self> {
        let new_size: usize = new_shape.iter().product();
        if new_size != self.data.len() {
            return Err(ArrayError::IncompatibleReshape {
                from: self.shape,
                to: new_shape,
            });
        }
        Ok(Self::from_parts(self.data, new_shape))
    }
}

impl<T: Clone> Array<T> {
    /// Create array with given shape and fill value
    pub fn full(shape: Vec<usize>, fill_value: T) -> Self {
        let total_size: usize = shape.iter().product();
        Self::from_parts(vec![fill_value; total_size], shape)
    }

    pub fn reshape(&self, new_shape: Vec<usize>) -> ArrayResult<Self> {
        self.clone().into_shape(new_shape)
    }
}

impl<T: Clone + Zero> Array<T> {
    pub fn zeros(shape: Vec<usize>) -> Self {
        Self::full(shape, T::zero())
    }
}

impl<T: Clone + One> Array<T> {
    pub fn ones(shape: Vec<usize>) -> Self {
        Self::full(shape, T::one())
    }
}

impl<T: Num + PartialOrd + Copy> Array<T> {
    /// Create a one-dimensional array of `start, start + step, ...` below `stop`.
    ///
    /// A non-positive step produces an empty array.
    pub fn arange(start: T, stop: T, step: T) -> Self {
        let mut data = Vec::new();
        if step > T::zero() {
            let mut current = start;
            while current < stop {
                data.push(current);
                current = current + step;
            }
        }
        let len = data.len();
        Self::from_parts(data, vec![len])
    }
}

/// Row-major strides: the last axis is contiguous.
pub(crate) fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        let len = data.len();
        Self::from_parts(data, vec![len])
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_parts(Vec::from(values), vec![N])
    }
}

// 2D indexing kept alongside the N-dimensional form for grid-heavy code.
impl<T> Index<(usize, usize)> for Array<T> {
    type Output = T;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        if self.ndim() != 2 {
            panic!("2D indexing only works for 2D arrays");
        }
        let (i, j) = index;
        &self[&[i, j][..]]
    }
}

impl<T> IndexMut<(usize, usize)> for Array<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        if self.ndim() != 2 {
            panic!("2D indexing only works for 2D arrays");
        }
        let (i, j) = index;
        &mut self[&[i, j][..]]
    }
}

impl<T> Index<&[usize]> for Array<T> {
    type Output = T;
    fn index(&self, indices: &[usize]) -> &Self::Output {
        let flat_index = self.checked_offset(indices);
        &self.data[flat_index]
    }
}

impl<T> IndexMut<&[usize]> for Array<T> {
    fn index_mut(&mut self, indices: &[usize]) -> &mut Self::Output {
        let flat_index = self.checked_offset(indices);
        &mut self.data[flat_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        let err = Array::from_vec(vec![1.0, 2.0, 3.0], vec![2, 2]).unwrap_err();
        assert_eq!(err, ArrayError::DataLength { expected: 4, got: 3 });
    }

    #[test]
    fn test_strides_row_major() {
        let arr = Array::<f64>::zeros(vec![2, 3, 4]);
        assert_eq!(arr.strides(), &[12, 4, 1]);
        assert_eq!(arr.len(), 24);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Array::from_rows(vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]]).unwrap_err();
        assert_eq!(
            err,
            ArrayError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_from_rows_builds_grid() {
        let grid = Array::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(grid.shape(), &[2, 3]);
        assert_eq!(grid[(1, 0)], 4.0);
        assert_eq!(grid[&[0, 2][..]], 3.0);
    }

    #[test]
    fn test_empty_rows() {
        let grid = Array::<f64>::from_rows(Vec::new()).unwrap();
        assert_eq!(grid.shape(), &[0, 0]);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_scalar_shape_holds_one_element() {
        let scalar = Array::from_vec(vec![7.0], vec![]).unwrap();
        assert_eq!(scalar.ndim(), 0);
        assert_eq!(scalar.get(&[]), Some(&7.0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let arr = Array::from_nested([[1, 2], [3, 4]]);
        assert_eq!(arr.get(&[1, 1]), Some(&4));
        assert_eq!(arr.get(&[2, 0]), None);
        assert_eq!(arr.get(&[0]), None);
    }

    #[test]
    fn test_reshape() {
        let arr = Array::arange(0.0, 6.0, 1.0);
        let grid = arr.reshape(vec![2, 3]).unwrap();
        assert_eq!(grid[(1, 2)], 5.0);
        assert!(matches!(
            arr.reshape(vec![4, 2]),
            Err(ArrayError::IncompatibleReshape { .. })
        ));
    }

    #[test]
    fn test_arange_non_positive_step() {
        assert!(Array::arange(0, 10, 0).is_empty());
        assert_eq!(Array::arange(0, 10, 3).as_slice(), &[0, 3, 6, 9]);
    }

    #[test]
    fn test_index_mut() {
        let mut grid = Array::<i32>::zeros(vec![2, 2]);
        grid[(0, 1)] = 5;
        *grid.get_mut(&[1, 0]).unwrap() = 7;
        assert_eq!(grid.as_slice(), &[0, 5, 7, 0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_tuple_index_column_out_of_bounds() {
        let grid = Array::from_nested([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let _ = grid[(0, 3)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_slice_index_column_out_of_bounds() {
        let grid = Array::from_nested([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let _ = grid[&[0, 4][..]];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_tuple_index_mut_out_of_bounds() {
        let mut grid = Array::<i32>::zeros(vec![2, 2]);
        grid[(1, 2)] = 1;
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_slice_index_mut_out_of_bounds() {
        let mut grid = Array::<i32>::zeros(vec![2, 2]);
        grid[&[0, 2][..]] = 1;
    }
}
