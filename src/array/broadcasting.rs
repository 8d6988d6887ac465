//! Shape broadcasting.
//!
//! Shapes are aligned from the trailing axis. A pair of axis lengths is
//! compatible when they are equal or one of them is 1, and a missing leading
//! axis behaves like a length of 1. Broadcast axes are read with a stride of
//! zero so the operand is never materialised at the output size.

use super::core::compute_strides;
use super::Array;
use crate::error::{ArrayError, ArrayResult};

/// Compute the shape two operands broadcast to.
pub fn broadcast_shapes(left: &[usize], right: &[usize]) -> ArrayResult<Vec<usize>> {
    let ndim = left.len().max(right.len());
    let mut shape = vec![0; ndim];

    for axis in 0..ndim {
        let l = axis_len(left, ndim, axis);
        let r = axis_len(right, ndim, axis);
        shape[axis] = match (l, r) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => {
                return Err(ArrayError::ShapeMismatch {
                    left: left.to_vec(),
                    right: right.to_vec(),
                })
            }
        };
    }

    Ok(shape)
}

fn axis_len(shape: &[usize], ndim: usize, axis: usize) -> usize {
    let offset = ndim - shape.len();
    if axis < offset {
        1
    } else {
        shape[axis - offset]
    }
}

/// Strides of `array` viewed at `target` shape, zero on broadcast axes.
fn broadcast_strides<T>(array: &Array<T>, target: &[usize]) -> Vec<usize> {
    let offset = target.len() - array.ndim();
    (0..target.len())
        .map(|axis| {
            if axis < offset || array.shape()[axis - offset] == 1 {
                0
            } else {
                array.strides()[axis - offset]
            }
        })
        .collect()
}

impl<T> Array<T> {
    /// Combine two arrays element by element, broadcasting their shapes.
    ///
    /// Every binary operator in this crate goes through here.
    pub fn zip_broadcast<U, F>(&self, other: &Array<T>, f: F) -> ArrayResult<Array<U>>
    where
        F: Fn(&T, &T) -> U,
    {
        if self.shape() == other.shape() {
            let data = self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .map(|(a, b)| f(a, b))
                .collect();
            return Ok(Array::from_parts(data, self.shape().to_vec()));
        }

        let shape = broadcast_shapes(self.shape(), other.shape())?;
        log::trace!(
            "broadcasting {:?} with {:?} to {:?}",
            self.shape(),
            other.shape(),
            shape
        );

        let out_strides = compute_strides(&shape);
        let left_strides = broadcast_strides(self, &shape);
        let right_strides = broadcast_strides(other, &shape);
        let total: usize = shape.iter().product();

        let mut data = Vec::with_capacity(total);
        for flat in 0..total {
            let mut rem = flat;
            let mut l = 0;
            let mut r = 0;
            for axis in 0..shape.len() {
                let idx = rem / out_strides[axis];
                rem %= out_strides[axis];
                l += idx * left_strides[axis];
                r += idx * right_strides[axis];
            }
            data.push(f(&self.as_slice()[l], &other.as_slice()[r]));
        }

        Ok(Array::from_parts(data, shape))
    }
}

impl<T: Clone> Array<T> {
    /// Materialise this array at a larger, broadcast-compatible shape.
    pub fn broadcast_to(&self, shape: &[usize]) -> ArrayResult<Array<T>> {
        let mismatch = || ArrayError::ShapeMismatch {
            left: self.shape().to_vec(),
            right: shape.to_vec(),
        };
        let target = broadcast_shapes(self.shape(), shape).map_err(|_| mismatch())?;
        if target != shape {
            return Err(mismatch());
        }

        let strides = broadcast_strides(self, &target);
        let out_strides = compute_strides(&target);
        let total: usize = target.iter().product();
        let data = (0..total)
            .map(|flat| {
                let offset: usize = out_strides
                    .iter()
                    .zip(&target)
                    .zip(&strides)
                    .map(|((&out_stride, &dim), &stride)| (flat / out_stride) % dim * stride)
                    .sum();
                self.as_slice()[offset].clone()
            })
            .collect();

        Ok(Array::from_parts(data, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_shapes() {
        assert_eq!(broadcast_shapes(&[1, 3], &[2, 1]).unwrap(), vec![2, 3]);
        assert_eq!(broadcast_shapes(&[4, 2, 3], &[3]).unwrap(), vec![4, 2, 3]);
        assert_eq!(broadcast_shapes(&[], &[2, 2]).unwrap(), vec![2, 2]);
        assert_eq!(broadcast_shapes(&[5, 0], &[1]).unwrap(), vec![5, 0]);
    }

    #[test]
    fn test_broadcast_shapes_mismatch() {
        let err = broadcast_shapes(&[2, 3], &[3, 2]).unwrap_err();
        assert_eq!(
            err,
            ArrayError::ShapeMismatch {
                left: vec![2, 3],
                right: vec![3, 2]
            }
        );
    }

    #[test]
    fn test_zip_broadcast_row_against_column() {
        let row = Array::from_vec(vec![1.0, 2.0, 3.0], vec![1, 3]).unwrap();
        let col = Array::from_vec(vec![10.0, 20.0], vec![2, 1]).unwrap();
        let sum = row.zip_broadcast(&col, |a, b| a + b).unwrap();
        assert_eq!(sum.shape(), &[2, 3]);
        assert_eq!(sum.as_slice(), &[11.0, 12.0, 13.0, 21.0, 22.0, 23.0]);
    }

    #[test]
    fn test_zip_broadcast_scalar_array() {
        let grid = Array::from_nested([[1, 2], [3, 4]]);
        let scalar = Array::from_vec(vec![10], vec![]).unwrap();
        let product = grid.zip_broadcast(&scalar, |a, b| a * b).unwrap();
        assert_eq!(product.as_slice(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_broadcast_to() {
        let seq = Array::from([1, 2, 3]);
        let tiled = seq.broadcast_to(&[2, 3]).unwrap();
        assert_eq!(tiled.as_slice(), &[1, 2, 3, 1, 2, 3]);
        assert!(seq.broadcast_to(&[3, 2]).is_err());
        // Broadcasting never shrinks an axis.
        assert!(tiled.broadcast_to(&[3]).is_err());
    }
}
