//! Accelerated element-wise kernels for `f64` arrays.
//!
//! These skip broadcasting: both operands must already have the same shape.
//! Results are bit-identical to [`Array::try_mul`].

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "simd")]
use wide::f64x4;

use super::Array;
use crate::error::{ArrayError, ArrayResult};

/// Elements handed to each rayon task.
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK: usize = 4096;

fn ensure_same_shape(left: &Array<f64>, right: &Array<f64>) -> ArrayResult<()> {
    if left.shape() != right.shape() {
        return Err(ArrayError::ShapeMismatch {
            left: left.shape().to_vec(),
            right: right.shape().to_vec(),
        });
    }
    Ok(())
}

impl Array<f64> {
    /// Element-wise product four lanes at a time using `wide::f64x4`.
    #[cfg(feature = "simd")]
    pub fn mul_simd(&self, other: &Array<f64>) -> ArrayResult<Array<f64>> {
        ensure_same_shape(self, other)?;
        log::debug!("mul_simd over {} elements", self.len());

        let lhs = self.as_slice().chunks_exact(4);
        let rhs = other.as_slice().chunks_exact(4);
        let (lhs_tail, rhs_tail) = (lhs.remainder(), rhs.remainder());

        let mut result = Vec::with_capacity(self.len());
        for (a, b) in lhs.zip(rhs) {
            let prod = f64x4::from([a[0], a[1], a[2], a[3]]) * f64x4::from([b[0], b[1], b[2], b[3]]);
            result.extend_from_slice(&prod.to_array());
        }
        // remainder
        result.extend(lhs_tail.iter().zip(rhs_tail).map(|(a, b)| a * b));

        Ok(Array::from_parts(result, self.shape().to_vec()))
    }

    /// Element-wise product split into chunks across the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn mul_parallel(&self, other: &Array<f64>) -> ArrayResult<Array<f64>> {
        ensure_same_shape(self, other)?;
        log::debug!(
            "mul_parallel over {} elements on {} threads",
            self.len(),
            rayon::current_num_threads()
        );

        let (a, b) = (self.as_slice(), other.as_slice());
        let mut result = vec![0.0; a.len()];

        result
            .par_chunks_mut(PARALLEL_CHUNK)
            .enumerate()
            .for_each(|(i, chunk)| {
                let start = i * PARALLEL_CHUNK;
                for (j, item) in chunk.iter_mut().enumerate() {
                    *item = a[start + j] * b[start + j];
                }
            });

        Ok(Array::from_parts(result, self.shape().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Array<f64> {
        Array::from_nested([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_mul_simd() {
        let g = grid();
        let c = g.mul_simd(&g).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.as_slice(), &[1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_mul_simd_rejects_broadcast() {
        let g = grid();
        let row = Array::from([1.0, 2.0, 3.0]);
        assert!(matches!(
            g.mul_simd(&row),
            Err(ArrayError::ShapeMismatch { .. })
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_mul_parallel_spans_chunks() {
        let n = PARALLEL_CHUNK * 2 + 3;
        let a = Array::arange(0.0, n as f64, 1.0);
        let b = Array::full(vec![n], 0.5);
        let c = a.mul_parallel(&b).unwrap();
        assert_eq!(c.len(), n);
        assert_eq!(c.as_slice()[n - 1], (n - 1) as f64 * 0.5);
        assert_eq!(c, a.try_mul(&b).unwrap());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_mul_parallel_shape_mismatch() {
        let a = Array::<f64>::zeros(vec![4]);
        let b = Array::<f64>::zeros(vec![2, 2]);
        assert!(a.mul_parallel(&b).is_err());
    }
}
