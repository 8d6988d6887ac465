//! # arraylab
//!
//! Small N-dimensional arrays with NumPy-style broadcasting, written in Rust.
//!
//! arraylab provides:
//! - Sequences (1D) and grids (2D) built from literal lists with [`array!`]
//! - Element-wise arithmetic that broadcasts mismatched shapes
//! - SIMD and parallel kernels for large `f64` products
//! - NumPy's default textual layout through `Display`
//!
//! ## Quick Start
//!
//! ```rust
//! use arraylab::array;
//!
//! // A flat list gives a sequence; integers are promoted to f64.
//! let seq = array![10, 100, 1000.];
//! assert_eq!(seq.to_string(), "[  10.  100. 1000.]");
//!
//! // A nested list gives a grid.
//! let grid = array![[1., 2., 3.], [4., 5., 6.]];
//!
//! // Element-wise product, no loops required.
//! let squared = &grid * &grid;
//! println!("{}", squared);
//!
//! // Scalars broadcast across every element.
//! let shifted = &grid + 1.0;
//! assert_eq!(shifted[(1, 2)], 7.0);
//! ```
//!
//! Shapes that cannot be combined are reported as [`ArrayError::ShapeMismatch`]
//! by the `try_*` methods:
//!
//! ```rust
//! use arraylab::{Array, ArrayError};
//!
//! let a = Array::<f64>::ones(vec![2, 3]);
//! let b = Array::<f64>::ones(vec![3, 2]);
//! assert!(matches!(a.try_mul(&b), Err(ArrayError::ShapeMismatch { .. })));
//! ```

pub mod array;
pub mod error;

// Re-export main types for convenience
pub use array::Array;
pub use error::{ArrayError, ArrayResult};
