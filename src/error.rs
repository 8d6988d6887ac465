use thiserror::Error;

/// Result alias used throughout the array module.
pub type ArrayResult<T> = Result<T, ArrayError>;

/// Errors emitted by array construction and element-wise operators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// An operator was asked to combine arrays whose shapes do not broadcast.
    #[error("operands could not be broadcast together with shapes {left:?} {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },
    /// Data handed to a constructor does not match the requested shape.
    #[error("data length mismatch: expected {expected}, got {got}")]
    DataLength { expected: usize, got: usize },
    /// A nested list had a row whose length differs from the first row.
    #[error("row {row} has length {got}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("cannot reshape array of shape {from:?} into shape {to:?}")]
    IncompatibleReshape { from: Vec<usize>, to: Vec<usize> },
}
