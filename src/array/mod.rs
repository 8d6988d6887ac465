//! N-dimensional arrays with broadcasting element-wise arithmetic.

mod broadcasting;
mod core;
mod display;
mod macros;
mod ops;
#[cfg(any(feature = "simd", feature = "parallel"))]
mod simd_ops;

pub use self::broadcasting::broadcast_shapes;
pub use self::core::Array;
pub use self::display::PRECISION;
