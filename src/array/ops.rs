use std::ops::{Add, Div, Mul, Sub};

use num_traits::{Float, Num};

use super::Array;
use crate::error::ArrayResult;

impl<T> Array<T> {
    /// Apply `f` to every element, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> Array<U>
    where
        F: Fn(&T) -> U,
    {
        let data = self.as_slice().iter().map(f).collect();
        Array::from_parts(data, self.shape().to_vec())
    }
}

impl<T: Copy> Array<T> {
    /// Like [`Array::map`] but hands the closure elements by value.
    pub fn mapv<U, F>(&self, f: F) -> Array<U>
    where
        F: Fn(T) -> U,
    {
        self.map(|&x| f(x))
    }
}

impl<T: Float> Array<T> {
    pub fn pow(&self, exponent: T) -> Array<T> {
        self.mapv(|x| x.powf(exponent))
    }
}

impl<T: Num + Copy> Array<T> {
    /// Element-wise sum, broadcasting mismatched shapes.
    pub fn try_add(&self, other: &Array<T>) -> ArrayResult<Array<T>> {
        self.zip_broadcast(other, |&a, &b| a + b)
    }

    pub fn try_sub(&self, other: &Array<T>) -> ArrayResult<Array<T>> {
        self.zip_broadcast(other, |&a, &b| a - b)
    }

    /// Element-wise product: `out[i][j] = self[i][j] * other[i][j]`.
    ///
    /// Shapes that do not broadcast yield [`crate::ArrayError::ShapeMismatch`].
    pub fn try_mul(&self, other: &Array<T>) -> ArrayResult<Array<T>> {
        self.zip_broadcast(other, |&a, &b| a * b)
    }

    pub fn try_div(&self, other: &Array<T>) -> ArrayResult<Array<T>> {
        self.zip_broadcast(other, |&a, &b| a / b)
    }
}

// Operator forms panic on incompatible shapes; use the `try_*` methods to
// handle the error instead.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<'a, T: Num + Copy> $trait<&'a Array<T>> for &'a Array<T> {
            type Output = Array<T>;
            fn $method(self, rhs: &'a Array<T>) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(result) => result,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        impl<T: Num + Copy> $trait<Array<T>> for Array<T> {
            type Output = Array<T>;
            fn $method(self, rhs: Array<T>) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Mul, mul, try_mul);
impl_binary_op!(Div, div, try_div);

// Array-with-scalar arithmetic, applied to each element.
macro_rules! impl_scalar_op {
    ($($scalar:ty),*) => {
        $(
            impl Add<$scalar> for &Array<$scalar> {
                type Output = Array<$scalar>;
                fn add(self, rhs: $scalar) -> Self::Output {
                    self.mapv(|x| x + rhs)
                }
            }

            impl Sub<$scalar> for &Array<$scalar> {
                type Output = Array<$scalar>;
                fn sub(self, rhs: $scalar) -> Self::Output {
                    self.mapv(|x| x - rhs)
                }
            }

            impl Mul<$scalar> for &Array<$scalar> {
                type Output = Array<$scalar>;
                fn mul(self, rhs: $scalar) -> Self::Output {
                    self.mapv(|x| x * rhs)
                }
            }

            impl Div<$scalar> for &Array<$scalar> {
                type Output = Array<$scalar>;
                fn div(self, rhs: $scalar) -> Self::Output {
                    self.mapv(|x| x / rhs)
                }
            }
        )*
    };
}

impl_scalar_op!(f32, f64, i32, i64);
