//! Arithmetic operator impls for [`Array`].
//!
//! Binary operators combine two same-shape arrays elementwise, or an array
//! and a scalar with the scalar applied to every element. Shape agreement
//! for array operands is a precondition; violating it panics. The checked,
//! non-panicking surface for mismatched shapes is the selector-based
//! read/write API, not the operators.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};

use crate::Array;

/// Combine two same-shape arrays elementwise.
fn zip<T, F>(a: &Array<T>, b: &Array<T>, f: F) -> Array<T>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    assert!(
        a.shape() == b.shape(),
        "shape mismatch: {} vs {}",
        a.shape(),
        b.shape()
    );
    let data = a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect();
    Array::from_shape_vec(a.shape(), data).expect("zip preserves element count")
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl<T: Copy + $trait<Output = T>> $trait for &Array<T> {
            type Output = Array<T>;

            fn $method(self, rhs: &Array<T>) -> Array<T> {
                zip(self, rhs, |x, y| x.$method(y))
            }
        }

        impl<T: Copy + $trait<Output = T>> $trait for Array<T> {
            type Output = Array<T>;

            fn $method(self, rhs: Array<T>) -> Array<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Copy + $trait<Output = T>> $trait<T> for &Array<T> {
            type Output = Array<T>;

            fn $method(self, rhs: T) -> Array<T> {
                self.map(|&x| x.$method(rhs))
            }
        }

        impl<T: Copy + $trait<Output = T>> $trait<T> for Array<T> {
            type Output = Array<T>;

            fn $method(self, rhs: T) -> Array<T> {
                (&self).$method(rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);
impl_binary_op!(Rem, rem);
impl_binary_op!(BitAnd, bitand);
impl_binary_op!(BitOr, bitor);
impl_binary_op!(BitXor, bitxor);

// Scalar-on-the-left forms exist per primitive type, since a generic impl
// over foreign scalar types is not expressible.
macro_rules! impl_scalar_lhs {
    ($($type:ty),*) => {
        $(
            impl Add<&Array<$type>> for $type {
                type Output = Array<$type>;

                fn add(self, rhs: &Array<$type>) -> Array<$type> {
                    rhs.map(|&x| self + x)
                }
            }

            impl Add<Array<$type>> for $type {
                type Output = Array<$type>;

                fn add(self, rhs: Array<$type>) -> Array<$type> {
                    self + &rhs
                }
            }

            impl Sub<&Array<$type>> for $type {
                type Output = Array<$type>;

                fn sub(self, rhs: &Array<$type>) -> Array<$type> {
                    rhs.map(|&x| self - x)
                }
            }

            impl Sub<Array<$type>> for $type {
                type Output = Array<$type>;

                fn sub(self, rhs: Array<$type>) -> Array<$type> {
                    self - &rhs
                }
            }

            impl Mul<&Array<$type>> for $type {
                type Output = Array<$type>;

                fn mul(self, rhs: &Array<$type>) -> Array<$type> {
                    rhs.map(|&x| self * x)
                }
            }

            impl Mul<Array<$type>> for $type {
                type Output = Array<$type>;

                fn mul(self, rhs: Array<$type>) -> Array<$type> {
                    self * &rhs
                }
            }

            impl Div<&Array<$type>> for $type {
                type Output = Array<$type>;

                fn div(self, rhs: &Array<$type>) -> Array<$type> {
                    rhs.map(|&x| self / x)
                }
            }

            impl Div<Array<$type>> for $type {
                type Output = Array<$type>;

                fn div(self, rhs: Array<$type>) -> Array<$type> {
                    self / &rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl<T: Copy + Neg<Output = T>> Neg for &Array<T> {
    type Output = Array<T>;

    fn neg(self) -> Array<T> {
        self.map(|&x| -x)
    }
}

impl<T: Copy + Neg<Output = T>> Neg for Array<T> {
    type Output = Array<T>;

    fn neg(self) -> Array<T> {
        -&self
    }
}

impl<T: Copy + Not<Output = T>> Not for &Array<T> {
    type Output = Array<T>;

    fn not(self) -> Array<T> {
        self.map(|&x| !x)
    }
}

impl<T: Copy + Not<Output = T>> Not for Array<T> {
    type Output = Array<T>;

    fn not(self) -> Array<T> {
        !&self
    }
}

#[cfg(test)]
mod tests {
    use crate::Array;

    #[test]
    fn test_array_array_arithmetic() {
        let a = Array::from([[1, 2], [3, 4]]);
        let b = Array::from([[10, 20], [30, 40]]);

        assert_eq!((&a + &b).data(), [11, 22, 33, 44]);
        assert_eq!((&b - &a).data(), [9, 18, 27, 36]);
        assert_eq!((&a * &a).data(), [1, 4, 9, 16]);
        assert_eq!((&b / &a).data(), [10, 10, 10, 10]);
        assert_eq!((&b % &a).data(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_array_scalar_arithmetic() {
        let a: Array<f64> = Array::from([[1.0, 2.0], [3.0, 4.0]]);

        assert_eq!((&a + 1.0).data(), [2.0, 3.0, 4.0, 5.0]);
        assert_eq!((&a * 2.0).data(), [2.0, 4.0, 6.0, 8.0]);
        assert_eq!((10.0 - &a).data(), [9.0, 8.0, 7.0, 6.0]);
        assert_eq!((8.0 / &a).data(), [8.0, 4.0, 8.0 / 3.0, 2.0]);
        assert_eq!((1 + &Array::<i32>::from([[1, 2]])).data(), [2, 3]);
    }

    #[test]
    fn test_neg_and_not() {
        let a = Array::from([[1, -2]]);
        assert_eq!((-&a).data(), [-1, 2]);

        let mask = Array::from([[true, false]]);
        assert_eq!((!&mask).data(), [false, true]);
    }

    #[test]
    fn test_bitwise_ops() {
        let a = Array::from([[0b1100u8, 0b1010]]);
        let b = Array::from([[0b1010u8, 0b0110]]);
        assert_eq!((&a & &b).data(), [0b1000, 0b0010]);
        assert_eq!((&a | &b).data(), [0b1110, 0b1110]);
        assert_eq!((&a ^ &b).data(), [0b0110, 0b1100]);

        let x = Array::from([[true, true, false]]);
        let y = Array::from([[true, false, false]]);
        assert_eq!((&x & &y).data(), [true, false, false]);
        assert_eq!((&x | &y).data(), [true, true, false]);
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_shape_mismatch_panics() {
        let a = Array::from([[1, 2]]);
        let b = Array::from([[1], [2]]);
        let _ = &a + &b;
    }
}
