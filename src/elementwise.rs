//! Elementwise functions: comparisons, logical combinators and float math.
//!
//! Arithmetic operators (`+`, `-`, `*`, `/`, `%`, bitwise) live on the
//! array type itself; this module provides the function surface that
//! produces new arrays from existing ones, including comparison functions
//! returning boolean arrays and the transcendental map family for float
//! elements.

use std::ops::Rem;

use numat_array::number::AsBool;
use numat_array::Array;

/// Float primitives and the math functions the elementwise maps need.
pub trait Float: Copy + PartialOrd {
    fn abs(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn trunc(self) -> Self;
    fn signum(self) -> Self;
    fn powf(self, n: Self) -> Self;
}

macro_rules! impl_float {
    ($type:ty) => {
        impl Float for $type {
            fn abs(self) -> Self {
                <$type>::abs(self)
            }

            fn exp(self) -> Self {
                <$type>::exp(self)
            }

            fn ln(self) -> Self {
                <$type>::ln(self)
            }

            fn log2(self) -> Self {
                <$type>::log2(self)
            }

            fn log10(self) -> Self {
                <$type>::log10(self)
            }

            fn sqrt(self) -> Self {
                <$type>::sqrt(self)
            }

            fn cbrt(self) -> Self {
                <$type>::cbrt(self)
            }

            fn sin(self) -> Self {
                <$type>::sin(self)
            }

            fn cos(self) -> Self {
                <$type>::cos(self)
            }

            fn tan(self) -> Self {
                <$type>::tan(self)
            }

            fn asin(self) -> Self {
                <$type>::asin(self)
            }

            fn acos(self) -> Self {
                <$type>::acos(self)
            }

            fn atan(self) -> Self {
                <$type>::atan(self)
            }

            fn atan2(self, other: Self) -> Self {
                <$type>::atan2(self, other)
            }

            fn sinh(self) -> Self {
                <$type>::sinh(self)
            }

            fn cosh(self) -> Self {
                <$type>::cosh(self)
            }

            fn tanh(self) -> Self {
                <$type>::tanh(self)
            }

            fn floor(self) -> Self {
                <$type>::floor(self)
            }

            fn ceil(self) -> Self {
                <$type>::ceil(self)
            }

            fn round(self) -> Self {
                <$type>::round(self)
            }

            fn trunc(self) -> Self {
                <$type>::trunc(self)
            }

            fn signum(self) -> Self {
                <$type>::signum(self)
            }

            fn powf(self, n: Self) -> Self {
                <$type>::powf(self, n)
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

/// Combine two same-shape arrays elementwise into a new array.
///
/// Panics if the shapes disagree.
pub(crate) fn zip_map<T, U, F>(a: &Array<T>, b: &Array<T>, f: F) -> Array<U>
where
    T: Copy,
    F: Fn(T, T) -> U,
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

macro_rules! impl_comparison {
    ($($name:ident, $scalar_name:ident => $op:tt),* $(,)?) => {
        $(
            /// Compare two same-shape arrays elementwise.
            pub fn $name<T: Copy + PartialOrd>(a: &Array<T>, b: &Array<T>) -> Array<bool> {
                zip_map(a, b, |x, y| x $op y)
            }

            /// Compare every element against a scalar.
            pub fn $scalar_name<T: Copy + PartialOrd>(a: &Array<T>, value: T) -> Array<bool> {
                a.map(|&x| x $op value)
            }
        )*
    };
}

impl_comparison!(
    equal, equal_scalar => ==,
    not_equal, not_equal_scalar => !=,
    less, less_scalar => <,
    less_equal, less_equal_scalar => <=,
    greater, greater_scalar => >,
    greater_equal, greater_equal_scalar => >=,
);

/// Elementwise truthiness conjunction.
pub fn logical_and<T: Copy + AsBool>(a: &Array<T>, b: &Array<T>) -> Array<bool> {
    zip_map(a, b, |x, y| x.as_bool() && y.as_bool())
}

/// Elementwise truthiness disjunction.
pub fn logical_or<T: Copy + AsBool>(a: &Array<T>, b: &Array<T>) -> Array<bool> {
    zip_map(a, b, |x, y| x.as_bool() || y.as_bool())
}

/// Elementwise exclusive or of truthiness.
pub fn logical_xor<T: Copy + AsBool>(a: &Array<T>, b: &Array<T>) -> Array<bool> {
    zip_map(a, b, |x, y| x.as_bool() != y.as_bool())
}

/// Elementwise truthiness negation.
pub fn logical_not<T: Copy + AsBool>(a: &Array<T>) -> Array<bool> {
    a.map(|x| !x.as_bool())
}

/// Select elementwise from `when_true` where `condition` holds and from
/// `when_false` elsewhere. All three arrays must share a shape.
pub fn where_<T: Copy>(
    condition: &Array<bool>,
    when_true: &Array<T>,
    when_false: &Array<T>,
) -> Array<T> {
    assert!(
        condition.shape() == when_true.shape() && condition.shape() == when_false.shape(),
        "shape mismatch: {} vs {} vs {}",
        condition.shape(),
        when_true.shape(),
        when_false.shape()
    );
    let data = condition
        .iter()
        .zip(when_true.iter().zip(when_false.iter()))
        .map(|(&cond, (&x, &y))| if cond { x } else { y })
        .collect();
    Array::from_shape_vec(condition.shape(), data).expect("zip preserves element count")
}

macro_rules! impl_float_unary {
    ($($name:ident => $method:ident),* $(,)?) => {
        $(
            #[doc = concat!("Elementwise `", stringify!($method), "`.")]
            pub fn $name<T: Float>(array: &Array<T>) -> Array<T> {
                array.map(|&x| x.$method())
            }
        )*
    };
}

impl_float_unary!(
    abs => abs,
    exp => exp,
    ln => ln,
    log2 => log2,
    log10 => log10,
    sqrt => sqrt,
    cbrt => cbrt,
    sin => sin,
    cos => cos,
    tan => tan,
    arcsin => asin,
    arccos => acos,
    arctan => atan,
    sinh => sinh,
    cosh => cosh,
    tanh => tanh,
    floor => floor,
    ceil => ceil,
    round => round,
    trunc => trunc,
    sign => signum,
);

/// Raise every element to the power `exponent`.
pub fn power<T: Float>(array: &Array<T>, exponent: T) -> Array<T> {
    array.map(|&x| x.powf(exponent))
}

/// Elementwise `a[i] ^ b[i]` for two same-shape arrays.
pub fn power_array<T: Float>(a: &Array<T>, b: &Array<T>) -> Array<T> {
    zip_map(a, b, |x, y| x.powf(y))
}

/// Elementwise floating remainder.
pub fn fmod<T: Copy + Rem<Output = T>>(a: &Array<T>, b: &Array<T>) -> Array<T> {
    zip_map(a, b, |x, y| x % y)
}

/// Elementwise four-quadrant arctangent of `y[i] / x[i]`.
pub fn arctan2<T: Float>(y: &Array<T>, x: &Array<T>) -> Array<T> {
    zip_map(y, x, |y, x| y.atan2(x))
}

/// Elementwise minimum of two same-shape arrays.
pub fn minimum<T: Copy + PartialOrd>(a: &Array<T>, b: &Array<T>) -> Array<T> {
    zip_map(a, b, |x, y| if y < x { y } else { x })
}

/// Elementwise maximum of two same-shape arrays.
pub fn maximum<T: Copy + PartialOrd>(a: &Array<T>, b: &Array<T>) -> Array<T> {
    zip_map(a, b, |x, y| if y > x { y } else { x })
}

/// Limit every element to the range `[lo, hi]`.
pub fn clip<T: Copy + PartialOrd>(array: &Array<T>, lo: T, hi: T) -> Array<T> {
    array.map(|&x| {
        if x < lo {
            lo
        } else if x > hi {
            hi
        } else {
            x
        }
    })
}

#[cfg(test)]
mod tests {
    use numat_array::test_util::expect_equal;
    use numat_array::Array;
    use numat_testing::TestCases;

    use super::*;

    #[test]
    fn test_comparisons() {
        let a = Array::from([[1, 5], [3, 3]]);
        let b = Array::from([[2, 5], [1, 3]]);

        assert_eq!(equal(&a, &b).data(), [false, true, false, true]);
        assert_eq!(not_equal(&a, &b).data(), [true, false, true, false]);
        assert_eq!(less(&a, &b).data(), [true, false, false, false]);
        assert_eq!(less_equal(&a, &b).data(), [true, true, false, true]);
        assert_eq!(greater(&a, &b).data(), [false, false, true, false]);
        assert_eq!(greater_equal(&a, &b).data(), [false, true, true, true]);

        assert_eq!(greater_scalar(&a, 3).data(), [false, true, false, false]);
        assert_eq!(equal_scalar(&a, 3).data(), [false, false, true, true]);
    }

    #[test]
    fn test_logical_ops() {
        let a = Array::from([[1, 0], [2, 0]]);
        let b = Array::from([[1, 1], [0, 0]]);

        assert_eq!(logical_and(&a, &b).data(), [true, false, false, false]);
        assert_eq!(logical_or(&a, &b).data(), [true, true, true, false]);
        assert_eq!(logical_xor(&a, &b).data(), [false, true, true, false]);
        assert_eq!(logical_not(&a).data(), [false, true, false, true]);
    }

    #[test]
    fn test_where() {
        let cond = Array::from([[true, false], [false, true]]);
        let x = Array::from([[1, 1], [1, 1]]);
        let y = Array::from([[9, 9], [9, 9]]);
        assert_eq!(where_(&cond, &x, &y).data(), [1, 9, 9, 1]);
    }

    #[test]
    fn test_float_maps_match_reference() {
        #[derive(Debug)]
        struct Case {
            input: f64,
        }

        let cases = [
            Case { input: 0.1 },
            Case { input: 1.0 },
            Case { input: 2.5 },
            Case { input: 9.0 },
        ];

        cases.test_each(|case| {
            let a = Array::from([[case.input]]);
            assert!((exp(&a).item().unwrap() - libm::exp(case.input)).abs() < 1e-12);
            assert!((ln(&a).item().unwrap() - libm::log(case.input)).abs() < 1e-12);
            assert!((sqrt(&a).item().unwrap() - libm::sqrt(case.input)).abs() < 1e-12);
            assert!((sin(&a).item().unwrap() - libm::sin(case.input)).abs() < 1e-12);
            assert!((cosh(&a).item().unwrap() - libm::cosh(case.input)).abs() < 1e-12);
        });
    }

    #[test]
    fn test_exp_ln_round_trip() {
        let a = Array::from([[0.5, 1.0], [2.0, 4.0]]);
        let round_tripped = ln(&exp(&a));
        expect_equal(&round_tripped, &a).unwrap();
    }

    #[test]
    fn test_rounding_and_sign() {
        let a = Array::from([[-1.5, -0.4, 0.4, 1.5]]);
        assert_eq!(floor(&a).data(), [-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(ceil(&a).data(), [-1.0, -0.0, 1.0, 2.0]);
        assert_eq!(trunc(&a).data(), [-1.0, -0.0, 0.0, 1.0]);
        assert_eq!(sign(&a).data(), [-1.0, -1.0, 1.0, 1.0]);
        assert_eq!(abs(&a).data(), [1.5, 0.4, 0.4, 1.5]);
    }

    #[test]
    fn test_power_and_fmod() {
        let a = Array::from([[1.0, 2.0, 3.0]]);
        assert_eq!(power(&a, 2.0).data(), [1.0, 4.0, 9.0]);

        let b = Array::from([[2.0, 3.0, 2.0]]);
        assert_eq!(power_array(&a, &b).data(), [1.0, 8.0, 9.0]);

        let m = fmod(&Array::from([[7.0, 8.5]]), &Array::from([[3.0, 4.0]]));
        assert_eq!(m.data(), [1.0, 0.5]);
    }

    #[test]
    fn test_minimum_maximum_clip() {
        let a = Array::from([[1, 8], [5, 2]]);
        let b = Array::from([[3, 4], [5, 1]]);
        assert_eq!(minimum(&a, &b).data(), [1, 4, 5, 1]);
        assert_eq!(maximum(&a, &b).data(), [3, 8, 5, 2]);
        assert_eq!(clip(&a, 2, 5).data(), [2, 5, 5, 2]);
    }

    #[test]
    fn test_arctan2() {
        let y = Array::from([[1.0, -1.0]]);
        let x = Array::from([[1.0, 1.0]]);
        let out = arctan2(&y, &x);
        assert!((out.data()[0] - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!((out.data()[1] + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_comparison_shape_mismatch_panics() {
        let a = Array::from([[1, 2]]);
        let b = Array::from([[1], [2]]);
        let _ = equal(&a, &b);
    }
}
