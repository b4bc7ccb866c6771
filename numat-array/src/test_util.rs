use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::iter::zip;

use crate::Array;

/// Trait that tests whether two values are approximately equal.
///
/// The comparison takes into account both the absolute difference of the
/// values and the relative difference, with defaults matching NumPy's
/// `np.allclose`.
pub trait ApproxEq: Sized {
    /// Return the default absolute tolerance value.
    fn default_abs_tolerance() -> Self;

    /// Return the default relative tolerance value.
    fn default_rel_tolerance() -> Self;

    /// Test whether `self` is "close" to `other` according to the formula:
    ///
    /// ```text
    /// (self - other).abs() <= atol + rtol * other.abs()
    /// ```
    fn approx_eq_with_atol_rtol(&self, other: &Self, atol: Self, rtol: Self) -> bool;

    /// Test if `other` is approximately equal to `self` with the default
    /// tolerances for this type.
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with_atol_rtol(
            other,
            Self::default_abs_tolerance(),
            Self::default_rel_tolerance(),
        )
    }
}

macro_rules! impl_approx_eq_float {
    ($type:ty) => {
        impl ApproxEq for $type {
            fn default_abs_tolerance() -> $type {
                1e-8
            }

            fn default_rel_tolerance() -> $type {
                1e-5
            }

            fn approx_eq_with_atol_rtol(&self, other: &$type, atol: $type, rtol: $type) -> bool {
                (self - other).abs() <= atol + rtol * other.abs()
            }
        }
    };
}

impl_approx_eq_float!(f32);
impl_approx_eq_float!(f64);

macro_rules! impl_approx_eq_int {
    ($type:ty) => {
        impl ApproxEq for $type {
            fn default_abs_tolerance() -> $type {
                0
            }

            fn default_rel_tolerance() -> $type {
                0
            }

            fn approx_eq_with_atol_rtol(&self, other: &$type, atol: $type, rtol: $type) -> bool {
                (self - other).abs() <= atol + rtol * other.abs()
            }
        }
    };
}

impl_approx_eq_int!(i32);
impl_approx_eq_int!(i64);

#[derive(Debug)]
pub enum ExpectEqualError {
    ShapeMismatch(String),
    ValueMismatch(String),
}

impl Display for ExpectEqualError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectEqualError::ShapeMismatch(details) => write!(f, "{}", details),
            ExpectEqualError::ValueMismatch(details) => write!(f, "{}", details),
        }
    }
}

impl Error for ExpectEqualError {}

/// Check that the shapes of two arrays are equal and that their contents
/// are approximately equal.
///
/// If there are mismatches, this returns an `Err` with a message indicating
/// the count of mismatches and details of the first N cases.
pub fn expect_equal<T>(x: &Array<T>, y: &Array<T>) -> Result<(), ExpectEqualError>
where
    T: Clone + Debug + ApproxEq,
{
    if x.shape() != y.shape() {
        return Err(ExpectEqualError::ShapeMismatch(format!(
            "Arrays have different shapes. {} vs. {}",
            x.shape(),
            y.shape()
        )));
    }

    let mismatches: Vec<_> = zip(x.iter(), y.iter())
        .enumerate()
        .filter_map(|(i, (xi, yi))| {
            if !xi.approx_eq(yi) {
                Some(((i / x.cols().max(1), i % x.cols().max(1)), xi, yi))
            } else {
                None
            }
        })
        .collect();

    if !mismatches.is_empty() {
        let max_examples = 16;
        Err(ExpectEqualError::ValueMismatch(format!(
            "Array values differ at {} of {} indexes: {:?}{}",
            mismatches.len(),
            x.size(),
            &mismatches[..mismatches.len().min(max_examples)],
            if mismatches.len() > max_examples {
                "..."
            } else {
                ""
            }
        )))
    } else {
        Ok(())
    }
}

/// Return true if `a` and `b` have the same shape and data, treating NaN
/// values as equal.
pub fn eq_with_nans(a: &Array<f64>, b: &Array<f64>) -> bool {
    if a.shape() != b.shape() {
        false
    } else {
        zip(a.iter(), b.iter()).all(|(a, b)| (a.is_nan() && b.is_nan()) || a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::{eq_with_nans, expect_equal, ApproxEq};
    use crate::Array;

    #[test]
    fn test_approx_eq_f64() {
        let vals = [-1000., -5., -0.5, 0., 0.5, 5., 1000.];
        for val in vals {
            assert!(val.approx_eq(&val));
        }
        for val in vals {
            // Slightly inside the default tolerances.
            let close = val + 9e-9 + val * 9e-6;
            assert!(val.approx_eq(&close));
        }
        for val in vals {
            // Outside the default tolerances.
            let not_close = val + 2e-8 + val * 2e-5;
            assert_ne!(val, not_close);
            assert!(!val.approx_eq(&not_close));
        }
    }

    #[test]
    fn test_expect_equal() {
        let a = Array::from([[1.0f64, 2.0], [3.0, 4.0]]);
        assert!(expect_equal(&a, &a.clone()).is_ok());

        let b = Array::from([[1.0f64, 2.0], [3.0, 4.5]]);
        let err = expect_equal(&a, &b).unwrap_err();
        assert!(err.to_string().contains("differ at 1 of 4"));

        let c = Array::from([[1.0f64, 2.0, 3.0, 4.0]]);
        assert!(expect_equal(&a, &c).is_err());
    }

    #[test]
    fn test_eq_with_nans() {
        let a = Array::from([[1.0, f64::NAN]]);
        assert!(eq_with_nans(&a, &a.clone()));
        assert!(!eq_with_nans(&a, &Array::from([[1.0, 2.0]])));
    }
}
