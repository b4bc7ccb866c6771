//! Ordering operations: sorting, partitioning and order statistics.

use std::cmp::Ordering;

use numat_array::number::{Cast, IsNaN};
use numat_array::Array;

use crate::errors::ReduceError;
use crate::reduce::{scan_lanes, try_reduce_lanes, try_scan_lanes, Axis};

/// Total ordering over partially ordered elements.
///
/// Incomparable values (float NaNs) sort after every comparable value, so
/// sorting never panics on NaN input.
#[allow(clippy::eq_op)] // x == x is the NaN probe
pub(crate) fn total_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        let a_valid = a == a;
        let b_valid = b == b;
        if a_valid == b_valid {
            Ordering::Equal
        } else if a_valid {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    })
}

/// Sort each lane ascending.
///
/// The result preserves the input shape for [`Axis::Row`] and
/// [`Axis::Col`]; [`Axis::None`] yields the sorted flattening, `(1, size)`.
pub fn sort<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + PartialOrd,
{
    scan_lanes(array, axis, |lane| {
        let mut values: Vec<T> = lane.collect();
        values.sort_unstable_by(total_order);
        values
    })
}

/// Return, for each lane, the positions that would sort it ascending.
///
/// The sort is stable: equal elements keep their original relative order,
/// and indexing the original lane by the result yields the sorted lane.
pub fn argsort<T>(array: &Array<T>, axis: Axis) -> Array<usize>
where
    T: Copy + PartialOrd,
{
    scan_lanes(array, axis, |lane| {
        let values: Vec<T> = lane.collect();
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&i, &j| total_order(&values[i], &values[j]));
        order
    })
}

/// Weakly order each lane around its `k`-th element: everything before
/// position `k` compares `<=` to the element at `k`, and everything from
/// `k` on compares `>=` to it. No further ordering is guaranteed.
pub fn partition<T>(array: &Array<T>, k: usize, axis: Axis) -> Result<Array<T>, ReduceError>
where
    T: Copy + PartialOrd,
{
    try_scan_lanes(array, axis, |lane| {
        let mut values: Vec<T> = lane.collect();
        if k >= values.len() {
            return Err(ReduceError::KthOutOfRange {
                k,
                len: values.len(),
            });
        }
        values.select_nth_unstable_by(k, total_order);
        Ok(values)
    })
}

/// Like [`partition`], but returns the positions the partitioned elements
/// had in the original lane.
pub fn argpartition<T>(array: &Array<T>, k: usize, axis: Axis) -> Result<Array<usize>, ReduceError>
where
    T: Copy + PartialOrd,
{
    try_scan_lanes(array, axis, |lane| {
        let values: Vec<T> = lane.collect();
        if k >= values.len() {
            return Err(ReduceError::KthOutOfRange {
                k,
                len: values.len(),
            });
        }
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.select_nth_unstable_by(k, |&i, &j| total_order(&values[i], &values[j]));
        Ok(order)
    })
}

/// How [`percentile`] computes a value that falls between two order
/// statistics `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    /// Take `i`.
    Lower,

    /// Take `j`.
    Higher,

    /// Take whichever of `i` and `j` is nearest; `i` on a tie.
    Nearest,

    /// Take `(i + j) / 2`.
    Midpoint,

    /// Interpolate linearly between `i` and `j`.
    Linear,
}

fn percentile_of(
    values: &mut [f64],
    q: f64,
    interp: Interpolation,
) -> Result<f64, ReduceError> {
    if values.is_empty() {
        return Err(ReduceError::EmptyInput);
    }
    if values.len() == 1 {
        return Ok(values[0]);
    }

    values.sort_unstable_by(total_order);
    let n = values.len();
    if q == 0.0 {
        return Ok(values[0]);
    }
    if q == 100.0 {
        return Ok(values[n - 1]);
    }

    let span = (n - 1) as f64;
    let lower = ((span * q / 100.0).floor() as usize).min(n - 2);

    let result = match interp {
        Interpolation::Lower => values[lower],
        Interpolation::Higher => values[lower + 1],
        Interpolation::Midpoint => (values[lower] + values[lower + 1]) / 2.0,
        Interpolation::Nearest => {
            let percent = q / 100.0;
            let diff_lower = percent - lower as f64 / span;
            let diff_upper = (lower + 1) as f64 / span - percent;
            if diff_lower <= diff_upper {
                values[lower]
            } else {
                values[lower + 1]
            }
        }
        Interpolation::Linear => {
            let percent_lower = lower as f64 / span;
            let fraction =
                (q / 100.0 - percent_lower) / ((lower + 1) as f64 / span - percent_lower);
            values[lower] + (values[lower + 1] - values[lower]) * fraction
        }
    };
    Ok(result)
}

/// Compute the `q`-th percentile of each lane, `q` in `[0, 100]`.
pub fn percentile<T>(
    array: &Array<T>,
    q: f64,
    axis: Axis,
    interp: Interpolation,
) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64>,
{
    if !(0.0..=100.0).contains(&q) {
        return Err(ReduceError::PercentileOutOfRange { q });
    }
    try_reduce_lanes(array, axis, |lane| {
        let mut values: Vec<f64> = lane.map(Cast::cast).collect();
        percentile_of(&mut values, q, interp)
    })
}

/// [`percentile`] over the non-NaN elements of each lane.
pub fn nanpercentile<T>(
    array: &Array<T>,
    q: f64,
    axis: Axis,
    interp: Interpolation,
) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64> + IsNaN,
{
    if !(0.0..=100.0).contains(&q) {
        return Err(ReduceError::PercentileOutOfRange { q });
    }
    try_reduce_lanes(array, axis, |lane| {
        let mut values: Vec<f64> = lane.filter(|x| !x.is_nan()).map(Cast::cast).collect();
        if values.is_empty() {
            return Err(ReduceError::NoValidElements);
        }
        percentile_of(&mut values, q, interp)
    })
}

#[cfg(test)]
mod tests {
    use numat_array::rng::XorShiftRng;
    use numat_array::{Array, Shape};
    use numat_testing::TestCases;

    use super::{argpartition, argsort, nanpercentile, partition, percentile, sort, Interpolation};
    use crate::errors::ReduceError;
    use crate::reduce::Axis;

    #[test]
    fn test_sort() {
        let a = Array::from([[9, 1, 5], [3, 7, 2], [8, 4, 6]]);

        let flat = sort(&a, Axis::None);
        assert_eq!(flat.shape(), Shape::new(1, 9));
        assert_eq!(flat.data(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let down = sort(&a, Axis::Row);
        assert_eq!(down.shape(), Shape::new(3, 3));
        assert_eq!(down.data(), [3, 1, 2, 8, 4, 5, 9, 7, 6]);

        let across = sort(&a, Axis::Col);
        assert_eq!(across.data(), [1, 5, 9, 2, 3, 7, 4, 6, 8]);
    }

    #[test]
    fn test_sort_puts_nans_last() {
        let a = Array::from([[f64::NAN, 1.0, 0.5]]);
        let sorted = sort(&a, Axis::None);
        assert_eq!(sorted.data()[..2], [0.5, 1.0]);
        assert!(sorted.data()[2].is_nan());
    }

    #[test]
    fn test_argsort_consistency() {
        // flatten(a)[argsort(a)] == sort(a), on random data.
        let mut rng = XorShiftRng::new(5550);
        for _ in 0..10 {
            let data: Vec<i32> = rng.iter().take(24).collect();
            let a = Array::from_shape_vec((4, 6), data).unwrap();

            for axis in [Axis::None, Axis::Row, Axis::Col] {
                let sorted = sort(&a, axis);
                let order = argsort(&a, axis);
                match axis {
                    Axis::None => {
                        let flat = a.flatten();
                        let picked: Vec<i32> = order
                            .iter()
                            .map(|&i| *flat.at(0, i).unwrap())
                            .collect();
                        assert_eq!(picked, sorted.data());
                    }
                    Axis::Col => {
                        for row in 0..a.rows() {
                            for col in 0..a.cols() {
                                let src = order[(row, col)];
                                assert_eq!(a[(row, src)], sorted[(row, col)]);
                            }
                        }
                    }
                    Axis::Row => {
                        for row in 0..a.rows() {
                            for col in 0..a.cols() {
                                let src = order[(row, col)];
                                assert_eq!(a[(src, col)], sorted[(row, col)]);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_argsort_is_stable() {
        let a = Array::from([[2, 1, 2, 1]]);
        assert_eq!(argsort(&a, Axis::None).data(), [1, 3, 0, 2]);
    }

    #[test]
    fn test_partition_property() {
        fastrand::seed(7721);
        for _ in 0..10 {
            let data: Vec<i32> = (0..15).map(|_| fastrand::i32(-50..50)).collect();
            let a = Array::from_shape_vec((1, 15), data).unwrap();
            let k = fastrand::usize(0..15);

            let parted = partition(&a, k, Axis::None).unwrap();
            let pivot = parted.data()[k];
            assert!(parted.data()[..k].iter().all(|&x| x <= pivot));
            assert!(parted.data()[k..].iter().all(|&x| x >= pivot));
        }
    }

    #[test]
    fn test_partition_axis_and_errors() {
        let a = Array::from([[3, 1, 2], [9, 7, 8]]);
        let parted = partition(&a, 0, Axis::Col).unwrap();
        assert_eq!(parted.shape(), Shape::new(2, 3));
        assert_eq!(parted[(0, 0)], 1);
        assert_eq!(parted[(1, 0)], 7);

        assert_eq!(
            partition(&a, 3, Axis::Col),
            Err(ReduceError::KthOutOfRange { k: 3, len: 3 })
        );
    }

    #[test]
    fn test_argpartition() {
        let a = Array::from([[5, 1, 4, 2]]);
        let order = argpartition(&a, 1, Axis::None).unwrap();
        // The element at partition position 1 is the second smallest.
        assert_eq!(a.data()[order[(0, 1)]], 2);
    }

    #[test]
    fn test_percentile_interpolation_modes() {
        #[derive(Debug)]
        struct Case {
            q: f64,
            interp: Interpolation,
            expected: f64,
        }

        let cases = [
            Case {
                q: 50.0,
                interp: Interpolation::Linear,
                expected: 2.5,
            },
            Case {
                q: 50.0,
                interp: Interpolation::Lower,
                expected: 2.0,
            },
            Case {
                q: 50.0,
                interp: Interpolation::Higher,
                expected: 3.0,
            },
            Case {
                q: 50.0,
                interp: Interpolation::Midpoint,
                expected: 2.5,
            },
            // Equidistant: nearest resolves to the lower statistic.
            Case {
                q: 50.0,
                interp: Interpolation::Nearest,
                expected: 2.0,
            },
            Case {
                q: 0.0,
                interp: Interpolation::Linear,
                expected: 1.0,
            },
            Case {
                q: 100.0,
                interp: Interpolation::Linear,
                expected: 4.0,
            },
            Case {
                q: 25.0,
                interp: Interpolation::Linear,
                expected: 1.75,
            },
        ];

        cases.test_each(|case| {
            let a = Array::from([[4.0, 1.0, 3.0, 2.0]]);
            let out = percentile(&a, case.q, Axis::None, case.interp).unwrap();
            assert_eq!(out.item(), Some(case.expected));
        });
    }

    #[test]
    fn test_percentile_per_axis() {
        let a = Array::from([[1.0, 2.0], [3.0, 4.0]]);
        let down = percentile(&a, 50.0, Axis::Row, Interpolation::Linear).unwrap();
        assert_eq!(down.data(), [2.0, 3.0]);
        let across = percentile(&a, 50.0, Axis::Col, Interpolation::Linear).unwrap();
        assert_eq!(across.data(), [1.5, 3.5]);
    }

    #[test]
    fn test_percentile_out_of_range() {
        let a = Array::from([[1.0, 2.0]]);
        assert!(matches!(
            percentile(&a, 101.0, Axis::None, Interpolation::Linear),
            Err(ReduceError::PercentileOutOfRange { .. })
        ));
    }

    #[test]
    fn test_nanpercentile_filters() {
        let a = Array::from([[f64::NAN, 1.0, 2.0, 3.0]]);
        let out = nanpercentile(&a, 50.0, Axis::None, Interpolation::Linear).unwrap();
        assert_eq!(out.item(), Some(2.0));

        let all_nan = Array::from([[f64::NAN]]);
        assert_eq!(
            nanpercentile(&all_nan, 50.0, Axis::None, Interpolation::Linear),
            Err(ReduceError::NoValidElements)
        );
    }
}
