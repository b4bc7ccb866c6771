//! Reductions and scans along an axis of an array.

use std::iter::{Copied, Skip, StepBy, Take};
use std::ops::{Add, Mul, Sub};
use std::slice;

use numat_array::number::{AsBool, Cast, Identities, IsNaN};
use numat_array::{Array, Shape};

use crate::errors::ReduceError;
use crate::sort::total_order;

/// Selects the 1-D sequences ("lanes") a reduction or scan operates over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// One lane: the whole array flattened in row-major order. Reductions
    /// produce a `(1, 1)` result, scans a `(1, size)` row.
    None,

    /// Each column is an independent lane of length `rows`. Reductions
    /// produce `(1, cols)`, scans preserve the shape.
    Row,

    /// Each row is an independent lane of length `cols`. Reductions produce
    /// `(1, rows)`, scans preserve the shape.
    Col,
}

/// Iterator over one lane of an array.
pub type Lane<'a, T> = Take<StepBy<Skip<Copied<slice::Iter<'a, T>>>>>;

/// Storage walk for the lanes of an axis: lane `l` starts at offset
/// `l * spacing` and visits `len` elements `step` apart.
struct LaneSpec {
    count: usize,
    spacing: usize,
    step: usize,
    len: usize,
}

fn lane_spec(shape: Shape, axis: Axis) -> LaneSpec {
    match axis {
        Axis::None => LaneSpec {
            count: 1,
            spacing: 0,
            step: 1,
            len: shape.size(),
        },
        Axis::Row => LaneSpec {
            count: shape.cols(),
            spacing: 1,
            step: shape.cols(),
            len: shape.rows(),
        },
        Axis::Col => LaneSpec {
            count: shape.rows(),
            spacing: shape.cols(),
            step: 1,
            len: shape.cols(),
        },
    }
}

/// Return an iterator yielding every lane of `axis` in order.
pub(crate) fn lanes<T: Copy>(
    array: &Array<T>,
    axis: Axis,
) -> impl ExactSizeIterator<Item = Lane<'_, T>> {
    let spec = lane_spec(array.shape(), axis);
    (0..spec.count).map(move |lane| {
        array
            .data()
            .iter()
            .copied()
            .skip(lane * spec.spacing)
            .step_by(spec.step)
            .take(spec.len)
    })
}

/// Apply `f` to every lane, collecting one output value per lane.
///
/// The result is `(1, 1)` for [`Axis::None`], `(1, cols)` for
/// [`Axis::Row`] and `(1, rows)` for [`Axis::Col`]; the lanes arrive in
/// that output order, so a plain row vector of the per-lane results is the
/// reduced array.
pub(crate) fn reduce_lanes<T, U, F>(array: &Array<T>, axis: Axis, f: F) -> Array<U>
where
    T: Copy,
    F: Fn(Lane<'_, T>) -> U,
{
    Array::from_vec(lanes(array, axis).map(f).collect())
}

/// Fallible variant of [`reduce_lanes`].
pub(crate) fn try_reduce_lanes<T, U, F>(
    array: &Array<T>,
    axis: Axis,
    f: F,
) -> Result<Array<U>, ReduceError>
where
    T: Copy,
    F: Fn(Lane<'_, T>) -> Result<U, ReduceError>,
{
    let data = lanes(array, axis).map(f).collect::<Result<Vec<U>, _>>()?;
    Ok(Array::from_vec(data))
}

/// Apply `f` to every lane, producing one output element per input element.
///
/// The output keeps the input shape for [`Axis::Row`] and [`Axis::Col`],
/// and flattens to `(1, size)` for [`Axis::None`].
pub(crate) fn scan_lanes<T, U, F>(array: &Array<T>, axis: Axis, f: F) -> Array<U>
where
    T: Copy,
    U: Copy,
    F: Fn(Lane<'_, T>) -> Vec<U>,
{
    let results: Vec<Vec<U>> = lanes(array, axis).map(f).collect();

    let (shape, data) = match axis {
        Axis::None => {
            let data = results.into_iter().flatten().collect::<Vec<U>>();
            (Shape::new(1, data.len()), data)
        }
        // Row lanes are columns; interleave them back into row-major order.
        Axis::Row => {
            let mut data = Vec::with_capacity(array.size());
            for row in 0..array.rows() {
                for lane in &results {
                    data.push(lane[row]);
                }
            }
            (array.shape(), data)
        }
        Axis::Col => {
            let data = results.into_iter().flatten().collect();
            (array.shape(), data)
        }
    };

    Array::from_shape_vec(shape, data).expect("scan preserves element count")
}

/// Fallible variant of [`scan_lanes`].
pub(crate) fn try_scan_lanes<T, U, F>(
    array: &Array<T>,
    axis: Axis,
    f: F,
) -> Result<Array<U>, ReduceError>
where
    T: Copy,
    U: Copy,
    F: Fn(Lane<'_, T>) -> Result<Vec<U>, ReduceError>,
{
    let results: Vec<Vec<U>> = lanes(array, axis).map(f).collect::<Result<_, _>>()?;

    let (shape, data) = match axis {
        Axis::None => {
            let data = results.into_iter().flatten().collect::<Vec<U>>();
            (Shape::new(1, data.len()), data)
        }
        Axis::Row => {
            let mut data = Vec::with_capacity(array.size());
            for row in 0..array.rows() {
                for lane in &results {
                    data.push(lane[row]);
                }
            }
            (array.shape(), data)
        }
        Axis::Col => {
            let data = results.into_iter().flatten().collect();
            (array.shape(), data)
        }
    };

    Ok(Array::from_shape_vec(shape, data).expect("scan preserves element count"))
}

/// Sum the elements of each lane. An empty lane sums to zero.
pub fn sum<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + Add<Output = T> + Identities,
{
    reduce_lanes(array, axis, |lane| lane.fold(T::zero(), |acc, x| acc + x))
}

/// Multiply the elements of each lane. An empty lane has product one.
pub fn prod<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + Mul<Output = T> + Identities,
{
    reduce_lanes(array, axis, |lane| lane.fold(T::one(), |acc, x| acc * x))
}

fn mean_of(values: &[f64]) -> Result<f64, ReduceError> {
    if values.is_empty() {
        return Err(ReduceError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (ddof = 0) of a sequence.
fn variance_of(values: &[f64]) -> Result<f64, ReduceError> {
    let mean = mean_of(values)?;
    Ok(values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64)
}

fn median_of(values: &mut [f64]) -> Result<f64, ReduceError> {
    if values.is_empty() {
        return Err(ReduceError::EmptyInput);
    }
    values.sort_unstable_by(total_order);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Ok(values[mid])
    } else {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Arithmetic mean of each lane.
pub fn mean<T>(array: &Array<T>, axis: Axis) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64>,
{
    try_reduce_lanes(array, axis, |lane| {
        let values: Vec<f64> = lane.map(Cast::cast).collect();
        mean_of(&values)
    })
}

/// Population variance (ddof = 0) of each lane.
pub fn var<T>(array: &Array<T>, axis: Axis) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64>,
{
    try_reduce_lanes(array, axis, |lane| {
        let values: Vec<f64> = lane.map(Cast::cast).collect();
        variance_of(&values)
    })
}

/// Population standard deviation of each lane.
pub fn stdev<T>(array: &Array<T>, axis: Axis) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64>,
{
    Ok(var(array, axis)?.map(|v| v.sqrt()))
}

/// Median of each lane. Even-length lanes average the two middle elements.
pub fn median<T>(array: &Array<T>, axis: Axis) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64>,
{
    try_reduce_lanes(array, axis, |lane| {
        let mut values: Vec<f64> = lane.map(Cast::cast).collect();
        median_of(&mut values)
    })
}

fn min_of<T: Copy + PartialOrd>(mut lane: Lane<'_, T>) -> Result<T, ReduceError> {
    let Some(first) = lane.next() else {
        return Err(ReduceError::EmptyInput);
    };
    Ok(lane.fold(first, |best, x| if x < best { x } else { best }))
}

fn max_of<T: Copy + PartialOrd>(mut lane: Lane<'_, T>) -> Result<T, ReduceError> {
    let Some(first) = lane.next() else {
        return Err(ReduceError::EmptyInput);
    };
    Ok(lane.fold(first, |best, x| if x > best { x } else { best }))
}

/// Smallest element of each lane.
pub fn min<T>(array: &Array<T>, axis: Axis) -> Result<Array<T>, ReduceError>
where
    T: Copy + PartialOrd,
{
    try_reduce_lanes(array, axis, min_of)
}

/// Largest element of each lane.
pub fn max<T>(array: &Array<T>, axis: Axis) -> Result<Array<T>, ReduceError>
where
    T: Copy + PartialOrd,
{
    try_reduce_lanes(array, axis, max_of)
}

/// Difference between the largest and smallest element of each lane.
pub fn ptp<T>(array: &Array<T>, axis: Axis) -> Result<Array<T>, ReduceError>
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    try_reduce_lanes(array, axis, |lane| {
        Ok(max_of(lane.clone())? - min_of(lane)?)
    })
}

/// Position of the smallest element of each lane. The strict `<` comparison
/// makes the first occurrence win ties.
pub fn argmin<T>(array: &Array<T>, axis: Axis) -> Result<Array<usize>, ReduceError>
where
    T: Copy + PartialOrd,
{
    try_reduce_lanes(array, axis, |lane| {
        index_of_best(lane.enumerate(), |x, best| x < best)
    })
}

/// Position of the largest element of each lane; first occurrence wins.
pub fn argmax<T>(array: &Array<T>, axis: Axis) -> Result<Array<usize>, ReduceError>
where
    T: Copy + PartialOrd,
{
    try_reduce_lanes(array, axis, |lane| {
        index_of_best(lane.enumerate(), |x, best| x > best)
    })
}

fn index_of_best<T, I, Better>(iter: I, better: Better) -> Result<usize, ReduceError>
where
    T: Copy,
    I: Iterator<Item = (usize, T)>,
    Better: Fn(T, T) -> bool,
{
    let mut best: Option<(usize, T)> = None;
    for (index, value) in iter {
        match best {
            Some((_, best_value)) if better(value, best_value) => best = Some((index, value)),
            None => best = Some((index, value)),
            _ => {}
        }
    }
    best.map(|(index, _)| index).ok_or(ReduceError::EmptyInput)
}

/// True where every element of the lane is truthy. Vacuously true for an
/// empty lane.
pub fn all<T>(array: &Array<T>, axis: Axis) -> Array<bool>
where
    T: Copy + AsBool,
{
    reduce_lanes(array, axis, |mut lane| lane.all(|x| x.as_bool()))
}

/// True where any element of the lane is truthy.
pub fn any<T>(array: &Array<T>, axis: Axis) -> Array<bool>
where
    T: Copy + AsBool,
{
    reduce_lanes(array, axis, |mut lane| lane.any(|x| x.as_bool()))
}

/// True where no element of the lane is truthy: `none = !any`.
pub fn none_of<T>(array: &Array<T>, axis: Axis) -> Array<bool>
where
    T: Copy + AsBool,
{
    any(array, axis).map(|&x| !x)
}

/// Number of truthy elements in each lane.
pub fn count_nonzero<T>(array: &Array<T>, axis: Axis) -> Array<usize>
where
    T: Copy + AsBool,
{
    reduce_lanes(array, axis, |lane| lane.filter(|x| x.as_bool()).count())
}

/// Running sum along each lane, shape preserving.
pub fn cumsum<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + Add<Output = T> + Identities,
{
    scan_lanes(array, axis, |lane| {
        let mut acc = T::zero();
        lane.map(|x| {
            acc = acc + x;
            acc
        })
        .collect()
    })
}

/// Running product along each lane, shape preserving.
pub fn cumprod<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + Mul<Output = T> + Identities,
{
    scan_lanes(array, axis, |lane| {
        let mut acc = T::one();
        lane.map(|x| {
            acc = acc * x;
            acc
        })
        .collect()
    })
}

/// Sum of the non-NaN elements of each lane; zero if none remain.
pub fn nansum<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + Add<Output = T> + Identities + IsNaN,
{
    reduce_lanes(array, axis, |lane| {
        lane.filter(|x| !x.is_nan())
            .fold(T::zero(), |acc, x| acc + x)
    })
}

/// Product of the non-NaN elements of each lane; one if none remain.
pub fn nanprod<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + Mul<Output = T> + Identities + IsNaN,
{
    reduce_lanes(array, axis, |lane| {
        lane.filter(|x| !x.is_nan()).fold(T::one(), |acc, x| acc * x)
    })
}

fn valid_values<T: Copy + Cast<f64> + IsNaN>(lane: Lane<'_, T>) -> Result<Vec<f64>, ReduceError> {
    let values: Vec<f64> = lane.filter(|x| !x.is_nan()).map(Cast::cast).collect();
    if values.is_empty() {
        return Err(ReduceError::NoValidElements);
    }
    Ok(values)
}

/// Mean of the non-NaN elements of each lane.
pub fn nanmean<T>(array: &Array<T>, axis: Axis) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64> + IsNaN,
{
    try_reduce_lanes(array, axis, |lane| mean_of(&valid_values(lane)?))
}

/// Population variance of the non-NaN elements of each lane.
pub fn nanvar<T>(array: &Array<T>, axis: Axis) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64> + IsNaN,
{
    try_reduce_lanes(array, axis, |lane| variance_of(&valid_values(lane)?))
}

/// Population standard deviation of the non-NaN elements of each lane.
pub fn nanstdev<T>(array: &Array<T>, axis: Axis) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64> + IsNaN,
{
    Ok(nanvar(array, axis)?.map(|v| v.sqrt()))
}

/// Median of the non-NaN elements of each lane.
pub fn nanmedian<T>(array: &Array<T>, axis: Axis) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64> + IsNaN,
{
    try_reduce_lanes(array, axis, |lane| median_of(&mut valid_values(lane)?))
}

/// Smallest non-NaN element of each lane.
pub fn nanmin<T>(array: &Array<T>, axis: Axis) -> Result<Array<T>, ReduceError>
where
    T: Copy + PartialOrd + IsNaN,
{
    try_reduce_lanes(array, axis, |lane| {
        lane.filter(|x| !x.is_nan())
            .fold(None, |best, x| match best {
                Some(b) if !(x < b) => best,
                _ => Some(x),
            })
            .ok_or(ReduceError::NoValidElements)
    })
}

/// Largest non-NaN element of each lane.
pub fn nanmax<T>(array: &Array<T>, axis: Axis) -> Result<Array<T>, ReduceError>
where
    T: Copy + PartialOrd + IsNaN,
{
    try_reduce_lanes(array, axis, |lane| {
        lane.filter(|x| !x.is_nan())
            .fold(None, |best, x| match best {
                Some(b) if !(x > b) => best,
                _ => Some(x),
            })
            .ok_or(ReduceError::NoValidElements)
    })
}

/// Position of the smallest non-NaN element of each lane, indexed into the
/// unfiltered lane; first occurrence wins.
pub fn nanargmin<T>(array: &Array<T>, axis: Axis) -> Result<Array<usize>, ReduceError>
where
    T: Copy + PartialOrd + IsNaN,
{
    try_reduce_lanes(array, axis, |lane| {
        index_of_best(lane.enumerate().filter(|(_, x)| !x.is_nan()), |x, best| {
            x < best
        })
        .map_err(|_| ReduceError::NoValidElements)
    })
}

/// Position of the largest non-NaN element of each lane, indexed into the
/// unfiltered lane; first occurrence wins.
pub fn nanargmax<T>(array: &Array<T>, axis: Axis) -> Result<Array<usize>, ReduceError>
where
    T: Copy + PartialOrd + IsNaN,
{
    try_reduce_lanes(array, axis, |lane| {
        index_of_best(lane.enumerate().filter(|(_, x)| !x.is_nan()), |x, best| {
            x > best
        })
        .map_err(|_| ReduceError::NoValidElements)
    })
}

/// Running sum along each lane with NaN elements contributing zero.
pub fn nancumsum<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + Add<Output = T> + Identities + IsNaN,
{
    scan_lanes(array, axis, |lane| {
        let mut acc = T::zero();
        lane.map(|x| {
            if !x.is_nan() {
                acc = acc + x;
            }
            acc
        })
        .collect()
    })
}

/// Running product along each lane with NaN elements contributing one.
pub fn nancumprod<T>(array: &Array<T>, axis: Axis) -> Array<T>
where
    T: Copy + Mul<Output = T> + Identities + IsNaN,
{
    scan_lanes(array, axis, |lane| {
        let mut acc = T::one();
        lane.map(|x| {
            if !x.is_nan() {
                acc = acc * x;
            }
            acc
        })
        .collect()
    })
}

/// Covariance matrix of the array's rows, each row a variable and each
/// column an observation.
///
/// With `bias` false the normalization is `n - 1`, with `bias` true it is
/// `n`, where `n` is the observation count.
pub fn cov<T>(array: &Array<T>, bias: bool) -> Result<Array<f64>, ReduceError>
where
    T: Copy + Cast<f64>,
{
    let n = array.cols();
    let ddof = if bias { 0 } else { 1 };
    if n == 0 || n <= ddof {
        return Err(ReduceError::EmptyInput);
    }
    let denom = (n - ddof) as f64;

    let deviations: Vec<Vec<f64>> = array
        .iter_rows()
        .map(|row| {
            let values: Vec<f64> = row.iter().map(|&x| x.cast()).collect();
            let mean = values.iter().sum::<f64>() / n as f64;
            values.into_iter().map(|v| v - mean).collect()
        })
        .collect();

    let vars = array.rows();
    let mut out = Array::zeros((vars, vars));
    for i in 0..vars {
        for j in i..vars {
            let cov_ij: f64 = deviations[i]
                .iter()
                .zip(&deviations[j])
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / denom;
            *out.at_mut(i, j).expect("in bounds") = cov_ij;
            *out.at_mut(j, i).expect("in bounds") = cov_ij;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use numat_array::test_util::expect_equal;
    use numat_array::{Array, Shape};
    use numat_testing::TestCases;

    use super::*;
    use crate::errors::ReduceError;

    fn sample() -> Array<i32> {
        Array::from([[9, 1, 5], [3, 7, 2], [8, 4, 6]])
    }

    #[test]
    fn test_sum_shape_law() {
        #[derive(Debug)]
        struct Case {
            axis: Axis,
            expected_shape: Shape,
            expected: Vec<i32>,
        }

        let cases = [
            Case {
                axis: Axis::None,
                expected_shape: Shape::new(1, 1),
                expected: vec![45],
            },
            // Row axis reduces down each column.
            Case {
                axis: Axis::Row,
                expected_shape: Shape::new(1, 3),
                expected: vec![20, 12, 13],
            },
            // Col axis reduces across each row.
            Case {
                axis: Axis::Col,
                expected_shape: Shape::new(1, 3),
                expected: vec![15, 12, 18],
            },
        ];

        cases.test_each(|case| {
            let out = sum(&sample(), case.axis);
            assert_eq!(out.shape(), case.expected_shape);
            assert_eq!(out.data(), case.expected);
        });
    }

    #[test]
    fn test_prod() {
        let a = Array::from([[1, 2], [3, 4]]);
        assert_eq!(prod(&a, Axis::None).item(), Some(24));
        assert_eq!(prod(&a, Axis::Row).data(), [3, 8]);
        assert_eq!(prod(&a, Axis::Col).data(), [2, 12]);
    }

    #[test]
    fn test_mean_var_stdev() {
        let a = Array::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(mean(&a, Axis::None).unwrap().item(), Some(2.5));
        assert_eq!(mean(&a, Axis::Row).unwrap().data(), [2.0, 3.0]);
        assert_eq!(mean(&a, Axis::Col).unwrap().data(), [1.5, 3.5]);

        // Population variance of [1, 2, 3, 4] is 1.25.
        assert_eq!(var(&a, Axis::None).unwrap().item(), Some(1.25));
        let expected = Array::from([[1.25f64.sqrt()]]);
        expect_equal(&stdev(&a, Axis::None).unwrap(), &expected).unwrap();

        let empty: Array<f64> = Array::from_vec(vec![]);
        assert_eq!(mean(&empty, Axis::None), Err(ReduceError::EmptyInput));
    }

    #[test]
    fn test_median() {
        let a = Array::from([[4.0, 1.0, 3.0]]);
        assert_eq!(median(&a, Axis::None).unwrap().item(), Some(3.0));

        // Even length averages the two middle elements.
        let b = Array::from([[4.0, 1.0, 3.0, 2.0]]);
        assert_eq!(median(&b, Axis::None).unwrap().item(), Some(2.5));

        // The same rule applies per lane.
        let c = Array::from([[1.0, 10.0], [3.0, 20.0]]);
        assert_eq!(median(&c, Axis::Row).unwrap().data(), [2.0, 15.0]);
    }

    #[test]
    fn test_min_max_ptp() {
        let a = sample();
        assert_eq!(min(&a, Axis::None).unwrap().item(), Some(1));
        assert_eq!(max(&a, Axis::None).unwrap().item(), Some(9));
        assert_eq!(min(&a, Axis::Row).unwrap().data(), [3, 1, 2]);
        assert_eq!(max(&a, Axis::Col).unwrap().data(), [9, 7, 8]);
        assert_eq!(ptp(&a, Axis::None).unwrap().item(), Some(8));
        assert_eq!(ptp(&a, Axis::Col).unwrap().data(), [8, 5, 4]);
    }

    #[test]
    fn test_argmin_argmax() {
        let a = sample();
        // 9 sits at flat position 0.
        assert_eq!(argmax(&a, Axis::None).unwrap().item(), Some(0));
        assert_eq!(argmin(&a, Axis::None).unwrap().item(), Some(1));
        assert_eq!(argmax(&a, Axis::Row).unwrap().data(), [0, 1, 2]);
        assert_eq!(argmin(&a, Axis::Col).unwrap().data(), [1, 2, 1]);

        // Ties resolve to the first occurrence in scan order.
        let tied = Array::from([[5, 5, 5]]);
        assert_eq!(argmax(&tied, Axis::None).unwrap().item(), Some(0));
        assert_eq!(argmin(&tied, Axis::None).unwrap().item(), Some(0));
    }

    #[test]
    fn test_boolean_reductions() {
        let a = Array::from([[1, 0, 2], [3, 4, 5]]);
        assert_eq!(all(&a, Axis::None).item(), Some(false));
        assert_eq!(any(&a, Axis::None).item(), Some(true));
        assert_eq!(none_of(&a, Axis::None).item(), Some(false));
        assert_eq!(all(&a, Axis::Col).data(), [false, true]);
        assert_eq!(any(&a, Axis::Row).data(), [true, true, true]);
        assert_eq!(count_nonzero(&a, Axis::None).item(), Some(5));
        assert_eq!(count_nonzero(&a, Axis::Row).data(), [2, 1, 2]);

        let zeros: Array<i32> = Array::zeros((2, 2));
        assert_eq!(none_of(&zeros, Axis::None).item(), Some(true));
    }

    #[test]
    fn test_cumsum_cumprod() {
        let a = Array::from([[1, 2], [3, 4]]);

        let flat = cumsum(&a, Axis::None);
        assert_eq!(flat.shape(), Shape::new(1, 4));
        assert_eq!(flat.data(), [1, 3, 6, 10]);

        // Scans preserve the 2-D shape.
        let down = cumsum(&a, Axis::Row);
        assert_eq!(down.shape(), Shape::new(2, 2));
        assert_eq!(down.data(), [1, 2, 4, 6]);

        let across = cumsum(&a, Axis::Col);
        assert_eq!(across.shape(), Shape::new(2, 2));
        assert_eq!(across.data(), [1, 3, 3, 7]);

        assert_eq!(cumprod(&a, Axis::None).data(), [1, 2, 6, 24]);
        assert_eq!(cumprod(&a, Axis::Row).data(), [1, 2, 3, 8]);
    }

    #[test]
    fn test_nan_reductions() {
        let nan = f64::NAN;
        let a = Array::from([[1.0, nan], [3.0, 4.0]]);

        assert_eq!(nansum(&a, Axis::None).item(), Some(8.0));
        assert_eq!(nanprod(&a, Axis::None).item(), Some(12.0));
        assert_eq!(nanmean(&a, Axis::None).unwrap().item(), Some(8.0 / 3.0));
        assert_eq!(nanmean(&a, Axis::Row).unwrap().data(), [2.0, 4.0]);
        assert_eq!(nanmin(&a, Axis::None).unwrap().item(), Some(1.0));
        assert_eq!(nanmax(&a, Axis::Col).unwrap().data(), [1.0, 4.0]);
        assert_eq!(nanmedian(&a, Axis::None).unwrap().item(), Some(3.0));

        // Positions index the unfiltered lane.
        assert_eq!(nanargmax(&a, Axis::None).unwrap().item(), Some(3));
        assert_eq!(nanargmin(&a, Axis::Row).unwrap().data(), [0, 1]);

        let all_nan = Array::from([[nan, nan]]);
        assert_eq!(
            nanmean(&all_nan, Axis::None),
            Err(ReduceError::NoValidElements)
        );
        assert_eq!(
            nanargmax(&all_nan, Axis::None),
            Err(ReduceError::NoValidElements)
        );
        // nansum of nothing valid is zero.
        assert_eq!(nansum(&all_nan, Axis::None).item(), Some(0.0));
    }

    #[test]
    fn test_nan_scans() {
        let nan = f64::NAN;
        let a = Array::from([[1.0, nan, 2.0]]);
        assert_eq!(nancumsum(&a, Axis::None).data(), [1.0, 1.0, 3.0]);
        assert_eq!(nancumprod(&a, Axis::None).data(), [1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_cov() {
        let a = Array::from([[1.0, 2.0, 3.0], [3.0, 2.0, 1.0]]);
        let unbiased = cov(&a, false).unwrap();
        assert_eq!(unbiased.shape(), Shape::new(2, 2));
        assert_eq!(unbiased.data(), [1.0, -1.0, -1.0, 1.0]);

        let biased = cov(&a, true).unwrap();
        let expected = Array::from([[2.0 / 3.0, -2.0 / 3.0], [-2.0 / 3.0, 2.0 / 3.0]]);
        expect_equal(&biased, &expected).unwrap();

        let single: Array<f64> = Array::from([[1.0], [2.0]]);
        assert_eq!(cov(&single, false), Err(ReduceError::EmptyInput));
    }
}
