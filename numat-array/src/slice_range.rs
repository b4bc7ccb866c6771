use std::fmt::Debug;
use std::iter::FusedIterator;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::errors::SliceError;

/// A `(start, stop, step)` triple describing a strided sub-range of an axis.
///
/// Endpoints follow NumPy slicing conventions: negative values count back
/// from the end of the axis and out-of-range values clamp silently to the
/// valid range. `start` is inclusive and `stop` is exclusive. The step may
/// be negative, in which case the axis is traversed in reverse order.
///
/// A slice is a plain value; it carries no axis length of its own and is
/// resolved against one via [`normalize`](Slice::normalize). A zero step is
/// the only invalid configuration and is reported at normalization time.
///
/// Rust ranges convert into slices, so `(2..5).into()`, `(..3).into()` and
/// `(..).into()` can be used wherever a `Slice` is expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slice {
    /// First index in the range.
    pub start: isize,

    /// One past the last index in the range.
    pub stop: isize,

    /// Increment between selected indices.
    pub step: isize,
}

impl Slice {
    pub fn new(start: isize, stop: isize, step: isize) -> Slice {
        Slice { start, stop, step }
    }

    /// Return the slice `[start, stop)` with a step of 1.
    pub fn range(start: isize, stop: isize) -> Slice {
        Slice::new(start, stop, 1)
    }

    /// Return the slice `[0, stop)` with a step of 1.
    pub fn to(stop: isize) -> Slice {
        Slice::new(0, stop, 1)
    }

    /// Return a slice selecting a whole axis, whatever its length.
    pub fn all() -> Slice {
        Slice::new(0, isize::MAX, 1)
    }

    /// Resolve this slice against an axis of length `len`.
    ///
    /// Negative endpoints are offset by `len`; endpoints still outside the
    /// traversable range then clamp silently, so the result is always valid
    /// for the axis. Fails only if the step is zero.
    pub fn normalize(&self, len: usize) -> Result<NormalizedSlice, SliceError> {
        if self.step == 0 {
            return Err(SliceError::ZeroStep);
        }

        // Endpoints valid for a forward traversal are [0, len]. For a
        // backward traversal the range shifts down by one so that `stop`
        // can sit just before index 0.
        let n = len as isize;
        let (min_idx, max_idx) = if self.step > 0 { (0, n) } else { (-1, n - 1) };

        let resolve = |endpoint: isize| {
            let idx = if endpoint < 0 { endpoint + n } else { endpoint };
            idx.clamp(min_idx, max_idx)
        };

        Ok(NormalizedSlice {
            start: resolve(self.start),
            stop: resolve(self.stop),
            step: self.step,
        })
    }

    /// Return the number of indices this slice selects from an axis of
    /// length `len`.
    pub fn num_elements(&self, len: usize) -> Result<usize, SliceError> {
        Ok(self.normalize(len)?.len())
    }

    /// Return an iterator over the concrete indices this slice selects from
    /// an axis of length `len`, in traversal order.
    pub fn indices(&self, len: usize) -> Result<SliceIndices, SliceError> {
        Ok(self.normalize(len)?.iter())
    }
}

impl<T> From<Range<T>> for Slice
where
    T: TryInto<isize>,
    <T as TryInto<isize>>::Error: Debug,
{
    fn from(r: Range<T>) -> Slice {
        let start = r.start.try_into().unwrap();
        let stop = r.end.try_into().unwrap();
        Slice::new(start, stop, 1)
    }
}

impl<T> From<RangeTo<T>> for Slice
where
    T: TryInto<isize>,
    <T as TryInto<isize>>::Error: Debug,
{
    fn from(r: RangeTo<T>) -> Slice {
        Slice::to(r.end.try_into().unwrap())
    }
}

impl<T> From<RangeFrom<T>> for Slice
where
    T: TryInto<isize>,
    <T as TryInto<isize>>::Error: Debug,
{
    fn from(r: RangeFrom<T>) -> Slice {
        Slice::new(r.start.try_into().unwrap(), isize::MAX, 1)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Slice {
        Slice::all()
    }
}

/// A slice whose endpoints have been resolved against a concrete axis
/// length.
///
/// For a positive step, `start` and `stop` lie in `[0, len]`; for a
/// negative step they lie in `[-1, len - 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedSlice {
    start: isize,
    stop: isize,
    step: isize,
}

impl NormalizedSlice {
    pub fn start(&self) -> isize {
        self.start
    }

    pub fn stop(&self) -> isize {
        self.stop
    }

    pub fn step(&self) -> isize {
        self.step
    }

    /// Return the number of indices the slice selects.
    pub fn len(&self) -> usize {
        if self.step > 0 && self.start < self.stop {
            ((self.stop - self.start - 1) / self.step) as usize + 1
        } else if self.step < 0 && self.stop < self.start {
            ((self.start - self.stop - 1) / -self.step) as usize + 1
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return an iterator over the selected indices, in traversal order:
    /// ascending for a positive step, descending for a negative one.
    ///
    /// The iterator is restartable; cloning it yields the sequence again
    /// from the beginning.
    pub fn iter(&self) -> SliceIndices {
        SliceIndices {
            next: self.start,
            step: self.step,
            remaining: self.len(),
        }
    }
}

impl IntoIterator for NormalizedSlice {
    type Item = usize;
    type IntoIter = SliceIndices;

    fn into_iter(self) -> SliceIndices {
        self.iter()
    }
}

/// Iterator over the concrete indices selected by a [`NormalizedSlice`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    /// Next index to yield. Stays in `[-1, len]`; values actually yielded
    /// are always in `[0, len)`.
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.next;
        self.next += self.step;
        self.remaining -= 1;
        Some(index as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}
impl FusedIterator for SliceIndices {}

#[cfg(test)]
mod tests {
    use numat_testing::TestCases;

    use super::Slice;
    use crate::errors::SliceError;

    #[test]
    fn test_indices_match_python_slicing() {
        #[derive(Debug)]
        struct Case {
            slice: Slice,
            len: usize,
            expected: Vec<usize>,
        }

        let cases = [
            // [1:10:3] over an axis of length 10.
            Case {
                slice: Slice::new(1, 10, 3),
                len: 10,
                expected: vec![1, 4, 7],
            },
            // +ve step, +ve endpoints
            Case {
                slice: Slice::range(2, 4),
                len: 6,
                expected: vec![2, 3],
            },
            // Out-of-range stop clamps.
            Case {
                slice: Slice::range(2, 128),
                len: 5,
                expected: vec![2, 3, 4],
            },
            // Out-of-range start clamps.
            Case {
                slice: Slice::new(-128, 3, 1),
                len: 5,
                expected: vec![0, 1, 2],
            },
            // +ve step > 1
            Case {
                slice: Slice::new(0, 5, 2),
                len: 5,
                expected: vec![0, 2, 4],
            },
            // -ve endpoints count from the end.
            Case {
                slice: Slice::range(-3, -1),
                len: 6,
                expected: vec![3, 4],
            },
            // Whole axis.
            Case {
                slice: Slice::all(),
                len: 4,
                expected: vec![0, 1, 2, 3],
            },
            // -ve step walks backwards.
            Case {
                slice: Slice::new(-1, -128, -1),
                len: 5,
                expected: vec![4, 3, 2, 1, 0],
            },
            Case {
                slice: Slice::new(-1, -6, -2),
                len: 5,
                expected: vec![4, 2, 0],
            },
            // Direction disagrees with endpoints: empty.
            Case {
                slice: Slice::new(-1, -6, 2),
                len: 5,
                expected: vec![],
            },
            Case {
                slice: Slice::new(1, 5, -2),
                len: 5,
                expected: vec![],
            },
            // Empty range.
            Case {
                slice: Slice::range(3, 3),
                len: 4,
                expected: vec![],
            },
            // Zero-length axis.
            Case {
                slice: Slice::all(),
                len: 0,
                expected: vec![],
            },
        ];

        cases.test_each(|case| {
            let mut iter = case.slice.indices(case.len).unwrap();
            let size_hint = iter.size_hint();
            let indices: Vec<usize> = iter.by_ref().collect();

            assert_eq!(size_hint, (indices.len(), Some(indices.len())));
            assert_eq!(indices, case.expected);
            // Fused: the iterator stays exhausted.
            assert_eq!(iter.next(), None);
        });
    }

    #[test]
    fn test_num_elements() {
        #[derive(Debug)]
        struct Case {
            slice: Slice,
            len: usize,
            expected: usize,
        }

        let cases = [
            Case {
                slice: Slice::new(1, 10, 3),
                len: 10,
                expected: 3,
            },
            Case {
                slice: Slice::new(0, 4, 5),
                len: 4,
                expected: 1,
            },
            Case {
                slice: Slice::new(1, 0, -2),
                len: 2,
                expected: 1,
            },
            Case {
                slice: Slice::range(0, 0),
                len: 4,
                expected: 0,
            },
        ];

        cases.test_each(|case| {
            assert_eq!(case.slice.num_elements(case.len).unwrap(), case.expected);
        });
    }

    #[test]
    fn test_zero_step_is_an_error() {
        let slice = Slice::new(0, 4, 0);
        assert_eq!(slice.normalize(4), Err(SliceError::ZeroStep));
        assert_eq!(slice.num_elements(4), Err(SliceError::ZeroStep));
    }

    #[test]
    fn test_restartable_iteration() {
        let normalized = Slice::new(0, 6, 2).normalize(6).unwrap();
        let first: Vec<usize> = normalized.iter().collect();
        let second: Vec<usize> = normalized.iter().collect();
        assert_eq!(first, [0, 2, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_ranges() {
        assert_eq!(Slice::from(2..5), Slice::new(2, 5, 1));
        assert_eq!(Slice::from(..5), Slice::new(0, 5, 1));
        assert_eq!(Slice::from(3..), Slice::new(3, isize::MAX, 1));
        assert_eq!(Slice::from(..), Slice::all());
    }
}
