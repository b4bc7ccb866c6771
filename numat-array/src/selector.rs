use smallvec::{smallvec, SmallVec};

use crate::errors::SelectError;
use crate::slice_range::Slice;

/// Concrete offsets addressed along one extent.
///
/// Selections are frequently a single index or a handful of them, so short
/// lists stay inline.
pub type AxisIndices = SmallVec<[usize; 4]>;

/// Addresses a subset of the positions along one extent: a single axis of a
/// 2-D array, or the row-major flattening of the whole array.
///
/// Every addressing mode resolves through the same
/// [`resolve`](Selector::resolve) path, so flat, per-row and per-column
/// selection all share one set of semantics.
///
/// Indices, index lists and slices may use negative values, which count
/// back from the end of the extent.
#[derive(Clone, Debug, PartialEq)]
pub enum Selector {
    /// A single position. Collapses the addressed dimension in 2-D results.
    Index(isize),

    /// An ordered list of positions. Duplicates are allowed; output order
    /// follows list order.
    Indices(Vec<isize>),

    /// One flag per position in the extent; `true` selects the position.
    Mask(Vec<bool>),

    /// A strided sub-range of the extent.
    Range(Slice),
}

/// A [`Selector`] resolved against a concrete extent length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    /// Addressed offsets, in output order.
    pub indices: AxisIndices,

    /// True when the selector was a bare index. A bare index collapses its
    /// dimension when two selectors combine into a 2-D selection.
    pub collapses: bool,
}

impl Selector {
    /// Resolve this selector to concrete offsets within an extent of
    /// length `len`.
    pub fn resolve(&self, len: usize) -> Result<Resolved, SelectError> {
        match self {
            Selector::Index(index) => {
                let offset = resolve_index(*index, len)?;
                Ok(Resolved {
                    indices: smallvec![offset],
                    collapses: true,
                })
            }
            Selector::Indices(list) => {
                let mut indices = AxisIndices::with_capacity(list.len());
                for &index in list {
                    indices.push(resolve_index(index, len)?);
                }
                Ok(Resolved {
                    indices,
                    collapses: false,
                })
            }
            Selector::Mask(mask) => {
                if mask.len() != len {
                    return Err(SelectError::MaskShapeMismatch {
                        expected: len,
                        actual: mask.len(),
                    });
                }
                let indices = mask
                    .iter()
                    .enumerate()
                    .filter_map(|(offset, &keep)| keep.then_some(offset))
                    .collect();
                Ok(Resolved {
                    indices,
                    collapses: false,
                })
            }
            Selector::Range(slice) => {
                let indices = slice.indices(len)?.collect();
                Ok(Resolved {
                    indices,
                    collapses: false,
                })
            }
        }
    }
}

/// Resolve a possibly-negative index against an extent of length `len`.
fn resolve_index(index: isize, len: usize) -> Result<usize, SelectError> {
    let offset = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if offset < 0 || offset >= len as isize {
        return Err(SelectError::IndexOutOfRange { index, len });
    }
    Ok(offset as usize)
}

// The concrete integer conversions exist alongside the blanket range
// conversion to avoid ambiguity when selecting with a numeric literal of
// unspecified type (eg. `array.get(0)`); the i32 case is chosen if it
// exists.
impl From<i32> for Selector {
    fn from(index: i32) -> Selector {
        Selector::Index(index as isize)
    }
}

impl From<isize> for Selector {
    fn from(index: isize) -> Selector {
        Selector::Index(index)
    }
}

impl From<usize> for Selector {
    fn from(index: usize) -> Selector {
        Selector::Index(index as isize)
    }
}

impl From<Vec<isize>> for Selector {
    fn from(indices: Vec<isize>) -> Selector {
        Selector::Indices(indices)
    }
}

impl From<&[isize]> for Selector {
    fn from(indices: &[isize]) -> Selector {
        Selector::Indices(indices.to_vec())
    }
}

impl From<Vec<bool>> for Selector {
    fn from(mask: Vec<bool>) -> Selector {
        Selector::Mask(mask)
    }
}

impl From<&[bool]> for Selector {
    fn from(mask: &[bool]) -> Selector {
        Selector::Mask(mask.to_vec())
    }
}

impl<R> From<R> for Selector
where
    R: Into<Slice>,
{
    fn from(range: R) -> Selector {
        Selector::Range(range.into())
    }
}
