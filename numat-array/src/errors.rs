//! Error types that are reported by various array operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error when normalizing a [`Slice`](crate::Slice) against an axis length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceError {
    /// The slice step is zero.
    ZeroStep,
}

impl Display for SliceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceError::ZeroStep => write!(f, "slice step cannot be zero"),
        }
    }
}

impl Error for SliceError {}

/// Errors that can occur when resolving a selector against an array extent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// A scalar index, or an entry of an index list, is outside the
    /// addressed extent.
    IndexOutOfRange { index: isize, len: usize },

    /// A boolean mask does not have one entry per addressed position.
    MaskShapeMismatch { expected: usize, actual: usize },

    /// The selector contains an invalid slice.
    InvalidSlice(SliceError),
}

impl Display for SelectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for extent {}", index, len)
            }
            SelectError::MaskShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "mask has {} entries but the addressed extent has {}",
                    actual, expected
                )
            }
            SelectError::InvalidSlice(err) => write!(f, "{}", err),
        }
    }
}

impl Error for SelectError {}

impl From<SliceError> for SelectError {
    fn from(err: SliceError) -> SelectError {
        SelectError::InvalidSlice(err)
    }
}

/// Error when the value written by a `put` cannot be matched to the
/// addressed region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BroadcastError {
    /// The value array's size does not equal the addressed position count.
    LengthMismatch { expected: usize, actual: usize },
}

impl Display for BroadcastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BroadcastError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "value has {} elements but {} positions are addressed",
                    actual, expected
                )
            }
        }
    }
}

impl Error for BroadcastError {}

/// Errors that can occur when writing through a selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PutError {
    Select(SelectError),
    Broadcast(BroadcastError),
}

impl Display for PutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PutError::Select(err) => write!(f, "{}", err),
            PutError::Broadcast(err) => write!(f, "{}", err),
        }
    }
}

impl Error for PutError {}

impl From<SelectError> for PutError {
    fn from(err: SelectError) -> PutError {
        PutError::Select(err)
    }
}

impl From<BroadcastError> for PutError {
    fn from(err: BroadcastError) -> PutError {
        PutError::Broadcast(err)
    }
}

/// Errors that can occur when constructing or reshaping an array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The storage length does not equal the product of the shape.
    LengthMismatch { expected: usize, actual: usize },

    /// Nested input rows have differing lengths.
    RaggedRows,
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "data length {} does not match shape size {}",
                    actual, expected
                )
            }
            ShapeError::RaggedRows => write!(f, "nested rows have differing lengths"),
        }
    }
}

impl Error for ShapeError {}
