//! Error types that are reported by the operations layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors that can occur when reducing an array along an axis.
#[derive(Clone, Debug, PartialEq)]
pub enum ReduceError {
    /// The reduction scanned a sequence with no elements.
    EmptyInput,

    /// Every element of the scanned sequence was NaN.
    NoValidElements,

    /// The requested percentile is outside `[0, 100]`.
    PercentileOutOfRange { q: f64 },

    /// The partition pivot position is outside the reduced sequence.
    KthOutOfRange { k: usize, len: usize },
}

impl Display for ReduceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReduceError::EmptyInput => write!(f, "cannot reduce an empty sequence"),
            ReduceError::NoValidElements => {
                write!(f, "sequence has no non-NaN elements")
            }
            ReduceError::PercentileOutOfRange { q } => {
                write!(f, "percentile {} is outside [0, 100]", q)
            }
            ReduceError::KthOutOfRange { k, len } => {
                write!(f, "partition index {} is out of range for length {}", k, len)
            }
        }
    }
}

impl Error for ReduceError {}

/// Error raised by a root finder that exhausts its iteration budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootError {
    /// No root was found within epsilon after the maximum number of
    /// iterations.
    MaxIterations { max: u32 },
}

impl Display for RootError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RootError::MaxIterations { max } => {
                write!(f, "no root found within epsilon after {} iterations", max)
            }
        }
    }
}

impl Error for RootError {}

/// Errors that can occur while reading or writing array files.
#[derive(Debug)]
pub enum FileError {
    Io(std::io::Error),

    /// A token in a delimited text file did not parse as an element.
    Parse { token: String },

    /// The file holds a different number of elements than the requested
    /// shape, or a partial trailing element in binary mode.
    LengthMismatch { expected: usize, actual: usize },
}

impl Display for FileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(err) => write!(f, "{}", err),
            FileError::Parse { token } => write!(f, "cannot parse element from {:?}", token),
            FileError::LengthMismatch { expected, actual } => {
                write!(f, "file holds {} elements but {} were expected", actual, expected)
            }
        }
    }
}

impl Error for FileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FileError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FileError {
    fn from(err: std::io::Error) -> FileError {
        FileError::Io(err)
    }
}
