//! numat is a numerics toolkit built around a dense, row-major 2-D array.
//!
//! The array type itself (storage, shape, slicing and selector-based
//! reads and writes) lives in the [`numat_array`] crate and is re-exported
//! here. This crate layers the operation surface on top:
//!
//! - [`reduce`]: axis-aware reductions (sum, mean, min/argmin, median,
//!   cumulative scans, NaN-filtering variants) driven by the [`Axis`]
//!   selector.
//! - [`sort`]: sorting, argsort, partitioning and percentiles.
//! - [`elementwise`]: comparisons, logical combinators and float math
//!   maps.
//! - [`setops`], [`histogram`]: set operations and histogram counts.
//! - [`io`]: headerless binary and delimited text file round trips.
//! - [`roots`], [`polynomial`], [`vector`]: scalar root finders,
//!   polynomial evaluation and small fixed-size vector math.
//!
//! ```
//! use numat::reduce::{self, Axis};
//! use numat::{Array, Slice};
//!
//! let a = Array::from([[9, 1, 5], [3, 7, 2], [8, 4, 6]]);
//!
//! // Reduce down each column...
//! assert_eq!(reduce::sum(&a, Axis::Row).data(), [20, 12, 13]);
//! // ...or across each row.
//! assert_eq!(reduce::sum(&a, Axis::Col).data(), [15, 12, 18]);
//!
//! // Strided slicing with NumPy semantics.
//! let picked = a.get(Slice::new(0, 9, 4)).unwrap();
//! assert_eq!(picked.data(), [9, 7, 6]);
//! ```

pub mod elementwise;
pub mod errors;
pub mod histogram;
pub mod io;
pub mod polynomial;
pub mod reduce;
pub mod roots;
pub mod setops;
pub mod sort;
pub mod vector;

// Re-exports of the core array crate, so most users need only this crate.
pub use numat_array::{Array, AxisIndices, Selector, Shape, Slice, Value};

pub use reduce::Axis;
pub use sort::Interpolation;
