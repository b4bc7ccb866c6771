//! numat_array provides a dense two-dimensional numeric array and its
//! addressing machinery.
//!
//! # Storage and layout
//!
//! An [`Array`] owns a flat, contiguous, row-major buffer together with a
//! [`Shape`] describing its row and column counts. One-dimensional data is
//! a single row, shape `(1, n)`.
//!
//! # Addressing
//!
//! Subsets of an array are described by [`Selector`]s: a bare index, an
//! ordered index list, a boolean mask or a strided [`Slice`]. A selector
//! addresses either the row-major flattening of the whole array
//! ([`Array::get`] / [`Array::put`]) or one axis each of a 2-D selection
//! ([`Array::get_rc`] / [`Array::put_rc`]), where the two axes combine as a
//! Cartesian product. All four selector kinds resolve through a single
//! code path, so negative indices and clamping behave identically
//! everywhere:
//!
//! ```
//! use numat_array::{Array, Slice};
//!
//! let a = Array::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
//!
//! let corners = a.get_rc(vec![0isize, 2], vec![0isize, 2]).unwrap();
//! assert_eq!(corners.data(), [1, 3, 7, 9]);
//!
//! let middle_row = a.get_rc(1, ..).unwrap();
//! assert_eq!(middle_row.data(), [4, 5, 6]);
//!
//! let stride = a.get(Slice::new(0, 9, 4)).unwrap();
//! assert_eq!(stride.data(), [1, 5, 9]);
//! ```
//!
//! # Serialization
//!
//! With the `serde` feature enabled, arrays serialize as a struct with
//! `shape` and `data` fields, the data in row-major order:
//!
//! ```json
//! {
//!   "shape": [2, 2],
//!   "data": [0.5, 1.0, 1.5, 2.0]
//! }
//! ```

mod array;
pub mod errors;
pub mod number;
mod ops;
mod selector;
mod shape;
mod slice_range;

mod impl_debug;
#[cfg(feature = "serde")]
mod impl_serialize;

// Re-exports for convenience.
pub use array::{Array, Value};
pub use number::{AsBool, Cast, ElemBytes, Endian, Identities, IsNaN};
pub use selector::{AxisIndices, Resolved, Selector};
pub use shape::Shape;
pub use slice_range::{NormalizedSlice, Slice, SliceIndices};

// These modules are public for use by other crates in this repo, but
// currently considered internal to the project.
#[doc(hidden)]
pub mod rng;
#[doc(hidden)]
pub mod test_util;
