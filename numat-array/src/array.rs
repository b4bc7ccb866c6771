use std::ops::{Add, Index, IndexMut};

use crate::errors::{BroadcastError, PutError, SelectError, ShapeError};
use crate::number::{Cast, ElemBytes, Endian, Identities};
use crate::selector::{Resolved, Selector};
use crate::shape::Shape;

/// A dense 2-D array with row-major storage.
///
/// The array owns a flat buffer of `rows * cols` elements; element `(r, c)`
/// lives at offset `r * cols + c`. One-dimensional data is represented as a
/// single row, shape `(1, n)`.
///
/// Subsets of an array are read and written through [`Selector`]s, which
/// cover scalar indices, index lists, boolean masks and strided slices with
/// one resolution path:
///
/// ```
/// use numat_array::Array;
///
/// let a = Array::from([[1, 2], [3, 4]]);
/// let picked = a.get(vec![false, true, true, false]).unwrap();
/// assert_eq!(picked.data(), [2, 3]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Array<T> {
    shape: Shape,
    data: Vec<T>,
}

/// A value argument to a write operation: either a scalar broadcast to
/// every addressed position, or an array matched to the addressed positions
/// element for element.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<T> {
    Scalar(T),
    Array(Array<T>),
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Value<T> {
        Value::Scalar(value)
    }
}

impl<T> From<Array<T>> for Value<T> {
    fn from(array: Array<T>) -> Value<T> {
        Value::Array(array)
    }
}

impl<T: Clone> From<&Array<T>> for Value<T> {
    fn from(array: &Array<T>) -> Value<T> {
        Value::Array(array.clone())
    }
}

impl From<&Array<bool>> for Selector {
    fn from(mask: &Array<bool>) -> Selector {
        Selector::Mask(mask.data().to_vec())
    }
}

impl<T> Array<T> {
    /// Construct an array from a shape and a row-major flat buffer.
    ///
    /// Fails if the buffer length does not equal the shape's size.
    pub fn from_shape_vec(shape: impl Into<Shape>, data: Vec<T>) -> Result<Array<T>, ShapeError> {
        let shape = shape.into();
        if data.len() != shape.size() {
            return Err(ShapeError::LengthMismatch {
                expected: shape.size(),
                actual: data.len(),
            });
        }
        Ok(Array { shape, data })
    }

    /// Construct an array from nested rows.
    ///
    /// Fails if the rows have differing lengths. No rows yields the empty
    /// `(0, 0)` array.
    pub fn from_nested(rows: Vec<Vec<T>>) -> Result<Array<T>, ShapeError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.iter().any(|row| row.len() != n_cols) {
            return Err(ShapeError::RaggedRows);
        }
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Array {
            shape: Shape::new(n_rows, n_cols),
            data,
        })
    }

    /// Construct a single-row array from a flat vector.
    pub fn from_vec(data: Vec<T>) -> Array<T> {
        Array {
            shape: Shape::new(1, data.len()),
            data,
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Return the number of elements in the array.
    pub fn size(&self) -> usize {
        self.shape.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Return the elements in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the array and return its row-major storage.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Return an iterator over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Return an iterator over the rows of the array as slices.
    pub fn iter_rows(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.shape.cols().max(1))
    }

    /// Return a reference to element `(row, col)`, or None if either index
    /// is out of bounds.
    pub fn at(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows() && col < self.cols() {
            self.data.get(self.shape.offset(row, col))
        } else {
            None
        }
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows() && col < self.cols() {
            let offset = self.shape.offset(row, col);
            self.data.get_mut(offset)
        } else {
            None
        }
    }

    /// Return the single element of a one-element array, or None if the
    /// array holds zero or more than one element.
    pub fn item(&self) -> Option<T>
    where
        T: Copy,
    {
        if self.size() == 1 {
            Some(self.data[0])
        } else {
            None
        }
    }

    /// Apply `f` to every element, producing a new array of the same shape.
    pub fn map<F, U>(&self, f: F) -> Array<U>
    where
        F: Fn(&T) -> U,
    {
        Array {
            shape: self.shape,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Give the array a new shape with the same number of elements.
    pub fn reshape(&mut self, shape: impl Into<Shape>) -> Result<(), ShapeError> {
        let shape = shape.into();
        if shape.size() != self.size() {
            return Err(ShapeError::LengthMismatch {
                expected: shape.size(),
                actual: self.size(),
            });
        }
        self.shape = shape;
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }
}

impl<T: Identities + Clone> Array<T> {
    /// Return an array of the given shape filled with zeros.
    pub fn zeros(shape: impl Into<Shape>) -> Array<T> {
        Array::full(shape, T::zero())
    }

    /// Return an array of the given shape filled with ones.
    pub fn ones(shape: impl Into<Shape>) -> Array<T> {
        Array::full(shape, T::one())
    }

    /// Return an array of the given shape with unspecified contents.
    ///
    /// Exposing truly uninitialized storage is not sound, so the elements
    /// are zeroed; callers should still treat them as arbitrary.
    pub fn empty(shape: impl Into<Shape>) -> Array<T> {
        Array::zeros(shape)
    }

    /// Return an `n` x `n` array with ones on the `k`-th diagonal and zeros
    /// elsewhere. Positive `k` shifts the diagonal above the main one,
    /// negative `k` below it.
    pub fn eye(n: usize, k: isize) -> Array<T> {
        let mut array = Array::zeros((n, n));
        for row in 0..n {
            let col = row as isize + k;
            if (0..n as isize).contains(&col) {
                array.data[row * n + col as usize] = T::one();
            }
        }
        array
    }

    /// Return the `n` x `n` identity array.
    pub fn identity(n: usize) -> Array<T> {
        Array::eye(n, 0)
    }

    /// Return a square array with `values` on the main diagonal and zeros
    /// elsewhere.
    pub fn diagflat(values: &[T]) -> Array<T> {
        let n = values.len();
        let mut array = Array::zeros((n, n));
        for (row, value) in values.iter().enumerate() {
            array.data[row * n + row] = value.clone();
        }
        array
    }
}

impl<T: Clone> Array<T> {
    /// Return an array of the given shape with every element set to
    /// `value`.
    pub fn full(shape: impl Into<Shape>, value: T) -> Array<T> {
        let shape = shape.into();
        Array {
            shape,
            data: vec![value; shape.size()],
        }
    }

    /// Return a copy reshaped to a single row, `(1, size)`.
    pub fn flatten(&self) -> Array<T> {
        Array {
            shape: Shape::new(1, self.size()),
            data: self.data.clone(),
        }
    }

    /// Return the transposed array, shape `(cols, rows)`.
    pub fn transpose(&self) -> Array<T> {
        let (rows, cols) = (self.rows(), self.cols());
        let mut data = Vec::with_capacity(self.size());
        for col in 0..cols {
            for row in 0..rows {
                data.push(self.data[row * cols + col].clone());
            }
        }
        Array {
            shape: Shape::new(cols, rows),
            data,
        }
    }

    /// Return the `k`-th diagonal as a `(1, n)` array. Positive `k` selects
    /// diagonals above the main one, negative `k` below it.
    pub fn diagonal(&self, k: isize) -> Array<T> {
        let mut data = Vec::new();
        for row in 0..self.rows() {
            let col = row as isize + k;
            if (0..self.cols() as isize).contains(&col) {
                data.push(self.data[self.shape.offset(row, col as usize)].clone());
            }
        }
        Array::from_vec(data)
    }

    /// Tile the array `n_rows` times down and `n_cols` times across.
    pub fn repeat(&self, n_rows: usize, n_cols: usize) -> Array<T> {
        let (rows, cols) = (self.rows(), self.cols());
        let out_shape = Shape::new(rows * n_rows, cols * n_cols);
        let mut data = Vec::with_capacity(out_shape.size());
        for row in 0..out_shape.rows() {
            for col in 0..out_shape.cols() {
                data.push(self.data[self.shape.offset(row % rows, col % cols)].clone());
            }
        }
        Array {
            shape: out_shape,
            data,
        }
    }

    /// Read the subset of the flattened array addressed by `selector`.
    ///
    /// The result is a `(1, n)` row; a bare index yields `(1, 1)`, readable
    /// with [`item`](Array::item).
    pub fn get<S: Into<Selector>>(&self, selector: S) -> Result<Array<T>, SelectError> {
        let resolved = selector.into().resolve(self.size())?;
        let data = resolved
            .indices
            .iter()
            .map(|&offset| self.data[offset].clone())
            .collect::<Vec<T>>();
        Ok(Array::from_vec(data))
    }

    /// Read the subset addressed by a row selector and a column selector.
    ///
    /// Both selectors resolve independently and combine as a Cartesian
    /// product in row-major order: the result has shape
    /// `(row_count, col_count)`. A bare index on either axis collapses that
    /// dimension, yielding a `(1, n)` row; bare indices on both yield
    /// `(1, 1)`.
    pub fn get_rc<R, C>(&self, rows: R, cols: C) -> Result<Array<T>, SelectError>
    where
        R: Into<Selector>,
        C: Into<Selector>,
    {
        let row_sel = rows.into().resolve(self.rows())?;
        let col_sel = cols.into().resolve(self.cols())?;

        let mut data = Vec::with_capacity(row_sel.indices.len() * col_sel.indices.len());
        for &row in &row_sel.indices {
            for &col in &col_sel.indices {
                data.push(self.data[self.shape.offset(row, col)].clone());
            }
        }

        let shape = combined_shape(&row_sel, &col_sel);
        Ok(Array { shape, data })
    }

    /// Write `value` to the subset of the flattened array addressed by
    /// `selector`.
    ///
    /// A scalar value is broadcast to every addressed position; an array
    /// value must hold exactly one element per addressed position and is
    /// consumed in row-major order. Writing back the result of
    /// [`get`](Array::get) with the same selector leaves the array
    /// unchanged.
    pub fn put<S, V>(&mut self, selector: S, value: V) -> Result<(), PutError>
    where
        S: Into<Selector>,
        V: Into<Value<T>>,
    {
        let resolved = selector.into().resolve(self.size())?;
        self.assign(&resolved.indices, value.into())
    }

    /// Write `value` to the subset addressed by a row and column selector,
    /// in the same row-major Cartesian order [`get_rc`](Array::get_rc)
    /// reads.
    pub fn put_rc<R, C, V>(&mut self, rows: R, cols: C, value: V) -> Result<(), PutError>
    where
        R: Into<Selector>,
        C: Into<Selector>,
        V: Into<Value<T>>,
    {
        let row_sel = rows.into().resolve(self.rows())?;
        let col_sel = cols.into().resolve(self.cols())?;

        // Materialize the full offset list before touching storage so the
        // addressing and mutation phases never interleave.
        let mut offsets = Vec::with_capacity(row_sel.indices.len() * col_sel.indices.len());
        for &row in &row_sel.indices {
            for &col in &col_sel.indices {
                offsets.push(self.shape.offset(row, col));
            }
        }
        self.assign(&offsets, value.into())
    }

    fn assign(&mut self, offsets: &[usize], value: Value<T>) -> Result<(), PutError> {
        match value {
            Value::Scalar(value) => {
                for &offset in offsets {
                    self.data[offset] = value.clone();
                }
            }
            Value::Array(values) => {
                if values.size() != offsets.len() {
                    return Err(BroadcastError::LengthMismatch {
                        expected: offsets.len(),
                        actual: values.size(),
                    }
                    .into());
                }
                for (&offset, value) in offsets.iter().zip(values.iter()) {
                    self.data[offset] = value.clone();
                }
            }
        }
        Ok(())
    }
}

/// Result shape of a two-selector read: each bare index collapses its
/// dimension.
fn combined_shape(row_sel: &Resolved, col_sel: &Resolved) -> Shape {
    match (row_sel.collapses, col_sel.collapses) {
        (false, false) => Shape::new(row_sel.indices.len(), col_sel.indices.len()),
        (true, false) => Shape::new(1, col_sel.indices.len()),
        (false, true) => Shape::new(1, row_sel.indices.len()),
        (true, true) => Shape::new(1, 1),
    }
}

impl<T: Identities + Clone> Array<T> {
    /// Relabel the array to `shape`, discarding the old contents. The new
    /// storage is zero-filled.
    pub fn resize_fast(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        self.shape = shape;
        self.data = vec![T::zero(); shape.size()];
    }

    /// Resize the array to `shape`, keeping the region that overlaps the
    /// old shape and zero-filling the rest.
    pub fn resize_slow(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        let mut data = vec![T::zero(); shape.size()];
        let keep_rows = self.rows().min(shape.rows());
        let keep_cols = self.cols().min(shape.cols());
        for row in 0..keep_rows {
            for col in 0..keep_cols {
                data[row * shape.cols() + col] = self.data[self.shape.offset(row, col)].clone();
            }
        }
        self.shape = shape;
        self.data = data;
    }
}

impl<T: Copy + PartialOrd + Add<Output = T> + Identities> Array<T> {
    /// Return a `(1, n)` array of values from `start` (inclusive) to `stop`
    /// (exclusive), `step` apart.
    ///
    /// Panics if `step` is not positive.
    pub fn arange(start: T, stop: T, step: T) -> Array<T> {
        assert!(step > T::zero(), "arange step must be positive");
        let mut data = Vec::new();
        let mut value = start;
        while value < stop {
            data.push(value);
            value = value + step;
        }
        Array::from_vec(data)
    }
}

macro_rules! impl_linspace {
    ($type:ty) => {
        impl Array<$type> {
            /// Return a `(1, n)` array of `n` evenly spaced values from
            /// `start` to `stop` inclusive.
            pub fn linspace(start: $type, stop: $type, n: usize) -> Array<$type> {
                let data = match n {
                    0 => Vec::new(),
                    1 => vec![start],
                    _ => {
                        let span = stop - start;
                        let denom = (n - 1) as $type;
                        (0..n)
                            .map(|i| start + span * (i as $type) / denom)
                            .collect()
                    }
                };
                Array::from_vec(data)
            }
        }
    };
}

impl_linspace!(f32);
impl_linspace!(f64);

impl<T: Copy> Array<T> {
    /// Return a copy with every element converted to type `U` using
    /// `as`-cast semantics.
    pub fn astype<U>(&self) -> Array<U>
    where
        T: Cast<U>,
    {
        self.map(|&value| value.cast())
    }
}

impl<T: ElemBytes + Copy> Array<T> {
    /// Reverse the byte order of every element in place.
    pub fn byteswap(&mut self) {
        for value in self.data.iter_mut() {
            *value = value.swap_bytes();
        }
    }

    /// Return a copy whose elements are encoded in the given byte order.
    ///
    /// When `endian` matches the platform byte order this is a plain copy;
    /// otherwise every element's bytes are reversed.
    pub fn newbyteorder(&self, endian: Endian) -> Array<T> {
        let mut out = self.clone();
        if endian != Endian::native() {
            out.byteswap();
        }
        out
    }
}

impl<T> Index<(usize, usize)> for Array<T> {
    type Output = T;

    /// Return element `(row, col)`. Panics if out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.at(row, col).expect("index out of bounds")
    }
}

impl<T> IndexMut<(usize, usize)> for Array<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col).expect("index out of bounds")
    }
}

impl<T: Clone, const R: usize, const C: usize> From<[[T; C]; R]> for Array<T> {
    fn from(rows: [[T; C]; R]) -> Array<T> {
        let data: Vec<T> = rows.iter().flat_map(|row| row.iter().cloned()).collect();
        Array {
            shape: Shape::new(R, C),
            data,
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
