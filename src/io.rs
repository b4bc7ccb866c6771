//! Whole-buffer array file I/O.
//!
//! Two on-disk forms exist. The binary form is a headerless native-endian
//! dump of the elements in row-major order; it carries no shape, so readers
//! supply one. The text form prints each element with its `Display`
//! representation, joined by a single delimiter character.

use std::fmt::Display;
use std::fs;
use std::mem::size_of;
use std::path::Path;
use std::str::FromStr;

use numat_array::number::ElemBytes;
use numat_array::{Array, Shape};

use crate::errors::FileError;

/// Write the array's elements to `path` as raw native-endian bytes in
/// row-major order, with no header or padding.
pub fn tofile<T>(array: &Array<T>, path: impl AsRef<Path>) -> Result<(), FileError>
where
    T: Copy + ElemBytes,
{
    let mut bytes = Vec::with_capacity(array.size() * size_of::<T>());
    for &value in array.iter() {
        bytes.extend_from_slice(value.to_ne_bytes().as_ref());
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Read an array previously written by [`tofile`].
///
/// The binary form is shapeless, so the caller supplies the shape; the
/// file must hold exactly `shape.size()` elements.
pub fn fromfile<T>(path: impl AsRef<Path>, shape: impl Into<Shape>) -> Result<Array<T>, FileError>
where
    T: ElemBytes,
{
    let shape = shape.into();
    let data = read_elements(path)?;
    if data.len() != shape.size() {
        return Err(FileError::LengthMismatch {
            expected: shape.size(),
            actual: data.len(),
        });
    }
    Ok(Array::from_shape_vec(shape, data).expect("length checked above"))
}

/// Write the array's elements to `path` as text, joined by `delimiter`.
pub fn tofile_delimited<T>(
    array: &Array<T>,
    path: impl AsRef<Path>,
    delimiter: char,
) -> Result<(), FileError>
where
    T: Display,
{
    let text = array
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(&delimiter.to_string());
    fs::write(path, text)?;
    Ok(())
}

/// Read a `(1, n)` array from a delimited text file written by
/// [`tofile_delimited`]. A trailing delimiter is tolerated.
pub fn fromfile_delimited<T>(
    path: impl AsRef<Path>,
    delimiter: char,
) -> Result<Array<T>, FileError>
where
    T: FromStr,
{
    let text = fs::read_to_string(path)?;
    let mut data = Vec::new();
    for token in text.split(delimiter) {
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<T>().map_err(|_| FileError::Parse {
            token: token.to_string(),
        })?;
        data.push(value);
    }
    Ok(Array::from_vec(data))
}

/// Serialize the array to `path` in the binary form.
///
/// Equivalent to [`tofile`]; the pairing [`load`] reads the data back as a
/// flat row for the caller to reshape.
pub fn dump<T>(array: &Array<T>, path: impl AsRef<Path>) -> Result<(), FileError>
where
    T: Copy + ElemBytes,
{
    tofile(array, path)
}

/// Read a binary dump back as a flat `(1, n)` array.
///
/// The dump carries no shape metadata; callers that need the original
/// shape reshape the result.
pub fn load<T>(path: impl AsRef<Path>) -> Result<Array<T>, FileError>
where
    T: ElemBytes,
{
    Ok(Array::from_vec(read_elements(path)?))
}

fn read_elements<T: ElemBytes>(path: impl AsRef<Path>) -> Result<Vec<T>, FileError> {
    let bytes = fs::read(path)?;
    let width = size_of::<T>();
    if bytes.len() % width != 0 {
        return Err(FileError::LengthMismatch {
            expected: bytes.len() / width + 1,
            actual: bytes.len() / width,
        });
    }
    Ok(bytes
        .chunks_exact(width)
        .map(|chunk| {
            let bytes = chunk.try_into().expect("chunk width matches element size");
            T::from_ne_bytes(bytes)
        })
        .collect())
}
