//! Set operations treating arrays as collections of elements.
//!
//! Results are always sorted, deduplicated `(1, n)` rows, whatever the
//! input shapes.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use numat_array::Array;

use crate::sort::total_order;

/// Sorted distinct elements of the array.
pub fn unique<T>(array: &Array<T>) -> Array<T>
where
    T: Copy + PartialOrd,
{
    let mut values: Vec<T> = array.iter().copied().collect();
    values.sort_unstable_by(total_order);
    values.dedup_by(|a, b| a == b);
    Array::from_vec(values)
}

/// Sorted distinct elements present in both arrays.
pub fn intersect1d<T>(a: &Array<T>, b: &Array<T>) -> Array<T>
where
    T: Copy + Ord + Hash,
{
    let b_set: FxHashSet<T> = b.iter().copied().collect();
    let mut values: Vec<T> = a
        .iter()
        .copied()
        .filter(|value| b_set.contains(value))
        .collect();
    values.sort_unstable();
    values.dedup();
    Array::from_vec(values)
}

/// Sorted distinct elements present in either array.
pub fn union1d<T>(a: &Array<T>, b: &Array<T>) -> Array<T>
where
    T: Copy + Ord + Hash,
{
    let set: FxHashSet<T> = a.iter().chain(b.iter()).copied().collect();
    let mut values: Vec<T> = set.into_iter().collect();
    values.sort_unstable();
    Array::from_vec(values)
}

/// Sorted distinct elements of `a` that are absent from `b`.
pub fn setdiff1d<T>(a: &Array<T>, b: &Array<T>) -> Array<T>
where
    T: Copy + Ord + Hash,
{
    let b_set: FxHashSet<T> = b.iter().copied().collect();
    let mut values: Vec<T> = a
        .iter()
        .copied()
        .filter(|value| !b_set.contains(value))
        .collect();
    values.sort_unstable();
    values.dedup();
    Array::from_vec(values)
}

#[cfg(test)]
mod tests {
    use numat_array::{Array, Shape};

    use super::{intersect1d, setdiff1d, union1d, unique};

    #[test]
    fn test_unique() {
        let a = Array::from([[3, 1, 3], [2, 1, 2]]);
        let u = unique(&a);
        assert_eq!(u.shape(), Shape::new(1, 3));
        assert_eq!(u.data(), [1, 2, 3]);
    }

    #[test]
    fn test_unique_floats() {
        let a = Array::from([[2.5, 0.5, 2.5]]);
        assert_eq!(unique(&a).data(), [0.5, 2.5]);
    }

    #[test]
    fn test_intersect1d() {
        let a = Array::from([[1, 2, 3, 4, 2]]);
        let b = Array::from([[2, 4, 6]]);
        assert_eq!(intersect1d(&a, &b).data(), [2, 4]);
        assert!(intersect1d(&a, &Array::from([[9]])).is_empty());
    }

    #[test]
    fn test_union1d() {
        let a = Array::from([[3, 1], [3, 2]]);
        let b = Array::from([[2, 5]]);
        assert_eq!(union1d(&a, &b).data(), [1, 2, 3, 5]);
    }

    #[test]
    fn test_setdiff1d() {
        let a = Array::from([[1, 2, 3, 4, 1]]);
        let b = Array::from([[2, 4]]);
        assert_eq!(setdiff1d(&a, &b).data(), [1, 3]);
    }
}
