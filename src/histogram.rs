//! Histogram counts over explicit or uniformly generated bin edges.

use numat_array::number::Cast;
use numat_array::Array;

use crate::errors::ReduceError;
use crate::reduce::{max, min, Axis};

/// Count how many elements fall into the bins described by `edges`.
///
/// Edges are sorted before use. Bin `i` spans `[edges[i], edges[i + 1])`,
/// except the last bin, which also includes its right edge. Values outside
/// the outermost edges are ignored. The result is a `(1, edges - 1)` row of
/// counts.
///
/// Panics if fewer than two edges are given.
pub fn histogram<T>(array: &Array<T>, edges: &Array<f64>) -> Array<u32>
where
    T: Copy + Cast<f64>,
{
    assert!(edges.size() >= 2, "number of bin edges must be >= 2");

    // Sort just in case the caller hasn't already.
    let mut edges: Vec<f64> = edges.iter().copied().collect();
    edges.sort_unstable_by(|a, b| a.total_cmp(b));

    let mut counts = vec![0u32; edges.len() - 1];
    for value in array.iter() {
        let value: f64 = value.cast();
        if value < edges[0] || value > edges[edges.len() - 1] {
            continue;
        }

        // Binary search for the bin index.
        let mut low = 0;
        let mut high = edges.len() - 1;
        loop {
            let idx = (low + high) / 2;
            if low == high || low == high - 1 {
                counts[low] += 1;
                break;
            }

            if value > edges[idx] {
                low = idx;
            } else if value < edges[idx] {
                high = idx;
            } else {
                counts[idx] += 1;
                break;
            }
        }
    }

    Array::from_vec(counts)
}

/// Count elements into `n_bins` uniform bins spanning the array's value
/// range, returning the counts and the generated bin edges.
pub fn histogram_bins<T>(
    array: &Array<T>,
    n_bins: usize,
) -> Result<(Array<u32>, Array<f64>), ReduceError>
where
    T: Copy + Cast<f64> + PartialOrd,
{
    assert!(n_bins >= 1, "number of bins must be >= 1");

    let low: f64 = min(array, Axis::None)?.item().expect("scalar result").cast();
    let high: f64 = max(array, Axis::None)?.item().expect("scalar result").cast();
    let edges = Array::<f64>::linspace(low, high, n_bins + 1);
    Ok((histogram(array, &edges), edges))
}
