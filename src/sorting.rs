//! Sorting drivers built on the crate's primitives
//!
//! Two comparison sorts, each exercising one of the crate's components:
//!
//! - [`quicksort`]: recursive driver over the Hoare
//!   [`partition`](crate::partition::partition) routine
//! - [`heapsort`]: builds a [`BinaryMinHeap`] and drains it
//!
//! Neither sort is stable. For production use, prefer the standard
//! library's `sort`/`sort_unstable`; these drivers exist to exercise the
//! partition and heap primitives end to end.

use crate::binary::BinaryMinHeap;
use crate::partition::partition;
use crate::traits::Heap;

/// Sorts a slice in place via recursive partitioning
///
/// Partitions around the segment's leftmost element, then recurses into
/// the sub-segments on either side of the pivot's resolved position. The
/// base case is a segment of length <= 1.
///
/// Average O(n log n); worst case O(n²) on sorted or duplicate-heavy
/// inputs, inherited from the fixed-pivot partition.
///
/// # Example
///
/// ```rust
/// use rust_basic_heaps::sorting::quicksort;
///
/// let mut values = [1, 3, 5, -1, 2, 0];
/// quicksort(&mut values);
/// assert_eq!(values, [-1, 0, 1, 2, 3, 5]);
/// ```
pub fn quicksort<T: Ord>(arr: &mut [T]) {
    if arr.len() > 1 {
        quicksort_range(arr, 0, arr.len() - 1);
    }
}

fn quicksort_range<T: Ord>(arr: &mut [T], low: usize, high: usize) {
    if low >= high {
        return;
    }

    let pivot_index = partition(arr, low, high);

    // The pivot is final; only the segments on either side remain.
    if pivot_index > low {
        quicksort_range(arr, low, pivot_index - 1);
    }
    if pivot_index < high {
        quicksort_range(arr, pivot_index + 1, high);
    }
}

/// Sorts a sequence by heapifying it and draining the heap
///
/// Consumes the input, builds a [`BinaryMinHeap`], and pops until empty;
/// successive minimums come out in ascending order. O(n log n) for both
/// the insertion-based build and the drain.
///
/// # Example
///
/// ```rust
/// use rust_basic_heaps::sorting::heapsort;
///
/// assert_eq!(heapsort([5, 3, 8, 1, 9, 2]), vec![1, 2, 3, 5, 8, 9]);
/// ```
pub fn heapsort<T: Ord>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut heap = BinaryMinHeap::heapify(items);
    let mut sorted = Vec::with_capacity(heap.len());

    while let Ok(value) = heap.pop() {
        sorted.push(value);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quicksort_already_sorted() {
        let mut values = [1, 2, 3, 4, 5];
        quicksort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_quicksort_reverse_sorted() {
        let mut values = [5, 4, 3, 2, 1];
        quicksort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_quicksort_with_negatives_and_duplicates() {
        let mut values = [0, 0, 3, -5, -10, -12, 0];
        quicksort(&mut values);
        assert_eq!(values, [-12, -10, -5, 0, 0, 0, 3]);
    }

    #[test]
    fn test_quicksort_all_equal() {
        let mut values = [1, 1, 1, 1, 1];
        quicksort(&mut values);
        assert_eq!(values, [1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_quicksort_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        quicksort(&mut empty);
        assert_eq!(empty, []);

        let mut single = [42];
        quicksort(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_heapsort_matches_expected() {
        assert_eq!(heapsort([1, 3, 5, -1, 2, 0]), vec![-1, 0, 1, 2, 3, 5]);
        assert_eq!(heapsort([5, 1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5, 5]);
    }

    #[test]
    fn test_heapsort_empty_input() {
        let sorted: Vec<i32> = heapsort([]);
        assert!(sorted.is_empty());
    }
}
