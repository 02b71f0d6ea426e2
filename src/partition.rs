//! In-place array partitioning primitives
//!
//! This module provides the two partition routines used by the sorting
//! drivers in this crate:
//!
//! - [`partition`]: Hoare-style two-way partition around a leftmost pivot,
//!   the primitive underneath [`quicksort`](crate::sorting::quicksort)
//! - [`partition_three_way`]: single-pass Dutch-national-flag partition
//!   into `< pivot`, `== pivot`, and `> pivot` bands
//!
//! Both routines mutate the slice in place and run in O(n) time with O(1)
//! auxiliary space.

use std::cmp::Ordering;

/// Partitions `arr[low..=high]` around the element at `low`
///
/// Hoare scheme with a fixed leftmost pivot: a left cursor advances over
/// elements `<= pivot`, a right cursor retreats over elements `> pivot`,
/// and the two swap until they cross; the pivot is then swapped into the
/// right cursor's resting position.
///
/// On return, every element at an index below the returned position is
/// `<= pivot`, every element above it is `> pivot`, and the pivot itself
/// sits at the returned position.
///
/// The fixed leftmost pivot is a known limitation: already-sorted (and
/// adversarial) inputs degrade the enclosing quicksort to O(n²). Random or
/// median-of-three pivot selection would avoid that.
///
/// Callers must guarantee `low <= high < arr.len()`; the contract leaves
/// other inputs undefined (in practice, slice indexing panics).
///
/// # Example
///
/// ```rust
/// use rust_basic_heaps::partition::partition;
///
/// let mut values = [5, 1, 3, 4, 2, 7];
/// let p = partition(&mut values, 0, 5);
///
/// assert!(values[..p].iter().all(|v| *v <= values[p]));
/// assert!(values[p + 1..].iter().all(|v| *v > values[p]));
/// ```
pub fn partition<T: Ord>(arr: &mut [T], low: usize, high: usize) -> usize {
    let pivot_index = low;
    let mut low = low;
    let mut high = high;

    // The pivot slot is never touched by the cursor swaps (`low` advances
    // past it before the first swap and `high` stops on it at the latest),
    // so `arr[pivot_index]` stays the pivot value until the final swap.
    while low < high {
        while low <= high && arr[low] <= arr[pivot_index] {
            low += 1;
        }
        while arr[high] > arr[pivot_index] {
            high -= 1;
        }

        if low < high {
            arr.swap(low, high);
        }
    }

    // Left of `high` is now `<= pivot` and right of it `> pivot`; dropping
    // the pivot onto `high` completes the post-condition.
    arr.swap(high, pivot_index);
    high
}

/// Partitions `arr` into `< pivot`, `== pivot`, and `> pivot` bands
///
/// Single-pass Dutch-national-flag scheme. Returns `(lt, gt)` such that
/// `arr[..lt]` holds the elements below the pivot, `arr[lt..gt]` the
/// elements equal to it, and `arr[gt..]` the elements above it. An empty
/// middle band (`lt == gt`) means the pivot value does not occur in `arr`.
///
/// A quicksort built on this routine skips the entire middle band when
/// recursing, which repairs the two-way scheme's quadratic behavior on
/// duplicate-heavy inputs.
///
/// # Example
///
/// ```rust
/// use rust_basic_heaps::partition::partition_three_way;
///
/// let mut values = [0, 1, 2, 0, 1, 2];
/// let (lt, gt) = partition_three_way(&mut values, &1);
///
/// assert_eq!(values, [0, 0, 1, 1, 2, 2]);
/// assert_eq!((lt, gt), (2, 4));
/// ```
pub fn partition_three_way<T: Ord>(arr: &mut [T], pivot: &T) -> (usize, usize) {
    let mut low = 0;
    let mut mid = 0;
    let mut high = arr.len();

    // arr[..low] < pivot, arr[low..mid] == pivot, arr[high..] > pivot;
    // arr[mid..high] is still unclassified.
    while mid < high {
        match arr[mid].cmp(pivot) {
            Ordering::Less => {
                arr.swap(mid, low);
                low += 1;
                mid += 1;
            }
            Ordering::Equal => mid += 1,
            Ordering::Greater => {
                high -= 1;
                arr.swap(mid, high);
            }
        }
    }

    (low, high)
}
