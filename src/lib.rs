//! Basic Heap and Partition Primitives for Rust
//!
//! This crate provides an array-backed binary min-heap together with the
//! in-place partition routines that underpin quicksort, as described in
//! introductory algorithms texts.
//!
//! # Features
//!
//! - **Binary Min-Heap**: 0-indexed array layout; O(log n) `push` and `pop`,
//!   O(1) `peek`, O(n log n) insertion-based `heapify`
//! - **Hoare Partition**: two-way in-place partition around a leftmost
//!   pivot, returning the pivot's resolved index
//! - **Three-Way Partition**: single-pass Dutch-national-flag split into
//!   `< pivot`, `== pivot`, and `> pivot` bands
//! - **Sorting Drivers**: `quicksort` over the partition primitive and
//!   `heapsort` over the heap
//!
//! # Example
//!
//! ```rust
//! use rust_basic_heaps::binary::BinaryMinHeap;
//! use rust_basic_heaps::Heap;
//!
//! let mut heap = BinaryMinHeap::heapify([5, 3, 8, 1, 9, 2]);
//! heap.push(0);
//! assert_eq!(heap.pop(), Ok(0));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! ```

pub mod binary;
pub mod partition;
pub mod sorting;
pub mod traits;

// Re-export the main trait and error type for convenience
pub use traits::{Heap, HeapError};
