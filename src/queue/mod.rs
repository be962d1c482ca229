//! An array-backed binary heap with an explicit grow/shrink policy.
//!
//! The same structure serves as a max-first queue (root is the largest element, so the worst of
//! the k best candidates can be evicted cheaply) and as a min-first queue. Only the comparison
//! predicate, supplied by a [`HeapOrder`], differs.

#![warn(missing_docs)]

mod heap;
mod order;

pub use heap::{BoundedPriorityQueue, DrainExtremes};
pub use order::{HeapOrder, MaxFirst, MinFirst};

/// A [`BoundedPriorityQueue`] whose root is its largest element.
pub type MaxQueue<T> = BoundedPriorityQueue<T, MaxFirst>;

/// A [`BoundedPriorityQueue`] whose root is its smallest element.
pub type MinQueue<T> = BoundedPriorityQueue<T, MinFirst>;

#[cfg(test)]
mod test;
