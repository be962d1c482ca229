use std::fmt::Debug;

/// The priority predicate of a [`BoundedPriorityQueue`][super::BoundedPriorityQueue].
pub trait HeapOrder: Debug + Clone + Copy + Default {
    /// Returns `true` if `a` must sit strictly above `b` in the heap.
    fn precedes<T: Ord>(a: &T, b: &T) -> bool;
}

/// Largest element first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFirst;

impl HeapOrder for MaxFirst {
    #[inline]
    fn precedes<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest element first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFirst;

impl HeapOrder for MinFirst {
    #[inline]
    fn precedes<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}
