//! Default values shared by the queue and the tree.

/// Initial capacity of a [`BoundedPriorityQueue`][crate::queue::BoundedPriorityQueue] created
/// with `new`.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Number of pending subtrees the search stack holds inline before spilling to the heap.
///
/// A balanced tree keeps at most one pending subtree per level, so this covers trees of up to
/// 2^32 points without allocating.
pub(crate) const SEARCH_STACK_INLINE: usize = 33;
