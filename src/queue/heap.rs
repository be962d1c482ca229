use std::marker::PhantomData;

use crate::constants::DEFAULT_QUEUE_CAPACITY;
use crate::queue::order::HeapOrder;

/// A binary heap stored in a flat array, ordered by `O`.
///
/// The logical capacity is managed explicitly: it doubles when an insert finds the array full and
/// halves when a removal leaves the queue at most a third full, but it never drops below the
/// number of stored elements. This bounds the memory held by long-lived queues whose size
/// oscillates.
///
/// ```
/// use kd_neighbors::queue::MaxQueue;
///
/// let mut queue = MaxQueue::with_capacity(2);
/// queue.insert(3);
/// queue.insert(7);
/// queue.insert(5);
/// assert_eq!(queue.capacity(), 4);
/// assert_eq!(queue.remove_extreme(), Some(7));
/// assert_eq!(queue.into_sorted_vec(), vec![3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedPriorityQueue<T, O> {
    heap: Vec<T>,
    capacity: usize,
    phantom: PhantomData<O>,
}

impl<T: Ord, O: HeapOrder> BoundedPriorityQueue<T, O> {
    /// Create an empty queue with [`DEFAULT_QUEUE_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Create an empty queue with room for `capacity` elements (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
            phantom: PhantomData,
        }
    }

    /// Build a queue from an existing set of keys, with room for twice as many.
    pub fn from_vec(keys: Vec<T>) -> Self {
        let capacity = (keys.len() * 2).max(1);
        let mut queue = Self {
            heap: keys,
            capacity,
            phantom: PhantomData,
        };
        let len = queue.heap.len();
        queue.heap.reserve_exact(capacity - len);
        for idx in (0..len / 2).rev() {
            sift_down::<T, O>(&mut queue.heap, idx);
        }
        debug_assert!(queue.is_heap());
        queue
    }

    /// The number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` if the next insert will grow the backing array.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity
    }

    /// The current logical capacity. Always at least [`len`][Self::len].
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The elements in heap order. The first element, if any, is the extreme one.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Iterate over the elements in heap order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Remove every element, keeping the current capacity.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Insert an element, doubling the capacity first if the queue is full.
    pub fn insert(&mut self, elem: T) {
        if self.is_full() {
            self.resize(self.capacity * 2);
        }
        self.heap.push(elem);
        let last = self.heap.len() - 1;
        sift_up::<T, O>(&mut self.heap, last);
        debug_assert!(self.is_heap());
    }

    /// The highest priority element, without removing it.
    #[inline]
    pub fn peek_extreme(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Remove and return the highest priority element.
    pub fn remove_extreme(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Remove and return the first element equal to `elem`, wherever it sits in the heap.
    ///
    /// This is a linear scan.
    pub fn remove_item(&mut self, elem: &T) -> Option<T> {
        let idx = self.heap.iter().position(|e| e == elem)?;
        self.remove_at(idx)
    }

    /// An iterator that repeatedly removes the highest priority element.
    pub fn drain_extremes(&mut self) -> DrainExtremes<'_, T, O> {
        DrainExtremes { queue: self }
    }

    /// Consume the queue, returning its elements sorted so that the highest priority element
    /// comes last. For a [`MaxFirst`][super::MaxFirst] queue this is ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.heap.len();
        while end > 1 {
            end -= 1;
            self.heap.swap(0, end);
            sift_down::<T, O>(&mut self.heap[..end], 0);
        }
        self.heap
    }

    /// The elements sorted as by [`into_sorted_vec`][Self::into_sorted_vec], leaving the queue
    /// untouched.
    pub fn sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.clone().into_sorted_vec()
    }

    /// Consume the queue, returning its elements in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }

    /// Returns `true` if every element precedes-or-equals its children under `O`.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|idx| !O::precedes(&self.heap[idx], &self.heap[(idx - 1) / 2]))
    }

    fn remove_at(&mut self, idx: usize) -> Option<T> {
        if idx >= self.heap.len() {
            return None;
        }

        // the last element takes over the vacated slot
        let elem = self.heap.swap_remove(idx);
        if idx < self.heap.len() {
            sift_down::<T, O>(&mut self.heap, idx);
            sift_up::<T, O>(&mut self.heap, idx);
        }

        if self.heap.len() <= self.capacity / 3 {
            self.resize(self.capacity / 2);
        }
        debug_assert!(self.is_heap());
        Some(elem)
    }

    fn resize(&mut self, capacity: usize) {
        let capacity = capacity.max(self.heap.len()).max(1);
        if capacity > self.heap.capacity() {
            self.heap.reserve_exact(capacity - self.heap.len());
        } else {
            self.heap.shrink_to(capacity);
        }
        self.capacity = capacity;
    }
}

impl<T: Ord, O: HeapOrder> Default for BoundedPriorityQueue<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, O: HeapOrder> FromIterator<T> for BoundedPriorityQueue<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord, O: HeapOrder> Extend<T> for BoundedPriorityQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.insert(elem);
        }
    }
}

/// Iterator returned by [`BoundedPriorityQueue::drain_extremes`].
#[derive(Debug)]
pub struct DrainExtremes<'a, T: Ord, O: HeapOrder> {
    queue: &'a mut BoundedPriorityQueue<T, O>,
}

impl<T: Ord, O: HeapOrder> Iterator for DrainExtremes<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.remove_extreme()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T: Ord, O: HeapOrder> ExactSizeIterator for DrainExtremes<'_, T, O> {}

#[inline]
fn sift_up<T: Ord, O: HeapOrder>(heap: &mut [T], mut idx: usize) {
    while idx > 0 {
        let parent = (idx - 1) / 2;
        if !O::precedes(&heap[idx], &heap[parent]) {
            break;
        }
        heap.swap(idx, parent);
        idx = parent;
    }
}

#[inline]
fn sift_down<T: Ord, O: HeapOrder>(heap: &mut [T], mut idx: usize) {
    let n = heap.len();
    loop {
        let left = 2 * idx + 1;
        if left >= n {
            break;
        }

        // pick the child that should sit higher
        let right = left + 1;
        let child = if right < n && O::precedes(&heap[right], &heap[left]) {
            right
        } else {
            left
        };

        if !O::precedes(&heap[child], &heap[idx]) {
            break;
        }
        heap.swap(idx, child);
        idx = child;
    }
}
