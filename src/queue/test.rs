use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::queue::{MaxQueue, MinQueue};

#[test]
fn empty_queue_returns_none() {
    let mut queue = MaxQueue::<i32>::new();
    assert!(queue.is_empty());
    assert_eq!(queue.peek_extreme(), None);
    assert_eq!(queue.remove_extreme(), None);
    assert_eq!(queue.remove_item(&3), None);
    assert_eq!(queue.capacity(), 10);
}

#[test]
fn max_queue_pops_largest_first() {
    let mut queue = MaxQueue::new();
    for v in [4, 1, 9, 7, 3, 9, 0] {
        queue.insert(v);
    }
    assert_eq!(queue.peek_extreme(), Some(&9));
    let drained: Vec<i32> = queue.drain_extremes().collect();
    assert_eq!(drained, vec![9, 9, 7, 4, 3, 1, 0]);
    assert!(queue.is_empty());
}

#[test]
fn min_queue_pops_smallest_first() {
    let mut queue = MinQueue::new();
    for v in [4, 1, 9, 7, 3, 9, 0] {
        queue.insert(v);
    }
    assert_eq!(queue.peek_extreme(), Some(&0));
    let drained: Vec<i32> = queue.drain_extremes().collect();
    assert_eq!(drained, vec![0, 1, 3, 4, 7, 9, 9]);
}

#[test]
fn sorted_vec_puts_extreme_last() {
    let max: MaxQueue<i32> = [5, 2, 8, 1].into_iter().collect();
    assert_eq!(max.into_sorted_vec(), vec![1, 2, 5, 8]);

    let min: MinQueue<i32> = [5, 2, 8, 1].into_iter().collect();
    assert_eq!(min.into_sorted_vec(), vec![8, 5, 2, 1]);
}

#[test]
fn sorted_vec_leaves_queue_usable() {
    let mut queue: MaxQueue<i32> = [5, 2, 8, 1].into_iter().collect();
    assert_eq!(queue.sorted_vec(), vec![1, 2, 5, 8]);
    assert_eq!(queue.len(), 4);
    assert!(queue.is_heap());
    assert_eq!(queue.remove_extreme(), Some(8));
}

#[test]
fn from_vec_heapifies_with_double_capacity() {
    let queue = MaxQueue::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    assert!(queue.is_heap());
    assert_eq!(queue.len(), 8);
    assert_eq!(queue.capacity(), 16);
    assert_eq!(queue.peek_extreme(), Some(&9));
}

#[test]
fn grows_without_losing_elements() {
    let mut queue = MinQueue::with_capacity(1);
    for v in (0..100).rev() {
        queue.insert(v);
        assert!(queue.capacity() >= queue.len());
    }
    assert_eq!(queue.len(), 100);
    assert_eq!(queue.capacity(), 128);
    assert!(queue.is_heap());
    let drained: Vec<i32> = queue.drain_extremes().collect();
    assert_eq!(drained, (0..100).collect::<Vec<_>>());
}

#[test]
fn shrinks_when_sparse() {
    let mut queue = MaxQueue::with_capacity(4);
    for v in 0..64 {
        queue.insert(v);
    }
    assert_eq!(queue.capacity(), 64);

    while queue.len() > 2 {
        queue.remove_extreme();
        assert!(queue.capacity() >= queue.len());
    }
    assert!(queue.capacity() < 64);
    assert_eq!(queue.into_sorted_vec(), vec![0, 1]);
}

#[test]
fn remove_item_keeps_heap_order() {
    // Removing 1 moves the trailing 8 under 5, which must then sift up.
    let mut queue = MaxQueue::from_vec(vec![10, 5, 9, 1, 2, 8]);
    assert!(queue.is_heap());
    assert_eq!(queue.remove_item(&1), Some(1));
    assert!(queue.is_heap());
    assert_eq!(queue.remove_item(&42), None);
    assert_eq!(queue.into_sorted_vec(), vec![2, 5, 8, 9, 10]);
}

#[test]
fn clear_keeps_capacity() {
    let mut queue = MinQueue::with_capacity(3);
    queue.extend([1, 2, 3, 4]);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), 6);
}

#[test]
fn random_operations_preserve_heap_invariant() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut max = MaxQueue::with_capacity(2);
    let mut min = MinQueue::with_capacity(2);
    let mut shadow: Vec<u32> = vec![];

    for _ in 0..2000 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                let v = rng.gen_range(0..50);
                max.insert(v);
                min.insert(v);
                shadow.push(v);
            }
            2 => {
                let top = max.remove_extreme();
                let expected = shadow.iter().copied().max();
                assert_eq!(top, expected);
                if let Some(v) = top {
                    let pos = shadow.iter().position(|s| *s == v).unwrap();
                    shadow.swap_remove(pos);
                    assert_eq!(min.remove_item(&v), Some(v));
                }
            }
            _ => {
                if shadow.is_empty() {
                    continue;
                }
                let v = shadow[rng.gen_range(0..shadow.len())];
                assert_eq!(max.remove_item(&v), Some(v));
                assert_eq!(min.remove_item(&v), Some(v));
                let pos = shadow.iter().position(|s| *s == v).unwrap();
                shadow.swap_remove(pos);
            }
        }

        assert!(max.is_heap());
        assert!(min.is_heap());
        assert_eq!(max.len(), shadow.len());
        assert_eq!(min.len(), shadow.len());
        assert!(max.capacity() >= max.len());
        assert!(min.capacity() >= min.len());
        assert_eq!(min.peek_extreme(), shadow.iter().min());
    }
}
