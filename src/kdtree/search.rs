//! Bounded k-nearest-neighbor search.

use tinyvec::TinyVec;

use crate::constants::SEARCH_STACK_INLINE;
use crate::kdtree::params::NeighborhoodParams;
use crate::kdtree::traversal::KDNode;
use crate::kdtree::{Neighbor, Neighborhood};
use crate::r#type::IndexableNum;

/// Collects the best candidates seen so far and the squared distance bound they imply.
struct Candidates<'a, N: IndexableNum, const D: usize> {
    queue: Neighborhood<'a, N, D>,
    params: NeighborhoodParams<N>,
}

impl<'a, N: IndexableNum, const D: usize> Candidates<'a, N, D> {
    fn new(params: &NeighborhoodParams<N>, num_items: usize) -> Self {
        // one spare slot for the candidate about to be evicted
        let capacity = params
            .max_neighbors()
            .saturating_add(1)
            .min(num_items.saturating_add(1));
        Self {
            queue: Neighborhood::with_capacity(capacity),
            params: *params,
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.queue.len() >= self.params.max_neighbors()
    }

    /// Returns `true` if a subtree whose splitting plane lies `plane_sq_dist` away may still
    /// hold a candidate that would be admitted.
    ///
    /// Until k candidates are held the bound is the configured radius, then the distance of the
    /// worst of them.
    #[inline]
    fn may_improve(&self, plane_sq_dist: N) -> bool {
        match self.queue.peek_extreme() {
            // once full, an object exactly on the bound can still win on insertion index
            Some(worst) if self.is_full() => plane_sq_dist <= worst.sq_dist(),
            _ => self.params.within_radius(plane_sq_dist),
        }
    }

    fn offer(&mut self, candidate: Neighbor<'a, N, D>) {
        let admitted = match self.queue.peek_extreme() {
            Some(worst) if self.is_full() => candidate < *worst,
            _ => self.params.within_radius(candidate.sq_dist()),
        };
        if !admitted {
            return;
        }

        self.queue.insert(candidate);
        if self.queue.len() > self.params.max_neighbors() {
            self.queue.remove_extreme();
        }
    }
}

/// Search the tree rooted at `root` for the neighbors of `point` allowed by `params`.
pub(crate) fn search<'a, N: IndexableNum, const D: usize>(
    root: Option<&'a KDNode<N, D>>,
    num_items: usize,
    point: &[N; D],
    params: &NeighborhoodParams<N>,
) -> Neighborhood<'a, N, D> {
    let mut candidates = Candidates::new(params, num_items);
    let Some(root) = root else {
        return candidates.queue;
    };

    // Each entry is a subtree still to visit and the squared distance from the query point to
    // the plane separating it from the path already taken.
    let mut stack: TinyVec<[(Option<&KDNode<N, D>>, N); SEARCH_STACK_INLINE]> = TinyVec::new();
    stack.push((Some(root), N::zero()));

    while let Some((node, plane_sq_dist)) = stack.pop() {
        let Some(node) = node else {
            continue;
        };

        // the bound may have tightened since this subtree was queued
        if !candidates.may_improve(plane_sq_dist) {
            continue;
        }

        let object = node.object();
        candidates.offer(Neighbor::new(object, object.sq_dist(point)));

        let Some(axis) = node.split_axis() else {
            continue;
        };

        let delta = point[axis] - object.coord(axis);
        let (near, far) = if delta < N::zero() {
            (node.left(), node.right())
        } else {
            (node.right(), node.left())
        };

        // Note: pushed in backwards order to what gets popped, so the near side is searched
        // first and the far side is tested against the bound it leaves behind
        if far.is_some() {
            stack.push((far, delta * delta));
        }
        if near.is_some() {
            stack.push((near, plane_sq_dist));
        }
    }

    candidates.queue
}
