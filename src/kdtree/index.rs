use geo_traits::CoordTrait;
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::error::Result;
use crate::kdtree::params::NeighborhoodParams;
use crate::kdtree::search::search;
use crate::kdtree::traversal::{KDNode, Objects};
use crate::kdtree::{CompareBy, Neighbor, Neighborhood};
use crate::r#type::{check_finite, IndexableNum};

/// An immutable KDTree.
///
/// Usually this will be created from scratch via [`KDTreeBuilder`][crate::kdtree::KDTreeBuilder].
///
/// Queries never write to the tree: the distances they compute are carried in the returned
/// [`Neighborhood`], so a built tree can be shared and queried from many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N: IndexableNum, const D: usize> {
    pub(crate) root: Option<Box<KDNode<N, D>>>,
    pub(crate) num_items: usize,
    pub(crate) depth: usize,
    pub(crate) params: NeighborhoodParams<N>,
}

impl<N: IndexableNum, const D: usize> KDTree<N, D> {
    /// The number of objects in this KDTree.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns `true` if the tree was built from no points.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// The number of levels in the tree. `0` for an empty tree.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The params used by [`query`][Self::query].
    pub fn params(&self) -> &NeighborhoodParams<N> {
        &self.params
    }

    /// Access the root node of the KDTree for manual traversal.
    pub fn root(&self) -> Option<&KDNode<N, D>> {
        self.root.as_deref()
    }

    /// Iterate over every stored object, in pre-order.
    pub fn iter(&self) -> Objects<'_, N, D> {
        Objects::new(self.root())
    }

    /// Find the neighborhood of `point` using the params the tree was built with.
    ///
    /// The returned queue is in heap order with the farthest neighbor first. Use
    /// [`into_sorted_vec`][crate::queue::BoundedPriorityQueue::into_sorted_vec] for ascending
    /// distance.
    pub fn query(&self, point: &[N; D]) -> Result<Neighborhood<'_, N, D>> {
        self.query_with(point, &self.params)
    }

    /// Find the neighborhood of `point` using the given params.
    ///
    /// At most `params.max_neighbors()` objects are returned, each with a squared distance below
    /// `params.max_sq_dist()`. Among objects at the same distance, the one added first wins.
    pub fn query_with(
        &self,
        point: &[N; D],
        params: &NeighborhoodParams<N>,
    ) -> Result<Neighborhood<'_, N, D>> {
        check_finite(point)?;
        log::trace!(
            "querying {:?} for up to {} neighbors",
            point,
            params.max_neighbors()
        );
        Ok(search(self.root(), self.num_items, point, params))
    }

    /// Query every point in `points` with the tree's params.
    pub fn query_many(&self, points: &[[N; D]]) -> Result<Vec<Neighborhood<'_, N, D>>> {
        points.iter().map(|point| self.query(point)).collect()
    }

    /// Query every point in `points` with the tree's params, in parallel.
    #[cfg(feature = "rayon")]
    pub fn par_query_many(&self, points: &[[N; D]]) -> Result<Vec<Neighborhood<'_, N, D>>> {
        points.par_iter().map(|point| self.query(point)).collect()
    }

    /// Find the same neighborhood as [`query_with`][Self::query_with] by ranking every object.
    ///
    /// This is linear in the size of the tree and is meant as a reference to check tree queries
    /// against. The result is sorted by ascending distance.
    pub fn query_exhaustive(
        &self,
        point: &[N; D],
        params: &NeighborhoodParams<N>,
    ) -> Result<Vec<Neighbor<'_, N, D>>> {
        check_finite(point)?;
        let mut objects: Vec<_> = self
            .iter()
            .filter(|object| params.within_radius(object.sq_dist(point)))
            .collect();
        objects.sort_by(|a, b| a.compare(b, CompareBy::Distance(point)));
        Ok(objects
            .into_iter()
            .take(params.max_neighbors())
            .map(|object| Neighbor::new(object, object.sq_dist(point)))
            .collect())
    }
}

impl<N: IndexableNum> KDTree<N, 2> {
    /// Find the neighborhood of a 2D coordinate using the params the tree was built with.
    pub fn query_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Neighborhood<'_, N, 2>> {
        self.query(&[coord.x(), coord.y()])
    }
}
