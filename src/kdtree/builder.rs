use std::ops::Range;

use bytemuck::try_cast_slice;

use crate::error::{KDTreeError, Result};
use crate::kdtree::params::NeighborhoodParams;
use crate::kdtree::traversal::KDNode;
use crate::kdtree::{CompareBy, KDTree, SpatialObject};
use crate::r#type::{check_finite, IndexableNum};

/// A builder to create a [`KDTree`].
///
/// Points are staged with [`add`][Self::add] and the tree is built once, by consuming the builder
/// with [`build`][Self::build].
///
/// ```
/// use kd_neighbors::kdtree::KDTreeBuilder;
///
/// let mut builder = KDTreeBuilder::<f64, 2>::new(3, f64::INFINITY).unwrap();
/// builder.add([0., 0.]).unwrap();
/// builder.add([1., 0.]).unwrap();
/// builder.add([5., 5.]).unwrap();
/// let tree = builder.build();
///
/// let nearest = tree.query(&[0.9, 0.1]).unwrap().into_sorted_vec();
/// assert_eq!(nearest[0].id(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<N: IndexableNum, const D: usize> {
    objects: Vec<SpatialObject<N, D>>,
    params: NeighborhoodParams<N>,
}

impl<N: IndexableNum, const D: usize> KDTreeBuilder<N, D> {
    const NON_EMPTY_DIMENSION: () = assert!(D > 0, "a KDTree needs at least one dimension");

    /// Create a new builder whose tree returns at most `max_neighbors` objects, each strictly
    /// closer than `sqrt(max_sq_dist)`, from [`KDTree::query`].
    pub fn new(max_neighbors: usize, max_sq_dist: N) -> Result<Self> {
        Ok(Self::with_params(NeighborhoodParams::try_new(
            max_neighbors,
            max_sq_dist,
        )?))
    }

    /// Create a new builder with already validated query params.
    pub fn with_params(params: NeighborhoodParams<N>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY_DIMENSION;
        log::trace!(
            "new KDTreeBuilder: max neighbors {}, max squared distance {:?}",
            params.max_neighbors(),
            params.max_sq_dist()
        );
        Self {
            objects: vec![],
            params,
        }
    }

    /// Reserve room for `additional` more points.
    pub fn reserve(&mut self, additional: usize) {
        self.objects.reserve(additional);
    }

    /// The number of points added so far.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no points have been added.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The params the built tree will use for [`KDTree::query`].
    pub fn params(&self) -> &NeighborhoodParams<N> {
        &self.params
    }

    /// Add a point to the index.
    ///
    /// This returns the insertion index, which query results report back through
    /// [`Neighbor::id`][crate::kdtree::Neighbor::id].
    pub fn add(&mut self, point: [N; D]) -> Result<usize> {
        check_finite(&point)?;
        let index = self.objects.len();
        self.objects.push(SpatialObject::new(point, index));
        Ok(index)
    }

    /// Add points from a flat slice of interleaved coordinates, `D` values per point.
    ///
    /// Returns the range of insertion indices assigned. Nothing is added if the slice length is
    /// not a multiple of `D` or any coordinate is not finite.
    pub fn add_interleaved(&mut self, coords: &[N]) -> Result<Range<usize>> {
        let points: &[[N; D]] = try_cast_slice(coords).map_err(|err| {
            KDTreeError::General(format!(
                "Cannot read {} coordinates as {}-dimensional points: {}.",
                coords.len(),
                D,
                err
            ))
        })?;
        for point in points {
            check_finite(point)?;
        }

        let start = self.objects.len();
        self.objects.extend(
            points
                .iter()
                .enumerate()
                .map(|(i, point)| SpatialObject::new(*point, start + i)),
        );
        Ok(start..self.objects.len())
    }

    /// Consume this builder, partitioning the staged points into a KDTree ready for queries.
    pub fn build(self) -> KDTree<N, D> {
        let num_items = self.objects.len();
        log::debug!("building KDTree from {} points", num_items);

        let root = build_node(self.objects).map(Box::new);
        let depth = root.as_deref().map_or(0, KDNode::depth);

        log::debug!("built KDTree with {} points, depth {}", num_items, depth);
        KDTree {
            root,
            num_items,
            depth,
            params: self.params,
        }
    }
}

/// Recursive median partition. Returns `None` for an empty sublist.
fn build_node<N: IndexableNum, const D: usize>(
    mut objects: Vec<SpatialObject<N, D>>,
) -> Option<KDNode<N, D>> {
    if objects.len() <= 1 {
        return objects.pop().map(KDNode::leaf);
    }

    let axis = widest_axis(&objects);
    objects.sort_by(|a, b| a.compare(b, CompareBy::Axis(axis)));

    // the median becomes this node's object; everything after it goes right
    let mid = objects.len() / 2;
    let mut upper = objects.split_off(mid).into_iter();
    let object = upper.next()?;
    let right: Vec<_> = upper.collect();

    Some(KDNode {
        object,
        split_axis: Some(axis),
        left: build_node(objects).map(Box::new),
        right: build_node(right).map(Box::new),
    })
}

/// The axis with the largest extent. Ties, including all-zero extents, go to the lowest axis.
fn widest_axis<N: IndexableNum, const D: usize>(objects: &[SpatialObject<N, D>]) -> usize {
    let mut mins = [N::infinity(); D];
    let mut maxs = [N::neg_infinity(); D];
    for object in objects {
        for (axis, c) in object.coords().iter().enumerate() {
            if *c < mins[axis] {
                mins[axis] = *c;
            }
            if *c > maxs[axis] {
                maxs[axis] = *c;
            }
        }
    }

    let mut best_axis = 0;
    let mut best_extent = maxs[0] - mins[0];
    for axis in 1..D {
        let extent = maxs[axis] - mins[axis];
        if extent > best_extent {
            best_axis = axis;
            best_extent = extent;
        }
    }
    best_axis
}
