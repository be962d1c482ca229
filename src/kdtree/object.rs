//! Indexed points and the per-query neighbor records that reference them.

use std::cmp::Ordering;

use crate::r#type::IndexableNum;

/// The key two [`SpatialObject`]s are compared by.
///
/// The context is passed on every call: a comparison made under one key says nothing about the
/// order under another, and `Distance` results are only meaningful for the point they carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompareBy<'a, N: IndexableNum, const D: usize> {
    /// Compare the coordinate on the given axis. Used while building.
    Axis(usize),
    /// Compare squared distance to the given point. Used when ranking candidates.
    Distance(&'a [N; D]),
}

/// A point stored in a [`KDTree`][crate::kdtree::KDTree].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialObject<N: IndexableNum, const D: usize> {
    coords: [N; D],
    id: usize,
}

impl<N: IndexableNum, const D: usize> SpatialObject<N, D> {
    pub(crate) fn new(coords: [N; D], id: usize) -> Self {
        Self { coords, id }
    }

    /// The position of this object.
    #[inline]
    pub fn coords(&self) -> &[N; D] {
        &self.coords
    }

    /// The coordinate on `axis`.
    #[inline]
    pub fn coord(&self, axis: usize) -> N {
        self.coords[axis]
    }

    /// The insertion index returned by
    /// [`KDTreeBuilder::add`][crate::kdtree::KDTreeBuilder::add].
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Squared euclidean distance from this object to `point`.
    #[inline]
    pub fn sq_dist(&self, point: &[N; D]) -> N {
        self.coords
            .iter()
            .zip(point.iter())
            .fold(N::zero(), |acc, (a, b)| {
                let d = *a - *b;
                acc + d * d
            })
    }

    /// Compare two objects under `key`, falling back to insertion order on ties.
    pub fn compare(&self, other: &Self, key: CompareBy<'_, N, D>) -> Ordering {
        let ord = match key {
            CompareBy::Axis(axis) => cmp_num(self.coords[axis], other.coords[axis]),
            CompareBy::Distance(point) => cmp_num(self.sq_dist(point), other.sq_dist(point)),
        };
        ord.then(self.id.cmp(&other.id))
    }
}

/// One result of a neighborhood query: a stored object and its squared distance to the query
/// point.
///
/// Neighbors order by squared distance, then by insertion index, so among equally distant
/// objects the one added first ranks as closer.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a, N: IndexableNum, const D: usize> {
    object: &'a SpatialObject<N, D>,
    sq_dist: N,
}

impl<'a, N: IndexableNum, const D: usize> Neighbor<'a, N, D> {
    pub(crate) fn new(object: &'a SpatialObject<N, D>, sq_dist: N) -> Self {
        Self { object, sq_dist }
    }

    /// The stored object.
    pub fn object(&self) -> &'a SpatialObject<N, D> {
        self.object
    }

    /// Squared distance from the query point.
    pub fn sq_dist(&self) -> N {
        self.sq_dist
    }

    /// Insertion index of the stored object.
    pub fn id(&self) -> usize {
        self.object.id
    }

    /// Position of the stored object.
    pub fn coords(&self) -> &'a [N; D] {
        &self.object.coords
    }
}

impl<N: IndexableNum, const D: usize> PartialEq for Neighbor<'_, N, D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: IndexableNum, const D: usize> Eq for Neighbor<'_, N, D> {}

impl<N: IndexableNum, const D: usize> Ord for Neighbor<'_, N, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_num(self.sq_dist, other.sq_dist).then(self.object.id.cmp(&other.object.id))
    }
}

impl<N: IndexableNum, const D: usize> PartialOrd for Neighbor<'_, N, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// NaN coordinates are rejected on insertion and in query points, so distances are never NaN
#[inline]
fn cmp_num<N: IndexableNum>(a: N, b: N) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn squared_distance() {
        let object = SpatialObject::new([1.0_f64, 2.0, 3.0], 0);
        assert_eq!(object.sq_dist(&[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(object.sq_dist(&[4.0, 6.0, 3.0]), 25.0);
    }

    #[test]
    fn compare_by_axis_and_distance() {
        let a = SpatialObject::new([0.0_f64, 5.0], 0);
        let b = SpatialObject::new([3.0_f64, 1.0], 1);

        assert_eq!(a.compare(&b, CompareBy::Axis(0)), Ordering::Less);
        assert_eq!(a.compare(&b, CompareBy::Axis(1)), Ordering::Greater);

        let origin = [0.0, 0.0];
        assert_eq!(a.compare(&b, CompareBy::Distance(&origin)), Ordering::Greater);
        let far = [10.0, 0.0];
        assert_eq!(a.compare(&b, CompareBy::Distance(&far)), Ordering::Greater);
        let high = [0.0, 10.0];
        assert_eq!(a.compare(&b, CompareBy::Distance(&high)), Ordering::Less);
    }

    #[test]
    fn ties_break_on_insertion_index() {
        let a = SpatialObject::new([1.0_f32, 1.0], 4);
        let b = SpatialObject::new([1.0_f32, 1.0], 2);
        assert_eq!(a.compare(&b, CompareBy::Axis(0)), Ordering::Greater);

        let na = Neighbor::new(&a, 2.0);
        let nb = Neighbor::new(&b, 2.0);
        assert!(nb < na);
        assert_ne!(na, nb);
    }
}
