use crate::error::{KDTreeError, Result};
use crate::r#type::IndexableNum;

/// Limits applied to a neighborhood query.
///
/// Use `usize::MAX` neighbors for "everything within the radius" and an infinite squared distance
/// for "the k closest, however far away".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborhoodParams<N: IndexableNum> {
    max_neighbors: usize,
    max_sq_dist: N,
}

impl<N: IndexableNum> NeighborhoodParams<N> {
    /// Create new params, validating both limits.
    ///
    /// `max_neighbors` must be at least 1. `max_sq_dist` must be non-negative and not NaN; it is
    /// an exclusive bound, so only objects strictly closer than it are returned.
    pub fn try_new(max_neighbors: usize, max_sq_dist: N) -> Result<Self> {
        if max_neighbors == 0 {
            return Err(KDTreeError::InvalidNeighborCount(max_neighbors));
        }
        if max_sq_dist.is_nan() || max_sq_dist < N::zero() {
            return Err(KDTreeError::InvalidSearchDistance(
                max_sq_dist.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(Self {
            max_neighbors,
            max_sq_dist,
        })
    }

    /// The `k` closest objects, with no distance limit.
    pub fn nearest(k: usize) -> Result<Self> {
        Self::try_new(k, N::infinity())
    }

    /// Every object strictly closer than `sqrt(max_sq_dist)`.
    pub fn within(max_sq_dist: N) -> Result<Self> {
        Self::try_new(usize::MAX, max_sq_dist)
    }

    /// Maximum number of neighbors returned.
    pub fn max_neighbors(&self) -> usize {
        self.max_neighbors
    }

    /// Exclusive upper bound on the squared distance of returned neighbors.
    pub fn max_sq_dist(&self) -> N {
        self.max_sq_dist
    }

    /// Returns `true` if an object at `sq_dist` lies within the search radius.
    ///
    /// An infinite radius admits everything, including finite points whose squared distance
    /// overflows to infinity.
    #[inline]
    pub fn within_radius(&self, sq_dist: N) -> bool {
        sq_dist < self.max_sq_dist || self.max_sq_dist.is_infinite()
    }
}

impl<N: IndexableNum> Default for NeighborhoodParams<N> {
    /// No limit on either count or distance.
    fn default() -> Self {
        Self {
            max_neighbors: usize::MAX,
            max_sq_dist: N::infinity(),
        }
    }
}
