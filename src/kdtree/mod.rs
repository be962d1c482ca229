//! An implementation of an immutable K-D Tree answering bounded nearest-neighbor queries.

#![warn(missing_docs)]

mod builder;
mod index;
mod object;
mod params;
mod search;
mod traversal;

pub use builder::KDTreeBuilder;
pub use index::KDTree;
pub use object::{CompareBy, Neighbor, SpatialObject};
pub use params::NeighborhoodParams;
pub use traversal::{KDNode, Objects};

use crate::queue::MaxQueue;

/// The result of a query: a max-first queue holding at most k neighbors, farthest on top.
pub type Neighborhood<'a, N, const D: usize> = MaxQueue<Neighbor<'a, N, D>>;
