use std::fmt::Debug;

use num_traits::{Float, ToPrimitive};

use crate::error::{KDTreeError, Result};

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Squared distances are
/// compared against `+inf` for unbounded searches, so only floating point types are allowed.
pub trait IndexableNum:
    private::Sealed + Float + ToPrimitive + Default + Debug + Send + Sync + bytemuck::Pod
{
}

impl IndexableNum for f32 {}

impl IndexableNum for f64 {}

/// Check that every coordinate of `point` is finite.
pub(crate) fn check_finite<N: IndexableNum, const D: usize>(point: &[N; D]) -> Result<()> {
    if point.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(KDTreeError::NonFiniteCoordinate(
            point
                .iter()
                .map(|c| c.to_f64().unwrap_or(f64::NAN))
                .collect(),
        ))
    }
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
