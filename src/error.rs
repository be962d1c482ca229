use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KDTreeError {
    /// A neighborhood must be allowed to hold at least one neighbor.
    #[error("Maximum neighbor count must be at least 1, got {0}.")]
    InvalidNeighborCount(usize),

    /// The maximum squared search distance was negative or NaN.
    #[error("Maximum squared search distance must be non-negative and not NaN, got {0}.")]
    InvalidSearchDistance(f64),

    /// A point contained a NaN or infinite coordinate.
    #[error("Point coordinates must be finite, got {0:?}.")]
    NonFiniteCoordinate(Vec<f64>),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, KDTreeError>;
