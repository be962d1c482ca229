#![doc = include_str!("../README.md")]

pub mod constants;
mod error;
pub mod kdtree;
pub mod queue;
mod r#type;

pub use error::{KDTreeError, Result};
pub use r#type::IndexableNum;
