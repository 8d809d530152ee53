//! Diff module - Computes the edits between two documents.
//!
//! Server managed fields are excluded up front, so no edit ever touches them.

mod differ;
mod ignored;
mod ops;

pub use differ::*;
pub use ignored::*;
pub use ops::*;
