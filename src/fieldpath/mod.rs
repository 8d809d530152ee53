//! Field path module - Addresses locations inside a nested document.
//!
//! A [`Path`] is an ordered list of map keys and list indices. The functions in
//! this module read, write and delete the value a path points at.

mod access;
mod path;

pub use access::*;
pub use path::*;
