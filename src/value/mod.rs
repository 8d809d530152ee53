//! Value module - In-memory representation of YAML/JSON documents.
//!
//! This module provides the closed value type every other module walks.

mod value;

pub use value::*;
