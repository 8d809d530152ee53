//! Codec module - Converts document text to values and back.
//!
//! JSON and YAML are supported. Only single-document input is accepted.

mod document;
mod format;

pub use document::*;
pub use format::*;
