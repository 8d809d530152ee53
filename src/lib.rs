//! # Kube Threeway
//!
//! Three-way structural merge of Kubernetes YAML/JSON resources.
//!
//! A user edits a local copy of a resource while the live object on the server
//! keeps moving. Given the snapshot both started from (the base), this library
//! replays the user's edits onto the latest server copy, keeps server-side
//! changes the user never touched, and reports every field both sides changed
//! to different values instead of overwriting it.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of YAML/JSON documents
//! - [`fieldpath`] - Paths into a document and get/set/delete at a path
//! - [`diff`] - Edits between two documents, skipping server managed fields
//! - [`codec`] - Single-document JSON/YAML parsing and serialization
//! - [`merge`] - The three-way merge itself

pub mod codec;
pub mod diff;
pub mod error;
pub mod fieldpath;
pub mod merge;
pub mod value;

pub use codec::Format;
pub use diff::{diff_to_path_ops, PathOp};
pub use error::MergeError;
pub use fieldpath::{Path, PathElement};
pub use merge::{
    merge_local_into_server, Conflict, Conflicts, Localizer, MergeInput, MergeResult, Merger,
    MergerBuilder,
};
pub use value::Value;
