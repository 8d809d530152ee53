//! Merge module - Three-way merge of a local copy into the server copy.
//!
//! Local edits are computed against the common base and replayed onto the
//! server document. Paths changed differently on both sides are reported as
//! conflicts and keep the server's value.

mod conflict;
mod merger;


pub use conflict::*;
pub use merger::*;
