//! Edit operations produced by diffing two documents.

use crate::fieldpath::Path;
use crate::value::Value;
use std::fmt;

/// PathOp is one structural edit that turns the base document into the
/// local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOp {
    /// Writes `value` at `path`. `base_value` is `None` when the base had no
    /// value there.
    Set {
        path: Path,
        base_value: Option<Value>,
        value: Value,
    },
    /// Removes the value at `path`.
    Delete { path: Path, base_value: Value },
}

impl PathOp {
    pub fn path(&self) -> &Path {
        match self {
            PathOp::Set { path, .. } | PathOp::Delete { path, .. } => path,
        }
    }

    /// The value the base held at this path.
    pub fn base_value(&self) -> Option<&Value> {
        match self {
            PathOp::Set { base_value, .. } => base_value.as_ref(),
            PathOp::Delete { base_value, .. } => Some(base_value),
        }
    }

    /// The value this op leaves at its path; `None` for a delete.
    pub fn new_value(&self) -> Option<&Value> {
        match self {
            PathOp::Set { value, .. } => Some(value),
            PathOp::Delete { .. } => None,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, PathOp::Delete { .. })
    }

    /// Splits the op into its path, base value and new value.
    pub fn into_parts(self) -> (Path, Option<Value>, Option<Value>) {
        match self {
            PathOp::Set {
                path,
                base_value,
                value,
            } => (path, base_value, Some(value)),
            PathOp::Delete { path, base_value } => (path, Some(base_value), None),
        }
    }
}

impl fmt::Display for PathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOp::Set {
                path,
                base_value: None,
                ..
            } => write!(f, "+ {}", path),
            PathOp::Set { path, .. } => write!(f, "~ {}", path),
            PathOp::Delete { path, .. } => write!(f, "- {}", path),
        }
    }
}
