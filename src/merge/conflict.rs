//! Conflict types for merge operations.

use crate::fieldpath::Path;
use crate::value::Value;
use std::fmt;

/// Conflict is a path where local and server both moved away from the base
/// and ended up with different values.
///
/// `None` values mean the field was absent on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub path: Path,
    pub base_value: Option<Value>,
    pub local_value: Option<Value>,
    pub server_value: Option<Value>,
}

impl Conflict {
    /// Creates a new conflict.
    pub fn new(
        path: Path,
        base_value: Option<Value>,
        local_value: Option<Value>,
        server_value: Option<Value>,
    ) -> Self {
        Conflict {
            path,
            base_value,
            local_value,
            server_value,
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "conflict at document root")
        } else {
            write!(f, "conflict at {}", self.path)
        }
    }
}

/// Conflicts is an ordered collection of conflicts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conflicts {
    conflicts: Vec<Conflict>,
}

impl Conflicts {
    /// Creates a new empty Conflicts collection.
    pub fn new() -> Self {
        Conflicts {
            conflicts: Vec::new(),
        }
    }

    /// Adds a conflict.
    pub fn add(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter()
    }

    /// Dot-joined paths of the conflicts, in the order they were found.
    pub fn paths(&self) -> Vec<String> {
        self.conflicts.iter().map(|c| c.path.to_string()).collect()
    }
}

impl IntoIterator for Conflicts {
    type Item = Conflict;
    type IntoIter = std::vec::IntoIter<Conflict>;

    fn into_iter(self) -> Self::IntoIter {
        self.conflicts.into_iter()
    }
}

impl fmt::Display for Conflicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conflict) in self.conflicts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", conflict)?;
        }
        Ok(())
    }
}
