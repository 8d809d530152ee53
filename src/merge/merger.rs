//! Three-way merge of local edits onto the server document.

use super::conflict::{Conflict, Conflicts};
use crate::codec::{parse_document, serialize_document, Format};
use crate::diff::{diff_to_path_ops, PathOp};
use crate::error::MergeError;
use crate::fieldpath::{delete_at_path, get_at_path, set_at_path};
use crate::value::Value;
use tracing::{debug, trace};

/// Localizer turns an internal message key into user facing text.
pub trait Localizer: Send + Sync {
    fn localize(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn localize(&self, key: &str) -> String {
        self(key)
    }
}

/// The three document texts taking part in a merge.
#[derive(Debug, Clone, Copy)]
pub struct MergeInput<'a> {
    /// Common ancestor of local and server.
    pub base_code: &'a str,
    /// The user's edited copy.
    pub local_code: &'a str,
    /// The latest copy from the server.
    pub server_code: &'a str,
    /// Format of all three texts. Sniffed from `base_code` when `None`.
    pub format_hint: Option<Format>,
}

impl<'a> MergeInput<'a> {
    pub fn new(base_code: &'a str, local_code: &'a str, server_code: &'a str) -> Self {
        MergeInput {
            base_code,
            local_code,
            server_code,
            format_hint: None,
        }
    }

    pub fn with_format_hint(mut self, format_hint: Option<Format>) -> Self {
        self.format_hint = format_hint;
        self
    }
}

/// MergeResult holds the merged text and every path left unmerged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub merged_code: String,
    pub conflicts: Conflicts,
}

impl MergeResult {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Dot-joined conflict paths, e.g. `spec.replicas`.
    pub fn conflict_paths(&self) -> Vec<String> {
        self.conflicts.paths()
    }
}

/// TreeMerge is the outcome of merging already parsed documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeMerge {
    pub merged: Value,
    pub conflicts: Conflicts,
    /// Whether any applied edit moved the merged tree away from the server's.
    pub changed_server: bool,
}

/// Replays the edits from `base` to `local` onto a copy of `server`.
///
/// An edit is skipped and reported as a conflict when the server value at its
/// path differs from the base value and from the value the edit would leave.
/// Conflict checks always read the untouched `server` tree.
pub fn merge_values(base: &Value, local: &Value, server: &Value) -> TreeMerge {
    let ops = diff_to_path_ops(base, local);
    debug!(ops = ops.len(), "computed local edits");

    let mut merged = server.clone();
    let mut conflicts = Conflicts::new();
    let mut changed_server = false;

    for op in ops {
        let server_value = get_at_path(server, op.path());
        let server_changed = server_value != op.base_value();
        let local_differs = op.new_value() != server_value;

        if server_changed && local_differs {
            debug!(
                path = %op.path(),
                local = op.new_value().map_or("absent", crate::value::Value::type_name),
                server = server_value.map_or("absent", crate::value::Value::type_name),
                "local and server both changed the value"
            );
            let server_value = server_value.cloned();
            let (path, base_value, local_value) = op.into_parts();
            conflicts.add(Conflict::new(path, base_value, local_value, server_value));
            continue;
        }

        trace!(path = %op.path(), delete = op.is_delete(), "applying local edit");
        changed_server |= local_differs;
        merged = match op {
            PathOp::Set { path, value, .. } => set_at_path(merged, &path, value),
            PathOp::Delete { path, .. } => delete_at_path(merged, &path),
        };
    }

    TreeMerge {
        merged,
        conflicts,
        changed_server,
    }
}

/// MergerBuilder is a builder for creating a Merger.
#[derive(Default)]
pub struct MergerBuilder {
    localizer: Option<Box<dyn Localizer>>,
    return_server_on_noop: bool,
}

impl MergerBuilder {
    pub fn new() -> Self {
        MergerBuilder::default()
    }

    /// Sets the function applied to error message keys before they are returned.
    pub fn localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Some(Box::new(localizer));
        self
    }

    /// When set, a merge that leaves the server document unchanged returns the
    /// server text as-is instead of re-serializing it.
    pub fn return_server_on_noop(mut self, value: bool) -> Self {
        self.return_server_on_noop = value;
        self
    }

    pub fn build(self) -> Merger {
        let localizer: Box<dyn Localizer> = match self.localizer {
            Some(localizer) => localizer,
            None => Box::new(|key: &str| key.to_string()),
        };
        Merger {
            localizer,
            return_server_on_noop: self.return_server_on_noop,
        }
    }
}

/// Merger merges a user's local edits into the server copy of a document.
///
/// A Merger keeps no state between calls and can be shared across threads.
pub struct Merger {
    localizer: Box<dyn Localizer>,
    return_server_on_noop: bool,
}

impl Default for Merger {
    fn default() -> Self {
        MergerBuilder::new().build()
    }
}

impl Merger {
    pub fn builder() -> MergerBuilder {
        MergerBuilder::new()
    }

    /// Merges `input.local_code` into `input.server_code` using
    /// `input.base_code` as the common ancestor.
    ///
    /// The format is resolved once from the base text and the hint; local and
    /// server are parsed with that same format.
    pub fn merge(&self, input: &MergeInput<'_>) -> Result<MergeResult, MergeError> {
        let format = Format::resolve(input.format_hint, input.base_code);
        debug!(%format, "resolved document format");

        let base = self.parse(input.base_code, format, "base")?;
        let local = self.parse(input.local_code, format, "local")?;
        let server = self.parse(input.server_code, format, "server")?;

        let outcome = merge_values(&base, &local, &server);

        let merged_code = if self.return_server_on_noop && !outcome.changed_server {
            debug!("local edits leave the server document unchanged");
            input.server_code.to_string()
        } else {
            serialize_document(&outcome.merged, format)?
        };

        debug!(conflicts = outcome.conflicts.len(), "merge finished");
        Ok(MergeResult {
            merged_code,
            conflicts: outcome.conflicts,
        })
    }

    fn parse(&self, text: &str, format: Format, side: &str) -> Result<Value, MergeError> {
        parse_document(text, format).map_err(|err| {
            debug!(side, error = %err, "failed to parse document");
            match err {
                MergeError::MultiDocument { message } => {
                    MergeError::multi_document(self.localizer.localize(&message))
                }
                other => other,
            }
        })
    }
}

/// Merges with a default [`Merger`].
pub fn merge_local_into_server(input: &MergeInput<'_>) -> Result<MergeResult, MergeError> {
    Merger::default().merge(input)
}
