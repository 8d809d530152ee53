//! Paths the server manages on its own.

use crate::fieldpath::Path;
use once_cell::sync::Lazy;

/// Prefixes of fields the API server rewrites independently of the user.
/// Edits at or below any of them are never diffed.
pub static IGNORED_PATH_PREFIXES: Lazy<Vec<Path>> = Lazy::new(|| {
    [
        "metadata.managedFields",
        "metadata.resourceVersion",
        "metadata.generation",
        "metadata.uid",
        "metadata.creationTimestamp",
        "status",
    ]
    .into_iter()
    .map(Path::from_dotted)
    .collect()
});

/// Returns true if `path` equals or is nested under an ignored prefix.
pub fn is_ignored(path: &Path) -> bool {
    IGNORED_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}
