//! Tree differencing.

use super::ignored::is_ignored;
use super::ops::PathOp;
use crate::fieldpath::{Path, PathElement};
use crate::value::{Map, Value};

/// Computes the edits that turn `base` into `local`.
///
/// Maps are compared key by key. Lists are atomic: any difference inside a
/// list, or a change between a list and another kind of value, is a single
/// set of the whole list. Paths under [`IGNORED_PATH_PREFIXES`] never yield
/// an op.
///
/// [`IGNORED_PATH_PREFIXES`]: super::IGNORED_PATH_PREFIXES
pub fn diff_to_path_ops(base: &Value, local: &Value) -> Vec<PathOp> {
    let mut ops = Vec::new();
    diff_at(base, local, &Path::new(), &mut ops);
    ops
}

fn diff_at(base: &Value, local: &Value, path: &Path, ops: &mut Vec<PathOp>) {
    if is_ignored(path) || base == local {
        return;
    }

    match (base, local) {
        (Value::List(_), _) | (_, Value::List(_)) => ops.push(set(path, base, local)),
        (Value::Map(base_map), Value::Map(local_map)) => diff_maps(base_map, local_map, path, ops),
        _ => ops.push(set(path, base, local)),
    }
}

fn diff_maps(base: &Map, local: &Map, path: &Path, ops: &mut Vec<PathOp>) {
    for (key, base_child) in base.iter() {
        let child_path = path.with(PathElement::key(key.as_str()));
        match local.get(key) {
            Some(local_child) => diff_at(base_child, local_child, &child_path, ops),
            None if !is_ignored(&child_path) => ops.push(PathOp::Delete {
                path: child_path,
                base_value: base_child.clone(),
            }),
            None => {}
        }
    }

    for (key, local_child) in local.iter().filter(|(key, _)| !base.has(key)) {
        let child_path = path.with(PathElement::key(key.as_str()));
        if !is_ignored(&child_path) {
            ops.push(PathOp::Set {
                path: child_path,
                base_value: None,
                value: local_child.clone(),
            });
        }
    }
}

fn set(path: &Path, base: &Value, local: &Value) -> PathOp {
    PathOp::Set {
        path: path.clone(),
        base_value: Some(base.clone()),
        value: local.clone(),
    }
}
