//! Reading and writing values at a path.
//!
//! The writers take the root by value and hand back the root the caller must
//! keep using: an empty path or a non-container root means the returned value
//! is a different value from the one passed in.

use super::path::{Path, PathElement};
use crate::value::{Map, Value};

/// Most null slots a single write may append to a list. Writes further out
/// are dropped.
pub const MAX_LIST_PADDING: usize = 1024;

/// Returns the value at `path`, or `None` as soon as a segment is missing or
/// an intermediate value cannot be descended into.
pub fn get_at_path<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = root;
    for element in path {
        current = match current {
            Value::Map(m) => m.get(&element.as_key())?,
            Value::List(items) => items.get(element.as_index()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Writes `value` at `path`, creating intermediate containers as needed.
///
/// Missing or scalar intermediates are replaced by a list when the following
/// segment is an index and by a map otherwise. Writing an index past the end
/// of a list pads it with nulls, up to [`MAX_LIST_PADDING`] new slots. A key
/// only addresses an existing list slot: a non-numeric key, or a numeric key
/// past the end, leaves the list untouched.
pub fn set_at_path(root: Value, path: &Path, value: Value) -> Value {
    let Some(first) = path.as_slice().first() else {
        return value;
    };
    let mut root = if root.is_container() {
        root
    } else {
        container_for(first)
    };
    assign(&mut root, path.as_slice(), value);
    root
}

/// Removes the value at `path`. Missing parents make this a no-op.
pub fn delete_at_path(mut root: Value, path: &Path) -> Value {
    let Some((last, parents)) = path.as_slice().split_last() else {
        return root;
    };
    if !root.is_container() {
        return root;
    }
    match get_mut(&mut root, parents) {
        Some(Value::Map(m)) => {
            m.delete(&last.as_key());
        }
        Some(Value::List(items)) => {
            if let Some(i) = last.as_index().filter(|i| *i < items.len()) {
                items.remove(i);
            }
        }
        _ => {}
    }
    root
}

fn container_for(next: &PathElement) -> Value {
    match next {
        PathElement::Index(_) => Value::List(Vec::new()),
        PathElement::Key(_) => Value::Map(Map::new()),
    }
}

fn assign(container: &mut Value, elements: &[PathElement], value: Value) {
    let Some((element, rest)) = elements.split_first() else {
        return;
    };
    let Some(slot) = slot_mut(container, element) else {
        return;
    };
    match rest.first() {
        None => *slot = value,
        Some(next) => {
            if !slot.is_container() {
                *slot = container_for(next);
            }
            assign(slot, rest, value);
        }
    }
}

fn slot_mut<'a>(container: &'a mut Value, element: &PathElement) -> Option<&'a mut Value> {
    match container {
        Value::Map(m) => Some(m.entry(&element.as_key())),
        Value::List(items) => match element {
            PathElement::Index(i) => {
                let i = *i;
                if i >= items.len() {
                    if i - items.len() >= MAX_LIST_PADDING {
                        return None;
                    }
                    items.resize(i + 1, Value::Null);
                }
                items.get_mut(i)
            }
            PathElement::Key(_) => items.get_mut(element.as_index()?),
        },
        _ => None,
    }
}

fn get_mut<'a>(root: &'a mut Value, elements: &[PathElement]) -> Option<&'a mut Value> {
    let mut current = root;
    for element in elements {
        current = match current {
            Value::Map(m) => m.get_mut(&element.as_key())?,
            Value::List(items) => items.get_mut(element.as_index()?)?,
            _ => return None,
        };
    }
    Some(current)
}
