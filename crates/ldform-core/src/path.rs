//! Dotted-path addressing over JSON value trees.
//!
//! A path is split on `.`. Each segment names an object key; when the
//! current node is an array, a segment that parses as an index addresses
//! that element instead (`image.0`, `step.2.text`).
//!
//! Reads never fail: a missing key, an out-of-range index, or a scalar in
//! the middle of the path simply yields nothing. Writes replace non-container
//! intermediates with empty objects and pad arrays with `null` when written
//! past their end, up to [`MAX_PADDING`] elements. A write that would pad
//! further is refused and leaves the tree untouched.

use serde_json::{Map, Value};

/// Most `null` elements a single write may append before its target index.
pub const MAX_PADDING: usize = 1024;

/// Read the value at `path`. `None` when any segment is missing.
///
/// A stored `null` is returned as `Some(&Value::Null)`.
#[must_use]
pub fn get<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(tree, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Read the value at `path`, or `default` when nothing is stored there.
#[must_use]
pub fn get_or<'a>(tree: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(tree, path).unwrap_or(default)
}

/// Mutable counterpart of [`get`]. Never creates anything.
pub fn get_mut<'a>(tree: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    path.split('.').try_fold(tree, |node, segment| match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(move |i| items.get_mut(i)),
        _ => None,
    })
}

/// Whether something other than `null` is stored at `path`.
#[must_use]
pub fn is_set(tree: &Value, path: &str) -> bool {
    get(tree, path).is_some_and(|value| !value.is_null())
}

/// Write `value` at `path`, creating intermediate containers as needed.
///
/// Returns `false` without touching the tree when an array segment lies more
/// than [`MAX_PADDING`] elements past the end of an existing array.
pub fn set(tree: &mut Value, path: &str, value: Value) -> bool {
    if !writable(tree, path) {
        return false;
    }
    let slot = path.split('.').fold(tree, slot);
    *slot = value;
    true
}

/// Whether [`set`] would accept `path`. Only existing arrays can reject a
/// write: every container vivified along the way is an object.
fn writable(tree: &Value, path: &str) -> bool {
    let mut node = Some(tree);
    for segment in path.split('.') {
        node = match node {
            Some(Value::Array(items)) => match segment.parse::<usize>() {
                Ok(index) if index.saturating_sub(items.len()) > MAX_PADDING => return false,
                Ok(index) => items.get(index),
                Err(_) => None,
            },
            Some(Value::Object(map)) => map.get(segment),
            _ => return true,
        };
    }
    true
}

/// Remove and return the value at `path`. Array elements shift down.
pub fn remove(tree: &mut Value, path: &str) -> Option<Value> {
    let (parent, last) = match path.rsplit_once('.') {
        Some((parent, last)) => (get_mut(tree, parent)?, last),
        None => (tree, path),
    };
    match parent {
        Value::Object(map) => map.shift_remove(last),
        Value::Array(items) => {
            let index = last.parse::<usize>().ok().filter(|i| *i < items.len())?;
            Some(items.remove(index))
        }
        _ => None,
    }
}

fn slot<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = if node.is_array() {
        segment.parse::<usize>().ok()
    } else {
        None
    };

    match (node, index) {
        (Value::Array(items), Some(index)) => {
            if items.len() <= index {
                items.resize(index + 1, Value::Null);
            }
            &mut items[index]
        }
        (node, _) => {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            // Indexing an object by key inserts `null` when the key is absent.
            &mut node[segment]
        }
    }
}
