//! Property access, structural equality, copy and merge.

use std::collections::BTreeMap;

use kitbag_sequence::zip;

use crate::check::{integer_equals_float, is_na, is_void};
use crate::{Path, Value};

/// How far [`copy`] and [`merge`] descend into nested structures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Depth {
    /// Top-level properties are replaced wholesale.
    #[default]
    Shallow,
    /// Nested containers of the same kind are combined in place.
    Recursive,
}

/// Look up a nested property.
///
/// Returns `None` when a step is missing or the path runs into a scalar.
pub fn get_property<'a>(value: &'a Value, path: &Path) -> Option<&'a Value> {
    value.get(path)
}

/// Write a property whose parent already exists.
///
/// Unlike [`Value::set`] no intermediate maps are created. Returns `true`
/// if the value was written.
pub fn set_property(value: &mut Value, path: &Path, property: Value) -> bool {
    let Some(parent_path) = path.parent() else {
        log::debug!("set_property: refusing to replace the root");
        return false;
    };
    let (Some(parent), Some(last)) = (value.get_mut(&parent_path), path.last()) else {
        log::debug!("set_property: no parent for '{}'", path);
        return false;
    };
    match parent.put(last, property) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("set_property: '{}' refused: {}", path, e);
            false
        }
    }
}

/// Structural equality.
///
/// Maps need the same key set, arrays the same length, and every pair of
/// children must be equal. Integers compare numerically with floats. NaN
/// is never equal to anything.
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, v)| y.get(key).is_some_and(|w| equals(v, w)))
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && zip((x, y)).all(|(v, w)| equals(v, w))
        }
        (Value::Integer(i), Value::Float(f)) | (Value::Float(f), Value::Integer(i)) => {
            integer_equals_float(*i, *f)
        }
        _ => a == b,
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Map(_), Value::Map(_)) | (Value::Array(_), Value::Array(_))
    )
}

fn assign(slot: &mut Value, incoming: &Value, depth: Depth) {
    if depth == Depth::Recursive && same_kind(slot, incoming) {
        copy(incoming, slot, depth);
    } else {
        *slot = incoming.clone();
    }
}

/// Copy every property of `src` into `dst`.
///
/// Maps are copied by key and arrays by index, with indices past the end
/// of `dst` appended. Nothing happens unless both are the same kind of
/// container.
pub fn copy(src: &Value, dst: &mut Value, depth: Depth) {
    match (src, dst) {
        (Value::Map(src), Value::Map(dst)) => {
            for (key, incoming) in src {
                match dst.get_mut(key) {
                    Some(slot) => assign(slot, incoming, depth),
                    None => {
                        dst.insert(key.clone(), incoming.clone());
                    }
                }
            }
        }
        (Value::Array(src), Value::Array(dst)) => {
            for (index, incoming) in src.iter().enumerate() {
                match dst.get_mut(index) {
                    Some(slot) => assign(slot, incoming, depth),
                    None => dst.push(incoming.clone()),
                }
            }
        }
        _ => log::trace!("copy: source and destination differ in kind, nothing copied"),
    }
}

/// Layer `b` over `a` into a new map.
///
/// With [`Depth::Recursive`], `Null` properties of `b` are skipped and
/// nested maps present on both sides are merged. Returns `None` unless
/// both values are maps.
pub fn merge(a: &Value, b: &Value, depth: Depth) -> Option<Value> {
    let (Value::Map(a), Value::Map(b)) = (a, b) else {
        return None;
    };
    Some(Value::Map(merge_maps(a, b, depth)))
}

fn merge_maps(
    a: &BTreeMap<String, Value>,
    b: &BTreeMap<String, Value>,
    depth: Depth,
) -> BTreeMap<String, Value> {
    let mut result = a.clone();
    for (key, incoming) in b {
        if depth == Depth::Shallow {
            result.insert(key.clone(), incoming.clone());
            continue;
        }
        if is_void(incoming) {
            continue;
        }
        let merged = match (result.get(key), incoming) {
            (Some(Value::Map(existing)), Value::Map(nested)) => {
                Value::Map(merge_maps(existing, nested, depth))
            }
            _ => incoming.clone(),
        };
        result.insert(key.clone(), merged);
    }
    result
}

/// A copy of `properties` without its void values.
pub fn void_removed(properties: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    kitbag_mapping::drop(properties, |_, value| is_void(value))
}

/// A copy of `properties` without its void or NaN values.
pub fn na_removed(properties: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    kitbag_mapping::drop(properties, |_, value| is_na(value))
}

/// A copy of `properties` without void values, empty strings, empty
/// arrays and empty maps.
pub fn empty_removed(properties: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    kitbag_mapping::drop(properties, |_, value| match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Map(map) => map.is_empty(),
        _ => false,
    })
}
