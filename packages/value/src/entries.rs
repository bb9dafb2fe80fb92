//! Lazy walks over the properties of a record.

use std::collections::btree_map;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::{Path, Value};

/// Which properties [`entries`] yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walk {
    /// Descend into nested maps and arrays.
    pub recursive: bool,
    /// Yield maps and arrays themselves, not only scalars.
    pub include_branches: bool,
}

impl Walk {
    /// Direct children only, structured or not.
    pub const fn shallow() -> Self {
        Walk {
            recursive: false,
            include_branches: true,
        }
    }

    /// Every scalar in the tree.
    pub const fn leaves() -> Self {
        Walk {
            recursive: true,
            include_branches: false,
        }
    }

    /// Every node in the tree, parents before children.
    pub const fn tree() -> Self {
        Walk {
            recursive: true,
            include_branches: true,
        }
    }
}

impl Default for Walk {
    fn default() -> Self {
        Walk::shallow()
    }
}

enum Children<'a> {
    Map(btree_map::Iter<'a, String, Value>),
    Array(Enumerate<slice::Iter<'a, Value>>),
}

impl<'a> Children<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Map(map) => Some(Children::Map(map.iter())),
            Value::Array(arr) => Some(Children::Array(arr.iter().enumerate())),
            _ => None,
        }
    }

    fn next(&mut self) -> Option<(String, &'a Value)> {
        match self {
            Children::Map(iter) => iter.next().map(|(k, v)| (k.clone(), v)),
            Children::Array(iter) => iter.next().map(|(i, v)| (i.to_string(), v)),
        }
    }
}

/// Pre-order walk created by [`entries`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Entries<'a> {
    stack: Vec<(Path, Children<'a>)>,
    walk: Walk,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Path, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, children) = self.stack.last_mut()?;
            let Some((component, value)) = children.next() else {
                self.stack.pop();
                continue;
            };
            let path = prefix.child(component);

            let nested = if self.walk.recursive {
                Children::of(value)
            } else {
                None
            };
            let is_branch = value.is_map() || value.is_array();
            if let Some(nested) = nested {
                self.stack.push((path.clone(), nested));
            }
            if !is_branch || self.walk.include_branches {
                return Some((path, value));
            }
        }
    }
}

impl FusedIterator for Entries<'_> {}

/// Walk the properties of `value`, yielding each with its path.
///
/// Scalars have no properties, so walking one yields nothing.
///
/// ```rust
/// use kitbag_value::{entries, path, Value, Walk};
///
/// let mut record = Value::map();
/// record.set(&path!("a/b"), Value::from(1)).unwrap();
/// record.set(&path!("c"), Value::from(2)).unwrap();
///
/// let paths: Vec<String> = entries(&record, Walk::leaves())
///     .map(|(path, _)| path.to_string())
///     .collect();
/// assert_eq!(paths, ["a/b", "c"]);
/// ```
pub fn entries(value: &Value, walk: Walk) -> Entries<'_> {
    let stack = Children::of(value)
        .map(|children| vec![(Path::default(), children)])
        .unwrap_or_default();
    Entries { stack, walk }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_to_value;
    use serde_json::json;

    fn paths(value: &Value, walk: Walk) -> Vec<String> {
        entries(value, walk).map(|(p, _)| p.to_string()).collect()
    }

    fn sample() -> Value {
        json_to_value(json!({"a": {"b": 1, "c": [true, {"d": null}]}, "e": "x"}))
    }

    #[test]
    fn shallow_yields_direct_children() {
        assert_eq!(paths(&sample(), Walk::shallow()), ["a", "e"]);
    }

    #[test]
    fn leaves_yields_scalars_only() {
        assert_eq!(
            paths(&sample(), Walk::leaves()),
            ["a/b", "a/c/0", "a/c/1/d", "e"]
        );
    }

    #[test]
    fn tree_is_pre_order() {
        assert_eq!(
            paths(&sample(), Walk::tree()),
            ["a", "a/b", "a/c", "a/c/0", "a/c/1", "a/c/1/d", "e"]
        );
    }

    #[test]
    fn yielded_values_match_paths() {
        let record = sample();
        for (path, value) in entries(&record, Walk::tree()) {
            assert_eq!(record.get(&path), Some(value));
        }
    }

    #[test]
    fn scalars_and_empty_containers_yield_nothing() {
        assert!(paths(&Value::from(5), Walk::tree()).is_empty());
        assert!(paths(&Value::map(), Walk::tree()).is_empty());
        assert!(paths(&Value::array(), Walk::leaves()).is_empty());
    }

    #[test]
    fn empty_branch_counts_as_branch() {
        let record = json_to_value(json!({"empty": {}, "n": 0}));
        assert_eq!(paths(&record, Walk::leaves()), ["n"]);
        assert_eq!(paths(&record, Walk::tree()), ["empty", "n"]);
    }

    #[test]
    fn stays_exhausted() {
        let record = sample();
        let mut walk = entries(&record, Walk::shallow());
        assert_eq!(walk.by_ref().count(), 2);
        assert!(walk.next().is_none());
        assert!(walk.next().is_none());
    }
}
