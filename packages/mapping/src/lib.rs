//! Kitbag Mapping: transformations over associative containers
//!
//! Every operation borrows its input container, feeds a fresh view of its
//! entries through the `kitbag-sequence` combinators, and collects the
//! result into a new container. The input is never mutated.
//!
//! Any container whose shared reference iterates `(&K, &V)` pairs works as
//! input: `BTreeMap`, `HashMap`, `IndexMap`. Results are built through
//! `FromIterator`, so when the produced keys collide the later pair wins.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! let prices: BTreeMap<&str, u32> = [("apple", 3), ("pear", 5)].into_iter().collect();
//! let doubled: BTreeMap<&str, u32> = kitbag_mapping::map(&prices, |k, v| (*k, v * 2));
//! assert_eq!(doubled["pear"], 10);
//! assert_eq!(prices["pear"], 5);
//! ```

mod transform;

pub use transform::{drop, filter, map, reverse_lookup, try_filter, try_map};

/// The insertion-ordered associative container.
#[cfg(feature = "indexmap")]
pub type Mapping<K, V> = indexmap::IndexMap<K, V>;
