//! Kitbag: lazy sequences, mapping transforms and structured-data helpers.
//!
//! The layers are separate crates, re-exported here by concern:
//!
//! - [`sequence`]: `range`, `map`, `filter`, `drop` and `zip` over iterators
//! - [`mapping`]: non-destructive `map`, `filter`, `drop` and
//!   `reverse_lookup` over associative containers
//! - [`value`]: the `Value` record tree and its property helpers
//! - [`text`]: string, slice, number, template and date helpers
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use kitbag::{mapping, sequence};
//!
//! let squares: BTreeMap<i64, i64> =
//!     sequence::map(sequence::range_to(4), |n| (n, n * n)).collect();
//! let odd: BTreeMap<i64, i64> = mapping::filter(&squares, |_, v| v % 2 == 1);
//! assert_eq!(odd.into_iter().collect::<Vec<_>>(), [(1, 1), (3, 9)]);
//! ```

pub use kitbag_mapping as mapping;
pub use kitbag_sequence as sequence;
pub use kitbag_text as text;
pub use kitbag_value as value;
