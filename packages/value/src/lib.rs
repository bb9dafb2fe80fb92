//! Kitbag Value: helpers for plain structured records
//!
//! - `Value`: dynamically typed tree (the record)
//! - `Path`: `/`-separated property path
//! - property access, structural equality, copy and merge
//! - N/A checks and bulk assertions over property maps
//! - conversion to and from `serde_json` and serde types
//!
//! # Example
//!
//! ```rust
//! use kitbag_value::{get_property, path, set_property, Value};
//!
//! let mut record = Value::map();
//! record.set(&path!("user/name"), Value::from("Alice")).unwrap();
//!
//! assert_eq!(get_property(&record, &path!("user/name")), Some(&Value::from("Alice")));
//! assert!(set_property(&mut record, &path!("user/age"), Value::from(30)));
//! assert!(!set_property(&mut record, &path!("missing/age"), Value::from(30)));
//! ```

mod assert;
mod check;
mod convert;
mod entries;
mod error;
mod object;
mod path;
mod value;

pub use assert::{
    all_integer, all_not_empty, all_not_na, all_not_negative, all_not_void, all_numeric,
    all_positive, AssertionError,
};
pub use check::{
    equal_values, is_na, is_nan, is_structured, is_void, not_na, not_nan, not_structured,
    not_void,
};
pub use convert::{from_value, json_to_value, to_value, value_to_json};
pub use entries::{entries, Entries, Walk};
pub use error::Error;
pub use object::{
    copy, empty_removed, equals, get_property, merge, na_removed, set_property, void_removed,
    Depth,
};
pub use path::{Path, PathError};
pub use value::Value;
