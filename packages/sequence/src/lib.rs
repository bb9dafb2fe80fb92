//! Kitbag Sequence: lazy, pull-driven sequences
//!
//! A sequence here is any [`Iterator`]. This crate adds the pieces the
//! standard adapters don't cover directly:
//! - [`Range`]: numeric producer with a signed increment (`range_to`,
//!   `range`, `range_by`)
//! - [`map`], [`filter`], [`drop`]: single-source combinators
//! - [`zip`], [`zip_all`]: multi-source combinators that stop at the
//!   shortest input
//!
//! Every sequence produced here is fused: after the first `None` it keeps
//! returning `None`.
//!
//! Combinators take their source by value and pull from it on demand. A
//! caller that wants to keep the source after the combinator is done with
//! it passes `source.by_ref()`; whatever the combinator pulled is gone.
//!
//! # Example
//!
//! ```rust
//! use kitbag_sequence::{filter, map, range};
//!
//! let evens = filter(range(0, 10), |x| x % 2 == 0);
//! let squares: Vec<i64> = map(evens, |x| x * x).collect();
//! assert_eq!(squares, vec![0, 4, 16, 36, 64]);
//! ```

mod combinators;
mod error;
mod range;
mod zip;

pub use combinators::{drop, filter, map, Filter, Map};
pub use error::SequenceError;
pub use range::{range, range_by, range_to, Range, Step};
pub use zip::{zip, zip_all, IntoSources, Sources, Zip, ZipAll};
