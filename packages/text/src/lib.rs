//! Kitbag Text: small helpers for strings, slices, numbers and dates
//!
//! All positions and lengths on strings count `char`s, not bytes.
//! Negative positions count from the end.
//!
//! # Example
//!
//! ```rust
//! use kitbag_text::{fill_template, pad_left, split_last};
//!
//! assert_eq!(pad_left("7", 3, '0'), "007");
//! assert_eq!(split_last("archive.tar.gz", ".", ""), ("archive.tar", "gz"));
//!
//! let text = fill_template("{a}-{ab}", [("{a}", "1"), ("{ab}", "2")]).unwrap();
//! assert_eq!(text, "1-2");
//! ```

mod array;
mod date;
mod error;
mod number;
mod string;
mod template;

pub use array::{at, split};
pub use date::{format_date, weekday, DateNames, DateTimeParts};
pub use error::TextError;
pub use number::clip;
pub use string::{pad_left, pad_right, split_at, split_first, split_last};
pub use template::{escape, fill_template};
