//! Bulk assertions over the values of a property map.
//!
//! Each assertion checks every property and reports the first failing one
//! in key order.

use std::collections::BTreeMap;

use kitbag_sequence::filter;

use crate::check::{is_na, is_void};
use crate::Value;

/// A property failed an assertion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{name} {message} ({actual})")]
pub struct AssertionError {
    /// Name of the failing property.
    pub name: String,
    /// The value it held.
    pub actual: Value,
    pub message: &'static str,
}

fn assert_all(
    properties: &BTreeMap<String, Value>,
    message: &'static str,
    mut failing: impl FnMut(&Value) -> bool,
) -> Result<(), AssertionError> {
    match filter(properties, |&(_, value)| failing(value)).next() {
        Some((name, actual)) => {
            log::debug!("assertion failed: {} {}", name, message);
            Err(AssertionError {
                name: name.clone(),
                actual: actual.clone(),
                message,
            })
        }
        None => Ok(()),
    }
}

pub fn all_not_void(properties: &BTreeMap<String, Value>) -> Result<(), AssertionError> {
    assert_all(properties, "is void", is_void)
}

pub fn all_not_na(properties: &BTreeMap<String, Value>) -> Result<(), AssertionError> {
    assert_all(properties, "is N/A", is_na)
}

/// NaN counts as numeric.
pub fn all_numeric(properties: &BTreeMap<String, Value>) -> Result<(), AssertionError> {
    assert_all(properties, "is not numeric", |v| !v.is_number())
}

/// Every value is a number greater than zero.
pub fn all_positive(properties: &BTreeMap<String, Value>) -> Result<(), AssertionError> {
    assert_all(properties, "is not positive", |v| {
        !v.as_f64().is_some_and(|x| x > 0.0)
    })
}

/// Every value is a number no less than zero.
pub fn all_not_negative(properties: &BTreeMap<String, Value>) -> Result<(), AssertionError> {
    assert_all(properties, "is negative", |v| {
        !v.as_f64().is_some_and(|x| x >= 0.0)
    })
}

/// Every value is an integer or a float without a fractional part.
pub fn all_integer(properties: &BTreeMap<String, Value>) -> Result<(), AssertionError> {
    assert_all(properties, "is not integer", |v| match v {
        Value::Integer(_) => false,
        Value::Float(f) => !(f.is_finite() && f.fract() == 0.0),
        _ => true,
    })
}

/// Every value is a non-empty string or array.
pub fn all_not_empty(properties: &BTreeMap<String, Value>) -> Result<(), AssertionError> {
    assert_all(properties, "is empty", |v| match v {
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        _ => true,
    })
}
