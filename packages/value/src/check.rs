//! Predicates for N/A values.
//!
//! The void value is [`Value::Null`]. A value is N/A when it is void or a
//! NaN float.

use crate::Value;

pub fn is_nan(value: &Value) -> bool {
    matches!(value, Value::Float(f) if f.is_nan())
}

pub fn not_nan(value: &Value) -> bool {
    !is_nan(value)
}

pub fn is_void(value: &Value) -> bool {
    value.is_null()
}

pub fn not_void(value: &Value) -> bool {
    !is_void(value)
}

/// Void or NaN.
pub fn is_na(value: &Value) -> bool {
    is_void(value) || is_nan(value)
}

pub fn not_na(value: &Value) -> bool {
    !is_na(value)
}

/// Arrays and maps.
pub fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Map(_))
}

pub fn not_structured(value: &Value) -> bool {
    !is_structured(value)
}

/// `==`, except that NaN equals NaN and integers equal floats of the
/// same value.
pub fn equal_values(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Integer(i), Value::Float(f)) | (Value::Float(f), Value::Integer(i)) => {
            integer_equals_float(*i, *f)
        }
        _ => a == b || (is_nan(a) && is_nan(b)),
    }
}

/// Exact comparison, without rounding `i` to the nearest `f64`.
pub(crate) fn integer_equals_float(i: i64, f: f64) -> bool {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) && f as i64 == i
}
