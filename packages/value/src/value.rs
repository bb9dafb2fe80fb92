//! The record tree.

use std::collections::BTreeMap;
use std::fmt;

use crate::{Error, Path};

/// A plain structured record.
///
/// Maps are keyed by property name and ordered for deterministic iteration.
/// `Null` is the void value; a `Float` holding NaN is the not-a-number value.
/// Together they are the N/A values the checks in this crate look for.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The void value.
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Integers and floats, NaN included.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// The numeric value as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get a reference to a nested value by path.
    ///
    /// Returns `None` if the path doesn't exist or runs into a scalar.
    pub fn get(&self, path: &Path) -> Option<&Value> {
        path.iter().try_fold(self, |current, component| current.child(component))
    }

    /// Get a mutable reference to a nested value by path.
    pub fn get_mut(&mut self, path: &Path) -> Option<&mut Value> {
        let mut current = self;
        for component in path.iter() {
            current = current.child_mut(component)?;
        }
        Some(current)
    }

    pub(crate) fn child(&self, component: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(component),
            Value::Array(arr) => arr.get(component.parse::<usize>().ok()?),
            _ => None,
        }
    }

    pub(crate) fn child_mut(&mut self, component: &str) -> Option<&mut Value> {
        match self {
            Value::Map(map) => map.get_mut(component),
            Value::Array(arr) => arr.get_mut(component.parse::<usize>().ok()?),
            _ => None,
        }
    }

    /// Set a value at a path, creating intermediate maps as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the path runs through a scalar, names a
    /// non-numeric array index, or skips past the end of an array.
    pub fn set(&mut self, path: &Path, value: Value) -> Result<(), Error> {
        let Some((last, init)) = path.components.split_last() else {
            *self = value;
            return Ok(());
        };

        let mut current = self;
        for component in init {
            current = match current {
                Value::Map(map) => map.entry(component.clone()).or_insert_with(Value::map),
                Value::Array(arr) => {
                    let index = array_index(component)?;
                    arr.get_mut(index).ok_or_else(|| {
                        Error::invalid_path(format!("array index {} out of bounds", index))
                    })?
                }
                _ => {
                    return Err(Error::invalid_path(format!(
                        "cannot navigate through scalar at '{}'",
                        component
                    )))
                }
            };
        }
        current.put(last, value)
    }

    /// Like [`Value::set`], validating raw components first.
    pub fn set_components<I, S>(&mut self, components: I, value: Value) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = Path::try_from_components(components)?;
        self.set(&path, value)
    }

    /// Write a direct child. Arrays accept an existing index or the next one.
    pub(crate) fn put(&mut self, component: &str, value: Value) -> Result<(), Error> {
        match self {
            Value::Map(map) => {
                map.insert(component.to_string(), value);
                Ok(())
            }
            Value::Array(arr) => {
                let index = array_index(component)?;
                if index < arr.len() {
                    arr[index] = value;
                } else if index == arr.len() {
                    arr.push(value);
                } else {
                    return Err(Error::invalid_path(format!(
                        "array index {} out of bounds",
                        index
                    )));
                }
                Ok(())
            }
            _ => Err(Error::invalid_path(format!(
                "cannot set child '{}' on a scalar",
                component
            ))),
        }
    }

    /// Remove a value at a path, returning it if it existed.
    pub fn remove(&mut self, path: &Path) -> Result<Option<Value>, Error> {
        let Some((last, _)) = path.components.split_last() else {
            return Ok(Some(std::mem::take(self)));
        };
        let parent_path = path.slice(0, path.len() - 1);
        let Some(parent) = self.get_mut(&parent_path) else {
            return Ok(None);
        };

        match parent {
            Value::Map(map) => Ok(map.remove(last)),
            Value::Array(arr) => {
                let index = array_index(last)?;
                Ok((index < arr.len()).then(|| arr.remove(index)))
            }
            _ => Ok(None),
        }
    }
}

fn array_index(component: &str) -> Result<usize, Error> {
    component
        .parse()
        .map_err(|_| Error::invalid_path(format!("invalid array index: {}", component)))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => write!(f, "NaN"),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<(String, T)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
