//! Property paths.

use std::fmt;

/// Errors related to path parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A path component can't name a property.
    #[error("invalid path component '{component}' at position {position}: {message}")]
    InvalidComponent {
        component: String,
        position: usize,
        message: String,
    },
}

/// A path to a property inside a [`Value`](crate::Value) tree.
///
/// Components are property names for maps and decimal indices for arrays.
/// Any non-empty string without a `/` is a valid component.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<String>,
}

impl Path {
    /// Parse a `/`-separated path string.
    ///
    /// Empty components are ignored, so `//` and leading or trailing `/`
    /// normalize away and `""` is the root path.
    ///
    /// ```rust
    /// use kitbag_value::Path;
    ///
    /// let path = Path::parse("users/0/name");
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(Path::parse("a/b/"), Path::parse("/a//b"));
    /// ```
    pub fn parse(s: &str) -> Self {
        Path {
            components: s
                .split('/')
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string())
                .collect(),
        }
    }

    /// Create a path from components, normalizing them the way
    /// [`Path::parse`] does: embedded `/` separates and empties drop out.
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Path {
            components: components
                .into_iter()
                .flat_map(|c| Path::parse(c.as_ref()).components)
                .collect(),
        }
    }

    /// Create a path from components, validating each.
    pub fn try_from_components<I, S>(components: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        for (i, component) in components.iter().enumerate() {
            Self::validate_component(component, i)?;
        }
        Ok(Path { components })
    }

    fn validate_component(component: &str, position: usize) -> Result<(), PathError> {
        if component.is_empty() {
            return Err(PathError::InvalidComponent {
                component: component.to_string(),
                position,
                message: "empty component".to_string(),
            });
        }
        if component.contains('/') {
            return Err(PathError::InvalidComponent {
                component: component.to_string(),
                position,
                message: "contains the separator '/'".to_string(),
            });
        }
        Ok(())
    }

    /// Check if this path is empty (root path).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// The last component, if any.
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// The path without its last component. `None` for the root path.
    pub fn parent(&self) -> Option<Path> {
        let (_, init) = self.components.split_last()?;
        Some(Path {
            components: init.to_vec(),
        })
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Path { components }
    }

    /// This path extended by one component.
    #[must_use]
    pub fn child(&self, component: impl Into<String>) -> Path {
        let mut components = self.components.clone();
        components.push(component.into());
        Path { components }
    }

    /// Check if this path has the given prefix.
    pub fn has_prefix(&self, prefix: &Path) -> bool {
        prefix.components.len() <= self.components.len()
            && prefix.components == self.components[..prefix.components.len()]
    }

    /// Strip a prefix from this path.
    ///
    /// Returns `None` if the prefix doesn't match.
    #[must_use]
    pub fn strip_prefix(&self, prefix: &Path) -> Option<Path> {
        if self.has_prefix(prefix) {
            Some(Path {
                components: self.components[prefix.components.len()..].to_vec(),
            })
        } else {
            None
        }
    }

    /// Get a slice of components as a new path.
    pub fn slice(&self, start: usize, end: usize) -> Path {
        Path {
            components: self.components[start..end].to_vec(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

/// Macro for creating paths from literals.
///
/// # Example
///
/// ```rust
/// use kitbag_value::path;
///
/// let p = path!("users/123/name");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_paths() {
        assert_eq!(Path::parse("").len(), 0);
        assert_eq!(Path::parse("foo").len(), 1);
        assert_eq!(Path::parse("foo/bar").len(), 2);
        assert_eq!(Path::parse("foo/bar/baz").len(), 3);
    }

    #[test]
    fn normalize_slashes() {
        assert_eq!(Path::parse("foo/bar/"), Path::parse("foo/bar"));
        assert_eq!(Path::parse("foo//bar"), Path::parse("foo/bar"));
        assert_eq!(Path::parse("/foo/bar"), Path::parse("foo/bar"));
    }

    #[test]
    fn arbitrary_property_names_allowed() {
        let p = Path::parse("{Y}/bar-baz/.hidden/名前");
        assert_eq!(p.len(), 4);
        assert_eq!(&p[0], "{Y}");
    }

    #[test]
    fn try_from_components_valid() {
        let p = Path::try_from_components(["foo", "bar baz"]).unwrap();
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn try_from_components_rejects_empty() {
        let err = Path::try_from_components(vec![String::new()]).unwrap_err();
        assert!(err.to_string().contains("empty component"));
    }

    #[test]
    fn try_from_components_rejects_separator() {
        let err = Path::try_from_components(["ok", "a/b"]).unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidComponent {
                component: "a/b".to_string(),
                position: 1,
                message: "contains the separator '/'".to_string(),
            }
        );
    }

    #[test]
    fn from_components_normalizes() {
        assert_eq!(Path::from_components(["a", "b/c", ""]), path!("a/b/c"));
        assert!(Path::from_components(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn has_prefix_works() {
        let p = path!("foo/bar/baz");
        assert!(p.has_prefix(&path!("")));
        assert!(p.has_prefix(&path!("foo")));
        assert!(p.has_prefix(&path!("foo/bar")));
        assert!(p.has_prefix(&path!("foo/bar/baz")));
        assert!(!p.has_prefix(&path!("bar")));
        assert!(!p.has_prefix(&path!("foo/bar/baz/qux")));
    }

    #[test]
    fn strip_prefix_works() {
        let p = path!("foo/bar/baz");
        assert_eq!(p.strip_prefix(&path!("foo")), Some(path!("bar/baz")));
        assert_eq!(p.strip_prefix(&path!("foo/bar")), Some(path!("baz")));
        assert_eq!(p.strip_prefix(&path!("other")), None);
    }

    #[test]
    fn parent_and_last() {
        let p = path!("a/b/c");
        assert_eq!(p.parent(), Some(path!("a/b")));
        assert_eq!(p.last(), Some("c"));
        assert_eq!(path!("a").parent(), Some(path!("")));
        assert_eq!(path!("").parent(), None);
        assert_eq!(path!("").last(), None);
    }

    #[test]
    fn child_extends() {
        assert_eq!(path!("a").child("0"), path!("a/0"));
        assert_eq!(path!("").child("x"), path!("x"));
    }

    #[test]
    fn slice_method() {
        let p = path!("a/b/c/d");
        let sliced = p.slice(1, 3);
        assert_eq!(sliced.len(), 2);
        assert_eq!(sliced.to_string(), "b/c");
    }

    #[test]
    fn join_with_empty() {
        let p1 = path!("foo");
        assert_eq!(p1.join(&path!("")), p1);
        assert_eq!(path!("").join(&path!("bar")), path!("bar"));
        assert_eq!(path!("foo/bar").join(&path!("baz")).to_string(), "foo/bar/baz");
    }

    #[test]
    fn display_empty() {
        assert_eq!(format!("{}", path!("")), "");
    }

    #[test]
    fn from_str_parses() {
        let p: Path = "x/y".into();
        assert_eq!(p, path!("x/y"));
    }

    #[test]
    fn path_error_display_invalid_component() {
        let err = PathError::InvalidComponent {
            component: "bad".to_string(),
            position: 2,
            message: "test message".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("bad"));
        assert!(display.contains("position 2"));
        assert!(display.contains("test message"));
    }
}
