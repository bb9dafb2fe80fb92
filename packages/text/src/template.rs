//! Regular-expression escaping and template filling.

use std::collections::HashMap;

use regex::{Captures, Regex};

use crate::TextError;

/// Escape every regular-expression metacharacter in `value`.
pub fn escape(value: &str) -> String {
    regex::escape(value)
}

/// Replace every occurrence of each key in `template` with its value.
///
/// Replacement happens in a single left-to-right pass, so inserted values
/// are never rescanned. Where keys overlap at the same position the longest
/// key wins. Empty keys are ignored, and a later duplicate key overrides an
/// earlier one.
///
/// ```rust
/// use kitbag_text::fill_template;
///
/// let text = fill_template("{M}/{MM}", [("{M}", "6"), ("{MM}", "06")]).unwrap();
/// assert_eq!(text, "6/06");
/// ```
pub fn fill_template<I, K, V>(template: &str, replacements: I) -> Result<String, TextError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let table: HashMap<String, String> = replacements
        .into_iter()
        .filter(|(key, _)| !key.as_ref().is_empty())
        .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
        .collect();
    if table.is_empty() {
        return Ok(template.to_string());
    }

    let mut keys: Vec<&str> = table.keys().map(String::as_str).collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternation = keys.iter().map(|key| escape(key)).collect::<Vec<_>>().join("|");
    let pattern = Regex::new(&alternation)?;

    log::trace!("fill_template: {} keys", keys.len());
    let filled = pattern.replace_all(template, |caps: &Captures| {
        table.get(&caps[0]).cloned().unwrap_or_default()
    });
    Ok(filled.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_metacharacters() {
        assert_eq!(escape("a.b*c"), r"a\.b\*c");
        assert_eq!(escape("(x|y)"), r"\(x\|y\)");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn escaped_text_matches_literally() {
        let raw = "1+1=2? [yes] {no} ^$";
        let re = Regex::new(&format!("^{}$", escape(raw))).unwrap();
        assert!(re.is_match(raw));
        assert!(!re.is_match("11=2? [yes] {no} ^$"));
    }

    #[test]
    fn replaces_every_occurrence() {
        let text = fill_template("$name and $name", [("$name", "Kit")]).unwrap();
        assert_eq!(text, "Kit and Kit");
    }

    #[test]
    fn longest_key_wins() {
        let pairs = vec![("ab", "short"), ("abc", "long")];
        assert_eq!(fill_template("abcab", pairs).unwrap(), "longshort");
    }

    #[test]
    fn single_pass() {
        let text = fill_template("a", [("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(text, "b");
    }

    #[test]
    fn owned_pairs_and_duplicates() {
        let pairs = vec![
            ("{x}".to_string(), "1".to_string()),
            ("{x}".to_string(), "2".to_string()),
        ];
        assert_eq!(fill_template("{x}", pairs).unwrap(), "2");
    }

    #[test]
    fn no_keys_returns_template() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(fill_template("{x}", empty).unwrap(), "{x}");
        assert_eq!(fill_template("{x}", [("", "boom")]).unwrap(), "{x}");
    }

    #[test]
    fn keys_with_metacharacters() {
        let text = fill_template("cost: $.price", [("$.price", "9.99")]).unwrap();
        assert_eq!(text, "cost: 9.99");
    }
}
