//! String helpers.

/// Byte offset of the `chars`-th character, or the end of `value`.
fn byte_offset(value: &str, chars: usize) -> usize {
    value
        .char_indices()
        .nth(chars)
        .map_or(value.len(), |(offset, _)| offset)
}

fn padding(value: &str, length: usize, pad: char) -> Option<String> {
    let count = length.checked_sub(value.chars().count())?;
    (count > 0).then(|| std::iter::repeat(pad).take(count).collect())
}

/// Prefix `value` with `pad` until it is `length` characters long.
pub fn pad_left(value: &str, length: usize, pad: char) -> String {
    match padding(value, length, pad) {
        Some(mut padded) => {
            padded.push_str(value);
            padded
        }
        None => value.to_string(),
    }
}

/// Suffix `value` with `pad` until it is `length` characters long.
pub fn pad_right(value: &str, length: usize, pad: char) -> String {
    match padding(value, length, pad) {
        Some(padded) => format!("{}{}", value, padded),
        None => value.to_string(),
    }
}

/// Split `value` after `length` characters, dropping `gap` characters
/// after the split point.
///
/// A negative `length` counts from the end. Positions past either end are
/// clipped.
///
/// ```rust
/// use kitbag_text::split_at;
///
/// assert_eq!(split_at("2024-06", 4, 1), ("2024", "06"));
/// assert_eq!(split_at("report.txt", -4, 1), ("report", "txt"));
/// ```
pub fn split_at(value: &str, length: isize, gap: usize) -> (&str, &str) {
    let chars = value.chars().count();
    let point = if length >= 0 {
        length.unsigned_abs().min(chars)
    } else {
        chars.saturating_sub(length.unsigned_abs())
    };
    let head = byte_offset(value, point);
    let tail = byte_offset(value, point.saturating_add(gap));
    (&value[..head], &value[tail..])
}

/// Split at the first `separator`.
///
/// Without a separator the whole value is the second half and the first
/// is `empty_text`.
pub fn split_first<'a>(value: &'a str, separator: &str, empty_text: &'a str) -> (&'a str, &'a str) {
    value.split_once(separator).unwrap_or((empty_text, value))
}

/// Split at the last `separator`.
///
/// Without a separator the whole value is the first half and the second
/// is `empty_text`.
pub fn split_last<'a>(value: &'a str, separator: &str, empty_text: &'a str) -> (&'a str, &'a str) {
    value.rsplit_once(separator).unwrap_or((value, empty_text))
}
