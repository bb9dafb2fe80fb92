use crate::clip;

fn resolve(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        Some(index.unsigned_abs())
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}

/// The element at `index`; negative indices count from the end.
pub fn at<T>(items: &[T], index: isize) -> Option<&T> {
    items.get(resolve(index, items.len())?)
}

/// Split `items` after `length` elements.
///
/// A negative `length` measures from the end. The split point is clipped
/// to the slice, so neither half is ever out of range.
pub fn split<T>(items: &[T], length: isize) -> (&[T], &[T]) {
    let len = items.len();
    let point = match resolve(length, len) {
        Some(point) => clip(point, 0, len),
        None => 0,
    };
    items.split_at(point)
}
