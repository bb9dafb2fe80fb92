//! Numeric range producer.
//!
//! `Range` is the one sequence in this crate that produces values instead
//! of adapting a source. Its bounds follow the sign of the increment: an
//! ascending range stops before reaching `stop` from below, a descending
//! one stops before reaching it from above.

use std::fmt;
use std::iter::FusedIterator;

use crate::SequenceError;

/// A numeric type a [`Range`] can step through.
///
/// Implemented for every primitive integer and for `f32`/`f64`.
pub trait Step: Copy + PartialOrd + fmt::Debug {
    /// The additive identity. An increment equal to this is rejected.
    const ZERO: Self;
    /// The default increment.
    const ONE: Self;

    /// Advance `self` by `by`.
    ///
    /// Returns `None` when the next value can't be represented or wouldn't
    /// differ from `self`; the range ends there.
    fn forward(self, by: Self) -> Option<Self>;
}

macro_rules! impl_step_for_int {
    ($($t:ty),* $(,)?) => {$(
        impl Step for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn forward(self, by: Self) -> Option<Self> {
                self.checked_add(by)
            }
        }
    )*};
}

macro_rules! impl_step_for_float {
    ($($t:ty),* $(,)?) => {$(
        impl Step for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn forward(self, by: Self) -> Option<Self> {
                let next = self + by;
                // Past 2^53 (or at infinity) adding a small increment is a no-op.
                if next == self {
                    None
                } else {
                    Some(next)
                }
            }
        }
    )*};
}

impl_step_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step_for_float!(f32, f64);

/// A lazy arithmetic progression.
///
/// Yields `start, start + increment, start + 2 * increment, ...` while the
/// value is below `stop` (positive increment) or above it (negative
/// increment). `stop` itself is never yielded.
///
/// # Example
///
/// ```rust
/// use kitbag_sequence::{range, range_by, range_to};
///
/// assert_eq!(range_to(5).collect::<Vec<i32>>(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(range(1, 5).collect::<Vec<i32>>(), vec![1, 2, 3, 4]);
/// assert_eq!(
///     range_by(5, 0, -1).unwrap().collect::<Vec<i32>>(),
///     vec![5, 4, 3, 2, 1]
/// );
/// assert!(range_by(0, 5, 0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Range<T> {
    /// The value the next pull yields, if still in bounds. `None` once done.
    next: Option<T>,
    stop: T,
    increment: T,
    ascending: bool,
}

impl<T: Step> Range<T> {
    /// The range of no arguments: yields nothing.
    pub fn empty() -> Self {
        Range {
            next: None,
            stop: T::ZERO,
            increment: T::ONE,
            ascending: true,
        }
    }

    fn unchecked(start: T, stop: T, increment: T) -> Self {
        Range {
            next: Some(start),
            stop,
            increment,
            ascending: increment > T::ZERO,
        }
    }

    /// The exclusive bound.
    pub fn stop(&self) -> T {
        self.stop
    }

    /// The step between consecutive values.
    pub fn increment(&self) -> T {
        self.increment
    }

    /// Whether the range counts upwards.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    fn in_bounds(&self, value: T) -> bool {
        if self.ascending {
            value < self.stop
        } else {
            value > self.stop
        }
    }
}

impl<T: Step> Default for Range<T> {
    fn default() -> Self {
        Range::empty()
    }
}

impl<T: Step> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        if !self.in_bounds(current) {
            self.next = None;
            return None;
        }
        self.next = current.forward(self.increment);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) if self.in_bounds(current) => (1, None),
            _ => (0, Some(0)),
        }
    }
}

impl<T: Step> FusedIterator for Range<T> {}

/// Count from zero up to (not including) `stop` in steps of one.
pub fn range_to<T: Step>(stop: T) -> Range<T> {
    Range::unchecked(T::ZERO, stop, T::ONE)
}

/// Count from `start` up to (not including) `stop` in steps of one.
///
/// Yields nothing when `start >= stop`.
pub fn range<T: Step>(start: T, stop: T) -> Range<T> {
    Range::unchecked(start, stop, T::ONE)
}

/// Count from `start` towards `stop` in steps of `increment`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `increment` is zero. The
/// check happens here rather than on the first pull, so a `Range` that
/// exists is always finite-stepping.
pub fn range_by<T: Step>(start: T, stop: T, increment: T) -> Result<Range<T>, SequenceError> {
    if increment == T::ZERO {
        log::debug!(
            "rejecting range {:?}..{:?}: increment is zero",
            start,
            stop
        );
        return Err(SequenceError::invalid_argument(
            "increment",
            format!("range {:?}..{:?} would never advance with a zero increment", start, stop),
        ));
    }
    Ok(Range::unchecked(start, stop, increment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_to_zero_is_empty() {
        assert_eq!(range_to(0).collect::<Vec<i32>>(), Vec::<i32>::new());
    }

    #[test]
    fn range_to_counts_from_zero() {
        assert_eq!(range_to(5).collect::<Vec<i32>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn range_counts_from_start() {
        assert_eq!(range(1, 5).collect::<Vec<i32>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn range_with_start_past_stop_is_empty() {
        assert_eq!(range(5, 1).count(), 0);
    }

    #[test]
    fn decreasing_range() {
        let values: Vec<i32> = range_by(5, 0, -1).unwrap().collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn negative_increment_away_from_stop_is_empty() {
        let values: Vec<i32> = range_by(0, 5, -1).unwrap().collect();
        assert!(values.is_empty());
    }

    #[test]
    fn increment_larger_than_one_skips() {
        let values: Vec<i32> = range_by(0, 10, 3).unwrap().collect();
        assert_eq!(values, vec![0, 3, 6, 9]);
    }

    #[test]
    fn zero_increment_is_rejected() {
        let err = range_by(-1, 5, 0).unwrap_err();
        assert!(matches!(
            err,
            SequenceError::InvalidArgument {
                name: "increment",
                ..
            }
        ));
    }

    #[test]
    fn zero_increment_rejected_even_for_empty_bounds() {
        assert!(range_by(5, 5, 0).is_err());
    }

    #[test]
    fn empty_range_yields_nothing() {
        let mut r: Range<i64> = Range::empty();
        assert_eq!(r.next(), None);
        assert_eq!(r.size_hint(), (0, Some(0)));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Range::<u8>::default().count(), 0);
    }

    #[test]
    fn overflow_ends_the_range() {
        let values: Vec<u8> = range_by(250u8, 255, 4).unwrap().collect();
        assert_eq!(values, vec![250, 254]);

        let values: Vec<i8> = range(125i8, i8::MAX).collect();
        assert_eq!(values, vec![125, 126]);
    }

    #[test]
    fn float_range() {
        let values: Vec<f64> = range_by(0.0, 1.0, 0.25).unwrap().collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn float_range_stalls_end_the_range() {
        let start = 2f64.powi(60);
        let values: Vec<f64> = range(start, f64::INFINITY).collect();
        assert_eq!(values, vec![start]);
    }

    #[test]
    fn nan_bounds_are_empty() {
        assert_eq!(range(0.0, f64::NAN).count(), 0);
        assert_eq!(range_by(0.0, 10.0, f64::NAN).unwrap().count(), 0);
    }

    #[test]
    fn stays_exhausted() {
        let mut r = range(0, 1);
        assert_eq!(r.next(), Some(0));
        assert_eq!(r.next(), None);
        assert_eq!(r.next(), None);
    }

    #[test]
    fn unbounded_range_is_lazy() {
        let first: Vec<i64> = range(0, i64::MAX).take(3).collect();
        assert_eq!(first, vec![0, 1, 2]);
    }

    #[test]
    fn accessors() {
        let r = range_by(10, 0, -2).unwrap();
        assert_eq!(r.stop(), 0);
        assert_eq!(r.increment(), -2);
        assert!(!r.is_ascending());
    }
}
