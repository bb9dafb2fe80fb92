//! Single-source combinators: `map`, `filter`, `drop`.
//!
//! Each combinator owns its source and pulls from it only when its own
//! consumer pulls. Nothing is buffered: a transform or predicate runs for
//! exactly the source elements that were needed to answer a pull.

use std::fmt;
use std::iter::FusedIterator;

/// Sequence returned by [`map`].
#[must_use = "sequences are lazy and do nothing unless pulled"]
#[derive(Clone)]
pub struct Map<I, F> {
    /// `None` once the source has reported exhaustion.
    source: Option<I>,
    transform: F,
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("source", &self.source).finish()
    }
}

impl<B, I, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        match self.source.as_mut()?.next() {
            Some(element) => Some((self.transform)(element)),
            None => {
                self.source = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<B, I, F> FusedIterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
}

/// Sequence returned by [`filter`] and [`drop`].
#[must_use = "sequences are lazy and do nothing unless pulled"]
#[derive(Clone)]
pub struct Filter<I, P> {
    source: Option<I>,
    acceptance: P,
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .finish()
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let element = match self.source.as_mut()?.next() {
                Some(element) => element,
                None => {
                    self.source = None;
                    return None;
                }
            };
            if (self.acceptance)(&element) {
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => (0, source.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Apply `transform` to every element of `source`.
///
/// `transform` runs once per element, at the moment that element is pulled
/// downstream. An element nobody pulls is never transformed.
///
/// ```rust
/// use kitbag_sequence::map;
///
/// let doubled: Vec<i32> = map(vec![1, 2, 3], |v| v * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<S, F, B>(source: S, transform: F) -> Map<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> B,
{
    Map {
        source: Some(source.into_iter()),
        transform,
    }
}

/// Keep the elements of `source` for which `acceptance` holds.
///
/// Relative order is preserved. `acceptance` sees every source element
/// pulled while answering a pull, and no others.
pub fn filter<S, P>(source: S, acceptance: P) -> Filter<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        source: Some(source.into_iter()),
        acceptance,
    }
}

/// Skip the elements of `source` for which `rejection` holds.
///
/// Exactly [`filter`] with the predicate negated.
///
/// Importing this name shadows `std::mem::drop` in the importing scope;
/// prefer calling it through the crate path.
pub fn drop<S, P>(source: S, mut rejection: P) -> Filter<S::IntoIter, impl FnMut(&S::Item) -> bool>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    filter(source, move |element: &S::Item| !rejection(element))
}
