//! Multi-source combinators: `zip` and `zip_all`.
//!
//! Both pull their sources left to right, once each per produced row, and
//! end at the first source that reports exhaustion. Sources to the right of
//! an exhausted one are not pulled for that row.

use std::iter::FusedIterator;

/// A fixed set of sources pulled together, one element each.
///
/// Implemented for tuples of up to eight iterators, and for `()`, which
/// never produces anything.
pub trait Sources {
    /// One element from every source, in argument order.
    type Item;

    /// Pull every source once. `None` as soon as any source is exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Combined bounds: the shortest source decides.
    fn size_hint(&self) -> (usize, Option<usize>);
}

/// Conversion of a tuple of [`IntoIterator`]s into [`Sources`].
pub trait IntoSources {
    type Sources: Sources;

    fn into_sources(self) -> Self::Sources;
}

impl Sources for () {
    type Item = ();

    fn pull(&mut self) -> Option<()> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl IntoSources for () {
    type Sources = ();

    fn into_sources(self) -> Self::Sources {}
}

/// Shortest-wins combination of two `size_hint`s.
fn shortest(a: (usize, Option<usize>), b: (usize, Option<usize>)) -> (usize, Option<usize>) {
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) => Some(x),
        (None, y) => y,
    };
    (a.0.min(b.0), upper)
}

macro_rules! impl_sources_for_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Iterator),+> Sources for ($($name,)+) {
            type Item = ($(<$name as Iterator>::Item,)+);

            #[inline]
            fn pull(&mut self) -> Option<Self::Item> {
                // Tuple fields evaluate left to right; `?` stops at the first gap.
                Some(($(self.$idx.next()?,)+))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let hint = (usize::MAX, None);
                $(let hint = shortest(hint, self.$idx.size_hint());)+
                hint
            }
        }

        impl<$($name: IntoIterator),+> IntoSources for ($($name,)+) {
            type Sources = ($(<$name as IntoIterator>::IntoIter,)+);

            fn into_sources(self) -> Self::Sources {
                ($(self.$idx.into_iter(),)+)
            }
        }
    };
}

impl_sources_for_tuple!(A.0);
impl_sources_for_tuple!(A.0, B.1);
impl_sources_for_tuple!(A.0, B.1, C.2);
impl_sources_for_tuple!(A.0, B.1, C.2, D.3);
impl_sources_for_tuple!(A.0, B.1, C.2, D.3, E.4);
impl_sources_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_sources_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_sources_for_tuple!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);

/// Sequence returned by [`zip`].
#[must_use = "sequences are lazy and do nothing unless pulled"]
#[derive(Clone, Debug)]
pub struct Zip<S> {
    sources: Option<S>,
}

impl<S: Sources> Iterator for Zip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let row = self.sources.as_mut()?.pull();
        if row.is_none() {
            self.sources = None;
        }
        row
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.sources {
            Some(sources) => sources.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<S: Sources> FusedIterator for Zip<S> {}

/// Combine a tuple of sequences into a sequence of tuples.
///
/// Row `i` holds the `i`-th element of every source in argument order. The
/// result is as long as the shortest source; `zip(())` is empty.
///
/// ```rust
/// use kitbag_sequence::zip;
///
/// let rows: Vec<(i32, char)> = zip((vec![1, 2, 3], "ab".chars())).collect();
/// assert_eq!(rows, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip<S: IntoSources>(sources: S) -> Zip<S::Sources> {
    Zip {
        sources: Some(sources.into_sources()),
    }
}

/// Sequence returned by [`zip_all`].
#[must_use = "sequences are lazy and do nothing unless pulled"]
#[derive(Clone, Debug)]
pub struct ZipAll<I> {
    /// `None` once any source ran dry, or from the start if there were none.
    sources: Option<Vec<I>>,
}

impl<I: Iterator> Iterator for ZipAll<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let sources = self.sources.as_mut()?;
        let mut row = Vec::with_capacity(sources.len());
        for source in sources.iter_mut() {
            match source.next() {
                Some(element) => row.push(element),
                None => {
                    self.sources = None;
                    return None;
                }
            }
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.sources {
            Some(sources) => sources
                .iter()
                .map(Iterator::size_hint)
                .fold((usize::MAX, None), shortest),
            None => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for ZipAll<I> {}

/// Combine any number of same-typed sequences into rows.
///
/// Like [`zip`], but the source count is only known at runtime. No sources
/// means no rows.
pub fn zip_all<S>(sources: impl IntoIterator<Item = S>) -> ZipAll<S::IntoIter>
where
    S: IntoIterator,
{
    let sources: Vec<S::IntoIter> = sources.into_iter().map(IntoIterator::into_iter).collect();
    ZipAll {
        sources: if sources.is_empty() {
            None
        } else {
            Some(sources)
        },
    }
}
