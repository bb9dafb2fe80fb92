//! Entry-wise transformations that build a new container.
//!
//! The input container is only borrowed. Each operation takes a fresh
//! `(&K, &V)` view of it, drives that view through the sequence
//! combinators, and drains the result into the output container. A
//! callback that fails (or panics) aborts the build before any container
//! is returned.

use kitbag_sequence as sequence;

/// Build a new container from `pair_mapping(key, value)` for every entry.
///
/// Entries are visited in the container's iteration order. If two entries
/// map to the same key, the later one wins.
pub fn map<'a, C, K, V, R, K2, V2, F>(container: &'a C, mut pair_mapping: F) -> R
where
    &'a C: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
    F: FnMut(&'a K, &'a V) -> (K2, V2),
    R: FromIterator<(K2, V2)>,
{
    let entries = container.into_iter();
    log::trace!("map: building from {:?} entries", entries.size_hint());
    sequence::map(entries, |(key, value)| pair_mapping(key, value)).collect()
}

/// Like [`map`], but `pair_mapping` may fail.
///
/// The first `Err` stops the walk; remaining entries are not visited and
/// no container is built.
pub fn try_map<'a, C, K, V, R, K2, V2, E, F>(container: &'a C, mut pair_mapping: F) -> Result<R, E>
where
    &'a C: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
    F: FnMut(&'a K, &'a V) -> Result<(K2, V2), E>,
    R: FromIterator<(K2, V2)>,
{
    let result: Result<R, E> =
        sequence::map(container, |(key, value)| pair_mapping(key, value)).collect();
    if result.is_err() {
        log::debug!("try_map: mapping failed, no container built");
    }
    result
}

/// Copy the entries for which `pair_acceptance(key, value)` holds into a
/// new container of the same type.
pub fn filter<'a, C, K, V, P>(container: &'a C, mut pair_acceptance: P) -> C
where
    &'a C: IntoIterator<Item = (&'a K, &'a V)>,
    C: FromIterator<(K, V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&K, &V) -> bool,
{
    let entries = container.into_iter();
    log::trace!("filter: scanning {:?} entries", entries.size_hint());
    let accepted = sequence::filter(entries, |&(key, value)| pair_acceptance(key, value));
    sequence::map(accepted, |(key, value)| (key.clone(), value.clone())).collect()
}

/// Like [`filter`], but `pair_acceptance` may fail.
pub fn try_filter<'a, C, K, V, E, P>(container: &'a C, mut pair_acceptance: P) -> Result<C, E>
where
    &'a C: IntoIterator<Item = (&'a K, &'a V)>,
    C: FromIterator<(K, V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&K, &V) -> Result<bool, E>,
{
    let result: Result<C, E> = sequence::map(container, |(key, value)| {
        pair_acceptance(key, value).map(|keep| keep.then(|| (key.clone(), value.clone())))
    })
    .filter_map(Result::transpose)
    .collect();
    if result.is_err() {
        log::debug!("try_filter: predicate failed, no container built");
    }
    result
}

/// Copy the entries for which `pair_rejection(key, value)` does not hold.
///
/// Exactly [`filter`] with the predicate negated.
pub fn drop<'a, C, K, V, P>(container: &'a C, mut pair_rejection: P) -> C
where
    &'a C: IntoIterator<Item = (&'a K, &'a V)>,
    C: FromIterator<(K, V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    P: FnMut(&K, &V) -> bool,
{
    filter(container, move |key: &K, value: &V| !pair_rejection(key, value))
}

/// Build the inverse container, mapping every value to its key.
///
/// When several keys share a value, the key visited last wins.
pub fn reverse_lookup<'a, C, K, V, R>(container: &'a C) -> R
where
    &'a C: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
    R: FromIterator<(V, K)>,
{
    map(container, |key: &K, value: &V| (value.clone(), key.clone()))
}
