//! Map lookups answering with `Maybe`.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::control::Maybe;

/// Looks up a key, answering with a `Maybe` instead of panicking or
/// returning an `Option`.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use maybars::control::Maybe;
/// use maybars::extensions::MaybeLookup;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("one", 1);
///
/// assert_eq!(scores.get_maybe("one"), Maybe::from_value(&1));
/// assert_eq!(scores.get_maybe("two"), Maybe::absent());
/// ```
pub trait MaybeLookup<Q: ?Sized, V> {
    /// Returns the value stored under `key`, or absent if there is none.
    fn get_maybe(&self, key: &Q) -> Maybe<&V>;
}

impl<Q, K, V, S> MaybeLookup<Q, V> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn get_maybe(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_option(self.get(key))
    }
}

impl<Q, K, V> MaybeLookup<Q, V> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    #[inline]
    fn get_maybe(&self, key: &Q) -> Maybe<&V> {
        Maybe::from_option(self.get(key))
    }
}
