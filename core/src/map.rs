//! Associative maps and nil-able map handles.
//!
//! [`AssocMap`] is an ordinary key-unique hash map. [`MapHandle`] adds the
//! distinction between a map that was declared but never made ([`MapHandle::Nil`])
//! and one that exists ([`MapHandle::Live`]). Both read as empty when they hold
//! nothing, but only a live map accepts writes: inserting into a nil handle is
//! fatal (or [`Error::NilMapWrite`] through [`MapHandle::try_insert`]).
//!
//! Iteration order is unspecified for both types.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::{Equivalent, HashMap};

use crate::error::Error;

/// A key-unique, unordered mapping from `K` to `V`.
#[derive(Clone)]
pub struct AssocMap<K, V> {
    entries: HashMap<K, V>,
}

/// Build an [`AssocMap`] from `key => value` pairs. Later keys overwrite
/// earlier ones.
///
/// ```
/// use primer_core::assoc;
///
/// let c = assoc! { "one" => 1, "two" => 2, "one" => 11 };
/// assert_eq!(c.len(), 2);
/// assert_eq!(c.lookup("one"), (11, true));
/// ```
#[macro_export]
macro_rules! assoc {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::AssocMap::from_iter([$(($key, $value)),*])
    };
}

impl<K, V> AssocMap<K, V> {
    /// An empty, writable map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Number of keys currently present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every present pair exactly once, in no particular order.
    pub fn iter(&self) -> hashbrown::hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}

impl<K: Eq + Hash, V> AssocMap<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite. Returns the value previously stored under `key`.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Remove `key` if present. Removing an absent key does nothing.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.entries.remove(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// The value under `key` and whether it was present.
    ///
    /// An absent key yields `(V::default(), false)`, which is how a caller
    /// tells it apart from a key that is present with a default value.
    pub fn lookup<Q>(&self, key: &Q) -> (V, bool)
    where
        Q: Hash + Equivalent<K> + ?Sized,
        V: Clone + Default,
    {
        match self.entries.get(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }
}

impl<K, V> Default for AssocMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for AssocMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for AssocMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssocMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// Later pairs overwrite earlier pairs with the same key.
impl<K: Eq + Hash, V> FromIterator<(K, V)> for AssocMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for AssocMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_iter(pairs)
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for AssocMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a AssocMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hashbrown::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V> IntoIterator for AssocMap<K, V> {
    type Item = (K, V);
    type IntoIter = hashbrown::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// `map[k1:v1 k2:v2]`, keys sorted so the output is stable.
impl<K: fmt::Display + Ord, V: fmt::Display> fmt::Display for AssocMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sorted(f, self.entries.iter())
    }
}

fn write_sorted<'a, K, V>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> fmt::Result
where
    K: fmt::Display + Ord + 'a,
    V: fmt::Display + 'a,
{
    let mut entries: Vec<_> = entries.collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    f.write_str("map[")?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{key}:{value}")?;
    }
    f.write_str("]")
}

// ============================================================================
// Nil-able handle
// ============================================================================

/// A map variable that may never have been made.
///
/// The default is [`MapHandle::Nil`]: every read behaves as on an empty map,
/// and every write is a fatal misuse. [`MapHandle::make`] yields a writable
/// empty map.
#[derive(Clone)]
pub enum MapHandle<K, V> {
    /// Declared but never made.
    Nil,
    Live(AssocMap<K, V>),
}

impl<K, V> MapHandle<K, V> {
    /// A live, empty map.
    pub fn make() -> Self {
        MapHandle::Live(AssocMap::new())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, MapHandle::Nil)
    }

    pub fn as_map(&self) -> Option<&AssocMap<K, V>> {
        match self {
            MapHandle::Nil => None,
            MapHandle::Live(map) => Some(map),
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut AssocMap<K, V>> {
        match self {
            MapHandle::Nil => None,
            MapHandle::Live(map) => Some(map),
        }
    }

    /// Zero for a nil handle.
    pub fn len(&self) -> usize {
        self.as_map().map_or(0, AssocMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present pairs; nothing for a nil handle.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.as_map().into_iter().flat_map(AssocMap::iter)
    }
}

impl<K: Eq + Hash, V> MapHandle<K, V> {
    /// Insert or overwrite.
    ///
    /// # Panics
    ///
    /// Panics if the handle is nil.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(previous) => previous,
            Err(err) => panic!("{err}"),
        }
    }

    /// Insert or overwrite, or [`Error::NilMapWrite`] if the handle is nil.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        match self {
            MapHandle::Nil => {
                tracing::debug!("Rejected insert into nil map");
                Err(Error::NilMapWrite)
            }
            MapHandle::Live(map) => Ok(map.insert(key, value)),
        }
    }

    /// Remove `key` if present. A nil handle has nothing to remove.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.as_map_mut().and_then(|map| map.delete(key))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.as_map().and_then(|map| map.get(key))
    }

    /// See [`AssocMap::lookup`]. Always `(V::default(), false)` on a nil handle.
    pub fn lookup<Q>(&self, key: &Q) -> (V, bool)
    where
        Q: Hash + Equivalent<K> + ?Sized,
        V: Clone + Default,
    {
        match self.as_map() {
            Some(map) => map.lookup(key),
            None => (V::default(), false),
        }
    }
}

impl<K, V> Default for MapHandle<K, V> {
    fn default() -> Self {
        MapHandle::Nil
    }
}

impl<K, V> From<AssocMap<K, V>> for MapHandle<K, V> {
    fn from(map: AssocMap<K, V>) -> Self {
        MapHandle::Live(map)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapHandle<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapHandle::Nil => f.write_str("Nil"),
            MapHandle::Live(map) => f.debug_tuple("Live").field(map).finish(),
        }
    }
}

/// A nil handle prints like an empty map.
impl<K: fmt::Display + Ord, V: fmt::Display> fmt::Display for MapHandle<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sorted(f, self.iter())
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;
