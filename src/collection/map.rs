//! Insertion-ordered immutable map with normalized string keys.
//!
//! This module provides [`Map`], an associative container that remembers the
//! order in which keys were first inserted. Keys are normalized to `String`
//! at the boundary through the [`MapKey`] capability, so numeric and other
//! scalar keys coerce to their canonical string form (`map.get(42)` finds
//! the entry stored under `"42"`).
//!
//! The backing store is a reference-counted entry vector; every mutator
//! clones it into a new map value, except the documented identity-preserving
//! no-ops (`remove` of an absent key, `take` beyond the length, `merge` with
//! an empty side) which hand back shared storage.
//!
//! # Examples
//!
//! ```rust
//! use immutars::collection::Map;
//!
//! let map = Map::empty().put("immutability", "is awesome");
//! assert_eq!(map.get("immutability"), Some(&"is awesome"));
//! assert_eq!(map.get("wrong-key"), None);
//!
//! // Insertion order drives head and tail, not key order
//! let map = Map::from_pairs([("e", 1), ("a", 2)]);
//! assert_eq!(map.head(), Ok(("e".to_string(), 1)));
//! assert_eq!(map.tail(), Ok(("a".to_string(), 2)));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::iter::FromIterator;

use super::{ReferenceCounter, Set};
use crate::error::CollectionError;
use crate::traverse::{Collector, Traversable};

/// The "stable string representation" capability required of map keys.
///
/// Any key supplied to a [`Map`] is coerced to its canonical string form at
/// the interface boundary. String-like keys borrow; scalar keys allocate
/// their textual form.
///
/// # Examples
///
/// ```rust
/// use immutars::collection::Map;
///
/// let map = Map::empty().put(42, "pear");
/// assert_eq!(map.get("42"), Some(&"pear"));
/// assert_eq!(map.get(42), Some(&"pear"));
/// ```
pub trait MapKey {
    /// Returns the canonical string form of this key.
    fn to_key(&self) -> Cow<'_, str>;
}

impl MapKey for String {
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl MapKey for &String {
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl MapKey for &str {
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl MapKey for Cow<'_, str> {
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl MapKey for char {
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl MapKey for bool {
    fn to_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

macro_rules! integer_map_key {
    ($($integer:ty),* $(,)?) => {$(
        impl MapKey for $integer {
            fn to_key(&self) -> Cow<'_, str> {
                Cow::Owned(self.to_string())
            }
        }
    )*};
}

integer_map_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// An insertion-ordered immutable map from normalized string keys to values.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `empty`         | O(1)       |
/// | `get`           | O(n)       |
/// | `put`           | O(n)       |
/// | `remove`        | O(n)       |
/// | `head` / `tail` | O(1)       |
/// | `merge`         | O(n · m)   |
/// | `length`        | O(1)       |
///
/// The linear entry vector is the clone-and-modify baseline for a container
/// whose contract is insertion order, not key lookup throughput.
///
/// # Examples
///
/// ```rust
/// use immutars::collection::Map;
///
/// let map = Map::from_pairs([("a", "b"), ("c", "d")]);
/// assert_eq!(map.length(), 2);
/// assert!(map.contains_key("a"));
/// ```
pub struct Map<V> {
    /// Entries in insertion order; keys are unique.
    entries: ReferenceCounter<Vec<(String, V)>>,
}

impl<V> Map<V> {
    /// Creates the empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map: Map<i32> = Map::empty();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Creates a map from key/value pairs; keys are coerced to strings.
    ///
    /// A later duplicate key overwrites the earlier value while keeping the
    /// insertion position of the first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(map.length(), 2);
    /// assert_eq!(map.get("a"), Some(&3));
    /// assert_eq!(map.head(), Ok(("a".to_string(), 3)));
    /// ```
    #[must_use]
    pub fn from_pairs<Key, Pairs>(pairs: Pairs) -> Self
    where
        Key: MapKey,
        Pairs: IntoIterator<Item = (Key, V)>,
    {
        let mut entries: Vec<(String, V)> = Vec::new();
        for (key, value) in pairs {
            let key = key.to_key();
            match entries.iter_mut().find(|entry| entry.0 == key.as_ref()) {
                Some(entry) => entry.1 = value,
                None => entries.push((key.into_owned(), value)),
            }
        }

        Self::from_entries(entries)
    }

    /// Wraps an already-normalized entry vector.
    fn from_entries(entries: Vec<(String, V)>) -> Self {
        Self {
            entries: ReferenceCounter::new(entries),
        }
    }

    /// Looks up the value stored under `key`.
    ///
    /// Returns `Some(&value)` when present, `None` otherwise. Calling a
    /// lookup without a key does not compile, so the missing-argument error
    /// of [`CollectionError`] has no runtime trigger on this path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::empty().put("k", "v");
    /// assert_eq!(map.get("k"), Some(&"v"));
    /// assert_eq!(map.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get<Key: MapKey>(&self, key: Key) -> Option<&V> {
        let key = key.to_key();
        self.entries
            .iter()
            .find(|entry| entry.0 == key.as_ref())
            .map(|entry| &entry.1)
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key<Key: MapKey>(&self, key: Key) -> bool {
        let key = key.to_key();
        self.entries.iter().any(|entry| entry.0 == key.as_ref())
    }

    /// Returns `true` if both maps share the same backing storage.
    ///
    /// This is the observable identity of a map value; the documented no-op
    /// paths (`remove` of an absent key, `take` beyond the length, `merge`
    /// with an empty side) preserve it.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.entries, &other.entries)
    }

    /// Returns an iterator over references to the entries, in insertion
    /// order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> MapIterator<'_, V> {
        self.entries.iter()
    }
}

impl<V: Clone> Map<V> {
    /// Returns a new map with `key` bound to `value`.
    ///
    /// Overwrites an existing binding in place (keeping its insertion
    /// position); otherwise the entry is appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::empty();
    /// let updated = map.put("k", "v");
    /// assert!(map.is_empty());
    /// assert_eq!(updated.get("k"), Some(&"v"));
    /// ```
    #[must_use]
    pub fn put<Key: MapKey>(&self, key: Key, value: V) -> Self {
        let key = key.to_key();
        let mut entries = self.entries.as_ref().clone();
        match entries.iter_mut().find(|entry| entry.0 == key.as_ref()) {
            Some(entry) => entry.1 = value,
            None => entries.push((key.into_owned(), value)),
        }

        Self::from_entries(entries)
    }

    /// Returns a new map without `key`.
    ///
    /// When `key` is absent the receiver itself is returned (same storage,
    /// observable via [`ptr_eq`](Self::ptr_eq)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("some", "value")]);
    /// assert_eq!(map.remove("some").get("some"), None);
    /// assert!(map.remove("not-existing-key").ptr_eq(&map));
    /// ```
    #[must_use]
    pub fn remove<Key: MapKey>(&self, key: Key) -> Self {
        let key = key.to_key();
        let Some(position) = self
            .entries
            .iter()
            .position(|entry| entry.0 == key.as_ref())
        else {
            return self.clone();
        };

        let mut entries = self.entries.as_ref().clone();
        entries.remove(position);

        Self::from_entries(entries)
    }

    /// Returns the first-inserted entry as a `(key, value)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] ("head of empty map") on
    /// an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", "b"), ("c", "d"), ("e", "f")]);
    /// assert_eq!(map.head(), Ok(("a".to_string(), "b")));
    /// ```
    pub fn head(&self) -> Result<(String, V), CollectionError> {
        self.entries
            .first()
            .cloned()
            .ok_or(CollectionError::empty_container("head", "map"))
    }

    /// Returns the last-inserted entry as a `(key, value)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] ("tail of empty map") on
    /// an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", "b"), ("e", "f")]);
    /// assert_eq!(map.tail(), Ok(("e".to_string(), "f")));
    /// ```
    pub fn tail(&self) -> Result<(String, V), CollectionError> {
        self.entries
            .last()
            .cloned()
            .ok_or(CollectionError::empty_container("tail", "map"))
    }

    /// Transforms every entry; mapped keys that collide follow
    /// last-write-wins while keeping the first occurrence's position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", "b"), ("c", "d")]);
    /// let upper = map.map(|(key, value)| (key.to_uppercase(), value.to_uppercase()));
    /// assert_eq!(upper.get("A"), Some(&"B".to_string()));
    /// ```
    #[must_use]
    pub fn map<Mapped, Key, Mapper>(&self, mapper: Mapper) -> Map<Mapped>
    where
        Key: MapKey,
        Mapper: FnMut((String, V)) -> (Key, Mapped),
    {
        Map::from_pairs(self.entries.iter().cloned().map(mapper))
    }

    /// Transforms only the keys, preserving values and order; collisions
    /// follow last-write-wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", 1), ("c", 2)]);
    /// let upper = map.map_keys(str::to_uppercase);
    /// assert_eq!(upper.get("A"), Some(&1));
    /// assert_eq!(upper.get("a"), None);
    /// ```
    #[must_use]
    pub fn map_keys<Key, Mapper>(&self, mut mapper: Mapper) -> Self
    where
        Key: MapKey,
        Mapper: FnMut(&str) -> Key,
    {
        Self::from_pairs(
            self.entries
                .iter()
                .map(|entry| (mapper(&entry.0), entry.1.clone())),
        )
    }

    /// Transforms only the values, preserving keys and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", 1), ("c", 2)]);
    /// let doubled = map.map_values(|value| value * 2);
    /// assert_eq!(doubled.get("c"), Some(&4));
    /// ```
    #[must_use]
    pub fn map_values<Mapped, Mapper>(&self, mut mapper: Mapper) -> Map<Mapped>
    where
        Mapper: FnMut(&V) -> Mapped,
    {
        // Keys are already unique, no overwrite scan needed.
        Map::from_entries(
            self.entries
                .iter()
                .map(|entry| (entry.0.clone(), mapper(&entry.1)))
                .collect(),
        )
    }

    /// Keeps the entries satisfying the predicate, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", "apple"), ("42", "pear")]);
    /// let numeric = map.filter(|(key, _)| key.parse::<i64>().is_ok());
    /// assert!(numeric.equals_map(&Map::from_pairs([("42", "pear")])));
    /// ```
    #[must_use]
    pub fn filter<Predicate>(&self, mut predicate: Predicate) -> Self
    where
        Predicate: FnMut(&(String, V)) -> bool,
    {
        Self::from_entries(
            self.entries
                .iter()
                .filter(|entry| predicate(entry))
                .cloned()
                .collect(),
        )
    }

    /// Drops the entries satisfying the predicate, preserving order.
    #[must_use]
    pub fn filter_not<Predicate>(&self, mut predicate: Predicate) -> Self
    where
        Predicate: FnMut(&(String, V)) -> bool,
    {
        self.filter(|entry| !predicate(entry))
    }

    /// Returns the first `count` insertion-ordered entries.
    ///
    /// When `count >= length()` the receiver itself is returned (same
    /// storage).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.take(2).length(), 2);
    /// assert!(map.take(4).ptr_eq(&map));
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.length() {
            return self.clone();
        }

        Self::from_entries(self.entries.iter().take(count).cloned().collect())
    }

    /// Returns the union of both maps' entries.
    ///
    /// On key collision the receiver's value wins; entries of `other` are
    /// appended only when their key is still absent. An empty receiver
    /// returns `other` unchanged and an empty argument returns the receiver
    /// unchanged (same storage either way).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let merged = Map::from_pairs([("a", "b")])
    ///     .merge(&Map::from_pairs([("a", "conflict"), ("c", "d")]));
    /// assert!(merged.equals_map(&Map::from_pairs([("a", "b"), ("c", "d")])));
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut entries = self.entries.as_ref().clone();
        for (key, value) in other.entries.iter() {
            if !entries.iter().any(|entry| entry.0 == *key) {
                entries.push((key.clone(), value.clone()));
            }
        }

        Self::from_entries(entries)
    }

    /// Returns the set of keys.
    ///
    /// The set applies its own insertion rule to the keys as they are
    /// enumerated; map order is not part of its contract.
    #[must_use]
    pub fn keys(&self) -> Set<String> {
        Set::of_all(self.entries.iter().map(|entry| entry.0.clone()))
    }

    /// Returns the values in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", "b"), ("c", "d")]);
    /// assert_eq!(map.values(), vec!["b", "d"]);
    /// ```
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.entries.iter().map(|entry| entry.1.clone()).collect()
    }

    /// Collects the map's **values** into the collector's target container.
    ///
    /// To collect the entry pairs instead, call
    /// [`Traversable::collect`](crate::traverse::Traversable::collect)
    /// through the trait.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::prelude::*;
    ///
    /// let list = Map::from_pairs([("a", "b"), ("c", "d")]).collect(Collectors::to_list());
    /// assert!(list.equals(&List::of(["b", "d"])));
    /// ```
    #[must_use]
    pub fn collect<Target>(&self, collector: Target) -> Target::Output
    where
        Target: Collector<V>,
    {
        collector.collect(self.values().into_iter())
    }
}

impl<V: Clone + PartialEq> Map<V> {
    /// Returns `true` if `entry.0` is bound to a value structurally equal to
    /// `entry.1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Map;
    ///
    /// let map = Map::from_pairs([("a", "b")]);
    /// assert!(map.contains(&("a".to_string(), "b")));
    /// assert!(!map.contains(&("a".to_string(), "c")));
    /// ```
    #[must_use]
    pub fn contains(&self, entry: &(String, V)) -> bool {
        self.get(entry.0.as_str())
            .is_some_and(|value| *value == entry.1)
    }

    /// Returns `true` if any entry holds a value structurally equal to
    /// `value`.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.entries.iter().any(|entry| entry.1 == *value)
    }

    /// Returns `true` if both maps hold pairwise-equal entries in the same
    /// insertion order.
    ///
    /// Convenience alias for `PartialEq`; the generic
    /// [`Traversable::equals`](crate::traverse::Traversable::equals) remains
    /// available across container kinds.
    #[must_use]
    pub fn equals_map(&self, other: &Self) -> bool {
        self == other
    }
}

impl<V: Clone> Traversable for Map<V> {
    type Item = (String, V);
    type Iter = MapIntoIterator<V>;

    const CONTAINER: &'static str = "map";

    fn iterator(&self) -> Self::Iter {
        MapIntoIterator {
            entries: ReferenceCounter::clone(&self.entries),
            position: 0,
        }
    }

    fn length(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<V> Clone for Map<V> {
    fn clone(&self) -> Self {
        Self {
            entries: ReferenceCounter::clone(&self.entries),
        }
    }
}

impl<V> Default for Map<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: PartialEq> PartialEq for Map<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && crate::compare::sequences_equal(self.entries.iter(), other.entries.iter())
    }
}

impl<V: Eq> Eq for Map<V> {}

impl<V: fmt::Debug> fmt::Debug for Map<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|entry| (&entry.0, &entry.1)))
            .finish()
    }
}

impl<V: fmt::Display> fmt::Display for Map<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Map(")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "({key}, {value})")?;
        }
        write!(formatter, ")")
    }
}

impl<Key: MapKey, V> FromIterator<(Key, V)> for Map<V> {
    fn from_iter<Pairs: IntoIterator<Item = (Key, V)>>(pairs: Pairs) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<'a, V> IntoIterator for &'a Map<V> {
    type Item = &'a (String, V);
    type IntoIter = std::slice::Iter<'a, (String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over references to a map's entries, in insertion order.
pub type MapIterator<'a, V> = std::slice::Iter<'a, (String, V)>;

/// Iterator producing owned clones of a map's entries, in insertion order.
pub struct MapIntoIterator<V> {
    entries: ReferenceCounter<Vec<(String, V)>>,
    position: usize,
}

impl<V: Clone> Iterator for MapIntoIterator<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.position)?.clone();
        self.position += 1;
        Some(entry)
    }
}

// =============================================================================
// Tests
// =============================================================================
