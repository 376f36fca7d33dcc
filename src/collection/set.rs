//! Insertion-ordered immutable set of structurally unique elements.
//!
//! This module provides [`Set`], a container that keeps the first occurrence
//! of every element and preserves insertion order. Uniqueness is decided by
//! structural equality (`PartialEq`), not hashing or ordering, so a set can
//! hold and correctly de-duplicate nested containers as well as scalars.
//!
//! Elements live in an inline-capable vector (up to 8 elements without a
//! heap allocation for the storage itself) behind a reference-counted
//! handle; identity-preserving no-ops (`add` of a present element, `remove`
//! of an absent one, `take` beyond the length) hand back shared storage.
//!
//! # Examples
//!
//! ```rust
//! use immutars::collection::Set;
//!
//! let set = Set::of(["alpha", "beta"]);
//! let extended = set.add("gamma");
//!
//! assert_eq!(set.length(), 2);
//! assert_eq!(extended.length(), 3);
//! assert!(extended.contains(&"gamma"));
//! ```

use std::fmt;
use std::iter::FromIterator;

use smallvec::SmallVec;

use super::ReferenceCounter;
use crate::traverse::Traversable;

/// Number of elements stored inline before the backing vector spills to the
/// heap.
const INLINE_CAPACITY: usize = 8;

type Elements<T> = SmallVec<[T; INLINE_CAPACITY]>;

/// An insertion-ordered immutable set unique under structural equality.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `empty`    | O(1)       |
/// | `contains` | O(n)       |
/// | `add`      | O(n)       |
/// | `remove`   | O(n)       |
/// | `union`    | O(n · m)   |
/// | `length`   | O(1)       |
///
/// Membership is a linear structural scan: the only capability required of
/// elements is `PartialEq`, which is what lets nested containers act as
/// elements.
///
/// # Examples
///
/// ```rust
/// use immutars::collection::{List, Set};
///
/// let nested = Set::of([List::of([1, 2, 3]), List::of([4, 5, 6]), List::of([1, 2, 3])]);
/// assert_eq!(nested.length(), 2);
/// assert!(nested.contains(&List::of([1, 2, 3])));
/// ```
pub struct Set<T> {
    /// Elements in insertion order; no two are structurally equal.
    elements: ReferenceCounter<Elements<T>>,
}

impl<T> Set<T> {
    /// Creates the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let set: Set<i32> = Set::empty();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            elements: ReferenceCounter::new(SmallVec::new()),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over references to the elements, in insertion
    /// order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns `true` if both sets share the same backing storage.
    ///
    /// This is the observable identity of a set value; the documented no-op
    /// paths (`add` of a present element, `remove` of an absent one, `take`
    /// beyond the length) preserve it.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements)
    }
}

impl<T: PartialEq> Set<T> {
    /// Creates a set from the given values, keeping the first occurrence of
    /// every element and its insertion position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let set = Set::of([1, 1, 2]);
    /// assert_eq!(set.length(), 2);
    /// ```
    #[must_use]
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        Self::of_all(values)
    }

    /// Creates a set from any iterable, uniquing in a single pass.
    #[must_use]
    pub fn of_all(iterable: impl IntoIterator<Item = T>) -> Self {
        let mut elements: Elements<T> = SmallVec::new();
        for element in iterable {
            if !elements.iter().any(|existing| *existing == element) {
                elements.push(element);
            }
        }

        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// Returns `true` if an element structurally equal to `element` is
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let set = Set::of(["alpha", "beta"]);
    /// assert!(set.contains(&"alpha"));
    /// assert!(!set.contains(&"gamma"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.iter().any(|existing| existing == element)
    }
}

impl<T: Clone + PartialEq> Set<T> {
    /// Returns a new set with `element` appended.
    ///
    /// When a structurally equal element is already present the receiver
    /// itself is returned (same storage, observable via
    /// [`ptr_eq`](Self::ptr_eq)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let set = Set::of([1, 2]);
    /// assert_eq!(set.add(3).length(), 3);
    /// assert!(set.add(2).ptr_eq(&set));
    /// ```
    #[must_use]
    pub fn add(&self, element: T) -> Self {
        if self.contains(&element) {
            return self.clone();
        }

        let mut elements = self.elements.as_ref().clone();
        elements.push(element);

        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// Returns a new set without the first structurally equal match.
    ///
    /// When no element matches, the receiver itself is returned (same
    /// storage).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let set = Set::of(["alpha", "beta", "gamma"]);
    /// let without = set.remove(&"beta");
    /// assert_eq!(without.length(), 2);
    /// assert!(!without.contains(&"beta"));
    /// assert!(set.remove(&"delta").ptr_eq(&set));
    /// ```
    #[must_use]
    pub fn remove(&self, element: &T) -> Self {
        let Some(position) = self.elements.iter().position(|existing| existing == element) else {
            return self.clone();
        };

        let mut elements = self.elements.as_ref().clone();
        elements.remove(position);

        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// Returns the union of both sets: the receiver's elements in order,
    /// followed by the elements of `other` not already structurally present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let union = Set::of(["alpha", "beta", "gamma"])
    ///     .union(&Set::of(["beta", "gamma", "delta"]));
    /// assert_eq!(union.length(), 4);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut elements = self.elements.as_ref().clone();
        for element in other.elements.iter() {
            if !elements.iter().any(|existing| existing == element) {
                elements.push(element.clone());
            }
        }

        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// Applies a function to every element in order and re-uniques the
    /// results; the output may be smaller than the input when mapped values
    /// collide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let doubled = Set::of([1, 2, 3]).map(|element| element * 2);
    /// assert_eq!(doubled, Set::of([2, 4, 6]));
    ///
    /// let collapsed = Set::of([1, 2, 3]).map(|_| 0);
    /// assert_eq!(collapsed.length(), 1);
    /// ```
    #[must_use]
    pub fn map<Mapped, Mapper>(&self, mapper: Mapper) -> Set<Mapped>
    where
        Mapped: PartialEq,
        Mapper: FnMut(&T) -> Mapped,
    {
        Set::of_all(self.elements.iter().map(mapper))
    }

    /// Keeps the elements satisfying the predicate, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let multiples = Set::of_all(1..=30).filter(|element| element % 3 == 0);
    /// assert_eq!(multiples.take(3), Set::of([3, 6, 9]));
    /// ```
    #[must_use]
    pub fn filter<Predicate>(&self, mut predicate: Predicate) -> Self
    where
        Predicate: FnMut(&T) -> bool,
    {
        Self {
            elements: ReferenceCounter::new(
                self.elements
                    .iter()
                    .filter(|element| predicate(element))
                    .cloned()
                    .collect(),
            ),
        }
    }

    /// Drops the elements satisfying the predicate, preserving order.
    #[must_use]
    pub fn filter_not<Predicate>(&self, mut predicate: Predicate) -> Self
    where
        Predicate: FnMut(&T) -> bool,
    {
        self.filter(|element| !predicate(element))
    }

    /// Returns the first `count` insertion-ordered elements.
    ///
    /// When `count >= length()` the receiver itself is returned (same
    /// storage).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Set;
    ///
    /// let set = Set::of([1, 2, 3]);
    /// assert!(set.take(3).ptr_eq(&set));
    /// assert!(set.take(4).ptr_eq(&set));
    /// assert_eq!(Set::of([1, 2, 3, 4]).take(3), Set::of([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.length() {
            return self.clone();
        }

        Self {
            elements: ReferenceCounter::new(
                self.elements.iter().take(count).cloned().collect(),
            ),
        }
    }
}

impl<T: Clone> Traversable for Set<T> {
    type Item = T;
    type Iter = SetIntoIterator<T>;

    const CONTAINER: &'static str = "set";

    fn iterator(&self) -> Self::Iter {
        SetIntoIterator {
            elements: ReferenceCounter::clone(&self.elements),
            position: 0,
        }
    }

    fn length(&self) -> usize {
        self.elements.len()
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && crate::compare::sequences_equal(self.elements.iter(), other.elements.iter())
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Set(")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<Iterable: IntoIterator<Item = T>>(iterable: Iterable) -> Self {
        Self::of_all(iterable)
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            elements: self.elements,
            position: 0,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to a set's elements, in insertion order.
pub struct SetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Iterator producing owned clones of a set's elements, in insertion order.
pub struct SetIntoIterator<T> {
    elements: ReferenceCounter<Elements<T>>,
    position: usize,
}

impl<T: Clone> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.position)?.clone();
        self.position += 1;
        Some(element)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_of_keeps_first_occurrence_in_order() {
        let set = Set::of([3, 1, 3, 2, 1]);
        let elements: Vec<&i32> = set.iter().collect();
        assert_eq!(elements, vec![&3, &1, &2]);
    }

    #[rstest]
    fn test_add_present_element_preserves_identity() {
        let set = Set::of([1, 2, 3]);
        assert!(set.add(2).ptr_eq(&set));
        assert!(!set.add(4).ptr_eq(&set));
    }

    #[rstest]
    fn test_remove_absent_element_preserves_identity() {
        let set = Set::of([1, 2, 3]);
        assert!(set.remove(&7).ptr_eq(&set));
    }

    #[rstest]
    fn test_union_appends_only_unseen_elements() {
        let union = Set::of([1, 2]).union(&Set::of([2, 3]));
        let elements: Vec<&i32> = union.iter().collect();
        assert_eq!(elements, vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_growth_beyond_inline_capacity() {
        let set = Set::of_all(0..20);
        assert_eq!(set.length(), 20);
        assert!(set.contains(&19));
    }
}
