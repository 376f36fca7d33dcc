//! Immutable singly-linked cons list.
//!
//! This module provides [`List`], an immutable sequence with two logical
//! variants: the empty terminal (Nil) and a non-empty node holding a head
//! element plus the remaining list. Nil is represented by an absent head
//! node, so it is never allocated; structural sharing over reference-counted
//! nodes makes `cons` and `tail` O(1).
//!
//! # Overview
//!
//! - O(1) prepend (`cons`)
//! - O(1) head and tail access
//! - O(1) length (cached)
//! - O(n) map, filter, take, reverse, append
//!
//! All operations return new lists without modifying the original.
//!
//! # Examples
//!
//! ```rust
//! use immutars::collection::List;
//!
//! let list = List::empty().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Ok(&1));
//! assert_eq!(list.length(), 3);
//!
//! // The original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.length(), 3);
//! assert_eq!(extended.length(), 4);
//! ```
//!
//! # Structural Sharing
//!
//! A list built by `cons` shares every node of the receiver:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use crate::error::CollectionError;
use crate::traverse::Traversable;

/// Internal node structure for the list.
///
/// Each node contains an element and an optional reference to the next node.
/// The reference count enables structural sharing between lists.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the next node (if any).
    next: Option<ReferenceCounter<Self>>,
}

/// An immutable singly-linked list with structural sharing.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `empty`    | O(1)       |
/// | `cons`     | O(1)       |
/// | `head`     | O(1)       |
/// | `tail`     | O(1)       |
/// | `length`   | O(1)       |
/// | `take`     | O(n)       |
/// | `map`      | O(n)       |
/// | `filter`   | O(n)       |
/// | `reverse`  | O(n)       |
/// | `append`   | O(n)       |
///
/// # Examples
///
/// ```rust
/// use immutars::collection::List;
///
/// let list = List::of([1, 2, 3]);
/// assert_eq!(list.head(), Ok(&1));
/// ```
pub struct List<T> {
    /// Reference to the head node; `None` is the Nil terminal.
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> List<T> {
    /// Creates the empty list.
    ///
    /// Nil carries no allocation; every empty list is the same logical
    /// terminal value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// let list: List<i32> = List::empty();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list from the given values, preserving their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// let list = List::of([1, 2, 3]);
    /// assert_eq!(list.length(), 3);
    /// assert_eq!(list.head(), Ok(&1));
    /// ```
    #[must_use]
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        Self::of_all(values)
    }

    /// Creates a list from any iterable, preserving its order.
    #[must_use]
    pub fn of_all(iterable: impl IntoIterator<Item = T>) -> Self {
        Self::build_from_vec(iterable.into_iter().collect())
    }

    /// Builds a list from a `Vec`, consuming elements from the end so the
    /// chain is assembled in one pass without reverse iteration.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }

    /// Prepends an element, sharing the receiver's nodes as the tail.
    ///
    /// # Complexity
    ///
    /// O(1) time and space.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// let list = List::empty().cons(2).cons(1);
    /// assert_eq!(list.head(), Ok(&1));
    /// assert_eq!(list.length(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] ("head of empty list")
    /// when called on the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// assert_eq!(List::of([1, 2]).head(), Ok(&1));
    /// assert!(List::<i32>::empty().head().is_err());
    /// ```
    #[inline]
    pub fn head(&self) -> Result<&T, CollectionError> {
        self.head
            .as_deref()
            .map(|node| &node.element)
            .ok_or(CollectionError::empty_container("head", "list"))
    }

    /// Returns the list without its first element, sharing the remaining
    /// nodes.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] ("tail of empty list")
    /// when called on the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// let tail = List::of([1, 2, 3]).tail().unwrap();
    /// assert_eq!(tail.head(), Ok(&2));
    /// assert_eq!(tail.length(), 2);
    /// ```
    #[inline]
    pub fn tail(&self) -> Result<Self, CollectionError> {
        self.head
            .as_deref()
            .map(|node| Self {
                head: node.next.clone(),
                length: self.length - 1,
            })
            .ok_or(CollectionError::empty_container("tail", "list"))
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1), the length is cached.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns `true` only for the Nil terminal.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// let list = List::of([1, 2, 3]);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: self.head.as_deref(),
        }
    }

    /// Returns `true` if both lists share the same head node (or are both
    /// Nil).
    ///
    /// Sharing the head node means sharing the entire chain, so this is the
    /// observable identity of a list value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Applies a function to every element, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// let doubled = List::of([1, 2, 3]).map(|element| element * 2);
    /// assert_eq!(doubled, List::of([2, 4, 6]));
    /// ```
    #[must_use]
    pub fn map<Mapped, Mapper>(&self, mapper: Mapper) -> List<Mapped>
    where
        Mapper: FnMut(&T) -> Mapped,
    {
        List::build_from_vec(self.iter().map(mapper).collect())
    }
}

impl<T: Clone> List<T> {
    /// Keeps the elements satisfying the predicate, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// let even = List::of([1, 2, 3, 4]).filter(|element| element % 2 == 0);
    /// assert_eq!(even, List::of([2, 4]));
    /// ```
    #[must_use]
    pub fn filter<Predicate>(&self, mut predicate: Predicate) -> Self
    where
        Predicate: FnMut(&T) -> bool,
    {
        Self::build_from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Drops the elements satisfying the predicate, preserving order.
    #[must_use]
    pub fn filter_not<Predicate>(&self, mut predicate: Predicate) -> Self
    where
        Predicate: FnMut(&T) -> bool,
    {
        self.filter(|element| !predicate(element))
    }

    /// Returns the first `count` elements.
    ///
    /// When `count >= length()` the receiver itself is returned (same
    /// storage, observable via [`ptr_eq`](Self::ptr_eq)).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::List;
    ///
    /// let list = List::of([1, 2, 3]);
    /// assert_eq!(list.take(2), List::of([1, 2]));
    /// assert!(list.take(5).ptr_eq(&list));
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.length {
            return self.clone();
        }

        Self::build_from_vec(self.iter().take(count).cloned().collect())
    }

    /// Returns the list with its elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::empty();
        for element in self.iter() {
            reversed = reversed.cons(element.clone());
        }

        reversed
    }

    /// Returns the list with `element` added at the end.
    ///
    /// # Complexity
    ///
    /// O(n); the whole chain is rebuilt, so prefer [`cons`](Self::cons) when
    /// order allows.
    #[must_use]
    pub fn append(&self, element: T) -> Self {
        let mut elements: Vec<T> = self.iter().cloned().collect();
        elements.push(element);

        Self::build_from_vec(elements)
    }
}

impl<T: Clone> Traversable for List<T> {
    type Item = T;
    type Iter = ListIntoIterator<T>;

    const CONTAINER: &'static str = "list";

    fn iterator(&self) -> Self::Iter {
        ListIntoIterator {
            current: self.head.clone(),
        }
    }

    fn length(&self) -> usize {
        self.length
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for List<T> {
    /// Unlinks the chain iteratively so dropping a long, exclusively owned
    /// list cannot overflow the stack through nested node destructors.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut owned) => current = owned.next.take(),
                // The remainder is shared; its other owner unlinks it.
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && crate::compare::sequences_equal(self.iter(), other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.length);
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "List(")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<Iterable: IntoIterator<Item = T>>(iterable: Iterable) -> Self {
        Self::of_all(iterable)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ListIntoIterator {
            current: self.head.clone(),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to a list's elements.
pub struct ListIterator<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(&node.element)
    }
}

/// Iterator producing owned clones of a list's elements.
pub struct ListIntoIterator<T> {
    current: Option<ReferenceCounter<Node<T>>>,
}

impl<T: Clone> Iterator for ListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        let element = node.element.clone();
        self.current = node.next.clone();
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
    fn test_cons_shares_tail_nodes() {
        let base = List::of([1, 2, 3]);
        let extended = base.cons(0);
        assert!(extended.tail().unwrap().ptr_eq(&base));
    }

    #[rstest]
    fn test_take_full_length_is_identity() {
        let list = List::of([1, 2, 3]);
        assert!(list.take(3).ptr_eq(&list));
        assert!(list.take(9).ptr_eq(&list));
        assert!(!list.take(2).ptr_eq(&list));
    }

    #[rstest]
    fn test_nil_is_unallocated_terminal() {
        let empty: List<i32> = List::empty();
        assert!(empty.ptr_eq(&List::empty()));
        assert_eq!(empty.length(), 0);
    }

    #[rstest]
    fn test_long_exclusive_list_drops_without_overflow() {
        let list: List<i32> = (0..200_000).collect();
        drop(list);
    }

    #[rstest]
    fn test_display_renders_elements_in_order() {
        assert_eq!(format!("{}", List::of([1, 2, 3])), "List(1, 2, 3)");
        assert_eq!(format!("{}", List::<i32>::empty()), "List()");
    }
}
