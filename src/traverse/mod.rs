//! The shared traversal contract implemented by every container.
//!
//! This module provides the [`Traversable`] trait, the capability set common
//! to [`List`](crate::collection::List), [`Set`](crate::collection::Set),
//! [`Map`](crate::collection::Map), and [`Stream`](crate::collection::Stream).
//! Every operation is defined in terms of a single forward pass over the
//! container's [`iterator`](Traversable::iterator); concrete containers
//! override only what they can answer cheaply (`length`, `is_empty`).
//!
//! Shape-producing combinators (`map`, `filter`, `take`, `head`, `tail`)
//! live on the concrete containers because their result types differ by
//! kind: a map's `tail` is an entry, a list's `tail` is a list.
//!
//! # Laws
//!
//! Implementations are expected to satisfy:
//!
//! - **Single pass**: `iterator()` yields each element exactly once, in the
//!   container's documented order.
//! - **Consistency**: `length() == iterator().count()` and
//!   `is_empty() == (length() == 0)` for every finite container.
//! - **Equality**: `equals` is reflexive and symmetric, and agrees with
//!   pairwise comparison of the iteration sequences.
//!
//! # Examples
//!
//! ```rust
//! use immutars::prelude::*;
//!
//! let list = List::of([1, 2, 3, 4]);
//! assert_eq!(list.fold(0, |sum, element| sum + element), 10);
//! assert!(list.exists(|element| element % 4 == 0));
//! assert!(!list.for_all(|element| element % 4 == 0));
//! ```

mod collector;

pub use collector::{Collector, Collectors, ToList, ToSet, ToVector};

use crate::compare;
use crate::error::CollectionError;

/// The capability set shared by every container.
///
/// A `Traversable` produces a finite (or, for streams, potentially
/// unbounded) sequence of owned elements through [`iterator`], and derives
/// the rest of the contract from that single forward pass. On an unbounded
/// stream the non-short-circuiting operations (`length`, `fold`, `for_each`,
/// `reduce`, `collect`) never terminate; that is the documented tradeoff of
/// lazy sequences, not a defect of the contract.
///
/// [`iterator`]: Traversable::iterator
pub trait Traversable {
    /// The element type produced by one traversal step.
    ///
    /// Map containers traverse entry pairs; sequence and set containers
    /// traverse their elements.
    type Item: Clone;

    /// The iterator type producing owned elements.
    type Iter: Iterator<Item = Self::Item>;

    /// The container kind, as it appears in error messages
    /// (`"reduce of empty set"`).
    const CONTAINER: &'static str;

    /// Returns an iterator over the container's elements.
    ///
    /// The iterator supports a single forward pass and yields owned clones,
    /// so draining it never disturbs the container itself.
    fn iterator(&self) -> Self::Iter;

    /// Returns the number of elements.
    ///
    /// The default drains the iterator; containers with a cheaper answer
    /// override it. Never call on an unbounded stream.
    fn length(&self) -> usize {
        self.iterator().count()
    }

    /// Returns `true` if the container has no elements.
    fn is_empty(&self) -> bool {
        self.iterator().next().is_none()
    }

    /// Returns `true` if any element is structurally equal to `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::prelude::*;
    ///
    /// let set = Set::of(["alpha", "beta"]);
    /// assert!(Traversable::contains(&set, &"alpha"));
    /// assert!(!Traversable::contains(&set, &"gamma"));
    /// ```
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        compare::sequence_contains(self.iterator(), element)
    }

    /// Returns `true` if at least one element satisfies the predicate.
    ///
    /// Short-circuits on the first satisfying element.
    fn exists<Predicate>(&self, mut predicate: Predicate) -> bool
    where
        Predicate: FnMut(&Self::Item) -> bool,
    {
        self.iterator().any(|element| predicate(&element))
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// Short-circuits on the first failing element; vacuously true on an
    /// empty container.
    fn for_all<Predicate>(&self, mut predicate: Predicate) -> bool
    where
        Predicate: FnMut(&Self::Item) -> bool,
    {
        self.iterator().all(|element| predicate(&element))
    }

    /// Applies an action to every element, in iteration order.
    fn for_each<Action>(&self, action: Action)
    where
        Action: FnMut(Self::Item),
    {
        self.iterator().for_each(action);
    }

    /// Folds the elements from the left with an explicit seed.
    ///
    /// Never fails: on an empty container the seed is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::prelude::*;
    ///
    /// let lengths = Set::of(["a", "bbb", "cc"]);
    /// let total = lengths.fold(0, |sum, word| sum + word.len());
    /// assert_eq!(total, 6);
    /// ```
    fn fold<Accumulator, Operation>(&self, initial: Accumulator, operation: Operation) -> Accumulator
    where
        Operation: FnMut(Accumulator, Self::Item) -> Accumulator,
    {
        self.iterator().fold(initial, operation)
    }

    /// Reduces the elements pairwise, seeding with the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] when the container has no
    /// elements to seed from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::prelude::*;
    ///
    /// let set = Set::of([1, 2, 3, 4]);
    /// assert_eq!(set.reduce(|left, right| left + right), Ok(10));
    /// assert!(Set::<i32>::empty().reduce(|left, right| left + right).is_err());
    /// ```
    fn reduce<Operation>(&self, operation: Operation) -> Result<Self::Item, CollectionError>
    where
        Operation: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut iterator = self.iterator();
        let seed = iterator
            .next()
            .ok_or(CollectionError::empty_container("reduce", Self::CONTAINER))?;
        Ok(iterator.fold(seed, operation))
    }

    /// Returns `true` if `other` yields a pairwise structurally equal
    /// sequence of the same length.
    ///
    /// This is the structural-equality contract applied across container
    /// kinds: any two traversables with the same element type compare by
    /// their iteration sequences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::prelude::*;
    ///
    /// let list = List::of([1, 2, 3]);
    /// let stream = Stream::of([1, 2, 3]);
    /// assert!(list.equals(&stream));
    /// ```
    fn equals<Other>(&self, other: &Other) -> bool
    where
        Other: Traversable<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        compare::sequences_equal(self.iterator(), other.iterator())
    }

    /// Drains the iterator into the collector's target container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::prelude::*;
    ///
    /// let collected = Set::of(["a", "b"]).collect(Collectors::to_list());
    /// assert!(collected.equals(&List::of(["a", "b"])));
    /// ```
    fn collect<Target>(&self, collector: Target) -> Target::Output
    where
        Target: Collector<Self::Item>,
    {
        collector.collect(self.iterator())
    }
}
