//! Terminal collectors that fold an iteration into a target container.
//!
//! A [`Collector`] is a strategy consumed by
//! [`Traversable::collect`](super::Traversable::collect): it drains an
//! iterator and builds one target container from it. The set of strategies
//! is closed; [`Collectors`] is the factory for all of them.
//!
//! # Examples
//!
//! ```rust
//! use immutars::prelude::*;
//!
//! let list = Set::of([1, 2, 3]).collect(Collectors::to_list());
//! assert!(list.equals(&List::of([1, 2, 3])));
//! ```

use crate::collection::{List, Set};

/// A terminal reduction strategy: consumes an iterator, produces a container.
pub trait Collector<Element> {
    /// The container this strategy builds.
    type Output;

    /// Drains `iterator` and builds the target container.
    fn collect<Sequence>(self, iterator: Sequence) -> Self::Output
    where
        Sequence: Iterator<Item = Element>;
}

/// Collects the iteration into a [`List`], preserving order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToList;

impl<Element> Collector<Element> for ToList {
    type Output = List<Element>;

    fn collect<Sequence>(self, iterator: Sequence) -> Self::Output
    where
        Sequence: Iterator<Item = Element>,
    {
        List::of_all(iterator)
    }
}

/// Collects the iteration into a [`Set`], de-duplicating structurally equal
/// elements (first occurrence wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct ToSet;

impl<Element> Collector<Element> for ToSet
where
    Element: PartialEq,
{
    type Output = Set<Element>;

    fn collect<Sequence>(self, iterator: Sequence) -> Self::Output
    where
        Sequence: Iterator<Item = Element>,
    {
        Set::of_all(iterator)
    }
}

/// Collects the iteration into a plain `Vec`, preserving order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToVector;

impl<Element> Collector<Element> for ToVector {
    type Output = Vec<Element>;

    fn collect<Sequence>(self, iterator: Sequence) -> Self::Output
    where
        Sequence: Iterator<Item = Element>,
    {
        iterator.collect()
    }
}

/// Factory for the closed set of collector strategies.
///
/// # Examples
///
/// ```rust
/// use immutars::prelude::*;
///
/// let values = List::of([1, 2, 2, 3]).collect(Collectors::to_set());
/// assert_eq!(values.length(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Collectors;

impl Collectors {
    /// Returns the list-building strategy.
    #[inline]
    #[must_use]
    pub const fn to_list() -> ToList {
        ToList
    }

    /// Returns the set-building strategy.
    #[inline]
    #[must_use]
    pub const fn to_set() -> ToSet {
        ToSet
    }

    /// Returns the `Vec`-building strategy.
    #[inline]
    #[must_use]
    pub const fn to_vector() -> ToVector {
        ToVector
    }
}
