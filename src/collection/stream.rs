//! Lazily evaluated, potentially unbounded sequence.
//!
//! This module provides [`Stream`], a sequence with two logical variants:
//! the empty terminal (represented by an absent node, never allocated) and a
//! non-empty node holding a **realized** head plus a **deferred** tail
//! computation. The deferred computation runs at most once: its result is
//! memoized in the node, so a side-effecting generator is observed exactly
//! once per node no matter how many times `tail()` is called.
//!
//! Because tails stay deferred until asked for, a stream may describe an
//! unbounded sequence. Combinators (`map`, `filter`, `take`) preserve that
//! laziness; eager terminal operations (`length`, `fold`, `collect`) on an
//! unbounded stream never terminate; that is the documented tradeoff of lazy
//! sequences.
//!
//! # Examples
//!
//! ```rust
//! use immutars::collection::Stream;
//! use immutars::traverse::Traversable;
//!
//! // An unbounded sequence 1, 2, 3, ...
//! let naturals = Stream::iterate(1, |value| value + 1);
//!
//! let first: Vec<i32> = naturals.take(3).iterator().collect();
//! assert_eq!(first, vec![1, 2, 3]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::iter::FromIterator;

use super::ReferenceCounter;
use crate::error::CollectionError;
use crate::traverse::Traversable;

/// The state of a node's deferred tail.
///
/// Transitions are one-way: `Deferred -> Evaluating -> Realized`. The
/// `Evaluating` placeholder holds the slot while the thunk runs so a
/// re-entrant force (a thunk reaching back into its own node) is detected
/// instead of looping.
enum TailState<T> {
    /// The tail has not been computed yet; holds the deferred computation.
    Deferred(Box<dyn FnOnce() -> Stream<T>>),
    /// The deferred computation is currently running.
    Evaluating,
    /// The tail has been computed and is cached for every later `tail()`.
    Realized(Stream<T>),
}

/// A non-empty stream node: realized head, deferred-or-cached tail.
struct StreamNode<T> {
    head: T,
    tail: RefCell<TailState<T>>,
}

impl<T> StreamNode<T> {
    /// Forces the tail, memoizing the result.
    ///
    /// # Panics
    ///
    /// Panics if the tail thunk re-entrantly forces the node it belongs to.
    fn forced_tail(&self) -> Stream<T> {
        {
            let state = self.tail.borrow();
            match &*state {
                TailState::Realized(tail) => return tail.clone(),
                TailState::Evaluating => panic!("stream tail is already being evaluated"),
                TailState::Deferred(_) => {}
            }
        }

        // Take the thunk out, leaving the Evaluating placeholder, and run it
        // with the borrow released so the thunk may build further streams.
        let TailState::Deferred(thunk) = self.tail.replace(TailState::Evaluating) else {
            unreachable!()
        };
        let tail = thunk();
        *self.tail.borrow_mut() = TailState::Realized(tail.clone());

        tail
    }
}

/// A lazily evaluated immutable sequence, possibly unbounded.
///
/// # Examples
///
/// ```rust
/// use immutars::collection::Stream;
///
/// let stream = Stream::of([1, 2, 3]);
/// assert_eq!(stream.head(), Ok(&1));
/// assert_eq!(stream.tail().unwrap().head(), Ok(&2));
/// ```
pub struct Stream<T> {
    /// The first node; `None` is the empty terminal.
    node: Option<ReferenceCounter<StreamNode<T>>>,
}

impl<T> Stream<T> {
    /// Creates the empty stream.
    ///
    /// The terminal carries no allocation; every empty stream is the same
    /// logical value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Stream;
    ///
    /// let stream: Stream<i32> = Stream::empty();
    /// assert!(stream.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { node: None }
    }

    /// Creates a stream with a realized head and a deferred tail.
    ///
    /// The tail computation is not invoked here; it runs at most once, on
    /// the first `tail()` call, and its result is cached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Stream;
    ///
    /// let stream = Stream::cons(1, || Stream::of([2, 3]));
    /// assert_eq!(stream.head(), Ok(&1));
    /// ```
    #[must_use]
    pub fn cons<Thunk>(head: T, tail: Thunk) -> Self
    where
        Thunk: FnOnce() -> Self + 'static,
    {
        Self {
            node: Some(ReferenceCounter::new(StreamNode {
                head,
                tail: RefCell::new(TailState::Deferred(Box::new(tail))),
            })),
        }
    }

    /// Creates a node whose tail is already known.
    fn realized(head: T, tail: Self) -> Self {
        Self {
            node: Some(ReferenceCounter::new(StreamNode {
                head,
                tail: RefCell::new(TailState::Realized(tail)),
            })),
        }
    }

    /// Creates a finite stream from the given values, preserving their
    /// order. Every node is realized up front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Stream;
    ///
    /// let stream = Stream::of([1, 2, 3]);
    /// assert_eq!(stream.head(), Ok(&1));
    /// ```
    #[must_use]
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        Self::of_all(values)
    }

    /// Creates a finite stream from any iterable, preserving its order.
    #[must_use]
    pub fn of_all(iterable: impl IntoIterator<Item = T>) -> Self {
        let mut elements: Vec<T> = iterable.into_iter().collect();
        let mut stream = Self::empty();
        while let Some(element) = elements.pop() {
            stream = Self::realized(element, stream);
        }

        stream
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] ("head of empty stream")
    /// on the empty stream.
    #[inline]
    pub fn head(&self) -> Result<&T, CollectionError> {
        self.node
            .as_deref()
            .map(|node| &node.head)
            .ok_or(CollectionError::empty_container("head", "stream"))
    }

    /// Returns the stream past the first element, forcing the deferred tail
    /// computation if it has not run yet (and caching its result).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyContainer`] ("tail of empty stream")
    /// on the empty stream.
    pub fn tail(&self) -> Result<Self, CollectionError> {
        self.node
            .as_deref()
            .map(StreamNode::forced_tail)
            .ok_or(CollectionError::empty_container("tail", "stream"))
    }

    /// Returns `true` only for the empty terminal.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Returns `true` if both streams share the same first node (or are
    /// both empty).
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Creates the unbounded stream `seed, next(seed), next(next(seed)), …`.
    ///
    /// Each successor is computed lazily, one node per `tail()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Stream;
    ///
    /// let naturals = Stream::iterate(1, |value| value + 1);
    /// assert_eq!(naturals.head(), Ok(&1));
    /// assert_eq!(naturals.tail().unwrap().head(), Ok(&2));
    /// ```
    #[must_use]
    pub fn iterate<Next>(seed: T, next: Next) -> Self
    where
        Next: Fn(&T) -> T + 'static,
    {
        Self::iterate_shared(seed, ReferenceCounter::new(next))
    }

    fn iterate_shared<Next>(seed: T, next: ReferenceCounter<Next>) -> Self
    where
        Next: Fn(&T) -> T + 'static,
    {
        let thunk = {
            let current = seed.clone();
            move || {
                let following = next(&current);
                Self::iterate_shared(following, next)
            }
        };

        Self::cons(seed, thunk)
    }

    /// Creates the unbounded stream that invokes `supplier` for every
    /// element, one call per realized node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Stream;
    /// use immutars::traverse::Traversable;
    ///
    /// let zeros = Stream::continually(|| 0);
    /// let first: Vec<i32> = zeros.take(4).iterator().collect();
    /// assert_eq!(first, vec![0, 0, 0, 0]);
    /// ```
    #[must_use]
    pub fn continually<Supplier>(supplier: Supplier) -> Self
    where
        Supplier: Fn() -> T + 'static,
    {
        Self::continually_shared(ReferenceCounter::new(supplier))
    }

    fn continually_shared<Supplier>(supplier: ReferenceCounter<Supplier>) -> Self
    where
        Supplier: Fn() -> T + 'static,
    {
        let head = supplier();
        Self::cons(head, move || Self::continually_shared(supplier))
    }

    /// Applies a function to every element, lazily.
    ///
    /// The receiver's head is mapped immediately (a non-empty stream always
    /// has a realized head); everything past it is mapped one node at a
    /// time, as tails are forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Stream;
    /// use immutars::traverse::Traversable;
    ///
    /// let doubled = Stream::iterate(1, |value| value + 1).map(|value| value * 2);
    /// let first: Vec<i32> = doubled.take(3).iterator().collect();
    /// assert_eq!(first, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn map<Mapped, Mapper>(&self, mapper: Mapper) -> Stream<Mapped>
    where
        Mapped: 'static,
        Mapper: Fn(T) -> Mapped + 'static,
    {
        Self::map_shared(self.clone(), ReferenceCounter::new(mapper))
    }

    fn map_shared<Mapped, Mapper>(
        mut stream: Self,
        mapper: ReferenceCounter<Mapper>,
    ) -> Stream<Mapped>
    where
        Mapped: 'static,
        Mapper: Fn(T) -> Mapped + 'static,
    {
        match stream.node.take() {
            None => Stream::empty(),
            Some(node) => {
                let head = mapper(node.head.clone());
                Stream::cons(head, move || {
                    Self::map_shared(node.forced_tail(), mapper)
                })
            }
        }
    }

    /// Keeps the elements satisfying the predicate.
    ///
    /// The stream advances eagerly to the first satisfying element (a
    /// non-empty result needs a realized head) and defers the rest; on an
    /// unbounded stream with no satisfying element this does not terminate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Stream;
    /// use immutars::traverse::Traversable;
    ///
    /// let multiples = Stream::iterate(1, |value| value + 1)
    ///     .filter(|value| value % 3 == 0);
    /// let first: Vec<i32> = multiples.take(3).iterator().collect();
    /// assert_eq!(first, vec![3, 6, 9]);
    /// ```
    #[must_use]
    pub fn filter<Predicate>(&self, predicate: Predicate) -> Self
    where
        Predicate: Fn(&T) -> bool + 'static,
    {
        Self::filter_shared(self.clone(), ReferenceCounter::new(predicate))
    }

    fn filter_shared<Predicate>(stream: Self, predicate: ReferenceCounter<Predicate>) -> Self
    where
        Predicate: Fn(&T) -> bool + 'static,
    {
        let mut current = stream;
        loop {
            let Some(node) = current.node.take() else {
                return Self::empty();
            };

            if predicate(&node.head) {
                let head = node.head.clone();
                return Self::cons(head, move || {
                    Self::filter_shared(node.forced_tail(), predicate)
                });
            }

            current = node.forced_tail();
        }
    }

    /// Drops the elements satisfying the predicate.
    #[must_use]
    pub fn filter_not<Predicate>(&self, predicate: Predicate) -> Self
    where
        Predicate: Fn(&T) -> bool + 'static,
    {
        self.filter(move |element| !predicate(element))
    }

    /// Returns the first `count` elements, lazily.
    ///
    /// Building the result forces nothing: the receiver's head is already
    /// realized and the rest is deferred, so taking from an unbounded
    /// stream is safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutars::collection::Stream;
    /// use immutars::traverse::Traversable;
    ///
    /// let naturals = Stream::iterate(1, |value| value + 1);
    /// assert_eq!(naturals.take(3).length(), 3);
    /// assert!(naturals.take(0).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count == 0 {
            return Self::empty();
        }

        let Some(node) = self.node.clone() else {
            return Self::empty();
        };

        let head = node.head.clone();
        Self::cons(head, move || {
            if count == 1 {
                // The prefix is complete; the underlying tail stays unforced.
                Self::empty()
            } else {
                node.forced_tail().take(count - 1)
            }
        })
    }
}

impl<T: Clone> Traversable for Stream<T> {
    type Item = T;
    type Iter = StreamIterator<T>;

    const CONTAINER: &'static str = "stream";

    fn iterator(&self) -> Self::Iter {
        StreamIterator {
            current: self.clone(),
        }
    }

    fn is_empty(&self) -> bool {
        self.node.is_none()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<T> Drop for Stream<T> {
    /// Unlinks the realized chain iteratively so dropping a long,
    /// exclusively owned stream cannot overflow the stack through nested
    /// node destructors.
    fn drop(&mut self) {
        let mut current = self.node.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(owned) => {
                    current = match owned.tail.into_inner() {
                        TailState::Realized(mut tail) => tail.node.take(),
                        TailState::Deferred(_) | TailState::Evaluating => None,
                    };
                }
                // The remainder is shared; its other owner unlinks it.
                Err(_) => break,
            }
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + PartialEq> PartialEq for Stream<T> {
    /// Compares the full iteration sequences, forcing both streams; equal
    /// unbounded streams would never return.
    fn eq(&self, other: &Self) -> bool {
        crate::compare::sequences_equal(self.iterator(), other.iterator())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    /// Renders only what is already realized; never forces a tail.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Stream(")?;
        let mut current = self.node.clone();
        let mut first = true;
        while let Some(node) = current {
            if !first {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{:?}", node.head)?;
            first = false;

            match &*node.tail.borrow() {
                TailState::Realized(tail) => current = tail.node.clone(),
                TailState::Deferred(_) | TailState::Evaluating => {
                    write!(formatter, ", ?")?;
                    current = None;
                }
            }
        }
        write!(formatter, ")")
    }
}

impl<T> FromIterator<T> for Stream<T> {
    fn from_iter<Iterable: IntoIterator<Item = T>>(iterable: Iterable) -> Self {
        Self::of_all(iterable)
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        StreamIterator { current: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator walking a stream, forcing one tail per step.
pub struct StreamIterator<T> {
    current: Stream<T>,
}

impl<T: Clone> Iterator for StreamIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.node.take()?;
        let element = node.head.clone();
        self.current = node.forced_tail();
        Some(element)
    }
}

// =============================================================================
// Tests
// =============================================================================
