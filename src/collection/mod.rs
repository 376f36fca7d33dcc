//! Value-semantic immutable containers.
//!
//! This module provides the four concrete containers of the crate:
//!
//! - [`List`]: immutable singly-linked cons list
//! - [`Map`]: insertion-ordered associative container with string keys
//! - [`Set`]: insertion-ordered container of structurally unique elements
//! - [`Stream`]: lazily evaluated, potentially unbounded sequence
//!
//! Every mutator returns a new container value; the receiver is never
//! observed to change. Backing storage lives behind a reference-counted
//! handle, so identity-preserving no-ops (removing an absent key, taking
//! more elements than exist) hand back the receiver's own storage rather
//! than a fresh copy, observable through each container's `ptr_eq`.
//!
//! # Examples
//!
//! ## `List`
//!
//! ```rust
//! use immutars::collection::List;
//!
//! let list = List::empty().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Ok(&1));
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.length(), 3);
//! assert_eq!(extended.length(), 4);
//! ```
//!
//! ## `Map`
//!
//! ```rust
//! use immutars::collection::Map;
//!
//! let map = Map::empty().put("one", 1).put("two", 2);
//! assert_eq!(map.get("one"), Some(&1));
//!
//! // The original map is preserved
//! let updated = map.put("one", 100);
//! assert_eq!(map.get("one"), Some(&1));
//! assert_eq!(updated.get("one"), Some(&100));
//! ```
//!
//! ## `Set`
//!
//! ```rust
//! use immutars::collection::Set;
//!
//! let set = Set::of(["alpha", "beta", "beta"]);
//! assert_eq!(set.length(), 2);
//!
//! let extended = set.add("gamma");
//! assert_eq!(set.length(), 2);
//! assert_eq!(extended.length(), 3);
//! ```
//!
//! ## `Stream`
//!
//! ```rust
//! use immutars::collection::Stream;
//! use immutars::traverse::Traversable;
//!
//! let naturals = Stream::iterate(1, |value| value + 1);
//! let first: Vec<i32> = naturals.take(3).iterator().collect();
//! assert_eq!(first, vec![1, 2, 3]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;
mod map;
mod set;
mod stream;

pub use list::List;
pub use list::ListIntoIterator;
pub use list::ListIterator;
pub use map::Map;
pub use map::MapIntoIterator;
pub use map::MapIterator;
pub use map::MapKey;
pub use set::Set;
pub use set::SetIntoIterator;
pub use set::SetIterator;
pub use stream::Stream;
pub use stream::StreamIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod trait_coverage {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(List<i32>: Clone, Default, PartialEq, Eq, std::fmt::Debug, std::fmt::Display);
    assert_impl_all!(Map<i32>: Clone, Default, PartialEq, std::fmt::Debug);
    assert_impl_all!(Set<i32>: Clone, Default, PartialEq, std::fmt::Debug);
    assert_impl_all!(Stream<i32>: Clone, Default, PartialEq, std::fmt::Debug);

    #[test]
    fn containers_compose_structurally() {
        let nested = Set::of([List::of([1, 2]), List::of([1, 2]), List::of([3])]);
        assert_eq!(nested.length(), 2);
    }
}
