//! # immutars
//!
//! Value-semantic immutable collections for Rust: a singly-linked list, an
//! insertion-ordered map, a structurally unique set, and a lazy stream,
//! unified under one traversal contract.
//!
//! ## Overview
//!
//! Every container in this crate is a persistent value: mutators return a
//! new container and the receiver stays observably unchanged. The crate
//! provides:
//!
//! - **Traversal contract**: [`Traversable`](traverse::Traversable) with
//!   `map`, `filter`, `fold`, `reduce`, `contains`, `take`, `collect`,
//!   `equals` and friends, defined over a single forward iteration pass
//! - **Containers**: [`List`](collection::List), [`Map`](collection::Map),
//!   [`Set`](collection::Set), [`Stream`](collection::Stream)
//! - **Structural equality**: recursive value equality across nested
//!   containers, tuples, and scalars ([`compare`])
//! - **Collectors**: terminal reducers building a target container
//!   ([`Collectors`](traverse::Collectors))
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for the shared backing storage
//!
//! ## Example
//!
//! ```rust
//! use immutars::prelude::*;
//!
//! let map = Map::empty().put("k", "v");
//! assert_eq!(map.get("k"), Some(&"v"));
//! assert_eq!(map.get("missing"), None);
//!
//! let naturals = Stream::iterate(1, |value| value + 1);
//! let squares: Vec<i32> = naturals.map(|value| value * value).take(3).iterator().collect();
//! assert_eq!(squares, vec![1, 4, 9]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the traversal contract, and the collector
/// strategies.
///
/// # Usage
///
/// ```rust
/// use immutars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{List, Map, MapKey, Set, Stream};
    pub use crate::error::CollectionError;
    pub use crate::traverse::{Collector, Collectors, Traversable};
}

pub mod collection;
pub mod compare;
pub mod error;
pub mod traverse;
