//! Structural equality over iteration sequences.
//!
//! Every container in this crate defines value equality the same way: two
//! containers are equal iff their iteration sequences have equal length and
//! are pairwise equal. Elements compare through their own `PartialEq`, so the
//! definition recurses naturally into nested containers, tuples, and scalars
//! without any type inspection.
//!
//! The routines here are the single shared implementation behind each
//! container's `PartialEq` and the generic
//! [`Traversable::equals`](crate::traverse::Traversable::equals) /
//! [`Traversable::contains`](crate::traverse::Traversable::contains).
//!
//! # Examples
//!
//! ```rust
//! use immutars::compare::sequences_equal;
//!
//! assert!(sequences_equal([1, 2, 3].into_iter(), vec![1, 2, 3].into_iter()));
//! assert!(!sequences_equal([1, 2].into_iter(), [1, 2, 3].into_iter()));
//! ```

/// Returns `true` if both sequences yield pairwise-equal elements and end
/// together.
///
/// The comparison is a single forward pass over both iterators and
/// short-circuits on the first mismatch. Both unbounded, equal sequences
/// would never return; callers comparing lazy streams accept that tradeoff.
pub fn sequences_equal<Left, Right, Element>(mut left: Left, mut right: Right) -> bool
where
    Left: Iterator<Item = Element>,
    Right: Iterator<Item = Element>,
    Element: PartialEq,
{
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(first), Some(second)) if first == second => {}
            _ => return false,
        }
    }
}

/// Returns `true` if the sequence yields an element structurally equal to
/// `element`.
///
/// Short-circuits on the first match.
pub fn sequence_contains<Sequence, Element>(mut sequence: Sequence, element: &Element) -> bool
where
    Sequence: Iterator<Item = Element>,
    Element: PartialEq,
{
    sequence.any(|candidate| candidate == *element)
}
