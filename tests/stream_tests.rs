//! Unit tests for Stream.
//!
//! These tests verify the laziness contract: heads are realized, tails stay
//! deferred until forced, forcing memoizes, and combinators never evaluate
//! past what the caller demands.

use immutars::prelude::*;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_empty_stream_is_terminal() {
    let stream: Stream<i32> = Stream::empty();
    assert!(stream.is_empty());
    assert_eq!(
        stream.head(),
        Err(CollectionError::empty_container("head", "stream"))
    );
    assert_eq!(
        stream.tail().unwrap_err(),
        CollectionError::empty_container("tail", "stream")
    );
}

#[rstest]
fn test_of_builds_finite_stream_in_order() {
    let stream = Stream::of([1, 2, 3]);
    assert_eq!(stream.head(), Ok(&1));
    assert_eq!(stream.length(), 3);
}

#[rstest]
fn test_cons_defers_tail_until_forced() {
    let forced = Rc::new(Cell::new(false));
    let witness = Rc::clone(&forced);
    let stream = Stream::cons(1, move || {
        witness.set(true);
        Stream::of([2, 3])
    });

    assert_eq!(stream.head(), Ok(&1));
    assert!(!forced.get());

    assert_eq!(stream.tail().unwrap().head(), Ok(&2));
    assert!(forced.get());
}

// =============================================================================
// Unbounded generation
// =============================================================================

#[rstest]
fn test_iterate_generates_successors_lazily() {
    let naturals = Stream::iterate(1, |value| value + 1);
    let first: Vec<i32> = naturals.take(3).iterator().collect();
    assert_eq!(first, vec![1, 2, 3]);
}

#[rstest]
fn test_take_does_not_force_beyond_requested_elements() {
    let generated = Rc::new(Cell::new(0));
    let witness = Rc::clone(&generated);
    let counted = Stream::iterate(1, move |value| {
        witness.set(witness.get() + 1);
        value + 1
    });

    let first: Vec<i32> = counted.take(3).iterator().collect();
    assert_eq!(first, vec![1, 2, 3]);
    // Two successors produce elements 2 and 3; element 4 is never computed.
    assert_eq!(generated.get(), 2);
}

#[rstest]
fn test_continually_invokes_supplier_once_per_node() {
    let calls = Rc::new(Cell::new(0));
    let witness = Rc::clone(&calls);
    let supplied = Stream::continually(move || {
        witness.set(witness.get() + 1);
        7
    });

    let first: Vec<i32> = supplied.take(3).iterator().collect();
    assert_eq!(first, vec![7, 7, 7]);
    assert_eq!(calls.get(), 3);
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
fn test_tail_thunk_runs_at_most_once() {
    let invocations = Rc::new(Cell::new(0));
    let witness = Rc::clone(&invocations);
    let stream = Stream::cons(1, move || {
        witness.set(witness.get() + 1);
        Stream::of([2])
    });

    let first = stream.tail().unwrap();
    let second = stream.tail().unwrap();

    assert_eq!(invocations.get(), 1);
    assert!(first.ptr_eq(&second));
}

// =============================================================================
// Combinators stay lazy
// =============================================================================

#[rstest]
fn test_map_is_lazy_past_the_head() {
    let naturals = Stream::iterate(1, |value| value + 1);
    let doubled = naturals.map(|value| value * 2);
    let first: Vec<i32> = doubled.take(4).iterator().collect();
    assert_eq!(first, vec![2, 4, 6, 8]);
}

#[rstest]
fn test_filter_advances_to_first_match() {
    let naturals = Stream::iterate(1, |value| value + 1);
    let multiples = naturals.filter(|value| value % 3 == 0);
    assert_eq!(multiples.head(), Ok(&3));

    let first: Vec<i32> = multiples.take(3).iterator().collect();
    assert_eq!(first, vec![3, 6, 9]);
}

#[rstest]
fn test_filter_not_drops_matches() {
    let naturals = Stream::iterate(1, |value| value + 1);
    let rest: Vec<i32> = naturals
        .filter_not(|value| value % 3 == 0)
        .take(4)
        .iterator()
        .collect();
    assert_eq!(rest, vec![1, 2, 4, 5]);
}

#[rstest]
fn test_take_zero_is_empty() {
    let naturals = Stream::iterate(1, |value| value + 1);
    assert!(naturals.take(0).is_empty());
}

#[rstest]
fn test_take_beyond_finite_stream_stops_at_the_end() {
    let stream = Stream::of([1, 2]);
    let elements: Vec<i32> = stream.take(10).iterator().collect();
    assert_eq!(elements, vec![1, 2]);
}

// =============================================================================
// Traversal contract
// =============================================================================

#[rstest]
fn test_fold_drains_a_finite_stream() {
    let total = Stream::of([1, 2, 3, 4]).fold(0, |sum, element| sum + element);
    assert_eq!(total, 10);
}

#[rstest]
fn test_exists_short_circuits_on_unbounded_streams() {
    let naturals = Stream::iterate(1, |value| value + 1);
    assert!(naturals.exists(|value| *value > 100));
}

#[rstest]
fn test_reduce_on_empty_stream_fails() {
    let stream: Stream<i32> = Stream::empty();
    assert_eq!(
        stream.reduce(|left, right| left + right),
        Err(CollectionError::empty_container("reduce", "stream"))
    );
}

#[rstest]
fn test_equals_compares_realized_sequences() {
    assert!(Stream::of([1, 2, 3]).equals(&Stream::of([1, 2, 3])));
    assert!(Stream::of([1, 2, 3]).equals(&List::of([1, 2, 3])));
    assert!(!Stream::of([1, 2]).equals(&Stream::of([1, 2, 3])));
}

#[rstest]
fn test_collect_to_list() {
    let list = Stream::iterate(1, |value| value + 1)
        .take(3)
        .collect(Collectors::to_list());
    assert!(list.equals(&List::of([1, 2, 3])));
}
