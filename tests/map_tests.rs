//! Unit tests for Map.
//!
//! These tests verify the insertion-ordered map semantics: key coercion,
//! head/tail over insertion order, the merge conflict rule, and the
//! identity-preserving no-op paths.

use immutars::prelude::*;
use rstest::rstest;

// =============================================================================
// put / get
// =============================================================================

#[rstest]
fn test_put_and_get() {
    let map = Map::empty().put("immutability", "is awesome");

    assert_eq!(map.get("immutability"), Some(&"is awesome"));
    assert_eq!(map.get("wrong-key"), None);
}

#[rstest]
fn test_put_does_not_modify_original() {
    let map = Map::from_pairs([("immutability", "is awesome")]);
    let extended = map.put("crates", "are better");

    assert!(!extended.ptr_eq(&map));
    assert_eq!(map.get("crates"), None);
    assert_eq!(extended.get("crates"), Some(&"are better"));
}

#[rstest]
fn test_put_overwrites_in_place() {
    let map = Map::from_pairs([("a", 1), ("b", 2)]).put("a", 10);
    assert_eq!(map.get("a"), Some(&10));
    assert_eq!(map.head(), Ok(("a".to_string(), 10)));
    assert_eq!(map.length(), 2);
}

#[rstest]
fn test_numeric_keys_are_coerced_to_strings() {
    let map = Map::empty().put(42, "pear");
    assert_eq!(map.get("42"), Some(&"pear"));
    assert_eq!(map.get(42), Some(&"pear"));
    assert!(map.contains_key("42"));
}

// =============================================================================
// remove
// =============================================================================

#[rstest]
fn test_remove_present_key() {
    let map = Map::from_pairs([("some", "value")]);
    assert_eq!(map.remove("some").get("some"), None);
    assert!(map.remove("some").is_empty());
}

#[rstest]
fn test_remove_absent_key_returns_receiver_identity() {
    let map = Map::from_pairs([("some", "value")]);
    assert!(map.remove("not-existing-key").ptr_eq(&map));
    assert!(!map.remove("some").ptr_eq(&map));
}

// =============================================================================
// head / tail (insertion order)
// =============================================================================

#[rstest]
fn test_head_is_first_inserted_entry() {
    let map = Map::from_pairs([("a", "b"), ("c", "d"), ("e", "f")]);
    assert_eq!(map.head(), Ok(("a".to_string(), "b")));

    let reordered = Map::from_pairs([("e", "f"), ("a", "b")]);
    assert_eq!(reordered.head(), Ok(("e".to_string(), "f")));
}

#[rstest]
fn test_tail_is_last_inserted_entry() {
    let map = Map::from_pairs([("a", "b"), ("c", "d"), ("e", "f")]);
    assert_eq!(map.tail(), Ok(("e".to_string(), "f")));

    let reordered = Map::from_pairs([("e", "f"), ("a", "b")]);
    assert_eq!(reordered.tail(), Ok(("a".to_string(), "b")));
}

#[rstest]
fn test_head_and_tail_of_empty_map_fail() {
    let map: Map<i32> = Map::empty();
    assert_eq!(
        map.head(),
        Err(CollectionError::empty_container("head", "map"))
    );
    assert_eq!(
        map.tail(),
        Err(CollectionError::empty_container("tail", "map"))
    );
}

// =============================================================================
// take
// =============================================================================

#[rstest]
fn test_take_keeps_first_insertion_ordered_entries() {
    let map = Map::from_pairs([("a", "apple"), ("b", "banana"), ("42", "pear"), ("d", "orange")]);

    assert!(map.take(2).equals_map(&Map::from_pairs([("a", "apple"), ("b", "banana")])));
    assert!(map.take(1).equals_map(&Map::from_pairs([("a", "apple")])));
    assert!(map.take(4).equals_map(&map));
}

#[rstest]
fn test_take_beyond_length_returns_receiver_identity() {
    let map = Map::from_pairs([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    assert!(map.take(5).ptr_eq(&map));
    assert!(map.take(4).ptr_eq(&map));
    assert!(!map.take(3).ptr_eq(&map));
}

// =============================================================================
// filter / map / mapKeys / mapValues
// =============================================================================

#[rstest]
fn test_filter_by_value() {
    let map = Map::from_pairs([("a", "apple"), ("b", "banana"), ("42", "pear"), ("d", "orange")]);
    let filtered = map.filter(|(_, value)| *value == "apple");
    assert!(filtered.equals_map(&Map::from_pairs([("a", "apple")])));
}

#[rstest]
fn test_filter_by_numeric_key() {
    let map = Map::from_pairs([("a", "apple"), ("42", "pear")]);
    let numeric = map.filter(|(key, _)| key.parse::<i64>().is_ok());
    assert!(numeric.equals_map(&Map::from_pairs([("42", "pear")])));
}

#[rstest]
fn test_filter_always_true_still_allocates_fresh_storage() {
    let map = Map::from_pairs([("a", "apple")]);
    assert!(!map.filter(|_| true).ptr_eq(&map));
}

#[rstest]
fn test_map_transforms_entries() {
    let map = Map::from_pairs([("a", "b"), ("c", "d")]);
    let upper = map.map(|(key, value)| (key.to_uppercase(), value.to_uppercase()));
    assert!(upper.equals_map(&Map::from_pairs([
        ("A", "B".to_string()),
        ("C", "D".to_string()),
    ])));
}

#[rstest]
fn test_map_keys_preserves_values_and_order() {
    let map = Map::from_pairs([("a", "b"), ("c", "d")]);
    let upper = map.map_keys(str::to_uppercase);
    assert!(upper.equals_map(&Map::from_pairs([("A", "b"), ("C", "d")])));
}

#[rstest]
fn test_map_keys_collision_is_last_write_wins() {
    let map = Map::from_pairs([("a", 1), ("A", 2)]);
    let folded = map.map_keys(str::to_lowercase);
    assert_eq!(folded.length(), 1);
    assert_eq!(folded.get("a"), Some(&2));
}

#[rstest]
fn test_map_values_preserves_keys_and_order() {
    let map = Map::from_pairs([("a", 1), ("c", 2)]);
    let doubled = map.map_values(|value| value * 2);
    assert!(doubled.equals_map(&Map::from_pairs([("a", 2), ("c", 4)])));
    assert_eq!(doubled.head(), Ok(("a".to_string(), 2)));
}

// =============================================================================
// contains
// =============================================================================

#[rstest]
fn test_contains_matches_key_and_value() {
    let map = Map::from_pairs([("a", "b"), ("c", "d")]);
    assert!(map.contains(&("a".to_string(), "b")));
    assert!(!map.contains(&("a".to_string(), "c")));
}

#[rstest]
fn test_contains_key() {
    let map = Map::from_pairs([("a", "b"), ("c", "d")]);
    assert!(map.contains_key("a"));
    assert!(!map.contains_key("b"));
}

#[rstest]
fn test_contains_value_uses_structural_equality() {
    let map = Map::from_pairs([("a", vec![1, 2]), ("c", vec![3])]);
    assert!(map.contains_value(&vec![3]));
    assert!(!map.contains_value(&vec![2, 1]));
}

// =============================================================================
// merge
// =============================================================================

#[rstest]
fn test_merge_unions_disjoint_maps() {
    let merged = Map::from_pairs([("a", "b")]).merge(&Map::from_pairs([("c", "d")]));
    assert!(merged.equals_map(&Map::from_pairs([("a", "b"), ("c", "d")])));
}

#[rstest]
fn test_merge_receiver_wins_on_key_collision() {
    let merged = Map::from_pairs([("a", "b")])
        .merge(&Map::from_pairs([("a", "conflict"), ("c", "d")]));
    assert!(merged.equals_map(&Map::from_pairs([("a", "b"), ("c", "d")])));
}

#[rstest]
fn test_merge_with_empty_sides_preserves_identity() {
    let map = Map::from_pairs([("a", "b"), ("c", "d")]);
    assert!(map.merge(&Map::empty()).ptr_eq(&map));
    assert!(Map::empty().merge(&map).ptr_eq(&map));
}

// =============================================================================
// keys / values / collect
// =============================================================================

#[rstest]
fn test_values_follow_insertion_order() {
    let map = Map::from_pairs([("a", "b"), ("c", "d")]);
    assert_eq!(map.values(), vec!["b", "d"]);
}

#[rstest]
fn test_keys_build_a_set() {
    let map = Map::from_pairs([("a", "1"), ("b", "2"), ("c", "3")]);
    let keys = map.keys();
    assert!(keys.equals(&Set::of([
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
    ])));
}

#[rstest]
fn test_collect_gathers_values_into_a_list() {
    let list = Map::from_pairs([("a", "b"), ("c", "d")]).collect(Collectors::to_list());
    assert!(list.equals(&List::of(["b", "d"])));

    let empty = Map::<&str>::empty().collect(Collectors::to_list());
    assert!(empty.equals(&List::empty()));
}

// =============================================================================
// Immutability and equality
// =============================================================================

#[rstest]
fn test_length_grows_only_in_the_new_value() {
    let map = Map::from_pairs([("immutability", "is awesome")]);
    assert_eq!(map.length(), 1);
    assert_eq!(map.put("php", "is awesome").length(), 2);
    assert_eq!(map.length(), 1);
}

#[rstest]
fn test_is_empty_transitions() {
    assert!(Map::<i32>::empty().is_empty());
    assert!(!Map::empty().put("some", 1).is_empty());
    assert!(Map::from_pairs([("some", 1)]).remove("some").is_empty());
}

#[rstest]
fn test_traversable_iteration_yields_entries() {
    let map = Map::from_pairs([("a", 1), ("b", 2)]);
    let entries: Vec<(String, i32)> = map.iterator().collect();
    assert_eq!(
        entries,
        vec![("a".to_string(), 1), ("b".to_string(), 2)]
    );
}
