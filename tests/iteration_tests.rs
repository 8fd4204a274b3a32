#![cfg(feature = "iteration")]
//! Integration tests for the iteration core.
//!
//! Tests cover:
//! - `each` over sequences and mappings
//! - map / filter / reject / pluck
//! - seeded and unseeded reduction
//! - membership and quantifier queries

use std::collections::{BTreeMap, HashMap, VecDeque};

use rstest::rstest;
use underbar::iteration::{
    Collection, contains, each, every, every_truthy, filter, identity, index_of, map,
    pluck, reduce, reduce_first, reject, some, some_truthy,
};

// =============================================================================
// each
// =============================================================================

#[rstest]
fn each_visits_sequence_in_index_order() {
    let letters = vec!['a', 'b', 'c'];
    let mut visited = Vec::new();
    each(&letters, |letter, index, whole| {
        visited.push((*letter, index, whole.len()));
    });
    assert_eq!(visited, vec![('a', 0, 3), ('b', 1, 3), ('c', 2, 3)]);
}

#[rstest]
fn each_visits_mapping_entries_with_keys() {
    let ages: BTreeMap<&str, u32> = [("ada", 36), ("alan", 41)].into_iter().collect();
    let mut visited = Vec::new();
    each(&ages, |age, name, _| visited.push(format!("{name}:{age}")));
    assert_eq!(visited, vec!["ada:36", "alan:41"]);
}

#[rstest]
fn each_on_hash_map_visits_every_entry_once() {
    let counts: HashMap<String, usize> = (0..50).map(|index| (index.to_string(), index)).collect();
    let mut total = 0;
    let mut visits = 0;
    counts.each(|count, key, _| {
        assert_eq!(key, &count.to_string());
        total += count;
        visits += 1;
    });
    assert_eq!(visits, counts.size());
    assert_eq!(total, (0..50).sum::<usize>());
}

#[rstest]
fn each_on_empty_collection_never_calls() {
    let empty: Vec<i32> = Vec::new();
    let mut called = false;
    each(&empty, |_, _, _| called = true);
    assert!(!called);
}

#[rstest]
fn each_on_deque_and_array() {
    let deque: VecDeque<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(map(&deque, |value| value * 10), vec![10, 20, 30]);

    let array = [4, 5];
    assert_eq!(map(&array, |value| value + 1), vec![5, 6]);
}

// =============================================================================
// map / filter / reject / pluck
// =============================================================================

#[rstest]
fn map_leaves_input_untouched() {
    let numbers = vec![1, 2, 3];
    let doubled = map(&numbers, |value| value * 2);
    assert_eq!(doubled, vec![2, 4, 6]);
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[rstest]
fn map_over_mapping_collects_values_in_key_order() {
    let prices: BTreeMap<&str, f64> = [("tea", 2.5), ("coffee", 3.0)].into_iter().collect();
    assert_eq!(map(&prices, |price| price * 2.0), vec![6.0, 5.0]);
}

#[rstest]
fn filter_and_reject_partition_the_input() {
    let numbers: Vec<i32> = (1..=10).collect();
    let even = filter(&numbers, |value| value % 2 == 0);
    let odd = reject(&numbers, |value| value % 2 == 0);
    assert_eq!(even, vec![2, 4, 6, 8, 10]);
    assert_eq!(odd, vec![1, 3, 5, 7, 9]);
}

#[rstest]
fn pluck_reports_missing_properties_as_none() {
    let rows: Vec<BTreeMap<String, u32>> = vec![
        [("age".to_string(), 30)].into_iter().collect(),
        BTreeMap::new(),
        [("age".to_string(), 12)].into_iter().collect(),
    ];
    assert_eq!(pluck(&rows, "age"), vec![Some(30), None, Some(12)]);
}

// =============================================================================
// reduce
// =============================================================================

#[rstest]
fn reduce_with_seed_folds_left() {
    let digits = vec![1, 2, 3];
    let number = reduce(&digits, |number, digit| number * 10 + digit, 0);
    assert_eq!(number, 123);
}

#[rstest]
fn reduce_with_seed_on_empty_returns_seed() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(reduce(&empty, |sum, value| sum + value, 7), 7);
}

#[rstest]
fn reduce_first_uses_first_element_as_seed() {
    let calls = std::cell::Cell::new(0);
    let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let joined = reduce_first(&words, |joined, word| {
        calls.set(calls.get() + 1);
        format!("{joined}-{word}")
    });
    assert_eq!(joined.as_deref(), Some("a-b-c"));
    assert_eq!(calls.get(), 2);
}

#[rstest]
#[case(vec![], None)]
#[case(vec![9], Some(9))]
#[case(vec![4, 9, 2], Some(9))]
fn reduce_first_boundaries(#[case] numbers: Vec<i32>, #[case] expected: Option<i32>) {
    assert_eq!(reduce_first(&numbers, |best, value| best.max(*value)), expected);
}

#[rstest]
fn reduce_can_build_a_different_type() {
    let words = vec!["apple", "avocado", "banana"];
    let by_initial = reduce(
        &words,
        |mut groups: BTreeMap<char, Vec<&str>>, word| {
            let initial = word.chars().next().unwrap_or('?');
            groups.entry(initial).or_default().push(*word);
            groups
        },
        BTreeMap::new(),
    );
    assert_eq!(by_initial[&'a'], vec!["apple", "avocado"]);
    assert_eq!(by_initial[&'b'], vec!["banana"]);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 2], 2, Some(1))]
#[case(&[1, 2, 3], 4, None)]
#[case(&[], 1, None)]
fn index_of_finds_first_occurrence(
    #[case] array: &[i32],
    #[case] target: i32,
    #[case] expected: Option<usize>,
) {
    assert_eq!(index_of(array, &target), expected);
}

#[rstest]
fn contains_uses_strict_equality() {
    let words = vec!["5".to_string()];
    assert!(contains(&words, &"5".to_string()));
    let numbers = vec![5];
    assert!(contains(&numbers, &5));
    assert!(!contains(&numbers, &6));
}

#[rstest]
fn contains_searches_mapping_values_not_keys() {
    let labels: BTreeMap<&str, &str> = [("x", "y")].into_iter().collect();
    assert!(contains(&labels, &"y"));
    assert!(!contains(&labels, &"x"));
}

#[rstest]
fn every_and_some_on_empty_collections() {
    let empty: Vec<i32> = Vec::new();
    assert!(every(&empty, |_| false));
    assert!(!some(&empty, |_| true));
}

#[rstest]
fn every_and_some_with_predicates() {
    let numbers = vec![2, 4, 5];
    assert!(!every(&numbers, |value| value % 2 == 0));
    assert!(some(&numbers, |value| value % 2 == 1));
    assert!(every(&numbers, |value| *value > 0));
    assert!(!some(&numbers, |value| *value > 5));
}

#[rstest]
fn truthy_defaults_follow_truthiness() {
    assert!(every_truthy(&vec![1, 2, 3]));
    assert!(!every_truthy(&vec![1, 0, 3]));
    assert!(some_truthy(&vec!["", "x"]));
    assert!(!some_truthy(&vec![None::<i32>, None]));
    assert!(!some_truthy(&vec![0.0, f64::NAN]));
}

#[rstest]
fn identity_returns_its_argument() {
    assert_eq!(identity(42), 42);
    assert_eq!(map(&vec![1, 2], |value| identity(*value)), vec![1, 2]);
}
