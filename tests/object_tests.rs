#![cfg(feature = "object")]
//! Integration tests for object composition.
//!
//! Tests cover:
//! - `extend` precedence across several sources
//! - `defaults` precedence across several sources
//! - sources staying untouched
//! - both hash and ordered maps

use std::collections::{BTreeMap, HashMap};

use rstest::rstest;
use underbar::object::{Mapping, defaults, extend};

fn settings(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[rstest]
fn extend_later_sources_win() {
    let mut target = settings(&[("host", "localhost")]);
    let first = settings(&[("host", "example.org"), ("port", "80")]);
    let second = settings(&[("port", "8080")]);

    extend(&mut target, &[&first, &second]);

    assert_eq!(target, settings(&[("host", "example.org"), ("port", "8080")]));
}

#[rstest]
fn extend_returns_the_target_for_chaining() {
    let mut target: BTreeMap<u8, u8> = BTreeMap::new();
    let source: BTreeMap<u8, u8> = [(1, 10)].into_iter().collect();

    extend(&mut target, &[&source]).insert(2, 20);

    assert_eq!(target.len(), 2);
    assert_eq!(target[&2], 20);
}

#[rstest]
fn defaults_earlier_sources_win() {
    let mut target = settings(&[("color", "red")]);
    let first = settings(&[("size", "large")]);
    let second = settings(&[("size", "small"), ("color", "blue"), ("fit", "slim")]);

    defaults(&mut target, &[&first, &second]);

    assert_eq!(
        target,
        settings(&[("color", "red"), ("size", "large"), ("fit", "slim")])
    );
}

#[rstest]
fn sources_are_never_modified() {
    let mut target = settings(&[]);
    let source = settings(&[("a", "1")]);
    let snapshot = source.clone();

    extend(&mut target, &[&source]);
    defaults(&mut target, &[&source]);

    assert_eq!(source, snapshot);
}

#[rstest]
#[case(&[], &[("a", "1")], &[("a", "1")])]
#[case(&[("a", "1")], &[], &[("a", "1")])]
#[case(&[("a", "1")], &[("a", "2")], &[("a", "1")])]
fn defaults_table(
    #[case] initial: &[(&str, &str)],
    #[case] fallback: &[(&str, &str)],
    #[case] expected: &[(&str, &str)],
) {
    let mut target = settings(initial);
    defaults(&mut target, &[&settings(fallback)]);
    assert_eq!(target, settings(expected));
}

#[rstest]
fn mapping_reports_keys() {
    let map: BTreeMap<&str, i32> = [("one", 1)].into_iter().collect();
    assert!(map.has_key(&"one"));
    assert!(!map.has_key(&"two"));
}
