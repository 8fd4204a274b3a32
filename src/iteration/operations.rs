//! Higher-order operations built on [`Collection::each`].
//!
//! None of these functions mutate their input. Operations that produce a
//! new sequence clone the selected elements into a fresh `Vec`.

use super::collection::Collection;
use super::record::Record;
use super::truthy::Truthy;

/// Returns the value unchanged.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::{identity, map};
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(map(&[1, 2, 3], |value| identity(*value)), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Calls `iterator(value, key, collection)` for every element.
///
/// Sequences pass their index as the key, mappings pass a reference to the
/// entry's key.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::each;
///
/// let mut visited = Vec::new();
/// each(&vec!['a', 'b'], |value, index, _| visited.push((index, *value)));
/// assert_eq!(visited, vec![(0, 'a'), (1, 'b')]);
/// ```
#[inline]
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C),
{
    collection.each(iterator);
}

/// Returns a new `Vec` holding `iterator(value)` for every element, in
/// traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::map;
///
/// let doubled = map(&vec![1, 2, 3], |value| value * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<C, B, F>(collection: &C, mut iterator: F) -> Vec<B>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> B,
{
    let mut mapped = Vec::with_capacity(collection.size());
    collection.each(|value, _, _| mapped.push(iterator(value)));
    mapped
}

/// Returns the elements for which `predicate` holds, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::filter;
///
/// let evens = filter(&vec![1, 2, 3, 4], |value| value % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<C, F>(collection: &C, mut predicate: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(&C::Value) -> bool,
{
    let mut filtered = Vec::new();
    collection.each(|value, _, _| {
        if predicate(value) {
            filtered.push(value.clone());
        }
    });
    filtered
}

/// Returns the elements for which `predicate` does not hold.
///
/// The complement of [`filter`].
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::reject;
///
/// let odds = reject(&vec![1, 2, 3, 4], |value| value % 2 == 0);
/// assert_eq!(odds, vec![1, 3]);
/// ```
pub fn reject<C, F>(collection: &C, mut predicate: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(&C::Value) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Extracts the property called `key` from every element.
///
/// Elements lacking the property contribute `None`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::iteration::pluck;
///
/// let people: Vec<HashMap<String, u32>> = vec![
///     [("age".to_string(), 30)].into_iter().collect(),
///     HashMap::new(),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(30), None]);
/// ```
pub fn pluck<C>(collection: &C, key: &str) -> Vec<Option<<C::Value as Record>::Property>>
where
    C: Collection + ?Sized,
    C::Value: Record,
    <C::Value as Record>::Property: Clone,
{
    map(collection, |item| item.property(key).cloned())
}

/// Folds the collection from left to right, starting from `accumulator`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::reduce;
///
/// let sum = reduce(&vec![1, 2, 3], |total, value| total + value, 10);
/// assert_eq!(sum, 16);
/// ```
pub fn reduce<C, B, F>(collection: &C, mut iterator: F, accumulator: B) -> B
where
    C: Collection + ?Sized,
    F: FnMut(B, &C::Value) -> B,
{
    let mut accumulator = Some(accumulator);
    collection.each(|value, _, _| {
        accumulator = accumulator.take().map(|current| iterator(current, value));
    });
    accumulator.unwrap_or_else(|| unreachable!("accumulator is restored after every step"))
}

/// Folds the collection without a seed.
///
/// The first visited element becomes the accumulator and is not passed to
/// `iterator`. Returns `None` for an empty collection; a single element is
/// returned as-is without calling `iterator`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::reduce_first;
///
/// assert_eq!(reduce_first(&vec![1, 2, 3], |total, value| total + value), Some(6));
/// assert_eq!(reduce_first(&Vec::<i32>::new(), |total, value| total + value), None);
/// ```
pub fn reduce_first<C, F>(collection: &C, mut iterator: F) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &C::Value) -> C::Value,
{
    let mut accumulator: Option<C::Value> = None;
    collection.each(|value, _, _| {
        accumulator = Some(match accumulator.take() {
            None => value.clone(),
            Some(current) => iterator(current, value),
        });
    });
    accumulator
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::index_of;
///
/// assert_eq!(index_of(&[4, 5, 6, 5], &5), Some(1));
/// assert_eq!(index_of(&[4, 5, 6], &7), None);
/// ```
pub fn index_of<T: PartialEq>(array: &[T], target: &T) -> Option<usize> {
    let mut result = None;
    array.each(|item, index, _| {
        if result.is_none() && item == target {
            result = Some(index);
        }
    });
    result
}

/// Returns `true` if some element equals `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::contains;
///
/// assert!(contains(&vec!["a", "b"], &"b"));
/// assert!(!contains(&vec!["a", "b"], &"c"));
/// ```
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    reduce(
        collection,
        |was_found, item| was_found || item == target,
        false,
    )
}

/// Returns `true` if every element satisfies `predicate`.
///
/// An empty collection satisfies any predicate. Once an element fails,
/// `predicate` is not called again.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::every;
///
/// assert!(every(&vec![2, 4], |value| value % 2 == 0));
/// assert!(!every(&vec![2, 3, 4], |value| value % 2 == 0));
/// ```
pub fn every<C, F>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> bool,
{
    reduce(
        collection,
        |still_true, item| still_true && predicate(item),
        true,
    )
}

/// Returns `true` if every element is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::every_truthy;
///
/// assert!(every_truthy(&vec![1, 2, 3]));
/// assert!(!every_truthy(&vec![1, 0, 3]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Returns `true` if any element satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::some;
///
/// assert!(some(&vec![1, 2, 3], |value| *value > 2));
/// assert!(!some(&Vec::<i32>::new(), |value| *value > 2));
/// ```
pub fn some<C, F>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> bool,
{
    let mut any_true = false;
    collection.each(|value, _, _| {
        if !any_true && predicate(value) {
            any_true = true;
        }
    });
    any_true
}

/// Returns `true` if any element is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::some_truthy;
///
/// assert!(some_truthy(&vec!["", "x"]));
/// assert!(!some_truthy(&vec!["", ""]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    some(collection, Truthy::is_truthy)
}
