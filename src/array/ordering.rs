//! Sorting, deduplication and shuffling.
//!
//! Every function here works on a private copy of its input; the caller's
//! collection is never reordered.
//!
//! Comparators are explicit: [`uniq`] uses the element type's [`Ord`]
//! (numeric for numbers, lexicographic for strings) and [`sort_by`] with a
//! property name uses the property type's [`PartialOrd`].

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::iteration::{Collection, Record, map};

/// Returns a sorted copy of `array` with duplicates removed.
///
/// # Examples
///
/// ```rust
/// use underbar::array::uniq;
///
/// assert_eq!(uniq(&[3, 1, 2, 3, 1]), vec![1, 2, 3]);
/// assert_eq!(uniq(&["b", "a", "b"]), vec!["a", "b"]);
/// ```
pub fn uniq<T>(array: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    uniq_by(array, Ord::cmp)
}

/// Returns a copy of `array` sorted by `comparator`, keeping one element
/// of every run the comparator considers equal.
///
/// # Examples
///
/// ```rust
/// use underbar::array::uniq_by;
///
/// let words = ["Apple", "apple", "Banana"];
/// let unique = uniq_by(&words, |left, right| {
///     left.to_lowercase().cmp(&right.to_lowercase())
/// });
/// assert_eq!(unique, vec!["Apple", "Banana"]);
/// ```
pub fn uniq_by<T, F>(array: &[T], mut comparator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = array.to_vec();
    sorted.sort_by(&mut comparator);

    let mut uniqued: Vec<T> = Vec::with_capacity(sorted.len());
    sorted.each(|value, _, _| {
        let is_new = uniqued
            .last()
            .is_none_or(|previous| comparator(previous, value) != Ordering::Equal);
        if is_new {
            uniqued.push(value.clone());
        }
    });
    uniqued
}

/// How [`sort_by`] orders its elements.
pub enum SortBy<'a, T> {
    /// Ascending by the named property. Elements missing the property come
    /// first. Properties that do not compare equal to themselves, such as
    /// `NaN`, come last and keep their traversal order.
    Property(&'a str),
    /// By a comparison function.
    Comparator(&'a dyn Fn(&T, &T) -> Ordering),
}

/// Returns the elements of `collection` sorted by `criterion`.
///
/// The sort is stable: elements that compare equal keep their traversal
/// order.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::array::{SortBy, sort_by};
///
/// let person = |name: &str, age: u32| -> BTreeMap<String, String> {
///     [("name".to_string(), name.to_string()), ("age".to_string(), format!("{age:03}"))]
///         .into_iter()
///         .collect()
/// };
/// let people = vec![person("ada", 36), person("bob", 25), person("cy", 36)];
///
/// let sorted = sort_by(&people, SortBy::Property("age"));
/// let names: Vec<&str> = sorted.iter().map(|entry| entry["name"].as_str()).collect();
/// assert_eq!(names, vec!["bob", "ada", "cy"]);
/// ```
pub fn sort_by<C>(collection: &C, criterion: SortBy<'_, C::Value>) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Record + Clone,
    <C::Value as Record>::Property: PartialOrd,
{
    match criterion {
        SortBy::Property(name) => sort_with(collection, |left, right| {
            compare_properties(left.property(name), right.property(name))
        }),
        SortBy::Comparator(comparator) => sort_with(collection, comparator),
    }
}

/// Missing, then self-comparable, then self-incomparable. Only values in
/// the middle group are compared with each other, which keeps the ordering
/// transitive when `PartialOrd` is not total.
fn property_rank<P: PartialOrd>(property: Option<&P>) -> u8 {
    match property {
        None => 0,
        Some(value) if value.partial_cmp(value).is_some() => 1,
        Some(_) => 2,
    }
}

fn compare_properties<P: PartialOrd>(left: Option<&P>, right: Option<&P>) -> Ordering {
    property_rank(left)
        .cmp(&property_rank(right))
        .then_with(|| match (left, right) {
            (Some(left), Some(right)) => left.partial_cmp(right).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        })
}

/// Returns the elements of `collection` stably sorted by `comparator`.
///
/// # Examples
///
/// ```rust
/// use underbar::array::sort_with;
///
/// let sorted = sort_with(&vec![10, 9, 100], |left, right| right.cmp(left));
/// assert_eq!(sorted, vec![100, 10, 9]);
/// ```
pub fn sort_with<C, F>(collection: &C, comparator: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(&C::Value, &C::Value) -> Ordering,
{
    let mut sorted = map(collection, Clone::clone);
    sorted.sort_by(comparator);
    sorted
}

/// Returns a uniformly shuffled copy of `array` using the thread-local
/// random number generator.
///
/// # Examples
///
/// ```rust
/// use underbar::array::shuffle;
///
/// let original = vec![1, 2, 3, 4];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::rng())
}

/// Returns a uniformly shuffled copy of `array` drawing from `rng`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::array::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4, 5], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(array: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = array.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
