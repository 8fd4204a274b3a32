//! Set-like operations on sequences, using `==` for membership.
//!
//! Both operations keep the order of their first argument and never
//! deduplicate it.

use crate::iteration::{contains, filter, reject, some};

/// Returns the elements of `first` that also occur in `second`.
///
/// Each element of `first` appears once per occurrence in `first`,
/// regardless of how often it occurs in `second`.
///
/// # Examples
///
/// ```rust
/// use underbar::array::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// assert_eq!(intersection(&[2, 2, 5], &[2, 2, 2]), vec![2, 2]);
/// ```
pub fn intersection<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    filter(first, |item| contains(second, item))
}

/// Returns the elements of `array` that occur in none of `others`.
///
/// # Examples
///
/// ```rust
/// use underbar::array::difference;
///
/// assert_eq!(difference(&[1, 2, 3], &[&[2, 3, 4][..]]), vec![1]);
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[&[5, 2, 10][..], &[1]]), vec![3, 4]);
/// ```
pub fn difference<T>(array: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    reject(array, |item| some(others, |other| contains(*other, item)))
}
