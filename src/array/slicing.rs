//! Leading and trailing element access.
//!
//! The `_n` variants borrow a sub-slice instead of allocating. Asking for
//! more elements than the array holds yields the whole array.

/// Returns the first element, if any.
///
/// # Examples
///
/// ```rust
/// use underbar::array::first;
///
/// assert_eq!(first(&[3, 4, 5]), Some(&3));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// Returns the first `n` elements, or the whole array if it is shorter.
///
/// # Examples
///
/// ```rust
/// use underbar::array::first_n;
///
/// assert_eq!(first_n(&[3, 4, 5], 2), &[3, 4]);
/// assert_eq!(first_n(&[3, 4, 5], 10), &[3, 4, 5]);
/// assert!(first_n(&[3, 4, 5], 0).is_empty());
/// ```
#[inline]
pub fn first_n<T>(array: &[T], n: usize) -> &[T] {
    &array[..n.min(array.len())]
}

/// Returns the last element, if any.
///
/// # Examples
///
/// ```rust
/// use underbar::array::last;
///
/// assert_eq!(last(&[3, 4, 5]), Some(&5));
/// ```
#[inline]
pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

/// Returns the last `n` elements, or the whole array if it is shorter.
///
/// # Examples
///
/// ```rust
/// use underbar::array::last_n;
///
/// assert_eq!(last_n(&[3, 4, 5], 2), &[4, 5]);
/// assert_eq!(last_n(&[3, 4, 5], 10), &[3, 4, 5]);
/// ```
#[inline]
pub fn last_n<T>(array: &[T], n: usize) -> &[T] {
    &array[array.len().saturating_sub(n)..]
}
