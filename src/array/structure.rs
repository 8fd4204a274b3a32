//! Structural combinators: zipping and flattening.

use crate::iteration::{map, reduce};

/// Returns one row per index up to the longest input; row `i` holds the
/// `i`-th element of every input, `None` where an input is too short.
///
/// # Examples
///
/// ```rust
/// use underbar::array::zip;
///
/// let zipped = zip(&[&[1, 2, 3][..], &[10, 20]]);
/// assert_eq!(
///     zipped,
///     vec![
///         vec![Some(1), Some(10)],
///         vec![Some(2), Some(20)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = reduce(arrays, |longest, array| longest.max(array.len()), 0_usize);
    (0..longest)
        .map(|index| map(arrays, |array| array.get(index).cloned()))
        .collect()
}

/// Zips two arrays of possibly different element types.
///
/// The result is as long as the longer input.
///
/// # Examples
///
/// ```rust
/// use underbar::array::zip_pair;
///
/// let zipped = zip_pair(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
/// assert_eq!(zipped[2], (Some('c'), Some(3)));
/// assert_eq!(zipped[3], (Some('d'), None));
/// ```
pub fn zip_pair<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let longest = left.len().max(right.len());
    (0..longest)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

/// One level of a nested structure, as seen by [`flatten`].
pub enum Branch<'a, T: Nestable> {
    /// A sequence whose items are nested structures themselves.
    Sequence(&'a [T]),
    /// A value that is not a sequence.
    Leaf(&'a T::Leaf),
}

/// A recursively nested structure of sequences and leaves.
pub trait Nestable: Sized {
    /// The type of the non-sequence values.
    type Leaf;

    /// Classifies this node as a sequence or a leaf.
    fn branch(&self) -> Branch<'_, Self>;
}

/// A tree of sequences holding leaves of type `T`.
///
/// Usually built with the [`nested!`](crate::nested) macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// A sequence of nested values.
    Sequence(Vec<Nested<T>>),
}

impl<T> Nestable for Nested<T> {
    type Leaf = T;

    #[inline]
    fn branch(&self) -> Branch<'_, Self> {
        match self {
            Self::Leaf(value) => Branch::Leaf(value),
            Self::Sequence(items) => Branch::Sequence(items),
        }
    }
}

/// Builds a `Vec<Nested<_>>` from bracketed literals.
///
/// Each item is either a single token tree (a literal, an identifier or a
/// parenthesized expression), which becomes a [`Nested::Leaf`], or a
/// bracketed list, which becomes a [`Nested::Sequence`].
///
/// # Examples
///
/// ```rust
/// use underbar::array::Nested;
/// use underbar::nested;
///
/// let tree = nested![1, [2, [3]]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Leaf(1),
///         Nested::Sequence(vec![
///             Nested::Leaf(2),
///             Nested::Sequence(vec![Nested::Leaf(3)]),
///         ]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::array::Nested::Sequence($crate::nested![$($inner)*])
    };
    (@item $leaf:expr) => {
        $crate::array::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested!(@item $item)),*]
    };
}

/// Returns every leaf of `nested`, depth first and left to right.
///
/// Nesting depth is limited only by memory; traversal uses an explicit
/// stack rather than recursion.
///
/// # Examples
///
/// ```rust
/// use underbar::array::flatten;
/// use underbar::nested;
///
/// assert_eq!(flatten(&nested![1, [2], [3, [[4]]]]), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T>(nested: &[T]) -> Vec<T::Leaf>
where
    T: Nestable,
    T::Leaf: Clone,
{
    let mut flattened = Vec::new();
    let mut stack = vec![nested.iter()];

    while let Some(frame) = stack.last_mut() {
        match frame.next() {
            None => {
                stack.pop();
            }
            Some(item) => match item.branch() {
                Branch::Leaf(leaf) => flattened.push(leaf.clone()),
                Branch::Sequence(children) => stack.push(children.iter()),
            },
        }
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zip_of_nothing_is_empty() {
        let arrays: [&[u8]; 0] = [];
        assert!(zip(&arrays).is_empty());
    }

    #[rstest]
    fn zip_keeps_length_of_longest_input() {
        let zipped = zip(&[&[1][..], &[], &[7, 8, 9]]);
        assert_eq!(zipped.len(), 3);
        assert_eq!(zipped[0], vec![Some(1), None, Some(7)]);
        assert_eq!(zipped[2], vec![None, None, Some(9)]);
    }

    #[rstest]
    fn flatten_skips_empty_sequences() {
        let tree: Vec<Nested<i32>> = nested![[], [[]], 5, [[], 6]];
        assert_eq!(flatten(&tree), vec![5, 6]);
    }

    #[rstest]
    fn flatten_handles_deep_nesting() {
        let mut tree = Nested::Leaf(0);
        for _ in 0..5_000 {
            tree = Nested::Sequence(vec![tree]);
        }
        let flattened = flatten(std::slice::from_ref(&tree));
        assert_eq!(flattened, vec![0]);
    }
}
