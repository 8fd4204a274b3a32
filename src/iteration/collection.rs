//! The `Collection` trait - the single traversal primitive.
//!
//! Every operation in this crate walks its input through
//! [`Collection::each`]. Sequences are visited in index order and report
//! their index as the key; mappings are visited in the host map's own
//! enumeration order and report a reference to the key.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// A type whose elements can be visited one by one.
///
/// # Laws
///
/// Implementations must satisfy:
///
/// - **Size**: `each` invokes the iterator exactly `size()` times.
/// - **Order**: sequences are visited in ascending index order.
///
/// # Examples
///
/// ```rust
/// use underbar::iteration::Collection;
///
/// let values = vec!["a", "b", "c"];
/// let mut seen = Vec::new();
/// values.each(|value, index, _| seen.push((index, *value)));
/// assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
/// ```
pub trait Collection {
    /// The element type.
    type Value;

    /// The position reported alongside each element: an index for
    /// sequences, a key reference for mappings.
    type Key<'a>
    where
        Self: 'a;

    /// Calls `iterator(value, key, collection)` once per element.
    fn each<'a, F>(&'a self, iterator: F)
    where
        F: FnMut(&'a Self::Value, Self::Key<'a>, &'a Self);

    /// Returns the number of elements `each` will visit.
    fn size(&self) -> usize;
}

impl<T> Collection for [T] {
    type Value = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Value = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        self.as_slice()
            .each(|value, index, _| iterator(value, index, self));
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Value = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        self.as_slice()
            .each(|value, index, _| iterator(value, index, self));
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Value = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Value = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a V, &'a K, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Value = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a V, &'a K, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}
