//! Named property lookup, used by `pluck` and property-based sorting.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A value whose properties can be looked up by name.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::iteration::Record;
///
/// let person: HashMap<String, u32> = [("age".to_string(), 40)].into_iter().collect();
/// assert_eq!(person.property("age"), Some(&40));
/// assert_eq!(person.property("height"), None);
/// ```
pub trait Record {
    /// The type of the property values.
    type Property;

    /// Returns the property called `name`, if present.
    fn property(&self, name: &str) -> Option<&Self::Property>;
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    type Property = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Property = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Property = R::Property;

    #[inline]
    fn property(&self, name: &str) -> Option<&Self::Property> {
        (**self).property(name)
    }
}
