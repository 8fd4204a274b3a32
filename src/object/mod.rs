//! Object composition: merging key-value mappings.
//!
//! - [`extend`]: copy every entry of the sources into the target, later
//!   sources winning
//! - [`defaults`]: copy only entries whose key the target lacks, earlier
//!   sources winning
//!
//! Sources are walked with [`Collection::each`]; they are never modified.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::object::{defaults, extend};
//!
//! let mut settings: BTreeMap<&str, u32> = [("port", 8080)].into_iter().collect();
//! let overrides: BTreeMap<&str, u32> = [("port", 9090)].into_iter().collect();
//! let fallbacks: BTreeMap<&str, u32> = [("port", 80), ("workers", 4)].into_iter().collect();
//!
//! extend(&mut settings, &[&overrides]);
//! defaults(&mut settings, &[&fallbacks]);
//!
//! assert_eq!(settings["port"], 9090);
//! assert_eq!(settings["workers"], 4);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::iteration::Collection;

/// A collection of uniquely keyed entries that can be written to.
pub trait Mapping: Collection {
    /// The key type.
    type Name: Clone;

    /// Recovers the key from the position reported by [`Collection::each`].
    fn key_of<'a>(key: Self::Key<'a>) -> &'a Self::Name
    where
        Self: 'a;

    /// Returns whether an entry for `key` exists.
    fn has_key(&self, key: &Self::Name) -> bool;

    /// Inserts or replaces the entry for `key`.
    fn insert_entry(&mut self, key: Self::Name, value: Self::Value);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Name = K;

    #[inline]
    fn key_of<'a>(key: &'a K) -> &'a K
    where
        Self: 'a,
    {
        key
    }

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord + Clone,
{
    type Name = K;

    #[inline]
    fn key_of<'a>(key: &'a K) -> &'a K
    where
        Self: 'a,
    {
        key
    }

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Copies every entry of every source into `target` and returns `target`.
///
/// Sources are applied in order, so a later source overwrites both earlier
/// sources and the target's own entries.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::object::extend;
///
/// let mut target: HashMap<String, i32> = HashMap::new();
/// let first: HashMap<String, i32> = [("a".into(), 1), ("b".into(), 1)].into_iter().collect();
/// let second: HashMap<String, i32> = [("b".into(), 2)].into_iter().collect();
///
/// let merged = extend(&mut target, &[&first, &second]);
/// assert_eq!(merged["a"], 1);
/// assert_eq!(merged["b"], 2);
/// ```
pub fn extend<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Value: Clone,
{
    for source in sources {
        source.each(|value, key, _| {
            target.insert_entry(M::key_of(key).clone(), value.clone());
        });
    }
    target
}

/// Copies entries of the sources into `target` only for keys `target` does
/// not have yet, and returns `target`.
///
/// Existing entries are never overwritten; among the sources, the first to
/// supply a missing key wins.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::object::defaults;
///
/// let mut options: BTreeMap<&str, &str> = [("color", "red")].into_iter().collect();
/// let first: BTreeMap<&str, &str> = [("color", "blue"), ("size", "L")].into_iter().collect();
/// let second: BTreeMap<&str, &str> = [("size", "S"), ("fit", "slim")].into_iter().collect();
///
/// defaults(&mut options, &[&first, &second]);
/// assert_eq!(options["color"], "red");
/// assert_eq!(options["size"], "L");
/// assert_eq!(options["fit"], "slim");
/// ```
pub fn defaults<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Value: Clone,
{
    for source in sources {
        source.each(|value, key, _| {
            let name = M::key_of(key);
            if !target.has_key(name) {
                target.insert_entry(name.clone(), value.clone());
            }
        });
    }
    target
}
