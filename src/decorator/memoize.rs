//! Memoizing function decorators.
//!
//! The cache is keyed by the argument value itself (`A: Hash + Eq`), so two
//! argument lists only share an entry when they are structurally equal.
//! There is no stringification step: `5` and `"5"` have different types and
//! can never map to the same entry, and `(1, 2)` is distinct from
//! `"1,2"`.
//!
//! The cache lives as long as the decorator and is never evicted.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::memoize;
//!
//! let square = memoize(|value: u64| value * value);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.cache_len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

#[cfg(feature = "fxhash")]
type CacheHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type CacheHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type CacheHasher = std::collections::hash_map::RandomState;

type Cache<A, R> = HashMap<A, R, CacheHasher>;

/// A function whose results are cached per argument value.
///
/// Created by [`memoize`]. Multiple arguments are passed as a tuple.
/// The wrapped function may call the same `Memoized` re-entrantly; no
/// borrow of the cache is held while it runs.
pub struct Memoized<A, R, F> {
    function: F,
    cache: RefCell<Cache<A, R>>,
}

/// Wraps `function` so that each distinct argument is computed only once.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::memoize;
///
/// let calls = Cell::new(0);
/// let area = memoize(|(width, height): (u32, u32)| {
///     calls.set(calls.get() + 1);
///     width * height
/// });
///
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((4, 3)), 12);
/// assert_eq!(calls.get(), 2);
/// ```
pub fn memoize<A, R, F>(function: F) -> Memoized<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoized {
        function,
        cache: RefCell::new(Cache::default()),
    }
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Returns the cached result for `arguments`, computing and storing it
    /// on first sight.
    pub fn call(&self, arguments: A) -> R {
        if let Some(result) = self.cache.borrow().get(&arguments) {
            tracing::trace!("memoize: cache hit");
            return result.clone();
        }

        tracing::trace!("memoize: cache miss");
        let result = (self.function)(arguments.clone());
        self.cache.borrow_mut().insert(arguments, result.clone());
        result
    }

    /// Returns whether a result for `arguments` is cached.
    pub fn is_cached(&self, arguments: &A) -> bool {
        self.cache.borrow().contains_key(arguments)
    }
}

impl<A, R, F> Memoized<A, R, F> {
    /// Returns the number of cached argument values.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<A, R, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// A fallible function whose successful results are cached.
///
/// Created by [`try_memoize`]. An `Err` is returned to the caller and not
/// stored, so the same arguments are computed again on the next call.
pub struct TryMemoized<A, R, E, F> {
    function: F,
    cache: RefCell<Cache<A, R>>,
    marker: PhantomData<fn() -> E>,
}

/// Wraps a fallible `function`, caching only its `Ok` results.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::try_memoize;
///
/// let parse = try_memoize(|text: String| text.parse::<i32>());
/// assert_eq!(parse.call("42".to_string()), Ok(42));
/// assert!(parse.call("forty-two".to_string()).is_err());
/// assert_eq!(parse.cache_len(), 1);
/// ```
pub fn try_memoize<A, R, E, F>(function: F) -> TryMemoized<A, R, E, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> Result<R, E>,
{
    TryMemoized {
        function,
        cache: RefCell::new(Cache::default()),
        marker: PhantomData,
    }
}

impl<A, R, E, F> TryMemoized<A, R, E, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> Result<R, E>,
{
    /// Returns the cached success for `arguments`, or runs the wrapped
    /// function and caches its result if it succeeds.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function returns.
    pub fn call(&self, arguments: A) -> Result<R, E> {
        if let Some(result) = self.cache.borrow().get(&arguments) {
            return Ok(result.clone());
        }

        let result = (self.function)(arguments.clone())?;
        self.cache.borrow_mut().insert(arguments, result.clone());
        Ok(result)
    }
}

impl<A, R, E, F> TryMemoized<A, R, E, F> {
    /// Returns the number of cached successes.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn memoize_computes_each_argument_once() {
        let calls = Cell::new(0);
        let decorated = memoize(|value: i32| {
            calls.set(calls.get() + 1);
            value + 1
        });

        for _ in 0..3 {
            assert_eq!(decorated.call(5), 6);
        }
        assert_eq!(decorated.call(6), 7);
        assert_eq!(calls.get(), 2);
        assert!(decorated.is_cached(&5));
        assert!(!decorated.is_cached(&7));
    }

    #[rstest]
    fn tuple_and_joined_string_are_distinct_keys() {
        #[derive(Clone, PartialEq, Eq, Hash)]
        enum Arguments {
            Pair(i32, i32),
            Text(String),
        }

        let decorated = memoize(|arguments: Arguments| match arguments {
            Arguments::Pair(first, second) => format!("pair {first} {second}"),
            Arguments::Text(text) => format!("text {text}"),
        });

        assert_eq!(decorated.call(Arguments::Pair(1, 2)), "pair 1 2");
        assert_eq!(decorated.call(Arguments::Text("1,2".to_string())), "text 1,2");
        assert_eq!(decorated.cache_len(), 2);
    }

    #[rstest]
    fn debug_reports_cache_size() {
        let decorated = memoize(|value: u8| value);
        decorated.call(1);
        decorated.call(2);
        assert_eq!(format!("{decorated:?}"), "Memoized { cached: 2, .. }");
    }
}
