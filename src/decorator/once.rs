//! Single-call function decorators.
//!
//! [`Once`] runs its wrapped function on the first call and answers every
//! later call with a clone of that first result. [`TryOnce`] does the same
//! for fallible functions, but only a successful result settles it: an
//! `Err` is handed back to the caller and the next call tries again.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::once;
//!
//! let initialize = once(|name: &str| format!("initialized by {name}"));
//!
//! assert_eq!(initialize.call("first"), "initialized by first");
//! assert_eq!(initialize.call("second"), "initialized by first");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a single-call decorator.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// The function has not produced a result yet.
    Pending(F),
    /// The function has run; its result is cached.
    Done(R),
    /// The function panicked or was re-entered while running.
    Poisoned,
}

/// A function that runs at most once.
///
/// Created by [`once`]. Multiple arguments are passed as a tuple.
///
/// # Panics
///
/// [`Once::call`] panics if the wrapped function panicked on its first call,
/// or if the wrapped function calls the same `Once` while it is running.
pub struct Once<A, R, F> {
    state: RefCell<OnceState<F, R>>,
    marker: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs only on the first call.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::decorator::once;
///
/// let calls = Cell::new(0);
/// let add = once(|(left, right): (i32, i32)| {
///     calls.set(calls.get() + 1);
///     left + right
/// });
///
/// assert_eq!(add.call((1, 2)), 3);
/// assert_eq!(add.call((10, 20)), 3);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    Once {
        state: RefCell::new(OnceState::Pending(function)),
        marker: PhantomData,
    }
}

impl<A, R, F> Once<A, R, F>
where
    R: Clone,
    F: FnOnce(A) -> R,
{
    /// Runs the wrapped function on the first call; returns the cached
    /// result afterwards. `arguments` of later calls are dropped unused.
    pub fn call(&self, arguments: A) -> R {
        {
            let state = self.state.borrow();
            match &*state {
                OnceState::Done(result) => return result.clone(),
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
                OnceState::Pending(_) => {}
            }
        }

        let OnceState::Pending(function) =
            std::mem::replace(&mut *self.state.borrow_mut(), OnceState::Poisoned)
        else {
            unreachable!()
        };

        tracing::trace!("once: running wrapped function");
        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Done(result.clone());
        result
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns whether the wrapped function has already produced a result.
    #[inline]
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Done(_))
    }

    /// Returns whether the decorator has been poisoned.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_borrow().as_deref() {
            Ok(OnceState::Done(result)) => formatter.debug_tuple("Once").field(result).finish(),
            Ok(OnceState::Pending(_)) => formatter.debug_tuple("Once").field(&"<pending>").finish(),
            Ok(OnceState::Poisoned) | Err(_) => {
                formatter.debug_tuple("Once").field(&"<poisoned>").finish()
            }
        }
    }
}

/// A fallible function that succeeds at most once.
///
/// Created by [`try_once`]. Errors are not cached: after an `Err` the
/// wrapped function stays pending and runs again on the next call.
pub struct TryOnce<A, R, E, F> {
    state: RefCell<OnceState<F, R>>,
    marker: PhantomData<fn(A) -> E>,
}

/// Wraps a fallible `function` so that it stops running after its first
/// success.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::try_once;
///
/// let connect = try_once(|attempt: u32| {
///     if attempt < 2 { Err(format!("attempt {attempt} refused")) } else { Ok(attempt) }
/// });
///
/// assert!(connect.call(1).is_err());
/// assert_eq!(connect.call(2), Ok(2));
/// assert_eq!(connect.call(3), Ok(2));
/// ```
pub fn try_once<A, R, E, F>(function: F) -> TryOnce<A, R, E, F>
where
    F: FnMut(A) -> Result<R, E>,
{
    TryOnce {
        state: RefCell::new(OnceState::Pending(function)),
        marker: PhantomData,
    }
}

impl<A, R, E, F> TryOnce<A, R, E, F>
where
    R: Clone,
    F: FnMut(A) -> Result<R, E>,
{
    /// Runs the wrapped function until it succeeds once; returns the cached
    /// success afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function previously panicked or re-enters this
    /// decorator.
    pub fn call(&self, arguments: A) -> Result<R, E> {
        {
            let state = self.state.borrow();
            match &*state {
                OnceState::Done(result) => return Ok(result.clone()),
                OnceState::Poisoned => panic!("TryOnce instance has been poisoned"),
                OnceState::Pending(_) => {}
            }
        }

        let OnceState::Pending(mut function) =
            std::mem::replace(&mut *self.state.borrow_mut(), OnceState::Poisoned)
        else {
            unreachable!()
        };

        match function(arguments) {
            Ok(result) => {
                *self.state.borrow_mut() = OnceState::Done(result.clone());
                Ok(result)
            }
            Err(error) => {
                tracing::trace!("try_once: wrapped function failed, staying pending");
                *self.state.borrow_mut() = OnceState::Pending(function);
                Err(error)
            }
        }
    }
}

impl<A, R, E, F> TryOnce<A, R, E, F> {
    /// Returns whether the wrapped function has succeeded.
    #[inline]
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Done(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn once_is_pending_until_called() {
        let decorated = once(|value: i32| value * 2);
        assert!(!decorated.is_called());
        assert_eq!(decorated.call(4), 8);
        assert!(decorated.is_called());
    }

    #[rstest]
    fn once_debug_shows_cached_result() {
        let decorated = once(|value: i32| value + 1);
        assert_eq!(format!("{decorated:?}"), "Once(\"<pending>\")");
        decorated.call(1);
        assert_eq!(format!("{decorated:?}"), "Once(2)");
    }

    #[rstest]
    fn once_is_poisoned_after_panic() {
        let decorated = once(|_: ()| -> i32 { panic!("boom") });
        let outcome = catch_unwind(AssertUnwindSafe(|| decorated.call(())));
        assert!(outcome.is_err());
        assert!(decorated.is_poisoned());
        let second = catch_unwind(AssertUnwindSafe(|| decorated.call(())));
        assert!(second.is_err());
    }

    #[rstest]
    fn try_once_does_not_cache_errors() {
        let calls = Cell::new(0);
        let decorated = try_once(|value: i32| {
            calls.set(calls.get() + 1);
            if value < 0 { Err("negative") } else { Ok(value) }
        });

        assert_eq!(decorated.call(-1), Err("negative"));
        assert_eq!(decorated.call(-2), Err("negative"));
        assert!(!decorated.is_called());
        assert_eq!(decorated.call(7), Ok(7));
        assert_eq!(decorated.call(9), Ok(7));
        assert_eq!(calls.get(), 3);
    }
}
