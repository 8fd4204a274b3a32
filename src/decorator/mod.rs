//! Function decorators.
//!
//! Each decorator wraps a caller-supplied function in a struct that owns
//! the decorator's private state and exposes a `call` method. Functions of
//! several arguments take them as a single tuple.
//!
//! - [`once`] / [`try_once`]: run at most once, cache the (successful) result
//! - [`memoize`] / [`try_memoize`]: cache (successful) results per argument
//! - [`delay`]: run once after a wait, without blocking (feature `async`)
//! - [`throttle`] / [`throttle_with`]: run at most once per window (feature `async`)
//!
//! Failing calls are never cached: [`TryOnce`] and [`TryMemoized`] only
//! store `Ok` results.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::{memoize, once};
//!
//! let setup = once(|(): ()| "ready");
//! assert_eq!(setup.call(()), "ready");
//!
//! let fibonacci_step = memoize(|(previous, current): (u64, u64)| (current, previous + current));
//! assert_eq!(fibonacci_step.call((1, 1)), (1, 2));
//! ```

mod memoize;
mod once;

#[cfg(feature = "async")]
mod delay;
#[cfg(feature = "async")]
mod throttle;

pub use memoize::{Memoized, TryMemoized, memoize, try_memoize};
pub use once::{Once, OnceState, TryOnce, once, try_once};

#[cfg(feature = "async")]
pub use delay::delay;
#[cfg(feature = "async")]
pub use throttle::{CallDisposition, ThrottleOptions, Throttled, throttle, throttle_with};
