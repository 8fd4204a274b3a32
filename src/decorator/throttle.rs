//! Rate limiting decorator.
//!
//! A [`Throttled`] function runs at most once per `wait` window. With the
//! default [`ThrottleOptions`] the first call of a window runs immediately
//! (leading edge) and every call that arrives while the window is open is
//! coalesced into a single trailing call, made with the most recent
//! arguments when the window closes. A trailing call opens a new window of
//! its own.
//!
//! Window bookkeeping runs as a task on the tokio runtime that was current
//! when the decorator was created. If a trailing call panics, the window is
//! closed and any pending arguments are discarded, so the next call starts
//! a fresh window.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;

use super::delay::current_scheduler;
use crate::error::{Result, UnderbarError};

/// Selects which edges of a throttle window invoke the wrapped function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleOptions {
    /// Run the first call of a window immediately.
    pub leading: bool,
    /// Run the last call made during a window when the window closes.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

/// What happened to a call made through [`Throttled::call`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallDisposition {
    /// The wrapped function ran before `call` returned.
    Invoked,
    /// The arguments were stored for the trailing call of the current window,
    /// replacing any earlier pending arguments.
    Deferred,
    /// The call was discarded because the window is open and trailing calls
    /// are disabled.
    Dropped,
}

#[derive(Debug)]
struct ThrottleState<A> {
    cooling: bool,
    pending: Option<A>,
}

/// Closes the window if the task unwinds out of a trailing call.
struct CloseOnUnwind<'a, A> {
    state: &'a Mutex<ThrottleState<A>>,
}

impl<A> Drop for CloseOnUnwind<'_, A> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut state = self.state.lock();
            state.cooling = false;
            state.pending = None;
        }
    }
}

struct Shared<A, F> {
    function: F,
    wait: Duration,
    options: ThrottleOptions,
    state: Mutex<ThrottleState<A>>,
}

impl<A, F> Shared<A, F>
where
    F: Fn(A),
{
    async fn run_windows(&self) {
        let _guard = CloseOnUnwind { state: &self.state };
        loop {
            tokio::time::sleep(self.wait).await;

            let pending = {
                let mut state = self.state.lock();
                let pending = state.pending.take();
                if pending.is_none() {
                    state.cooling = false;
                }
                pending
            };

            match pending {
                Some(arguments) => {
                    tracing::debug!("throttle: running trailing call");
                    (self.function)(arguments);
                }
                None => break,
            }
        }
    }
}

/// A function limited to one execution per window.
///
/// Created by [`throttle`] or [`throttle_with`]. Cloning yields another
/// handle to the same window.
pub struct Throttled<A, F> {
    shared: Arc<Shared<A, F>>,
    scheduler: Handle,
}

/// Wraps `function` so that it runs at most once per `wait`, using leading
/// and trailing calls.
///
/// # Errors
///
/// Returns [`UnderbarError::SchedulerUnavailable`] when called outside of a
/// tokio runtime.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use underbar::decorator::{CallDisposition, throttle};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let recorder = Arc::clone(&seen);
/// let record = throttle(
///     move |value: u32| recorder.lock().unwrap().push(value),
///     Duration::from_millis(20),
/// )
/// .unwrap();
///
/// assert_eq!(record.call(1), CallDisposition::Invoked);
/// assert_eq!(record.call(2), CallDisposition::Deferred);
/// assert_eq!(record.call(3), CallDisposition::Deferred);
///
/// tokio::time::sleep(Duration::from_millis(30)).await;
/// assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
/// # }
/// ```
pub fn throttle<A, F>(function: F, wait: Duration) -> Result<Throttled<A, F>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    throttle_with(function, wait, ThrottleOptions::default())
}

/// Wraps `function` so that it runs at most once per `wait`, with explicit
/// control over the leading and trailing edges.
///
/// # Errors
///
/// - [`UnderbarError::InvalidArgument`] if both edges are disabled, since
///   the function could then never run.
/// - [`UnderbarError::SchedulerUnavailable`] outside of a tokio runtime.
pub fn throttle_with<A, F>(
    function: F,
    wait: Duration,
    options: ThrottleOptions,
) -> Result<Throttled<A, F>>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    if !options.leading && !options.trailing {
        return Err(UnderbarError::invalid_argument(
            "throttle",
            "at least one of the leading and trailing edges must be enabled",
        ));
    }
    let scheduler = current_scheduler("throttle")?;

    Ok(Throttled {
        shared: Arc::new(Shared {
            function,
            wait,
            options,
            state: Mutex::new(ThrottleState {
                cooling: false,
                pending: None,
            }),
        }),
        scheduler,
    })
}

impl<A, F> Throttled<A, F>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    /// Calls the wrapped function, or defers or drops the call if the
    /// current window has already been used.
    pub fn call(&self, arguments: A) -> CallDisposition {
        let mut state = self.shared.state.lock();

        if state.cooling {
            if !self.shared.options.trailing {
                return CallDisposition::Dropped;
            }
            tracing::trace!("throttle: coalescing call into trailing edge");
            state.pending = Some(arguments);
            return CallDisposition::Deferred;
        }

        state.cooling = true;
        if self.shared.options.leading {
            drop(state);
            self.open_window();
            (self.shared.function)(arguments);
            CallDisposition::Invoked
        } else {
            state.pending = Some(arguments);
            drop(state);
            self.open_window();
            CallDisposition::Deferred
        }
    }

    fn open_window(&self) {
        let shared = Arc::clone(&self.shared);
        self.scheduler.spawn(async move { shared.run_windows().await });
    }
}

impl<A, F> Throttled<A, F> {
    /// Returns whether a window is currently open.
    pub fn is_cooling(&self) -> bool {
        self.shared.state.lock().cooling
    }

    /// Returns the configured window length.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }
}

impl<A, F> Clone for Throttled<A, F> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<A, F> fmt::Debug for Throttled<A, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttled")
            .field("wait", &self.shared.wait)
            .field("options", &self.shared.options)
            .field("cooling", &self.is_cooling())
            .finish_non_exhaustive()
    }
}
