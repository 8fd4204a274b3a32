//! Deferred invocation on the ambient tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;

use crate::error::{Result, UnderbarError};

/// Returns the handle of the runtime the caller is running in.
pub(super) fn current_scheduler(operation: &'static str) -> Result<Handle> {
    Handle::try_current().map_err(|_| UnderbarError::SchedulerUnavailable { operation })
}

/// Schedules `function(arguments)` to run once, no earlier than `wait`
/// from now.
///
/// The call is fire-and-forget: it returns immediately, the result of
/// `function` is discarded, and there is no way to cancel it. Two delayed
/// calls have no ordering guarantee beyond their deadlines.
///
/// # Errors
///
/// Returns [`UnderbarError::SchedulerUnavailable`] when called outside of a
/// tokio runtime.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use tokio::sync::oneshot;
/// use underbar::decorator::delay;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (sender, receiver) = oneshot::channel();
/// delay(
///     move |greeting: &'static str| {
///         let _ = sender.send(greeting);
///     },
///     Duration::from_millis(10),
///     "hello",
/// )
/// .unwrap();
///
/// assert_eq!(receiver.await.unwrap(), "hello");
/// # }
/// ```
pub fn delay<A, F>(function: F, wait: Duration, arguments: A) -> Result<()>
where
    A: Send + 'static,
    F: FnOnce(A) + Send + 'static,
{
    let scheduler = current_scheduler("delay")?;
    tracing::debug!(?wait, "delay: scheduling call");

    scheduler.spawn(async move {
        tokio::time::sleep(wait).await;
        tracing::trace!("delay: deadline reached, running call");
        function(arguments);
    });
    Ok(())
}
