//! Error types for underbar operations.
//!
//! Most operations in this crate are total: negative counts and waits are
//! ruled out by `usize` and [`Duration`](std::time::Duration). The errors
//! below cover the remaining cases where a caller-supplied value cannot be
//! honoured.

/// Represents errors that can occur in underbar operations.
///
/// # Examples
///
/// ```rust
/// use underbar::error::UnderbarError;
///
/// let error = UnderbarError::UnsupportedKey {
///     method: "shout".to_string(),
///     receiver: "string",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "unsupported method `shout` for string receiver"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnderbarError {
    /// An argument has the wrong shape for the requested operation.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// A human readable description of what was wrong.
        reason: String,
    },

    /// A named method is not available on the receiver's value.
    #[error("unsupported method `{method}` for {receiver} receiver")]
    UnsupportedKey {
        /// The requested method name.
        method: String,
        /// The kind of value the method was requested on.
        receiver: &'static str,
    },

    /// A deferred operation was requested outside of a tokio runtime.
    #[error("{operation}: no tokio runtime is available to schedule the call")]
    SchedulerUnavailable {
        /// The operation that needed the scheduler.
        operation: &'static str,
    },
}

impl UnderbarError {
    /// Creates an [`UnderbarError::InvalidArgument`].
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates an [`UnderbarError::UnsupportedKey`].
    pub fn unsupported_key(method: impl Into<String>, receiver: &'static str) -> Self {
        Self::UnsupportedKey {
            method: method.into(),
            receiver,
        }
    }
}

/// A specialized `Result` for underbar operations.
pub type Result<T> = std::result::Result<T, UnderbarError>;

static_assertions::assert_impl_all!(UnderbarError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn invalid_argument_display() {
        let error = UnderbarError::invalid_argument("flatten", "expected an array, found number");
        assert_eq!(
            format!("{error}"),
            "flatten: invalid argument: expected an array, found number"
        );
    }

    #[rstest]
    fn unsupported_key_display() {
        let error = UnderbarError::unsupported_key("explode", "number");
        assert_eq!(
            format!("{error}"),
            "unsupported method `explode` for number receiver"
        );
    }

    #[rstest]
    fn scheduler_unavailable_display() {
        let error = UnderbarError::SchedulerUnavailable { operation: "delay" };
        assert_eq!(
            format!("{error}"),
            "delay: no tokio runtime is available to schedule the call"
        );
    }

    #[rstest]
    fn errors_compare_structurally() {
        let first = UnderbarError::unsupported_key("shout", "string");
        let second = UnderbarError::unsupported_key("shout", "string");
        let third = UnderbarError::unsupported_key("shout", "array");
        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
