//! Error type for hard validation failures.

use std::borrow::Cow;

use thiserror::Error;

/// The error produced when a chain is converted into a hard failure, either
/// by [`throw_on_error`](crate::ValidationChain::throw_on_error) or by the
/// panicking reporter.
///
/// Wraps a single failure message. Default predicate messages are static, so
/// constructing this error from them allocates nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a new error from a failure message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
