//! Reporting strategies.
//!
//! Every failed assertion is pushed to the chain's error list and then handed
//! to the chain's [`Reporter`], exactly once per failure. The reporter is a
//! plain value injected per chain, so tests can substitute a sink without any
//! shared mutable state.

use std::fmt;

use crate::error::ValidationError;

/// Where failed assertions are reported.
///
/// The default is [`Reporter::Log`]. Strategies are values, not globals:
/// replacing the reporter on one chain never affects another.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use fluent_assert::{Reporter, validate};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let chain = validate(1)
///     .reporting(Reporter::custom(move |msg| {
///         sink.borrow_mut().push(msg.to_owned());
///     }))
///     .is_string();
///
/// assert_eq!(seen.borrow().len(), 1);
/// assert!(chain.has_errors());
/// ```
pub enum Reporter {
    /// Emits each failure through `tracing` at `WARN` level. The default.
    Log,
    /// Panics with a [`ValidationError`] at the first failure.
    Panic,
    /// Writes each failure to the user-facing channel (stderr).
    Alert,
    /// Invokes an arbitrary sink.
    Custom(Box<dyn Fn(&str)>),
}

impl Reporter {
    /// Wraps a closure as a custom reporting sink.
    pub fn custom(sink: impl Fn(&str) + 'static) -> Self {
        Reporter::Custom(Box::new(sink))
    }

    pub(crate) fn emit(&self, message: &str) {
        match self {
            Reporter::Log => tracing::warn!("{message}"),
            Reporter::Panic => panic!("{}", ValidationError::new(message.to_owned())),
            Reporter::Alert => eprintln!("{message}"),
            Reporter::Custom(sink) => sink(message),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::Log
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reporter::Log => f.write_str("Log"),
            Reporter::Panic => f.write_str("Panic"),
            Reporter::Alert => f.write_str("Alert"),
            Reporter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn custom_sink_receives_the_message() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let reporter = Reporter::custom(move |msg| sink.borrow_mut().push(msg.to_owned()));

        reporter.emit("first");
        reporter.emit("second");

        assert_eq!(*seen.borrow(), vec!["first".to_owned(), "second".to_owned()]);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn panic_reporter_panics_with_the_message() {
        Reporter::Panic.emit("boom");
    }

    #[test]
    fn default_is_log() {
        assert!(matches!(Reporter::default(), Reporter::Log));
    }

    #[test]
    fn debug_does_not_expose_the_sink() {
        let reporter = Reporter::custom(|_| {});
        assert_eq!(format!("{reporter:?}"), "Custom(..)");
    }
}
