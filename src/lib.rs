//! # fluent-assert
//!
//! Fluent validation chains: wrap a value, chain predicate checks, collect
//! the failures, and report each one through a pluggable strategy.
//!
//! ## Quick start
//!
//! ```
//! use fluent_assert::prelude::*;
//!
//! let chain = validate("alice")
//!     .is_string()
//!     .is_not_null_or_whitespace()
//!     .has_length_between(3, 20);
//!
//! assert!(chain.check());
//! ```
//!
//! Failures accumulate rather than abort, so one pass over a value reports
//! everything wrong with it:
//!
//! ```
//! use fluent_assert::prelude::*;
//!
//! let chain = validate(-3).is_even().is_positive();
//! assert_eq!(chain.errors().len(), 2);
//! ```
//!
//! ## Negation
//!
//! [`not`](ValidationChain::not) toggles a persistent mode that inverts the
//! polarity of every subsequent predicate:
//!
//! ```
//! use fluent_assert::prelude::*;
//!
//! assert!(validate(5).not().is_string().check());
//! ```
//!
//! ## Reporting
//!
//! Every failure is handed to the chain's [`Reporter`] exactly once: log
//! (default), panic, alert, or a custom closure. See [`reporting`] for the
//! strategy catalog and [`ValidationChain::throw_on_error`] for converting a
//! chain into a `Result`.

pub mod chain;
pub mod error;
mod macros;
pub mod prelude;
pub mod reporting;
pub mod subject;

pub use chain::{ValidationChain, validate};
pub use error::ValidationError;
pub use reporting::Reporter;
pub use subject::{Kind, Subject};
