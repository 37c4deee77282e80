//! Prelude module for convenient imports.
//!
//! ```
//! use fluent_assert::prelude::*;
//!
//! assert!(validate(2).is_number().is_even().check());
//! ```

pub use crate::chain::{ValidationChain, validate};
pub use crate::error::ValidationError;
pub use crate::reporting::Reporter;
pub use crate::subject::{Kind, Subject};
