//! Tagged subject values.
//!
//! A [`ValidationChain`](crate::ValidationChain) wraps exactly one [`Subject`].
//! Instead of probing runtime types, the subject is classified into a closed
//! set of kinds at construction, and every predicate dispatches on that tag.
//!
//! Conversions are provided for the common Rust primitives, so call sites can
//! pass plain values:
//!
//! ```
//! use fluent_assert::{Kind, Subject};
//!
//! assert_eq!(Subject::from(42).kind(), Kind::Number);
//! assert_eq!(Subject::from("hello").kind(), Kind::Text);
//! assert_eq!(Subject::from(Option::<i32>::None).kind(), Kind::Null);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// SUBJECT
// ============================================================================

/// A value under validation, classified into a closed set of kinds.
///
/// `Undefined` and `Null` are distinct, matching the usual dynamic-language
/// split between "absent" and "explicitly empty". `Callable`, `Future`, and
/// `Other` carry only their tag: the chain never needs to invoke or inspect
/// such values, only to classify them.
#[derive(Debug, Clone, PartialEq)]
pub enum Subject {
    /// An absent value.
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. All numeric inputs widen to `f64`.
    Number(f64),
    /// A text value.
    Text(String),
    /// An ordered sequence of subjects.
    Seq(Vec<Subject>),
    /// A point in time.
    Date(SystemTime),
    /// An error value, carrying its message.
    Fault(String),
    /// A function value (tag only).
    Callable,
    /// A deferred computation (tag only).
    Future,
    /// Any other opaque value (tag only).
    Other,
}

/// The fieldless discriminant of a [`Subject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    Text,
    Seq,
    Date,
    Fault,
    Callable,
    Future,
    Other,
}

impl Subject {
    /// Creates an error-kind subject from a message.
    pub fn fault(message: impl Into<String>) -> Self {
        Subject::Fault(message.into())
    }

    /// Creates a function-kind subject.
    #[must_use]
    pub const fn callable() -> Self {
        Subject::Callable
    }

    /// Creates a deferred-computation subject.
    #[must_use]
    pub const fn future() -> Self {
        Subject::Future
    }

    /// Creates an opaque subject.
    #[must_use]
    pub const fn other() -> Self {
        Subject::Other
    }

    /// Returns the kind tag of this subject.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Subject::Undefined => Kind::Undefined,
            Subject::Null => Kind::Null,
            Subject::Bool(_) => Kind::Bool,
            Subject::Number(_) => Kind::Number,
            Subject::Text(_) => Kind::Text,
            Subject::Seq(_) => Kind::Seq,
            Subject::Date(_) => Kind::Date,
            Subject::Fault(_) => Kind::Fault,
            Subject::Callable => Kind::Callable,
            Subject::Future => Kind::Future,
            Subject::Other => Kind::Other,
        }
    }

    /// Canonical text form of this subject.
    ///
    /// Integral numbers render without a trailing `.0`, sequences join their
    /// elements with `,`, dates render as milliseconds since the UNIX epoch.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Subject::Undefined => Cow::Borrowed("undefined"),
            Subject::Null => Cow::Borrowed("null"),
            Subject::Bool(true) => Cow::Borrowed("true"),
            Subject::Bool(false) => Cow::Borrowed("false"),
            Subject::Number(n) => Cow::Owned(format_number(*n)),
            Subject::Text(s) => Cow::Borrowed(s),
            Subject::Seq(items) => Cow::Owned(
                items
                    .iter()
                    .map(|item| item.to_text().into_owned())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Subject::Date(t) => Cow::Owned(format_number(epoch_millis(*t))),
            Subject::Fault(message) => Cow::Borrowed(message),
            Subject::Callable => Cow::Borrowed("[function]"),
            Subject::Future => Cow::Borrowed("[future]"),
            Subject::Other => Cow::Borrowed("[object]"),
        }
    }

    /// Numeric coercion of this subject.
    ///
    /// `Null` coerces to 0, booleans to 0/1, text is parsed (blank text is 0),
    /// dates become epoch milliseconds. Anything non-coercible yields NaN, so
    /// comparisons against it are uniformly false.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Subject::Null => 0.0,
            Subject::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Subject::Number(n) => *n,
            Subject::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Subject::Date(t) => epoch_millis(*t),
            Subject::Seq(items) => match items.as_slice() {
                [] => 0.0,
                [only] => only.as_number(),
                _ => f64::NAN,
            },
            Subject::Undefined
            | Subject::Fault(_)
            | Subject::Callable
            | Subject::Future
            | Subject::Other => f64::NAN,
        }
    }

    /// Loose equality between subjects.
    ///
    /// Same-kind values compare structurally; across kinds, `Null` equals
    /// `Undefined`, and numbers, text, and booleans compare through numeric
    /// coercion. Tag-only kinds never compare equal: their identity is not
    /// preserved by the tag.
    #[must_use]
    pub fn loose_eq(&self, other: &Subject) -> bool {
        use Subject::{Bool, Date, Fault, Null, Number, Seq, Text, Undefined};

        match (self, other) {
            (Undefined | Null, Undefined | Null) => true,
            (Text(a), Text(b)) => a == b,
            (Number(a), Number(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Number(_) | Bool(_), Text(_) | Number(_) | Bool(_))
            | (Text(_), Number(_) | Bool(_)) => self.as_number() == other.as_number(),
            (Date(a), Date(b)) => a == b,
            (Fault(a), Fault(b)) => a == b,
            (Seq(a), Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            _ => false,
        }
    }

    /// The elements of this subject, if it is sequence-shaped.
    ///
    /// Text is indexable per character; everything else has no elements.
    pub(crate) fn elements(&self) -> Option<Vec<Subject>> {
        match self {
            Subject::Seq(items) => Some(items.clone()),
            Subject::Text(s) => Some(s.chars().map(|c| Subject::Text(c.to_string())).collect()),
            _ => None,
        }
    }

    /// Length of this subject: element count for sequences, Unicode scalar
    /// count for text, and the text-form length otherwise.
    #[must_use]
    pub fn length(&self) -> usize {
        match self {
            Subject::Seq(items) => items.len(),
            Subject::Text(s) => s.chars().count(),
            other => other.to_text().chars().count(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Renders a number the way dynamic languages stringify it: integral values
/// without a decimal point, non-finite values by name.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Milliseconds since the UNIX epoch, negative for earlier instants.
fn epoch_millis(t: SystemTime) -> f64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_millis() as f64,
        Err(e) => -(e.duration().as_millis() as f64),
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! subject_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Subject {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(n: $ty) -> Self {
                    Subject::Number(n as f64)
                }
            }
        )+
    };
}

subject_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Subject {
    fn from(b: bool) -> Self {
        Subject::Bool(b)
    }
}

impl From<&str> for Subject {
    fn from(s: &str) -> Self {
        Subject::Text(s.to_owned())
    }
}

impl From<String> for Subject {
    fn from(s: String) -> Self {
        Subject::Text(s)
    }
}

impl From<char> for Subject {
    fn from(c: char) -> Self {
        Subject::Text(c.to_string())
    }
}

impl From<SystemTime> for Subject {
    fn from(t: SystemTime) -> Self {
        Subject::Date(t)
    }
}

impl<T: Into<Subject>> From<Option<T>> for Subject {
    fn from(value: Option<T>) -> Self {
        value.map_or(Subject::Null, Into::into)
    }
}

impl<T: Into<Subject>> From<Vec<T>> for Subject {
    fn from(values: Vec<T>) -> Self {
        Subject::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Subject>, const N: usize> From<[T; N]> for Subject {
    fn from(values: [T; N]) -> Self {
        Subject::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Subject> + Clone> From<&[T]> for Subject {
    fn from(values: &[T]) -> Self {
        Subject::Seq(values.iter().cloned().map(Into::into).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
