//! The validation chain.
//!
//! A [`ValidationChain`] wraps one subject value and exposes chainable
//! predicate methods. Each predicate evaluates a failure condition against
//! the subject and routes it through [`assert`](ValidationChain::assert):
//! the effective outcome is the condition XOR the negation flag, and every
//! effective failure appends exactly one message to the error list and hands
//! it to the reporter exactly once.
//!
//! ```
//! use fluent_assert::validate;
//!
//! let chain = validate(4).is_number().is_even().is_positive();
//! assert!(chain.check());
//!
//! let chain = validate(-3).is_number().is_even().is_positive();
//! assert_eq!(chain.errors().len(), 2);
//! ```

use std::borrow::Cow;

use regex::Regex;
use smallvec::SmallVec;

use crate::error::ValidationError;
use crate::macros::predicate;
use crate::reporting::Reporter;
use crate::subject::{Kind, Subject};

/// Wraps a value in a new [`ValidationChain`].
///
/// This is the entry point of the crate:
///
/// ```
/// use fluent_assert::validate;
///
/// assert!(validate("hello").is_string().check());
/// ```
pub fn validate(value: impl Into<Subject>) -> ValidationChain {
    ValidationChain::new(value)
}

/// A single validation session over one subject.
///
/// The chain owns its error list, negation flag, and reporter; distinct
/// chains are fully independent. Predicates consume and return the chain, so
/// calls read as one fluent expression.
#[derive(Debug)]
pub struct ValidationChain {
    subject: Subject,
    negated: bool,
    errors: SmallVec<[Cow<'static, str>; 4]>,
    report: Reporter,
}

impl ValidationChain {
    /// Creates a chain over `value` with no errors, negation off, and the
    /// default (log) reporter.
    pub fn new(value: impl Into<Subject>) -> Self {
        Self {
            subject: value.into(),
            negated: false,
            errors: SmallVec::new(),
            report: Reporter::default(),
        }
    }

    /// The subject under validation.
    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The shared assertion primitive.
    ///
    /// `failed` is the predicate's verdict under non-negated semantics; the
    /// effective failure is `failed != negated`. On effective failure the
    /// message is appended and then reported, in that order, so a panicking
    /// reporter still leaves the message accumulated.
    fn assert(&mut self, failed: bool, msg: impl Into<Cow<'static, str>>) {
        if failed != self.negated {
            self.errors.push(msg.into());
            if let Some(message) = self.errors.last() {
                self.report.emit(message);
            }
        }
    }

    /// Toggles the negation flag.
    ///
    /// Negation is a persistent mode: it inverts the polarity of every
    /// subsequent predicate until toggled again, and toggling twice restores
    /// the original polarity.
    #[must_use]
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Replaces the reporting strategy.
    ///
    /// Accumulated errors and the negation flag are untouched.
    #[must_use]
    pub fn reporting(mut self, report: Reporter) -> Self {
        self.report = report;
        self
    }

    /// The accumulated failure messages, in assertion order.
    #[must_use]
    pub fn errors(&self) -> &[Cow<'static, str>] {
        &self.errors
    }

    /// Whether any assertion has failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether every assertion has passed. Always `!has_errors()`.
    #[must_use]
    pub fn check(&self) -> bool {
        self.errors.is_empty()
    }

    /// Empties the error list. Negation and the reporter are untouched.
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.errors.clear();
        self
    }

    /// Converts accumulated failures into a hard error.
    ///
    /// Returns `Err` carrying the first accumulated message if any assertion
    /// failed, and the chain itself otherwise, so the call composes with `?`:
    ///
    /// ```
    /// use fluent_assert::{ValidationError, validate};
    ///
    /// fn admit(age: i64) -> Result<(), ValidationError> {
    ///     validate(age).is_number().is_positive().throw_on_error()?;
    ///     Ok(())
    /// }
    ///
    /// assert!(admit(30).is_ok());
    /// assert!(admit(-1).is_err());
    /// ```
    pub fn throw_on_error(self) -> Result<Self, ValidationError> {
        if let Some(message) = self.errors.first() {
            return Err(ValidationError::new(message.clone()));
        }
        Ok(self)
    }

    // ========================================================================
    // CUSTOM
    // ========================================================================

    predicate! {
        /// Checks the subject with a caller-supplied function.
        ///
        /// The function is trusted to return a verdict; if it panics, the
        /// panic propagates.
        pub is_valid / is_valid_msg (self, f: impl FnOnce(&Subject) -> bool)
        fails { !f(&self.subject) }
        default = "validation failed: custom validation function";
    }

    // ========================================================================
    // MEMBERSHIP
    // ========================================================================

    predicate! {
        /// Checks that the subject loosely equals at least one of `values`.
        ///
        /// An empty candidate set passes. Array, slice, and vec call shapes
        /// are all accepted:
        ///
        /// ```
        /// use fluent_assert::validate;
        ///
        /// assert!(validate(2).is_one_of([1, 2, 3]).check());
        /// assert!(validate(5).is_one_of(vec![1, 2, 3]).has_errors());
        /// ```
        pub is_one_of / is_one_of_msg (self, values: impl IntoIterator<Item = impl Into<Subject>>)
        fails {
            let values: Vec<Subject> = values.into_iter().map(Into::into).collect();
            !values.is_empty() && !values.iter().any(|v| self.subject.loose_eq(v))
        }
        default = "validation failed: objects do not match";
    }

    predicate! {
        /// Checks that the subject loosely equals none of `values`.
        pub is_none_of / is_none_of_msg (self, values: impl IntoIterator<Item = impl Into<Subject>>)
        fails {
            values
                .into_iter()
                .map(Into::into)
                .any(|v: Subject| self.subject.loose_eq(&v))
        }
        default = "validation failed: objects do not match";
    }

    predicate! {
        /// Checks that the subject is a sequence containing `value`.
        ///
        /// Text subjects compare per character; non-sequence and empty
        /// subjects fail.
        pub contains / contains_msg (self, value: impl Into<Subject>)
        fails {
            let value = value.into();
            match self.subject.elements() {
                Some(items) => !items.iter().any(|item| item.loose_eq(&value)),
                None => true,
            }
        }
        default = "validation failed: object does not contain target";
    }

    // ========================================================================
    // EQUALITY
    // ========================================================================

    predicate! {
        /// Checks that the subject's text form equals that of `value`.
        pub is_equal_to / is_equal_to_msg (self, value: impl Into<Subject>)
        fails { self.subject.to_text() != value.into().to_text() }
        default = "validation failed: objects do not match";
    }

    predicate! {
        /// Case-insensitive variant of [`Self::is_equal_to`].
        pub is_equal_to_ci / is_equal_to_ci_msg (self, value: impl Into<Subject>)
        fails {
            self.subject.to_text().to_lowercase() != value.into().to_text().to_lowercase()
        }
        default = "validation failed: objects do not match";
    }

    // ========================================================================
    // TYPE
    // ========================================================================

    predicate! {
        /// Checks that the subject is text.
        pub is_string / is_string_msg (self)
        fails { self.subject.kind() != Kind::Text }
        default = "validation failed: subject is not a string";
    }

    predicate! {
        /// Checks that the subject is a number.
        pub is_number / is_number_msg (self)
        fails { self.subject.kind() != Kind::Number }
        default = "validation failed: subject is not a number";
    }

    predicate! {
        /// Checks that the subject is a boolean.
        pub is_boolean / is_boolean_msg (self)
        fails { self.subject.kind() != Kind::Bool }
        default = "validation failed: subject is not a boolean";
    }

    predicate! {
        /// Checks that the subject is a function value.
        pub is_function / is_function_msg (self)
        fails { self.subject.kind() != Kind::Callable }
        default = "validation failed: subject is not a function";
    }

    predicate! {
        /// Checks that the subject is a sequence.
        pub is_array / is_array_msg (self)
        fails { self.subject.kind() != Kind::Seq }
        default = "validation failed: subject is not an array";
    }

    predicate! {
        /// Checks that the subject is a primitive: number, text, or boolean.
        pub is_primitive / is_primitive_msg (self)
        fails { !matches!(self.subject.kind(), Kind::Number | Kind::Text | Kind::Bool) }
        default = "validation failed: subject is not of a primitive type";
    }

    predicate! {
        /// Checks that the subject is a date.
        pub is_date / is_date_msg (self)
        fails { self.subject.kind() != Kind::Date }
        default = "validation failed: subject is not a date";
    }

    predicate! {
        /// Checks that the subject is an error value.
        pub is_error / is_error_msg (self)
        fails { self.subject.kind() != Kind::Fault }
        default = "validation failed: subject is not an error";
    }

    predicate! {
        /// Checks that the subject is a deferred computation.
        pub is_future / is_future_msg (self)
        fails { self.subject.kind() != Kind::Future }
        default = "validation failed: subject is not a future";
    }

    // ========================================================================
    // NUMERIC
    // ========================================================================
    //
    // These apply the literal coercion rules: the subject is coerced with
    // `as_number()` and compared. NaN compares false everywhere, so a
    // non-numeric subject passes `is_positive`, `is_negative`, and `is_odd`.
    // That sharp edge is part of the contract; pair these with `is_number`
    // when the subject's kind is not already known.

    predicate! {
        /// Checks that the subject coerces to a number greater than zero.
        pub is_positive / is_positive_msg (self)
        fails { self.subject.as_number() <= 0.0 }
        default = "validation failed: subject is not positive";
    }

    predicate! {
        /// Checks that the subject coerces to a number less than zero.
        pub is_negative / is_negative_msg (self)
        fails { self.subject.as_number() >= 0.0 }
        default = "validation failed: subject is not negative";
    }

    predicate! {
        /// Checks that the subject does not coerce to an even number.
        pub is_odd / is_odd_msg (self)
        fails { self.subject.as_number() % 2.0 == 0.0 }
        default = "validation failed: subject is not odd";
    }

    predicate! {
        /// Checks that the subject coerces to an even number.
        pub is_even / is_even_msg (self)
        fails { self.subject.as_number() % 2.0 != 0.0 }
        default = "validation failed: subject is not even";
    }

    predicate! {
        /// Checks that the subject coerces to a finite number.
        pub is_finite / is_finite_msg (self)
        fails { !self.subject.as_number().is_finite() }
        default = "validation failed: subject is not finite";
    }

    // ========================================================================
    // NULLNESS
    // ========================================================================

    predicate! {
        /// Checks that the subject is not the absent value.
        pub is_defined / is_defined_msg (self)
        fails { matches!(self.subject, Subject::Undefined) }
        default = "validation failed: subject is undefined";
    }

    predicate! {
        /// Checks that the subject is neither absent nor null.
        pub is_defined_and_non_null / is_defined_and_non_null_msg (self)
        fails { matches!(self.subject, Subject::Undefined | Subject::Null) }
        default = "validation failed: subject is undefined or null";
    }

    predicate! {
        /// Checks that the subject is null.
        pub is_null / is_null_msg (self)
        fails { !matches!(self.subject, Subject::Null) }
        default = "validation failed: subject is not null";
    }

    // ========================================================================
    // STRUCTURAL
    // ========================================================================

    predicate! {
        /// Checks that the subject's kind tag matches `kind`.
        ///
        /// ```
        /// use fluent_assert::{Kind, validate};
        ///
        /// assert!(validate("x").is_instance_of(Kind::Text).check());
        /// assert!(validate("x").is_instance_of(Kind::Number).has_errors());
        /// ```
        pub is_instance_of / is_instance_of_msg (self, kind: Kind)
        fails { self.subject.kind() != kind }
        default = "validation failed: subject is not an instance of the given kind";
    }

    // ========================================================================
    // STRING-SHAPED
    // ========================================================================

    predicate! {
        /// Checks that the subject is neither absent, null, nor blank text.
        pub is_not_null_or_whitespace / is_not_null_or_whitespace_msg (self)
        fails {
            match &self.subject {
                Subject::Undefined | Subject::Null => true,
                subject => subject.to_text().trim().is_empty(),
            }
        }
        default = "validation failed: subject is null or whitespace";
    }

    predicate! {
        /// Checks that the subject's text form matches `pattern`.
        ///
        /// A malformed pattern is folded into a validation failure rather
        /// than propagated.
        pub is_match / is_match_msg (self, pattern: &str)
        fails {
            match Regex::new(pattern) {
                Ok(re) => !re.is_match(&self.subject.to_text()),
                Err(_) => true,
            }
        }
        default = "validation failed: subject does not match regular expression";
    }

    predicate! {
        /// Checks that the subject's text form parses as structural JSON:
        /// an object, an array, or `null`.
        ///
        /// Parse failures are folded into a validation failure.
        pub is_json / is_json_msg (self)
        fails {
            use serde_json::Value;
            match serde_json::from_str::<Value>(&self.subject.to_text()) {
                Ok(Value::Object(_) | Value::Array(_) | Value::Null) => false,
                Ok(_) | Err(_) => true,
            }
        }
        default = "validation failed: subject is not valid JSON";
    }

    predicate! {
        /// Checks that the subject's length is at most `max`.
        ///
        /// Length is the element count for sequences, the Unicode scalar
        /// count for text, and the text-form length otherwise.
        pub has_length / has_length_msg (self, max: usize)
        fails { self.subject.length() > max }
        default = "validation failed: length does not fall between the given values";
    }

    predicate! {
        /// Checks that the subject's length is within `[min, max]`.
        pub has_length_between / has_length_between_msg (self, min: usize, max: usize)
        fails {
            let len = self.subject.length();
            len < min || len > max
        }
        default = "validation failed: length does not fall between the given values";
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_chain_accumulates_nothing() {
        let chain = validate(4).is_number().is_even().is_positive();
        assert!(chain.check());
        assert!(!chain.has_errors());
        assert!(chain.errors().is_empty());
    }

    #[test]
    fn each_failure_appends_one_message() {
        let chain = validate(-3).is_number().is_even().is_positive();
        assert_eq!(chain.errors().len(), 2);
        assert_eq!(
            chain.errors()[0],
            "validation failed: subject is not even"
        );
        assert_eq!(
            chain.errors()[1],
            "validation failed: subject is not positive"
        );
    }

    #[test]
    fn negation_inverts_polarity() {
        assert!(validate(5).not().is_string().check());
        assert!(validate("x").not().is_string().has_errors());
    }

    #[test]
    fn double_negation_restores_polarity() {
        assert!(validate("x").not().not().is_string().check());
    }

    #[test]
    fn negation_is_a_persistent_mode() {
        // Both predicates run negated: is_string passes, is_number fails.
        let chain = validate(5).not().is_string().is_number();
        assert_eq!(chain.errors().len(), 1);
    }

    #[test]
    fn clear_keeps_negation_and_reporter() {
        let chain = validate(1).not().is_number(); // fails under negation
        assert!(chain.has_errors());
        let chain = chain.clear();
        assert!(chain.check());
        // Still negated: is_boolean on a number passes only because of it.
        assert!(chain.is_boolean().check());
    }

    #[test]
    fn custom_message_overload() {
        let chain = validate(1).is_string_msg("expected text");
        assert_eq!(chain.errors(), ["expected text"]);
    }

    #[test]
    fn throw_on_error_uses_the_first_message() {
        let err = validate(1)
            .is_string_msg("e1")
            .is_boolean_msg("e2")
            .throw_on_error()
            .unwrap_err();
        assert_eq!(err.message(), "e1");
    }

    #[test]
    fn throw_on_error_passes_a_clean_chain_through() {
        let chain = validate(1).is_number().throw_on_error();
        assert!(chain.is_ok());
    }

    #[test]
    fn is_valid_runs_the_custom_function() {
        assert!(
            validate(10)
                .is_valid(|s| s.as_number() > 5.0)
                .check()
        );
        assert!(
            validate(1)
                .is_valid(|s| s.as_number() > 5.0)
                .has_errors()
        );
    }

    #[test]
    fn membership_accepts_all_call_shapes() {
        assert!(validate(2).is_one_of([1, 2, 3]).check());
        assert!(validate(2).is_one_of(vec![1, 2, 3]).check());
        assert!(validate(5).is_one_of([1, 2, 3]).has_errors());
        // Loose equality crosses text and number.
        assert!(validate("2").is_one_of([1, 2, 3]).check());
    }

    #[test]
    fn empty_candidate_set_passes() {
        assert!(validate(5).is_one_of(Vec::<i64>::new()).check());
        assert!(validate(5).is_none_of(Vec::<i64>::new()).check());
    }

    #[test]
    fn is_none_of_rejects_members() {
        assert!(validate(5).is_none_of([1, 2, 3]).check());
        assert!(validate(2).is_none_of([1, 2, 3]).has_errors());
    }

    #[test]
    fn contains_scans_sequences_and_text() {
        assert!(validate(vec![1, 2, 3]).contains(2).check());
        assert!(validate(vec![1, 2, 3]).contains(9).has_errors());
        assert!(validate("hello").contains('e').check());
        assert!(validate("hello").contains('z').has_errors());
    }

    #[test]
    fn contains_fails_on_empty_and_non_sequences() {
        assert!(validate(Vec::<i64>::new()).contains(1).has_errors());
        assert!(validate(42).contains(4).has_errors());
    }

    #[test]
    fn equality_compares_text_forms() {
        assert!(validate("abc").is_equal_to("abc").check());
        assert!(validate("abc").is_equal_to("ABC").has_errors());
        assert!(validate("abc").is_equal_to_ci("ABC").check());
        assert!(validate(4).is_equal_to("4").check());
    }

    #[test]
    fn numeric_predicates_follow_coercion_rules() {
        assert!(validate(3).is_positive().is_odd().check());
        assert!(validate(-2).is_negative().is_even().check());
        assert!(validate(0).is_positive().has_errors());
        assert!(validate(0).is_negative().has_errors());
        assert!(validate(f64::INFINITY).is_finite().has_errors());
        assert!(validate(2).is_finite().check());
    }

    #[test]
    fn nan_coercion_sharp_edge() {
        // Non-numeric subjects coerce to NaN, and NaN comparisons are false.
        assert!(validate("abc").is_positive().check());
        assert!(validate("abc").is_negative().check());
        assert!(validate("abc").is_even().has_errors());
        assert!(validate("abc").is_finite().has_errors());
    }

    #[test]
    fn nullness_predicates() {
        let null = || validate(Option::<i64>::None);
        assert!(null().is_defined().check());
        assert!(null().is_defined_and_non_null().has_errors());
        assert!(null().is_null().check());

        let undefined = || validate(Subject::Undefined);
        assert!(undefined().is_defined().has_errors());
        assert!(undefined().is_defined_and_non_null().has_errors());
        assert!(undefined().is_null().has_errors());

        assert!(validate(1).is_defined_and_non_null().check());
    }

    #[test]
    fn kind_tags_drive_type_predicates() {
        use std::time::SystemTime;

        assert!(validate("x").is_string().check());
        assert!(validate(1).is_number().check());
        assert!(validate(true).is_boolean().check());
        assert!(validate(vec![1]).is_array().check());
        assert!(validate(SystemTime::now()).is_date().check());
        assert!(validate(Subject::fault("boom")).is_error().check());
        assert!(validate(Subject::callable()).is_function().check());
        assert!(validate(Subject::future()).is_future().check());
        assert!(validate(1).is_primitive().check());
        assert!(validate(Subject::other()).is_primitive().has_errors());
    }

    #[test]
    fn is_instance_of_matches_the_tag() {
        assert!(validate("x").is_instance_of(Kind::Text).check());
        assert!(validate("x").is_instance_of(Kind::Number).has_errors());
        assert!(validate("x").not().is_instance_of(Kind::Number).check());
    }

    #[test]
    fn whitespace_check() {
        assert!(validate("hello").is_not_null_or_whitespace().check());
        assert!(validate("   ").is_not_null_or_whitespace().has_errors());
        assert!(validate("").is_not_null_or_whitespace().has_errors());
        assert!(
            validate(Option::<i64>::None)
                .is_not_null_or_whitespace()
                .has_errors()
        );
    }

    #[test]
    fn regex_match() {
        assert!(validate("abc123").is_match(r"^[a-z]+\d+$").check());
        assert!(validate("123abc").is_match(r"^[a-z]+\d+$").has_errors());
        // Numbers match through their text form.
        assert!(validate(42).is_match(r"^\d+$").check());
    }

    #[test]
    fn malformed_pattern_is_a_failure_not_a_panic() {
        let chain = validate("x").is_match("(unclosed");
        assert_eq!(chain.errors().len(), 1);
    }

    #[test]
    fn json_accepts_structural_values_only() {
        assert!(validate("{}").is_json().check());
        assert!(validate(r#"{"a": [1, 2]}"#).is_json().check());
        assert!(validate("[1,2,3]").is_json().check());
        assert!(validate("null").is_json().check());
        assert!(validate("{bad").is_json().has_errors());
        assert!(validate("42").is_json().has_errors());
        assert!(validate(r#""text""#).is_json().has_errors());
    }

    #[test]
    fn length_bounds() {
        assert!(validate("abcd").has_length(5).check());
        assert!(validate("abcdef").has_length(5).has_errors());
        assert!(validate("abcd").has_length_between(2, 5).check());
        assert!(validate("a").has_length_between(2, 5).has_errors());
        assert!(validate("abcdef").has_length_between(2, 5).has_errors());
        assert!(validate(vec![1, 2, 3]).has_length(3).check());
    }
}
