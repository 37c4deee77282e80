//! Macro for defining chain predicates with minimal boilerplate.
//!
//! Every predicate comes in two overloads: the plain method using its default
//! message, and a `*_msg` twin taking a caller-supplied message. Both route
//! through `ValidationChain::assert`, which is the single place where
//! negation, accumulation, and reporting meet. The macro generates the pair
//! from one block:
//!
//! ```rust,ignore
//! predicate! {
//!     /// Checks that the subject is a boolean.
//!     pub is_boolean / is_boolean_msg (self)
//!     fails { self.subject.kind() != Kind::Bool }
//!     default = "validation failed: subject is not a boolean";
//! }
//! ```
//!
//! The `fails` block computes the non-negated failure condition; it sees the
//! receiver (named at the call site, like the rule blocks of a hand-written
//! `impl`) and any extra arguments.

macro_rules! predicate {
    (
        $(#[$meta:meta])*
        pub $name:ident / $with:ident ($self_:ident $(, $arg:ident: $ty:ty)*)
        fails $fail:block
        default = $default:expr;
    ) => {
        $(#[$meta])*
        #[must_use]
        pub fn $name(self $(, $arg: $ty)*) -> Self {
            self.$with($($arg,)* $default)
        }

        #[doc = concat!(
            "Same check as [`Self::",
            stringify!($name),
            "`], reported with a caller-supplied message."
        )]
        #[must_use]
        pub fn $with(
            mut $self_
            $(, $arg: $ty)*,
            msg: impl Into<::std::borrow::Cow<'static, str>>,
        ) -> Self {
            let failed: bool = $fail;
            $self_.assert(failed, msg);
            $self_
        }
    };
}

pub(crate) use predicate;
