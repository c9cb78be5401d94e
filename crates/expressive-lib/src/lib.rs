//! Build regular expressions from typed, composable parts.
//!
//! Every builder call returns a new [`Expression`]; the receiver is never
//! modified, so a partial expression can be reused as the basis of several
//! continuations. Compilation turns a closed expression into a pattern
//! string plus canonical flags, or into an executable [`Regex`].
//!
//! # Example
//!
//! ```
//! use expressive_lib::Expression;
//!
//! # fn main() -> expressive_lib::Result<()> {
//! let expr = Expression::new()
//!     .start_of_input()?
//!     .optional()?
//!     .string("0x")?
//!     .capture()
//!     .one_or_more()?
//!     .any_of()
//!     .range('A', 'F')?
//!     .range('a', 'f')?
//!     .range('0', '9')?
//!     .end()?
//!     .end()?
//!     .end_of_input()?;
//!
//! assert_eq!(expr.to_regex_string()?, "/^(?:0x)?([A-Fa-f0-9]+)$/");
//! assert!(expr.to_regex()?.is_match("0xC0FFEE"));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod expression;
pub mod regex;


pub use compile::Pattern;
pub use expression::{Expression, ExpressionPrinter, SubexpressionOptions};
pub use expressive_core::{Element, Flag, Flags, Quantifier};
pub use regex::Regex;

/// Errors raised while building or compiling an expression.
///
/// Every error aborts only the call that raised it; the receiver is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{argument} cannot be an empty string")]
    EmptyString { argument: &'static str },

    #[error("{argument} must be a positive integer (got {value})")]
    InvalidCount { argument: &'static str, value: u32 },

    #[error("x must be less than y (x = {x}, y = {y})")]
    InvalidBetween { x: u32, y: u32 },

    #[error(
        "a must have a smaller character value than b (a = {}, b = {})",
        code_point(.a),
        code_point(.b)
    )]
    InvalidRange { a: char, b: char },

    #[error("control_char() requires an ASCII letter (got {0:?})")]
    InvalidControlChar(char),

    #[error("{method}() requires a {digits} digit hexadecimal string (got {value:?})")]
    InvalidHexCode {
        method: &'static str,
        digits: &'static str,
        value: String,
    },

    #[error("{0:?} is not a valid unicode property")]
    InvalidUnicodeProperty(String),

    #[error("name {0:?} is not valid (only letters, numbers, and underscores)")]
    InvalidGroupName(String),

    #[error("name must be at least one character")]
    EmptyGroupName,

    #[error(
        "cannot quantify regular expression with {requested:?} because it's already being quantified with {pending:?}"
    )]
    QuantifierConflict {
        requested: &'static str,
        pending: &'static str,
    },

    #[error("cannot close {kind:?} while the {quantifier:?} quantifier has nothing to apply to")]
    DanglingQuantifier {
        kind: &'static str,
        quantifier: &'static str,
    },

    #[error("cannot apply the {quantifier:?} quantifier to {kind:?}, which matches no input")]
    UnquantifiableElement {
        kind: &'static str,
        quantifier: &'static str,
    },

    #[error("this regex already has a defined start of input")]
    StartAlreadyDefined,

    #[error("cannot define the start of input after the end of input")]
    StartAfterEnd,

    #[error("this regex already has a defined end of input")]
    EndAlreadyDefined,

    #[error("cannot call end while building the root expression")]
    CloseRoot,

    #[error(
        "cannot compute the value of a not yet fully specified regex object (try adding a .end() call to match the {kind:?})"
    )]
    UnclosedFrame { kind: &'static str },

    #[error(
        "cannot use an unfinished expression as a subexpression (try adding a .end() call to match the {kind:?})"
    )]
    UnfinishedSubexpression { kind: &'static str },

    #[error("invalid index {index}. There are {count} capture groups on this expression")]
    InvalidBackreference { index: usize, count: usize },

    #[error("no capture group called {0:?} exists (create one with .named_capture())")]
    UnknownNamedGroup(String),

    #[error("cannot use {0} again for a capture group")]
    DuplicateGroupName(String),

    #[error(
        "the parent regex already has a defined start of input. You can ignore a subexpression's start_of_input/end_of_input markers with the ignore_start_and_end option"
    )]
    ParentStartDefined,

    #[error(
        "the parent regex already has a defined end of input. You can ignore a subexpression's start_of_input/end_of_input markers with the ignore_start_and_end option"
    )]
    ParentEndDefined,

    #[error("can't process unsupported element type: {0}")]
    UnsupportedElement(&'static str),

    #[error("engine rejected pattern {pattern:?}: {message}")]
    Engine { pattern: String, message: String },
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}

/// Result type for builder and compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
