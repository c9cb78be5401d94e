#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for composable pattern expressions.
//!
//! Three pieces:
//! - **Elements** (`Element`): the closed tree every builder call produces
//! - **Quantifiers** (`Quantifier`): repetition operators bound to one element
//! - **Flags** (`Flags`): the engine flag set, rendered in canonical order
//!
//! Escaping and argument-shape checks shared by the builder live in [`utils`].

pub mod element;
pub mod flags;
pub mod quantifier;
pub mod utils;

#[cfg(test)]
mod element_tests;
#[cfg(test)]
mod flags_tests;
#[cfg(test)]
mod utils_tests;

pub use element::Element;
pub use flags::{Flag, Flags};
pub use quantifier::Quantifier;
