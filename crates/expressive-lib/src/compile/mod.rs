//! Tree-to-pattern compiler.
//!
//! Rendering is pure: the same element list always produces the same text.
//! Builder-level checks (open frames, dangling quantifiers) happen before
//! elements reach this module.

mod fusion;
mod render;

#[cfg(test)]
mod fusion_tests;
#[cfg(test)]
mod mod_tests;

use std::fmt;

use expressive_core::{Element, Flags};

use crate::Result;
use crate::regex::Regex;

/// Empty alternation; matches the empty string.
const EMPTY_PATTERN: &str = "(?:)";

/// Render a closed root element list.
pub fn compile_elements(elements: &[Element]) -> String {
    let mut out = String::new();
    render::render_all(elements, &mut out);
    if out.is_empty() {
        out.push_str(EMPTY_PATTERN);
    }
    out
}

/// A compiled pattern and its flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
    flags: Flags,
}

impl Pattern {
    pub fn new(source: String, flags: Flags) -> Self {
        Self { source, flags }
    }

    /// Pattern text, without delimiters.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn to_regex(&self) -> Result<Regex> {
        Regex::new(self)
    }
}

/// Literal form, `/source/flags`.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
