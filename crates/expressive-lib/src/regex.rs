//! Executable handle over the `regress` engine.

use std::fmt;

use expressive_core::Flag;

use crate::compile::Pattern;
use crate::{Error, Result};

/// Flags the engine models. `d`, `g` and `y` only live in the literal form.
const ENGINE_FLAGS: [Flag; 4] = [
    Flag::CaseInsensitive,
    Flag::Multiline,
    Flag::DotAll,
    Flag::Unicode,
];

/// A compiled pattern ready for matching.
///
/// `Display` gives the same `/source/flags` text as the [`Pattern`] it was
/// built from.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: Pattern,
    inner: regress::Regex,
}

impl Regex {
    pub fn new(pattern: &Pattern) -> Result<Self> {
        let flags: String = ENGINE_FLAGS
            .into_iter()
            .filter(|flag| pattern.flags().contains(*flag))
            .map(Flag::letter)
            .collect();
        let inner = regress::Regex::with_flags(pattern.source(), flags.as_str()).map_err(|e| {
            Error::Engine {
                pattern: pattern.to_string(),
                message: e.text,
            }
        })?;
        Ok(Self {
            pattern: pattern.clone(),
            inner,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.inner.find(text).is_some()
    }

    pub fn find(&self, text: &str) -> Option<regress::Match> {
        self.inner.find(text)
    }

    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> regress::Matches<'r, 't> {
        self.inner.find_iter(text)
    }

    /// The underlying engine object.
    pub fn as_regress(&self) -> &regress::Regex {
        &self.inner
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pattern.fmt(f)
    }
}

/// Whether the engine accepts `\p{property}` in unicode mode.
pub(crate) fn is_known_unicode_property(property: &str) -> bool {
    let probe = format!(r"\p{{{property}}}");
    regress::Regex::with_flags(&probe, "u").is_ok()
}
