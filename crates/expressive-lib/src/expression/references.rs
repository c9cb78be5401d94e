//! Backreferences to earlier capture groups.

use expressive_core::Element;

use super::Expression;
use crate::{Error, Result};

impl Expression {
    /// `\N`, the text matched by the `index`-th capture group (1-based,
    /// counting named groups too).
    pub fn backreference(&self, index: usize) -> Result<Self> {
        if index == 0 || index > self.capture_count {
            return Err(Error::InvalidBackreference {
                index,
                count: self.capture_count,
            });
        }
        Ok(self.with_element(Element::Backreference(index)))
    }

    /// `\k<name>`, the text matched by a named capture group.
    pub fn named_backreference(&self, name: &str) -> Result<Self> {
        if !self.named_groups.contains(name) {
            return Err(Error::UnknownNamedGroup(name.to_owned()));
        }
        Ok(self.with_element(Element::NamedBackreference(name.to_owned())))
    }
}
