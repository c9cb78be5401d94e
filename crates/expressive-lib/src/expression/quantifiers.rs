//! Quantifier setters and the binder that attaches them.
//!
//! A quantifier waits on the current frame until the next element is pushed,
//! then wraps exactly that element. Anchors bypass the binder.

use expressive_core::{Element, Quantifier};

use super::Expression;
use crate::{Error, Result};

impl Expression {
    /// Append `element` to the current frame, wrapped in the pending
    /// quantifier if there is one.
    pub(super) fn push_element(&mut self, element: Element) {
        let frame = self.current_frame_mut();
        let element = match frame.quantifier.take() {
            Some(quantifier) => Element::Quantified {
                quantifier,
                inner: Box::new(element),
            },
            None => element,
        };
        frame.elements.push(element);
    }

    /// Like [`push_element`](Self::push_element), but refuses to bind a
    /// pending quantifier to an assertion. The quantifier stays pending on
    /// error.
    pub(super) fn try_push_element(&mut self, element: Element) -> Result<()> {
        if let Some(quantifier) = self.current_frame().quantifier
            && !element.is_quantifiable()
        {
            return Err(Error::UnquantifiableElement {
                kind: element.kind_name(),
                quantifier: quantifier.name(),
            });
        }
        self.push_element(element);
        Ok(())
    }

    fn quantify(&self, quantifier: Quantifier) -> Result<Self> {
        if let Some(pending) = self.current_frame().quantifier {
            return Err(Error::QuantifierConflict {
                requested: quantifier.name(),
                pending: pending.name(),
            });
        }
        let mut next = self.clone();
        next.current_frame_mut().quantifier = Some(quantifier);
        Ok(next)
    }

    /// Zero or one of the next element.
    pub fn optional(&self) -> Result<Self> {
        self.quantify(Quantifier::Optional)
    }

    pub fn zero_or_more(&self) -> Result<Self> {
        self.quantify(Quantifier::ZeroOrMore)
    }

    pub fn zero_or_more_lazy(&self) -> Result<Self> {
        self.quantify(Quantifier::ZeroOrMoreLazy)
    }

    pub fn one_or_more(&self) -> Result<Self> {
        self.quantify(Quantifier::OneOrMore)
    }

    pub fn one_or_more_lazy(&self) -> Result<Self> {
        self.quantify(Quantifier::OneOrMoreLazy)
    }

    /// Exactly `n` of the next element. `n` must be positive.
    pub fn exactly(&self, n: u32) -> Result<Self> {
        ensure_positive("n", n)?;
        self.quantify(Quantifier::Exactly(n))
    }

    pub fn at_least(&self, n: u32) -> Result<Self> {
        ensure_positive("n", n)?;
        self.quantify(Quantifier::AtLeast(n))
    }

    pub fn at_least_lazy(&self, n: u32) -> Result<Self> {
        ensure_positive("n", n)?;
        self.quantify(Quantifier::AtLeastLazy(n))
    }

    /// Between `x` and `y` of the next element, inclusive. Requires `x < y`.
    pub fn between(&self, x: u32, y: u32) -> Result<Self> {
        ensure_ordered(x, y)?;
        self.quantify(Quantifier::Between(x, y))
    }

    pub fn between_lazy(&self, x: u32, y: u32) -> Result<Self> {
        ensure_ordered(x, y)?;
        self.quantify(Quantifier::BetweenLazy(x, y))
    }
}

fn ensure_positive(argument: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidCount { argument, value });
    }
    Ok(())
}

fn ensure_ordered(x: u32, y: u32) -> Result<()> {
    if x >= y {
        return Err(Error::InvalidBetween { x, y });
    }
    Ok(())
}
