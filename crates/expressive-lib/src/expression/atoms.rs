//! Fixed character classes, escapes and input anchors.

use expressive_core::Element;

use super::Expression;
use crate::{Error, Result};

impl Expression {
    /// Clone and push one element through the quantifier binder.
    pub(super) fn with_element(&self, element: Element) -> Self {
        let mut next = self.clone();
        next.push_element(element);
        next
    }

    /// `.`
    pub fn any_char(&self) -> Self {
        self.with_element(Element::AnyChar)
    }

    /// `\s`
    pub fn whitespace_char(&self) -> Self {
        self.with_element(Element::WhitespaceChar)
    }

    /// `\S`
    pub fn non_whitespace_char(&self) -> Self {
        self.with_element(Element::NonWhitespaceChar)
    }

    /// `\d`
    pub fn digit(&self) -> Self {
        self.with_element(Element::Digit)
    }

    /// `\D`
    pub fn non_digit(&self) -> Self {
        self.with_element(Element::NonDigit)
    }

    /// `\w`
    pub fn word(&self) -> Self {
        self.with_element(Element::Word)
    }

    /// `\W`
    pub fn non_word(&self) -> Self {
        self.with_element(Element::NonWord)
    }

    /// `\b`. Fails if a quantifier is pending.
    pub fn word_boundary(&self) -> Result<Self> {
        let mut next = self.clone();
        next.try_push_element(Element::WordBoundary)?;
        Ok(next)
    }

    /// `\B`. Fails if a quantifier is pending.
    pub fn non_word_boundary(&self) -> Result<Self> {
        let mut next = self.clone();
        next.try_push_element(Element::NonWordBoundary)?;
        Ok(next)
    }

    pub fn newline(&self) -> Self {
        self.with_element(Element::Newline)
    }

    pub fn carriage_return(&self) -> Self {
        self.with_element(Element::CarriageReturn)
    }

    pub fn tab(&self) -> Self {
        self.with_element(Element::Tab)
    }

    pub fn vertical_tab(&self) -> Self {
        self.with_element(Element::VerticalTab)
    }

    pub fn form_feed(&self) -> Self {
        self.with_element(Element::FormFeed)
    }

    /// The backspace character, `[\b]`. Fuses into `any_of` as `\b`.
    pub fn backspace(&self) -> Self {
        self.with_element(Element::Backspace)
    }

    /// `\0`
    pub fn null_byte(&self) -> Self {
        self.with_element(Element::NullByte)
    }

    /// `^`. At most once, and never after [`end_of_input`](Self::end_of_input).
    ///
    /// Does not consume a pending quantifier.
    pub fn start_of_input(&self) -> Result<Self> {
        if self.has_defined_start {
            return Err(Error::StartAlreadyDefined);
        }
        if self.has_defined_end {
            return Err(Error::StartAfterEnd);
        }
        let mut next = self.clone();
        next.has_defined_start = true;
        next.current_frame_mut().elements.push(Element::StartOfInput);
        Ok(next)
    }

    /// `$`. At most once.
    ///
    /// Does not consume a pending quantifier.
    pub fn end_of_input(&self) -> Result<Self> {
        if self.has_defined_end {
            return Err(Error::EndAlreadyDefined);
        }
        let mut next = self.clone();
        next.has_defined_end = true;
        next.current_frame_mut().elements.push(Element::EndOfInput);
        Ok(next)
    }
}
