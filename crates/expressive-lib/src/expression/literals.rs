//! Literal characters, strings, ranges and code escapes.
//!
//! Payloads are stored unescaped; the compiler escapes them for the context
//! they end up in.

use expressive_core::utils::{is_hex_of_len, is_unicode_property_syntax};
use expressive_core::{Element, Flag};

use super::Expression;
use crate::regex::is_known_unicode_property;
use crate::{Error, Result};

impl Expression {
    /// Push `element`, turning on unicode mode first when it needs it.
    fn with_literal(&self, element: Element) -> Self {
        let unicode = element.requires_unicode();
        let mut next = self.with_element(element);
        if unicode {
            next.flags.insert(Flag::Unicode);
        }
        next
    }

    /// A single literal character.
    pub fn char(&self, c: char) -> Self {
        self.with_element(Element::Char(c))
    }

    /// A literal string. Quantifiers apply to the whole string.
    pub fn string(&self, s: &str) -> Result<Self> {
        ensure_non_empty("s", s)?;
        let mut chars = s.chars();
        let element = match (chars.next(), chars.next()) {
            (Some(c), None) => Element::Char(c),
            _ => Element::String(s.to_owned()),
        };
        Ok(self.with_element(element))
    }

    /// Inclusive range `[a-b]`; requires `a < b`.
    ///
    /// Bounds outside the Basic Multilingual Plane turn on unicode mode.
    pub fn range(&self, a: char, b: char) -> Result<Self> {
        ensure_range(a, b)?;
        Ok(self.with_literal(Element::Range(a, b)))
    }

    /// Any one of the characters in `chars`.
    pub fn any_of_chars(&self, chars: &str) -> Result<Self> {
        ensure_non_empty("chars", chars)?;
        Ok(self.with_element(Element::AnyOfChars(chars.to_owned())))
    }

    /// Any character not in `chars`.
    pub fn anything_but_chars(&self, chars: &str) -> Result<Self> {
        ensure_non_empty("chars", chars)?;
        Ok(self.with_element(Element::AnythingButChars(chars.to_owned())))
    }

    /// Any string of the same length that differs from `s` at every
    /// position.
    pub fn anything_but_string(&self, s: &str) -> Result<Self> {
        ensure_non_empty("str", s)?;
        Ok(self.with_element(Element::AnythingButString(s.to_owned())))
    }

    /// Any character outside the inclusive range `a..=b`; requires `a < b`.
    pub fn anything_but_range(&self, a: char, b: char) -> Result<Self> {
        ensure_range(a, b)?;
        Ok(self.with_literal(Element::AnythingButRange(a, b)))
    }

    /// `\cX`, the control character for an ASCII letter. The letter is
    /// rendered upper-cased.
    pub fn control_char(&self, c: char) -> Result<Self> {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidControlChar(c));
        }
        Ok(self.with_element(Element::ControlChar(c.to_ascii_uppercase())))
    }

    /// `\xHH`
    pub fn hex_code(&self, hex: &str) -> Result<Self> {
        ensure_hex("hex_code", "2", hex, &[2])?;
        Ok(self.with_element(Element::HexCode(hex.to_owned())))
    }

    /// `\uHHHH`, one UTF-16 code unit.
    pub fn utf16_code(&self, hex: &str) -> Result<Self> {
        ensure_hex("utf16_code", "4", hex, &[4])?;
        Ok(self.with_element(Element::Utf16Code(hex.to_owned())))
    }

    /// `\u{HHHHH}`, one code point. Turns on unicode mode.
    pub fn unicode_char_code(&self, hex: &str) -> Result<Self> {
        ensure_hex("unicode_char_code", "4 or 5", hex, &[4, 5])?;
        Ok(self.with_literal(Element::UnicodeCharCode(hex.to_owned())))
    }

    /// `\p{Name}` or `\p{Name=Value}`. Turns on unicode mode.
    pub fn unicode_property(&self, property: &str) -> Result<Self> {
        ensure_unicode_property(property)?;
        Ok(self.with_literal(Element::UnicodeProperty(property.to_owned())))
    }

    /// `\P{Name}` or `\P{Name=Value}`. Turns on unicode mode.
    pub fn not_unicode_property(&self, property: &str) -> Result<Self> {
        ensure_unicode_property(property)?;
        Ok(self.with_literal(Element::NotUnicodeProperty(property.to_owned())))
    }
}

fn ensure_non_empty(argument: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::EmptyString { argument });
    }
    Ok(())
}

fn ensure_range(a: char, b: char) -> Result<()> {
    if a >= b {
        return Err(Error::InvalidRange { a, b });
    }
    Ok(())
}

fn ensure_hex(
    method: &'static str,
    digits: &'static str,
    value: &str,
    lengths: &[usize],
) -> Result<()> {
    if !is_hex_of_len(value, lengths) {
        return Err(invalid_hex(method, digits, value));
    }
    Ok(())
}

fn invalid_hex(method: &'static str, digits: &'static str, value: &str) -> Error {
    Error::InvalidHexCode {
        method,
        digits,
        value: value.to_owned(),
    }
}

fn ensure_unicode_property(property: &str) -> Result<()> {
    if !is_unicode_property_syntax(property) || !is_known_unicode_property(property) {
        return Err(Error::InvalidUnicodeProperty(property.to_owned()));
    }
    Ok(())
}
