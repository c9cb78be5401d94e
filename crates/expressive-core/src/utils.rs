//! Escaping and argument-shape checks.

use std::borrow::Cow;

/// Characters with a meaning outside a bracket class.
const LITERAL_SPECIALS: &[char] = &[
    '\\', '.', '^', '$', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}', '/',
];

pub fn is_literal_special(c: char) -> bool {
    LITERAL_SPECIALS.contains(&c)
}

/// Inside a bracket class `-` forms ranges, so it is escaped as well.
pub fn is_class_special(c: char) -> bool {
    c == '-' || is_literal_special(c)
}

/// Escape `value` for use outside a bracket class.
///
/// # Examples
/// ```
/// use expressive_core::utils::escape_literal;
/// assert_eq!(escape_literal("a.b"), r"a\.b");
/// assert_eq!(escape_literal("a-b"), "a-b");
/// ```
pub fn escape_literal(value: &str) -> Cow<'_, str> {
    escape_with(value, is_literal_special)
}

/// Escape `value` for use inside a bracket class.
///
/// # Examples
/// ```
/// use expressive_core::utils::escape_class;
/// assert_eq!(escape_class("aeiou.-"), r"aeiou\.\-");
/// ```
pub fn escape_class(value: &str) -> Cow<'_, str> {
    escape_with(value, is_class_special)
}

/// Push one character, escaped for the given context.
pub fn push_escaped(out: &mut String, c: char, in_class: bool) {
    let special = if in_class {
        is_class_special(c)
    } else {
        is_literal_special(c)
    };
    if special {
        out.push('\\');
    }
    out.push(c);
}

fn escape_with(value: &str, is_special: fn(char) -> bool) -> Cow<'_, str> {
    if !value.chars().any(is_special) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() * 2);
    for c in value.chars() {
        if is_special(c) {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Group names: ASCII letters, digits and underscores, not starting with a digit.
pub fn is_valid_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `value` is made of hex digits only and its length is one of `lengths`.
pub fn is_hex_of_len(value: &str, lengths: &[usize]) -> bool {
    lengths.contains(&value.len()) && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// `Name` or `Name=Value`, where both sides are word characters.
///
/// Only the shape is checked here; whether the engine knows the property is
/// decided separately.
pub fn is_unicode_property_syntax(property: &str) -> bool {
    fn is_part(s: &str, allow_digits: bool) -> bool {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphabetic() || c == '_' || (allow_digits && c.is_ascii_digit()))
    }

    match property.split_once('=') {
        Some((name, value)) => is_part(name, false) && is_part(value, true),
        None => is_part(property, false),
    }
}
