//! Element to pattern text.

use std::ops::Range;

use expressive_core::Element;
use expressive_core::utils::{escape_class, escape_literal, push_escaped};

use super::fusion;

/// Render a sequence. A `\N` or `\0` escape that would absorb a following
/// digit is wrapped in `(?:...)`.
pub(crate) fn render_all(elements: &[Element], out: &mut String) {
    let mut open_escape: Option<Range<usize>> = None;
    for element in elements {
        let start = out.len();
        render(element, out);
        let len = out.len() - start;
        if len == 0 {
            continue;
        }
        if let Some(span) = open_escape.take()
            && out[start..].starts_with(|c: char| c.is_ascii_digit())
        {
            out.insert(span.end, ')');
            out.insert_str(span.start, "(?:");
        }
        if ends_with_numeric_escape(element) {
            open_escape = Some(out.len() - len..out.len());
        }
    }
}

fn ends_with_numeric_escape(element: &Element) -> bool {
    match element {
        Element::Backreference(_) | Element::NullByte => true,
        Element::Subexpression(children) => children
            .iter()
            .rfind(|child| !renders_empty(child))
            .is_some_and(ends_with_numeric_escape),
        _ => false,
    }
}

fn renders_empty(element: &Element) -> bool {
    match element {
        Element::Noop => true,
        Element::Subexpression(children) => children.iter().all(renders_empty),
        _ => false,
    }
}

pub(crate) fn render(element: &Element, out: &mut String) {
    match element {
        Element::AnyChar => out.push('.'),
        Element::WhitespaceChar => out.push_str(r"\s"),
        Element::NonWhitespaceChar => out.push_str(r"\S"),
        Element::Digit => out.push_str(r"\d"),
        Element::NonDigit => out.push_str(r"\D"),
        Element::Word => out.push_str(r"\w"),
        Element::NonWord => out.push_str(r"\W"),
        Element::WordBoundary => out.push_str(r"\b"),
        Element::NonWordBoundary => out.push_str(r"\B"),
        Element::Newline => out.push_str(r"\n"),
        Element::CarriageReturn => out.push_str(r"\r"),
        Element::Tab => out.push_str(r"\t"),
        Element::VerticalTab => out.push_str(r"\v"),
        Element::FormFeed => out.push_str(r"\f"),
        // Outside a class `\b` is a word boundary.
        Element::Backspace => out.push_str(r"[\b]"),
        Element::NullByte => out.push_str(r"\0"),

        Element::StartOfInput => out.push('^'),
        Element::EndOfInput => out.push('$'),
        Element::Noop => {}

        Element::Char(c) => push_escaped(out, *c, false),
        Element::String(s) => out.push_str(&escape_literal(s)),
        Element::Range(a, b) => push_class(out, false, |body| push_range(body, *a, *b)),
        Element::AnyOfChars(s) => push_class(out, false, |body| body.push_str(&escape_class(s))),
        Element::AnythingButChars(s) => {
            push_class(out, true, |body| body.push_str(&escape_class(s)))
        }
        Element::AnythingButString(s) => {
            out.push_str("(?:");
            for c in s.chars() {
                push_class(out, true, |body| push_escaped(body, c, true));
            }
            out.push(')');
        }
        Element::AnythingButRange(a, b) => push_class(out, true, |body| push_range(body, *a, *b)),
        Element::ControlChar(c) => {
            out.push_str(r"\c");
            out.push(c.to_ascii_uppercase());
        }
        Element::HexCode(hex) => {
            out.push_str(r"\x");
            out.push_str(hex);
        }
        Element::Utf16Code(hex) => {
            out.push_str(r"\u");
            out.push_str(hex);
        }
        Element::UnicodeCharCode(hex) => wrap(out, r"\u{", "}", |out| out.push_str(hex)),
        Element::UnicodeProperty(p) => wrap(out, r"\p{", "}", |out| out.push_str(p)),
        Element::NotUnicodeProperty(p) => wrap(out, r"\P{", "}", |out| out.push_str(p)),

        Element::Backreference(index) => {
            out.push('\\');
            out.push_str(&index.to_string());
        }
        Element::NamedBackreference(name) => wrap(out, r"\k<", ">", |out| out.push_str(name)),

        Element::Quantified { quantifier, inner } => {
            if inner.requires_grouping_when_quantified() {
                wrap(out, "(?:", ")", |out| render(inner, out));
            } else {
                render(inner, out);
            }
            out.push_str(&quantifier.to_string());
        }
        Element::Group(children) => wrap(out, "(?:", ")", |out| render_all(children, out)),
        Element::Capture(children) => wrap(out, "(", ")", |out| render_all(children, out)),
        Element::NamedCapture { name, children } => {
            out.push_str("(?<");
            out.push_str(name);
            out.push('>');
            render_all(children, out);
            out.push(')');
        }
        Element::AnyOf(children) => fusion::render_any_of(children, out),
        Element::AnythingBut(children) => fusion::render_anything_but(children, out),
        Element::AssertAhead(children) => wrap(out, "(?=", ")", |out| render_all(children, out)),
        Element::AssertNotAhead(children) => {
            wrap(out, "(?!", ")", |out| render_all(children, out))
        }
        Element::AssertBehind(children) => {
            wrap(out, "(?<=", ")", |out| render_all(children, out))
        }
        Element::AssertNotBehind(children) => {
            wrap(out, "(?<!", ")", |out| render_all(children, out))
        }
        Element::Subexpression(children) => render_all(children, out),
    }
}

/// `a-b` with both bounds escaped for class context.
pub(crate) fn push_range(body: &mut String, a: char, b: char) {
    push_escaped(body, a, true);
    body.push('-');
    push_escaped(body, b, true);
}

fn push_class(out: &mut String, negated: bool, body: impl FnOnce(&mut String)) {
    out.push_str(if negated { "[^" } else { "[" });
    body(out);
    out.push(']');
}

fn wrap(out: &mut String, open: &str, close: &str, inner: impl FnOnce(&mut String)) {
    out.push_str(open);
    inner(out);
    out.push_str(close);
}
