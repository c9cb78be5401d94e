//! Bracket-class fusion for `any_of` and `anything_but`.
//!
//! Fusable members (single chars, ranges, char sets, backspace) are merged
//! into one bracket body in their original order. Everything else becomes an
//! alternative rendered ahead of the fused class.

use expressive_core::Element;
use expressive_core::utils::{escape_class, push_escaped};

use super::render::{push_range, render};

/// Fused class body plus the members that could not be fused.
struct Partition<'e> {
    body: String,
    rest: Vec<&'e Element>,
}

fn partition(children: &[Element]) -> Partition<'_> {
    let mut body = String::new();
    let mut rest = Vec::new();
    for child in children {
        if !push_class_member(child, &mut body) {
            rest.push(child);
        }
    }
    Partition { body, rest }
}

/// Appends the class-body text of a fusable element. Returns `false` for
/// anything else.
fn push_class_member(element: &Element, body: &mut String) -> bool {
    match element {
        Element::Char(c) => push_escaped(body, *c, true),
        Element::Range(a, b) => push_range(body, *a, *b),
        Element::AnyOfChars(s) => body.push_str(&escape_class(s)),
        Element::Backspace => body.push_str(r"\b"),
        _ => return false,
    }
    true
}

fn push_alternation(rest: &[&Element], out: &mut String) {
    for (i, element) in rest.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        render(element, out);
    }
}

/// `[body]`, or `(?:r1|r2|[body])` when some members are not fusable.
pub(crate) fn render_any_of(children: &[Element], out: &mut String) {
    let Partition { body, rest } = partition(children);

    if rest.is_empty() {
        out.push('[');
        out.push_str(&body);
        out.push(']');
        return;
    }

    out.push_str("(?:");
    push_alternation(&rest, out);
    if !body.is_empty() {
        out.push_str("|[");
        out.push_str(&body);
        out.push(']');
    }
    out.push(')');
}

/// `[^body]`, or `(?:(?!r1|r2)[^body])` when some members are not fusable.
///
/// Without fusable members the trailing class is `[\s\S]`, any single
/// character not starting one of the alternatives.
pub(crate) fn render_anything_but(children: &[Element], out: &mut String) {
    let Partition { body, rest } = partition(children);

    if rest.is_empty() {
        out.push_str("[^");
        out.push_str(&body);
        out.push(']');
        return;
    }

    out.push_str("(?:(?!");
    push_alternation(&rest, out);
    out.push(')');
    if body.is_empty() {
        out.push_str(r"[\s\S]");
    } else {
        out.push_str("[^");
        out.push_str(&body);
        out.push(']');
    }
    out.push(')');
}
