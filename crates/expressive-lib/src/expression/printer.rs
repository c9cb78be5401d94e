use std::fmt::Write;

use expressive_core::Element;

use super::Expression;
use super::frame::FrameKind;

/// Debug dump of an expression's frame stack and element tree.
///
/// Open frames are nested under the frame that contains them and marked
/// `(open)`.
pub struct ExpressionPrinter<'e> {
    expression: &'e Expression,
    flags: bool,
    names: bool,
    pending: bool,
}

impl<'e> ExpressionPrinter<'e> {
    pub fn new(expression: &'e Expression) -> Self {
        Self {
            expression,
            flags: false,
            names: false,
            pending: false,
        }
    }

    pub fn with_flags(mut self, value: bool) -> Self {
        self.flags = value;
        self
    }

    /// List registered group names before the tree.
    pub fn with_names(mut self, value: bool) -> Self {
        self.names = value;
        self
    }

    /// Show quantifiers still waiting for an element.
    pub fn with_pending(mut self, value: bool) -> Self {
        self.pending = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.flags {
            writeln!(w, "{:?}", self.expression.flags)?;
        }
        if self.names {
            let names: Vec<&str> = self.expression.named_groups().collect();
            writeln!(w, "Names({})", names.join(", "))?;
        }
        self.format_frame(0, w)
    }

    fn format_frame(&self, index: usize, w: &mut impl Write) -> std::fmt::Result {
        let frame = &self.expression.stack[index];
        let prefix = "  ".repeat(index);

        write!(w, "{}{}", prefix, frame_label(&frame.kind))?;
        if let FrameKind::NamedCapture(name) = &frame.kind {
            write!(w, " {}", name)?;
        }
        if index > 0 {
            write!(w, " (open)")?;
        }
        writeln!(w)?;

        for element in &frame.elements {
            self.format_element(element, index + 1, w)?;
        }
        if self.pending
            && let Some(quantifier) = frame.quantifier
        {
            writeln!(w, "{}  pending {}", prefix, quantifier.name())?;
        }
        if index + 1 < self.expression.stack.len() {
            self.format_frame(index + 1, w)?;
        }
        Ok(())
    }

    fn format_element(&self, element: &Element, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}{}", prefix, element.kind_name())?;

        match element {
            Element::Char(c) => write!(w, " {:?}", c)?,
            Element::String(s)
            | Element::AnyOfChars(s)
            | Element::AnythingButChars(s)
            | Element::AnythingButString(s) => write!(w, " {:?}", s)?,
            Element::Range(a, b) | Element::AnythingButRange(a, b) => {
                write!(w, " {:?}-{:?}", a, b)?
            }
            Element::ControlChar(c) => write!(w, " {}", c)?,
            Element::HexCode(value)
            | Element::Utf16Code(value)
            | Element::UnicodeCharCode(value)
            | Element::UnicodeProperty(value)
            | Element::NotUnicodeProperty(value)
            | Element::NamedBackreference(value)
            | Element::NamedCapture { name: value, .. } => write!(w, " {}", value)?,
            Element::Backreference(index) => write!(w, " {}", index)?,
            Element::Quantified { quantifier, .. } => write!(w, " {}", quantifier)?,
            Element::AnyChar
            | Element::WhitespaceChar
            | Element::NonWhitespaceChar
            | Element::Digit
            | Element::NonDigit
            | Element::Word
            | Element::NonWord
            | Element::WordBoundary
            | Element::NonWordBoundary
            | Element::Newline
            | Element::CarriageReturn
            | Element::Tab
            | Element::VerticalTab
            | Element::FormFeed
            | Element::Backspace
            | Element::NullByte
            | Element::StartOfInput
            | Element::EndOfInput
            | Element::Noop
            | Element::Group(_)
            | Element::Capture(_)
            | Element::AnyOf(_)
            | Element::AnythingBut(_)
            | Element::AssertAhead(_)
            | Element::AssertNotAhead(_)
            | Element::AssertBehind(_)
            | Element::AssertNotBehind(_)
            | Element::Subexpression(_) => {}
        }
        writeln!(w)?;

        for child in element.children() {
            self.format_element(child, indent + 1, w)?;
        }
        Ok(())
    }
}

fn frame_label(kind: &FrameKind) -> &'static str {
    match kind {
        FrameKind::Root => "Root",
        FrameKind::AnyOf => "AnyOf",
        FrameKind::AnythingBut => "AnythingBut",
        FrameKind::Group => "Group",
        FrameKind::Capture => "Capture",
        FrameKind::NamedCapture(_) => "NamedCapture",
        FrameKind::AssertAhead => "AssertAhead",
        FrameKind::AssertNotAhead => "AssertNotAhead",
        FrameKind::AssertBehind => "AssertBehind",
        FrameKind::AssertNotBehind => "AssertNotBehind",
    }
}
