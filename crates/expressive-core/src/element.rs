//! Element tree produced by the expression builder.
//!
//! Every builder call appends exactly one `Element` (or opens a frame that
//! later closes into one). The tree is closed: composites are only built
//! from children that are already complete, so there are no cycles.
//!
//! Literal payloads are kept raw. Escaping depends on where the element is
//! rendered (standalone or fused into a bracket class), so the compiler
//! owns it.

use crate::quantifier::Quantifier;

/// One node of the pattern tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    // Atomic classes and escapes.
    AnyChar,
    WhitespaceChar,
    NonWhitespaceChar,
    Digit,
    NonDigit,
    Word,
    NonWord,
    WordBoundary,
    NonWordBoundary,
    Newline,
    CarriageReturn,
    Tab,
    VerticalTab,
    FormFeed,
    /// The backspace escape. Renders as `[\b]` on its own, `\b` inside a class.
    Backspace,
    NullByte,

    // Anchors.
    StartOfInput,
    EndOfInput,
    /// Placeholder left behind when a spliced anchor is discarded.
    Noop,

    // Literals.
    /// A single literal character.
    Char(char),
    /// A literal of two or more characters.
    String(String),
    /// Inclusive character range, `start < end`.
    Range(char, char),
    /// Any one of the listed characters.
    AnyOfChars(String),
    /// Any character except the listed ones.
    AnythingButChars(String),
    /// Any string of the same length that differs at every position.
    AnythingButString(String),
    /// Any character outside the inclusive range.
    AnythingButRange(char, char),
    /// Control character for an upper-case ASCII letter.
    ControlChar(char),
    /// Two hex digits.
    HexCode(String),
    /// Four hex digits, one UTF-16 code unit.
    Utf16Code(String),
    /// Four or five hex digits, one code point. Needs unicode mode.
    UnicodeCharCode(String),
    /// `Name` or `Name=Value`. Needs unicode mode.
    UnicodeProperty(String),
    /// Negated [`Element::UnicodeProperty`].
    NotUnicodeProperty(String),

    // References.
    /// 1-based positional backreference.
    Backreference(usize),
    NamedBackreference(String),

    // Composites.
    /// A quantifier applied to exactly one element.
    Quantified {
        quantifier: Quantifier,
        inner: Box<Element>,
    },
    Group(Vec<Element>),
    Capture(Vec<Element>),
    NamedCapture {
        name: String,
        children: Vec<Element>,
    },
    AnyOf(Vec<Element>),
    AnythingBut(Vec<Element>),
    AssertAhead(Vec<Element>),
    AssertNotAhead(Vec<Element>),
    AssertBehind(Vec<Element>),
    AssertNotBehind(Vec<Element>),
    /// Root elements of another expression spliced into this one.
    Subexpression(Vec<Element>),
}

impl Element {
    /// Kind name used in dumps and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::AnyChar => "AnyChar",
            Self::WhitespaceChar => "WhitespaceChar",
            Self::NonWhitespaceChar => "NonWhitespaceChar",
            Self::Digit => "Digit",
            Self::NonDigit => "NonDigit",
            Self::Word => "Word",
            Self::NonWord => "NonWord",
            Self::WordBoundary => "WordBoundary",
            Self::NonWordBoundary => "NonWordBoundary",
            Self::Newline => "Newline",
            Self::CarriageReturn => "CarriageReturn",
            Self::Tab => "Tab",
            Self::VerticalTab => "VerticalTab",
            Self::FormFeed => "FormFeed",
            Self::Backspace => "Backspace",
            Self::NullByte => "NullByte",
            Self::StartOfInput => "StartOfInput",
            Self::EndOfInput => "EndOfInput",
            Self::Noop => "Noop",
            Self::Char(_) => "Char",
            Self::String(_) => "String",
            Self::Range(..) => "Range",
            Self::AnyOfChars(_) => "AnyOfChars",
            Self::AnythingButChars(_) => "AnythingButChars",
            Self::AnythingButString(_) => "AnythingButString",
            Self::AnythingButRange(..) => "AnythingButRange",
            Self::ControlChar(_) => "ControlChar",
            Self::HexCode(_) => "HexCode",
            Self::Utf16Code(_) => "Utf16Code",
            Self::UnicodeCharCode(_) => "UnicodeCharCode",
            Self::UnicodeProperty(_) => "UnicodeProperty",
            Self::NotUnicodeProperty(_) => "NotUnicodeProperty",
            Self::Backreference(_) => "Backreference",
            Self::NamedBackreference(_) => "NamedBackreference",
            Self::Quantified { .. } => "Quantified",
            Self::Group(_) => "Group",
            Self::Capture(_) => "Capture",
            Self::NamedCapture { .. } => "NamedCapture",
            Self::AnyOf(_) => "AnyOf",
            Self::AnythingBut(_) => "AnythingBut",
            Self::AssertAhead(_) => "AssertAhead",
            Self::AssertNotAhead(_) => "AssertNotAhead",
            Self::AssertBehind(_) => "AssertBehind",
            Self::AssertNotBehind(_) => "AssertNotBehind",
            Self::Subexpression(_) => "Subexpression",
        }
    }

    /// Whether a quantifier applied to this element must wrap it in `(?:...)`.
    ///
    /// Multi-character literals and spliced subexpressions render as a
    /// sequence, so a bare suffix would only repeat their last atom.
    pub fn requires_grouping_when_quantified(&self) -> bool {
        matches!(self, Self::String(_) | Self::Subexpression(_))
    }

    /// Whether a quantifier may apply to this element.
    ///
    /// False for assertions, which consume no input.
    pub fn is_quantifiable(&self) -> bool {
        !matches!(
            self,
            Self::WordBoundary
                | Self::NonWordBoundary
                | Self::StartOfInput
                | Self::EndOfInput
                | Self::Noop
                | Self::AssertAhead(_)
                | Self::AssertNotAhead(_)
                | Self::AssertBehind(_)
                | Self::AssertNotBehind(_)
        )
    }

    /// Whether this element can be merged into a single bracket class.
    pub fn is_fusable(&self) -> bool {
        matches!(
            self,
            Self::Char(_) | Self::Range(..) | Self::AnyOfChars(_) | Self::Backspace
        )
    }

    /// Whether this element sits outside the Basic Multilingual Plane or uses
    /// syntax that only exists in unicode mode.
    pub fn requires_unicode(&self) -> bool {
        match self {
            Self::UnicodeCharCode(_) | Self::UnicodeProperty(_) | Self::NotUnicodeProperty(_) => {
                true
            }
            Self::Range(a, b) | Self::AnythingButRange(a, b) => is_astral(*a) || is_astral(*b),
            _ => self.children().iter().any(Element::requires_unicode),
        }
    }

    /// Direct children of a composite; empty for atoms and literals.
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Quantified { inner, .. } => std::slice::from_ref(inner.as_ref()),
            Self::Group(children)
            | Self::Capture(children)
            | Self::NamedCapture { children, .. }
            | Self::AnyOf(children)
            | Self::AnythingBut(children)
            | Self::AssertAhead(children)
            | Self::AssertNotAhead(children)
            | Self::AssertBehind(children)
            | Self::AssertNotBehind(children)
            | Self::Subexpression(children) => children,
            _ => &[],
        }
    }
}

/// Code points above U+FFFF take a surrogate pair in UTF-16.
pub fn is_astral(c: char) -> bool {
    u32::from(c) > 0xFFFF
}
