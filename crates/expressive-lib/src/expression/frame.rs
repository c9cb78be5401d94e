//! Open composites on the builder's stack.

use expressive_core::{Element, Quantifier};

use crate::{Error, Result};

/// What an open frame turns into once it is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FrameKind {
    Root,
    AnyOf,
    AnythingBut,
    Group,
    Capture,
    NamedCapture(String),
    AssertAhead,
    AssertNotAhead,
    AssertBehind,
    AssertNotBehind,
}

impl FrameKind {
    /// Name of the builder method that opened the frame.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::AnyOf => "any_of",
            Self::AnythingBut => "anything_but",
            Self::Group => "group",
            Self::Capture => "capture",
            Self::NamedCapture(_) => "named_capture",
            Self::AssertAhead => "assert_ahead",
            Self::AssertNotAhead => "assert_not_ahead",
            Self::AssertBehind => "assert_behind",
            Self::AssertNotBehind => "assert_not_behind",
        }
    }

    /// Wrap the frame's children as the composite it stands for.
    pub(crate) fn close(self, children: Vec<Element>) -> Result<Element> {
        Ok(match self {
            Self::Root => return Err(Error::UnsupportedElement(self.name())),
            Self::AnyOf => Element::AnyOf(children),
            Self::AnythingBut => Element::AnythingBut(children),
            Self::Group => Element::Group(children),
            Self::Capture => Element::Capture(children),
            Self::NamedCapture(name) => Element::NamedCapture { name, children },
            Self::AssertAhead => Element::AssertAhead(children),
            Self::AssertNotAhead => Element::AssertNotAhead(children),
            Self::AssertBehind => Element::AssertBehind(children),
            Self::AssertNotBehind => Element::AssertNotBehind(children),
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub(crate) kind: FrameKind,
    /// Applied to the next element pushed into this frame.
    pub(crate) quantifier: Option<Quantifier>,
    pub(crate) elements: Vec<Element>,
}

impl Frame {
    pub(crate) fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            quantifier: None,
            elements: Vec::new(),
        }
    }

    /// Fails while a quantifier is still waiting for its element.
    pub(crate) fn ensure_no_pending(&self) -> Result<()> {
        match self.quantifier {
            Some(quantifier) => Err(Error::DanglingQuantifier {
                kind: self.kind.name(),
                quantifier: quantifier.name(),
            }),
            None => Ok(()),
        }
    }
}
