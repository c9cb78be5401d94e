//! Splicing one closed expression into another.
//!
//! The spliced tree is rewritten so it keeps meaning the same thing inside
//! its host: positional backreferences shift past the host's groups, group
//! names get the namespace prefix and join the host's registry, and anchors
//! are dropped or reconciled with the host's own.

use expressive_core::{Element, Flag};

use super::Expression;
use crate::{Error, Result};

/// How [`Expression::subexpression`] splices its argument.
///
/// Defaults: no namespace, flags ignored, anchors ignored.
///
/// ```
/// use expressive_lib::SubexpressionOptions;
///
/// let options = SubexpressionOptions::default()
///     .namespace("inner_")
///     .ignore_flags(false);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubexpressionOptions {
    namespace: String,
    ignore_flags: bool,
    ignore_start_and_end: bool,
}

impl Default for SubexpressionOptions {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            ignore_flags: true,
            ignore_start_and_end: true,
        }
    }
}

impl SubexpressionOptions {
    /// Prefix for every group name in the spliced expression.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// When `false`, the spliced expression's flags are added to the host's.
    pub fn ignore_flags(mut self, value: bool) -> Self {
        self.ignore_flags = value;
        self
    }

    /// When `false`, the spliced expression's anchors are kept and must not
    /// collide with the host's.
    pub fn ignore_start_and_end(mut self, value: bool) -> Self {
        self.ignore_start_and_end = value;
        self
    }
}

impl Expression {
    /// Splice a closed expression in as a single element.
    ///
    /// A pending quantifier applies to the whole spliced expression, which
    /// is then wrapped in `(?:...)`.
    pub fn subexpression(&self, other: &Expression, options: &SubexpressionOptions) -> Result<Self> {
        other
            .ensure_closed()
            .map_err(|kind| Error::UnfinishedSubexpression { kind })?;
        let source = other.root_frame();
        source.ensure_no_pending()?;

        let mut next = self.clone();
        let mut ctx = MergeContext {
            capture_offset: next.capture_count,
            captures: 0,
            options,
            host: &mut next,
        };
        let children = ctx.merge_all(source.elements.clone())?;
        let captures = ctx.captures;

        next.capture_count += captures;
        if !options.ignore_flags {
            next.flags = next.flags.union(other.flags);
        }
        let element = Element::Subexpression(children);
        if element.requires_unicode() {
            next.flags.insert(Flag::Unicode);
        }
        next.push_element(element);
        Ok(next)
    }
}

/// State threaded through one splice.
struct MergeContext<'a> {
    host: &'a mut Expression,
    options: &'a SubexpressionOptions,
    /// Host capture groups opened before the splice.
    capture_offset: usize,
    /// Capture groups met so far in the spliced tree.
    captures: usize,
}

impl MergeContext<'_> {
    fn merge_all(&mut self, elements: Vec<Element>) -> Result<Vec<Element>> {
        elements
            .into_iter()
            .map(|element| self.merge(element))
            .collect()
    }

    fn merge(&mut self, element: Element) -> Result<Element> {
        Ok(match element {
            Element::StartOfInput => self.merge_start()?,
            Element::EndOfInput => self.merge_end()?,

            Element::Backreference(index) => Element::Backreference(index + self.capture_offset),
            Element::NamedBackreference(name) => {
                Element::NamedBackreference(self.namespaced(&name))
            }

            Element::Capture(children) => {
                self.captures += 1;
                Element::Capture(self.merge_all(children)?)
            }
            Element::NamedCapture { name, children } => {
                self.captures += 1;
                let name = self.namespaced(&name);
                self.host.track_named_group(&name)?;
                Element::NamedCapture {
                    name,
                    children: self.merge_all(children)?,
                }
            }

            Element::Quantified { quantifier, inner } => Element::Quantified {
                quantifier,
                inner: Box::new(self.merge(*inner)?),
            },
            Element::Group(children) => Element::Group(self.merge_all(children)?),
            Element::AnyOf(children) => Element::AnyOf(self.merge_all(children)?),
            Element::AnythingBut(children) => Element::AnythingBut(self.merge_all(children)?),
            Element::AssertAhead(children) => Element::AssertAhead(self.merge_all(children)?),
            Element::AssertNotAhead(children) => {
                Element::AssertNotAhead(self.merge_all(children)?)
            }
            Element::AssertBehind(children) => Element::AssertBehind(self.merge_all(children)?),
            Element::AssertNotBehind(children) => {
                Element::AssertNotBehind(self.merge_all(children)?)
            }
            Element::Subexpression(children) => {
                Element::Subexpression(self.merge_all(children)?)
            }

            leaf @ (Element::AnyChar
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
            | Element::Noop
            | Element::Char(_)
            | Element::String(_)
            | Element::Range(..)
            | Element::AnyOfChars(_)
            | Element::AnythingButChars(_)
            | Element::AnythingButString(_)
            | Element::AnythingButRange(..)
            | Element::ControlChar(_)
            | Element::HexCode(_)
            | Element::Utf16Code(_)
            | Element::UnicodeCharCode(_)
            | Element::UnicodeProperty(_)
            | Element::NotUnicodeProperty(_)) => leaf,
        })
    }

    fn merge_start(&mut self) -> Result<Element> {
        if self.options.ignore_start_and_end {
            return Ok(Element::Noop);
        }
        if self.host.has_defined_start {
            return Err(Error::ParentStartDefined);
        }
        if self.host.has_defined_end {
            return Err(Error::ParentEndDefined);
        }
        self.host.has_defined_start = true;
        Ok(Element::StartOfInput)
    }

    fn merge_end(&mut self) -> Result<Element> {
        if self.options.ignore_start_and_end {
            return Ok(Element::Noop);
        }
        if self.host.has_defined_end {
            return Err(Error::ParentEndDefined);
        }
        self.host.has_defined_end = true;
        Ok(Element::EndOfInput)
    }

    fn namespaced(&self, name: &str) -> String {
        format!("{}{}", self.options.namespace, name)
    }
}
