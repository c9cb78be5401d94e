//! Frame openers, `end`, and the named-group registry.

use expressive_core::utils::is_valid_group_name;

use super::Expression;
use super::frame::{Frame, FrameKind};
use crate::{Error, Result};

impl Expression {
    fn open(&self, kind: FrameKind) -> Self {
        let mut next = self.clone();
        next.stack.push(Frame::new(kind));
        next
    }

    /// Alternation of the elements added until the matching
    /// [`end`](Self::end). Single characters, ranges and char sets fuse
    /// into one bracket class.
    pub fn any_of(&self) -> Self {
        self.open(FrameKind::AnyOf)
    }

    /// Negation of the elements added until the matching
    /// [`end`](Self::end).
    pub fn anything_but(&self) -> Self {
        self.open(FrameKind::AnythingBut)
    }

    /// Non-capturing group, `(?:...)`.
    pub fn group(&self) -> Self {
        self.open(FrameKind::Group)
    }

    /// Positional capture group, `(...)`.
    pub fn capture(&self) -> Self {
        let mut next = self.open(FrameKind::Capture);
        next.capture_count += 1;
        next
    }

    /// Named capture group, `(?<name>...)`. Also counts as a positional
    /// group.
    pub fn named_capture(&self, name: &str) -> Result<Self> {
        let mut next = self.clone();
        next.track_named_group(name)?;
        next.stack.push(Frame::new(FrameKind::NamedCapture(name.to_owned())));
        next.capture_count += 1;
        Ok(next)
    }

    /// `(?=...)`
    pub fn assert_ahead(&self) -> Self {
        self.open(FrameKind::AssertAhead)
    }

    /// `(?!...)`
    pub fn assert_not_ahead(&self) -> Self {
        self.open(FrameKind::AssertNotAhead)
    }

    /// `(?<=...)`
    pub fn assert_behind(&self) -> Self {
        self.open(FrameKind::AssertBehind)
    }

    /// `(?<!...)`
    pub fn assert_not_behind(&self) -> Self {
        self.open(FrameKind::AssertNotBehind)
    }

    /// Close the innermost open frame and push it into its parent as one
    /// element.
    pub fn end(&self) -> Result<Self> {
        if self.is_closed() {
            return Err(Error::CloseRoot);
        }
        self.current_frame().ensure_no_pending()?;

        let mut next = self.clone();
        let Some(frame) = next.stack.pop() else {
            return Err(Error::CloseRoot);
        };
        let element = frame.kind.close(frame.elements)?;
        next.try_push_element(element)?;
        Ok(next)
    }

    /// Validate `name` and register it. Names are never reused within one
    /// expression, including names spliced in from subexpressions.
    pub(super) fn track_named_group(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyGroupName);
        }
        if !is_valid_group_name(name) {
            return Err(Error::InvalidGroupName(name.to_owned()));
        }
        if !self.named_groups.insert(name.to_owned()) {
            return Err(Error::DuplicateGroupName(name.to_owned()));
        }
        Ok(())
    }
}
