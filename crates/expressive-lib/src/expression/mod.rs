//! Immutable expression builder.
//!
//! State machine: a stack of open frames (index 0 is the root and is never
//! popped), a pending quantifier per frame, anchor and flag tracking, and a
//! registry of named groups.
//!
//! Builder methods take `&self`, clone, mutate the clone, and return it.
//! Fallible methods return [`Result`](crate::Result) and leave the receiver
//! untouched on error.

mod atoms;
mod frame;
mod groups;
mod invariants;
mod literals;
mod printer;
mod quantifiers;
mod references;
mod subexpression;

#[cfg(test)]
mod mod_tests;
#[cfg(test)]
mod printer_tests;

pub use printer::ExpressionPrinter;
pub use subexpression::SubexpressionOptions;

use indexmap::IndexSet;

use expressive_core::{Flag, Flags};

use crate::compile::{self, Pattern};
use crate::regex::Regex;
use crate::{Error, Result};

use frame::{Frame, FrameKind};

/// A pattern under construction.
///
/// Create with [`new`](Self::new), chain builder calls, close every opened
/// frame with [`end`](Self::end), then [`compile`](Self::compile).
#[derive(Debug, Clone)]
pub struct Expression {
    has_defined_start: bool,
    has_defined_end: bool,
    flags: Flags,
    stack: Vec<Frame>,
    named_groups: IndexSet<String>,
    capture_count: usize,
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression {
    /// An empty expression. Compiles to `/(?:)/`.
    pub fn new() -> Self {
        Self {
            has_defined_start: false,
            has_defined_end: false,
            flags: Flags::new(),
            stack: vec![Frame::new(FrameKind::Root)],
            named_groups: IndexSet::new(),
            capture_count: 0,
        }
    }

    fn with_flag(&self, flag: Flag) -> Self {
        let mut next = self.clone();
        next.flags.insert(flag);
        next
    }

    /// `d`: report the indices of each match and capture.
    pub fn with_indices(&self) -> Self {
        self.with_flag(Flag::MatchIndices)
    }

    /// `g`: find every match instead of stopping at the first.
    pub fn allow_multiple_matches(&self) -> Self {
        self.with_flag(Flag::Global)
    }

    /// `i`: ignore the upper/lower case distinction.
    pub fn case_insensitive(&self) -> Self {
        self.with_flag(Flag::CaseInsensitive)
    }

    /// `m`: start/end of input also match at line boundaries.
    pub fn line_by_line(&self) -> Self {
        self.with_flag(Flag::Multiline)
    }

    /// `s`: `any_char` also matches line terminators.
    pub fn single_line(&self) -> Self {
        self.with_flag(Flag::DotAll)
    }

    /// `u`: full unicode matching.
    pub fn unicode(&self) -> Self {
        self.with_flag(Flag::Unicode)
    }

    /// `y`: only match at the engine's current position.
    pub fn sticky(&self) -> Self {
        self.with_flag(Flag::Sticky)
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Capture groups (positional and named) opened so far.
    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    /// Registered group names, in registration order.
    pub fn named_groups(&self) -> impl Iterator<Item = &str> {
        self.named_groups.iter().map(String::as_str)
    }

    /// Whether every opened frame has been closed.
    pub fn is_closed(&self) -> bool {
        self.stack.len() == 1
    }

    pub fn printer(&self) -> ExpressionPrinter<'_> {
        ExpressionPrinter::new(self)
    }

    /// Compile into a pattern and its flags.
    ///
    /// Fails if a frame is still open or a quantifier is still pending.
    pub fn compile(&self) -> Result<Pattern> {
        self.ensure_closed()
            .map_err(|kind| Error::UnclosedFrame { kind })?;
        let root = self.root_frame();
        root.ensure_no_pending()?;
        let source = compile::compile_elements(&root.elements);
        Ok(Pattern::new(source, self.flags))
    }

    /// The literal form, `/pattern/flags`.
    pub fn to_regex_string(&self) -> Result<String> {
        Ok(self.compile()?.to_string())
    }

    /// Compile and hand the pattern to the matching engine.
    pub fn to_regex(&self) -> Result<Regex> {
        self.compile()?.to_regex()
    }

    /// `Err` carries the kind of the innermost open frame.
    fn ensure_closed(&self) -> std::result::Result<(), &'static str> {
        if !self.is_closed() {
            return Err(self.current_frame().kind.name());
        }
        Ok(())
    }

    fn root_frame(&self) -> &Frame {
        &self.stack[0]
    }
}
