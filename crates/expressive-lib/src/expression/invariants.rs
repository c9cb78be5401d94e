//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::Expression;
use super::frame::Frame;

impl Expression {
    /// Innermost open frame. The root frame is never popped.
    #[inline]
    pub(super) fn current_frame(&self) -> &Frame {
        self.stack
            .last()
            .expect("expression: frame stack is empty (root frame must never be popped)")
    }

    #[inline]
    pub(super) fn current_frame_mut(&mut self) -> &mut Frame {
        self.stack
            .last_mut()
            .expect("expression: frame stack is empty (root frame must never be popped)")
    }
}
