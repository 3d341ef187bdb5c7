//! Parser snapshots for speculative parsing.
//!
//! Backtracking happens at two places only:
//!
//! - statement-start `match`, which is a match statement only when a
//!   subject, `:`, a newline, an indent and `case` follow; otherwise the line
//!   is re-parsed as an ordinary statement;
//! - closed-pattern dispatch, where each alternative that fails without
//!   consuming input is rolled back before the next is tried.
//!
//! A snapshot records the cursor position, the context flags and the number
//! of diagnostics reported so far. Restoring drops diagnostics reported
//! during the abandoned attempt.

use tracing::trace;

use crate::context::ParseContext;
use crate::Parser;

/// A lightweight snapshot of parser state.
#[derive(Clone, Copy, Debug)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
    pub(crate) context: ParseContext,
    pub(crate) error_count: usize,
}

impl ParserSnapshot {
    #[inline]
    pub(crate) fn new(cursor_pos: usize, context: ParseContext, error_count: usize) -> Self {
        Self {
            cursor_pos,
            context,
            error_count,
        }
    }
}

impl Parser<'_> {
    /// Capture the current parser state.
    #[inline]
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(self.cursor.position(), self.context, self.errors.len())
    }

    /// Roll back to a previously captured state.
    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        trace!(
            from = self.cursor.position(),
            to = snapshot.cursor_pos,
            "restoring parser snapshot"
        );
        self.cursor.set_position(snapshot.cursor_pos);
        self.context = snapshot.context;
        self.errors.truncate(snapshot.error_count);
    }
}
