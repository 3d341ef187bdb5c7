//! Syntax diagnostics.
//!
//! The lexer and parser only ever report errors, so a diagnostic has no
//! severity. It points at one primary location and may name related ones,
//! such as the tokens skipped while resynchronizing.

use std::fmt;

use sere_ir::Span;

use crate::ErrorCode;

/// A source range with a short message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Where the problem is.
    pub primary: Label,
    /// Other ranges involved, in the order they were attached.
    pub related: Vec<Label>,
    /// Grammar context, e.g. "while parsing a match statement".
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// An error at `span` carrying the code's default message.
    pub fn new(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            code,
            message: code.description().to_string(),
            primary: Label::new(span, "here"),
            related: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the text shown under the primary range.
    pub fn with_label(mut self, message: impl Into<String>) -> Self {
        self.primary.message = message.into();
        self
    }

    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related.push(Label::new(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn span(&self) -> Span {
        self.primary.span
    }

    /// True for codes reported by the lexer rather than the parser.
    pub fn is_lexical(&self) -> bool {
        !self.code.is_parser_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        write!(f, "\n  --> {}: {}", self.primary.span, self.primary.message)?;
        for label in &self.related {
            write!(f, "\n      {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_come_from_the_code() {
        let diag = Diagnostic::new(ErrorCode::E1007, Span::new(0, 3));
        assert_eq!(diag.message, "expected `except` or `finally` block");
        assert_eq!(diag.primary, Label::new(Span::new(0, 3), "here"));
        assert!(diag.related.is_empty());
        assert!(!diag.is_lexical());
        assert!(Diagnostic::new(ErrorCode::E0001, Span::point(0)).is_lexical());
    }

    #[test]
    fn test_builder() {
        let diag = Diagnostic::new(ErrorCode::E1001, Span::new(4, 5))
            .with_message("expected `:`, found `=`")
            .with_label("while parsing a case block")
            .with_related(Span::new(4, 12), "skipped")
            .with_note("patterns cannot be assigned to");

        assert_eq!(diag.span(), Span::new(4, 5));
        assert_eq!(diag.primary.message, "while parsing a case block");
        assert_eq!(diag.related, vec![Label::new(Span::new(4, 12), "skipped")]);
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(ErrorCode::E1004, Span::new(0, 5))
            .with_message("alternative patterns bind different names")
            .with_related(Span::new(10, 15), "skipped while recovering")
            .with_note("a note");

        assert_eq!(
            diag.to_string(),
            "error[E1004]: alternative patterns bind different names\n  \
             --> 0..5: here\n      \
             10..15: skipped while recovering\n  \
             = note: a note"
        );
    }
}
