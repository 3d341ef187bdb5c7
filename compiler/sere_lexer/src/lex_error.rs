//! Lexer errors.

use sere_diagnostic::{Diagnostic, ErrorCode};
use sere_ir::Span;

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid character `{0}` in source")]
    InvalidCharacter(char),
    #[error("unindent does not match any outer indentation level")]
    InconsistentDedent,
}

/// A lexer error with its location.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::InconsistentDedent => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::InvalidCharacter(_) => "not valid here",
            LexErrorKind::InconsistentDedent => "this line",
        };
        Diagnostic::new(self.code(), self.span)
            .with_message(self.kind.to_string())
            .with_label(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_messages() {
        let err = LexError::new(LexErrorKind::InvalidCharacter('$'), Span::new(4, 5));
        assert_eq!(err.code(), ErrorCode::E0002);
        assert_eq!(err.to_string(), "invalid character `$` in source at 4..5");

        let diag = err.to_diagnostic();
        assert_eq!(diag.message, "invalid character `$` in source");
        assert_eq!(diag.span(), Span::new(4, 5));
        assert_eq!(diag.primary.message, "not valid here");
        assert!(diag.is_lexical());
    }
}
