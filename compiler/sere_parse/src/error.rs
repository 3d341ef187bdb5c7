//! Parse error types.

use sere_diagnostic::{Diagnostic, ErrorCode};
use sere_ir::{Span, Token, TokenKind};

use crate::recovery::TokenSet;

/// The kinds of syntax error the parser reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A token that no rule accepts here.
    UnexpectedToken,
    /// An operand or sub-expression is missing.
    ExpectedExpression,
    /// A block header with no indented body.
    UnterminatedBlock,
    /// Or-pattern alternatives bind different names.
    InconsistentPatternBindings,
    /// A sequence pattern with more than one star.
    MultipleStarPatterns,
    /// A literal key repeated in one mapping pattern.
    DuplicateMappingKey,
    /// `try` with neither `except` nor `finally`.
    TryWithoutHandler,
    /// Decorators not followed by `def`, `class` or `async def`.
    DecoratorWithoutTarget,
    /// Input ended inside an open construct.
    EndOfInput,
    /// Assignment, augmented assignment or `del` on something not assignable.
    InvalidAssignmentTarget,
    /// Parameters out of order or repeated.
    InvalidParameters,
    /// A keyword repeated in one class pattern.
    DuplicateKeywordPattern,
    /// A structurally invalid pattern.
    InvalidPattern,
    /// One name bound twice in one pattern.
    DuplicateBinding,
}

impl ParseErrorKind {
    pub fn error_code(self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::UnterminatedBlock => ErrorCode::E1003,
            ParseErrorKind::InconsistentPatternBindings => ErrorCode::E1004,
            ParseErrorKind::MultipleStarPatterns => ErrorCode::E1005,
            ParseErrorKind::DuplicateMappingKey => ErrorCode::E1006,
            ParseErrorKind::TryWithoutHandler => ErrorCode::E1007,
            ParseErrorKind::DecoratorWithoutTarget => ErrorCode::E1008,
            ParseErrorKind::EndOfInput => ErrorCode::E1009,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1010,
            ParseErrorKind::InvalidParameters => ErrorCode::E1011,
            ParseErrorKind::DuplicateKeywordPattern => ErrorCode::E1012,
            ParseErrorKind::InvalidPattern => ErrorCode::E1013,
            ParseErrorKind::DuplicateBinding => ErrorCode::E1014,
        }
    }
}

/// A syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// What was being parsed, e.g. "while parsing a case block".
    pub context: Option<String>,
    /// Tokens discarded by statement recovery after this error.
    pub skipped: Option<Span>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind,
            message: message.into(),
            span,
            context: None,
            skipped: None,
        }
    }

    /// The error code for this error's kind.
    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// `expected`, but `found` was there instead.
    ///
    /// Running into `Eof` is reported as `EndOfInput`.
    #[cold]
    pub fn unexpected(expected: &str, found: &Token) -> Self {
        if matches!(found.kind, TokenKind::Eof) {
            return Self::end_of_input(found.span, expected);
        }
        ParseError::new(
            ParseErrorKind::UnexpectedToken,
            format!("expected {expected}, found `{}`", found.kind.display_name()),
            found.span,
        )
    }

    #[cold]
    pub fn end_of_input(span: Span, expected: &str) -> Self {
        ParseError::new(
            ParseErrorKind::EndOfInput,
            format!("unexpected end of input, expected {expected}"),
            span,
        )
    }

    /// A missing operand after the operator at `operator`.
    #[cold]
    pub fn expected_operand(operator: Span, symbol: &str, found: &Token) -> Self {
        if matches!(found.kind, TokenKind::Eof) {
            return Self::end_of_input(found.span, &format!("an operand for `{symbol}`"));
        }
        ParseError::new(
            ParseErrorKind::ExpectedExpression,
            format!(
                "expected expression after `{symbol}`, found `{}`",
                found.kind.display_name()
            ),
            operator,
        )
    }

    /// An expression was required at `found`.
    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        if matches!(found.kind, TokenKind::Eof) {
            return Self::end_of_input(found.span, "an expression");
        }
        ParseError::new(
            ParseErrorKind::ExpectedExpression,
            format!("expected expression, found `{}`", found.kind.display_name()),
            found.span,
        )
    }

    /// None of the token kinds in `expected` was found.
    #[cold]
    pub fn from_expected_tokens(expected: &TokenSet, found: &Token, what: &str) -> Self {
        let error = Self::unexpected(what, found);
        if expected.is_empty() {
            error
        } else {
            error.with_context(format!("expected one of {}", expected.format_expected()))
        }
    }

    /// Add context for better error messages.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_skipped(mut self, skipped: Option<Span>) -> Self {
        self.skipped = skipped;
        self
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::new(self.code(), self.span).with_message(&self.message);
        if let Some(context) = &self.context {
            diag = diag.with_note(context.as_str());
        }
        if let Some(skipped) = self.skipped {
            diag = diag.with_related(skipped, "skipped while recovering");
        }
        diag
    }
}
