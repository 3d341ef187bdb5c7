//! Four-way parse outcome for progress-aware alternatives.
//!
//! | Progress | Result | Variant | Meaning |
//! |----------|--------|---------|---------|
//! | Consumed | Ok | `ConsumedOk` | Committed to parse path, succeeded |
//! | Empty | Ok | `EmptyOk` | Optional content absent, succeeded |
//! | Consumed | Err | `ConsumedErr` | Real error, no backtracking |
//! | Empty | Err | `EmptyErr` | Try next alternative |
//!
//! Closed patterns are dispatched this way: each alternative either claims
//! the current token or reports `EmptyErr` with the tokens it would have
//! accepted, and [`one_of!`] moves on to the next one.

use sere_ir::Span;

use crate::recovery::TokenSet;
use crate::ParseError;

/// A four-way parse result distinguishing consumed vs empty and success vs failure.
#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// Consumed input and succeeded.
    ConsumedOk { value: T },

    /// No input consumed, but succeeded.
    EmptyOk { value: T },

    /// Consumed input then failed. Don't try alternatives; report the error.
    ConsumedErr {
        error: ParseError,
        /// The span of input consumed before the error.
        consumed_span: Span,
    },

    /// No input consumed, failed. Try the next alternative.
    EmptyErr {
        /// Set of token kinds that would have been valid here.
        expected: TokenSet,
        /// Token index where the mismatch occurred.
        position: usize,
    },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        Self::ConsumedOk { value }
    }

    #[inline]
    pub fn empty_ok(value: T) -> Self {
        Self::EmptyOk { value }
    }

    #[inline]
    pub fn empty_err(expected: TokenSet, position: usize) -> Self {
        Self::EmptyErr { expected, position }
    }

    /// Wrap the result of a committed sub-parse started at `start`.
    pub fn committed(result: Result<T, ParseError>, start: Span) -> Self {
        match result {
            Ok(value) => Self::ConsumedOk { value },
            Err(error) => {
                let consumed_span = start.merge(error.span);
                Self::ConsumedErr {
                    error,
                    consumed_span,
                }
            }
        }
    }

    /// Convert to a `Result`, turning a soft failure into a hard error
    /// built by `on_empty`.
    pub fn into_result(
        self,
        on_empty: impl FnOnce(TokenSet, usize) -> ParseError,
    ) -> Result<T, ParseError> {
        match self {
            Self::ConsumedOk { value } | Self::EmptyOk { value } => Ok(value),
            Self::ConsumedErr { error, .. } => Err(error),
            Self::EmptyErr { expected, position } => Err(on_empty(expected, position)),
        }
    }
}

/// Try each alternative in order until one consumes input or succeeds.
///
/// - `ConsumedOk` / `EmptyOk`: return it
/// - `ConsumedErr`: return it (hard error, committed)
/// - `EmptyErr`: restore, accumulate expected tokens, try the next one
///
/// If every alternative fails with `EmptyErr`, the result is an `EmptyErr`
/// carrying the union of all expected sets.
///
/// The parser (`$self`) must provide `snapshot()`, `restore()` and
/// `position()`.
#[macro_export]
macro_rules! one_of {
    ($self:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let original = $self.snapshot();
        let accumulated_expected = $crate::TokenSet::new();
        let last_position: usize = $self.position();

        match $first {
            outcome @ ($crate::ParseOutcome::ConsumedOk { .. }
            | $crate::ParseOutcome::EmptyOk { .. }
            | $crate::ParseOutcome::ConsumedErr { .. }) => outcome,
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                let mut acc = accumulated_expected;
                acc.union_with(&expected);
                $self.restore(original);
                one_of!(@rest $self, original, acc, last_position.max(position) $(, $rest)*)
            }
        }
    }};

    (@rest $self:expr, $original:expr, $accumulated:expr, $last_pos:expr $(,)?) => {{
        $crate::ParseOutcome::EmptyErr {
            expected: $accumulated,
            position: $last_pos,
        }
    }};

    (@rest $self:expr, $original:expr, $accumulated:expr, $last_pos:expr, $next:expr $(, $rest:expr)* $(,)?) => {{
        match $next {
            outcome @ ($crate::ParseOutcome::ConsumedOk { .. }
            | $crate::ParseOutcome::EmptyOk { .. }
            | $crate::ParseOutcome::ConsumedErr { .. }) => outcome,
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                let mut acc = $accumulated;
                acc.union_with(&expected);
                let new_pos = $last_pos.max(position);
                $self.restore($original);
                one_of!(@rest $self, $original, acc, new_pos $(, $rest)*)
            }
        }
    }};
}

/// Require a successful parse, upgrading soft errors to hard errors with context.
///
/// Use after committing to a production (some tokens consumed). Must be
/// used inside a function returning `ParseOutcome<T>`.
#[macro_export]
macro_rules! require {
    ($self:expr, $parser:expr, $context:expr) => {{
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value } | $crate::ParseOutcome::EmptyOk { value } => {
                value
            }
            $crate::ParseOutcome::ConsumedErr {
                error,
                consumed_span,
            } => {
                return $crate::ParseOutcome::ConsumedErr {
                    error,
                    consumed_span,
                };
            }
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                let error = $self.error_from_expected(&expected, position, $context);
                let consumed_span = error.span;
                return $crate::ParseOutcome::ConsumedErr {
                    error,
                    consumed_span,
                };
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseErrorKind;
    use sere_ir::TokenKind;

    fn make_error() -> ParseError {
        ParseError::new(ParseErrorKind::UnexpectedToken, "test error", Span::new(3, 4))
    }

    #[test]
    fn test_committed_success_consumed_input() {
        let outcome = ParseOutcome::committed(Ok::<i32, ParseError>(7), Span::new(0, 1));
        assert!(matches!(outcome, ParseOutcome::ConsumedOk { value: 7 }));
    }

    #[test]
    fn test_committed_wraps_result() {
        let outcome = ParseOutcome::committed(Err::<i32, _>(make_error()), Span::new(0, 1));
        match outcome {
            ParseOutcome::ConsumedErr { consumed_span, .. } => {
                assert_eq!(consumed_span, Span::new(0, 4));
            }
            other => panic!("expected ConsumedErr, got {other:?}"),
        }
    }

    #[test]
    fn test_into_result() {
        let outcome: ParseOutcome<i32> = ParseOutcome::empty_ok(20);
        assert_eq!(outcome.into_result(|_, _| make_error()).ok(), Some(20));

        let hard: ParseOutcome<i32> =
            ParseOutcome::committed(Err(make_error()), Span::new(0, 1));
        assert_eq!(
            hard.into_result(|_, _| unreachable!("committed errors pass through"))
                .err()
                .map(|e| e.kind),
            Some(ParseErrorKind::UnexpectedToken)
        );

        let soft: ParseOutcome<i32> =
            ParseOutcome::empty_err(TokenSet::single(TokenKind::LParen), 5);
        let err = soft.into_result(|expected, position| {
            ParseError::new(
                ParseErrorKind::InvalidPattern,
                format!("{} at {position}", expected.format_expected()),
                Span::DUMMY,
            )
        });
        assert!(err.err().is_some_and(|e| e.message.ends_with("at 5")));
    }
}
