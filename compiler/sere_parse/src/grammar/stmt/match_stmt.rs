//! `match` statements.
//!
//! `match` is a soft keyword. At statement start the parser speculatively
//! reads a subject and requires `':' Newline Indent case` to follow; if any
//! piece is missing the attempt is rolled back and the line is parsed as an
//! ordinary statement in which `match` is a name.

use sere_ir::ast::{Expr, ExprKind, MatchCase, MatchStmt, Stmt, StmtKind};
use sere_ir::{SoftKeyword, TokenKind};
use tracing::debug;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a match statement, or return `None` with the cursor untouched
    /// when the line is not one.
    pub(crate) fn try_parse_match(&mut self) -> Option<Stmt> {
        let snapshot = self.snapshot();
        let start = self.advance().span;

        let subject = match self.parse_match_subject() {
            Ok(subject) if self.at_case_block() => subject,
            _ => {
                debug!(at = ?start, "`match` is not a statement header here");
                self.restore(snapshot);
                return None;
            }
        };

        self.advance(); // `:`
        self.advance(); // Newline
        self.advance(); // Indent

        let mut cases = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::Dedent => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    self.report(ParseError::end_of_input(self.current_span(), "`case`"));
                    break;
                }
                TokenKind::Newline => {
                    self.advance();
                }
                TokenKind::SoftKeyword(SoftKeyword::Case) => match self.parse_case() {
                    Ok(case) => cases.push(case),
                    Err(error) => {
                        let skipped = self.synchronize_statement();
                        self.report(error.with_skipped(skipped));
                    }
                },
                _ => {
                    let error = ParseError::unexpected("`case`", self.current())
                        .with_context("while parsing a match statement");
                    let skipped = self.synchronize_statement();
                    self.report(error.with_skipped(skipped));
                }
            }
        }

        Some(Stmt::new(
            StmtKind::Match(Box::new(MatchStmt { subject, cases })),
            self.span_from(start),
        ))
    }

    /// `':' Newline Indent 'case'` follows.
    fn at_case_block(&self) -> bool {
        self.check(&TokenKind::Colon)
            && self.cursor.peek_kind(1) == TokenKind::Newline
            && self.cursor.peek_kind(2) == TokenKind::Indent
            && self.cursor.peek_kind(3) == TokenKind::SoftKeyword(SoftKeyword::Case)
    }

    /// `star_named_expression ',' star_named_expressions? | named_expression`
    fn parse_match_subject(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_star_named_expression()?;
        if !self.check(&TokenKind::Comma) {
            return Ok(first);
        }

        let start = first.span;
        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            if !self.starts_star_expression() {
                break;
            }
            elements.push(self.parse_star_named_expression()?);
        }
        Ok(Expr::new(ExprKind::Tuple(elements), self.span_from(start)))
    }

    /// `'case' patterns ['if' named_expression] ':' block`
    fn parse_case(&mut self) -> Result<MatchCase, ParseError> {
        let start = self.advance().span;
        let pattern = self.parse_patterns()?;
        self.validate_pattern(&pattern);

        let guard = if self.eat(&TokenKind::If) {
            Some(self.parse_named_expression()?)
        } else {
            None
        };
        let body = self.parse_block(start)?;

        Ok(MatchCase {
            pattern,
            guard,
            body,
            span: self.span_from(start),
        })
    }
}
