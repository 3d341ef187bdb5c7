//! Comprehension clauses and `for` target lists.

use sere_ir::ast::{CompClause, Expr, ExprKind};
use sere_ir::TokenKind;

use crate::context::ParseContext;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Whether a `for` or `async for` clause starts here.
    pub(crate) fn at_comp_for(&self) -> bool {
        self.check(&TokenKind::For)
            || (self.check(&TokenKind::Async) && self.cursor.peek_kind(1) == TokenKind::For)
    }

    /// Parse one or more `[async] for targets in iter (if cond)*` clauses.
    pub(crate) fn parse_comp_clauses(&mut self) -> Result<Vec<CompClause>, ParseError> {
        let mut clauses = Vec::new();
        while self.at_comp_for() {
            let start = self.current_span();
            let is_async = self.eat(&TokenKind::Async);
            self.expect(&TokenKind::For)?;
            let target = self.parse_target_list()?;
            self.expect(&TokenKind::In)?;
            let iter = self.parse_disjunction()?;

            let mut conditions = Vec::new();
            while self.eat(&TokenKind::If) {
                let flags = self.context.with(ParseContext::NO_CONDITIONAL);
                conditions.push(self.with_context(flags, Self::parse_expression)?);
            }

            clauses.push(CompClause {
                is_async,
                target,
                iter,
                conditions,
                span: self.span_from(start),
            });
        }
        Ok(clauses)
    }

    /// Parse the targets of a `for` loop or clause, up to `in`.
    ///
    /// Elements are parsed at `|` precedence so the `in` that follows is
    /// not taken as a comparison.
    pub(crate) fn parse_target_list(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_target_element()?;
        if !self.check(&TokenKind::Comma) {
            return Ok(first);
        }

        let start = first.span;
        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            if !self.starts_star_expression() {
                break;
            }
            elements.push(self.parse_target_element()?);
        }
        Ok(Expr::new(ExprKind::Tuple(elements), self.span_from(start)))
    }

    pub(crate) fn parse_target_element(&mut self) -> Result<Expr, ParseError> {
        if !self.check(&TokenKind::Star) {
            let target = self.parse_bitwise_or()?;
            self.check_assignment_target(&target)?;
            return Ok(target);
        }

        let star = self.advance().span;
        let value = self.parse_bitwise_or()?;
        self.check_assignment_target(&value)?;
        let span = star.merge(value.span);
        Ok(Expr::new(ExprKind::Star(value.boxed()), span))
    }
}
