//! `lambda` and `yield` expressions.

use sere_ir::ast::{Expr, ExprKind};
use sere_ir::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `lambda params: body`.
    ///
    /// The body inherits the current context, so a lambda inside a
    /// comprehension condition cannot contain a bare conditional either.
    pub(crate) fn parse_lambda(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let params = self.parse_parameters(&TokenKind::Colon, false)?;
        self.expect(&TokenKind::Colon)?;
        let body = self.parse_expression()?;

        let span = start.merge(body.span);
        Ok(Expr::new(
            ExprKind::Lambda {
                params: Box::new(params),
                body: body.boxed(),
            },
            span,
        ))
    }

    /// Parse `yield [expressions]` or `yield from expression`.
    pub(crate) fn parse_yield_expression(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(&TokenKind::Yield)?.span;

        if self.eat(&TokenKind::From) {
            let value = self.parse_expression()?;
            let span = start.merge(value.span);
            return Ok(Expr::new(ExprKind::YieldFrom(value.boxed()), span));
        }

        if !self.starts_star_expression() {
            return Ok(Expr::new(ExprKind::Yield(None), start));
        }

        let value = self.parse_star_expressions()?;
        let span = start.merge(value.span);
        Ok(Expr::new(ExprKind::Yield(Some(value.boxed())), span))
    }
}
