//! `if`, `while`, `for`, `try` and `with` statements.

use sere_ir::ast::{ExceptHandler, Stmt, StmtKind, WithItem};
use sere_ir::TokenKind;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse `if`/`elif` chains. Each `elif` becomes a nested `If` as the
    /// sole statement of the enclosing `orelse`.
    pub(crate) fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let test = self.parse_named_expression()?;
        let body = self.parse_block(start)?;

        let orelse = if self.check(&TokenKind::Elif) {
            vec![self.parse_if()?]
        } else {
            self.parse_else_block()?
        };

        Ok(Stmt::new(
            StmtKind::If { test, body, orelse },
            self.span_from(start),
        ))
    }

    pub(crate) fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let test = self.parse_named_expression()?;
        let body = self.parse_block(start)?;
        let orelse = self.parse_else_block()?;

        Ok(Stmt::new(
            StmtKind::While { test, body, orelse },
            self.span_from(start),
        ))
    }

    pub(crate) fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let target = self.parse_target_list()?;
        self.expect(&TokenKind::In)?;
        let iter = self.parse_star_expressions()?;
        let body = self.parse_block(start)?;
        let orelse = self.parse_else_block()?;

        Ok(Stmt::new(
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
            },
            self.span_from(start),
        ))
    }

    /// Parse `try` with its handlers, `else` and `finally`.
    ///
    /// Without any `except` or `finally` clause, `TryWithoutHandler` is
    /// reported and the node is still produced.
    pub(crate) fn parse_try(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let body = self.parse_block(start)?;

        let mut handlers = Vec::new();
        while self.check(&TokenKind::Except) {
            handlers.push(self.parse_except_handler()?);
        }
        let orelse = self.parse_else_block()?;

        let has_finally = self.check(&TokenKind::Finally);
        let finalbody = if has_finally {
            let finally = self.advance().span;
            self.parse_block(finally)?
        } else {
            Vec::new()
        };

        if handlers.is_empty() && !has_finally {
            self.report(ParseError::new(
                ParseErrorKind::TryWithoutHandler,
                "expected `except` or `finally` block",
                start,
            ));
        }

        Ok(Stmt::new(
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
            },
            self.span_from(start),
        ))
    }

    /// `except [expression ['as' NAME]] ':' block`
    fn parse_except_handler(&mut self) -> Result<ExceptHandler, ParseError> {
        let start = self.advance().span;
        let (typ, name) = if self.check(&TokenKind::Colon) {
            (None, None)
        } else {
            let typ = self.parse_expression()?;
            let name = if self.eat(&TokenKind::As) {
                Some(self.cursor.expect_ident()?)
            } else {
                None
            };
            (Some(typ), name)
        };
        let body = self.parse_block(start)?;

        Ok(ExceptHandler {
            typ,
            name,
            body,
            span: self.span_from(start),
        })
    }

    /// `with item (',' item)* ':' block`
    pub(crate) fn parse_with(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let mut items = Vec::new();
        loop {
            let context = self.parse_expression()?;
            let target = if self.eat(&TokenKind::As) {
                Some(self.parse_target_element()?)
            } else {
                None
            };
            items.push(WithItem { context, target });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        let body = self.parse_block(start)?;

        Ok(Stmt::new(
            StmtKind::With { items, body },
            self.span_from(start),
        ))
    }

    /// Optional `else ':' block`.
    fn parse_else_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        if !self.check(&TokenKind::Else) {
            return Ok(Vec::new());
        }
        let start = self.advance().span;
        self.parse_block(start)
    }
}
