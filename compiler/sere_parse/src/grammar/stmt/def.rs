//! Function and class definitions, decorators, and `async` statements.

use sere_ir::ast::{ClassDef, FunctionDef, Stmt, StmtKind};
use sere_ir::TokenKind;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `def NAME '(' params ')' ['->' expression] ':' block`
    pub(crate) fn parse_function_def(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(&TokenKind::Def)?.span;
        let name = self.cursor.expect_ident()?;

        self.expect(&TokenKind::LParen)?;
        let params = self.parse_parameters(&TokenKind::RParen, true)?;
        self.expect(&TokenKind::RParen)?;

        let returns = if self.eat(&TokenKind::Arrow) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        let body = self.parse_block(start)?;

        Ok(Stmt::new(
            StmtKind::FunctionDef(Box::new(FunctionDef {
                name,
                params,
                returns,
                body,
            })),
            self.span_from(start),
        ))
    }

    /// `class NAME ['(' args ')'] ':' block`
    pub(crate) fn parse_class_def(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let name = self.cursor.expect_ident()?;
        let bases = if self.check(&TokenKind::LParen) {
            self.parse_call_args()?
        } else {
            Vec::new()
        };
        let body = self.parse_block(start)?;

        Ok(Stmt::new(
            StmtKind::ClassDef(Box::new(ClassDef { name, bases, body })),
            self.span_from(start),
        ))
    }

    /// `async` followed by `def`, `for` or `with`.
    pub(crate) fn parse_async(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let inner = match self.current_kind() {
            TokenKind::Def => self.parse_function_def()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::With => self.parse_with()?,
            _ => {
                return Err(ParseError::unexpected(
                    "`def`, `for` or `with` after `async`",
                    self.current(),
                ))
            }
        };
        Ok(Stmt::new(
            StmtKind::Async(Box::new(inner)),
            self.span_from(start),
        ))
    }

    /// `('@' named_expression Newline)+ (def | class | async def)`
    ///
    /// Decorators followed by anything else report
    /// `DecoratorWithoutTarget`; the following line is then parsed as a
    /// statement of its own.
    pub(crate) fn parse_decorated(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let start = self.current_span();
        let mut decorators = Vec::new();
        while self.eat(&TokenKind::At) {
            decorators.push(self.parse_named_expression()?);
            self.expect(&TokenKind::Newline)?;
        }
        let decorators_span = self.span_from(start);

        let target = match self.current_kind() {
            TokenKind::Def => self.parse_function_def()?,
            TokenKind::Class => self.parse_class_def()?,
            TokenKind::Async if self.cursor.peek_kind(1) == TokenKind::Def => {
                self.parse_async()?
            }
            _ => {
                self.report(ParseError::new(
                    ParseErrorKind::DecoratorWithoutTarget,
                    "decorators must be followed by a function or class definition",
                    decorators_span,
                ));
                return Ok(Vec::new());
            }
        };

        Ok(vec![Stmt::new(
            StmtKind::Decorated {
                decorators,
                target: Box::new(target),
            },
            self.span_from(start),
        )])
    }
}
