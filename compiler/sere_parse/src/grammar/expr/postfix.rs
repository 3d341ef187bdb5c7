//! Postfix trailers: attribute access, calls and subscripts.

use sere_ir::ast::{Arg, Comprehension, ComprehensionKind, Expr, ExprKind};
use sere_ir::TokenKind;

use crate::context::ParseContext;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an atom followed by any number of trailers.
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_atom()?;

        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let attr = self.cursor.expect_ident()?;
                    let span = self.span_from(expr.span);
                    expr = Expr::new(
                        ExprKind::Attribute {
                            value: expr.boxed(),
                            attr,
                        },
                        span,
                    );
                }
                TokenKind::LParen => {
                    let args = self.with_context(ParseContext::NONE, Self::parse_call_args)?;
                    let span = self.span_from(expr.span);
                    expr = Expr::new(
                        ExprKind::Call {
                            func: expr.boxed(),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    let index = self.with_context(ParseContext::NONE, Self::parse_subscript)?;
                    let span = self.span_from(expr.span);
                    expr = Expr::new(
                        ExprKind::Subscript {
                            value: expr.boxed(),
                            index: index.boxed(),
                        },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Parse `( args )`.
    ///
    /// A generator expression may appear unparenthesized only as the sole
    /// argument: `f(x for x in xs)`.
    pub(crate) fn parse_call_args(&mut self) -> Result<Vec<Arg>, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        let mut bare_generator = None;

        while !self.check(&TokenKind::RParen) {
            let arg = match self.current_kind() {
                TokenKind::Star => {
                    self.advance();
                    Arg::Starred(self.parse_expression()?)
                }
                TokenKind::DoubleStar => {
                    self.advance();
                    Arg::DoubleStarred(self.parse_expression()?)
                }
                _ if self.cursor.check_ident() && self.cursor.peek_kind(1) == TokenKind::Eq => {
                    let start = self.current_span();
                    let name = self.cursor.expect_ident()?;
                    self.advance();
                    let value = self.parse_expression()?;
                    let span = start.merge(value.span);
                    Arg::Keyword { name, value, span }
                }
                _ => {
                    let value = self.parse_named_expression()?;
                    if self.at_comp_for() {
                        let clauses = self.parse_comp_clauses()?;
                        let span = self.span_from(value.span);
                        bare_generator.get_or_insert(span);
                        Arg::Positional(Expr::new(
                            ExprKind::Comprehension(Box::new(Comprehension {
                                kind: ComprehensionKind::Generator,
                                element: value,
                                value: None,
                                clauses,
                            })),
                            span,
                        ))
                    } else {
                        Arg::Positional(value)
                    }
                }
            };
            args.push(arg);

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;

        if let Some(span) = bare_generator {
            if args.len() > 1 {
                self.report(ParseError::new(
                    ParseErrorKind::UnexpectedToken,
                    "generator expression must be parenthesized",
                    span,
                ));
            }
        }
        Ok(args)
    }

    /// Parse `[ slices ]`. Several comma-separated slices form a tuple.
    fn parse_subscript(&mut self) -> Result<Expr, ParseError> {
        self.advance();
        let first = self.parse_slice()?;

        if !self.check(&TokenKind::Comma) {
            self.expect(&TokenKind::RBracket)?;
            return Ok(first);
        }

        let tuple_start = first.span;
        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.check(&TokenKind::RBracket) {
                break;
            }
            items.push(self.parse_slice()?);
        }
        let span = self.span_from(tuple_start);
        self.expect(&TokenKind::RBracket)?;
        Ok(Expr::new(ExprKind::Tuple(items), span))
    }

    /// `[lower] ':' [upper] [':' [step]]` or a named expression.
    fn parse_slice(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let lower = if self.check(&TokenKind::Colon) {
            None
        } else {
            let expr = self.parse_star_named_expression()?;
            if !self.check(&TokenKind::Colon) {
                return Ok(expr);
            }
            Some(expr.boxed())
        };

        self.expect(&TokenKind::Colon)?;
        let upper = if self.at_slice_part_end() {
            None
        } else {
            Some(self.parse_expression()?.boxed())
        };
        let step = if self.eat(&TokenKind::Colon) {
            if self.at_slice_part_end() {
                None
            } else {
                Some(self.parse_expression()?.boxed())
            }
        } else {
            None
        };

        let span = self.span_from(start);
        Ok(Expr::new(ExprKind::Slice { lower, upper, step }, span))
    }

    fn at_slice_part_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Colon | TokenKind::Comma | TokenKind::RBracket
        )
    }
}
