//! Atoms and displays.
//!
//! Names, literals, and the bracketed forms: parenthesized expressions,
//! tuples and generators; lists and list comprehensions; dicts, sets and
//! their comprehensions. Inside brackets conditionals are allowed again.

use sere_ir::ast::{
    CompClause, Comprehension, ComprehensionKind, DictItem, Expr, ExprKind, Literal,
};
use sere_ir::{Span, TokenKind};

use crate::context::ParseContext;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an atom.
    pub(crate) fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        if let Some(name) = self.cursor.soft_keyword_to_name() {
            self.advance();
            return Ok(Expr::new(ExprKind::Name(name), span));
        }
        let kind = match self.current_kind() {
            TokenKind::Ident(name) => ExprKind::Name(name),
            TokenKind::Int(text) => ExprKind::Literal(Literal::Int(text)),
            TokenKind::Float(text) => ExprKind::Literal(Literal::Float(text)),
            TokenKind::Imaginary(text) => ExprKind::Literal(Literal::Imaginary(text)),
            TokenKind::String(text) => ExprKind::Literal(Literal::Str(text)),
            TokenKind::True => ExprKind::Literal(Literal::True),
            TokenKind::False => ExprKind::Literal(Literal::False),
            TokenKind::None => ExprKind::Literal(Literal::None),
            TokenKind::Ellipsis => ExprKind::Literal(Literal::Ellipsis),
            TokenKind::LParen => {
                return self.with_context(ParseContext::NONE, Self::parse_paren_atom);
            }
            TokenKind::LBracket => {
                return self.with_context(ParseContext::NONE, Self::parse_list_display);
            }
            TokenKind::LBrace => {
                return self.with_context(ParseContext::NONE, Self::parse_brace_display);
            }
            _ => return Err(ParseError::expected_expression(self.current())),
        };
        self.advance();
        Ok(Expr::new(kind, span))
    }

    /// `()`, `(yield ...)`, `(expr)`, `(a, b)` or `(x for x in y)`.
    fn parse_paren_atom(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;

        if self.eat(&TokenKind::RParen) {
            return Ok(Expr::new(ExprKind::Tuple(Vec::new()), self.span_from(start)));
        }

        if self.check(&TokenKind::Yield) {
            let value = self.parse_yield_expression()?;
            self.expect(&TokenKind::RParen)?;
            return Ok(value);
        }

        let first = self.parse_star_named_expression()?;

        if self.at_comp_for() {
            let clauses = self.parse_comp_clauses()?;
            self.expect(&TokenKind::RParen)?;
            return Ok(Self::comprehension(
                ComprehensionKind::Generator,
                first,
                None,
                clauses,
                self.span_from(start),
            ));
        }

        if !self.check(&TokenKind::Comma) {
            self.expect(&TokenKind::RParen)?;
            return Ok(first);
        }

        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.check(&TokenKind::RParen) {
                break;
            }
            elements.push(self.parse_star_named_expression()?);
        }
        self.expect(&TokenKind::RParen)?;
        Ok(Expr::new(ExprKind::Tuple(elements), self.span_from(start)))
    }

    /// `[a, b]` or `[x for x in y]`.
    fn parse_list_display(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;

        if self.eat(&TokenKind::RBracket) {
            return Ok(Expr::new(ExprKind::List(Vec::new()), self.span_from(start)));
        }

        let first = self.parse_star_named_expression()?;
        if self.at_comp_for() {
            let clauses = self.parse_comp_clauses()?;
            self.expect(&TokenKind::RBracket)?;
            return Ok(Self::comprehension(
                ComprehensionKind::List,
                first,
                None,
                clauses,
                self.span_from(start),
            ));
        }

        let elements = self.parse_display_rest(first, &TokenKind::RBracket)?;
        Ok(Expr::new(ExprKind::List(elements), self.span_from(start)))
    }

    /// `{}`, `{k: v, **m}`, `{a, b}`, and dict/set comprehensions.
    fn parse_brace_display(&mut self) -> Result<Expr, ParseError> {
        let start = self.advance().span;

        if self.eat(&TokenKind::RBrace) {
            return Ok(Expr::new(ExprKind::Dict(Vec::new()), self.span_from(start)));
        }

        if self.check(&TokenKind::DoubleStar) {
            let first = self.parse_dict_unpack()?;
            return self.parse_dict_rest(start, first);
        }

        let first = self.parse_star_named_expression()?;

        if self.eat(&TokenKind::Colon) {
            let value = self.parse_expression()?;
            if self.at_comp_for() {
                let clauses = self.parse_comp_clauses()?;
                self.expect(&TokenKind::RBrace)?;
                return Ok(Self::comprehension(
                    ComprehensionKind::Dict,
                    first,
                    Some(value),
                    clauses,
                    self.span_from(start),
                ));
            }
            return self.parse_dict_rest(start, DictItem::Pair { key: first, value });
        }

        if self.at_comp_for() {
            let clauses = self.parse_comp_clauses()?;
            self.expect(&TokenKind::RBrace)?;
            return Ok(Self::comprehension(
                ComprehensionKind::Set,
                first,
                None,
                clauses,
                self.span_from(start),
            ));
        }

        let elements = self.parse_display_rest(first, &TokenKind::RBrace)?;
        Ok(Expr::new(ExprKind::Set(elements), self.span_from(start)))
    }

    /// Remaining `, elem` items of a list or set display, and the closer.
    fn parse_display_rest(
        &mut self,
        first: Expr,
        closer: &TokenKind,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.check(closer) {
                break;
            }
            elements.push(self.parse_star_named_expression()?);
        }
        self.expect(closer)?;
        Ok(elements)
    }

    fn parse_dict_rest(&mut self, start: Span, first: DictItem) -> Result<Expr, ParseError> {
        let mut items = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.check(&TokenKind::RBrace) {
                break;
            }
            if self.check(&TokenKind::DoubleStar) {
                items.push(self.parse_dict_unpack()?);
            } else {
                let key = self.parse_expression()?;
                self.expect(&TokenKind::Colon)?;
                let value = self.parse_expression()?;
                items.push(DictItem::Pair { key, value });
            }
        }
        self.expect(&TokenKind::RBrace)?;
        Ok(Expr::new(ExprKind::Dict(items), self.span_from(start)))
    }

    /// `**mapping` inside a dict display.
    fn parse_dict_unpack(&mut self) -> Result<DictItem, ParseError> {
        self.advance();
        let value = self.parse_bitwise_or()?;
        Ok(DictItem::Unpack(value))
    }

    fn comprehension(
        kind: ComprehensionKind,
        element: Expr,
        value: Option<Expr>,
        clauses: Vec<CompClause>,
        span: Span,
    ) -> Expr {
        Expr::new(
            ExprKind::Comprehension(Box::new(Comprehension {
                kind,
                element,
                value,
                clauses,
            })),
            span,
        )
    }
}
