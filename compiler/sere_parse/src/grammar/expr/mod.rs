//! Expression parsing.
//!
//! One method per precedence level, lowest first:
//!
//! ```text
//! named       NAME ':=' expression | expression
//! expression  lambda | disjunction ['if' disjunction 'else' expression]
//! disjunction conjunction ('or' conjunction)*
//! conjunction inversion ('and' inversion)*
//! inversion   'not' inversion | comparison
//! comparison  bitor (cmp_op bitor)*
//! bitor       bitxor ('|' bitxor)*      ... and so on through & << >> + - * / // % @
//! factor      ('+' | '-' | '~') factor | power
//! power       await_primary ['**' factor]
//! ```
//!
//! # Module Structure
//!
//! - `mod.rs`: entry points and the binary operator precedence chain
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: atoms and displays
//! - `postfix.rs`: attribute, call and subscript trailers
//! - `comprehension.rs`: `for`/`if` clauses and target lists
//! - `lambda.rs`: `lambda` and `yield`

mod comprehension;
mod lambda;
mod operators;
mod postfix;
mod primary;

use sere_ir::ast::{BinaryOp, BoolOp, Expr, ExprKind, UnaryOp};
use sere_ir::{Span, TokenKind};
use sere_stack::ensure_sufficient_stack;

use crate::context::ParseContext;
use crate::recovery::EXPR_START;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Whether the current token can start an operand.
    pub(crate) fn starts_expression(&self) -> bool {
        EXPR_START.contains(&self.current_kind())
    }

    /// Whether the current token can start an element of an expression
    /// list, which may be starred.
    pub(crate) fn starts_star_expression(&self) -> bool {
        self.starts_expression() || self.check(&TokenKind::Star)
    }

    /// Fail with `ExpectedExpression` at `operator` unless an operand follows.
    fn require_operand(&self, operator: Span, symbol: &str) -> Result<(), ParseError> {
        if self.starts_expression() {
            Ok(())
        } else {
            Err(ParseError::expected_operand(operator, symbol, self.current()))
        }
    }

    /// Parse an expression (`lambda`, conditional, or anything tighter).
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow on deeply
    /// nested input.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner())
    }

    fn parse_expression_inner(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Lambda) {
            return self.parse_lambda();
        }

        let body = self.parse_disjunction()?;
        if self.context.has(ParseContext::NO_CONDITIONAL) || !self.check(&TokenKind::If) {
            return Ok(body);
        }

        let if_span = self.advance().span;
        self.require_operand(if_span, "if")?;
        let test = self.parse_disjunction()?;
        self.expect(&TokenKind::Else)?;
        let orelse = self.parse_expression()?;

        let span = body.span.merge(orelse.span);
        Ok(Expr::new(
            ExprKind::Conditional {
                test: test.boxed(),
                body: body.boxed(),
                orelse: orelse.boxed(),
            },
            span,
        ))
    }

    /// Parse `NAME := expression` or a plain expression.
    pub(crate) fn parse_named_expression(&mut self) -> Result<Expr, ParseError> {
        if !(self.cursor.check_ident() && self.cursor.peek_kind(1) == TokenKind::ColonEq) {
            return self.parse_expression();
        }

        let start = self.current_span();
        let target = self.cursor.expect_ident()?;
        let op_span = self.advance().span;
        self.require_operand(op_span, ":=")?;
        let value = self.parse_expression()?;

        let span = start.merge(value.span);
        Ok(Expr::new(
            ExprKind::Named {
                target,
                value: value.boxed(),
            },
            span,
        ))
    }

    /// Parse `'*' bitor | expression`.
    pub(crate) fn parse_star_expression(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Star) {
            return self.parse_starred();
        }
        self.parse_expression()
    }

    /// Parse `'*' bitor | named`.
    pub(crate) fn parse_star_named_expression(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Star) {
            return self.parse_starred();
        }
        self.parse_named_expression()
    }

    fn parse_starred(&mut self) -> Result<Expr, ParseError> {
        let star = self.advance().span;
        self.require_operand(star, "*")?;
        let value = self.parse_bitwise_or()?;
        let span = star.merge(value.span);
        Ok(Expr::new(ExprKind::Star(value.boxed()), span))
    }

    /// Parse a comma-separated expression list.
    ///
    /// A single element without a trailing comma is returned as-is;
    /// otherwise the elements form a `Tuple`.
    pub(crate) fn parse_star_expressions(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_star_expression()?;
        if !self.check(&TokenKind::Comma) {
            return Ok(first);
        }

        let start = first.span;
        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            if !self.starts_star_expression() {
                break;
            }
            elements.push(self.parse_star_expression()?);
        }

        let span = self.span_from(start);
        Ok(Expr::new(ExprKind::Tuple(elements), span))
    }

    /// Parse `or` (lowest precedence boolean operator).
    pub(crate) fn parse_disjunction(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_conjunction()?;
        if !self.check(&TokenKind::Or) {
            return Ok(first);
        }

        let mut values = vec![first];
        while self.check(&TokenKind::Or) {
            let op_span = self.advance().span;
            self.require_operand(op_span, "or")?;
            values.push(self.parse_conjunction()?);
        }
        Ok(Self::bool_op(BoolOp::Or, values))
    }

    /// Parse `and`.
    fn parse_conjunction(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_inversion()?;
        if !self.check(&TokenKind::And) {
            return Ok(first);
        }

        let mut values = vec![first];
        while self.check(&TokenKind::And) {
            let op_span = self.advance().span;
            self.require_operand(op_span, "and")?;
            values.push(self.parse_inversion()?);
        }
        Ok(Self::bool_op(BoolOp::And, values))
    }

    fn bool_op(op: BoolOp, values: Vec<Expr>) -> Expr {
        let span = match (values.first(), values.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::DUMMY,
        };
        Expr::new(ExprKind::BoolOp { op, values }, span)
    }

    /// Parse `not` (logical negation).
    fn parse_inversion(&mut self) -> Result<Expr, ParseError> {
        if !self.check(&TokenKind::Not) {
            return self.parse_comparison();
        }

        let op_span = self.advance().span;
        self.require_operand(op_span, "not")?;
        let operand = ensure_sufficient_stack(|| self.parse_inversion())?;
        let span = op_span.merge(operand.span);
        Ok(Expr::new(
            ExprKind::UnaryOp {
                op: UnaryOp::Not,
                operand: operand.boxed(),
            },
            span,
        ))
    }

    /// Parse a comparison chain, `a < b <= c` into one `Compare` node.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_bitwise_or()?;
        let Some(mut op) = self.match_comparison_op() else {
            return Ok(first);
        };

        let start = first.span;
        let mut operands = vec![first];
        let mut ops = Vec::new();
        loop {
            let op_span = self.advance_comparison_op(op);
            self.require_operand(op_span, op.as_symbol())?;
            ops.push(op);
            operands.push(self.parse_bitwise_or()?);
            match self.match_comparison_op() {
                Some(next) => op = next,
                None => break,
            }
        }

        let span = self.span_from(start);
        Ok(Expr::new(ExprKind::Compare { operands, ops }, span))
    }

    /// Parse `|` (bitwise or).
    pub(crate) fn parse_bitwise_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bitwise_xor()?;

        while self.check(&TokenKind::Pipe) {
            let op_span = self.advance().span;
            self.require_operand(op_span, "|")?;
            let right = self.parse_bitwise_xor()?;
            left = Self::bin_op(BinaryOp::BitOr, left, right);
        }

        Ok(left)
    }

    /// Parse `^` (bitwise xor).
    fn parse_bitwise_xor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_bitwise_and()?;

        while self.check(&TokenKind::Caret) {
            let op_span = self.advance().span;
            self.require_operand(op_span, "^")?;
            let right = self.parse_bitwise_and()?;
            left = Self::bin_op(BinaryOp::BitXor, left, right);
        }

        Ok(left)
    }

    /// Parse `&` (bitwise and).
    fn parse_bitwise_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_shift()?;

        while self.check(&TokenKind::Amp) {
            let op_span = self.advance().span;
            self.require_operand(op_span, "&")?;
            let right = self.parse_shift()?;
            left = Self::bin_op(BinaryOp::BitAnd, left, right);
        }

        Ok(left)
    }

    /// Parse `<<` and `>>`.
    fn parse_shift(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_arith()?;

        while let Some(op) = self.match_shift_op() {
            let op_span = self.advance().span;
            self.require_operand(op_span, op.as_symbol())?;
            let right = self.parse_arith()?;
            left = Self::bin_op(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_arith(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.match_additive_op() {
            let op_span = self.advance().span;
            self.require_operand(op_span, op.as_symbol())?;
            let right = self.parse_term()?;
            left = Self::bin_op(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `@`, `/`, `//` and `%`.
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.match_multiplicative_op() {
            let op_span = self.advance().span;
            self.require_operand(op_span, op.as_symbol())?;
            let right = self.parse_factor()?;
            left = Self::bin_op(op, left, right);
        }

        Ok(left)
    }

    /// Parse unary `+`, `-` and `~`.
    pub(crate) fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_power();
        };

        let op_span = self.advance().span;
        self.require_operand(op_span, op.as_symbol())?;
        let operand = ensure_sufficient_stack(|| self.parse_factor())?;
        let span = op_span.merge(operand.span);
        Ok(Expr::new(
            ExprKind::UnaryOp {
                op,
                operand: operand.boxed(),
            },
            span,
        ))
    }

    /// Parse `**`. Right-associative; the exponent may carry a unary sign.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_await_primary()?;
        if !self.check(&TokenKind::DoubleStar) {
            return Ok(base);
        }

        let op_span = self.advance().span;
        self.require_operand(op_span, "**")?;
        let exponent = self.parse_factor()?;
        Ok(Self::bin_op(BinaryOp::Pow, base, exponent))
    }

    /// Parse `await primary`.
    fn parse_await_primary(&mut self) -> Result<Expr, ParseError> {
        if !self.check(&TokenKind::Await) {
            return self.parse_primary();
        }

        let op_span = self.advance().span;
        self.require_operand(op_span, "await")?;
        let value = self.parse_primary()?;
        let span = op_span.merge(value.span);
        Ok(Expr::new(ExprKind::Await(value.boxed()), span))
    }

    fn bin_op(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        let span = left.span.merge(right.span);
        Expr::new(
            ExprKind::BinOp {
                op,
                left: left.boxed(),
                right: right.boxed(),
            },
            span,
        )
    }
}
