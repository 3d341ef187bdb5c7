//! Case patterns.
//!
//! ```text
//! patterns       open_sequence | pattern
//! open_sequence  maybe_star (',' maybe_star)* [',']
//! maybe_star     '*' NAME | pattern
//! pattern        or_pattern ['as' NAME]
//! or_pattern     closed ('|' closed)*
//! closed         literal | capture | wildcard | value | class
//!              | group | sequence | mapping
//! ```
//!
//! Closed patterns are tried with [`one_of!`]: each alternative either
//! claims the current token or fails with `EmptyErr`, naming the tokens it
//! would have accepted, and the next alternative is tried from the same
//! position.
//!
//! # Module Structure
//!
//! - `mod.rs`: pattern grammar
//! - `bindings.rs`: post-parse validation (binding consistency, duplicates)

mod bindings;

use sere_ir::ast::{
    BinaryOp, DottedName, Expr, ExprKind, KeywordPattern, Literal, MappingEntry, Pattern,
    PatternKind, UnaryOp,
};
use sere_ir::{Name, SoftKeyword, Span, TokenKind};

use crate::recovery::TokenSet;
use crate::{one_of, require, ParseError, ParseErrorKind, ParseOutcome, Parser};

/// Tokens that start a literal pattern.
const LITERAL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Int(Name::EMPTY))
    .with(TokenKind::Float(Name::EMPTY))
    .with(TokenKind::Imaginary(Name::EMPTY))
    .with(TokenKind::String(Name::EMPTY))
    .with(TokenKind::None)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::Minus);

const NUMBER_START: TokenSet = TokenSet::new()
    .with(TokenKind::Int(Name::EMPTY))
    .with(TokenKind::Float(Name::EMPTY))
    .with(TokenKind::Imaginary(Name::EMPTY));

const NAME_START: TokenSet = TokenSet::single(TokenKind::Ident(Name::EMPTY));

impl Parser<'_> {
    /// Parse the pattern of a `case` clause.
    ///
    /// A top-level comma-separated list is an open sequence pattern.
    pub(crate) fn parse_patterns(&mut self) -> Result<Pattern, ParseError> {
        let first = self.parse_maybe_star_pattern()?;
        if !self.check(&TokenKind::Comma) {
            return Ok(first);
        }

        let start = first.span;
        let mut elements = vec![first];
        while self.eat(&TokenKind::Comma) {
            if self.check(&TokenKind::Colon) || self.check(&TokenKind::If) {
                break;
            }
            elements.push(self.parse_maybe_star_pattern()?);
        }
        Ok(Pattern::new(
            PatternKind::Sequence(elements),
            self.span_from(start),
        ))
    }

    /// `'*' NAME` or a full pattern.
    fn parse_maybe_star_pattern(&mut self) -> Result<Pattern, ParseError> {
        if !self.check(&TokenKind::Star) {
            return self.parse_pattern();
        }

        let start = self.advance().span;
        let name = if self.cursor.check_soft(SoftKeyword::Underscore) {
            self.advance();
            None
        } else {
            Some(self.cursor.expect_ident()?)
        };
        Ok(Pattern::new(PatternKind::Star(name), self.span_from(start)))
    }

    /// `or_pattern ['as' NAME]`
    fn parse_pattern(&mut self) -> Result<Pattern, ParseError> {
        let pattern = self.parse_or_pattern()?;
        if !self.check(&TokenKind::As) {
            return Ok(pattern);
        }

        self.advance();
        if self.cursor.check_soft(SoftKeyword::Underscore) {
            self.report(ParseError::new(
                ParseErrorKind::InvalidPattern,
                "cannot use `_` as an `as` target",
                self.current_span(),
            ));
        }
        let name = self.cursor.expect_ident()?;

        let span = self.span_from(pattern.span);
        Ok(Pattern::new(
            PatternKind::As {
                pattern: Box::new(pattern),
                name,
            },
            span,
        ))
    }

    /// `closed ('|' closed)*`
    fn parse_or_pattern(&mut self) -> Result<Pattern, ParseError> {
        let first = self.parse_closed_pattern()?;
        if !self.check(&TokenKind::Pipe) {
            return Ok(first);
        }

        let start = first.span;
        let mut alternatives = vec![first];
        while self.eat(&TokenKind::Pipe) {
            alternatives.push(self.parse_closed_pattern()?);
        }
        Ok(Pattern::new(
            PatternKind::Or(alternatives),
            self.span_from(start),
        ))
    }

    fn parse_closed_pattern(&mut self) -> Result<Pattern, ParseError> {
        let outcome = one_of!(
            self,
            self.literal_pattern(),
            self.value_or_class_pattern(),
            self.capture_pattern(),
            self.group_or_sequence_pattern(),
            self.mapping_pattern(),
        );
        outcome.into_result(|expected, position| {
            self.error_from_expected(&expected, position, "a pattern")
        })
    }

    /// Numbers (optionally signed, or `real +/- imaginary`), strings,
    /// `None`, `True` and `False`.
    fn literal_pattern(&mut self) -> ParseOutcome<Pattern> {
        let start = self.current_span();
        let literal = match self.current_kind() {
            TokenKind::String(text) => Literal::Str(text),
            TokenKind::None => Literal::None,
            TokenKind::True => Literal::True,
            TokenKind::False => Literal::False,
            TokenKind::Minus | TokenKind::Int(_) | TokenKind::Float(_) | TokenKind::Imaginary(_) => {
                let number = require!(self, self.signed_number(), "a number");
                let value = require!(self, self.complex_tail(number), "an imaginary number");
                return ParseOutcome::consumed_ok(Pattern::new(
                    PatternKind::Literal(value.boxed()),
                    self.span_from(start),
                ));
            }
            _ => return ParseOutcome::empty_err(LITERAL_START, self.position()),
        };
        self.advance();
        let expr = Expr::new(ExprKind::Literal(literal), start);
        ParseOutcome::consumed_ok(Pattern::new(PatternKind::Literal(expr.boxed()), start))
    }

    /// `['-'] NUMBER`
    fn signed_number(&mut self) -> ParseOutcome<Expr> {
        if !self.check(&TokenKind::Minus) {
            return self.number();
        }
        let minus = self.advance().span;
        let operand = require!(self, self.number(), "a number after `-`");
        let span = minus.merge(operand.span);
        ParseOutcome::consumed_ok(Expr::new(
            ExprKind::UnaryOp {
                op: UnaryOp::Neg,
                operand: operand.boxed(),
            },
            span,
        ))
    }

    fn number(&mut self) -> ParseOutcome<Expr> {
        let span = self.current_span();
        let literal = match self.current_kind() {
            TokenKind::Int(text) => Literal::Int(text),
            TokenKind::Float(text) => Literal::Float(text),
            TokenKind::Imaginary(text) => Literal::Imaginary(text),
            _ => return ParseOutcome::empty_err(NUMBER_START, self.position()),
        };
        self.advance();
        ParseOutcome::consumed_ok(Expr::new(ExprKind::Literal(literal), span))
    }

    /// `('+' | '-') IMAGINARY` after the real part of a complex literal.
    fn complex_tail(&mut self, real: Expr) -> ParseOutcome<Expr> {
        let op = match self.current_kind() {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            _ => return ParseOutcome::empty_ok(real),
        };
        self.advance();

        let span = self.current_span();
        let TokenKind::Imaginary(text) = self.current_kind() else {
            return ParseOutcome::empty_err(
                TokenSet::single(TokenKind::Imaginary(Name::EMPTY)),
                self.position(),
            );
        };
        self.advance();

        if is_imaginary(&real) {
            self.report(ParseError::new(
                ParseErrorKind::InvalidPattern,
                "real number required in complex literal",
                real.span,
            ));
        }
        let imaginary = Expr::new(ExprKind::Literal(Literal::Imaginary(text)), span);
        let span = real.span.merge(span);
        ParseOutcome::consumed_ok(Expr::new(
            ExprKind::BinOp {
                op,
                left: real.boxed(),
                right: imaginary.boxed(),
            },
            span,
        ))
    }

    /// A dotted name (value pattern) or a dotted name followed by `(`
    /// (class pattern). A bare name is left to `capture_pattern`.
    fn value_or_class_pattern(&mut self) -> ParseOutcome<Pattern> {
        let is_value_or_class = self.cursor.check_ident()
            && !self.cursor.check_soft(SoftKeyword::Underscore)
            && matches!(self.cursor.peek_kind(1), TokenKind::Dot | TokenKind::LParen);
        if !is_value_or_class {
            return ParseOutcome::empty_err(NAME_START, self.position());
        }

        let start = self.current_span();
        let result = match self.parse_dotted_name() {
            Ok(name) if self.check(&TokenKind::LParen) => self.parse_class_pattern(name),
            Ok(name) => {
                let span = name.span;
                Ok(Pattern::new(PatternKind::Value(name), span))
            }
            Err(error) => Err(error),
        };
        ParseOutcome::committed(result, start)
    }

    /// `cls '(' [positional (',' positional)*] [keyword (',' keyword)*] [','] ')'`
    fn parse_class_pattern(&mut self, cls: DottedName) -> Result<Pattern, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let mut positional = Vec::new();
        let mut keywords: Vec<KeywordPattern> = Vec::new();

        while !self.check(&TokenKind::RParen) {
            if self.cursor.check_ident() && self.cursor.peek_kind(1) == TokenKind::Eq {
                let start = self.current_span();
                let name = self.cursor.expect_ident()?;
                self.advance();
                let pattern = self.parse_pattern()?;
                keywords.push(KeywordPattern {
                    name,
                    pattern,
                    span: self.span_from(start),
                });
            } else {
                let pattern = self.parse_pattern()?;
                if !keywords.is_empty() {
                    self.report(ParseError::new(
                        ParseErrorKind::InvalidPattern,
                        "positional patterns must come before keyword patterns",
                        pattern.span,
                    ));
                }
                positional.push(pattern);
            }

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;

        let span = self.span_from(cls.span);
        Ok(Pattern::new(
            PatternKind::Class {
                cls,
                positional,
                keywords,
            },
            span,
        ))
    }

    /// A bare name binds the subject; `_` matches without binding.
    fn capture_pattern(&mut self) -> ParseOutcome<Pattern> {
        let span = self.current_span();
        if self.cursor.check_soft(SoftKeyword::Underscore) {
            self.advance();
            return ParseOutcome::consumed_ok(Pattern::new(PatternKind::Wildcard, span));
        }
        match self.cursor.expect_ident() {
            Ok(name) => ParseOutcome::consumed_ok(Pattern::new(PatternKind::Capture(name), span)),
            Err(_) => ParseOutcome::empty_err(NAME_START, self.position()),
        }
    }

    /// `(pattern)`, `(p,)`, `(p, q)`, `()` and `[...]`.
    fn group_or_sequence_pattern(&mut self) -> ParseOutcome<Pattern> {
        let start = self.current_span();
        let closer = match self.current_kind() {
            TokenKind::LParen => TokenKind::RParen,
            TokenKind::LBracket => TokenKind::RBracket,
            _ => {
                let expected = TokenSet::new()
                    .with(TokenKind::LParen)
                    .with(TokenKind::LBracket);
                return ParseOutcome::empty_err(expected, self.position());
            }
        };
        self.advance();
        ParseOutcome::committed(self.parse_bracketed_patterns(start, &closer), start)
    }

    fn parse_bracketed_patterns(
        &mut self,
        start: Span,
        closer: &TokenKind,
    ) -> Result<Pattern, ParseError> {
        let mut elements = Vec::new();
        let mut trailing_comma = false;
        while !self.check(closer) {
            elements.push(self.parse_maybe_star_pattern()?);
            trailing_comma = self.eat(&TokenKind::Comma);
            if !trailing_comma {
                break;
            }
        }
        self.expect(closer)?;
        let span = self.span_from(start);

        // A single parenthesized pattern without a comma is a group.
        let is_group = *closer == TokenKind::RParen
            && elements.len() == 1
            && !trailing_comma
            && !matches!(elements[0].kind, PatternKind::Star(_));
        if is_group {
            if let Some(inner) = elements.pop() {
                return Ok(Pattern::new(PatternKind::Group(Box::new(inner)), span));
            }
        }
        Ok(Pattern::new(PatternKind::Sequence(elements), span))
    }

    /// `'{' [key ':' pattern (',' key ':' pattern)*] [',' '**' NAME] [','] '}'`
    fn mapping_pattern(&mut self) -> ParseOutcome<Pattern> {
        let start = self.current_span();
        if !self.check(&TokenKind::LBrace) {
            return ParseOutcome::empty_err(TokenSet::single(TokenKind::LBrace), self.position());
        }
        self.advance();
        ParseOutcome::committed(self.parse_mapping_entries(start), start)
    }

    fn parse_mapping_entries(&mut self, start: Span) -> Result<Pattern, ParseError> {
        let mut entries = Vec::new();
        let mut rest: Option<Name> = None;

        while !self.check(&TokenKind::RBrace) {
            if rest.is_some() {
                self.report(ParseError::new(
                    ParseErrorKind::InvalidPattern,
                    "`**` rest pattern must come last in a mapping pattern",
                    self.current_span(),
                ));
            }

            if self.check(&TokenKind::DoubleStar) {
                let stars = self.advance().span;
                if self.cursor.check_soft(SoftKeyword::Underscore) {
                    self.report(ParseError::new(
                        ParseErrorKind::InvalidPattern,
                        "`**_` is not allowed in a mapping pattern",
                        self.span_from(stars).merge(self.current_span()),
                    ));
                }
                rest = Some(self.cursor.expect_ident()?);
            } else {
                let key = self.parse_mapping_key()?;
                self.expect(&TokenKind::Colon)?;
                let pattern = self.parse_pattern()?;
                entries.push(MappingEntry { key, pattern });
            }

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RBrace)?;

        Ok(Pattern::new(
            PatternKind::Mapping { entries, rest },
            self.span_from(start),
        ))
    }

    /// A mapping key: a literal or a dotted value.
    fn parse_mapping_key(&mut self) -> Result<Pattern, ParseError> {
        let outcome = one_of!(self, self.literal_pattern(), self.value_pattern());
        outcome.into_result(|expected, position| {
            self.error_from_expected(&expected, position, "a literal or dotted name")
        })
    }

    /// `NAME ('.' NAME)+`
    fn value_pattern(&mut self) -> ParseOutcome<Pattern> {
        if !(self.cursor.check_ident() && self.cursor.peek_kind(1) == TokenKind::Dot) {
            return ParseOutcome::empty_err(NAME_START, self.position());
        }
        let start = self.current_span();
        let result = self.parse_dotted_name().map(|name| {
            let span = name.span;
            Pattern::new(PatternKind::Value(name), span)
        });
        ParseOutcome::committed(result, start)
    }
}

/// `3j` or `-3j`.
fn is_imaginary(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Literal(literal) => matches!(literal, Literal::Imaginary(_)),
        ExprKind::UnaryOp { operand, .. } => is_imaginary(operand),
        _ => false,
    }
}
