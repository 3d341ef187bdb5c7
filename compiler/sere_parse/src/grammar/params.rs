//! Parameter lists of `def` and `lambda`.
//!
//! ```text
//! params  param (',' param)* [',']
//! param   NAME [':' expression] ['=' expression]
//!       | '*' [NAME [':' expression]]
//!       | '**' NAME [':' expression]
//! ```
//!
//! Ordering mistakes (a second `*`, anything after `**`, a parameter
//! without default after one with a default, a bare `*` with nothing after
//! it) are reported as `InvalidParameters` and parsing continues.

use sere_ir::ast::{Param, Parameters};
use sere_ir::{Span, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse parameters up to (not including) `closer`.
    ///
    /// Annotations are only accepted when `annotations` is set; `lambda`
    /// parameters end at `:` instead.
    pub(crate) fn parse_parameters(
        &mut self,
        closer: &TokenKind,
        annotations: bool,
    ) -> Result<Parameters, ParseError> {
        let start = self.current_span();
        let start_pos = self.position();
        let mut params = Parameters::default();
        let mut seen_star = false;
        let mut bare_star: Option<Span> = None;
        let mut seen_default = false;

        while !self.check(closer) {
            match self.current_kind() {
                TokenKind::Star => {
                    let star = self.advance().span;
                    if params.kwarg.is_some() {
                        self.invalid_parameters("`*` follows `**` parameter", star);
                    } else if seen_star {
                        self.invalid_parameters("`*` may appear only once", star);
                    }
                    seen_star = true;
                    if self.cursor.check_ident() {
                        let vararg = self.parse_param(annotations, false)?;
                        params.vararg = Some(vararg);
                    } else {
                        bare_star = Some(star);
                    }
                }
                TokenKind::DoubleStar => {
                    let stars = self.advance().span;
                    let kwarg = self.parse_param(annotations, false)?;
                    if params.kwarg.is_some() {
                        self.invalid_parameters("`**` may appear only once", stars);
                    }
                    params.kwarg = Some(kwarg);
                }
                _ if self.cursor.check_ident() => {
                    let param = self.parse_param(annotations, true)?;
                    if params.kwarg.is_some() {
                        self.invalid_parameters("parameter follows `**` parameter", param.span);
                    }
                    if seen_star {
                        params.kwonly.push(param);
                    } else {
                        if param.default.is_some() {
                            seen_default = true;
                        } else if seen_default {
                            self.invalid_parameters(
                                "parameter without a default follows parameter with a default",
                                param.span,
                            );
                        }
                        params.args.push(param);
                    }
                }
                _ => return Err(ParseError::unexpected("a parameter", self.current())),
            }

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        if let Some(star) = bare_star {
            if params.kwonly.is_empty() {
                self.invalid_parameters("named parameters must follow bare `*`", star);
            }
        }

        params.span = if self.position() == start_pos {
            Span::point(start.start)
        } else {
            self.span_from(start)
        };
        Ok(params)
    }

    fn parse_param(&mut self, annotations: bool, defaults: bool) -> Result<Param, ParseError> {
        let start = self.current_span();
        let name = self.cursor.expect_ident()?;

        let annotation = if annotations && self.eat(&TokenKind::Colon) {
            Some(self.parse_expression()?.boxed())
        } else {
            None
        };
        let default = if defaults && self.eat(&TokenKind::Eq) {
            Some(self.parse_expression()?.boxed())
        } else {
            None
        };

        Ok(Param {
            name,
            annotation,
            default,
            span: self.span_from(start),
        })
    }

    fn invalid_parameters(&mut self, message: &str, span: Span) {
        self.report(ParseError::new(
            ParseErrorKind::InvalidParameters,
            message,
            span,
        ));
    }
}
