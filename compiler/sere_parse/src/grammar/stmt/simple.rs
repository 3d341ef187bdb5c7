//! Simple statements.
//!
//! One logical line holds one or more simple statements separated by `;`
//! and ends at `Newline` (or `Eof`).

use sere_ir::ast::{DottedName, Expr, ExprKind, ImportAlias, ImportNames, Stmt, StmtKind};
use sere_ir::{Name, TokenKind};

use crate::recovery::STMT_END;
use crate::{ParseError, ParseErrorKind, Parser};

/// Which kind of binding a target is checked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TargetUse {
    /// `=`, `for` and `with ... as`: names, attributes, subscripts, and
    /// tuples or lists of targets with starred elements.
    Assign,
    /// `+=` and annotated assignment: a single name, attribute or subscript.
    Single,
    /// `del`: like `Assign` but without starred elements.
    Delete,
}

impl Parser<'_> {
    /// Parse `simple_stmt (';' simple_stmt)* [';'] Newline`.
    pub(crate) fn parse_simple_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = vec![self.parse_simple_statement()?];
        while self.eat(&TokenKind::Semicolon) {
            if self.check(&TokenKind::Newline) || self.is_at_end() {
                break;
            }
            stmts.push(self.parse_simple_statement()?);
        }
        self.expect_statement_end()?;
        Ok(stmts)
    }

    /// Consume the `Newline` ending a logical line.
    ///
    /// `Eof` and `Dedent` also end a line without being consumed.
    fn expect_statement_end(&mut self) -> Result<(), ParseError> {
        match self.current_kind() {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof | TokenKind::Dedent => Ok(()),
            _ => Err(ParseError::from_expected_tokens(
                &STMT_END,
                self.current(),
                "end of statement",
            )),
        }
    }

    fn parse_simple_statement(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Pass => {
                self.advance();
                StmtKind::Pass
            }
            TokenKind::Break => {
                self.advance();
                StmtKind::Break
            }
            TokenKind::Continue => {
                self.advance();
                StmtKind::Continue
            }
            TokenKind::Del => self.parse_del()?,
            TokenKind::Return => {
                self.advance();
                let value = if self.starts_star_expression() {
                    Some(self.parse_star_expressions()?)
                } else {
                    None
                };
                StmtKind::Return(value)
            }
            TokenKind::Raise => self.parse_raise()?,
            TokenKind::Global => {
                self.advance();
                StmtKind::Global(self.parse_name_list()?)
            }
            TokenKind::Nonlocal => {
                self.advance();
                StmtKind::Nonlocal(self.parse_name_list()?)
            }
            TokenKind::Assert => {
                self.advance();
                let test = self.parse_expression()?;
                let msg = if self.eat(&TokenKind::Comma) {
                    Some(self.parse_expression()?)
                } else {
                    None
                };
                StmtKind::Assert { test, msg }
            }
            TokenKind::Import => self.parse_import()?,
            TokenKind::From => self.parse_import_from()?,
            TokenKind::Yield => StmtKind::Yield(self.parse_yield_expression()?),
            _ => self.parse_expression_statement()?,
        };
        Ok(Stmt::new(kind, self.span_from(start)))
    }

    /// Expression statements and the three assignment forms.
    fn parse_expression_statement(&mut self) -> Result<StmtKind, ParseError> {
        let first = self.parse_star_expressions()?;

        if self.check(&TokenKind::Colon) {
            self.check_target(&first, TargetUse::Single)?;
            self.advance();
            let annotation = self.parse_expression()?;
            let value = if self.eat(&TokenKind::Eq) {
                Some(self.parse_assigned_value()?)
            } else {
                None
            };
            return Ok(StmtKind::AnnAssign {
                target: first,
                annotation,
                value,
            });
        }

        if let Some(op) = self.match_augmented_op() {
            self.check_target(&first, TargetUse::Single)?;
            self.advance();
            let value = self.parse_assigned_value()?;
            return Ok(StmtKind::AugAssign {
                target: first,
                op,
                value,
            });
        }

        if !self.check(&TokenKind::Eq) {
            return Ok(StmtKind::Expr(first));
        }

        let mut targets = vec![first];
        let value = loop {
            self.advance();
            let rhs = self.parse_assigned_value()?;
            if !self.check(&TokenKind::Eq) {
                break rhs;
            }
            targets.push(rhs);
        };
        for target in &targets {
            self.check_target(target, TargetUse::Assign)?;
        }
        Ok(StmtKind::Assign { targets, value })
    }

    /// Right-hand side of an assignment: a `yield` or an expression list.
    fn parse_assigned_value(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Yield) {
            self.parse_yield_expression()
        } else {
            self.parse_star_expressions()
        }
    }

    fn parse_del(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let mut targets = Vec::new();
        loop {
            let target = self.parse_bitwise_or()?;
            self.check_target(&target, TargetUse::Delete)?;
            targets.push(target);
            if !self.eat(&TokenKind::Comma) || !self.starts_expression() {
                break;
            }
        }
        Ok(StmtKind::Del(targets))
    }

    fn parse_raise(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        if !self.starts_expression() {
            return Ok(StmtKind::Raise {
                exc: None,
                cause: None,
            });
        }
        let exc = self.parse_expression()?;
        let cause = if self.eat(&TokenKind::From) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(StmtKind::Raise {
            exc: Some(exc),
            cause,
        })
    }

    fn parse_name_list(&mut self) -> Result<Vec<Name>, ParseError> {
        let mut names = vec![self.cursor.expect_ident()?];
        while self.eat(&TokenKind::Comma) {
            names.push(self.cursor.expect_ident()?);
        }
        Ok(names)
    }

    /// `import a.b [as c], d`
    fn parse_import(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let mut aliases = Vec::new();
        loop {
            let name = self.parse_dotted_name()?;
            let asname = self.parse_as_name()?;
            aliases.push(ImportAlias { name, asname });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(StmtKind::Import(aliases))
    }

    /// `from [.]*module import (*|names|(names))`
    ///
    /// `...` counts as three dots.
    fn parse_import_from(&mut self) -> Result<StmtKind, ParseError> {
        self.advance();
        let mut level = 0u32;
        loop {
            match self.current_kind() {
                TokenKind::Dot => level += 1,
                TokenKind::Ellipsis => level += 3,
                _ => break,
            }
            self.advance();
        }

        let module = if level == 0 || self.cursor.check_ident() {
            Some(self.parse_dotted_name()?)
        } else {
            None
        };
        self.expect(&TokenKind::Import)?;

        if self.eat(&TokenKind::Star) {
            return Ok(StmtKind::ImportFrom {
                module,
                level,
                names: ImportNames::Star,
            });
        }

        let parenthesized = self.eat(&TokenKind::LParen);
        let mut aliases = Vec::new();
        loop {
            let start = self.current_span();
            let name = self.cursor.expect_ident()?;
            let name = DottedName::new(vec![name], self.span_from(start));
            let asname = self.parse_as_name()?;
            aliases.push(ImportAlias { name, asname });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
            if parenthesized && self.check(&TokenKind::RParen) {
                break;
            }
        }
        if parenthesized {
            self.expect(&TokenKind::RParen)?;
        }

        Ok(StmtKind::ImportFrom {
            module,
            level,
            names: ImportNames::Names(aliases),
        })
    }

    fn parse_as_name(&mut self) -> Result<Option<Name>, ParseError> {
        if self.eat(&TokenKind::As) {
            Ok(Some(self.cursor.expect_ident()?))
        } else {
            Ok(None)
        }
    }

    /// `NAME ('.' NAME)*`
    pub(crate) fn parse_dotted_name(&mut self) -> Result<DottedName, ParseError> {
        let start = self.current_span();
        let mut parts = vec![self.cursor.expect_ident()?];
        while self.eat(&TokenKind::Dot) {
            parts.push(self.cursor.expect_ident()?);
        }
        Ok(DottedName::new(parts, self.span_from(start)))
    }

    /// Fail with `InvalidAssignmentTarget` unless `expr` can be bound.
    pub(crate) fn check_assignment_target(&self, expr: &Expr) -> Result<(), ParseError> {
        self.check_target(expr, TargetUse::Assign)
    }

    fn check_target(&self, expr: &Expr, usage: TargetUse) -> Result<(), ParseError> {
        match find_invalid_target(expr, usage) {
            None => Ok(()),
            Some(bad) => Err(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                format!("cannot {} {}", usage.verb(), describe(bad)),
                bad.span,
            )),
        }
    }
}

impl TargetUse {
    fn verb(self) -> &'static str {
        match self {
            TargetUse::Assign | TargetUse::Single => "assign to",
            TargetUse::Delete => "delete",
        }
    }
}

/// The first sub-expression of `expr` that cannot be a target, if any.
fn find_invalid_target(expr: &Expr, usage: TargetUse) -> Option<&Expr> {
    match &expr.kind {
        ExprKind::Name(_) | ExprKind::Attribute { .. } | ExprKind::Subscript { .. } => None,
        ExprKind::Tuple(elements) | ExprKind::List(elements) if usage != TargetUse::Single => {
            elements.iter().find_map(|element| match &element.kind {
                ExprKind::Star(inner) if usage == TargetUse::Assign => {
                    find_invalid_target(inner, usage)
                }
                _ => find_invalid_target(element, usage),
            })
        }
        _ => Some(expr),
    }
}

fn describe(expr: &Expr) -> &'static str {
    match &expr.kind {
        ExprKind::Literal(_) => "a literal",
        ExprKind::Call { .. } => "a function call",
        ExprKind::Tuple(_) => "a tuple",
        ExprKind::List(_) => "a list",
        ExprKind::Star(_) => "a starred expression",
        ExprKind::Lambda { .. } => "a lambda",
        ExprKind::Comprehension(_) => "a comprehension",
        ExprKind::BinOp { .. } | ExprKind::UnaryOp { .. } | ExprKind::BoolOp { .. } => {
            "an operator expression"
        }
        ExprKind::Compare { .. } => "a comparison",
        _ => "this expression",
    }
}
