//! Statement parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: statement dispatch, recovery wrapper and blocks
//! - `simple.rs`: `;`-separated simple statements, assignments, imports
//! - `compound.rs`: `if`, `while`, `for`, `try`, `with`
//! - `def.rs`: `def`, `class`, decorators and `async`
//! - `match_stmt.rs`: `match` disambiguation and case blocks

mod compound;
mod def;
mod match_stmt;
mod simple;

use sere_ir::ast::Stmt;
use sere_ir::{SoftKeyword, Span, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse one statement line, recording any error and resynchronizing.
    ///
    /// Returns the statements produced; empty after an error.
    pub(crate) fn parse_statement_recovering(&mut self) -> Vec<Stmt> {
        match self.parse_statement() {
            Ok(stmts) => stmts,
            Err(error) => {
                let skipped = self.synchronize_statement();
                self.report(error.with_skipped(skipped));
                Vec::new()
            }
        }
    }

    /// Parse a compound statement or a line of simple statements.
    pub(crate) fn parse_statement(&mut self) -> Result<Vec<Stmt>, ParseError> {
        match self.current_kind() {
            TokenKind::If => Ok(vec![self.parse_if()?]),
            TokenKind::While => Ok(vec![self.parse_while()?]),
            TokenKind::For => Ok(vec![self.parse_for()?]),
            TokenKind::Try => Ok(vec![self.parse_try()?]),
            TokenKind::With => Ok(vec![self.parse_with()?]),
            TokenKind::Def => Ok(vec![self.parse_function_def()?]),
            TokenKind::Class => Ok(vec![self.parse_class_def()?]),
            TokenKind::Async => Ok(vec![self.parse_async()?]),
            TokenKind::At => self.parse_decorated(),
            TokenKind::SoftKeyword(SoftKeyword::Match) => match self.try_parse_match() {
                Some(stmt) => Ok(vec![stmt]),
                None => self.parse_simple_statements(),
            },
            _ => self.parse_simple_statements(),
        }
    }

    /// Parse `':' block` after a compound statement header starting at
    /// `header`.
    ///
    /// The block is either simple statements on the same line or a
    /// `Newline Indent stmt+ Dedent` suite. A header followed by a line that
    /// is not indented reports `UnterminatedBlock` and yields an empty body.
    pub(crate) fn parse_block(&mut self, header: Span) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::Colon)?;
        if !self.check(&TokenKind::Newline) {
            return self.parse_simple_statements();
        }
        let header = self.span_from(header);
        self.advance();

        if !self.check(&TokenKind::Indent) {
            self.report(ParseError::new(
                ParseErrorKind::UnterminatedBlock,
                "expected an indented block",
                header,
            ));
            return Ok(Vec::new());
        }
        self.advance();

        let mut body = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::Dedent => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    self.report(ParseError::end_of_input(self.current_span(), "end of block"));
                    break;
                }
                TokenKind::Newline => {
                    self.advance();
                }
                _ => body.extend(self.parse_statement_recovering()),
            }
        }
        Ok(body)
    }
}
