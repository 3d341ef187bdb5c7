//! Recursive descent parser for Sere.
//!
//! Consumes a `TokenList` (with `Newline`/`Indent`/`Dedent` layout tokens)
//! and produces an owned AST plus every syntax error found. Three start
//! symbols are exposed: a whole module, a single interactive statement, and
//! a bare expression.
//!
//! # Module Structure
//!
//! - `cursor`: token access and bounded lookahead
//! - `snapshot`: speculative parsing (snapshot/restore)
//! - `outcome`: four-way `ParseOutcome` and the `one_of!`/`require!` macros
//! - `recovery`: token sets and statement resynchronization
//! - `grammar`: expression, pattern and statement rules

mod context;
mod cursor;
mod error;
mod grammar;
mod outcome;
mod recovery;
mod snapshot;

#[cfg(test)]
mod tests;

pub use context::ParseContext;
pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use outcome::ParseOutcome;
pub use recovery::{synchronize, TokenSet};
pub use snapshot::ParserSnapshot;

use sere_diagnostic::DiagnosticCollector;
use sere_ir::ast::{Expr, Module, Stmt};
use sere_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

/// An AST node together with the syntax errors found while building it.
///
/// The node is always present; with errors it is a best-effort partial
/// tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput<T> {
    pub node: T,
    pub errors: Vec<ParseError>,
}

impl<T> ParseOutput<T> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The errors as diagnostics, in the order they were found.
    pub fn diagnostics(&self) -> DiagnosticCollector {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Output of [`parse_source`]: lexer errors come first, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceParse {
    pub module: Module,
    pub lex_errors: Vec<sere_lexer::LexError>,
    pub parse_errors: Vec<ParseError>,
}

impl SourceParse {
    pub fn has_errors(&self) -> bool {
        !self.lex_errors.is_empty() || !self.parse_errors.is_empty()
    }

    pub fn diagnostics(&self) -> DiagnosticCollector {
        self.lex_errors
            .iter()
            .map(sere_lexer::LexError::to_diagnostic)
            .chain(self.parse_errors.iter().map(ParseError::to_diagnostic))
            .collect()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    context: ParseContext,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            context: ParseContext::NONE,
            errors: Vec::new(),
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn position(&self) -> usize {
        self.cursor.position()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Consume `kind` if it is the current token.
    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Span from `start` through the last consumed token.
    #[inline]
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    /// Record an error that does not interrupt parsing.
    pub(crate) fn report(&mut self, error: ParseError) {
        // Input ends once; enclosing blocks don't repeat it.
        if error.kind == ParseErrorKind::EndOfInput
            && self
                .errors
                .last()
                .is_some_and(|last| last.kind == ParseErrorKind::EndOfInput)
        {
            return;
        }
        debug!(code = %error.code(), message = %error.message, "syntax error");
        self.errors.push(error);
    }

    /// Run `f` with `flags` replacing the current context.
    pub(crate) fn with_context<T>(
        &mut self,
        flags: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = flags;
        let result = f(self);
        self.context = saved;
        result
    }

    /// Build a hard error from a soft failure recorded at token `position`.
    pub(crate) fn error_from_expected(
        &self,
        expected: &TokenSet,
        position: usize,
        what: &str,
    ) -> ParseError {
        let found = self.cursor.peek_at(position);
        ParseError::from_expected_tokens(expected, found, what)
    }

    /// Parse a whole module.
    pub fn parse_module(mut self) -> ParseOutput<Module> {
        let start = self.current_span();
        let mut body = Vec::new();

        while !self.is_at_end() {
            if self.eat(&TokenKind::Newline) {
                continue;
            }
            if self.check(&TokenKind::Dedent) {
                let error = ParseError::unexpected("a statement", self.current());
                self.advance();
                self.report(error);
                continue;
            }
            body.extend(self.parse_statement_recovering());
        }

        let span = start.merge(self.current_span());
        ParseOutput {
            node: Module { body, span },
            errors: self.errors,
        }
    }

    /// Parse one interactive input: a line of `;`-separated simple
    /// statements, or one compound statement.
    pub fn parse_single_statement(mut self) -> ParseOutput<Vec<Stmt>> {
        while self.eat(&TokenKind::Newline) {}

        let stmts = if self.is_at_end() {
            Vec::new()
        } else {
            self.parse_statement_recovering()
        };

        while self.eat(&TokenKind::Newline) {}
        if !self.is_at_end() {
            let error = ParseError::unexpected("end of input", self.current());
            let skipped = self.skip_to_end();
            self.report(error.with_skipped(skipped));
        }

        ParseOutput {
            node: stmts,
            errors: self.errors,
        }
    }

    /// Parse a bare expression list (evaluation input).
    pub fn parse_expression_only(mut self) -> ParseOutput<Option<Expr>> {
        while self.eat(&TokenKind::Newline) {}

        let expr = match self.parse_star_expressions() {
            Ok(expr) => Some(expr),
            Err(error) => {
                self.report(error);
                None
            }
        };

        while self.eat(&TokenKind::Newline) {}
        if expr.is_some() && !self.is_at_end() {
            let error = ParseError::unexpected("end of input", self.current());
            let skipped = self.skip_to_end();
            self.report(error.with_skipped(skipped));
        }

        ParseOutput {
            node: expr,
            errors: self.errors,
        }
    }

    /// Discard everything up to `Eof`.
    fn skip_to_end(&mut self) -> Option<Span> {
        let start = self.current_span();
        let start_pos = self.position();
        synchronize(&mut self.cursor, TokenSet::single(TokenKind::Eof));
        (self.position() != start_pos).then(|| self.span_from(start))
    }
}

/// Parse tokens into a module.
pub fn parse_module(tokens: &TokenList, interner: &StringInterner) -> ParseOutput<Module> {
    Parser::new(tokens, interner).parse_module()
}

/// Parse tokens as one interactive statement.
pub fn parse_single_statement(
    tokens: &TokenList,
    interner: &StringInterner,
) -> ParseOutput<Vec<Stmt>> {
    Parser::new(tokens, interner).parse_single_statement()
}

/// Parse tokens as a bare expression.
pub fn parse_expression_only(
    tokens: &TokenList,
    interner: &StringInterner,
) -> ParseOutput<Option<Expr>> {
    Parser::new(tokens, interner).parse_expression_only()
}

/// Lex and parse a source file.
pub fn parse_source(source: &str, interner: &StringInterner) -> SourceParse {
    let lexed = sere_lexer::lex_with_errors(source, interner);
    let parsed = parse_module(&lexed.tokens, interner);
    SourceParse {
        module: parsed.node,
        lex_errors: lexed.errors,
        parse_errors: parsed.errors,
    }
}
