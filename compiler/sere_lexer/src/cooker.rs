//! Layout cooking for the raw scanner output.
//!
//! Turns the flat logos stream into the parser's token stream:
//!
//! ```text
//! source → RawToken → TokenCooker → TokenList
//! ```
//!
//! - Indentation at the start of each logical line becomes `Indent` and
//!   `Dedent` tokens, tracked on a stack of column widths.
//! - Newlines inside brackets and on blank lines are dropped.
//! - Adjacent string literals are merged into one `String` token.
//! - End of input closes the last line and every open block before `Eof`,
//!   unless a bracket is still open.

use logos::Logos;
use sere_ir::{Span, StringInterner, Token, TokenKind, TokenList};

use crate::convert::convert_token;
use crate::lex_error::{LexError, LexErrorKind};
use crate::raw_token::RawToken;

/// Tab stops are every eight columns.
const TAB_WIDTH: u32 = 8;

pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    interner: &'src StringInterner,
    tokens: TokenList,
    errors: Vec<LexError>,
    /// Open indentation widths; the bottom entry is always 0.
    indents: Vec<u32>,
    /// Bracket nesting depth. Layout is suspended while positive.
    depth: u32,
    /// True until the first token of a logical line has been seen.
    at_line_start: bool,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str, interner: &'src StringInterner) -> Self {
        TokenCooker {
            source,
            interner,
            tokens: TokenList::with_capacity(source.len() / 4 + 2),
            errors: Vec::new(),
            indents: vec![0],
            depth: 0,
            at_line_start: true,
        }
    }

    pub(crate) fn run(mut self) -> (TokenList, Vec<LexError>) {
        let mut logos = RawToken::lexer(self.source);

        while let Some(token_result) = logos.next() {
            let span = Span::from_range(logos.span());

            match token_result {
                Ok(RawToken::Comment | RawToken::LineContinuation) => {}
                Ok(RawToken::Newline) => self.newline(span),
                Ok(RawToken::UnterminatedString | RawToken::TripleString(false)) => {
                    self.begin_token(span);
                    self.errors
                        .push(LexError::new(LexErrorKind::UnterminatedString, span));
                    self.push(Token::new(TokenKind::Error, span));
                }
                Ok(raw) => {
                    self.begin_token(span);
                    let kind = convert_token(raw, logos.slice(), self.interner);
                    self.push_cooked(kind, span);
                }
                Err(()) => {
                    self.begin_token(span);
                    let ch = logos.slice().chars().next().unwrap_or('\u{fffd}');
                    self.errors
                        .push(LexError::new(LexErrorKind::InvalidCharacter(ch), span));
                    self.push(Token::new(TokenKind::Error, span));
                }
            }
        }

        self.finish();
        (self.tokens, self.errors)
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Push a converted token, tracking brackets and merging string pieces.
    fn push_cooked(&mut self, kind: TokenKind, span: Span) {
        match kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => self.depth += 1,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                self.depth = self.depth.saturating_sub(1);
            }
            TokenKind::String(piece) => {
                if let Some(&Token {
                    kind: TokenKind::String(prev),
                    span: prev_span,
                }) = self.tokens.last()
                {
                    let merged = format!(
                        "{} {}",
                        self.interner.lookup(prev),
                        self.interner.lookup(piece)
                    );
                    let name = self.interner.intern(&merged);
                    self.tokens
                        .replace_last(Token::new(TokenKind::String(name), prev_span.merge(span)));
                    return;
                }
            }
            _ => {}
        }
        self.push(Token::new(kind, span));
    }

    fn newline(&mut self, span: Span) {
        if self.depth > 0 {
            return;
        }
        match self.tokens.last() {
            None => return,
            Some(last) if matches!(last.kind, TokenKind::Newline) => return,
            Some(_) => {}
        }
        self.push(Token::new(TokenKind::Newline, span));
        self.at_line_start = true;
    }

    /// Called before every significant token; resolves indentation on the
    /// first token of a logical line.
    fn begin_token(&mut self, span: Span) {
        if !self.at_line_start {
            return;
        }
        self.at_line_start = false;
        if self.depth > 0 {
            return;
        }

        let offset = span.start as usize;
        let line_start = self.source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let width = indentation_width(&self.source[line_start..offset]);
        let top = self.current_indent();

        if width > top {
            self.indents.push(width);
            self.push(Token::new(
                TokenKind::Indent,
                Span::from_range(line_start..offset),
            ));
        } else if width < top {
            let dedent_span = Span::point(span.start);
            while width < self.current_indent() {
                self.indents.pop();
                self.push(Token::new(TokenKind::Dedent, dedent_span));
            }
            if width != self.current_indent() {
                self.errors.push(LexError::new(
                    LexErrorKind::InconsistentDedent,
                    Span::from_range(line_start..offset),
                ));
            }
        }
    }

    fn current_indent(&self) -> u32 {
        self.indents.last().copied().unwrap_or(0)
    }

    fn finish(&mut self) {
        let end = Span::point(u32::try_from(self.source.len()).unwrap_or(u32::MAX));

        // Cut off inside brackets: the open construct runs straight into `Eof`.
        if self.depth > 0 {
            self.push(Token::new(TokenKind::Eof, end));
            return;
        }
        if let Some(last) = self.tokens.last() {
            if !matches!(last.kind, TokenKind::Newline) {
                self.push(Token::new(TokenKind::Newline, end));
            }
        }
        while self.indents.len() > 1 {
            self.indents.pop();
            self.push(Token::new(TokenKind::Dedent, end));
        }
        self.push(Token::new(TokenKind::Eof, end));
    }
}

/// Column width of a line's leading whitespace.
fn indentation_width(prefix: &str) -> u32 {
    prefix.chars().fold(0, |width, ch| match ch {
        '\t' => (width / TAB_WIDTH + 1) * TAB_WIDTH,
        '\x0c' => 0,
        _ => width + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_width() {
        assert_eq!(indentation_width(""), 0);
        assert_eq!(indentation_width("    "), 4);
        assert_eq!(indentation_width("\t"), 8);
        assert_eq!(indentation_width("  \t"), 8);
        assert_eq!(indentation_width("\t  "), 10);
    }
}
