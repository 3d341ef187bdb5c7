//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, bounded lookahead, and consumption.

use sere_ir::{Name, SoftKeyword, Span, StringInterner, Token, TokenKind, TokenList};

use crate::ParseError;

/// Stand-in returned past the end of a stream that lacks its own `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Cursor for navigating tokens.
///
/// The position never moves past the final token. Streams produced by
/// `sere_lexer` always end in `Eof`; hand-built streams that don't behave as
/// if one followed the last token.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get a reference to the string interner.
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    ///
    /// Used by `ParserSnapshot` restoration after speculative parsing.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens
                .get(self.pos - 1)
                .map_or(Span::DUMMY, |token| token.span)
        } else {
            Span::DUMMY
        }
    }

    /// Look `offset` tokens ahead of the current one.
    ///
    /// `peek(0)` is the current token. Looking past the final token fails
    /// with `EndOfInput`.
    pub fn peek(&self, offset: usize) -> Result<&'a Token, ParseError> {
        let index = self.pos + offset;
        if index < self.tokens.len() {
            Ok(&self.tokens[index])
        } else {
            let at = self.tokens.last().map_or(Span::DUMMY, |t| t.span);
            Err(ParseError::end_of_input(at, "more tokens"))
        }
    }

    /// The token at absolute index `index`, or the final token past the end.
    pub fn peek_at(&self, index: usize) -> &'a Token {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF_TOKEN)
    }

    /// Kind of the token `offset` ahead, `Eof` past the end.
    #[inline]
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.peek(offset).map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.tokens.tag_at(self.pos) == kind.discriminant_index()
    }

    /// Check for a specific soft keyword.
    #[inline]
    pub fn check_soft(&self, keyword: SoftKeyword) -> bool {
        self.current_kind() == TokenKind::SoftKeyword(keyword)
    }

    /// Check for anything usable as a name: identifiers and soft keywords.
    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Ident(_) | TokenKind::SoftKeyword(_)
        )
    }

    /// The current soft keyword as an interned name, if it is one.
    ///
    /// Soft keywords are ordinary names everywhere except at the few
    /// positions where the grammar gives them meaning.
    pub fn soft_keyword_to_name(&self) -> Option<Name> {
        match self.current_kind() {
            TokenKind::SoftKeyword(keyword) => Some(self.interner.intern(keyword.as_str())),
            _ => None,
        }
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Stays on the final token once it is reached.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if self.pos < self.tokens.len() && !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of the given kind or fail with `UnexpectedToken`.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(
                &format!("`{}`", kind.display_name()),
                self.current(),
            ))
        }
    }

    /// Consume a name (identifier or soft keyword).
    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => match self.soft_keyword_to_name() {
                Some(name) => {
                    self.advance();
                    Ok(name)
                }
                None => Err(ParseError::unexpected("identifier", self.current())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseErrorKind;

    fn tokens(kinds: &[TokenKind]) -> TokenList {
        let mut list = TokenList::new();
        for (i, kind) in kinds.iter().enumerate() {
            let start = u32::try_from(i).unwrap_or(0) * 2;
            list.push(Token::new(*kind, Span::new(start, start + 1)));
        }
        list
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::Pass, TokenKind::Eof]);
        let mut cursor = Cursor::new(&list, &interner);

        assert_eq!(cursor.advance().kind, TokenKind::Pass);
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_peek_bounded() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::Pass, TokenKind::Newline, TokenKind::Eof]);
        let cursor = Cursor::new(&list, &interner);

        assert_eq!(cursor.peek_kind(1), TokenKind::Newline);
        let err = cursor.peek(3).err();
        assert_eq!(err.map(|e| e.kind), Some(ParseErrorKind::EndOfInput));
    }

    #[test]
    fn test_soft_keywords_are_names() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::SoftKeyword(SoftKeyword::Match), TokenKind::Eof]);
        let mut cursor = Cursor::new(&list, &interner);

        assert!(cursor.check_soft(SoftKeyword::Match));
        assert_eq!(cursor.soft_keyword_to_name(), Some(interner.intern("match")));
        let name = cursor.expect_ident().ok();
        assert_eq!(name.map(|n| interner.lookup(n)), Some("match"));
    }

    #[test]
    fn test_missing_eof_is_synthesized() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::Pass]);
        let mut cursor = Cursor::new(&list, &interner);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert!(cursor.check(&TokenKind::Eof));
    }

    #[test]
    fn test_expect_reports_found_token() {
        let interner = StringInterner::new();
        let list = tokens(&[TokenKind::Comma, TokenKind::Eof]);
        let mut cursor = Cursor::new(&list, &interner);
        let err = cursor.expect(&TokenKind::Colon).err();
        assert_eq!(
            err.map(|e| e.message),
            Some("expected `:`, found `,`".to_string())
        );
    }
}
