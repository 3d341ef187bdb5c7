//! Error recovery for the parser.
//!
//! Provides token sets and statement-level resynchronization. After a
//! statement fails, tokens are discarded up to the end of the logical line
//! (and the indented block hanging off it, if any) so that one mistake
//! produces one diagnostic.

use sere_ir::{Name, SoftKeyword, Span, TokenKind, TokenTag};
use tracing::debug;

use crate::cursor::Cursor;
use crate::Parser;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u128 corresponds to a `TokenKind` discriminant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// In-place union, used when accumulating alternatives.
    #[inline]
    pub fn union_with(&mut self, other: &Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the tags in this set, lowest discriminant first.
    pub fn iter(&self) -> impl Iterator<Item = TokenTag> + '_ {
        (0..=TokenTag::MAX)
            .filter(|index| self.0 & (1u128 << index) != 0)
            .filter_map(TokenTag::from_index)
    }

    /// Render as "`a`, `b` or `c`" for diagnostics.
    pub fn format_expected(&self) -> String {
        let names: Vec<String> = self
            .iter()
            .map(|tag| match tag {
                TokenTag::Ident | TokenTag::Int | TokenTag::Float | TokenTag::Imaginary
                | TokenTag::String | TokenTag::SoftKeyword => tag.display_name().to_string(),
                _ => format!("`{}`", tag.display_name()),
            })
            .collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [only] => only.clone(),
            [init @ .., last] => format!("{} or {last}", init.join(", ")),
        }
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that can begin an expression operand.
pub const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident(Name::EMPTY))
    .with(TokenKind::SoftKeyword(SoftKeyword::Match))
    .with(TokenKind::Int(Name::EMPTY))
    .with(TokenKind::Float(Name::EMPTY))
    .with(TokenKind::Imaginary(Name::EMPTY))
    .with(TokenKind::String(Name::EMPTY))
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::None)
    .with(TokenKind::Ellipsis)
    .with(TokenKind::Lambda)
    .with(TokenKind::Not)
    .with(TokenKind::Await)
    .with(TokenKind::LParen)
    .with(TokenKind::LBracket)
    .with(TokenKind::LBrace)
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(TokenKind::Tilde);

/// Tokens that end a simple statement.
pub const STMT_END: TokenSet = TokenSet::new()
    .with(TokenKind::Newline)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Eof);

/// Layout tokens that delimit logical lines and blocks.
pub const LAYOUT: TokenSet = TokenSet::new()
    .with(TokenKind::Newline)
    .with(TokenKind::Indent)
    .with(TokenKind::Dedent)
    .with(TokenKind::Eof);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(&cursor.current_kind()) {
            return true;
        }
        cursor.advance();
    }
    recovery.contains(&TokenKind::Eof)
}

impl Parser<'_> {
    /// Skip to the next statement at the current block level.
    ///
    /// Consumes the rest of the logical line including its `Newline`, plus an
    /// indented block directly following it. Stops before a `Dedent` that
    /// closes the current block, or at `Eof`. Returns the span of the
    /// discarded tokens, if any.
    pub(crate) fn synchronize_statement(&mut self) -> Option<Span> {
        let start_pos = self.cursor.position();
        let start = self.cursor.current_span();
        let mut depth = 0usize;

        loop {
            synchronize(&mut self.cursor, LAYOUT);
            match self.cursor.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Dedent if depth == 0 => break,
                TokenKind::Dedent => {
                    depth -= 1;
                    self.cursor.advance();
                    if depth == 0 {
                        break;
                    }
                }
                TokenKind::Indent => {
                    depth += 1;
                    self.cursor.advance();
                }
                TokenKind::Newline if depth == 0 => {
                    self.cursor.advance();
                    if !self.cursor.check(&TokenKind::Indent) {
                        break;
                    }
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }

        if self.cursor.position() == start_pos {
            return None;
        }
        let skipped = start.merge(self.cursor.previous_span());
        debug!(?skipped, "skipped tokens to resynchronize");
        Some(skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sere_ir::{StringInterner, Token, TokenList};

    fn list(kinds: &[TokenKind]) -> TokenList {
        let mut tokens = TokenList::new();
        for (i, kind) in kinds.iter().enumerate() {
            let at = u32::try_from(i).unwrap_or(0);
            tokens.push(Token::new(*kind, Span::new(at, at + 1)));
        }
        tokens
    }

    #[test]
    fn test_token_set_membership() {
        let set = TokenSet::new().with(TokenKind::Comma).with(TokenKind::RParen);
        assert!(set.contains(&TokenKind::Comma));
        assert!(!set.contains(&TokenKind::Colon));
        assert_eq!(set.count(), 2);
        assert!(EXPR_START.contains(&TokenKind::SoftKeyword(SoftKeyword::Case)));
        assert!(EXPR_START.contains(&TokenKind::Ident(Name::from_raw(7))));
    }

    #[test]
    fn test_format_expected() {
        let set = TokenSet::new()
            .with(TokenKind::Ident(Name::EMPTY))
            .with(TokenKind::LParen)
            .with(TokenKind::LBracket);
        assert_eq!(set.format_expected(), "identifier, `(` or `[`");
        assert_eq!(TokenSet::single(TokenKind::Colon).format_expected(), "`:`");
    }

    #[test]
    fn test_synchronize_stops_at_recovery_token() {
        let interner = StringInterner::new();
        let tokens = list(&[
            TokenKind::Eq,
            TokenKind::Eq,
            TokenKind::Newline,
            TokenKind::Pass,
            TokenKind::Eof,
        ]);
        let mut cursor = Cursor::new(&tokens, &interner);
        assert!(synchronize(&mut cursor, TokenSet::single(TokenKind::Newline)));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_synchronize_statement_skips_line_and_block() {
        let interner = StringInterner::new();
        // `x x :` NEWLINE INDENT `pass` NEWLINE DEDENT `pass` ...
        let tokens = list(&[
            TokenKind::Eq,
            TokenKind::Eq,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Pass,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Pass,
            TokenKind::Newline,
            TokenKind::Eof,
        ]);
        let mut parser = Parser::new(&tokens, &interner);
        let skipped = parser.synchronize_statement();
        assert_eq!(parser.cursor.current_kind(), TokenKind::Pass);
        assert_eq!(parser.cursor.position(), 8);
        assert_eq!(skipped, Some(Span::new(0, 8)));
    }

    #[test]
    fn test_synchronize_statement_stops_before_dedent() {
        let interner = StringInterner::new();
        let tokens = list(&[TokenKind::Eq, TokenKind::Dedent, TokenKind::Eof]);
        let mut parser = Parser::new(&tokens, &interner);
        parser.synchronize_statement();
        assert_eq!(parser.cursor.current_kind(), TokenKind::Dedent);
    }
}
