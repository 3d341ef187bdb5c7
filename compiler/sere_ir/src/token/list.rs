use std::ops::Index;

use super::{Token, TokenTag};

/// Ordered token stream handed from the tokenizer to the parser.
///
/// Keeps a parallel array of discriminant tags so the parser can test kinds
/// without touching payloads. A well-formed list ends with `Eof`.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `tags[i] == tokens[i].kind.discriminant_index()` for all `i`.
    tags: Vec<u8>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
        }
    }

    /// Create from a Vec of tokens.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let tags = tokens.iter().map(|t| t.kind.discriminant_index()).collect();
        TokenList { tokens, tags }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tags.push(token.kind.discriminant_index());
        self.tokens.push(token);
    }

    /// Replace the last token, keeping the tag array in sync.
    pub fn replace_last(&mut self, token: Token) {
        if let (Some(last), Some(tag)) = (self.tokens.last_mut(), self.tags.last_mut()) {
            *tag = token.kind.discriminant_index();
            *last = token;
        } else {
            self.push(token);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Tag of the token at `index`, or `Eof` past the end.
    #[inline]
    pub fn tag_at(&self, index: usize) -> u8 {
        self.tags
            .get(index)
            .copied()
            .unwrap_or(TokenTag::Eof as u8)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Consume into the underlying Vec.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
