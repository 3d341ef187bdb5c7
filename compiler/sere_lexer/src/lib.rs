//! Reference tokenizer for Sere.
//!
//! Produces the `TokenList` the parser consumes: significant tokens plus
//! `Newline`, `Indent`, `Dedent` and a final `Eof`. Literal tokens carry their
//! exact source text, interned.

mod convert;
mod cooker;
mod lex_error;
mod raw_token;

pub use lex_error::{LexError, LexErrorKind};

use sere_ir::{StringInterner, TokenList};

use cooker::TokenCooker;

/// Result of tokenizing a source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`, discarding lexer errors.
///
/// Malformed input still yields a well-formed list: offending text becomes
/// `Error` tokens and the list always ends with `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    lex_with_errors(source, interner).tokens
}

/// Lex source code, keeping the errors found along the way.
pub fn lex_with_errors(source: &str, interner: &StringInterner) -> LexOutput {
    let (tokens, errors) = TokenCooker::new(source, interner).run();
    LexOutput { tokens, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sere_ir::{SoftKeyword, Span, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let interner = StringInterner::new();
        lex(source, &interner).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_simple_statement() {
        let interner = StringInterner::new();
        let tokens = lex("x = 42", &interner);

        assert_eq!(tokens.len(), 5); // x, =, 42, newline, EOF
        assert_eq!(tokens[0].kind, TokenKind::Ident(interner.intern("x")));
        assert_eq!(tokens[1].kind, TokenKind::Eq);
        assert_eq!(tokens[2].kind, TokenKind::Int(interner.intern("42")));
        assert_eq!(tokens[3].kind, TokenKind::Newline);
        assert_eq!(tokens[4].kind, TokenKind::Eof);
        assert_eq!(tokens[4].span, Span::point(6));
    }

    #[test]
    fn test_lex_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds("\n\n# only a comment\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_lex_indent_and_dedent() {
        let interner = StringInterner::new();
        let x = TokenKind::Ident(interner.intern("x"));
        let tokens: Vec<_> = lex("if x:\n    pass\nx\n", &interner)
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            tokens,
            vec![
                TokenKind::If,
                x,
                TokenKind::Colon,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Pass,
                TokenKind::Newline,
                TokenKind::Dedent,
                x,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_dedents_closed_at_eof() {
        let tokens = kinds("while x:\n  if y:\n    pass");
        let tail: Vec<_> = tokens[tokens.len() - 4..].to_vec();
        assert_eq!(
            tail,
            vec![
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::Dedent,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_lex_blank_and_comment_lines_ignored() {
        assert_eq!(
            kinds("if x:\n\n    # note\n    pass\n"),
            kinds("if x:\n    pass\n")
        );
    }

    #[test]
    fn test_lex_newlines_inside_brackets_joined() {
        let tokens = kinds("f(a,\n  b)\n");
        assert!(!tokens.contains(&TokenKind::Indent));
        assert_eq!(
            tokens
                .iter()
                .filter(|k| matches!(k, TokenKind::Newline))
                .count(),
            1
        );
    }

    #[test]
    fn test_lex_unclosed_bracket_ends_at_eof() {
        let interner = StringInterner::new();
        let tokens: Vec<_> = lex("if x:\n    f(a,\n", &interner)
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            tokens[tokens.len() - 4..].to_vec(),
            vec![
                TokenKind::LParen,
                TokenKind::Ident(interner.intern("a")),
                TokenKind::Comma,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_line_continuation() {
        assert_eq!(kinds("x = 1 + \\\n    2\n"), kinds("x = 1 + 2\n"));
    }

    #[test]
    fn test_lex_adjacent_strings_merge() {
        let interner = StringInterner::new();
        let tokens = lex("x = 'a' \"b\"\n", &interner);
        assert_eq!(tokens.len(), 5);
        let TokenKind::String(name) = tokens[2].kind else {
            panic!("expected string token, got {:?}", tokens[2].kind);
        };
        assert_eq!(interner.lookup(name), "'a' \"b\"");
        assert_eq!(tokens[2].span, Span::new(4, 11));
    }

    #[test]
    fn test_lex_soft_keywords() {
        assert_eq!(
            kinds("match _ case"),
            vec![
                TokenKind::SoftKeyword(SoftKeyword::Match),
                TokenKind::SoftKeyword(SoftKeyword::Underscore),
                TokenKind::SoftKeyword(SoftKeyword::Case),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_literal_text_preserved() {
        let interner = StringInterner::new();
        let tokens = lex("1_000 0x_ff 2.5e3 3j r'\\d'", &interner);
        let texts: Vec<_> = tokens
            .iter()
            .filter_map(|t| match t.kind {
                TokenKind::Int(n)
                | TokenKind::Float(n)
                | TokenKind::Imaginary(n)
                | TokenKind::String(n) => Some(interner.lookup(n)),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["1_000", "0x_ff", "2.5e3", "3j", "r'\\d'"]);
    }

    #[test]
    fn test_lex_errors_reported() {
        let interner = StringInterner::new();
        let output = lex_with_errors("x = $\ny = 'open\n", &interner);
        let errors: Vec<_> = output.errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            errors,
            vec![
                LexErrorKind::InvalidCharacter('$'),
                LexErrorKind::UnterminatedString
            ]
        );
        assert!(output.has_errors());
        assert!(matches!(
            output.tokens.last().map(|t| t.kind),
            Some(TokenKind::Eof)
        ));
    }

    #[test]
    fn test_lex_inconsistent_dedent() {
        let interner = StringInterner::new();
        let output = lex_with_errors("if x:\n    a\n  b\n", &interner);
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].kind, LexErrorKind::InconsistentDedent);
    }
}
