//! Raw token definitions for the logos scanner.
//!
//! `RawToken` is the scanner output before indentation is resolved and
//! before identifiers and literal text are interned.

use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\f\r]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*")]
    Comment,

    #[token("\n")]
    Newline,

    #[regex(r"\\[ \t\r]*\n")]
    LineContinuation,

    // Keywords
    #[token("False")]
    False,
    #[token("None")]
    None,
    #[token("True")]
    True,
    #[token("and")]
    And,
    #[token("as")]
    As,
    #[token("assert")]
    Assert,
    #[token("async")]
    Async,
    #[token("await")]
    Await,
    #[token("break")]
    Break,
    #[token("class")]
    Class,
    #[token("continue")]
    Continue,
    #[token("def")]
    Def,
    #[token("del")]
    Del,
    #[token("elif")]
    Elif,
    #[token("else")]
    Else,
    #[token("except")]
    Except,
    #[token("finally")]
    Finally,
    #[token("for")]
    For,
    #[token("from")]
    From,
    #[token("global")]
    Global,
    #[token("if")]
    If,
    #[token("import")]
    Import,
    #[token("in")]
    In,
    #[token("is")]
    Is,
    #[token("lambda")]
    Lambda,
    #[token("nonlocal")]
    Nonlocal,
    #[token("not")]
    Not,
    #[token("or")]
    Or,
    #[token("pass")]
    Pass,
    #[token("raise")]
    Raise,
    #[token("return")]
    Return,
    #[token("try")]
    Try,
    #[token("while")]
    While,
    #[token("with")]
    With,
    #[token("yield")]
    Yield,

    // Soft keywords
    #[token("match")]
    Match,
    #[token("case")]
    Case,
    #[token("_", priority = 3)]
    Underscore,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("->")]
    Arrow,
    #[token("@")]
    At,
    #[token("=")]
    Eq,
    #[token(":=")]
    ColonEq,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    DoubleStar,
    #[token("/")]
    Slash,
    #[token("//")]
    DoubleSlash,
    #[token("%")]
    Percent,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,

    // Augmented assignment
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("@=")]
    AtEq,
    #[token("/=")]
    SlashEq,
    #[token("//=")]
    DoubleSlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token("**=")]
    DoubleStarEq,

    // Numbers
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[oO][0-7_]+")]
    #[regex(r"0[bB][01_]+")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"[0-9][0-9_]*[jJ]")]
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[jJ]")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[jJ]")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[jJ]")]
    Imaginary,

    // Strings. Prefixes (`r`, `b`, `u`, `f` and pairs) are kept in the slice.
    #[regex(r#"[rRbBuUfF]?[rRbBuUfF]?"([^"\\\n]|\\.)*""#)]
    #[regex(r#"[rRbBuUfF]?[rRbBuUfF]?'([^'\\\n]|\\.)*'"#)]
    String,

    /// Triple-quoted string; the payload is false when the closing quotes
    /// are missing and the token runs to the end of input.
    #[regex(r#"[rRbBuUfF]?[rRbBuUfF]?""""#, triple_quoted)]
    #[regex(r"[rRbBuUfF]?[rRbBuUfF]?'''", triple_quoted)]
    TripleString(bool),

    /// Single-line string missing its closing quote.
    #[regex(r#"[rRbBuUfF]?[rRbBuUfF]?"([^"\\\n]|\\.)*"#)]
    #[regex(r#"[rRbBuUfF]?[rRbBuUfF]?'([^'\\\n]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Scan the body of a triple-quoted string up to its closing delimiter.
///
/// Always produces a token: an unterminated string consumes the rest of the
/// input and reports `false`.
fn triple_quoted(lex: &mut logos::Lexer<'_, RawToken>) -> Option<bool> {
    let quote = lex.slice().as_bytes().last().copied()?;
    let rest = lex.remainder().as_bytes();
    let closing = [quote; 3];
    let mut i = 0;
    while i < rest.len() {
        if rest[i] == b'\\' {
            i += 2;
        } else if rest[i..].starts_with(&closing) {
            lex.bump(i + 3);
            return Some(true);
        } else {
            i += 1;
        }
    }
    lex.bump(rest.len());
    Some(false)
}
