//! Raw token to `TokenKind` conversion.

use sere_ir::{SoftKeyword, StringInterner, TokenKind};

use crate::raw_token::RawToken;

/// Convert a raw token to a `TokenKind`, interning identifier and literal text.
///
/// Literal tokens keep their exact source text (prefix, quotes, digit
/// separators); decoding happens downstream.
///
/// Trivia and error variants have no kind of their own and are handled by
/// the cooker before this is called; they map to `Error` here.
pub(crate) fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        // Names and literals
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::Match => TokenKind::SoftKeyword(SoftKeyword::Match),
        RawToken::Case => TokenKind::SoftKeyword(SoftKeyword::Case),
        RawToken::Underscore => TokenKind::SoftKeyword(SoftKeyword::Underscore),
        RawToken::Int => TokenKind::Int(interner.intern(slice)),
        RawToken::Float => TokenKind::Float(interner.intern(slice)),
        RawToken::Imaginary => TokenKind::Imaginary(interner.intern(slice)),
        RawToken::String | RawToken::TripleString(true) => TokenKind::String(interner.intern(slice)),

        // Keywords
        RawToken::False => TokenKind::False,
        RawToken::None => TokenKind::None,
        RawToken::True => TokenKind::True,
        RawToken::And => TokenKind::And,
        RawToken::As => TokenKind::As,
        RawToken::Assert => TokenKind::Assert,
        RawToken::Async => TokenKind::Async,
        RawToken::Await => TokenKind::Await,
        RawToken::Break => TokenKind::Break,
        RawToken::Class => TokenKind::Class,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Def => TokenKind::Def,
        RawToken::Del => TokenKind::Del,
        RawToken::Elif => TokenKind::Elif,
        RawToken::Else => TokenKind::Else,
        RawToken::Except => TokenKind::Except,
        RawToken::Finally => TokenKind::Finally,
        RawToken::For => TokenKind::For,
        RawToken::From => TokenKind::From,
        RawToken::Global => TokenKind::Global,
        RawToken::If => TokenKind::If,
        RawToken::Import => TokenKind::Import,
        RawToken::In => TokenKind::In,
        RawToken::Is => TokenKind::Is,
        RawToken::Lambda => TokenKind::Lambda,
        RawToken::Nonlocal => TokenKind::Nonlocal,
        RawToken::Not => TokenKind::Not,
        RawToken::Or => TokenKind::Or,
        RawToken::Pass => TokenKind::Pass,
        RawToken::Raise => TokenKind::Raise,
        RawToken::Return => TokenKind::Return,
        RawToken::Try => TokenKind::Try,
        RawToken::While => TokenKind::While,
        RawToken::With => TokenKind::With,
        RawToken::Yield => TokenKind::Yield,

        // Punctuation
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::At => TokenKind::At,
        RawToken::Eq => TokenKind::Eq,
        RawToken::ColonEq => TokenKind::ColonEq,

        // Operators
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::DoubleStar => TokenKind::DoubleStar,
        RawToken::Slash => TokenKind::Slash,
        RawToken::DoubleSlash => TokenKind::DoubleSlash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,

        // Augmented assignment
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::AtEq => TokenKind::AtEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::DoubleSlashEq => TokenKind::DoubleSlashEq,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::AmpEq => TokenKind::AmpEq,
        RawToken::PipeEq => TokenKind::PipeEq,
        RawToken::CaretEq => TokenKind::CaretEq,
        RawToken::ShlEq => TokenKind::ShlEq,
        RawToken::ShrEq => TokenKind::ShrEq,
        RawToken::DoubleStarEq => TokenKind::DoubleStarEq,

        RawToken::Newline => TokenKind::Newline,
        RawToken::Comment
        | RawToken::LineContinuation
        | RawToken::TripleString(false)
        | RawToken::UnterminatedString => TokenKind::Error,
    }
}
