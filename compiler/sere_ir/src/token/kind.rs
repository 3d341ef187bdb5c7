use crate::Name;

use super::TokenTag;

/// Soft keywords: identifiers that act as keywords only in specific positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoftKeyword {
    /// `match`, which starts a match statement at statement start.
    Match,
    /// `case`, which starts a case block inside a match statement.
    Case,
    /// `_`, the wildcard inside patterns.
    Underscore,
}

impl SoftKeyword {
    /// The source spelling of this soft keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            SoftKeyword::Match => "match",
            SoftKeyword::Case => "case",
            SoftKeyword::Underscore => "_",
        }
    }
}

/// Token kinds.
///
/// Literal kinds carry their interned source text; the lexer keeps spelling
/// (prefixes, quotes, underscores) so the canonical printer can re-emit it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // === Names and literals ===
    Ident(Name),
    SoftKeyword(SoftKeyword),
    Int(Name),
    Float(Name),
    Imaginary(Name),
    /// One string literal, or several adjacent ones joined by a single space.
    String(Name),

    // === Keywords ===
    False,
    None,
    True,
    And,
    As,
    Assert,
    Async,
    Await,
    Break,
    Class,
    Continue,
    Def,
    Del,
    Elif,
    Else,
    Except,
    Finally,
    For,
    From,
    Global,
    If,
    Import,
    In,
    Is,
    Lambda,
    Nonlocal,
    Not,
    Or,
    Pass,
    Raise,
    Return,
    Try,
    While,
    With,
    Yield,

    // === Punctuation ===
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Semicolon,
    Dot,
    Ellipsis,
    Arrow,
    At,
    Eq,
    ColonEq,

    // === Operators ===
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    Pipe,
    Amp,
    Caret,
    Tilde,
    Shl,
    Shr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,

    // === Augmented assignment ===
    PlusEq,
    MinusEq,
    StarEq,
    AtEq,
    SlashEq,
    DoubleSlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    DoubleStarEq,

    // === Structural ===
    Newline,
    Indent,
    Dedent,
    Eof,
    /// A span the lexer could not tokenize.
    Error,
}

impl TokenKind {
    /// Compact tag for this kind, ignoring payloads.
    pub const fn tag(&self) -> TokenTag {
        match self {
            Self::Ident(_) => TokenTag::Ident,
            Self::SoftKeyword(_) => TokenTag::SoftKeyword,
            Self::Int(_) => TokenTag::Int,
            Self::Float(_) => TokenTag::Float,
            Self::Imaginary(_) => TokenTag::Imaginary,
            Self::String(_) => TokenTag::String,

            Self::False => TokenTag::KwFalse,
            Self::None => TokenTag::KwNone,
            Self::True => TokenTag::KwTrue,
            Self::And => TokenTag::KwAnd,
            Self::As => TokenTag::KwAs,
            Self::Assert => TokenTag::KwAssert,
            Self::Async => TokenTag::KwAsync,
            Self::Await => TokenTag::KwAwait,
            Self::Break => TokenTag::KwBreak,
            Self::Class => TokenTag::KwClass,
            Self::Continue => TokenTag::KwContinue,
            Self::Def => TokenTag::KwDef,
            Self::Del => TokenTag::KwDel,
            Self::Elif => TokenTag::KwElif,
            Self::Else => TokenTag::KwElse,
            Self::Except => TokenTag::KwExcept,
            Self::Finally => TokenTag::KwFinally,
            Self::For => TokenTag::KwFor,
            Self::From => TokenTag::KwFrom,
            Self::Global => TokenTag::KwGlobal,
            Self::If => TokenTag::KwIf,
            Self::Import => TokenTag::KwImport,
            Self::In => TokenTag::KwIn,
            Self::Is => TokenTag::KwIs,
            Self::Lambda => TokenTag::KwLambda,
            Self::Nonlocal => TokenTag::KwNonlocal,
            Self::Not => TokenTag::KwNot,
            Self::Or => TokenTag::KwOr,
            Self::Pass => TokenTag::KwPass,
            Self::Raise => TokenTag::KwRaise,
            Self::Return => TokenTag::KwReturn,
            Self::Try => TokenTag::KwTry,
            Self::While => TokenTag::KwWhile,
            Self::With => TokenTag::KwWith,
            Self::Yield => TokenTag::KwYield,

            Self::LParen => TokenTag::LParen,
            Self::RParen => TokenTag::RParen,
            Self::LBracket => TokenTag::LBracket,
            Self::RBracket => TokenTag::RBracket,
            Self::LBrace => TokenTag::LBrace,
            Self::RBrace => TokenTag::RBrace,
            Self::Colon => TokenTag::Colon,
            Self::Comma => TokenTag::Comma,
            Self::Semicolon => TokenTag::Semicolon,
            Self::Dot => TokenTag::Dot,
            Self::Ellipsis => TokenTag::Ellipsis,
            Self::Arrow => TokenTag::Arrow,
            Self::At => TokenTag::At,
            Self::Eq => TokenTag::Eq,
            Self::ColonEq => TokenTag::ColonEq,

            Self::Plus => TokenTag::Plus,
            Self::Minus => TokenTag::Minus,
            Self::Star => TokenTag::Star,
            Self::DoubleStar => TokenTag::DoubleStar,
            Self::Slash => TokenTag::Slash,
            Self::DoubleSlash => TokenTag::DoubleSlash,
            Self::Percent => TokenTag::Percent,
            Self::Pipe => TokenTag::Pipe,
            Self::Amp => TokenTag::Amp,
            Self::Caret => TokenTag::Caret,
            Self::Tilde => TokenTag::Tilde,
            Self::Shl => TokenTag::Shl,
            Self::Shr => TokenTag::Shr,
            Self::Lt => TokenTag::Lt,
            Self::Gt => TokenTag::Gt,
            Self::LtEq => TokenTag::LtEq,
            Self::GtEq => TokenTag::GtEq,
            Self::EqEq => TokenTag::EqEq,
            Self::NotEq => TokenTag::NotEq,

            Self::PlusEq => TokenTag::PlusEq,
            Self::MinusEq => TokenTag::MinusEq,
            Self::StarEq => TokenTag::StarEq,
            Self::AtEq => TokenTag::AtEq,
            Self::SlashEq => TokenTag::SlashEq,
            Self::DoubleSlashEq => TokenTag::DoubleSlashEq,
            Self::PercentEq => TokenTag::PercentEq,
            Self::AmpEq => TokenTag::AmpEq,
            Self::PipeEq => TokenTag::PipeEq,
            Self::CaretEq => TokenTag::CaretEq,
            Self::ShlEq => TokenTag::ShlEq,
            Self::ShrEq => TokenTag::ShrEq,
            Self::DoubleStarEq => TokenTag::DoubleStarEq,

            Self::Newline => TokenTag::Newline,
            Self::Indent => TokenTag::Indent,
            Self::Dedent => TokenTag::Dedent,
            Self::Eof => TokenTag::Eof,
            Self::Error => TokenTag::Error,
        }
    }

    /// Discriminant index for bitset membership, always below 128.
    #[inline]
    pub const fn discriminant_index(&self) -> u8 {
        self.tag() as u8
    }

    /// Check whether two kinds are the same variant, ignoring payloads.
    #[inline]
    pub fn is_same_kind(&self, other: &TokenKind) -> bool {
        self.tag() == other.tag()
    }

    /// Whether this token is a keyword (not a soft keyword).
    pub fn is_keyword(&self) -> bool {
        let index = self.discriminant_index();
        (TokenTag::KwFalse as u8..=TokenTag::KwYield as u8).contains(&index)
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::SoftKeyword(kw) => kw.as_str(),
            _ => self.tag().display_name(),
        }
    }
}
