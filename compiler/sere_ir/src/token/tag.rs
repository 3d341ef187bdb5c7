//! Compact discriminant tag for `TokenKind`.

/// Compact discriminant tag for `TokenKind`.
///
/// All values fit in 7 bits so a `u128` bitset can hold any set of kinds.
/// Categories are laid out contiguously:
///
/// | Range  | Category             |
/// |--------|----------------------|
/// | 0-5    | Names and literals   |
/// | 6-40   | Keywords             |
/// | 41-55  | Punctuation          |
/// | 56-74  | Operators            |
/// | 75-87  | Augmented assignment |
/// | 88-92  | Structural           |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    // === Names and literals ===
    Ident = 0,
    SoftKeyword,
    Int,
    Float,
    Imaginary,
    String,

    // === Keywords ===
    KwFalse,
    KwNone,
    KwTrue,
    KwAnd,
    KwAs,
    KwAssert,
    KwAsync,
    KwAwait,
    KwBreak,
    KwClass,
    KwContinue,
    KwDef,
    KwDel,
    KwElif,
    KwElse,
    KwExcept,
    KwFinally,
    KwFor,
    KwFrom,
    KwGlobal,
    KwIf,
    KwImport,
    KwIn,
    KwIs,
    KwLambda,
    KwNonlocal,
    KwNot,
    KwOr,
    KwPass,
    KwRaise,
    KwReturn,
    KwTry,
    KwWhile,
    KwWith,
    KwYield,

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
    Error,
}

impl TokenTag {
    /// Largest tag value. Must stay below 128.
    pub const MAX: u8 = TokenTag::Error as u8;

    /// Tag for a raw discriminant index, if one exists.
    pub const fn from_index(index: u8) -> Option<TokenTag> {
        match index {
            0 => Some(TokenTag::Ident),
            1 => Some(TokenTag::SoftKeyword),
            2 => Some(TokenTag::Int),
            3 => Some(TokenTag::Float),
            4 => Some(TokenTag::Imaginary),
            5 => Some(TokenTag::String),
            6 => Some(TokenTag::KwFalse),
            7 => Some(TokenTag::KwNone),
            8 => Some(TokenTag::KwTrue),
            9 => Some(TokenTag::KwAnd),
            10 => Some(TokenTag::KwAs),
            11 => Some(TokenTag::KwAssert),
            12 => Some(TokenTag::KwAsync),
            13 => Some(TokenTag::KwAwait),
            14 => Some(TokenTag::KwBreak),
            15 => Some(TokenTag::KwClass),
            16 => Some(TokenTag::KwContinue),
            17 => Some(TokenTag::KwDef),
            18 => Some(TokenTag::KwDel),
            19 => Some(TokenTag::KwElif),
            20 => Some(TokenTag::KwElse),
            21 => Some(TokenTag::KwExcept),
            22 => Some(TokenTag::KwFinally),
            23 => Some(TokenTag::KwFor),
            24 => Some(TokenTag::KwFrom),
            25 => Some(TokenTag::KwGlobal),
            26 => Some(TokenTag::KwIf),
            27 => Some(TokenTag::KwImport),
            28 => Some(TokenTag::KwIn),
            29 => Some(TokenTag::KwIs),
            30 => Some(TokenTag::KwLambda),
            31 => Some(TokenTag::KwNonlocal),
            32 => Some(TokenTag::KwNot),
            33 => Some(TokenTag::KwOr),
            34 => Some(TokenTag::KwPass),
            35 => Some(TokenTag::KwRaise),
            36 => Some(TokenTag::KwReturn),
            37 => Some(TokenTag::KwTry),
            38 => Some(TokenTag::KwWhile),
            39 => Some(TokenTag::KwWith),
            40 => Some(TokenTag::KwYield),
            41 => Some(TokenTag::LParen),
            42 => Some(TokenTag::RParen),
            43 => Some(TokenTag::LBracket),
            44 => Some(TokenTag::RBracket),
            45 => Some(TokenTag::LBrace),
            46 => Some(TokenTag::RBrace),
            47 => Some(TokenTag::Colon),
            48 => Some(TokenTag::Comma),
            49 => Some(TokenTag::Semicolon),
            50 => Some(TokenTag::Dot),
            51 => Some(TokenTag::Ellipsis),
            52 => Some(TokenTag::Arrow),
            53 => Some(TokenTag::At),
            54 => Some(TokenTag::Eq),
            55 => Some(TokenTag::ColonEq),
            56 => Some(TokenTag::Plus),
            57 => Some(TokenTag::Minus),
            58 => Some(TokenTag::Star),
            59 => Some(TokenTag::DoubleStar),
            60 => Some(TokenTag::Slash),
            61 => Some(TokenTag::DoubleSlash),
            62 => Some(TokenTag::Percent),
            63 => Some(TokenTag::Pipe),
            64 => Some(TokenTag::Amp),
            65 => Some(TokenTag::Caret),
            66 => Some(TokenTag::Tilde),
            67 => Some(TokenTag::Shl),
            68 => Some(TokenTag::Shr),
            69 => Some(TokenTag::Lt),
            70 => Some(TokenTag::Gt),
            71 => Some(TokenTag::LtEq),
            72 => Some(TokenTag::GtEq),
            73 => Some(TokenTag::EqEq),
            74 => Some(TokenTag::NotEq),
            75 => Some(TokenTag::PlusEq),
            76 => Some(TokenTag::MinusEq),
            77 => Some(TokenTag::StarEq),
            78 => Some(TokenTag::AtEq),
            79 => Some(TokenTag::SlashEq),
            80 => Some(TokenTag::DoubleSlashEq),
            81 => Some(TokenTag::PercentEq),
            82 => Some(TokenTag::AmpEq),
            83 => Some(TokenTag::PipeEq),
            84 => Some(TokenTag::CaretEq),
            85 => Some(TokenTag::ShlEq),
            86 => Some(TokenTag::ShrEq),
            87 => Some(TokenTag::DoubleStarEq),
            88 => Some(TokenTag::Newline),
            89 => Some(TokenTag::Indent),
            90 => Some(TokenTag::Dedent),
            91 => Some(TokenTag::Eof),
            92 => Some(TokenTag::Error),
            _ => None,
        }
    }

    /// Human-readable name used when listing expected tokens.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenTag::Ident => "identifier",
            TokenTag::SoftKeyword => "soft keyword",
            TokenTag::Int => "integer",
            TokenTag::Float => "float",
            TokenTag::Imaginary => "imaginary number",
            TokenTag::String => "string",
            TokenTag::KwFalse => "False",
            TokenTag::KwNone => "None",
            TokenTag::KwTrue => "True",
            TokenTag::KwAnd => "and",
            TokenTag::KwAs => "as",
            TokenTag::KwAssert => "assert",
            TokenTag::KwAsync => "async",
            TokenTag::KwAwait => "await",
            TokenTag::KwBreak => "break",
            TokenTag::KwClass => "class",
            TokenTag::KwContinue => "continue",
            TokenTag::KwDef => "def",
            TokenTag::KwDel => "del",
            TokenTag::KwElif => "elif",
            TokenTag::KwElse => "else",
            TokenTag::KwExcept => "except",
            TokenTag::KwFinally => "finally",
            TokenTag::KwFor => "for",
            TokenTag::KwFrom => "from",
            TokenTag::KwGlobal => "global",
            TokenTag::KwIf => "if",
            TokenTag::KwImport => "import",
            TokenTag::KwIn => "in",
            TokenTag::KwIs => "is",
            TokenTag::KwLambda => "lambda",
            TokenTag::KwNonlocal => "nonlocal",
            TokenTag::KwNot => "not",
            TokenTag::KwOr => "or",
            TokenTag::KwPass => "pass",
            TokenTag::KwRaise => "raise",
            TokenTag::KwReturn => "return",
            TokenTag::KwTry => "try",
            TokenTag::KwWhile => "while",
            TokenTag::KwWith => "with",
            TokenTag::KwYield => "yield",
            TokenTag::LParen => "(",
            TokenTag::RParen => ")",
            TokenTag::LBracket => "[",
            TokenTag::RBracket => "]",
            TokenTag::LBrace => "{",
            TokenTag::RBrace => "}",
            TokenTag::Colon => ":",
            TokenTag::Comma => ",",
            TokenTag::Semicolon => ";",
            TokenTag::Dot => ".",
            TokenTag::Ellipsis => "...",
            TokenTag::Arrow => "->",
            TokenTag::At => "@",
            TokenTag::Eq => "=",
            TokenTag::ColonEq => ":=",
            TokenTag::Plus => "+",
            TokenTag::Minus => "-",
            TokenTag::Star => "*",
            TokenTag::DoubleStar => "**",
            TokenTag::Slash => "/",
            TokenTag::DoubleSlash => "//",
            TokenTag::Percent => "%",
            TokenTag::Pipe => "|",
            TokenTag::Amp => "&",
            TokenTag::Caret => "^",
            TokenTag::Tilde => "~",
            TokenTag::Shl => "<<",
            TokenTag::Shr => ">>",
            TokenTag::Lt => "<",
            TokenTag::Gt => ">",
            TokenTag::LtEq => "<=",
            TokenTag::GtEq => ">=",
            TokenTag::EqEq => "==",
            TokenTag::NotEq => "!=",
            TokenTag::PlusEq => "+=",
            TokenTag::MinusEq => "-=",
            TokenTag::StarEq => "*=",
            TokenTag::AtEq => "@=",
            TokenTag::SlashEq => "/=",
            TokenTag::DoubleSlashEq => "//=",
            TokenTag::PercentEq => "%=",
            TokenTag::AmpEq => "&=",
            TokenTag::PipeEq => "|=",
            TokenTag::CaretEq => "^=",
            TokenTag::ShlEq => "<<=",
            TokenTag::ShrEq => ">>=",
            TokenTag::DoubleStarEq => "**=",
            TokenTag::Newline => "newline",
            TokenTag::Indent => "indent",
            TokenTag::Dedent => "dedent",
            TokenTag::Eof => "end of file",
            TokenTag::Error => "invalid token",
        }
    }
}
