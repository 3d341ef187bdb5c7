//! Shared data model of the Sere front-end.
//!
//! - [`Span`]: byte-offset source locations
//! - [`Name`] / [`StringInterner`]: interned identifiers and literal text
//! - [`Token`] / [`TokenList`]: the token stream consumed by the parser
//! - [`ast`]: the syntax tree produced by the parser
//! - [`literal`]: decoding number and string literal text

pub mod ast;
mod interner;
pub mod literal;
mod name;
mod span;
mod token;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{SoftKeyword, Token, TokenKind, TokenList, TokenTag};
