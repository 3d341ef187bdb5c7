//! Grammar Modules
//!
//! Each module extends `Parser` with methods for one family of productions:
//!
//! - [`expr`]: expressions, from `lambda` down to atoms
//! - [`params`]: parameter lists shared by `def` and `lambda`
//! - [`pattern`]: case patterns and their validation
//! - [`stmt`]: simple and compound statements, blocks, `match`
//!
//! Rules return owned nodes through `Result<_, ParseError>`. Errors bubble
//! up to the statement loop, which records them and resynchronizes.
//! Non-fatal problems (a `try` without handlers, duplicate pattern keys) are
//! reported through `Parser::report` and parsing carries on.

mod expr;
mod params;
mod pattern;
mod stmt;
