//! Executable match procedure for Sere `match` statements.
//!
//! A [`MatchPlan`] is compiled once from a parsed [`MatchStmt`] and can then
//! be run against any number of subjects:
//!
//! ```text
//! let plan = MatchPlan::compile(&stmt, &interner)?;
//! if let Some(success) = plan.execute(&subject, &mut env)? {
//!     run(&stmt.cases[success.case_index].body, success.bindings);
//! }
//! ```
//!
//! Each case is tried in order: the pattern is matched structurally while
//! captures are collected, then the guard is evaluated through the
//! [`MatchEnv`]. A false guard falls through to the next case.
//!
//! # Matching rules
//!
//! - Literal numbers and strings compare by equality; `None`, `True` and
//!   `False` by identity.
//! - Sequence patterns match lists and tuples, never strings or bytes.
//! - Mapping patterns ignore extra keys unless `**rest` collects them.
//! - Class patterns ask the environment for instance checks and positional
//!   attribute names. `bool`, `bytes`, `dict`, `float`, `int`, `list`, `str`
//!   and `tuple` match their single positional sub-pattern against the
//!   subject itself.
//!
//! [`MatchStmt`]: sere_ir::ast::MatchStmt

mod env;
mod error;
mod exec;
mod plan;
mod value;

#[cfg(test)]
mod tests;

pub use env::{Bindings, MatchEnv};
pub use error::{CompileError, MatchError};
pub use exec::MatchSuccess;
pub use plan::{BuiltinClass, MatchPlan};
pub use value::{Object, Value};
