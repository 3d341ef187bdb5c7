//! Canonical printer for the Sere AST.
//!
//! Prints a syntax tree back to source text in one normalized layout:
//!
//! - four spaces per indentation level, one statement per line
//! - parentheses only where precedence requires them; tuples, generator
//!   expressions and `:=` are always parenthesized
//! - `elif` for an `else` block that holds a single `if`
//!
//! Parsing the output yields the same tree, and printing that tree again
//! yields the same text.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - `precedence`: binding strength of expression forms
//! - `formatter`: expression, pattern and statement rendering

pub mod emitter;
mod formatter;
mod precedence;

pub use emitter::{Emitter, StringEmitter};
pub use formatter::Formatter;

use sere_ir::ast::{Expr, Module, Pattern, Stmt};
use sere_ir::StringInterner;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Format a module. Every statement line ends with a newline.
pub fn format_module(module: &Module, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(interner, StringEmitter::new());
    formatter.module(module);
    formatter.into_emitter().output()
}

/// Format one statement at indentation level zero.
pub fn format_stmt(stmt: &Stmt, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(interner, StringEmitter::new());
    formatter.stmt(stmt);
    formatter.into_emitter().output()
}

/// Format an expression on one line.
pub fn format_expr(expr: &Expr, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(interner, StringEmitter::new());
    formatter.expr(expr);
    formatter.into_emitter().output()
}

/// Format a case pattern.
pub fn format_pattern(pattern: &Pattern, interner: &StringInterner) -> String {
    let mut formatter = Formatter::new(interner, StringEmitter::new());
    formatter.pattern(pattern);
    formatter.into_emitter().output()
}
