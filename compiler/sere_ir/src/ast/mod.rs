//! Abstract syntax tree.
//!
//! Nodes own their children (`Box`/`Vec`) and carry the span of the source
//! they were built from. Trees are built once by the parser and never
//! mutated afterwards.

mod expr;
mod operators;
mod pattern;
mod stmt;

pub use expr::{
    Arg, CompClause, Comprehension, ComprehensionKind, DictItem, Expr, ExprKind, Literal,
};
pub use operators::{BinaryOp, BoolOp, CmpOp, UnaryOp};
pub use pattern::{
    DottedName, KeywordPattern, MappingEntry, MatchCase, MatchStmt, Pattern, PatternKind,
};
pub use stmt::{
    ClassDef, ExceptHandler, FunctionDef, ImportAlias, ImportNames, Stmt, StmtKind, WithItem,
};

use crate::{Name, Span};

/// A parsed source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Formal parameters of a function or lambda.
///
/// Slots appear in source order: positional (with or without default),
/// `*args` (or a bare `*`), keyword-only, then `**kwargs`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    pub args: Vec<Param>,
    pub vararg: Option<Param>,
    pub kwonly: Vec<Param>,
    pub kwarg: Option<Param>,
    pub span: Span,
}

impl Parameters {
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
            && self.vararg.is_none()
            && self.kwonly.is_empty()
            && self.kwarg.is_none()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: Name,
    pub annotation: Option<Box<Expr>>,
    pub default: Option<Box<Expr>>,
    pub span: Span,
}
