//! Match statements and case patterns.

use crate::{Name, Span};

use super::{Expr, Stmt};

/// `match subject:` followed by one or more case blocks.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchStmt {
    pub subject: Expr,
    pub cases: Vec<MatchCase>,
}

/// `case pattern [if guard]: body`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchCase {
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    #[inline]
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }
}

/// A dotted name such as `Color.RED` or `os.path`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DottedName {
    pub parts: Vec<Name>,
    pub span: Span,
}

impl DottedName {
    pub fn new(parts: Vec<Name>, span: Span) -> Self {
        DottedName { parts, span }
    }

    /// Whether this name has more than one component.
    pub fn is_qualified(&self) -> bool {
        self.parts.len() > 1
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternKind {
    /// Bare name: binds the subject.
    Capture(Name),
    /// `_`: matches anything, binds nothing.
    Wildcard,
    /// Number (optionally signed or complex), string, `None`, `True`, `False`.
    Literal(Box<Expr>),
    /// Dotted name compared by equality.
    Value(DottedName),
    /// `(pattern)`
    Group(Box<Pattern>),
    /// `[p, *rest, q]` or `(p, q)`; at most one `Star` element.
    Sequence(Vec<Pattern>),
    /// `{key: pattern, **rest}`
    Mapping {
        entries: Vec<MappingEntry>,
        rest: Option<Name>,
    },
    /// `Cls(p1, p2, name=p3)`
    Class {
        cls: DottedName,
        positional: Vec<Pattern>,
        keywords: Vec<KeywordPattern>,
    },
    /// `p1 | p2 | p3`
    Or(Vec<Pattern>),
    /// `pattern as name`
    As { pattern: Box<Pattern>, name: Name },
    /// `*name`, or `*_` when `None`.
    Star(Option<Name>),
}

/// `key: pattern` inside a mapping pattern. The key is a literal or value
/// pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappingEntry {
    pub key: Pattern,
    pub pattern: Pattern,
}

/// `name=pattern` inside a class pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordPattern {
    pub name: Name,
    pub pattern: Pattern,
    pub span: Span,
}
