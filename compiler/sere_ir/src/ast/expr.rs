//! Expression nodes.

use crate::{Name, Span};

use super::operators::{BinaryOp, BoolOp, CmpOp, UnaryOp};
use super::Parameters;

/// An expression with its source span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Box this expression, for use as a child.
    #[inline]
    pub fn boxed(self) -> Box<Expr> {
        Box::new(self)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// `lambda params: body`
    Lambda {
        params: Box<Parameters>,
        body: Box<Expr>,
    },
    /// `body if test else orelse`
    Conditional {
        test: Box<Expr>,
        body: Box<Expr>,
        orelse: Box<Expr>,
    },
    /// `a or b or c`, flattened into one node per operator run.
    BoolOp { op: BoolOp, values: Vec<Expr> },
    /// `name := value`
    Named { target: Name, value: Box<Expr> },
    UnaryOp { op: UnaryOp, operand: Box<Expr> },
    BinOp {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `a < b <= c`: `operands.len() == ops.len() + 1`.
    Compare { operands: Vec<Expr>, ops: Vec<CmpOp> },
    Await(Box<Expr>),
    Call { func: Box<Expr>, args: Vec<Arg> },
    Attribute { value: Box<Expr>, attr: Name },
    /// `value[index]`; several subscripts form a `Tuple` index.
    Subscript { value: Box<Expr>, index: Box<Expr> },
    /// `lower:upper:step`, only inside a subscript.
    Slice {
        lower: Option<Box<Expr>>,
        upper: Option<Box<Expr>>,
        step: Option<Box<Expr>>,
    },
    Name(Name),
    Literal(Literal),
    Tuple(Vec<Expr>),
    List(Vec<Expr>),
    Set(Vec<Expr>),
    Dict(Vec<DictItem>),
    /// A list, set, dict or generator display with a comprehension clause.
    Comprehension(Box<Comprehension>),
    Yield(Option<Box<Expr>>),
    YieldFrom(Box<Expr>),
    /// `*value` in targets, displays and calls.
    Star(Box<Expr>),
}

/// Literal atoms. Numbers and strings keep their interned source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Int(Name),
    Float(Name),
    Imaginary(Name),
    Str(Name),
    True,
    False,
    None,
    Ellipsis,
}

/// A call argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arg {
    Positional(Expr),
    /// `*args`
    Starred(Expr),
    /// `name=value`
    Keyword { name: Name, value: Expr, span: Span },
    /// `**kwargs`
    DoubleStarred(Expr),
}

impl Arg {
    pub fn span(&self) -> Span {
        match self {
            Arg::Positional(e) | Arg::Starred(e) | Arg::DoubleStarred(e) => e.span,
            Arg::Keyword { span, .. } => *span,
        }
    }
}

/// One entry of a dict display.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DictItem {
    Pair { key: Expr, value: Expr },
    /// `**mapping`
    Unpack(Expr),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComprehensionKind {
    List,
    Set,
    Dict,
    Generator,
}

/// `element for target in iter if cond ...`
///
/// For dict comprehensions `element` is the key and `value` the value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comprehension {
    pub kind: ComprehensionKind,
    pub element: Expr,
    pub value: Option<Expr>,
    pub clauses: Vec<CompClause>,
}

/// One `[async] for target in iter (if cond)*` clause.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompClause {
    pub is_async: bool,
    pub target: Expr,
    pub iter: Expr,
    pub conditions: Vec<Expr>,
    pub span: Span,
}
