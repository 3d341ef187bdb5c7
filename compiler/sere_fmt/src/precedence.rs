//! Binding strength of expression forms.
//!
//! Ordered from loosest to tightest. A sub-expression whose precedence is
//! below what its position requires is printed in parentheses.

use sere_ir::ast::{BinaryOp, BoolOp, ExprKind, UnaryOp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Prec {
    /// `yield`; bare only as a statement or assigned value.
    Yield,
    Lambda,
    Conditional,
    Or,
    And,
    Not,
    Compare,
    BitOr,
    BitXor,
    BitAnd,
    Shift,
    Arith,
    Term,
    /// Unary `+`, `-` and `~`.
    Factor,
    Power,
    Await,
    /// Calls, attributes and subscripts.
    Primary,
    Atom,
}

impl Prec {
    pub(crate) fn of(kind: &ExprKind) -> Prec {
        match kind {
            ExprKind::Yield(_) | ExprKind::YieldFrom(_) | ExprKind::Named { .. } => Prec::Yield,
            ExprKind::Lambda { .. } => Prec::Lambda,
            ExprKind::Conditional { .. } => Prec::Conditional,
            ExprKind::BoolOp { op, .. } => Prec::of_bool(*op),
            ExprKind::UnaryOp {
                op: UnaryOp::Not, ..
            } => Prec::Not,
            ExprKind::UnaryOp { .. } => Prec::Factor,
            ExprKind::BinOp { op, .. } => Prec::of_binary(*op),
            ExprKind::Compare { .. } => Prec::Compare,
            ExprKind::Await(_) => Prec::Await,
            ExprKind::Call { .. } | ExprKind::Attribute { .. } | ExprKind::Subscript { .. } => {
                Prec::Primary
            }
            ExprKind::Name(_)
            | ExprKind::Literal(_)
            | ExprKind::Tuple(_)
            | ExprKind::List(_)
            | ExprKind::Set(_)
            | ExprKind::Dict(_)
            | ExprKind::Comprehension(_)
            | ExprKind::Slice { .. }
            | ExprKind::Star(_) => Prec::Atom,
        }
    }

    pub(crate) fn of_bool(op: BoolOp) -> Prec {
        match op {
            BoolOp::Or => Prec::Or,
            BoolOp::And => Prec::And,
        }
    }

    pub(crate) fn of_binary(op: BinaryOp) -> Prec {
        match op {
            BinaryOp::BitOr => Prec::BitOr,
            BinaryOp::BitXor => Prec::BitXor,
            BinaryOp::BitAnd => Prec::BitAnd,
            BinaryOp::LShift | BinaryOp::RShift => Prec::Shift,
            BinaryOp::Add | BinaryOp::Sub => Prec::Arith,
            BinaryOp::Mul
            | BinaryOp::MatMul
            | BinaryOp::Div
            | BinaryOp::FloorDiv
            | BinaryOp::Mod => Prec::Term,
            BinaryOp::Pow => Prec::Power,
        }
    }

    /// The next tighter level.
    pub(crate) fn next(self) -> Prec {
        match self {
            Prec::Yield => Prec::Lambda,
            Prec::Lambda => Prec::Conditional,
            Prec::Conditional => Prec::Or,
            Prec::Or => Prec::And,
            Prec::And => Prec::Not,
            Prec::Not => Prec::Compare,
            Prec::Compare => Prec::BitOr,
            Prec::BitOr => Prec::BitXor,
            Prec::BitXor => Prec::BitAnd,
            Prec::BitAnd => Prec::Shift,
            Prec::Shift => Prec::Arith,
            Prec::Arith => Prec::Term,
            Prec::Term => Prec::Factor,
            Prec::Factor => Prec::Power,
            Prec::Power => Prec::Await,
            Prec::Await => Prec::Primary,
            Prec::Primary | Prec::Atom => Prec::Atom,
        }
    }
}
