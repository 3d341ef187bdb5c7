//! Operator Matching Helpers
//!
//! Helper methods for matching binary, unary, comparison and augmented
//! assignment operators during parsing.

use sere_ir::ast::{BinaryOp, CmpOp, UnaryOp};
use sere_ir::{Span, TokenKind};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_shift_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Shl => Some(BinaryOp::LShift),
            TokenKind::Shr => Some(BinaryOp::RShift),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::At => Some(BinaryOp::MatMul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::DoubleSlash => Some(BinaryOp::FloorDiv),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(UnaryOp::Pos),
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Tilde => Some(UnaryOp::Invert),
            _ => None,
        }
    }

    /// Comparison operator at the cursor. `not in` and `is not` span two
    /// tokens; a lone `not` is not a comparison.
    pub(crate) fn match_comparison_op(&self) -> Option<CmpOp> {
        match self.current_kind() {
            TokenKind::Lt => Some(CmpOp::Lt),
            TokenKind::Gt => Some(CmpOp::Gt),
            TokenKind::EqEq => Some(CmpOp::Eq),
            TokenKind::GtEq => Some(CmpOp::GtEq),
            TokenKind::LtEq => Some(CmpOp::LtEq),
            TokenKind::NotEq => Some(CmpOp::NotEq),
            TokenKind::In => Some(CmpOp::In),
            TokenKind::Not if self.cursor.peek_kind(1) == TokenKind::In => Some(CmpOp::NotIn),
            TokenKind::Is if self.cursor.peek_kind(1) == TokenKind::Not => Some(CmpOp::IsNot),
            TokenKind::Is => Some(CmpOp::Is),
            _ => None,
        }
    }

    /// Consume the tokens of `op` (as returned by `match_comparison_op`)
    /// and return their span.
    pub(crate) fn advance_comparison_op(&mut self, op: CmpOp) -> Span {
        let start = self.advance().span;
        if matches!(op, CmpOp::NotIn | CmpOp::IsNot) {
            let second = self.advance().span;
            return start.merge(second);
        }
        start
    }

    /// The binary operator of an augmented assignment token (`+=` and so on).
    pub(crate) fn match_augmented_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::PlusEq => Some(BinaryOp::Add),
            TokenKind::MinusEq => Some(BinaryOp::Sub),
            TokenKind::StarEq => Some(BinaryOp::Mul),
            TokenKind::AtEq => Some(BinaryOp::MatMul),
            TokenKind::SlashEq => Some(BinaryOp::Div),
            TokenKind::DoubleSlashEq => Some(BinaryOp::FloorDiv),
            TokenKind::PercentEq => Some(BinaryOp::Mod),
            TokenKind::AmpEq => Some(BinaryOp::BitAnd),
            TokenKind::PipeEq => Some(BinaryOp::BitOr),
            TokenKind::CaretEq => Some(BinaryOp::BitXor),
            TokenKind::ShlEq => Some(BinaryOp::LShift),
            TokenKind::ShrEq => Some(BinaryOp::RShift),
            TokenKind::DoubleStarEq => Some(BinaryOp::Pow),
            _ => None,
        }
    }
}
