//! Expression rendering.

use sere_ir::ast::{
    Arg, BinaryOp, CompClause, Comprehension, ComprehensionKind, DictItem, Expr, ExprKind,
    Literal, Param, Parameters, UnaryOp,
};

use sere_stack::ensure_sufficient_stack;

use super::Formatter;
use crate::emitter::Emitter;
use crate::precedence::Prec;

/// Whether `expr` must be parenthesized where `min` is required.
///
/// `:=` is always parenthesized so it never lands where only an
/// assignment statement may stand.
fn needs_parens(expr: &Expr, min: Prec) -> bool {
    matches!(expr.kind, ExprKind::Named { .. }) || Prec::of(&expr.kind) < min
}

/// A call whose only argument is a generator expression, which then
/// shares the call's parentheses.
fn sole_generator(args: &[Arg]) -> Option<&Comprehension> {
    match args {
        [Arg::Positional(Expr {
            kind: ExprKind::Comprehension(comp),
            ..
        })] if comp.kind == ComprehensionKind::Generator => Some(comp),
        _ => None,
    }
}

impl<E: Emitter> Formatter<'_, E> {
    /// Print an expression in a position that accepts any expression.
    pub fn expr(&mut self, expr: &Expr) {
        self.expr_at(expr, Prec::Yield);
    }

    /// Print `expr` where the surrounding syntax binds with strength `min`.
    pub(crate) fn expr_at(&mut self, expr: &Expr, min: Prec) {
        ensure_sufficient_stack(|| {
            if needs_parens(expr, min) {
                self.text("(");
                self.expr_kind(expr);
                self.text(")");
            } else {
                self.expr_kind(expr);
            }
        });
    }

    fn expr_kind(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Lambda { params, body } => {
                self.text("lambda");
                if !params.is_empty() {
                    self.text(" ");
                    self.parameters(params, false);
                }
                self.text(": ");
                self.expr_at(body, Prec::Lambda);
            }
            ExprKind::Conditional { test, body, orelse } => {
                self.expr_at(body, Prec::Or);
                self.text(" if ");
                self.expr_at(test, Prec::Or);
                self.text(" else ");
                self.expr_at(orelse, Prec::Lambda);
            }
            ExprKind::BoolOp { op, values } => {
                let operand = Prec::of_bool(*op).next();
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.text(" ");
                        self.text(op.as_symbol());
                        self.text(" ");
                    }
                    self.expr_at(value, operand);
                }
            }
            ExprKind::Named { target, value } => {
                self.name(*target);
                self.text(" := ");
                self.expr_at(value, Prec::Lambda);
            }
            ExprKind::UnaryOp { op, operand } => {
                if *op == UnaryOp::Not {
                    self.text("not ");
                    self.expr_at(operand, Prec::Not);
                } else {
                    self.text(op.as_symbol());
                    self.expr_at(operand, Prec::Factor);
                }
            }
            ExprKind::BinOp { op, left, right } => self.binary(*op, left, right),
            ExprKind::Compare { operands, ops } => {
                if let Some((first, rest)) = operands.split_first() {
                    self.expr_at(first, Prec::BitOr);
                    for (op, operand) in ops.iter().zip(rest) {
                        self.text(" ");
                        self.text(op.as_symbol());
                        self.text(" ");
                        self.expr_at(operand, Prec::BitOr);
                    }
                }
            }
            ExprKind::Await(value) => {
                self.text("await ");
                self.expr_at(value, Prec::Primary);
            }
            ExprKind::Call { func, args } => {
                self.expr_at(func, Prec::Primary);
                self.text("(");
                match sole_generator(args) {
                    Some(comp) => self.comprehension_body(comp),
                    None => self.arguments(args),
                }
                self.text(")");
            }
            ExprKind::Attribute { value, attr } => {
                // `1.x` would lex as a float.
                if matches!(value.kind, ExprKind::Literal(Literal::Int(_))) {
                    self.text("(");
                    self.expr_kind(value);
                    self.text(")");
                } else {
                    self.expr_at(value, Prec::Primary);
                }
                self.text(".");
                self.name(*attr);
            }
            ExprKind::Subscript { value, index } => {
                self.expr_at(value, Prec::Primary);
                self.text("[");
                self.subscript_index(index);
                self.text("]");
            }
            ExprKind::Slice { lower, upper, step } => {
                if let Some(lower) = lower {
                    self.expr_at(lower, Prec::Conditional);
                }
                self.text(":");
                if let Some(upper) = upper {
                    self.expr_at(upper, Prec::Conditional);
                }
                if let Some(step) = step {
                    self.text(":");
                    self.expr_at(step, Prec::Conditional);
                }
            }
            ExprKind::Name(name) => self.name(*name),
            ExprKind::Literal(literal) => self.literal(*literal),
            ExprKind::Tuple(elements) => {
                self.text("(");
                self.comma_list(elements, |f, e| f.expr_at(e, Prec::Lambda));
                if elements.len() == 1 {
                    self.text(",");
                }
                self.text(")");
            }
            ExprKind::List(elements) => {
                self.text("[");
                self.comma_list(elements, |f, e| f.expr_at(e, Prec::Lambda));
                self.text("]");
            }
            ExprKind::Set(elements) => {
                if elements.is_empty() {
                    // An empty set has no display form; `{}` is a dict.
                    self.text("{*()}");
                } else {
                    self.text("{");
                    self.comma_list(elements, |f, e| f.expr_at(e, Prec::Lambda));
                    self.text("}");
                }
            }
            ExprKind::Dict(items) => {
                self.text("{");
                self.comma_list(items, Self::dict_item);
                self.text("}");
            }
            ExprKind::Comprehension(comp) => {
                let (open, close) = match comp.kind {
                    ComprehensionKind::List => ("[", "]"),
                    ComprehensionKind::Set | ComprehensionKind::Dict => ("{", "}"),
                    ComprehensionKind::Generator => ("(", ")"),
                };
                self.text(open);
                self.comprehension_body(comp);
                self.text(close);
            }
            ExprKind::Yield(value) => {
                self.text("yield");
                if let Some(value) = value {
                    self.text(" ");
                    self.expr_at(value, Prec::Lambda);
                }
            }
            ExprKind::YieldFrom(value) => {
                self.text("yield from ");
                self.expr_at(value, Prec::Lambda);
            }
            ExprKind::Star(value) => {
                self.text("*");
                self.expr_at(value, Prec::BitOr);
            }
        }
    }

    fn binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) {
        let prec = Prec::of_binary(op);
        let (left_min, right_min) = if op == BinaryOp::Pow {
            // Right-associative, and the exponent may carry a sign.
            (Prec::Await, Prec::Factor)
        } else {
            (prec, prec.next())
        };
        self.expr_at(left, left_min);
        self.text(" ");
        self.text(op.as_symbol());
        self.text(" ");
        self.expr_at(right, right_min);
    }

    fn literal(&mut self, literal: Literal) {
        match literal {
            Literal::Int(text)
            | Literal::Float(text)
            | Literal::Imaginary(text)
            | Literal::Str(text) => self.name(text),
            Literal::True => self.text("True"),
            Literal::False => self.text("False"),
            Literal::None => self.text("None"),
            Literal::Ellipsis => self.text("..."),
        }
    }

    /// A subscript index; several subscripts print without parentheses.
    fn subscript_index(&mut self, index: &Expr) {
        match &index.kind {
            ExprKind::Tuple(elements) if !elements.is_empty() => {
                self.comma_list(elements, |f, e| f.expr_at(e, Prec::Lambda));
                if elements.len() == 1 {
                    self.text(",");
                }
            }
            _ => self.expr_at(index, Prec::Lambda),
        }
    }

    fn dict_item(&mut self, item: &DictItem) {
        match item {
            DictItem::Pair { key, value } => {
                self.expr_at(key, Prec::Conditional);
                self.text(": ");
                self.expr_at(value, Prec::Lambda);
            }
            DictItem::Unpack(value) => {
                self.text("**");
                self.expr_at(value, Prec::BitOr);
            }
        }
    }

    /// The inside of a comprehension's brackets.
    fn comprehension_body(&mut self, comp: &Comprehension) {
        if comp.kind == ComprehensionKind::Dict {
            self.expr_at(&comp.element, Prec::Conditional);
            self.text(": ");
        } else {
            self.expr_at(&comp.element, Prec::Lambda);
        }
        if let Some(value) = &comp.value {
            self.expr_at(value, Prec::Lambda);
        }
        for clause in &comp.clauses {
            self.comp_clause(clause);
        }
    }

    fn comp_clause(&mut self, clause: &CompClause) {
        self.text(if clause.is_async { " async for " } else { " for " });
        self.target_list(&clause.target);
        self.text(" in ");
        self.expr_at(&clause.iter, Prec::Or);
        for condition in &clause.conditions {
            self.text(" if ");
            self.expr_at(condition, Prec::Or);
        }
    }

    /// Targets of `for`: a tuple prints without parentheses.
    pub(crate) fn target_list(&mut self, target: &Expr) {
        match &target.kind {
            ExprKind::Tuple(elements) if !elements.is_empty() => {
                self.comma_list(elements, |f, e| f.expr_at(e, Prec::BitOr));
                if elements.len() == 1 {
                    self.text(",");
                }
            }
            _ => self.expr_at(target, Prec::BitOr),
        }
    }

    pub(crate) fn arguments(&mut self, args: &[Arg]) {
        self.comma_list(args, |f, arg| match arg {
            Arg::Positional(value) => f.expr_at(value, Prec::Lambda),
            Arg::Starred(value) => {
                f.text("*");
                f.expr_at(value, Prec::BitOr);
            }
            Arg::Keyword { name, value, .. } => {
                f.name(*name);
                f.text("=");
                f.expr_at(value, Prec::Lambda);
            }
            Arg::DoubleStarred(value) => {
                f.text("**");
                f.expr_at(value, Prec::BitOr);
            }
        });
    }

    /// A parameter list, without the surrounding parentheses.
    pub(crate) fn parameters(&mut self, params: &Parameters, annotations: bool) {
        let mut first = true;
        let mut sep = |f: &mut Self| {
            if !first {
                f.text(", ");
            }
            first = false;
        };

        for param in &params.args {
            sep(self);
            self.param(param, "", annotations);
        }
        if let Some(vararg) = &params.vararg {
            sep(self);
            self.param(vararg, "*", annotations);
        } else if !params.kwonly.is_empty() {
            sep(self);
            self.text("*");
        }
        for param in &params.kwonly {
            sep(self);
            self.param(param, "", annotations);
        }
        if let Some(kwarg) = &params.kwarg {
            sep(self);
            self.param(kwarg, "**", annotations);
        }
    }

    fn param(&mut self, param: &Param, prefix: &str, annotations: bool) {
        self.text(prefix);
        self.name(param.name);
        let annotation = param.annotation.as_ref().filter(|_| annotations);
        if let Some(annotation) = annotation {
            self.text(": ");
            self.expr_at(annotation, Prec::Lambda);
        }
        if let Some(default) = &param.default {
            self.text(if annotation.is_some() { " = " } else { "=" });
            self.expr_at(default, Prec::Lambda);
        }
    }
}
