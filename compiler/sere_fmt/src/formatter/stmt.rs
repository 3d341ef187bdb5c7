//! Statement rendering.
//!
//! One statement per line. Top-level definitions are separated from their
//! neighbours by a blank line. An empty block prints as `pass`.

use sere_ir::ast::{
    ExceptHandler, ImportAlias, ImportNames, MatchStmt, Module, Stmt, StmtKind, WithItem,
};

use super::Formatter;
use crate::emitter::Emitter;
use crate::precedence::Prec;

fn is_definition(stmt: &Stmt) -> bool {
    match &stmt.kind {
        StmtKind::FunctionDef(_) | StmtKind::ClassDef(_) | StmtKind::Decorated { .. } => true,
        StmtKind::Async(inner) => is_definition(inner),
        _ => false,
    }
}

impl<E: Emitter> Formatter<'_, E> {
    pub fn module(&mut self, module: &Module) {
        let mut previous: Option<&Stmt> = None;
        for stmt in &module.body {
            if previous.is_some_and(|prev| is_definition(prev) || is_definition(stmt)) {
                self.out.blank_line();
            }
            self.stmt(stmt);
            previous = Some(stmt);
        }
    }

    /// Print one statement, including its indentation and final newline.
    pub fn stmt(&mut self, stmt: &Stmt) {
        self.out.start_line(self.indent);
        self.stmt_kind(stmt);
    }

    fn stmt_kind(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.expr(expr);
                self.out.end_line();
            }
            StmtKind::Assign { targets, value } => {
                for target in targets {
                    self.expr_at(target, Prec::Lambda);
                    self.text(" = ");
                }
                self.expr(value);
                self.out.end_line();
            }
            StmtKind::AugAssign { target, op, value } => {
                self.expr_at(target, Prec::Lambda);
                self.text(" ");
                self.text(op.as_symbol());
                self.text("= ");
                self.expr(value);
                self.out.end_line();
            }
            StmtKind::AnnAssign {
                target,
                annotation,
                value,
            } => {
                self.expr_at(target, Prec::Lambda);
                self.text(": ");
                self.expr_at(annotation, Prec::Lambda);
                if let Some(value) = value {
                    self.text(" = ");
                    self.expr(value);
                }
                self.out.end_line();
            }
            StmtKind::Del(targets) => {
                self.text("del ");
                self.comma_list(targets, |f, t| f.expr_at(t, Prec::BitOr));
                self.out.end_line();
            }
            StmtKind::Pass => self.line("pass"),
            StmtKind::Break => self.line("break"),
            StmtKind::Continue => self.line("continue"),
            StmtKind::Return(value) => {
                self.text("return");
                if let Some(value) = value {
                    self.text(" ");
                    self.expr_at(value, Prec::Lambda);
                }
                self.out.end_line();
            }
            StmtKind::Yield(value) => {
                self.expr(value);
                self.out.end_line();
            }
            StmtKind::Raise { exc, cause } => {
                self.text("raise");
                if let Some(exc) = exc {
                    self.text(" ");
                    self.expr_at(exc, Prec::Lambda);
                    if let Some(cause) = cause {
                        self.text(" from ");
                        self.expr_at(cause, Prec::Lambda);
                    }
                }
                self.out.end_line();
            }
            StmtKind::Import(aliases) => {
                self.text("import ");
                self.comma_list(aliases, Self::import_alias);
                self.out.end_line();
            }
            StmtKind::ImportFrom {
                module,
                level,
                names,
            } => {
                self.text("from ");
                for _ in 0..*level {
                    self.text(".");
                }
                match module {
                    Some(module) => {
                        self.dotted(module);
                        self.text(" import ");
                    }
                    None => self.text(" import "),
                }
                match names {
                    ImportNames::Star => self.text("*"),
                    ImportNames::Names(aliases) => self.comma_list(aliases, Self::import_alias),
                }
                self.out.end_line();
            }
            StmtKind::Global(names) | StmtKind::Nonlocal(names) => {
                let keyword = if matches!(stmt.kind, StmtKind::Global(_)) {
                    "global "
                } else {
                    "nonlocal "
                };
                self.text(keyword);
                self.comma_list(names, |f, name| f.name(*name));
                self.out.end_line();
            }
            StmtKind::Assert { test, msg } => {
                self.text("assert ");
                self.expr_at(test, Prec::Lambda);
                if let Some(msg) = msg {
                    self.text(", ");
                    self.expr_at(msg, Prec::Lambda);
                }
                self.out.end_line();
            }
            StmtKind::If { test, body, orelse } => {
                self.text("if ");
                self.expr_at(test, Prec::Lambda);
                self.block(body);
                self.if_tail(orelse);
            }
            StmtKind::While { test, body, orelse } => {
                self.text("while ");
                self.expr_at(test, Prec::Lambda);
                self.block(body);
                self.else_block("else", orelse);
            }
            StmtKind::For {
                target,
                iter,
                body,
                orelse,
            } => {
                self.text("for ");
                self.target_list(target);
                self.text(" in ");
                self.expr_at(iter, Prec::Lambda);
                self.block(body);
                self.else_block("else", orelse);
            }
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
            } => {
                self.text("try");
                self.block(body);
                for handler in handlers {
                    self.except_handler(handler);
                }
                self.else_block("else", orelse);
                self.else_block("finally", finalbody);
            }
            StmtKind::With { items, body } => {
                self.text("with ");
                self.comma_list(items, Self::with_item);
                self.block(body);
            }
            StmtKind::FunctionDef(def) => {
                self.text("def ");
                self.name(def.name);
                self.text("(");
                self.parameters(&def.params, true);
                self.text(")");
                if let Some(returns) = &def.returns {
                    self.text(" -> ");
                    self.expr_at(returns, Prec::Lambda);
                }
                self.block(&def.body);
            }
            StmtKind::ClassDef(class) => {
                self.text("class ");
                self.name(class.name);
                if !class.bases.is_empty() {
                    self.text("(");
                    self.arguments(&class.bases);
                    self.text(")");
                }
                self.block(&class.body);
            }
            StmtKind::Match(stmt) => self.match_stmt(stmt),
            StmtKind::Async(inner) => {
                self.text("async ");
                self.stmt_kind(inner);
            }
            StmtKind::Decorated { decorators, target } => {
                for decorator in decorators {
                    self.text("@");
                    self.expr_at(decorator, Prec::Lambda);
                    self.out.end_line();
                    self.out.start_line(self.indent);
                }
                self.stmt_kind(target);
            }
        }
    }

    fn line(&mut self, text: &str) {
        self.text(text);
        self.out.end_line();
    }

    /// `:` followed by an indented block.
    fn block(&mut self, body: &[Stmt]) {
        self.text(":");
        self.out.end_line();
        self.indent += 1;
        if body.is_empty() {
            self.out.start_line(self.indent);
            self.line("pass");
        }
        for stmt in body {
            self.stmt(stmt);
        }
        self.indent -= 1;
    }

    /// `keyword:` and its block, when `body` is not empty.
    fn else_block(&mut self, keyword: &str, body: &[Stmt]) {
        if body.is_empty() {
            return;
        }
        self.out.start_line(self.indent);
        self.text(keyword);
        self.block(body);
    }

    /// The `elif`/`else` part of an `if`. An `else` holding nothing but an
    /// `if` prints as `elif`.
    fn if_tail(&mut self, orelse: &[Stmt]) {
        if let [Stmt {
            kind: StmtKind::If { test, body, orelse },
            ..
        }] = orelse
        {
            self.out.start_line(self.indent);
            self.text("elif ");
            self.expr_at(test, Prec::Lambda);
            self.block(body);
            self.if_tail(orelse);
        } else {
            self.else_block("else", orelse);
        }
    }

    fn except_handler(&mut self, handler: &ExceptHandler) {
        self.out.start_line(self.indent);
        self.text("except");
        if let Some(typ) = &handler.typ {
            self.text(" ");
            self.expr_at(typ, Prec::Lambda);
            if let Some(name) = handler.name {
                self.text(" as ");
                self.name(name);
            }
        }
        self.block(&handler.body);
    }

    fn with_item(&mut self, item: &WithItem) {
        self.expr_at(&item.context, Prec::Lambda);
        if let Some(target) = &item.target {
            self.text(" as ");
            self.expr_at(target, Prec::BitOr);
        }
    }

    fn import_alias(&mut self, alias: &ImportAlias) {
        self.dotted(&alias.name);
        if let Some(asname) = alias.asname {
            self.text(" as ");
            self.name(asname);
        }
    }

    fn match_stmt(&mut self, stmt: &MatchStmt) {
        self.text("match ");
        self.expr_at(&stmt.subject, Prec::Lambda);
        self.text(":");
        self.out.end_line();
        self.indent += 1;
        for case in &stmt.cases {
            self.out.start_line(self.indent);
            self.text("case ");
            self.pattern(&case.pattern);
            if let Some(guard) = &case.guard {
                self.text(" if ");
                self.expr_at(guard, Prec::Lambda);
            }
            self.block(&case.body);
        }
        self.indent -= 1;
    }
}
