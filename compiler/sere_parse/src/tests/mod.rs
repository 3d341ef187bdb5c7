//! Parser tests.
//!
//! - `expressions`: precedence, associativity, displays and comprehensions
//! - `statements`: simple and compound statements, entry points
//! - `patterns`: match statements and case patterns
//! - `recovery`: error kinds and statement resynchronization

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod expressions;
mod patterns;
mod recovery;

use std::sync::Once;

use sere_ir::ast::{Expr, Module, Stmt, StmtKind};
use sere_ir::{Name, StringInterner};

use crate::{ParseErrorKind, ParseOutput};

static TRACING_INIT: Once = Once::new();

/// Route parser traces to stderr when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer())
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}

/// A parsed module together with the interner its names live in.
struct Parsed {
    interner: StringInterner,
    output: ParseOutput<Module>,
}

impl Parsed {
    fn new(source: &str) -> Self {
        init_tracing();
        let interner = StringInterner::new();
        let tokens = sere_lexer::lex(source, &interner);
        let output = crate::parse_module(&tokens, &interner);
        Parsed { interner, output }
    }

    fn body(&self) -> &[Stmt] {
        &self.output.node.body
    }

    fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    fn text(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    fn error_kinds(&self) -> Vec<ParseErrorKind> {
        self.output.errors.iter().map(|e| e.kind).collect()
    }

    /// The only statement of an error-free module.
    fn only_stmt(&self) -> &Stmt {
        assert!(
            !self.output.has_errors(),
            "unexpected errors: {:?}",
            self.output.errors
        );
        assert_eq!(self.body().len(), 1, "expected one statement");
        &self.body()[0]
    }

    /// The expression of an error-free single expression statement.
    fn only_expr(&self) -> &Expr {
        match &self.only_stmt().kind {
            StmtKind::Expr(expr) => expr,
            other => panic!("expected expression statement, got {other:?}"),
        }
    }
}
