//! Match plan tests.
//!
//! - `compile`: literal decoding and unreachable-case checks
//! - `execute`: running plans against values

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod compile;

use std::sync::Once;

use rustc_hash::FxHashMap;
use sere_ir::ast::{BoolOp, CmpOp, Expr, ExprKind, Literal, MatchStmt, StmtKind, UnaryOp};
use sere_ir::literal::{decode_int, decode_string};
use sere_ir::{Name, StringInterner};

use crate::{Bindings, CompileError, MatchEnv, MatchError, MatchPlan, Object, Value};

static TRACING_INIT: Once = Once::new();

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

/// A parsed `match` statement with a small program around it.
struct Fixture {
    interner: StringInterner,
    stmt: MatchStmt,
    /// Dotted names visible to value patterns and guards.
    globals: FxHashMap<String, Value>,
    /// Known classes and their positional attribute names.
    classes: FxHashMap<String, Option<Vec<String>>>,
}

impl Fixture {
    fn new(source: &str) -> Self {
        init_tracing();
        let interner = StringInterner::new();
        let parsed = sere_parse::parse_source(source, &interner);
        assert!(
            !parsed.has_errors(),
            "unexpected errors: {:?}",
            parsed.parse_errors
        );
        let stmt = match parsed.module.body.into_iter().next().map(|s| s.kind) {
            Some(StmtKind::Match(stmt)) => *stmt,
            other => panic!("expected a match statement, found {other:?}"),
        };
        Fixture {
            interner,
            stmt,
            globals: FxHashMap::default(),
            classes: FxHashMap::default(),
        }
    }

    fn with_global(mut self, name: &str, value: Value) -> Self {
        self.globals.insert(name.to_owned(), value);
        self
    }

    fn with_class(mut self, name: &str, match_args: Option<&[&str]>) -> Self {
        let args = match_args.map(|args| args.iter().map(|&a| a.to_owned()).collect());
        self.classes.insert(name.to_owned(), args);
        self
    }

    fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    fn object(&self, class: &str, attrs: &[(&str, Value)]) -> Value {
        let object = attrs
            .iter()
            .fold(Object::new(self.name(class)), |object, (attr, value)| {
                object.with_attr(self.name(attr), value.clone())
            });
        Value::Object(object)
    }

    fn try_plan(&self) -> Result<MatchPlan, CompileError> {
        MatchPlan::compile(&self.stmt, &self.interner)
    }

    fn plan(&self) -> MatchPlan {
        self.try_plan().expect("plan compiles")
    }

    fn env(&self) -> TestEnv<'_> {
        TestEnv {
            fixture: self,
            guard_calls: 0,
        }
    }

    fn try_run(&self, subject: &Value) -> Result<Option<(usize, Vec<(String, Value)>)>, MatchError> {
        let plan = self.plan();
        let mut env = self.env();
        let success = plan.execute(subject, &mut env)?;
        Ok(success.map(|success| {
            let bindings = success
                .bindings
                .iter()
                .map(|(name, value)| (self.interner.lookup(name).to_owned(), value.clone()))
                .collect();
            (success.case_index, bindings)
        }))
    }

    /// Index of the matching case and its bindings as text.
    fn run(&self, subject: &Value) -> Option<(usize, Vec<(String, Value)>)> {
        self.try_run(subject).expect("match runs")
    }

    /// Index of the matching case.
    fn case_of(&self, subject: &Value) -> Option<usize> {
        self.run(subject).map(|(index, _)| index)
    }
}

/// Environment backed by a [`Fixture`], with a guard evaluator covering
/// names, literals, comparisons and boolean operators.
struct TestEnv<'a> {
    fixture: &'a Fixture,
    guard_calls: usize,
}

impl TestEnv<'_> {
    fn text(&self, path: &[Name]) -> String {
        path.iter()
            .map(|part| self.fixture.interner.lookup(*part))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn eval(&self, expr: &Expr, bindings: &Bindings) -> Result<Value, MatchError> {
        let interner = &self.fixture.interner;
        match &expr.kind {
            ExprKind::Name(name) => bindings
                .get(*name)
                .cloned()
                .or_else(|| self.fixture.globals.get(interner.lookup(*name)).cloned())
                .ok_or_else(|| MatchError::UndefinedName(interner.lookup(*name).to_owned())),
            ExprKind::Literal(Literal::Int(text)) => decode_int(interner.lookup(*text))
                .map(Value::Int)
                .map_err(|_| MatchError::Guard("bad int".to_owned())),
            ExprKind::Literal(Literal::Str(text)) => decode_string(interner.lookup(*text))
                .map(Value::from)
                .map_err(|_| MatchError::Guard("bad string".to_owned())),
            ExprKind::Literal(Literal::True) => Ok(Value::Bool(true)),
            ExprKind::Literal(Literal::False) => Ok(Value::Bool(false)),
            ExprKind::Literal(Literal::None) => Ok(Value::None),
            ExprKind::UnaryOp {
                op: UnaryOp::Not,
                operand,
            } => Ok(Value::Bool(!truthy(&self.eval(operand, bindings)?))),
            ExprKind::BoolOp { op, values } => {
                let mut result = Value::Bool(*op == BoolOp::And);
                for value in values {
                    result = self.eval(value, bindings)?;
                    let stop = match op {
                        BoolOp::And => !truthy(&result),
                        BoolOp::Or => truthy(&result),
                    };
                    if stop {
                        break;
                    }
                }
                Ok(result)
            }
            ExprKind::Compare { operands, ops } => {
                for (pair, op) in operands.windows(2).zip(ops) {
                    let left = self.eval(&pair[0], bindings)?;
                    let right = self.eval(&pair[1], bindings)?;
                    let holds = match (op, &left, &right) {
                        (CmpOp::Eq, _, _) => left.equals(&right),
                        (CmpOp::NotEq, _, _) => !left.equals(&right),
                        (CmpOp::Lt, Value::Int(a), Value::Int(b)) => a < b,
                        (CmpOp::LtEq, Value::Int(a), Value::Int(b)) => a <= b,
                        (CmpOp::Gt, Value::Int(a), Value::Int(b)) => a > b,
                        (CmpOp::GtEq, Value::Int(a), Value::Int(b)) => a >= b,
                        _ => return Err(MatchError::Guard(format!("cannot compare with {op:?}"))),
                    };
                    if !holds {
                        return Ok(Value::Bool(false));
                    }
                }
                Ok(Value::Bool(true))
            }
            other => Err(MatchError::Guard(format!("unsupported guard {other:?}"))),
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::None => false,
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        Value::Float(x) => *x != 0.0,
        Value::Str(s) => !s.is_empty(),
        Value::List(items) | Value::Tuple(items) => !items.is_empty(),
        Value::Dict(entries) => !entries.is_empty(),
        _ => true,
    }
}

impl MatchEnv for TestEnv<'_> {
    fn lookup(&mut self, path: &[Name]) -> Option<Value> {
        self.fixture.globals.get(&self.text(path)).cloned()
    }

    fn eval_guard(&mut self, guard: &Expr, bindings: &Bindings) -> Result<bool, MatchError> {
        self.guard_calls += 1;
        Ok(truthy(&self.eval(guard, bindings)?))
    }

    fn is_class(&mut self, path: &[Name]) -> bool {
        self.fixture.classes.contains_key(&self.text(path))
    }

    fn match_args(&mut self, class: &[Name]) -> Option<Vec<Name>> {
        let args = self.fixture.classes.get(&self.text(class))?.as_ref()?;
        Some(args.iter().map(|arg| self.fixture.name(arg)).collect())
    }
}

fn int(n: i64) -> Value {
    Value::Int(n)
}

fn s(text: &str) -> Value {
    Value::string(text)
}

/// Bindings as `(name, value)` pairs for comparison.
fn bound(pairs: &[(&str, Value)]) -> Vec<(String, Value)> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), value.clone()))
        .collect()
}
