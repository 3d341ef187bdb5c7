//! Compiling case patterns into matcher trees.
//!
//! Compilation resolves everything that does not depend on the subject:
//! literal text is decoded, groups are flattened, sequence patterns are
//! split around their star, and builtin class names are recognized.
//! Dotted names stay symbolic; the environment resolves them per run.

use sere_ir::ast::{
    BinaryOp, DottedName, Expr, ExprKind, Literal, MatchStmt, Pattern, PatternKind, UnaryOp,
};
use sere_ir::literal::{self, LiteralError};
use sere_ir::{Name, Span, StringInterner};
use tracing::debug;

use crate::value::Value;
use crate::CompileError;

/// A compiled `match` statement.
#[derive(Clone, Debug)]
pub struct MatchPlan {
    pub(crate) cases: Vec<CompiledCase>,
}

#[derive(Clone, Debug)]
pub(crate) struct CompiledCase {
    pub(crate) matcher: Matcher,
    pub(crate) guard: Option<Expr>,
}

/// A dotted name with its text, kept for error messages.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NamePath {
    pub(crate) parts: Vec<Name>,
    pub(crate) text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Matcher {
    Wildcard,
    Capture(Name),
    /// Numbers and strings, compared with [`Value::equals`].
    Equal(Value),
    /// `None`, `True`, `False`, compared by identity.
    Singleton(Value),
    /// Dotted name resolved through the environment, compared by equality.
    Value(NamePath),
    Sequence {
        before: Vec<Matcher>,
        /// `Some(None)` for `*_`.
        star: Option<Option<Name>>,
        after: Vec<Matcher>,
    },
    Mapping {
        entries: Vec<(MappingKey, Matcher)>,
        rest: Option<Name>,
    },
    Class {
        class: ClassRef,
        positional: Vec<Matcher>,
        keywords: Vec<KeywordMatcher>,
    },
    Or(Vec<Matcher>),
    As(Box<Matcher>, Name),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MappingKey {
    Literal(Value),
    Value(NamePath),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct KeywordMatcher {
    pub(crate) attr: Name,
    pub(crate) text: String,
    pub(crate) matcher: Matcher,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ClassRef {
    Builtin(BuiltinClass),
    User(NamePath),
}

/// Builtin classes whose single positional sub-pattern matches the whole
/// subject: `case int(n):` binds `n` to the subject itself.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BuiltinClass {
    Bool,
    Bytes,
    Dict,
    Float,
    Int,
    List,
    Str,
    Tuple,
}

impl BuiltinClass {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => BuiltinClass::Bool,
            "bytes" => BuiltinClass::Bytes,
            "dict" => BuiltinClass::Dict,
            "float" => BuiltinClass::Float,
            "int" => BuiltinClass::Int,
            "list" => BuiltinClass::List,
            "str" => BuiltinClass::Str,
            "tuple" => BuiltinClass::Tuple,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinClass::Bool => "bool",
            BuiltinClass::Bytes => "bytes",
            BuiltinClass::Dict => "dict",
            BuiltinClass::Float => "float",
            BuiltinClass::Int => "int",
            BuiltinClass::List => "list",
            BuiltinClass::Str => "str",
            BuiltinClass::Tuple => "tuple",
        }
    }

    /// Instance check. `bool` is a subclass of `int`.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (BuiltinClass::Bool, Value::Bool(_))
                | (BuiltinClass::Int, Value::Int(_) | Value::Bool(_))
                | (BuiltinClass::Bytes, Value::Bytes(_))
                | (BuiltinClass::Dict, Value::Dict(_))
                | (BuiltinClass::Float, Value::Float(_))
                | (BuiltinClass::List, Value::List(_))
                | (BuiltinClass::Str, Value::Str(_))
                | (BuiltinClass::Tuple, Value::Tuple(_))
        )
    }
}

impl MatchPlan {
    /// Compile every case of `stmt`, in order.
    ///
    /// # Errors
    ///
    /// Fails on literals that cannot be decoded and on a case or
    /// alternative that matches everything but is not the last one.
    pub fn compile(stmt: &MatchStmt, interner: &StringInterner) -> Result<Self, CompileError> {
        let compiler = Compiler { interner };
        let last = stmt.cases.len().saturating_sub(1);
        let mut cases = Vec::with_capacity(stmt.cases.len());

        for (index, case) in stmt.cases.iter().enumerate() {
            if index < last && case.guard.is_none() {
                if let Some(what) = compiler.irrefutable(&case.pattern) {
                    return Err(CompileError::Unreachable {
                        what,
                        span: case.pattern.span,
                    });
                }
            }
            cases.push(CompiledCase {
                matcher: compiler.pattern(&case.pattern)?,
                guard: case.guard.clone(),
            });
        }

        debug!(cases = cases.len(), "compiled match plan");
        Ok(MatchPlan { cases })
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

struct Compiler<'a> {
    interner: &'a StringInterner,
}

impl Compiler<'_> {
    /// Describe `pattern` if it matches every subject.
    fn irrefutable(&self, pattern: &Pattern) -> Option<String> {
        match &pattern.kind {
            PatternKind::Wildcard => Some("wildcard".to_owned()),
            PatternKind::Capture(name) => Some(format!(
                "name capture `{}`",
                self.interner.lookup(*name)
            )),
            PatternKind::Group(inner) | PatternKind::As { pattern: inner, .. } => {
                self.irrefutable(inner)
            }
            PatternKind::Or(alternatives) => alternatives
                .iter()
                .find_map(|alternative| self.irrefutable(alternative)),
            _ => None,
        }
    }

    fn path(&self, name: &DottedName) -> NamePath {
        let text = name
            .parts
            .iter()
            .map(|part| self.interner.lookup(*part))
            .collect::<Vec<_>>()
            .join(".");
        NamePath {
            parts: name.parts.clone(),
            text,
        }
    }

    fn pattern(&self, pattern: &Pattern) -> Result<Matcher, CompileError> {
        Ok(match &pattern.kind {
            PatternKind::Wildcard => Matcher::Wildcard,
            PatternKind::Capture(name) => Matcher::Capture(*name),
            PatternKind::Group(inner) => self.pattern(inner)?,
            PatternKind::Literal(expr) => match self.literal(expr)? {
                value @ (Value::None | Value::Bool(_)) => Matcher::Singleton(value),
                value => Matcher::Equal(value),
            },
            PatternKind::Value(name) => Matcher::Value(self.path(name)),
            PatternKind::Sequence(elements) => self.sequence(elements)?,
            PatternKind::Mapping { entries, rest } => {
                let entries = entries
                    .iter()
                    .map(|entry| Ok((self.mapping_key(&entry.key)?, self.pattern(&entry.pattern)?)))
                    .collect::<Result<Vec<_>, CompileError>>()?;
                Matcher::Mapping {
                    entries,
                    rest: *rest,
                }
            }
            PatternKind::Class {
                cls,
                positional,
                keywords,
            } => {
                let builtin = match cls.parts.as_slice() {
                    [single] => BuiltinClass::from_name(self.interner.lookup(*single)),
                    _ => None,
                };
                let class = match builtin {
                    Some(builtin) => ClassRef::Builtin(builtin),
                    None => ClassRef::User(self.path(cls)),
                };
                Matcher::Class {
                    class,
                    positional: positional
                        .iter()
                        .map(|p| self.pattern(p))
                        .collect::<Result<_, _>>()?,
                    keywords: keywords
                        .iter()
                        .map(|keyword| {
                            Ok(KeywordMatcher {
                                attr: keyword.name,
                                text: self.interner.lookup(keyword.name).to_owned(),
                                matcher: self.pattern(&keyword.pattern)?,
                            })
                        })
                        .collect::<Result<_, CompileError>>()?,
                }
            }
            PatternKind::Or(alternatives) => {
                let (last, init) = alternatives
                    .split_last()
                    .ok_or(CompileError::InvalidLiteral { span: pattern.span })?;
                for alternative in init {
                    if let Some(what) = self.irrefutable(alternative) {
                        return Err(CompileError::Unreachable {
                            what,
                            span: alternative.span,
                        });
                    }
                }
                let mut matchers = init
                    .iter()
                    .map(|alternative| self.pattern(alternative))
                    .collect::<Result<Vec<_>, _>>()?;
                matchers.push(self.pattern(last)?);
                Matcher::Or(matchers)
            }
            PatternKind::As { pattern, name } => {
                Matcher::As(Box::new(self.pattern(pattern)?), *name)
            }
            PatternKind::Star(_) => return Err(CompileError::MisplacedStar { span: pattern.span }),
        })
    }

    fn sequence(&self, elements: &[Pattern]) -> Result<Matcher, CompileError> {
        let mut before = Vec::new();
        let mut star = None;
        let mut after = Vec::new();

        for element in elements {
            match (&element.kind, star) {
                (PatternKind::Star(name), None) => star = Some(*name),
                (PatternKind::Star(_), Some(_)) => {
                    return Err(CompileError::MisplacedStar { span: element.span });
                }
                (_, None) => before.push(self.pattern(element)?),
                (_, Some(_)) => after.push(self.pattern(element)?),
            }
        }

        Ok(Matcher::Sequence {
            before,
            star,
            after,
        })
    }

    fn mapping_key(&self, key: &Pattern) -> Result<MappingKey, CompileError> {
        match &key.kind {
            PatternKind::Literal(expr) => Ok(MappingKey::Literal(self.literal(expr)?)),
            PatternKind::Value(name) => Ok(MappingKey::Value(self.path(name))),
            _ => Err(CompileError::InvalidLiteral { span: key.span }),
        }
    }

    /// Decode a literal pattern expression: an atom, a negated number, or
    /// `real +/- imaginary`.
    #[allow(clippy::cast_precision_loss, reason = "complex parts are floats")]
    fn literal(&self, expr: &Expr) -> Result<Value, CompileError> {
        match &expr.kind {
            ExprKind::Literal(literal) => self.atom(*literal, expr.span),
            ExprKind::UnaryOp {
                op: UnaryOp::Neg,
                operand,
            } => match self.literal(operand)? {
                Value::Int(n) => n.checked_neg().map(Value::Int).ok_or_else(|| {
                    CompileError::IntegerOutOfRange {
                        text: format!("-{n}"),
                        span: expr.span,
                    }
                }),
                Value::Float(x) => Ok(Value::Float(-x)),
                Value::Complex { re, im } => Ok(Value::Complex { re: -re, im: -im }),
                _ => Err(CompileError::InvalidLiteral { span: expr.span }),
            },
            ExprKind::BinOp {
                op: op @ (BinaryOp::Add | BinaryOp::Sub),
                left,
                right,
            } => {
                let re = match self.literal(left)? {
                    Value::Int(n) => n as f64,
                    Value::Float(x) => x,
                    _ => return Err(CompileError::InvalidLiteral { span: expr.span }),
                };
                let Value::Complex { im, .. } = self.literal(right)? else {
                    return Err(CompileError::InvalidLiteral { span: expr.span });
                };
                let im = if *op == BinaryOp::Sub { -im } else { im };
                Ok(Value::Complex { re, im })
            }
            _ => Err(CompileError::InvalidLiteral { span: expr.span }),
        }
    }

    fn atom(&self, literal: Literal, span: Span) -> Result<Value, CompileError> {
        let decode_error = |error: LiteralError, text: Name| {
            let text = self.interner.lookup(text).to_owned();
            match error {
                LiteralError::IntOutOfRange => CompileError::IntegerOutOfRange { text, span },
                LiteralError::Malformed => CompileError::MalformedLiteral { text, span },
                LiteralError::FormattedString => CompileError::FormattedString { span },
                LiteralError::MixedBytes => CompileError::MixedBytes { span },
            }
        };

        match literal {
            Literal::None => Ok(Value::None),
            Literal::True => Ok(Value::Bool(true)),
            Literal::False => Ok(Value::Bool(false)),
            Literal::Int(text) => literal::decode_int(self.interner.lookup(text))
                .map(Value::Int)
                .map_err(|e| decode_error(e, text)),
            Literal::Float(text) => literal::decode_float(self.interner.lookup(text))
                .map(Value::Float)
                .map_err(|e| decode_error(e, text)),
            Literal::Imaginary(text) => literal::decode_imaginary(self.interner.lookup(text))
                .map(|im| Value::Complex { re: 0.0, im })
                .map_err(|e| decode_error(e, text)),
            Literal::Str(text) => {
                literal::decode_string(self.interner.lookup(text))
                    .map(Value::from)
                    .map_err(|e| decode_error(e, text))
            }
            Literal::Ellipsis => Err(CompileError::InvalidLiteral { span }),
        }
    }
}
