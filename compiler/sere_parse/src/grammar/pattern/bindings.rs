//! Validation of a parsed case pattern.
//!
//! Runs once per `case` after the pattern parsed cleanly. Problems are
//! reported without resynchronizing and the case is kept.

use rustc_hash::FxHashSet;
use sere_ir::ast::{BinaryOp, Expr, ExprKind, Literal, Pattern, PatternKind, UnaryOp};
use sere_ir::literal::{decode_float, decode_imaginary, decode_int, decode_string, StringValue};
use sere_ir::{Name, Span, StringInterner};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Report structural problems in `pattern`.
    pub(crate) fn validate_pattern(&mut self, pattern: &Pattern) {
        let mut checker = PatternChecker {
            interner: self.interner(),
            errors: Vec::new(),
        };
        let names = checker.bindings(pattern, false);
        checker.check_unique(&names);
        for error in checker.errors {
            self.report(error);
        }
    }
}

/// Identity of a literal mapping key, compared the way the keys compare at
/// run time: `'k'` and `"k"` are one key, and so are `1`, `0x1`, `1.0` and
/// `True`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum KeyValue {
    None,
    Int(i64),
    /// Bit pattern of a non-integral float.
    Real(u64),
    /// Bit patterns of the real and nonzero imaginary parts.
    Complex(u64, u64),
    Str(StringValue),
    /// Source text of a key that does not decode, e.g. an integer beyond
    /// `i64`. Such keys only collide when spelled identically.
    Text(Vec<KeyPart>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum KeyPart {
    Op(&'static str),
    Atom(Literal),
}

enum Number {
    Int(i64),
    Real(f64),
    Complex(f64, f64),
}

fn literal_key(expr: &Expr, interner: &StringInterner) -> KeyValue {
    let decoded = match &expr.kind {
        ExprKind::Literal(Literal::None) => Some(KeyValue::None),
        ExprKind::Literal(Literal::Str(text)) => decode_string(interner.lookup(*text))
            .ok()
            .map(KeyValue::Str),
        _ => number(expr, interner).map(number_key),
    };
    decoded.unwrap_or_else(|| {
        let mut parts = Vec::new();
        collect_key(expr, &mut parts);
        KeyValue::Text(parts)
    })
}

fn number(expr: &Expr, interner: &StringInterner) -> Option<Number> {
    match &expr.kind {
        ExprKind::Literal(Literal::Int(text)) => {
            decode_int(interner.lookup(*text)).ok().map(Number::Int)
        }
        ExprKind::Literal(Literal::Float(text)) => {
            decode_float(interner.lookup(*text)).ok().map(Number::Real)
        }
        ExprKind::Literal(Literal::Imaginary(text)) => decode_imaginary(interner.lookup(*text))
            .ok()
            .map(|im| Number::Complex(0.0, im)),
        ExprKind::Literal(Literal::True) => Some(Number::Int(1)),
        ExprKind::Literal(Literal::False) => Some(Number::Int(0)),
        ExprKind::UnaryOp {
            op: UnaryOp::Neg,
            operand,
        } => match number(operand, interner)? {
            Number::Int(n) => n.checked_neg().map(Number::Int),
            Number::Real(x) => Some(Number::Real(-x)),
            Number::Complex(re, im) => Some(Number::Complex(-re, -im)),
        },
        ExprKind::BinOp {
            op: op @ (BinaryOp::Add | BinaryOp::Sub),
            left,
            right,
        } => {
            #[allow(clippy::cast_precision_loss, reason = "complex parts are floats")]
            let re = match number(left, interner)? {
                Number::Int(n) => n as f64,
                Number::Real(x) => x,
                Number::Complex(..) => return None,
            };
            let Number::Complex(_, im) = number(right, interner)? else {
                return None;
            };
            Some(Number::Complex(re, if *op == BinaryOp::Sub { -im } else { im }))
        }
        _ => None,
    }
}

#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "exact integral floats compare equal to ints"
)]
fn number_key(number: Number) -> KeyValue {
    fn real(x: f64) -> KeyValue {
        if x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
            KeyValue::Int(x as i64)
        } else {
            KeyValue::Real(x.to_bits())
        }
    }
    match number {
        Number::Int(n) => KeyValue::Int(n),
        Number::Real(x) => real(x),
        Number::Complex(re, im) if im == 0.0 => real(re),
        // `-0.0 + 1j` equals `0.0 + 1j`.
        Number::Complex(re, im) => KeyValue::Complex((re + 0.0).to_bits(), im.to_bits()),
    }
}

fn collect_key(expr: &Expr, parts: &mut Vec<KeyPart>) {
    match &expr.kind {
        ExprKind::Literal(literal) => parts.push(KeyPart::Atom(*literal)),
        ExprKind::UnaryOp { op, operand } => {
            parts.push(KeyPart::Op(op.as_symbol()));
            collect_key(operand, parts);
        }
        ExprKind::BinOp { op, left, right } => {
            parts.push(KeyPart::Op(op.as_symbol()));
            collect_key(left, parts);
            collect_key(right, parts);
        }
        _ => {}
    }
}

struct PatternChecker<'a> {
    interner: &'a StringInterner,
    errors: Vec<ParseError>,
}

impl PatternChecker<'_> {
    /// Names bound by `pattern`, in source order, with the span of the
    /// sub-pattern binding each.
    ///
    /// `in_sequence` is set for direct elements of a sequence pattern, the
    /// only place a star pattern may appear.
    fn bindings(&mut self, pattern: &Pattern, in_sequence: bool) -> Vec<(Name, Span)> {
        match &pattern.kind {
            PatternKind::Capture(name) => vec![(*name, pattern.span)],
            PatternKind::Wildcard | PatternKind::Literal(_) | PatternKind::Value(_) => Vec::new(),
            PatternKind::Group(inner) => self.bindings(inner, false),
            PatternKind::Star(name) => {
                if !in_sequence {
                    self.error(
                        ParseErrorKind::InvalidPattern,
                        "star pattern outside a sequence pattern".to_string(),
                        pattern.span,
                    );
                }
                name.map(|name| vec![(name, pattern.span)]).unwrap_or_default()
            }
            PatternKind::Sequence(elements) => {
                let stars = elements
                    .iter()
                    .filter(|element| matches!(element.kind, PatternKind::Star(_)))
                    .count();
                if stars > 1 {
                    self.error(
                        ParseErrorKind::MultipleStarPatterns,
                        "multiple starred names in sequence pattern".to_string(),
                        pattern.span,
                    );
                }
                elements
                    .iter()
                    .flat_map(|element| self.bindings(element, true))
                    .collect()
            }
            PatternKind::Mapping { entries, rest } => {
                let mut seen_keys: FxHashSet<KeyValue> = FxHashSet::default();
                let mut names = Vec::new();
                for entry in entries {
                    if let PatternKind::Literal(key) = &entry.key.kind {
                        if !seen_keys.insert(literal_key(key, self.interner)) {
                            self.error(
                                ParseErrorKind::DuplicateMappingKey,
                                "mapping pattern checks duplicate key".to_string(),
                                entry.key.span,
                            );
                        }
                    }
                    names.extend(self.bindings(&entry.pattern, false));
                }
                if let Some(rest) = rest {
                    names.push((*rest, pattern.span));
                }
                names
            }
            PatternKind::Class {
                positional,
                keywords,
                ..
            } => {
                let mut seen_keywords = FxHashSet::default();
                let mut names: Vec<(Name, Span)> = positional
                    .iter()
                    .flat_map(|sub| self.bindings(sub, false))
                    .collect();
                for keyword in keywords {
                    if !seen_keywords.insert(keyword.name) {
                        self.error(
                            ParseErrorKind::DuplicateKeywordPattern,
                            format!(
                                "keyword `{}` repeated in class pattern",
                                self.interner.lookup(keyword.name)
                            ),
                            keyword.span,
                        );
                    }
                    names.extend(self.bindings(&keyword.pattern, false));
                }
                names
            }
            PatternKind::Or(alternatives) => self.or_bindings(pattern.span, alternatives),
            PatternKind::As { pattern: inner, name } => {
                let mut names = self.bindings(inner, false);
                names.push((*name, pattern.span));
                names
            }
        }
    }

    /// Every alternative must bind the same set of names. The first
    /// alternative's bindings stand for the whole or-pattern.
    fn or_bindings(&mut self, span: Span, alternatives: &[Pattern]) -> Vec<(Name, Span)> {
        let Some((first, rest)) = alternatives.split_first() else {
            return Vec::new();
        };
        let names = self.bindings(first, false);
        let expected: FxHashSet<Name> = names.iter().map(|(name, _)| *name).collect();

        let mut consistent = true;
        for alternative in rest {
            let alt_names = self.bindings(alternative, false);
            self.check_unique(&alt_names);
            let bound: FxHashSet<Name> = alt_names.iter().map(|(name, _)| *name).collect();
            consistent &= bound == expected;
        }
        if !consistent {
            self.error(
                ParseErrorKind::InconsistentPatternBindings,
                "alternative patterns bind different names".to_string(),
                span,
            );
        }
        names
    }

    fn check_unique(&mut self, names: &[(Name, Span)]) {
        let mut seen = FxHashSet::default();
        for (name, span) in names {
            if !seen.insert(*name) {
                self.error(
                    ParseErrorKind::DuplicateBinding,
                    format!(
                        "name `{}` is bound more than once in one pattern",
                        self.interner.lookup(*name)
                    ),
                    *span,
                );
            }
        }
    }

    fn error(&mut self, kind: ParseErrorKind, message: String, span: Span) {
        self.errors.push(ParseError::new(kind, message, span));
    }
}
