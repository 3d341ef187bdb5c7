//! Case pattern rendering.
//!
//! Sequence patterns always print with brackets, so `case a, b:` and
//! `case (a, b):` both come out as `case [a, b]:`.

use sere_ir::ast::{Pattern, PatternKind};

use super::Formatter;
use crate::emitter::Emitter;

impl<E: Emitter> Formatter<'_, E> {
    pub fn pattern(&mut self, pattern: &Pattern) {
        match &pattern.kind {
            PatternKind::Capture(name) => self.name(*name),
            PatternKind::Wildcard => self.text("_"),
            PatternKind::Literal(expr) => self.expr(expr),
            PatternKind::Value(name) => self.dotted(name),
            PatternKind::Group(inner) => {
                self.text("(");
                self.pattern(inner);
                self.text(")");
            }
            PatternKind::Sequence(elements) => {
                self.text("[");
                self.comma_list(elements, Self::pattern);
                self.text("]");
            }
            PatternKind::Mapping { entries, rest } => {
                self.text("{");
                self.comma_list(entries, |f, entry| {
                    f.pattern(&entry.key);
                    f.text(": ");
                    f.pattern(&entry.pattern);
                });
                if let Some(rest) = rest {
                    if !entries.is_empty() {
                        self.text(", ");
                    }
                    self.text("**");
                    self.name(*rest);
                }
                self.text("}");
            }
            PatternKind::Class {
                cls,
                positional,
                keywords,
            } => {
                self.dotted(cls);
                self.text("(");
                self.comma_list(positional, Self::pattern);
                if !positional.is_empty() && !keywords.is_empty() {
                    self.text(", ");
                }
                self.comma_list(keywords, |f, keyword| {
                    f.name(keyword.name);
                    f.text("=");
                    f.pattern(&keyword.pattern);
                });
                self.text(")");
            }
            PatternKind::Or(alternatives) => {
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        self.text(" | ");
                    }
                    self.pattern(alternative);
                }
            }
            PatternKind::As { pattern, name } => {
                self.pattern(pattern);
                self.text(" as ");
                self.name(*name);
            }
            PatternKind::Star(name) => {
                self.text("*");
                match name {
                    Some(name) => self.name(*name),
                    None => self.text("_"),
                }
            }
        }
    }
}
