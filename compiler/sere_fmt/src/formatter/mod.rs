//! Core formatting engine.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Formatter` state and shared helpers
//! - `expr.rs`: expressions, call arguments and parameter lists
//! - `patterns.rs`: case patterns
//! - `stmt.rs`: statements and blocks

mod expr;
mod patterns;
mod stmt;

use sere_ir::ast::DottedName;
use sere_ir::{Name, StringInterner};

use crate::emitter::{Emitter, StringEmitter};

/// Walks a tree and writes its canonical text to an emitter.
pub struct Formatter<'a, E: Emitter = StringEmitter> {
    interner: &'a StringInterner,
    out: E,
    indent: usize,
}

impl<'a, E: Emitter> Formatter<'a, E> {
    pub fn new(interner: &'a StringInterner, out: E) -> Self {
        Formatter {
            interner,
            out,
            indent: 0,
        }
    }

    /// Consume the formatter, returning its emitter.
    pub fn into_emitter(self) -> E {
        self.out
    }

    #[inline]
    fn text(&mut self, text: &str) {
        self.out.emit(text);
    }

    #[inline]
    fn name(&mut self, name: Name) {
        let text = self.interner.lookup(name);
        self.out.emit(text);
    }

    fn dotted(&mut self, name: &DottedName) {
        for (i, part) in name.parts.iter().enumerate() {
            if i > 0 {
                self.text(".");
            }
            self.name(*part);
        }
    }

    /// Emit `items` separated by `, `.
    fn comma_list<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.text(", ");
            }
            each(self, item);
        }
    }
}
