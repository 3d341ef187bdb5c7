//! The executor's view of the surrounding program.

use sere_ir::ast::Expr;
use sere_ir::Name;

use crate::value::Value;
use crate::MatchError;

/// Names bound by a successful pattern, in the order they were bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(Name, Value)>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    pub fn get(&self, name: Name) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(bound, value)| (*bound == name).then_some(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(Name, Value)> {
        self.entries
    }

    pub(crate) fn bind(&mut self, name: Name, value: Value) {
        self.entries.push((name, value));
    }

    /// Checkpoint for discarding the bindings of a failed alternative.
    pub(crate) fn mark(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn truncate(&mut self, mark: usize) {
        self.entries.truncate(mark);
    }
}

/// Services a match plan needs from the program it runs in.
///
/// Only name resolution and guard evaluation are required. The class
/// hooks default to treating [`Value::Object`] as the only kind of instance,
/// with an object's class identified by the last component of the pattern's
/// class name.
pub trait MatchEnv {
    /// Resolve a dotted name used by a value pattern or a mapping key.
    fn lookup(&mut self, path: &[Name]) -> Option<Value>;

    /// Evaluate a guard with the case's bindings in scope.
    fn eval_guard(&mut self, guard: &Expr, bindings: &Bindings) -> Result<bool, MatchError>;

    /// Whether `path` names a class.
    fn is_class(&mut self, path: &[Name]) -> bool {
        let _ = path;
        true
    }

    fn is_instance(&mut self, value: &Value, class: &[Name]) -> bool {
        match (value, class.last()) {
            (Value::Object(object), Some(last)) => object.class == *last,
            _ => false,
        }
    }

    /// Attribute names positional sub-patterns map to, in order. `None`
    /// means the class accepts no positional sub-patterns.
    fn match_args(&mut self, class: &[Name]) -> Option<Vec<Name>> {
        let _ = class;
        None
    }

    fn get_attr(&mut self, value: &Value, attr: Name) -> Option<Value> {
        match value {
            Value::Object(object) => object.attr(attr).cloned(),
            _ => None,
        }
    }
}
