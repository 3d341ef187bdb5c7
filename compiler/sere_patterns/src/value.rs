//! Runtime values a match plan runs against.
//!
//! The executor only needs to observe structure, so values are plain owned
//! trees. Objects of user classes carry their class name and attributes;
//! instance checks and attribute access go through [`MatchEnv`] and default
//! to this representation.
//!
//! [`MatchEnv`]: crate::MatchEnv

use std::fmt;

use sere_ir::literal::StringValue;
use sere_ir::Name;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex { re: f64, im: f64 },
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    /// Entries in insertion order; keys are unique under [`Value::equals`].
    Dict(Vec<(Value, Value)>),
    Object(Object),
}

/// An instance of a user class.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub class: Name,
    pub attrs: Vec<(Name, Value)>,
}

impl Object {
    pub fn new(class: Name) -> Self {
        Object {
            class,
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: Name, value: Value) -> Self {
        self.attrs.push((name, value));
        self
    }

    pub fn attr(&self, name: Name) -> Option<&Value> {
        self.attrs
            .iter()
            .find_map(|(attr, value)| (*attr == name).then_some(value))
    }
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: impl Into<Vec<Value>>) -> Self {
        Value::List(items.into())
    }

    pub fn tuple(items: impl Into<Vec<Value>>) -> Self {
        Value::Tuple(items.into())
    }

    pub fn dict(entries: impl Into<Vec<(Value, Value)>>) -> Self {
        Value::Dict(entries.into())
    }

    /// Name of the builtin type, or `"object"` for user instances.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Complex { .. } => "complex",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Dict(_) => "dict",
            Value::Object(_) => "object",
        }
    }

    /// Numeric view used for cross-type comparison: `True == 1 == 1.0`.
    #[allow(clippy::cast_precision_loss, reason = "matches float promotion")]
    fn as_complex(&self) -> Option<(f64, f64)> {
        match self {
            Value::Bool(b) => Some((f64::from(u8::from(*b)), 0.0)),
            Value::Int(n) => Some((*n as f64, 0.0)),
            Value::Float(f) => Some((*f, 0.0)),
            Value::Complex { re, im } => Some((*re, *im)),
            _ => None,
        }
    }

    /// Equality as used by literal and value patterns.
    ///
    /// Numbers compare by value across `bool`, `int`, `float` and `complex`.
    /// Lists and tuples never equal each other.
    #[allow(clippy::float_cmp, reason = "exact equality is the semantics")]
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::None, Value::None) => true,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
            }
            (Value::Dict(a), Value::Dict(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter()
                            .any(|(other_key, other_value)| {
                                key.equals(other_key) && value.equals(other_value)
                            })
                    })
            }
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => match (self.as_complex(), other.as_complex()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Identity comparison used by `None`, `True` and `False` patterns.
    pub fn is_same_singleton(&self, other: &Value) -> bool {
        matches!(
            (self, other),
            (Value::None, Value::None)
                | (Value::Bool(true), Value::Bool(true))
                | (Value::Bool(false), Value::Bool(false))
        )
    }

    /// Elements when this value can be matched by a sequence pattern.
    ///
    /// Strings and bytes are sequences but never match one.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key by [`Value::equals`].
    pub fn dict_get(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Dict(entries) => entries
                .iter()
                .find_map(|(k, v)| k.equals(key).then_some(v)),
            _ => None,
        }
    }
}

impl From<StringValue> for Value {
    fn from(value: StringValue) -> Self {
        match value {
            StringValue::Text(text) => Value::Str(text),
            StringValue::Bytes(bytes) => Value::Bytes(bytes),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }

        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Complex { re, im } => write!(f, "({re:?}+{im:?}j)"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Bytes(b) => write!(f, "b{:?}", String::from_utf8_lossy(b)),
            Value::List(items) => {
                write!(f, "[")?;
                seq(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                seq(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Object(object) => write!(f, "<object {:?}>", object.class),
        }
    }
}
