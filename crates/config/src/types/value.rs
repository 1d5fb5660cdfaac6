//! Typed configuration values and type-directed parsing.
//!
//! Responsibilities:
//! - Define the `Value` enum storing resolved configuration values.
//! - Define `ValueKind` and the parsing rules for override strings.
//!
//! Does NOT handle:
//! - Override lookup or precedence (see the `loader` module).
//!
//! Invariants:
//! - Boolean literals parse case-insensitively ("true", "FALSE" are valid).
//! - Float parsing accepts exactly what `f64::from_str` accepts.
//! - String parsing never fails; the raw text is taken verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A typed configuration value.
///
/// Serialized untagged, so a resolved config exports as plain JSON scalars
/// rather than enum wrappers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Floating point number (rates, amounts).
    Float(f64),
    /// Free-form string (identifiers, ISO codes, symbols).
    Str(String),
}

impl Value {
    /// The kind of this value, used for type-directed override parsing.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
        }
    }

    /// Borrow the string contents if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric contents if this is a `Float` value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The flag contents if this is a `Bool` value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// The set of types a configuration value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Boolean flag.
    Bool,
    /// Floating point number.
    Float,
    /// Free-form string.
    Str,
}

impl ValueKind {
    /// Parse a raw override string into a value of this kind.
    ///
    /// Returns `None` when the text is not a valid literal of the kind,
    /// leaving error reporting to the caller.
    pub fn parse(self, raw: &str) -> Option<Value> {
        match self {
            ValueKind::Bool => {
                if raw.eq_ignore_ascii_case("true") {
                    Some(Value::Bool(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Some(Value::Bool(false))
                } else {
                    None
                }
            }
            ValueKind::Float => raw.parse::<f64>().ok().map(Value::Float),
            ValueKind::Str => Some(Value::Str(raw.to_string())),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "boolean",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
        };
        f.write_str(name)
    }
}
