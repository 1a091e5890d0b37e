//! Dynamic values exchanged with the manifest compiler.
//!
//! The compiler marshals arguments out of a loosely typed manifest language,
//! so every function receives its inputs as [`Value`] and matches on the
//! variants it accepts at its entry point.

use std::fmt;

/// A single manifest-level value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value
    Undef,
    /// Boolean literal
    Bool(bool),
    /// Signed 64-bit integer
    Int(i64),
    /// Double-precision float
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Ordered key/value pairs (insertion order preserved)
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Returns the manifest-level type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undef => "undef",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    /// Borrows the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Strict integer view: an integer value, or a string of decimal digits
    /// with an optional leading minus.
    ///
    /// Floats are rejected even when their value is integral; callers that
    /// accept them use [`Value::to_integer_truncating`] instead.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            // str::parse would also take a leading plus
            Value::Str(s) if !s.starts_with('+') => s.parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Coercing integer view: everything [`Value::to_integer`] accepts, plus
    /// finite floats truncated toward zero.
    ///
    /// Floats beyond the `i64` range saturate at the nearest representable
    /// bound rather than failing, so an absurdly large limit behaves as
    /// "unbounded" instead of raising.
    pub fn to_integer_truncating(&self) -> Option<i64> {
        match self {
            Value::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            other => other.to_integer(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key} => {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
