//! The typed value stored under each settings key.
//!
//! # Why an enum? (for beginners)
//!
//! A settings file mixes booleans, integers, strings, and lists of those.  In
//! Rust the natural way to say "one of these shapes" is an `enum` whose
//! variants carry data.  Callers must `match` on it (or use one of the `as_*`
//! helpers) before they can use the inner value, so a string can never be
//! mistaken for an integer at run time.

use std::fmt;

/// A typed setting value.
///
/// A key that occurs once in the file holds a scalar (`Bool`, `Integer`, or
/// `String`).  A key that occurs several times holds a `List` of the values in
/// the order they were read.  Lists produced by the parser never contain other
/// lists.
///
/// # Examples
///
/// ```rust
/// use settings_store::Value;
///
/// let v = Value::List(vec![Value::from("String1"), Value::from(2), Value::from(true)]);
/// assert_eq!(v.as_list().map(|items| items.len()), Some(3));
/// assert_eq!(v.to_string(), r#"["String1", 2, true]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `yes` / `true` / `no` / `false` in the file.
    Bool(bool),
    /// A decimal integer, optionally negative.
    Integer(i64),
    /// A double-quoted string with the quotes removed.
    String(String),
    /// All values of a key that was declared more than once.
    List(Vec<Value>),
}

impl Value {
    /// Returns the boolean if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the items if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    /// Renders strings in double quotes and lists in brackets, e.g.
    /// `["String1", 2, true]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
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
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
