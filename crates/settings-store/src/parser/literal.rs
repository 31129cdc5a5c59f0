//! Classification of a single value token into a typed [`Value`].
//!
//! The checks run in a fixed order and the first match wins:
//!
//! 1. boolean literal (`yes`, `true`, `no`, `false`, any ASCII case)
//! 2. double-quoted string
//! 3. decimal integer, optionally negative
//!
//! A token matching none of them is discarded by returning `None`.

use crate::config::SyntaxConfig;
use crate::domain::value::Value;

const TRUE_LITERALS: [&str; 2] = ["yes", "true"];
const FALSE_LITERALS: [&str; 2] = ["no", "false"];

/// Classifies a trimmed value token.
///
/// Occurrences of the configured base-directory placeholder inside a quoted
/// string are replaced with `base_directory`.
///
/// The boolean check sees the token with its quotes still attached, so the
/// quoted token `"yes"` is the string `yes`, not a boolean.
///
/// # Examples
///
/// ```rust
/// use settings_store::{classify_value, SyntaxConfig, Value};
///
/// let syntax = SyntaxConfig::default();
/// assert_eq!(classify_value("True", "", &syntax), Some(Value::Bool(true)));
/// assert_eq!(classify_value("-40", "", &syntax), Some(Value::Integer(-40)));
/// assert_eq!(
///     classify_value("\"%BASEDIR%/Data/\"", "/srv", &syntax),
///     Some(Value::from("/srv/Data/"))
/// );
/// assert_eq!(classify_value("bare words", "", &syntax), None);
/// ```
pub fn classify_value(raw: &str, base_directory: &str, syntax: &SyntaxConfig) -> Option<Value> {
    if TRUE_LITERALS.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        return Some(Value::Bool(true));
    }
    if FALSE_LITERALS.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        return Some(Value::Bool(false));
    }
    if let Some(inner) = unquote(raw) {
        return Some(Value::String(substitute_base_dir(
            inner,
            &syntax.base_dir_placeholder,
            base_directory,
        )));
    }
    parse_integer(raw).map(Value::Integer)
}

/// Strips one pair of surrounding double quotes.
///
/// A lone `"` is not a quoted string.
fn unquote(raw: &str) -> Option<&str> {
    if raw.len() < 2 {
        return None;
    }
    raw.strip_prefix('"')?.strip_suffix('"')
}

fn substitute_base_dir(inner: &str, placeholder: &str, base_directory: &str) -> String {
    if inner.contains(placeholder) {
        inner.replace(placeholder, base_directory)
    } else {
        inner.to_string()
    }
}

/// Parses `[-]digits` into an `i64`.
///
/// Only ASCII digits are accepted.  Values outside the `i64` range yield
/// `None` and are discarded like any other unrecognised token.
fn parse_integer(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
