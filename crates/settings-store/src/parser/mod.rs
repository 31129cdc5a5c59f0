//! Pure parsing pass from settings text to a key/value map.
//!
//! # How a file is read (for beginners)
//!
//! The parser walks the lines once, top to bottom.  The only state it carries
//! from one line to the next is the *current key*: the key of the most recent
//! `KEY = VALUE` line.  A line without `=` is a continuation and its value is
//! filed under that current key.  The walk is written as an `Iterator::fold`
//! so the state is an explicit value passed from line to line rather than a
//! hidden field on some object.
//!
//! For each line:
//!
//! 1. Blank lines and comment lines are skipped.
//! 2. Every continuation marker (`+`) is removed and the line is trimmed.
//! 3. A line with `=` is split at the first `=` into key and value; the key
//!    becomes the current key.
//! 4. A line without `=` is a value for the current key.
//! 5. The value is classified (see [`literal`]) and merged into the map, or
//!    discarded if it is not a recognised literal.
//!
//! Nothing in this module returns an error.  Lines the parser cannot make
//! sense of are logged at `debug` level and dropped.

pub mod literal;

use std::collections::hash_map::{Entry, HashMap};

use tracing::{debug, trace};

use crate::config::SyntaxConfig;
use crate::domain::value::Value;

pub use literal::classify_value;

/// Normalises a key for storage and lookup: trimmed and lower-cased.
///
/// ```rust
/// assert_eq!(settings_store::normalize_key("  Binary_Yes "), "binary_yes");
/// ```
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Parses settings text into a map from normalised key to [`Value`].
///
/// `base_directory` replaces the placeholder inside quoted strings.  A
/// continuation line that appears before any `KEY = VALUE` line is filed under
/// the empty key `""`.
///
/// # Examples
///
/// ```rust
/// use settings_store::{parse_settings, SyntaxConfig, Value};
///
/// let text = "LIST = \"String1\"\n  +2\n  +True\n";
/// let map = parse_settings(text, "", &SyntaxConfig::default());
/// assert_eq!(
///     map["list"],
///     Value::List(vec![Value::from("String1"), Value::Integer(2), Value::Bool(true)])
/// );
/// ```
pub fn parse_settings(
    content: &str,
    base_directory: &str,
    syntax: &SyntaxConfig,
) -> HashMap<String, Value> {
    let state = content.lines().enumerate().fold(
        ParseState::default(),
        |mut state, (index, raw_line)| {
            state.consume_line(index + 1, raw_line, base_directory, syntax);
            state
        },
    );
    state.entries
}

/// Adds `value` under `key`, turning repeated keys into lists.
///
/// - absent key: `value` is stored as-is;
/// - key holding a list: `value` is appended;
/// - key holding a scalar: the scalar is replaced by `[scalar, value]`.
pub fn merge_entry(entries: &mut HashMap<String, Value>, key: String, value: Value) {
    match entries.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => {
            let existing = slot.get_mut();
            match existing {
                Value::List(items) => items.push(value),
                scalar => {
                    let first = std::mem::replace(scalar, Value::List(Vec::new()));
                    *scalar = Value::List(vec![first, value]);
                }
            }
        }
    }
}

/// Fold state threaded through [`parse_settings`].
#[derive(Default)]
struct ParseState {
    entries: HashMap<String, Value>,
    /// Key of the most recent `KEY = VALUE` line.
    current_key: String,
    seen_key: bool,
}

impl ParseState {
    fn consume_line(
        &mut self,
        line_no: usize,
        raw_line: &str,
        base_directory: &str,
        syntax: &SyntaxConfig,
    ) {
        if is_skippable(raw_line, syntax) {
            return;
        }

        let stripped: String = raw_line
            .chars()
            .filter(|&c| c != syntax.continuation_marker)
            .collect();
        let line = stripped.trim();

        let raw_value = match line.split_once('=') {
            Some((raw_key, raw_value)) => {
                self.current_key = normalize_key(raw_key);
                self.seen_key = true;
                raw_value.trim()
            }
            None => {
                if !self.seen_key {
                    debug!(line_no, "continuation line before any key; filing under empty key");
                }
                line
            }
        };

        match classify_value(raw_value, base_directory, syntax) {
            Some(value) => {
                trace!(line_no, key = %self.current_key, kind = value.kind(), "accepted value");
                merge_entry(&mut self.entries, self.current_key.clone(), value);
            }
            None => {
                debug!(line_no, key = %self.current_key, raw = raw_value, "discarding unrecognised value");
            }
        }
    }
}

fn is_skippable(raw_line: &str, syntax: &SyntaxConfig) -> bool {
    let trimmed = raw_line.trim();
    trimmed.is_empty() || trimmed.starts_with(syntax.comment_marker)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
