//! The settings store: a loaded file plus case-insensitive lookup.
//!
//! A [`SettingsStore`] is built by reading exactly one settings file.  After
//! construction it is read-only; [`SettingsStore::reload`] replaces the whole
//! mapping rather than merging into it.
//!
//! # Base directory
//!
//! The directory part of the path passed to [`SettingsStore::load`] is kept as
//! the *base directory* and substituted for `%BASEDIR%` in quoted strings.
//! The path is used as given (it is not canonicalised), so loading
//! `"example.ini"` gives an empty base directory and loading
//! `"conf/example.ini"` gives `"conf"`.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::SyntaxConfig;
use crate::domain::value::Value;
use crate::error::SettingsError;
use crate::parser::{normalize_key, parse_settings};

/// Typed settings loaded from one file.
///
/// # Examples
///
/// ```rust
/// use settings_store::{SettingsStore, Value};
///
/// let store = SettingsStore::from_source(
///     "STRING_1 = \"A simple string\"\nLIST = 1\n +\"String2\"\n",
///     "",
/// );
/// assert_eq!(store.get("String_1").unwrap().as_str(), Some("A simple string"));
/// assert_eq!(store.get("list").unwrap().as_list().map(<[Value]>::len), Some(2));
/// assert!(store.get("missing").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsStore {
    source_path: Option<PathBuf>,
    base_directory: String,
    entries: HashMap<String, Value>,
}

impl SettingsStore {
    /// Reads and parses the settings file at `path` with the standard syntax.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::FileNotFound`] if the file cannot be opened or
    /// read.  Malformed lines never cause an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::load_with(path, &SyntaxConfig::default())
    }

    /// Like [`load`](Self::load), using the markers in `syntax`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::FileNotFound`] if the file cannot be opened or
    /// read.
    pub fn load_with(path: impl AsRef<Path>, syntax: &SyntaxConfig) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = match read_settings_file(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), "failed to load settings: {e}");
                return Err(e);
            }
        };

        let base_directory = base_directory_of(path);
        let entries = parse_settings(&content, &base_directory, syntax);
        info!(
            path = %path.display(),
            base_directory = %base_directory,
            entries = entries.len(),
            "loaded settings"
        );

        Ok(Self {
            source_path: Some(path.to_path_buf()),
            base_directory,
            entries,
        })
    }

    /// Builds a store from in-memory settings text.
    ///
    /// `base_directory` is substituted for `%BASEDIR%` exactly as if the text
    /// had been read from a file in that directory.
    pub fn from_source(content: &str, base_directory: impl Into<String>) -> Self {
        Self::from_source_with(content, base_directory, &SyntaxConfig::default())
    }

    /// Like [`from_source`](Self::from_source), using the markers in `syntax`.
    pub fn from_source_with(
        content: &str,
        base_directory: impl Into<String>,
        syntax: &SyntaxConfig,
    ) -> Self {
        let base_directory = base_directory.into();
        let entries = parse_settings(content, &base_directory, syntax);
        Self {
            source_path: None,
            base_directory,
            entries,
        }
    }

    /// Discards the current settings and loads `path` in their place.
    ///
    /// On failure the store keeps its previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::FileNotFound`] if the file cannot be opened or
    /// read.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        *self = Self::load(path)?;
        Ok(())
    }

    /// Looks up `key` after trimming and lower-casing it.
    ///
    /// The value is returned exactly as it was classified at load time.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::KeyNotFound`] carrying `key` as passed in.
    pub fn get(&self, key: &str) -> Result<&Value, SettingsError> {
        self.entries
            .get(&normalize_key(key))
            .ok_or_else(|| SettingsError::KeyNotFound(key.to_string()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalised keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The path this store was loaded from, or `None` for
    /// [`from_source`](Self::from_source) stores.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn base_directory(&self) -> &str {
        &self.base_directory
    }
}

/// Reads the whole file, releasing the handle before parsing starts.
///
/// Invalid UTF-8 is replaced rather than rejected.
fn read_settings_file(path: &Path) -> Result<String, SettingsError> {
    let not_found = |source| SettingsError::FileNotFound {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(not_found)?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Directory portion of `path`, or `""` when it has none.
fn base_directory_of(path: &Path) -> String {
    path.parent()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── base_directory_of ─────────────────────────────────────────────────────

    #[test]
    fn test_base_directory_of_bare_file_name_is_empty() {
        assert_eq!(base_directory_of(Path::new("example.ini")), "");
    }

    #[test]
    fn test_base_directory_of_relative_path() {
        assert_eq!(base_directory_of(Path::new("conf/app/example.ini")), "conf/app");
    }

    #[test]
    fn test_base_directory_of_absolute_path() {
        assert_eq!(base_directory_of(Path::new("/etc/app/example.ini")), "/etc/app");
        assert_eq!(base_directory_of(Path::new("/example.ini")), "/");
    }

    // ── get / lookup helpers ──────────────────────────────────────────────────

    #[test]
    fn test_get_is_case_and_whitespace_insensitive() {
        // Arrange
        let store = SettingsStore::from_source("BINARY_YES = yes\n", "");

        // Act / Assert
        for key in ["Binary_Yes", "binary_yes", " BINARY_YES "] {
            assert_eq!(store.get(key).expect("present"), &Value::Bool(true), "key {key:?}");
        }
    }

    #[test]
    fn test_get_absent_key_carries_requested_key() {
        let store = SettingsStore::from_source("A = 1\n", "");

        let err = store.get(" NonExistingKey").unwrap_err();

        assert!(matches!(err, SettingsError::KeyNotFound(ref k) if k == " NonExistingKey"));
    }

    #[test]
    fn test_contains_key_normalises() {
        let store = SettingsStore::from_source("Mixed_Case = 1\n", "");
        assert!(store.contains_key("MIXED_CASE"));
        assert!(!store.contains_key("other"));
    }

    #[test]
    fn test_len_counts_only_effective_keys() {
        let store = SettingsStore::from_source("A = 1\nB = junk\nC = \"x\"\n +2\n", "");
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());

        let mut keys: Vec<&str> = store.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_source_yields_empty_store() {
        let store = SettingsStore::from_source("# nothing here\n", "");
        assert!(store.is_empty());
        assert_eq!(store.source_path(), None);
    }

    #[test]
    fn test_from_source_records_base_directory() {
        let store = SettingsStore::from_source("D = \"%BASEDIR%/Data/\"\n", "/srv");
        assert_eq!(store.base_directory(), "/srv");
        assert_eq!(store.get("d").unwrap(), &Value::from("/srv/Data/"));
    }

    #[test]
    fn test_from_source_with_custom_syntax() {
        let syntax = SyntaxConfig {
            continuation_marker: '&',
            ..SyntaxConfig::default()
        };
        let store = SettingsStore::from_source_with("L = 1\n &+2\n", "", &syntax);
        // '+' is not stripped under this syntax, so "+2" is not an integer
        assert_eq!(store.get("l").unwrap(), &Value::Integer(1));
    }

    // ── load errors ───────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_file_returns_file_not_found() {
        let result = SettingsStore::load("/nonexistent/path/that/cannot/exist/example.ini");
        assert!(matches!(result, Err(SettingsError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_directory_returns_file_not_found() {
        // Opening succeeds on some platforms but reading a directory never does
        let result = SettingsStore::load(std::env::temp_dir());
        assert!(matches!(result, Err(SettingsError::FileNotFound { .. })));
    }

    #[test]
    fn test_store_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SettingsStore>();
    }
}
