//! Error type for loading and querying a settings store.
//!
//! Only two things can go wrong: the file cannot be read, or a lookup asks for
//! a key the file never declared.  Malformed lines are not errors; the parser
//! skips them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::SettingsStore`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be opened or read.
    #[error("settings file not found or unreadable: {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No value is stored under the requested key.
    ///
    /// Carries the key exactly as the caller passed it.
    #[error("key '{0}' not found")]
    KeyNotFound(String),
}
