//! # settings-store
//!
//! Loader for line-oriented settings files with typed values and
//! case-insensitive key lookup.
//!
//! # File format (for beginners)
//!
//! A settings file is plain text.  Each meaningful line declares a key and a
//! value, and lines without an `=` add further values to the key declared
//! above them:
//!
//! ```text
//! # comments start with a hash
//! STRING_1       = "A simple string"
//! DATADIR        = "%BASEDIR%/Data/"
//! BINARY_YES     = yes
//! INTEGER_MINUS_3 = -3
//! LISTPARAMETER1 = "String1"
//!                  +"String2"
//!                  +"String3"
//! ```
//!
//! Values are typed when the file is read, never when they are looked up:
//!
//! - `yes` / `true` / `no` / `false` in any letter case become booleans.
//! - Text in double quotes becomes a string.  The token `%BASEDIR%` inside a
//!   string is replaced with the directory that contains the settings file.
//! - Digit sequences, optionally prefixed with `-`, become integers.
//! - Anything else is ignored.
//!
//! A key that appears more than once (directly or through continuation lines)
//! collects all of its values into a list, in file order.
//!
//! # Crate layout
//!
//! - **`domain`** – The [`Value`] type that every lookup returns.
//! - **`parser`** – The pure text-to-map parsing pass.  No I/O.
//! - **`store`** – [`SettingsStore`], which reads a file and answers lookups.
//! - **`config`** – [`SyntaxConfig`], the lexical markers the parser uses.
//! - **`error`** – [`SettingsError`].
//!
//! # Example
//!
//! ```rust
//! use settings_store::{SettingsStore, Value};
//!
//! let store = SettingsStore::from_source("BINARY_YES = yes\nCOUNT = 20\n", "");
//! assert_eq!(store.get("binary_yes").unwrap(), &Value::Bool(true));
//! assert_eq!(store.get(" Count ").unwrap().as_integer(), Some(20));
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod store;

// Re-export the most-used types at the crate root so callers can write
// `settings_store::Value` instead of `settings_store::domain::value::Value`.
pub use config::{SyntaxConfig, SyntaxConfigError};
pub use domain::value::Value;
pub use error::SettingsError;
pub use parser::{classify_value, normalize_key, parse_settings};
pub use store::SettingsStore;
