//! Domain types for settings-store.
//!
//! Nothing in here touches the file system; the types can be built and
//! inspected without a settings file on disk.

/// Typed setting value — the result of every lookup.
///
/// See [`value::Value`] for the main type.
pub mod value;
