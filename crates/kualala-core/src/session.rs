//! Session flags and the durable flag store.
//!
//! Only the dark-mode preference survives a reload. It is stored as the
//! string `"true"` or `"false"` under [`DARK_MODE_KEY`]; anything else,
//! including a missing key, reads as light mode.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StorageError;

/// Storage key of the dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Durable per-browser key/value store.
///
/// The browser implementation is backed by `localStorage`;
/// [`MemoryFlagStore`] serves hosts without one and tests.
pub trait FlagStore {
    /// Reads a value. Unavailable storage reads as absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Writes a value synchronously.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Encodes a boolean flag the way it is stored.
pub fn encode_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Decodes a stored flag. Only the exact string `"true"` is truthy.
pub fn decode_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Session-wide booleans shared by every screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub is_authenticated: bool,
    pub is_dark_mode: bool,
}

impl SessionFlags {
    /// Reads the persisted dark-mode flag once. Authentication always
    /// starts signed out.
    pub fn load(store: &(impl FlagStore + ?Sized)) -> Self {
        let stored = store.read(DARK_MODE_KEY);
        Self {
            is_authenticated: false,
            is_dark_mode: decode_flag(stored.as_deref()),
        }
    }
}

/// In-memory [`FlagStore`].
///
/// Writes can be made to fail with [`MemoryFlagStore::fail_writes`] to
/// exercise the rollback path.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    values: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Makes every subsequent write fail (or succeed again).
    pub fn fail_writes(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl FlagStore for MemoryFlagStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_flag() {
        assert!(decode_flag(Some("true")));
        assert!(!decode_flag(Some("false")));
        assert!(!decode_flag(Some("TRUE")));
        assert!(!decode_flag(Some("1")));
        assert!(!decode_flag(None));
    }

    #[test]
    fn test_load_defaults_to_light() {
        let flags = SessionFlags::load(&MemoryFlagStore::new());
        assert_eq!(flags, SessionFlags::default());
    }

    #[test]
    fn test_load_reads_dark_mode_only() {
        let store = MemoryFlagStore::with(DARK_MODE_KEY, "true");
        let flags = SessionFlags::load(&store);
        assert!(flags.is_dark_mode);
        assert!(!flags.is_authenticated);
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let store = MemoryFlagStore::new();
        store.fail_writes(true);
        assert!(store.write(DARK_MODE_KEY, "true").is_err());
        assert_eq!(store.read(DARK_MODE_KEY), None);

        store.fail_writes(false);
        assert!(store.write(DARK_MODE_KEY, "true").is_ok());
        assert_eq!(store.read(DARK_MODE_KEY).as_deref(), Some("true"));
    }
}
