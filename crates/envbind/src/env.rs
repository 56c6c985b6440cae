//! Environment sources.
//!
//! Responsibilities:
//! - Define the [`EnvSource`] abstraction the binder reads from and the
//!   bootstrap merges into
//! - Provide [`ProcessEnv`] (the real process environment) and [`MapEnv`]
//!   (an in-memory map for tests and embedding)
//!
//! Does NOT handle:
//! - Parsing values into typed fields (see `binder::convert`)
//! - Reading `.env` files (see `binder::bootstrap`)
//!
//! Invariants:
//! - `set_if_unset` never replaces an existing entry
//! - `ProcessEnv::get` treats a non-Unicode value as unset; `set_if_unset`
//!   still sees the key as present and leaves it alone
//! - `ProcessEnv` writes delegate to [`std::env::set_var`], which panics on
//!   an empty key, `=` or NUL in the key, or NUL in the value; the bootstrap
//!   merge filters such entries before writing

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A readable, conditionally writable set of environment variables.
///
/// Reads resolve a key to its value if present. Writes only ever fill gaps:
/// [`EnvSource::set_if_unset`] is the sole mutation, which keeps merged
/// defaults from clobbering values the caller already controls.
pub trait EnvSource {
    /// Returns the value for `key`, or `None` if the key is unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value` only if `key` is currently unset.
    ///
    /// Returns `true` if the value was written, `false` if an existing
    /// entry was kept.
    fn set_if_unset(&mut self, key: &str, value: &str) -> bool;
}

/// The real process environment.
///
/// Reads go through [`std::env::var`], so a value that is not valid Unicode
/// reads as unset. Writes go through [`std::env::set_var`], which panics on
/// pairs the environment table cannot hold (an empty key, `=` or NUL in the
/// key, NUL in the value); the bootstrap merge filters its entries before
/// writing. Writes mutate the process-wide environment table and must be
/// sequenced before any other thread touches the environment; callers do
/// this by running the bootstrap merge once during startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set_if_unset(&mut self, key: &str, value: &str) -> bool {
        if std::env::var_os(key).is_some() {
            return false;
        }
        // SAFETY: callers sequence bootstrap writes before any other thread
        // reads or writes the process environment (see crate docs).
        unsafe { std::env::set_var(key, value) };
        true
    }
}

/// An in-memory environment backed by a [`HashMap`].
///
/// Useful for tests and for embedding the binder where touching the real
/// process environment is unwanted.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any existing entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Builder-style [`MapEnv::insert`].
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Number of variables currently set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_if_unset(&mut self, key: &str, value: &str) -> bool {
        match self.vars.entry(key.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_get_returns_inserted_value() {
        let env = MapEnv::new().with_var("HOST", "localhost");
        assert_eq!(env.get("HOST"), Some("localhost".to_string()));
        assert_eq!(env.get("PORT"), None);
    }

    #[test]
    fn test_map_env_insert_replaces_existing_value() {
        let mut env = MapEnv::new();
        env.insert("HOST", "first");
        env.insert("HOST", "second");
        assert_eq!(env.get("HOST"), Some("second".to_string()));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_map_env_set_if_unset_fills_gap_only() {
        let mut env = MapEnv::new();
        assert!(env.set_if_unset("PORT", "8080"));
        assert!(!env.set_if_unset("PORT", "9999"));
        assert_eq!(env.get("PORT"), Some("8080".to_string()));
    }

    #[test]
    fn test_map_env_starts_empty() {
        let env = MapEnv::new();
        assert!(env.is_empty());
        assert_eq!(env.len(), 0);
    }
}
