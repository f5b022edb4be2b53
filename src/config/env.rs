//! Environment variable lookup.
//!
//! The resolver never reads process state directly; it is handed an
//! [`EnvSource`] so tests can supply a fixed set of variables.

use std::collections::HashMap;

/// Source of environment-style key/value overrides.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the value of `key` only if it is set and non-empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// Reads variables from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset.
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
