//! Environment variable stores.
//!
//! The loader never touches `std::env` directly; it writes through an
//! [`Environment`] so callers decide whether secrets land in the real
//! process environment or in an isolated map.
//!
//! Values are `OsStr`, like the platform environment itself, so secrets
//! that are not UTF-8 (DER certificates, keystores) pass through unchanged.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

use crate::error::{Error, Result};

/// A mutable key/value store shaped like a process environment.
pub trait Environment {
    /// Current value of `key`, if set.
    fn get(&self, key: &str) -> Option<OsString>;

    /// Set `key` to `value`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::EnvironmentWrite` if the pair cannot be stored.
    fn set(&mut self, key: &str, value: &OsStr) -> Result<()>;

    /// True when `key` holds a non-empty value.
    fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// Check that a key/value pair is acceptable to the platform environment.
///
/// # Errors
///
/// Returns `Error::EnvironmentWrite` for an empty key, a key containing
/// `=` or NUL, or a value containing NUL.
pub fn validate_pair(key: &str, value: &OsStr) -> Result<()> {
    let reason = if key.is_empty() {
        "empty key"
    } else if key.contains('=') {
        "key contains '='"
    } else if key.contains('\0') {
        "key contains NUL"
    } else if value.as_encoded_bytes().contains(&0) {
        "value contains NUL"
    } else {
        return Ok(());
    };

    Err(Error::EnvironmentWrite {
        key: key.to_string(),
        reason: reason.to_string(),
    })
}

/// The real, process-wide environment.
///
/// Writes are unsynchronized: load secrets once at startup, before other
/// threads start reading configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        if validate_pair(key, OsStr::new("")).is_err() {
            return None;
        }
        std::env::var_os(key)
    }

    fn set(&mut self, key: &str, value: &OsStr) -> Result<()> {
        validate_pair(key, value)?;
        std::env::set_var(key, value);
        Ok(())
    }
}

/// An in-memory environment, for tests and dry runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, OsString>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<OsString>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MemoryEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &OsStr) -> Result<()> {
        validate_pair(key, value)?;
        self.vars.insert(key.to_string(), value.to_os_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env_set_get() {
        let mut env = MemoryEnv::new();
        env.set("DB_PASSWORD", OsStr::new("hunter2")).unwrap();
        assert_eq!(env.get("DB_PASSWORD").as_deref(), Some(OsStr::new("hunter2")));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_is_set_ignores_empty_values() {
        let env: MemoryEnv = [("EMPTY", ""), ("FULL", "x")].into_iter().collect();
        assert!(!env.is_set("EMPTY"));
        assert!(env.is_set("FULL"));
        assert!(!env.is_set("MISSING"));
    }

    #[test]
    fn test_rejects_invalid_pairs() {
        let mut env = MemoryEnv::new();
        for (key, value) in [("", "v"), ("A=B", "v"), ("A\0B", "v"), ("KEY", "a\0b")] {
            let err = env.set(key, OsStr::new(value)).unwrap_err();
            assert!(err.is_environment_write(), "expected write error for {key:?}");
        }
        assert!(env.is_empty());
    }

    #[test]
    fn test_value_kept_verbatim() {
        let mut env = MemoryEnv::new();
        env.set("CERT", OsStr::new("  line1\nline2\n\n")).unwrap();
        assert_eq!(
            env.get("CERT").as_deref(),
            Some(OsStr::new("  line1\nline2\n\n"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_kept_verbatim() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let bytes = [0x30, 0x82, 0xff, 0x01];
        let mut env = MemoryEnv::new();
        env.set("KEYSTORE", OsStr::from_bytes(&bytes)).unwrap();
        assert_eq!(env.get("KEYSTORE").map(OsStringExt::into_vec), Some(bytes.to_vec()));
    }

    #[test]
    fn test_process_env_round_trip() {
        let mut env = ProcessEnv;
        env.set("SWARMED_TEST_PROCESS_ENV", OsStr::new("value")).unwrap();
        assert_eq!(
            env.get("SWARMED_TEST_PROCESS_ENV").as_deref(),
            Some(OsStr::new("value"))
        );
    }

    #[test]
    fn test_process_env_rejects_instead_of_panicking() {
        let mut env = ProcessEnv;
        assert!(env.set("", OsStr::new("value")).is_err());
        assert!(env.set("BAD=KEY", OsStr::new("value")).is_err());
        assert_eq!(env.get("BAD=KEY"), None);
    }
}
