//! Test support utilities for swarmed integration tests.
//!
//! Provides an isolated secrets directory and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::Path;

use tempfile::TempDir;

/// Test environment with an isolated secrets directory.
///
/// Child processes get `SWARMED_SECRETS_DIR` pointed at the temp dir, so
/// tests never touch `/run/secrets` and can run in parallel.
pub struct Test {
    pub secrets: TempDir,
}

impl Test {
    /// Create a test environment with an empty secrets directory.
    pub fn new() -> Self {
        let secrets = TempDir::new().expect("failed to create temp dir");
        Self { secrets }
    }

    /// Create a test environment with the given secret files.
    pub fn with_secrets(files: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, contents) in files {
            t.write(name, contents);
        }
        t
    }

    /// Write one secret file.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.secrets.path().join(name), contents)
            .expect("failed to write secret file");
    }

    pub fn dir(&self) -> &Path {
        self.secrets.path()
    }
}
