//! Secret loading: mounted secret files into environment variables.
//!
//! One call makes a single linear pass over the secrets directory:
//! list, then for each file read, derive the key, report overrides and
//! write. The first failure stops the pass; keys written before it stay
//! written.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants::{LOG_OVERRIDES_OFF, LOG_OVERRIDES_VAR, SECRET_DIR};
use crate::core::env::Environment;
use crate::core::options::LoadOptions;
use crate::core::transform::derive_key;
use crate::core::types::{SecretKey, SecretName};
use crate::error::{Error, Result};

/// A secret read from disk. Contents are wiped when dropped.
pub struct SecretFile {
    /// Base file name, the raw key material.
    pub name: SecretName,
    pub path: PathBuf,
    contents: Zeroizing<Vec<u8>>,
}

impl SecretFile {
    /// Read a secret file in full.
    ///
    /// # Errors
    ///
    /// Returns `Error::FileRead` if the file cannot be read.
    pub fn read(name: SecretName, path: PathBuf) -> Result<Self> {
        let contents = fs::read(&path).map_err(|source| Error::FileRead {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            name,
            path,
            contents: Zeroizing::new(contents),
        })
    }

    /// The raw file contents, untrimmed.
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// The contents as an environment value, byte for byte.
    ///
    /// # Errors
    ///
    /// Off unix, values must be UTF-8; others fail with
    /// `Error::NonUtf8Value`.
    pub fn value(&self) -> Result<&OsStr> {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            Ok(OsStr::from_bytes(&self.contents))
        }

        #[cfg(not(unix))]
        {
            std::str::from_utf8(&self.contents)
                .map(OsStr::new)
                .map_err(|_| Error::NonUtf8Value {
                    path: self.path.clone(),
                })
        }
    }
}

impl std::fmt::Debug for SecretFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretFile")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("contents", &"<redacted>")
            .finish()
    }
}

/// One secret file exposed under one environment key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub file: SecretName,
    pub key: SecretKey,
}

/// What a load did. Purely informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Bindings in the order they were written.
    pub bindings: Vec<Binding>,
    /// Keys that replaced a non-empty value.
    pub overridden: Vec<SecretKey>,
    /// Whether override notifications were enabled for this load.
    pub overrides_logged: bool,
}

impl LoadReport {
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Loads every file of a secrets directory into an [`Environment`].
#[derive(Debug, Clone)]
pub struct SecretLoader {
    dir: PathBuf,
}

impl Default for SecretLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretLoader {
    /// Loader for the standard mount point, `/run/secrets`.
    pub fn new() -> Self {
        Self::with_dir(SECRET_DIR)
    }

    /// Loader for a custom secrets directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List secret file names, sorted.
    ///
    /// Returns `None` when the directory does not exist. Entries that
    /// resolve to directories (such as the `..data` link of a Kubernetes
    /// volume) are left out.
    ///
    /// # Errors
    ///
    /// Returns `Error::DirectoryAccess` if the directory exists but cannot
    /// be listed, and `Error::InvalidFileName` for a non-UTF-8 name.
    pub fn discover(&self) -> Result<Option<Vec<SecretName>>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "secrets directory absent");
                return Ok(None);
            }
            Err(source) => {
                return Err(Error::DirectoryAccess {
                    path: self.dir.clone(),
                    source,
                })
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::DirectoryAccess {
                path: self.dir.clone(),
                source,
            })?;

            let name = entry
                .file_name()
                .into_string()
                .map_err(|n| Error::InvalidFileName(n.to_string_lossy().into_owned()))?;

            // Follows symlinks; a dangling link is kept so the read reports it.
            if fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()) {
                debug!(name = %name, "skipping directory entry");
                continue;
            }

            names.push(name);
        }

        names.sort();
        Ok(Some(names))
    }

    /// Load all secrets into `env`.
    ///
    /// Override notifications are controlled by `SWARMED_LOG_OVERRIDES`
    /// as seen through `env`, read once at the start of the call.
    ///
    /// # Errors
    ///
    /// Returns the first directory, read or write failure. Nothing is
    /// rolled back.
    pub fn load_into<E: Environment>(
        &self,
        env: &mut E,
        opts: &LoadOptions,
    ) -> Result<LoadReport> {
        let overrides_logged = env.get(LOG_OVERRIDES_VAR).as_deref()
            != Some(OsStr::new(LOG_OVERRIDES_OFF));
        let mut report = LoadReport {
            overrides_logged,
            ..LoadReport::default()
        };

        let Some(names) = self.discover()? else {
            return Ok(report);
        };

        debug!(dir = %self.dir.display(), files = names.len(), "loading secrets");

        for name in names {
            let path = self.dir.join(&name);
            let secret = SecretFile::read(name, path)?;
            let key = derive_key(&secret.name, opts);

            debug!(file = %secret.name, key = %key, "derived key");

            if env.is_set(&key) {
                if overrides_logged {
                    warn!(key = %key, "env value overridden");
                }
                report.overridden.push(key.clone());
            }

            env.set(&key, secret.value()?)?;

            report.bindings.push(Binding {
                file: secret.name.clone(),
                key,
            });
        }

        debug!(
            loaded = report.len(),
            overridden = report.overridden.len(),
            "secrets loaded"
        );

        Ok(report)
    }
}
