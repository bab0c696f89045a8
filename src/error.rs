use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read secrets directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read secret file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("secret file name is not valid UTF-8: {0}")]
    InvalidFileName(String),

    #[error("secret file {} is not valid UTF-8", path.display())]
    NonUtf8Value { path: PathBuf },

    #[error("cannot set environment variable '{key}': {reason}")]
    EnvironmentWrite { key: String, reason: String },

    #[error("no command specified")]
    NoCommand,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the failure happened while writing to the environment
    /// (as opposed to reading the secrets directory or one of its files).
    pub fn is_environment_write(&self) -> bool {
        matches!(self, Error::EnvironmentWrite { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
