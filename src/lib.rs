//! Swarmed - load mounted secret files into environment variables.
//!
//! Container runtimes such as Docker Swarm and Kubernetes deliver secrets
//! as files (`/run/secrets/db_password`) while most applications read
//! their configuration from the environment. `swarmed` bridges the two:
//! each file becomes one variable, named after the file in upper case.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Run a command with secrets loaded
//! │   ├── keys          # Dry run: list derived keys
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── constants     # Mount point, variable names, delimiters
//!     ├── options       # Prefix / version-suffix configuration
//!     ├── transform     # File name to key derivation
//!     ├── env           # Environment trait (process / in-memory)
//!     └── loader        # Directory scan and load
//! ```
//!
//! # Example
//!
//! ```no_run
//! fn main() -> swarmed::error::Result<()> {
//!     // /run/secrets/myapp_redis_url_v2 -> REDIS_URL
//!     swarmed::load_with("myapp", true)?;
//!     println!("{:?}", std::env::var("REDIS_URL"));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;

use crate::core::env::ProcessEnv;
use crate::core::loader::{LoadReport, SecretLoader};
use crate::core::options::LoadOptions;
use crate::error::Result;

/// Load every file in `/run/secrets` into the process environment.
///
/// Keys are the upper-cased file names. A missing directory is not an
/// error.
///
/// # Errors
///
/// Returns the first failure listing the directory, reading a file or
/// setting a variable.
pub fn load() -> Result<LoadReport> {
    load_with("", false)
}

/// Like [`load`], with prefix and version-suffix stripping.
///
/// With `prefix = "app"`, `app_redis_url` and `app-redis_url` both load
/// as `REDIS_URL`. With `remove_version_suffix`, `redis_url_v1` loads as
/// `REDIS_URL`. An empty prefix disables prefix stripping.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with(prefix: &str, remove_version_suffix: bool) -> Result<LoadReport> {
    let opts = LoadOptions::new()
        .prefix(prefix)
        .remove_version_suffix(remove_version_suffix);
    SecretLoader::new().load_into(&mut ProcessEnv, &opts)
}
