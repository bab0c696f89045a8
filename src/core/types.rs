//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An environment variable name derived from a secret file name
/// (e.g., `REDIS_URL`).
pub type SecretKey = String;

/// The base name of a file in the secrets directory (e.g., `app_redis_url_v1`).
pub type SecretName = String;
