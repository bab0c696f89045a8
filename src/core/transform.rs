//! Key derivation: secret file name to environment variable name.
//!
//! The transform runs in three fixed phases:
//!
//! 1. upper-case the whole name
//! 2. strip `PREFIX_` or `PREFIX-` (first delimiter that matches)
//! 3. drop a trailing version segment (`_V...`, else `-V...`)
//!
//! ```
//! use swarmed::core::options::LoadOptions;
//! use swarmed::core::transform::derive_key;
//!
//! let opts = LoadOptions::new().prefix("app").remove_version_suffix(true);
//! assert_eq!(derive_key("app_redis_url_v1", &opts), "REDIS_URL");
//! ```

use crate::core::constants::{Delimiter, VERSION_MARKER};
use crate::core::options::LoadOptions;
use crate::core::types::SecretKey;

/// Derive the environment key for a secret file name.
pub fn derive_key(name: &str, opts: &LoadOptions) -> SecretKey {
    let upper = fold_case(name);

    let key = match opts.prefix_upper() {
        Some(prefix) => strip_prefix(&upper, prefix),
        None => upper.as_str(),
    };

    if opts.removes_version_suffix() {
        strip_version_suffix(key)
    } else {
        key.to_string()
    }
}

/// Upper-case `s` one character at a time.
///
/// Characters whose upper case is more than one character (`ß` -> `SS`)
/// are kept as they are, so the key never changes length.
pub fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

/// Remove `prefix` followed by a delimiter from the start of `key`.
///
/// `prefix` must already be upper-cased. Returns `key` unchanged when
/// neither `PREFIX_` nor `PREFIX-` matches.
pub fn strip_prefix<'a>(key: &'a str, prefix: &str) -> &'a str {
    for delim in Delimiter::ALL {
        if let Some(rest) = key
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(delim.as_char()))
        {
            return rest;
        }
    }
    key
}

/// Remove the final delimiter-separated segment if it starts with `V`.
///
/// Underscore is tried before dash, and only the first delimiter that
/// yields a version segment is used. A key without the delimiter is one
/// segment, so a key like `VAULT` strips down to the empty string.
pub fn strip_version_suffix(key: &str) -> SecretKey {
    for delim in Delimiter::ALL {
        let (head, last) = match key.rsplit_once(delim.as_char()) {
            Some((head, last)) => (head, last),
            None => ("", key),
        };
        if last.starts_with(VERSION_MARKER) {
            return head.to_string();
        }
    }
    key.to_string()
}
