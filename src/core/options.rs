//! Load configuration.

use crate::core::transform::fold_case;

/// Options controlling how secret file names become environment keys.
///
/// The default strips nothing: every file `name` is exposed as `NAME`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    prefix: Option<String>,
    remove_version_suffix: bool,
}

impl LoadOptions {
    /// Options with no prefix and no version-suffix stripping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip `PREFIX_` or `PREFIX-` from the start of every key.
    ///
    /// Matching is case-insensitive. An empty prefix disables stripping.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() {
            None
        } else {
            Some(fold_case(&prefix))
        };
        self
    }

    /// Drop a trailing `_V...` / `-V...` segment from every key.
    pub fn remove_version_suffix(mut self, enabled: bool) -> Self {
        self.remove_version_suffix = enabled;
        self
    }

    /// The configured prefix, already upper-cased.
    pub fn prefix_upper(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn removes_version_suffix(&self) -> bool {
        self.remove_version_suffix
    }
}
