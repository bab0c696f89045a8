//! Constants used throughout swarmed.
//!
//! Centralizes magic strings and naming rules.

/// Directory where container runtimes mount secrets, one file per secret.
pub const SECRET_DIR: &str = "/run/secrets";

/// Override-notification toggle. The literal value `false` disables the
/// notification; anything else (including unset) leaves it on.
pub const LOG_OVERRIDES_VAR: &str = "SWARMED_LOG_OVERRIDES";

/// Value of [`LOG_OVERRIDES_VAR`] that suppresses override notifications.
pub const LOG_OVERRIDES_OFF: &str = "false";

/// Log filter variable read by the binary.
pub const LOG_FILTER_VAR: &str = "SWARMED_LOG";

/// A segment beginning with this character is treated as a version marker.
pub const VERSION_MARKER: char = 'V';

/// Separator between the parts of a secret name.
///
/// Matching always tries the variants in [`Delimiter::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Underscore,
    Dash,
}

impl Delimiter {
    /// Trial order: underscore first, then dash.
    pub const ALL: [Delimiter; 2] = [Delimiter::Underscore, Delimiter::Dash];

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Underscore => '_',
            Delimiter::Dash => '-',
        }
    }
}
