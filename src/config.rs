//! Interpreter configuration.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interpreter configuration. [Default] is the permissive preset: no
/// checksum requirement and no speed watch.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Reject sentences whose `*hh` trailer does not match the computed
    /// checksum, before any decoding takes place.
    pub require_checksum: bool,
    /// When set, a speed limit event is raised right after any speed event
    /// whose converted value exceeds this threshold [mph].
    pub speed_limit_mph: Option<f64>,
}

impl Config {
    /// Preset that enforces the checksum trailer on every sentence.
    pub fn with_checksum() -> Self {
        Self {
            require_checksum: true,
            ..Default::default()
        }
    }
}
