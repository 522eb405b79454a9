//! Configuration for academics service module

use serde::Deserialize;

/// Academics service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum accepted password length for new accounts
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Emit audit events for administrative mutations
    #[serde(default = "default_true")]
    pub enable_audit_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            enable_audit_events: true,
        }
    }
}

fn default_min_password_length() -> usize {
    8
}

fn default_true() -> bool {
    true
}
