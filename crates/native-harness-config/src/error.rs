// crates/native-harness-config/src/error.rs
// ============================================================================
// Module: Config Errors
// Description: Error type for harness configuration loading.
// Purpose: Report configuration problems with the offending key.
// Dependencies: native-harness-core, thiserror
// ============================================================================

use native_harness_core::PropertyError;
use thiserror::Error;

/// Harness configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Every variant names the configuration key at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment value is not valid UTF-8.
    #[error("{name} must be valid UTF-8")]
    InvalidUtf8 {
        /// Environment variable name.
        name: String,
    },
    /// Endpoint override is not a usable TCP port.
    #[error("{name} must be a port number between 1 and 65535, got {value:?}")]
    InvalidPort {
        /// Environment variable name.
        name: String,
        /// Rejected value.
        value: String,
    },
    /// Required property is absent.
    #[error("{key} is required: {hint}")]
    MissingProperty {
        /// Missing key.
        key: String,
        /// How to supply the value.
        hint: String,
    },
}

impl From<PropertyError> for ConfigError {
    fn from(error: PropertyError) -> Self {
        match error {
            PropertyError::MissingProperty {
                key,
            } => Self::MissingProperty {
                key,
                hint: "not set in any configuration layer".to_string(),
            },
        }
    }
}
