// crates/native-harness/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Fatal setup errors raised while bootstrapping fixtures.
// Purpose: Surface configuration, I/O, metastore, and runner failures with cause.
// Dependencies: native-harness-core, native-harness-config, thiserror
// ============================================================================

use native_harness_config::ConfigError;
use native_harness_core::MetastoreError;
use native_harness_core::RunnerError;
use thiserror::Error;

/// Fatal fixture setup errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - None of these are retried; each aborts fixture setup.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Configuration is missing or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        /// Operation that failed.
        context: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Metastore could not provision the fixture database.
    #[error("metastore setup failed for database {database}: {source}")]
    Metastore {
        /// Database being provisioned.
        database: String,
        /// Underlying metastore error.
        source: MetastoreError,
    },
    /// Query runner could not be constructed or configured.
    #[error(transparent)]
    Runner(#[from] RunnerError),
}
