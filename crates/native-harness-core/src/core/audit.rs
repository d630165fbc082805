// crates/native-harness-core/src/core/audit.rs
// ============================================================================
// Module: Harness Audit Events
// Description: Structured events emitted while bootstrapping fixtures.
// Purpose: Give audit sinks a typed, serializable record of harness actions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every step the harness takes while building a fixture is described by one
//! [`HarnessEvent`]. Events are plain data; sinks decide where they go.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use serde::Serialize;

// ============================================================================
// SECTION: Event Types
// ============================================================================

/// Origin of the resolved base data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataDirectorySource {
    /// Taken from the configured directory override.
    Override,
    /// Freshly created temporary directory.
    Temporary,
}

/// Harness audit event.
///
/// # Invariants
/// - Events describe completed actions; failures are reported through errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HarnessEvent {
    /// Base data directory was resolved for the process.
    DataDirectoryResolved {
        /// Resolved directory.
        path: PathBuf,
        /// Where the directory came from.
        source: DataDirectorySource,
    },
    /// Fixture database is present in the metastore.
    DatabaseEnsured {
        /// Database name.
        name: String,
        /// True when this call created the database.
        created: bool,
    },
    /// Query runner was constructed.
    RunnerCreated {
        /// Default catalog name.
        catalog: String,
        /// Execution module labels in installation order.
        modules: Vec<&'static str>,
    },
    /// Function namespace manager was registered on a runner.
    FunctionNamespaceLoaded {
        /// Namespace catalog name.
        namespace: String,
    },
    /// Shuffle metadata verification passed.
    ShuffleVerified {
        /// Number of partitions checked.
        partitions: usize,
    },
}

impl HarnessEvent {
    /// Returns a stable label for the event kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DataDirectoryResolved { .. } => "data_directory_resolved",
            Self::DatabaseEnsured { .. } => "database_ensured",
            Self::RunnerCreated { .. } => "runner_created",
            Self::FunctionNamespaceLoaded { .. } => "function_namespace_loaded",
            Self::ShuffleVerified { .. } => "shuffle_verified",
        }
    }
}
