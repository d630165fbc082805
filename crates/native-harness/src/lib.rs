// crates/native-harness/src/lib.rs
// ============================================================================
// Module: Native Harness
// Description: Fixture bootstrap for native-execution query runner tests.
// Purpose: Configure, start, provision, and verify native query runners.
// Dependencies: native-harness-core, native-harness-config, tempfile, serde_json
// ============================================================================

//! ## Overview
//! The harness turns environment configuration into a running native query
//! runner fixture:
//! - [`QueryRunnerFactory`] composes engine properties, resolves the shared
//!   data directory, selects execution modules, builds the runner, and
//!   provisions the fixture database.
//! - [`DataDirectoryProvider`] resolves the process-wide data directory
//!   exactly once, even under concurrent callers.
//! - [`ensure_database`] provisions a metastore database idempotently.
//! - [`assert_shuffle_metadata`] checks, after a workload ran, that the
//!   native shuffle manager is active and hands out bypass-merge-sort handles.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod data_dir;
mod error;
pub mod factory;
pub mod metastore;
pub mod modules;
pub mod shuffle;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod data_dir_tests;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use data_dir::DataDirectoryProvider;
pub use error::HarnessError;
pub use factory::NativeRunnerOptions;
pub use factory::QueryRunnerFactory;
pub use metastore::BootstrapOutcome;
pub use metastore::ensure_database;
pub use modules::select_execution_modules;
pub use shuffle::ShuffleReport;
pub use shuffle::ShuffleVerifier;
pub use shuffle::VerificationError;
pub use shuffle::assert_shuffle_metadata;
