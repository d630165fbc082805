// crates/native-harness-core/src/interfaces/mod.rs
// ============================================================================
// Module: Native Harness Interfaces
// Description: Collaborator contracts consumed by the native harness.
// Purpose: Decouple fixture bootstrap from the engine, metastore, and shuffle.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The harness never implements the query engine, the metastore, or the
//! shuffle manager. It reaches them through the traits in this module, so the
//! same bootstrap and verification code runs against a live engine or the
//! in-memory doubles in [`crate::runtime`].
//!
//! All collaborator traits are `Send + Sync`; fixtures are shared across test
//! threads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::ComposedConfig;
use crate::core::ConfigLayer;
use crate::core::DatabaseDescriptor;
use crate::core::ExecutionModule;
use crate::core::HarnessEvent;
use crate::core::MetastoreContext;
use crate::core::PartitionId;
use crate::core::ShuffleHandle;
use crate::core::ShuffleManagerKind;

// ============================================================================
// SECTION: Metastore
// ============================================================================

/// Metastore errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetastoreError {
    /// A database with the same name already exists.
    #[error("database already exists: {name}")]
    AlreadyExists {
        /// Conflicting database name.
        name: String,
    },
    /// Metastore could not serve the request.
    #[error("metastore unavailable: {0}")]
    Unavailable(String),
}

/// Catalog service storing database metadata.
pub trait Metastore: Send + Sync {
    /// Looks up a database by name.
    ///
    /// # Errors
    ///
    /// Returns [`MetastoreError`] when the lookup cannot be served.
    fn get_database(
        &self,
        ctx: &MetastoreContext,
        name: &str,
    ) -> Result<Option<DatabaseDescriptor>, MetastoreError>;

    /// Creates a database.
    ///
    /// # Errors
    ///
    /// Returns [`MetastoreError::AlreadyExists`] when the name is taken and
    /// [`MetastoreError::Unavailable`] for any other failure.
    fn create_database(
        &self,
        ctx: &MetastoreContext,
        database: &DatabaseDescriptor,
    ) -> Result<(), MetastoreError>;
}

// ============================================================================
// SECTION: Shuffle
// ============================================================================

/// Shuffle manager observed by the harness.
pub trait ShuffleManager: Send + Sync {
    /// Returns the implementation tag of this manager.
    fn kind(&self) -> ShuffleManagerKind;

    /// Returns a snapshot of every partition the manager knows about.
    fn all_partitions(&self) -> BTreeSet<PartitionId>;

    /// Returns the handle for `partition`, if the manager has one.
    fn shuffle_handle(&self, partition: PartitionId) -> Option<ShuffleHandle>;
}

/// Execution environment of a running query engine.
pub trait ExecutionEnvironment: Send + Sync {
    /// Returns the active shuffle manager, if one is installed.
    fn shuffle_manager(&self) -> Option<&dyn ShuffleManager>;
}

// ============================================================================
// SECTION: Query Runner
// ============================================================================

/// Query runner errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunnerError {
    /// The runner could not be constructed.
    #[error("query runner construction failed: {0}")]
    Construction(String),
    /// A plugin or function namespace manager could not be registered.
    #[error("query runner plugin error: {0}")]
    Plugin(String),
}

/// Inputs for constructing a native query runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSpec {
    /// Default catalog name.
    pub catalog: String,
    /// Composed engine configuration.
    pub config: ComposedConfig,
    /// Catalog-specific properties.
    pub catalog_properties: ConfigLayer,
    /// Spark-layer properties.
    pub spark_properties: ConfigLayer,
    /// Optional base data directory.
    pub base_dir: Option<PathBuf>,
    /// Execution modules wiring the native worker.
    pub modules: Vec<ExecutionModule>,
    /// Available-parallelism hint.
    pub available_parallelism: usize,
}

/// Inputs for constructing a reference (non-native) query runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRunnerSpec {
    /// Optional base data directory.
    pub base_dir: Option<PathBuf>,
    /// Table storage format label.
    pub storage_format: String,
}

/// Live query runner produced by a [`QueryRunnerBuilder`].
pub trait QueryRunner {
    /// Returns the metastore backing the runner's catalog.
    fn metastore(&self) -> &dyn Metastore;

    /// Returns the runner's execution environment.
    fn execution_environment(&self) -> &dyn ExecutionEnvironment;

    /// Installs a named plugin.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Plugin`] when the plugin cannot be installed.
    fn install_plugin(&self, plugin: &str) -> Result<(), RunnerError>;

    /// Registers a function namespace manager.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Plugin`] when the factory is unknown or rejects
    /// the properties.
    fn load_function_namespace_manager(
        &self,
        factory: &str,
        namespace: &str,
        properties: &ConfigLayer,
    ) -> Result<(), RunnerError>;
}

/// Query-runner construction API.
pub trait QueryRunnerBuilder {
    /// Native runner type.
    type Runner: QueryRunner;
    /// Reference runner type.
    type ReferenceRunner;

    /// Constructs a native query runner.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Construction`] when the runner cannot start.
    fn build(&self, spec: RunnerSpec) -> Result<Self::Runner, RunnerError>;

    /// Constructs a reference query runner.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Construction`] when the runner cannot start.
    fn build_reference(
        &self,
        spec: ReferenceRunnerSpec,
    ) -> Result<Self::ReferenceRunner, RunnerError>;
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Sink for harness audit events.
pub trait HarnessAuditSink: Send + Sync {
    /// Records a harness event.
    fn record(&self, event: &HarnessEvent);
}
