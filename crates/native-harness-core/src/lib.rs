// crates/native-harness-core/src/lib.rs
// ============================================================================
// Module: Native Harness Core
// Description: Domain types and collaborator interfaces for the native harness.
// Purpose: Define the contract surfaces the harness configures and asserts on.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The core crate holds everything the native query-runner harness shares
//! with its collaborators: layered configuration maps, metastore descriptors,
//! shuffle handle variants, execution modules, audit events, and the traits
//! through which the query engine, metastore, and shuffle manager are
//! consumed. In-memory implementations of those traits live in [`runtime`]
//! and back the harness test suites.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::ComposedConfig;
pub use crate::core::ConfigLayer;
pub use crate::core::DataDirectorySource;
pub use crate::core::DatabaseDescriptor;
pub use crate::core::ExecutionModule;
pub use crate::core::HarnessEvent;
pub use crate::core::MetastoreContext;
pub use crate::core::OwnerType;
pub use crate::core::PartitionId;
pub use crate::core::PropertyError;
pub use crate::core::ShuffleHandle;
pub use crate::core::ShuffleHandleKind;
pub use crate::core::ShuffleManagerKind;
pub use crate::interfaces::ExecutionEnvironment;
pub use crate::interfaces::HarnessAuditSink;
pub use crate::interfaces::Metastore;
pub use crate::interfaces::MetastoreError;
pub use crate::interfaces::QueryRunner;
pub use crate::interfaces::QueryRunnerBuilder;
pub use crate::interfaces::ReferenceRunnerSpec;
pub use crate::interfaces::RunnerError;
pub use crate::interfaces::RunnerSpec;
pub use crate::interfaces::ShuffleManager;
