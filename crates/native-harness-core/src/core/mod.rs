// crates/native-harness-core/src/core/mod.rs
// ============================================================================
// Module: Native Harness Core Types
// Description: Domain types shared by the harness and its collaborators.
// Purpose: Group configuration, metastore, shuffle, and audit data models.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types are plain data: they carry no I/O and no synchronization.
//! Collaborator behavior is expressed through [`crate::interfaces`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod config_layer;
pub mod execution;
pub mod metastore;
pub mod shuffle;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use audit::DataDirectorySource;
pub use audit::HarnessEvent;
pub use config_layer::ComposedConfig;
pub use config_layer::ConfigLayer;
pub use config_layer::PropertyError;
pub use execution::ExecutionModule;
pub use metastore::DatabaseDescriptor;
pub use metastore::MetastoreContext;
pub use metastore::OwnerType;
pub use shuffle::PartitionId;
pub use shuffle::ShuffleHandle;
pub use shuffle::ShuffleHandleKind;
pub use shuffle::ShuffleManagerKind;
