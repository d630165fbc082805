// crates/native-harness-core/src/runtime/mod.rs
// ============================================================================
// Module: Native Harness Runtime
// Description: In-memory implementations of the collaborator interfaces.
// Purpose: Back harness tests without a live engine, metastore, or shuffle.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! In-memory collaborators mirror the behavior the harness relies on from the
//! real systems: the metastore rejects duplicate names, the shuffle manager
//! reports partitions and per-partition handles, and the audit sink keeps
//! events in order.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod memory;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use memory::InMemoryAuditSink;
pub use memory::InMemoryMetastore;
pub use memory::InMemoryShuffleManager;
pub use memory::StaticExecutionEnvironment;
