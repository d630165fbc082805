// crates/native-harness-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory Collaborators
// Description: Mutex-backed metastore, static shuffle manager, audit sink.
// Purpose: Provide deterministic collaborators for harness tests.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use crate::core::DatabaseDescriptor;
use crate::core::HarnessEvent;
use crate::core::MetastoreContext;
use crate::core::PartitionId;
use crate::core::ShuffleHandle;
use crate::core::ShuffleManagerKind;
use crate::interfaces::ExecutionEnvironment;
use crate::interfaces::HarnessAuditSink;
use crate::interfaces::Metastore;
use crate::interfaces::MetastoreError;
use crate::interfaces::ShuffleManager;

// ============================================================================
// SECTION: Metastore
// ============================================================================

/// In-memory metastore keyed by database name.
///
/// # Invariants
/// - Database names are unique; a duplicate create returns
///   [`MetastoreError::AlreadyExists`].
#[derive(Debug, Default)]
pub struct InMemoryMetastore {
    /// Databases keyed by name.
    databases: Mutex<BTreeMap<String, DatabaseDescriptor>>,
    /// Error returned by the next create call instead of creating.
    injected_create_error: Mutex<Option<MetastoreError>>,
    /// Hides existing databases from lookups (simulates a lost race).
    hide_from_lookups: bool,
    /// Number of create calls received.
    create_calls: AtomicUsize,
}

impl InMemoryMetastore {
    /// Creates an empty metastore.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a metastore whose lookups never see existing databases.
    ///
    /// Creates still enforce name uniqueness, so a second bootstrap observes
    /// "absent" and then hits [`MetastoreError::AlreadyExists`].
    #[must_use]
    pub fn with_stale_lookups() -> Self {
        Self {
            hide_from_lookups: true,
            ..Self::default()
        }
    }

    /// Makes the next create call fail with `error`.
    pub fn fail_next_create(&self, error: MetastoreError) {
        if let Ok(mut slot) = self.injected_create_error.lock() {
            *slot = Some(error);
        }
    }

    /// Returns the names of all stored databases in order.
    #[must_use]
    pub fn database_names(&self) -> Vec<String> {
        self.databases.lock().map(|dbs| dbs.keys().cloned().collect()).unwrap_or_default()
    }

    /// Returns the number of create calls received so far.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Locks the database map.
    fn lock_databases(
        &self,
    ) -> Result<MutexGuard<'_, BTreeMap<String, DatabaseDescriptor>>, MetastoreError> {
        self.databases
            .lock()
            .map_err(|_| MetastoreError::Unavailable("metastore lock poisoned".to_string()))
    }
}

impl Metastore for InMemoryMetastore {
    fn get_database(
        &self,
        _ctx: &MetastoreContext,
        name: &str,
    ) -> Result<Option<DatabaseDescriptor>, MetastoreError> {
        let databases = self.lock_databases()?;
        if self.hide_from_lookups {
            return Ok(None);
        }
        Ok(databases.get(name).cloned())
    }

    fn create_database(
        &self,
        _ctx: &MetastoreContext,
        database: &DatabaseDescriptor,
    ) -> Result<(), MetastoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let injected = self
            .injected_create_error
            .lock()
            .map_err(|_| MetastoreError::Unavailable("metastore lock poisoned".to_string()))?
            .take();
        if let Some(error) = injected {
            return Err(error);
        }
        let mut databases = self.lock_databases()?;
        if databases.contains_key(&database.name) {
            return Err(MetastoreError::AlreadyExists {
                name: database.name.clone(),
            });
        }
        databases.insert(database.name.clone(), database.clone());
        Ok(())
    }
}

// ============================================================================
// SECTION: Shuffle Manager
// ============================================================================

/// Shuffle manager backed by a fixed partition table.
///
/// # Invariants
/// - Partitions registered without a handle are reported by
///   [`ShuffleManager::all_partitions`] but resolve to `None`.
#[derive(Debug, Clone)]
pub struct InMemoryShuffleManager {
    /// Implementation tag reported to callers.
    kind: ShuffleManagerKind,
    /// Known partitions and their handles.
    partitions: BTreeMap<PartitionId, Option<ShuffleHandle>>,
}

impl InMemoryShuffleManager {
    /// Creates an empty manager reporting `kind`.
    #[must_use]
    pub const fn new(kind: ShuffleManagerKind) -> Self {
        Self {
            kind,
            partitions: BTreeMap::new(),
        }
    }

    /// Registers `partition` with `handle`.
    #[must_use]
    pub fn with_partition(mut self, partition: PartitionId, handle: ShuffleHandle) -> Self {
        self.partitions.insert(partition, Some(handle));
        self
    }

    /// Registers `partition` without a retrievable handle.
    #[must_use]
    pub fn with_missing_handle(mut self, partition: PartitionId) -> Self {
        self.partitions.insert(partition, None);
        self
    }
}

impl ShuffleManager for InMemoryShuffleManager {
    fn kind(&self) -> ShuffleManagerKind {
        self.kind.clone()
    }

    fn all_partitions(&self) -> BTreeSet<PartitionId> {
        self.partitions.keys().copied().collect()
    }

    fn shuffle_handle(&self, partition: PartitionId) -> Option<ShuffleHandle> {
        self.partitions.get(&partition).cloned().flatten()
    }
}

// ============================================================================
// SECTION: Execution Environment
// ============================================================================

/// Execution environment with a fixed (possibly absent) shuffle manager.
#[derive(Default)]
pub struct StaticExecutionEnvironment {
    /// Active shuffle manager.
    shuffle_manager: Option<Box<dyn ShuffleManager>>,
}

impl StaticExecutionEnvironment {
    /// Creates an environment with no active shuffle manager.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an environment with `manager` active.
    #[must_use]
    pub fn with_shuffle_manager(manager: impl ShuffleManager + 'static) -> Self {
        Self {
            shuffle_manager: Some(Box::new(manager)),
        }
    }
}

impl ExecutionEnvironment for StaticExecutionEnvironment {
    fn shuffle_manager(&self) -> Option<&dyn ShuffleManager> {
        self.shuffle_manager.as_deref()
    }
}

// ============================================================================
// SECTION: Audit Sink
// ============================================================================

/// Audit sink collecting events in memory.
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<HarnessEvent>>,
}

impl InMemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<HarnessEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl HarnessAuditSink for InMemoryAuditSink {
    fn record(&self, event: &HarnessEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
