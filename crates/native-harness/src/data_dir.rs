// crates/native-harness/src/data_dir.rs
// ============================================================================
// Module: Data Directory Provider
// Description: Process-wide, lazily resolved base data directory.
// Purpose: Resolve the fixture data directory exactly once per process.
// Dependencies: native-harness-config, tempfile
// ============================================================================

//! ## Overview
//! Every fixture in a test process shares one base data directory. The first
//! caller resolves it: a non-blank override wins, otherwise a fresh
//! temporary directory is created and kept. Resolution runs inside one
//! critical section so concurrent first callers never create two
//! directories. Once cached, reads go through a [`OnceLock`] and take no lock.
//!
//! The directory is never removed by the harness; it lives until the process
//! exits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use native_harness_config::ConfigError;
use native_harness_config::HarnessEnv;
use native_harness_config::properties::DATA_DIR_PREFIX;
use native_harness_config::read_env_optional;
use native_harness_core::DataDirectorySource;
use native_harness_core::HarnessAuditSink;
use native_harness_core::HarnessEvent;

use crate::HarnessError;

// ============================================================================
// SECTION: Global Instance
// ============================================================================

/// Provider shared by every fixture in the process.
static GLOBAL: LazyLock<DataDirectoryProvider> = LazyLock::new(DataDirectoryProvider::new);

// ============================================================================
// SECTION: Provider
// ============================================================================

/// Shared state behind a [`DataDirectoryProvider`].
#[derive(Debug, Default)]
struct ProviderState {
    /// Resolved directory; set at most once.
    cached: OnceLock<PathBuf>,
    /// Serializes resolution.
    resolve_lock: Mutex<()>,
    /// Number of completed resolutions.
    resolutions: AtomicUsize,
}

/// Lazily resolved, cached base data directory.
///
/// Clones share the same cached directory.
///
/// # Invariants
/// - The directory is resolved at most once per provider.
/// - Every successful call returns the same path.
#[derive(Debug, Clone, Default)]
pub struct DataDirectoryProvider {
    /// Shared provider state.
    state: Arc<ProviderState>,
}

impl DataDirectoryProvider {
    /// Creates an unresolved provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide provider.
    #[must_use]
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    /// Returns the base data path, reading the `DATA_DIR` override on first use.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] when the override is not valid UTF-8
    /// and [`HarnessError::Io`] when the temporary directory cannot be created.
    pub fn base_data_path(&self, audit: &dyn HarnessAuditSink) -> Result<PathBuf, HarnessError> {
        self.get_or_resolve(
            || Ok(read_env_optional(HarnessEnv::DataDir.as_str())?.map(PathBuf::from)),
            audit,
        )
    }

    /// Returns the cached path, resolving it with `read_override` on first use.
    ///
    /// `read_override` runs only on the resolving call. A blank override is
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// Returns the error from `read_override`, or [`HarnessError::Io`] when
    /// the temporary directory cannot be created.
    pub fn get_or_resolve<F>(
        &self,
        read_override: F,
        audit: &dyn HarnessAuditSink,
    ) -> Result<PathBuf, HarnessError>
    where
        F: FnOnce() -> Result<Option<PathBuf>, ConfigError>,
    {
        if let Some(path) = self.state.cached.get() {
            return Ok(path.clone());
        }
        let _guard = self.state.resolve_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = self.state.cached.get() {
            return Ok(path.clone());
        }

        let (path, source) = match read_override()? {
            Some(path) if !is_blank(&path) => (path, DataDirectorySource::Override),
            _ => (create_temp_data_dir()?, DataDirectorySource::Temporary),
        };
        let path = self.state.cached.get_or_init(|| path).clone();
        self.state.resolutions.fetch_add(1, Ordering::SeqCst);
        audit.record(&HarnessEvent::DataDirectoryResolved {
            path: path.clone(),
            source,
        });
        Ok(path)
    }

    /// Returns the cached path without resolving it.
    #[must_use]
    pub fn cached(&self) -> Option<PathBuf> {
        self.state.cached.get().cloned()
    }

    /// Returns how many times the directory was resolved (0 or 1).
    #[must_use]
    pub fn resolutions(&self) -> usize {
        self.state.resolutions.load(Ordering::SeqCst)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns true for empty or whitespace-only paths.
fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// Creates and keeps a uniquely named temporary directory.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] when the directory cannot be created or its
/// absolute path cannot be determined.
fn create_temp_data_dir() -> Result<PathBuf, HarnessError> {
    let dir = tempfile::Builder::new().prefix(DATA_DIR_PREFIX).tempdir().map_err(|source| {
        HarnessError::Io {
            context: "failed to create temporary data directory".to_string(),
            source,
        }
    })?;
    let path = dir.keep();
    std::path::absolute(&path).map_err(|source| HarnessError::Io {
        context: format!("failed to resolve absolute path of {}", path.display()),
        source,
    })
}
