// crates/native-harness/src/shuffle.rs
// ============================================================================
// Module: Shuffle Verification
// Description: Post-execution checks of the active shuffle manager.
// Purpose: Assert the native shuffle manager is active and its handles are well formed.
// Dependencies: native-harness-core, thiserror
// ============================================================================

//! ## Overview
//! Run after a workload that shuffles. The verifier only observes:
//! 1. the environment must have an active shuffle manager of the expected kind;
//! 2. every partition it reports must resolve to a handle;
//! 3. every handle must be of the expected variant.
//!
//! An empty partition set passes. [`ShuffleReport`] exposes the partitions
//! checked so callers can assert the workload actually shuffled.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use native_harness_core::ExecutionEnvironment;
use native_harness_core::PartitionId;
use native_harness_core::ShuffleHandleKind;
use native_harness_core::ShuffleManagerKind;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Shuffle verification failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The environment has no active shuffle manager.
    #[error("no active shuffle manager in the execution environment")]
    NoActiveShuffleManager,
    /// The active shuffle manager is a different implementation.
    #[error("expected shuffle manager {expected}, found {actual}")]
    UnexpectedShuffleManager {
        /// Expected implementation.
        expected: ShuffleManagerKind,
        /// Active implementation.
        actual: ShuffleManagerKind,
    },
    /// A reported partition has no handle.
    #[error("partition {partition} has no shuffle handle")]
    MissingShuffleHandle {
        /// Partition without a handle.
        partition: PartitionId,
    },
    /// A partition handle has the wrong variant.
    #[error("partition {partition} has a {actual} shuffle handle, expected {expected}")]
    UnexpectedHandleVariant {
        /// Partition at fault.
        partition: PartitionId,
        /// Expected handle variant.
        expected: ShuffleHandleKind,
        /// Returned handle variant.
        actual: ShuffleHandleKind,
    },
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Outcome of a passing verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleReport {
    /// Partitions whose handles were checked.
    pub partitions: BTreeSet<PartitionId>,
}

impl ShuffleReport {
    /// Returns the number of partitions checked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Returns true when the manager reported no partitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }
}

// ============================================================================
// SECTION: Verifier
// ============================================================================

/// Shuffle metadata verifier.
///
/// Defaults to the native-execution manager handing out bypass-merge-sort
/// handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleVerifier {
    /// Manager implementation that must be active.
    expected_manager: ShuffleManagerKind,
    /// Handle variant every partition must resolve to.
    expected_handle: ShuffleHandleKind,
}

impl Default for ShuffleVerifier {
    fn default() -> Self {
        Self::new(ShuffleManagerKind::NativeExecution, ShuffleHandleKind::BypassMergeSort)
    }
}

impl ShuffleVerifier {
    /// Creates a verifier expecting `manager` with `handle` variants.
    #[must_use]
    pub const fn new(manager: ShuffleManagerKind, handle: ShuffleHandleKind) -> Self {
        Self {
            expected_manager: manager,
            expected_handle: handle,
        }
    }

    /// Verifies the shuffle metadata of `env`.
    ///
    /// # Errors
    ///
    /// Returns the first [`VerificationError`] encountered, checking
    /// partitions in ascending order.
    pub fn verify(&self, env: &dyn ExecutionEnvironment) -> Result<ShuffleReport, VerificationError> {
        let manager = env.shuffle_manager().ok_or(VerificationError::NoActiveShuffleManager)?;
        let actual = manager.kind();
        if actual != self.expected_manager {
            return Err(VerificationError::UnexpectedShuffleManager {
                expected: self.expected_manager.clone(),
                actual,
            });
        }

        let partitions = manager.all_partitions();
        for &partition in &partitions {
            let handle = manager
                .shuffle_handle(partition)
                .ok_or(VerificationError::MissingShuffleHandle {
                    partition,
                })?;
            if handle.kind() != self.expected_handle {
                return Err(VerificationError::UnexpectedHandleVariant {
                    partition,
                    expected: self.expected_handle,
                    actual: handle.kind(),
                });
            }
        }
        Ok(ShuffleReport {
            partitions,
        })
    }
}

/// Verifies that `env` runs the native shuffle manager with bypass-merge-sort
/// handles for every partition.
///
/// # Errors
///
/// Returns [`VerificationError`] describing the first violation.
pub fn assert_shuffle_metadata(
    env: &dyn ExecutionEnvironment,
) -> Result<ShuffleReport, VerificationError> {
    ShuffleVerifier::default().verify(env)
}
