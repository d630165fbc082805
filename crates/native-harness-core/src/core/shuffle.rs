// crates/native-harness-core/src/core/shuffle.rs
// ============================================================================
// Module: Shuffle Model
// Description: Partition identifiers, shuffle handle variants, manager kinds.
// Purpose: Represent shuffle metadata as tagged variants instead of runtime type checks.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The shuffle manager is an external component. The harness only observes
//! it: which implementation is active, which partitions it knows, and which
//! handle variant each partition resolves to. Handles carry their variant as
//! an enum tag so verification is an explicit comparison.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Class name of the native-execution shuffle manager.
pub const NATIVE_EXECUTION_SHUFFLE_MANAGER_CLASS: &str =
    "com.facebook.presto.spark.classloader_interface.PrestoSparkNativeExecutionShuffleManager";
/// Class name of the stock sort-based shuffle manager.
pub const SORT_SHUFFLE_MANAGER_CLASS: &str = "org.apache.spark.shuffle.sort.SortShuffleManager";

// ============================================================================
// SECTION: Partition Identifier
// ============================================================================

/// Shuffle partition identifier.
///
/// # Invariants
/// - Non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionId(u32);

impl PartitionId {
    /// Creates a partition identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PartitionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Shuffle Handles
// ============================================================================

/// Variant tag of a shuffle handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleHandleKind {
    /// Bypass-merge-sort handle (no map-side aggregation or ordering).
    BypassMergeSort,
    /// Serialized shuffle handle.
    SerializedShuffle,
    /// Generic base shuffle handle.
    BaseShuffle,
}

impl ShuffleHandleKind {
    /// Returns a stable label for the handle kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BypassMergeSort => "bypass_merge_sort",
            Self::SerializedShuffle => "serialized_shuffle",
            Self::BaseShuffle => "base_shuffle",
        }
    }
}

impl fmt::Display for ShuffleHandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque shuffle handle returned by a shuffle manager for one partition.
///
/// # Invariants
/// - The variant alone determines [`ShuffleHandle::kind`]; payload fields are
///   informational and never inspected by verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShuffleHandle {
    /// Bypass-merge-sort handle.
    BypassMergeSort {
        /// Shuffle identifier.
        shuffle_id: u32,
        /// Number of map tasks feeding the shuffle.
        num_maps: u32,
    },
    /// Serialized shuffle handle.
    SerializedShuffle {
        /// Shuffle identifier.
        shuffle_id: u32,
        /// Number of map tasks feeding the shuffle.
        num_maps: u32,
    },
    /// Generic base shuffle handle.
    BaseShuffle {
        /// Shuffle identifier.
        shuffle_id: u32,
        /// Number of map tasks feeding the shuffle.
        num_maps: u32,
    },
}

impl ShuffleHandle {
    /// Returns the variant tag of the handle.
    #[must_use]
    pub const fn kind(&self) -> ShuffleHandleKind {
        match self {
            Self::BypassMergeSort { .. } => ShuffleHandleKind::BypassMergeSort,
            Self::SerializedShuffle { .. } => ShuffleHandleKind::SerializedShuffle,
            Self::BaseShuffle { .. } => ShuffleHandleKind::BaseShuffle,
        }
    }

    /// Returns the shuffle identifier carried by the handle.
    #[must_use]
    pub const fn shuffle_id(&self) -> u32 {
        match self {
            Self::BypassMergeSort { shuffle_id, .. }
            | Self::SerializedShuffle { shuffle_id, .. }
            | Self::BaseShuffle { shuffle_id, .. } => *shuffle_id,
        }
    }
}

// ============================================================================
// SECTION: Shuffle Manager Kind
// ============================================================================

/// Implementation tag of the active shuffle manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleManagerKind {
    /// Native-execution shuffle manager installed by the harness.
    NativeExecution,
    /// Stock sort-based shuffle manager.
    Sort,
    /// Any other implementation, identified by class name.
    Other(String),
}

impl ShuffleManagerKind {
    /// Returns the implementation class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            Self::NativeExecution => NATIVE_EXECUTION_SHUFFLE_MANAGER_CLASS,
            Self::Sort => SORT_SHUFFLE_MANAGER_CLASS,
            Self::Other(name) => name,
        }
    }

    /// Maps a class name back to a manager kind.
    #[must_use]
    pub fn from_class_name(name: &str) -> Self {
        match name {
            NATIVE_EXECUTION_SHUFFLE_MANAGER_CLASS => Self::NativeExecution,
            SORT_SHUFFLE_MANAGER_CLASS => Self::Sort,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ShuffleManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
