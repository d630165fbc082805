// crates/native-harness-core/src/core/execution.rs
// ============================================================================
// Module: Execution Modules
// Description: Native worker wiring options handed to the query runner.
// Purpose: Distinguish a spawned native worker from a pre-existing endpoint.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A runner either spawns the native worker from an executable path or
//! attaches to a worker already listening on a local port.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Execution Module
// ============================================================================

/// How the query runner reaches its native worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "module", rename_all = "snake_case")]
pub enum ExecutionModule {
    /// Production module: the runner spawns the native worker binary.
    Native {
        /// Path to the native worker executable.
        executable_path: PathBuf,
    },
    /// Test module: the runner connects to an already running worker.
    TestNative {
        /// Loopback port the worker listens on.
        port: u16,
    },
}

impl ExecutionModule {
    /// Returns a stable label for audit records.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Native { .. } => "native",
            Self::TestNative { .. } => "test_native",
        }
    }
}
