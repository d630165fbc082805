// crates/native-harness/src/audit.rs
// ============================================================================
// Module: Harness Audit Sinks
// Description: Audit sink implementations for harness events.
// Purpose: Emit structured JSON lines or discard events.
// Dependencies: native-harness-core, serde_json
// ============================================================================

//! ## Overview
//! Harness actions are reported as [`HarnessEvent`]s. [`StderrAuditSink`]
//! writes one JSON object per line so test logs stay machine readable;
//! [`NoopAuditSink`] is the factory default. Sinks never fail the caller:
//! serialization or write errors drop the event.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use native_harness_core::HarnessAuditSink;
use native_harness_core::HarnessEvent;

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink writing JSON lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAuditSink;

impl HarnessAuditSink for StderrAuditSink {
    fn record(&self, event: &HarnessEvent) {
        if let Ok(line) = serde_json::to_string(event) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{line}");
        }
    }
}

/// Audit sink discarding every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl HarnessAuditSink for NoopAuditSink {
    fn record(&self, _event: &HarnessEvent) {}
}
