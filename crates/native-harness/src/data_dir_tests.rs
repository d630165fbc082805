// crates/native-harness/src/data_dir_tests.rs
// ============================================================================
// Module: Data Directory Unit Tests
// Description: Unit coverage for lazy data directory resolution.
// Purpose: Ensure resolution happens once and blank overrides fall back.
// Dependencies: std, tempfile
// ============================================================================

//! ## Overview
//! Unit coverage for [`DataDirectoryProvider`].
//! Invariants:
//! - Concurrent first callers observe one path and one resolution.
//! - Blank overrides create a temporary directory.
//! - A failed override read leaves the provider unresolved.
//!
//! Tests that mutate the environment live in `tests/environment.rs`.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use std::path::PathBuf;
use std::sync::Barrier;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use native_harness_config::ConfigError;
use native_harness_core::DataDirectorySource;
use native_harness_core::HarnessEvent;
use native_harness_core::runtime::InMemoryAuditSink;

use super::DataDirectoryProvider;
use super::HarnessError;
use super::NoopAuditSink;

#[test]
fn concurrent_callers_share_one_resolution() {
    const CALLERS: usize = 16;
    let provider = DataDirectoryProvider::new();
    let override_reads = AtomicUsize::new(0);
    let barrier = Barrier::new(CALLERS);

    let paths: Vec<PathBuf> = std::thread::scope(|scope| {
        let provider = &provider;
        let override_reads = &override_reads;
        let barrier = &barrier;
        let handles: Vec<_> = (0 .. CALLERS)
            .map(move |_| {
                scope.spawn(move || {
                    barrier.wait();
                    provider
                        .get_or_resolve(
                            || {
                                override_reads.fetch_add(1, Ordering::SeqCst);
                                Ok(None)
                            },
                            &NoopAuditSink,
                        )
                        .expect("resolve data dir")
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().expect("caller thread")).collect()
    });

    assert_eq!(paths.len(), CALLERS);
    assert!(paths.iter().all(|path| path == &paths[0]));
    assert_eq!(override_reads.load(Ordering::SeqCst), 1);
    assert_eq!(provider.resolutions(), 1);
    assert!(paths[0].is_dir());
    assert!(paths[0].is_absolute());
}

#[test]
fn override_is_used_verbatim_and_cached() {
    let scratch = tempfile::tempdir().expect("scratch dir");
    let provider = DataDirectoryProvider::new();
    let sink = InMemoryAuditSink::new();

    let first =
        provider.get_or_resolve(|| Ok(Some(scratch.path().to_path_buf())), &sink).expect("first");
    let second = provider
        .get_or_resolve(|| panic!("override must not be read after caching"), &sink)
        .expect("second");

    assert_eq!(first, scratch.path());
    assert_eq!(first, second);
    assert_eq!(provider.cached(), Some(first.clone()));
    assert_eq!(sink.events(), vec![HarnessEvent::DataDirectoryResolved {
        path: first,
        source: DataDirectorySource::Override,
    }]);
}

#[test]
fn blank_override_falls_back_to_temporary_directory() {
    for blank in ["", "   "] {
        let provider = DataDirectoryProvider::new();
        let sink = InMemoryAuditSink::new();

        let path =
            provider.get_or_resolve(|| Ok(Some(PathBuf::from(blank))), &sink).expect("resolve");

        assert!(!path.as_os_str().is_empty());
        assert!(path.is_dir());
        assert!(
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("PrestoTest"))
        );
        assert!(matches!(sink.events().as_slice(), [HarnessEvent::DataDirectoryResolved {
            source: DataDirectorySource::Temporary,
            ..
        }]));
    }
}

#[test]
fn failed_override_read_leaves_provider_unresolved() {
    let provider = DataDirectoryProvider::new();

    let err = provider
        .get_or_resolve(
            || {
                Err(ConfigError::InvalidUtf8 {
                    name: "DATA_DIR".to_string(),
                })
            },
            &NoopAuditSink,
        )
        .unwrap_err();

    assert!(matches!(err, HarnessError::Config(ConfigError::InvalidUtf8 { .. })));
    assert_eq!(provider.cached(), None);
    assert_eq!(provider.resolutions(), 0);
}

#[test]
fn clones_share_the_cached_directory() {
    let provider = DataDirectoryProvider::new();
    let clone = provider.clone();

    let path = provider.get_or_resolve(|| Ok(None), &NoopAuditSink).expect("resolve");

    assert_eq!(clone.cached(), Some(path));
    assert_eq!(clone.resolutions(), 1);
}
