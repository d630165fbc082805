// crates/native-harness/tests/helpers/env.rs
// ============================================================================
// Module: Environment Test Helpers
// Description: Serialized, self-restoring process environment mutation.
// Purpose: Let tests set harness variables without leaking state on panic.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Every test touching the process environment holds [`env_lock`] and an
//! [`EnvGuard`]. The guard snapshots the variables it manages and restores
//! them on drop, including when the test panics.

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;
use std::sync::PoisonError;

mod env_mut {
    #![allow(unsafe_code, reason = "Tests mutate process env vars in a controlled scope.")]

    /// Sets an environment variable for the current process.
    pub fn set_var(key: &str, value: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Removes an environment variable from the current process.
    pub fn remove_var(key: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

/// Serializes environment mutation across the tests of one binary.
pub fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(PoisonError::into_inner)
}

/// Restores the managed variables to their captured values on drop.
pub struct EnvGuard {
    entries: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Captures and clears `names`.
    pub fn clean(names: &[&'static str]) -> Self {
        let entries = names.iter().map(|name| (*name, std::env::var(name).ok())).collect();
        for name in names {
            env_mut::remove_var(name);
        }
        Self {
            entries,
        }
    }

    /// Sets `name` for the lifetime of the guard. `name` must be managed.
    pub fn set(&self, name: &'static str, value: &str) {
        debug_assert!(self.entries.iter().any(|(managed, _)| *managed == name));
        env_mut::set_var(name, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => env_mut::set_var(name, &value),
                None => env_mut::remove_var(name),
            }
        }
    }
}
