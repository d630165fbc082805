// crates/native-harness-core/src/core/config_layer.rs
// ============================================================================
// Module: Configuration Layers
// Description: Key/value configuration layers and their composition.
// Purpose: Merge property sources with deterministic last-layer-wins precedence.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! A [`ConfigLayer`] is one property source (worker defaults, catalog
//! properties, caller overrides). Layers are merged with
//! [`ConfigLayer::compose`]: for every key the value from the latest layer
//! defining it wins. The merged [`ComposedConfig`] is immutable.
//!
//! Composition is pure. Validation of individual values belongs to the
//! caller that produced the layer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Property lookup errors on a composed configuration.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// A required property is absent from every layer.
    #[error("{key} is required in the composed configuration")]
    MissingProperty {
        /// Property key that was looked up.
        key: String,
    },
}

// ============================================================================
// SECTION: Config Layer
// ============================================================================

/// Single configuration source: an ordered key/value mapping.
///
/// # Invariants
/// - Each key appears at most once; a later `insert` replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigLayer {
    /// Properties keyed by name.
    entries: BTreeMap<String, String>,
}

impl ConfigLayer {
    /// Creates an empty layer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the layer with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, replacing any previous value in this layer.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value for `key` in this layer only.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the number of properties in the layer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the layer carries no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges `layers` in order; later layers override earlier ones.
    ///
    /// An empty sequence yields an empty configuration.
    #[must_use]
    pub fn compose<'a, I>(layers: I) -> ComposedConfig
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut merged = BTreeMap::new();
        for layer in layers {
            for (key, value) in &layer.entries {
                merged.insert(key.clone(), value.clone());
            }
        }
        ComposedConfig {
            entries: merged,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigLayer
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut layer = Self::new();
        for (key, value) in iter {
            layer.insert(key, value);
        }
        layer
    }
}

// ============================================================================
// SECTION: Composed Config
// ============================================================================

/// Immutable result of composing configuration layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComposedConfig {
    /// Merged properties keyed by name.
    entries: BTreeMap<String, String>,
}

impl ComposedConfig {
    /// Returns the value for `key`, if any layer defined it.
    #[must_use]
    pub fn optional_property(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::MissingProperty`] when no layer defined `key`.
    pub fn required_property(&self, key: &str) -> Result<&str, PropertyError> {
        self.optional_property(key).ok_or_else(|| PropertyError::MissingProperty {
            key: key.to_string(),
        })
    }

    /// Returns true when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of merged properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no properties were merged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComposedConfig {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
