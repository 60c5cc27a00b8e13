//! Path-addressable configuration store.
//!
//! The configuration is a tree of YAML mappings with scalar/sequence leaves,
//! addressed by dot-separated paths such as `opencog.atomspace.enabled`.
//! Reads never create nodes; writes create every missing intermediate mapping.
//!
//! A fresh store is built from [`ElizaCogSettings::default()`]. A loaded store
//! is whatever the file contained (an empty file gives the defaults), so typed
//! accessors always fall back to a default instead of assuming a section exists.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml_ng::{Mapping, Value};

use elizacog_types::config::{DEFAULT_BRIDGES_DIR, ElizaCogSettings, REQUIRED_SECTIONS};
use elizacog_types::error::ConfigError;

use crate::service::fs::FileSystem;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    tree: Mapping,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::from_settings(&ElizaCogSettings::default())
            .expect("default settings serialize to a YAML mapping")
    }
}

impl ConfigStore {
    /// Store holding the default configuration tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with no sections at all. Fails `validate()`.
    pub fn empty() -> Self {
        Self {
            tree: Mapping::new(),
        }
    }

    /// Build a store from a typed settings record.
    pub fn from_settings(settings: &ElizaCogSettings) -> Result<Self, ConfigError> {
        Self::from_value(serde_yaml_ng::to_value(settings)?)
    }

    /// Adopt a parsed YAML document as the whole configuration.
    ///
    /// An empty document (`null` or `{}`) falls back to the default tree.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Mapping(tree) if tree.is_empty() => Ok(Self::new()),
            Value::Mapping(tree) => Ok(Self { tree }),
            Value::Null => Ok(Self::new()),
            _ => Err(ConfigError::NotAMapping),
        }
    }

    /// Parse a YAML document into a store, replacing all defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml_ng::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Serialize the whole tree as a block-style YAML document.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(&self.tree)?)
    }

    /// Write the tree to `path` as YAML, overwriting any existing file.
    pub fn save<F: FileSystem + ?Sized>(&self, fs: &F, path: &Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml_string()?;
        fs.write_file(path, &yaml)
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// The raw tree.
    pub fn tree(&self) -> &Mapping {
        &self.tree
    }

    /// Look up a dot-path. Returns `None` when any segment is absent or an
    /// intermediate value is not a mapping.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.tree.get(first)?;
        for segment in segments {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    /// Look up a dot-path, returning `default` unchanged when it is absent.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    /// Deserialize the subtree at `path` into `T`.
    ///
    /// `None` when the path is absent or the subtree does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let value = self.get(path)?.clone();
        serde_yaml_ng::from_value(value).ok()
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path)?.as_bool()
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    /// Assign `value` at a dot-path.
    ///
    /// Missing intermediate mappings are created; an intermediate that exists
    /// but is not a mapping is replaced by one. An existing leaf is overwritten.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let mut segments: Vec<&str> = path.split('.').collect();
        // `split` always yields at least one segment.
        let leaf = segments.pop().unwrap_or_default();

        let mut node = &mut self.tree;
        for segment in segments {
            let key = Value::String(segment.to_string());
            if !node.get(&key).is_some_and(Value::is_mapping) {
                node.insert(key.clone(), Value::Mapping(Mapping::new()));
            }
            let Some(Value::Mapping(next)) = node.get_mut(&key) else {
                unreachable!("intermediate node was just made a mapping");
            };
            node = next;
        }

        node.insert(Value::String(leaf.to_string()), value.into());
    }

    /// Presence check for the sections and fields every configuration needs.
    ///
    /// This is not a schema check: only presence (and a non-empty version)
    /// is verified.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for section in REQUIRED_SECTIONS {
            if !self.tree.contains_key(section) {
                return Err(ConfigError::MissingSection(section.to_string()));
            }
        }

        if !self.get("elizacog.version").is_some_and(is_truthy) {
            return Err(ConfigError::MissingField("elizacog.version".to_string()));
        }

        if self
            .get("opencog.atomspace.enabled")
            .is_none_or(Value::is_null)
        {
            return Err(ConfigError::MissingField(
                "opencog.atomspace.enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Record a completed initialization.
    pub fn mark_initialized(&mut self, created_at: &str) {
        self.set("elizacog.initialized", true);
        self.set("elizacog.created_at", created_at);
    }

    /// Configured bridge module names, empty when unset.
    pub fn bridge_modules(&self) -> Vec<String> {
        self.get_as("integration.bridge_modules")
            .unwrap_or_default()
    }

    /// Path table entries in file order.
    ///
    /// Entries whose value is not a string are skipped with a warning.
    pub fn paths(&self) -> Vec<(String, String)> {
        let Some(table) = self.get("paths").and_then(Value::as_mapping) else {
            return Vec::new();
        };

        table
            .iter()
            .filter_map(|(key, value)| match (key.as_str(), value.as_str()) {
                (Some(name), Some(path)) => Some((name.to_string(), path.to_string())),
                _ => {
                    tracing::warn!(?key, "Skipping non-string entry in path table");
                    None
                }
            })
            .collect()
    }

    /// Relative bridges directory, `bridges` when unset.
    pub fn bridges_dir(&self) -> &str {
        self.get_str("paths.bridges_dir")
            .unwrap_or(DEFAULT_BRIDGES_DIR)
    }

    pub fn is_bidirectional_sync_enabled(&self) -> bool {
        self.get_bool("integration.data_flow.bidirectional_sync")
            .unwrap_or(false)
    }

    pub fn is_initialized(&self) -> bool {
        self.get_bool("elizacog.initialized").unwrap_or(false)
    }

    /// Creation timestamp, `None` when absent or `null`.
    pub fn created_at(&self) -> Option<&str> {
        self.get_str("elizacog.created_at")
    }
}

/// Loose truthiness: null, false, zero and empty values are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}
