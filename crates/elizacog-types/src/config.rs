//! Default configuration record for ElizaCog.
//!
//! `ElizaCogSettings` is the typed shape of `elizacog.yaml` as written on a
//! fresh `init`. The config store in `elizacog-core` converts it into a
//! path-addressable tree; after that the tree is the source of truth and may
//! carry keys this record does not know about.

use serde::{Deserialize, Serialize};

/// File name of the persisted configuration inside the base directory.
pub const CONFIG_FILE_NAME: &str = "elizacog.yaml";

/// Configuration schema version written into new configurations.
pub const CONFIG_VERSION: &str = "1.0.0";

/// Top-level sections that must be present for a configuration to validate.
pub const REQUIRED_SECTIONS: [&str; 5] = ["elizacog", "opencog", "eliza_os", "integration", "paths"];

/// Bridges directory used when `paths.bridges_dir` is absent.
pub const DEFAULT_BRIDGES_DIR: &str = "bridges";

/// Complete default configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElizaCogSettings {
    pub elizacog: ToolSection,
    pub opencog: OpenCogSection,
    pub eliza_os: ElizaOsSection,
    pub integration: IntegrationSection,
    pub paths: PathTable,
}

impl Default for ElizaCogSettings {
    fn default() -> Self {
        Self {
            elizacog: ToolSection::default(),
            opencog: OpenCogSection::default(),
            eliza_os: ElizaOsSection::default(),
            integration: IntegrationSection::default(),
            paths: PathTable::default(),
        }
    }
}

/// Identity and lifecycle of the integration itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSection {
    pub version: String,
    pub initialized: bool,
    /// ISO-8601 timestamp of the last successful `init`, `null` until then.
    pub created_at: Option<String>,
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            initialized: false,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenCogSection {
    pub atomspace: AtomSpaceSettings,
    pub scheme_modules: Vec<String>,
    pub python_modules: Vec<String>,
}

impl Default for OpenCogSection {
    fn default() -> Self {
        Self {
            atomspace: AtomSpaceSettings::default(),
            scheme_modules: vec![
                "opencog/base/core_types.scm".to_string(),
                "opencog/base/utilities.scm".to_string(),
            ],
            python_modules: vec![
                "opencog.atomspace".to_string(),
                "opencog.utilities".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomSpaceSettings {
    pub enabled: bool,
    pub default_space: String,
    pub persistence: PersistenceSettings,
}

impl Default for AtomSpaceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            default_space: "elizacog_main".to_string(),
            persistence: PersistenceSettings {
                backend: "file".to_string(),
                location: "./atomspace_data".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceSettings {
    pub backend: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElizaOsSection {
    pub enabled: bool,
    pub api_endpoint: String,
    pub authentication: AuthenticationSettings,
    pub agent_config: AgentSettings,
}

impl Default for ElizaOsSection {
    fn default() -> Self {
        Self {
            enabled: true,
            api_endpoint: "http://localhost:3000".to_string(),
            authentication: AuthenticationSettings {
                method: "token".to_string(),
                token_file: "./.eliza_token".to_string(),
            },
            agent_config: AgentSettings {
                default_character: "helpful_ai".to_string(),
                memory_enabled: true,
                learning_enabled: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationSettings {
    pub method: String,
    pub token_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    pub default_character: String,
    pub memory_enabled: bool,
    pub learning_enabled: bool,
}

/// Bridge list plus data-flow and monitoring toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSection {
    /// Bridge module names; each maps to `<bridges_dir>/<name>.py`.
    pub bridge_modules: Vec<String>,
    pub data_flow: DataFlowSettings,
    pub monitoring: MonitoringSettings,
}

impl Default for IntegrationSection {
    fn default() -> Self {
        Self {
            bridge_modules: vec![
                "knowledge_bridge".to_string(),
                "memory_bridge".to_string(),
                "reasoning_bridge".to_string(),
            ],
            data_flow: DataFlowSettings {
                opencog_to_eliza: true,
                eliza_to_opencog: true,
                bidirectional_sync: true,
            },
            monitoring: MonitoringSettings {
                enabled: true,
                metrics_interval: 60,
                log_level: "INFO".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFlowSettings {
    pub opencog_to_eliza: bool,
    pub eliza_to_opencog: bool,
    pub bidirectional_sync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringSettings {
    pub enabled: bool,
    /// Seconds between metric snapshots.
    pub metrics_interval: u64,
    pub log_level: String,
}

/// Directory table. Every entry is created under the base directory on `init`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathTable {
    pub bridges_dir: String,
    pub data_dir: String,
    pub logs_dir: String,
    pub temp_dir: String,
}

impl Default for PathTable {
    fn default() -> Self {
        Self {
            bridges_dir: "./bridges".to_string(),
            data_dir: "./data".to_string(),
            logs_dir: "./logs".to_string(),
            temp_dir: "./tmp".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_values() {
        let settings = ElizaCogSettings::default();
        assert_eq!(settings.elizacog.version, "1.0.0");
        assert!(!settings.elizacog.initialized);
        assert!(settings.elizacog.created_at.is_none());
        assert!(settings.opencog.atomspace.enabled);
        assert!(settings.eliza_os.enabled);
        assert_eq!(
            settings.integration.bridge_modules,
            vec!["knowledge_bridge", "memory_bridge", "reasoning_bridge"]
        );
        assert!(settings.integration.data_flow.bidirectional_sync);
        assert_eq!(settings.paths.bridges_dir, "./bridges");
    }

    #[test]
    fn test_default_settings_yaml_has_required_sections() {
        let yaml = serde_yaml_ng::to_string(&ElizaCogSettings::default()).unwrap();
        for section in REQUIRED_SECTIONS {
            assert!(
                yaml.contains(&format!("{section}:")),
                "missing section {section} in:\n{yaml}"
            );
        }
        assert!(yaml.contains("created_at: null"));
    }

    #[test]
    fn test_settings_yaml_roundtrip() {
        let mut settings = ElizaCogSettings::default();
        settings.elizacog.initialized = true;
        settings.elizacog.created_at = Some("2026-01-01T00:00:00+00:00".to_string());
        settings.integration.monitoring.metrics_interval = 15;

        let yaml = serde_yaml_ng::to_string(&settings).unwrap();
        let parsed: ElizaCogSettings = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }
}
