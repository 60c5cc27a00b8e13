//! Structured results of bridge operations.
//!
//! The bridge never prints; it returns these values and the CLI renders them
//! as styled text or JSON.

use std::path::PathBuf;

use serde::Serialize;

/// Existence check for one named path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCheck {
    pub name: String,
    pub path: PathBuf,
    pub exists: bool,
}

/// What `initialize` put on disk.
#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
    /// `(path table key, absolute directory)` in table order.
    pub directories: Vec<(String, PathBuf)>,
    pub files: Vec<PathBuf>,
    pub config_file: PathBuf,
    pub bridges_dir: PathBuf,
    pub created_at: String,
}

/// Outcome of `test_integration`.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrationReport {
    /// Validation failure message, `None` when the configuration is valid.
    pub config_error: Option<String>,
    pub directories: Vec<PathCheck>,
    pub bridge_files: Vec<PathCheck>,
    /// Reported only; never affects [`IntegrationReport::passed`].
    pub opencog_available: bool,
}

impl IntegrationReport {
    /// True iff the configuration validated and every checked path exists.
    pub fn passed(&self) -> bool {
        self.config_error.is_none()
            && self.directories.iter().all(|c| c.exists)
            && self.bridge_files.iter().all(|c| c.exists)
    }
}

/// Read-only snapshot produced by `show_status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub base_dir: PathBuf,
    pub initialized: bool,
    pub created_at: Option<String>,
    pub opencog_available: bool,
    pub bridge_modules: Vec<PathCheck>,
    pub bidirectional_sync: bool,
    pub atomspace_enabled: Option<bool>,
    pub eliza_os_enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, exists: bool) -> PathCheck {
        PathCheck {
            name: name.to_string(),
            path: PathBuf::from(name),
            exists,
        }
    }

    #[test]
    fn test_integration_report_passes_when_everything_present() {
        let report = IntegrationReport {
            config_error: None,
            directories: vec![check("data_dir", true)],
            bridge_files: vec![check("__init__.py", true)],
            opencog_available: false,
        };
        assert!(report.passed());
    }

    #[test]
    fn test_integration_report_fails_on_config_error() {
        let report = IntegrationReport {
            config_error: Some("missing elizacog.version".to_string()),
            directories: vec![],
            bridge_files: vec![],
            opencog_available: true,
        };
        assert!(!report.passed());
    }

    #[test]
    fn test_integration_report_fails_on_missing_file() {
        let report = IntegrationReport {
            config_error: None,
            directories: vec![check("data_dir", true)],
            bridge_files: vec![check("memory_bridge.py", false)],
            opencog_available: true,
        };
        assert!(!report.passed());
    }
}
