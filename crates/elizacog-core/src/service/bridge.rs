//! Integration bridge orchestrator.
//!
//! Lays out the integration directory (path table directories, bridge stubs,
//! character profile, `elizacog.yaml`) and reports on it. Two states:
//! uninitialized and initialized. `initialize` may be run again at any time;
//! it rewrites every file with the same content.

use std::path::{Component, Path, PathBuf};

use elizacog_types::config::CONFIG_FILE_NAME;
use elizacog_types::error::BridgeError;
use elizacog_types::report::{InitReport, IntegrationReport, PathCheck, StatusReport};

use crate::config::ConfigStore;
use crate::service::fs::FileSystem;
use crate::service::probe::DependencyProbe;
use crate::service::templates::{TemplateWriter, required_bridge_files};

/// Bridge between an ElizaCog configuration and its directory on disk.
///
/// Generic over filesystem and probe so the orchestration can be tested
/// without touching the disk or spawning processes.
pub struct ElizaCogBridge<F: FileSystem, P: DependencyProbe> {
    config: ConfigStore,
    base_dir: PathBuf,
    fs: F,
    probe: P,
    initialized: bool,
    opencog_available: bool,
}

impl<F: FileSystem, P: DependencyProbe> ElizaCogBridge<F, P> {
    /// Create a bridge rooted at `base_dir`. Runs the OpenCog probe once.
    pub fn new(config: ConfigStore, base_dir: PathBuf, fs: F, probe: P) -> Self {
        let opencog_available = probe.is_available();
        tracing::debug!(opencog_available, "Probed OpenCog availability");
        Self {
            config,
            base_dir,
            fs,
            probe,
            initialized: false,
            opencog_available,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Whether `initialize` has completed on this instance.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Result of the probe taken at construction.
    pub fn opencog_available(&self) -> bool {
        self.opencog_available
    }

    /// Run the OpenCog probe again.
    pub fn check_opencog_availability(&self) -> bool {
        self.probe.is_available()
    }

    /// `<base_dir>/elizacog.yaml`
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// Absolute bridges directory.
    pub fn bridges_dir(&self) -> PathBuf {
        self.resolve(self.config.bridges_dir())
    }

    /// Join a configured relative path onto the base directory, dropping `.`
    /// components so `./bridges` resolves to `<base_dir>/bridges`.
    fn resolve(&self, relative: &str) -> PathBuf {
        let mut path = self.base_dir.clone();
        for component in Path::new(relative).components() {
            if component != Component::CurDir {
                path.push(component);
            }
        }
        path
    }

    /// Set up the integration directory.
    ///
    /// 1. Creates every directory in the path table
    /// 2. Writes the bridge stubs and the character profile
    /// 3. Marks the configuration initialized with the current time
    /// 4. Saves the configuration to `elizacog.yaml`
    ///
    /// The first filesystem failure aborts the remaining steps.
    pub fn initialize(&mut self) -> Result<InitReport, BridgeError> {
        tracing::info!(base_dir = %self.base_dir.display(), "Setting up ElizaCog integration");

        let directories = self.create_directories()?;

        let bridges_dir = self.bridges_dir();
        let writer = TemplateWriter::new(&self.fs);
        let mut files = writer.write_bridge_modules(&bridges_dir)?;
        files.push(writer.write_character_template(&self.base_dir)?);

        let created_at = chrono::Utc::now().to_rfc3339();
        self.config.mark_initialized(&created_at);

        let config_file = self.config_path();
        self.config.save(&self.fs, &config_file)?;

        self.initialized = true;
        tracing::info!(config = %config_file.display(), "ElizaCog bridge initialization complete");

        Ok(InitReport {
            directories,
            files,
            config_file,
            bridges_dir,
            created_at,
        })
    }

    fn create_directories(&self) -> Result<Vec<(String, PathBuf)>, BridgeError> {
        let mut created = Vec::new();
        for (name, relative) in self.config.paths() {
            let dir = self.resolve(&relative);
            self.fs
                .create_dir_all(&dir)
                .map_err(|source| BridgeError::FileSystem {
                    path: dir.clone(),
                    source,
                })?;
            tracing::info!(name = %name, path = %dir.display(), "Created directory");
            created.push((name, dir));
        }
        Ok(created)
    }

    /// Check the integration directory against the configuration.
    ///
    /// Validation errors are recorded in the report, not returned. OpenCog
    /// availability is reported but never fails the check.
    pub fn test_integration(&self) -> IntegrationReport {
        let config_error = match self.config.validate() {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!("Configuration invalid: {e}");
                Some(e.to_string())
            }
        };

        let directories = self
            .config
            .paths()
            .into_iter()
            .map(|(name, relative)| self.check(name, self.resolve(&relative)))
            .collect();

        let bridges_dir = self.bridges_dir();
        let bridge_files = required_bridge_files()
            .map(|file| self.check(file.to_string(), bridges_dir.join(file)))
            .collect();

        let report = IntegrationReport {
            config_error,
            directories,
            bridge_files,
            opencog_available: self.opencog_available,
        };
        tracing::debug!(passed = report.passed(), "Integration test finished");
        report
    }

    /// Snapshot of the configuration and bridge module files.
    pub fn show_status(&self) -> StatusReport {
        let bridges_dir = self.bridges_dir();
        let bridge_modules = self
            .config
            .bridge_modules()
            .into_iter()
            .map(|name| {
                let path = bridges_dir.join(format!("{name}.py"));
                self.check(name, path)
            })
            .collect();

        StatusReport {
            base_dir: self.base_dir.clone(),
            initialized: self.config.is_initialized(),
            created_at: self.config.created_at().map(str::to_string),
            opencog_available: self.opencog_available,
            bridge_modules,
            bidirectional_sync: self.config.is_bidirectional_sync_enabled(),
            atomspace_enabled: self.config.get_bool("opencog.atomspace.enabled"),
            eliza_os_enabled: self.config.get_bool("eliza_os.enabled"),
        }
    }

    fn check(&self, name: String, path: PathBuf) -> PathCheck {
        let exists = self.fs.exists(&path);
        PathCheck { name, path, exists }
    }
}
