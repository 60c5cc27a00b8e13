//! Wiring of the bridge to the concrete infra adapters.
//!
//! `ElizaCogBridge` is generic over filesystem and probe; the CLI always pins
//! it to the local filesystem and the Python-based OpenCog probe.

use std::path::PathBuf;

use elizacog_core::config::ConfigStore;
use elizacog_core::service::bridge::ElizaCogBridge;
use elizacog_infra::filesystem::LocalFileSystem;
use elizacog_infra::probe::OpenCogProbe;

/// Bridge pinned to the infra implementations.
pub type ConcreteBridge = ElizaCogBridge<LocalFileSystem, OpenCogProbe>;

/// Build a bridge over `base_dir`, probing OpenCog with the interpreter from
/// the environment.
pub fn build_bridge(config: ConfigStore, base_dir: PathBuf) -> ConcreteBridge {
    ElizaCogBridge::new(
        config,
        base_dir,
        LocalFileSystem::new(),
        OpenCogProbe::from_env(),
    )
}
