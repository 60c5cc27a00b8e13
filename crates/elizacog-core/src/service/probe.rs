//! DependencyProbe trait for the optional OpenCog runtime.
//!
//! The only thing ElizaCog ever asks of OpenCog is "can an AtomSpace be
//! constructed here?". The answer is informational: a failed probe is never
//! an error for any operation.

use thiserror::Error;

/// Why a probe reported the dependency as unavailable.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProbeFailure(pub String);

/// Capability check for an external dependency.
pub trait DependencyProbe: Send + Sync {
    /// Attempt to construct the dependency once.
    fn probe(&self) -> Result<(), ProbeFailure>;

    /// `probe()` collapsed to a boolean.
    ///
    /// Every failure mode (missing interpreter, missing module, a crash while
    /// constructing) counts as "not available".
    fn is_available(&self) -> bool {
        match self.probe() {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Dependency probe failed: {e}");
                false
            }
        }
    }
}
