//! OpenCog availability probe.
//!
//! OpenCog ships as compiled Python extensions, so the probe asks a Python
//! interpreter to import `opencog.atomspace` and construct an `AtomSpace`.
//! The interpreter defaults to `python3` and can be overridden with
//! `ELIZACOG_PYTHON`.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use elizacog_core::service::probe::{DependencyProbe, ProbeFailure};

/// Environment variable naming the Python interpreter to probe with.
pub const PYTHON_ENV_VAR: &str = "ELIZACOG_PYTHON";

const DEFAULT_INTERPRETER: &str = "python3";

const PROBE_SCRIPT: &str = "from opencog.atomspace import AtomSpace; AtomSpace()";

/// Probes for OpenCog by constructing an AtomSpace in a child interpreter.
#[derive(Debug, Clone)]
pub struct OpenCogProbe {
    interpreter: OsString,
}

impl OpenCogProbe {
    /// Probe with the interpreter from `ELIZACOG_PYTHON`, or `python3`.
    pub fn from_env() -> Self {
        let interpreter = std::env::var_os(PYTHON_ENV_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_INTERPRETER));
        Self { interpreter }
    }

    /// Probe with an explicit interpreter.
    pub fn with_interpreter(interpreter: impl Into<OsString>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Default for OpenCogProbe {
    fn default() -> Self {
        Self::from_env()
    }
}

impl DependencyProbe for OpenCogProbe {
    fn probe(&self) -> Result<(), ProbeFailure> {
        let interpreter = self.interpreter.to_string_lossy();
        tracing::debug!(%interpreter, "Probing for OpenCog AtomSpace");

        let status = Command::new(&self.interpreter)
            .args(["-c", PROBE_SCRIPT])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ProbeFailure(format!("could not run {interpreter}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(ProbeFailure(format!(
                "{interpreter} could not construct an AtomSpace ({status})"
            )))
        }
    }
}
