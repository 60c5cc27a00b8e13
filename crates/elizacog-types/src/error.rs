use std::path::PathBuf;

use thiserror::Error;

/// Errors related to the configuration tree and its file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration section: {0}")]
    MissingSection(String),

    #[error("missing {0}")]
    MissingField(String),

    #[error("I/O error accessing config at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config YAML")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("configuration root must be a mapping")]
    NotAMapping,
}

/// Errors raised while setting up the integration directory.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("filesystem error at {path}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingSection("paths".to_string());
        assert_eq!(err.to_string(), "missing required configuration section: paths");

        let err = ConfigError::MissingField("elizacog.version".to_string());
        assert_eq!(err.to_string(), "missing elizacog.version");
    }

    #[test]
    fn test_bridge_error_display() {
        let err = BridgeError::FileSystem {
            path: PathBuf::from("/tmp/x/bridges"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "filesystem error at /tmp/x/bridges");
        // The cause is reachable through the chain, not repeated in the message.
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_bridge_error_wraps_config_error() {
        let err: BridgeError = ConfigError::NotAMapping.into();
        assert_eq!(err.to_string(), "configuration root must be a mapping");
    }
}
