//! Navigation registry error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or installing a navigation registry.
///
/// Reading entries never fails; these only cover the paths that touch
/// the filesystem, parse a manifest, or set the process-wide instance.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("failed to read navigation manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse navigation manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize navigation registry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("a navigation registry is already installed")]
    AlreadyInstalled,

    #[error("unknown navigation section: {0}")]
    UnknownSection(String),
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;
