use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("invalid size format '{0}': use a number followed by B, KB, MB, GB or TB")]
    InvalidSizeFormat(String),

    #[error("path '{0}' does not exist or is not a directory")]
    NotADirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to move '{path}' to the recycle bin: {source}")]
    Trash {
        path: PathBuf,
        #[source]
        source: trash::Error,
    },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Outcome of a single metadata syscall during the walk.
///
/// Every per-entry failure maps onto this taxonomy and is handled at the
/// entry that caused it; these never abort a scan.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("entry no longer exists")]
    NotFound,

    #[error("{0}")]
    Other(io::Error),
}

impl From<io::Error> for AccessError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => AccessError::PermissionDenied,
            io::ErrorKind::NotFound => AccessError::NotFound,
            _ => AccessError::Other(err),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SiftError>;
