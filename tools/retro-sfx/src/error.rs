//! Error types for synthesis and export

use std::path::PathBuf;

/// Errors raised while loading effect tables or writing WAV files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write WAV file {}: {source}", path.display())]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to parse effect manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("Invalid effect '{id}': {reason}")]
    InvalidEffect { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn wav(path: impl Into<PathBuf>, source: hound::Error) -> Self {
        Self::Wav {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEffect {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
