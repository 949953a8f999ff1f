//! Error types for the Galton board.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for board operations.
pub type GaltonResult<T> = Result<T, GaltonError>;

/// Everything that can go wrong building, running or saving a board.
///
/// Sampling itself never fails once a configuration has been validated.
#[derive(Debug, Error)]
pub enum GaltonError {
    /// Invalid board parameter.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Filesystem failure (config files, image rename).
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image encoding or writing failed.
    #[error("Failed to write image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Malformed configuration file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GaltonError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures raised while persisting output.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Image { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_message() {
        let err = GaltonError::config("peg_radius must be positive");
        assert_eq!(
            err.to_string(),
            "Configuration error: peg_radius must be positive"
        );
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_includes_path() {
        let err = GaltonError::io(
            "/nope/board.png",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.is_io());
        assert!(err.to_string().contains("/nope/board.png"));
    }
}
