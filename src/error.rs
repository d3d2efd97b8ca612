use std::path::PathBuf;

/// Errors that can occur while reading or writing the high-score table.
#[derive(Debug, thiserror::Error)]
pub enum ScoreStoreError {
    #[error("failed to read scores from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scores from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_store_error_display() {
        let err = ScoreStoreError::Read {
            path: PathBuf::from("scores.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read scores from scores.json: denied");
    }

    #[test]
    fn test_score_store_error_from_io() {
        let err: ScoreStoreError =
            std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert_eq!(err.to_string(), "I/O error: disk full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("scores.capacity must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: scores.capacity must be >= 1"
        );
    }
}
