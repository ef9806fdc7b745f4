//! Network data error types.

/// Errors that can occur when loading a world's lines.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the line data
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Failed to read fixture data
    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    /// World name is empty or contains characters we will not pass on
    #[error("invalid world name: {0:?}")]
    InvalidWorld(String),

    /// Provider has no such world
    #[error("unknown world: {0}")]
    UnknownWorld(String),
}

impl NetworkError {
    /// Whether the error means the caller asked for something that does
    /// not exist, as opposed to the provider failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetworkError::UnknownWorld(_))
    }
}

/// Check a world name before it is put into a URL or a file path.
///
/// Accepts non-empty names of ASCII letters, digits, `-` and `_`.
pub fn validate_world(world: &str) -> Result<(), NetworkError> {
    let ok = !world.is_empty()
        && world
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if ok {
        Ok(())
    } else {
        Err(NetworkError::InvalidWorld(world.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = NetworkError::UnknownWorld("atlantis".into());
        assert_eq!(err.to_string(), "unknown world: atlantis");
        assert!(err.is_not_found());

        let err = NetworkError::InvalidWorld("../etc".into());
        assert_eq!(err.to_string(), "invalid world name: \"../etc\"");
        assert!(!err.is_not_found());
    }

    #[test]
    fn world_names() {
        assert!(validate_world("tokyo").is_ok());
        assert!(validate_world("Tokyo-2050_alt").is_ok());

        assert!(validate_world("").is_err());
        assert!(validate_world("../secret").is_err());
        assert!(validate_world("a b").is_err());
        assert!(validate_world("東京").is_err());
    }
}
