//! Error types for the alert widget.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring an [`AlertFlash`](crate::AlertFlash).
///
/// Rendering itself never fails; every error surfaces while the widget is
/// being configured, before any markup is produced.
#[derive(Debug, Error)]
pub enum AlertError {
    /// A body or header tag name was empty.
    #[error("{element} tag must be a non-empty string")]
    EmptyTag { element: &'static str },

    /// A YAML configuration could not be parsed.
    #[error("invalid alert configuration: {0}")]
    Config(String),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_yaml::Error> for AlertError {
    fn from(err: serde_yaml::Error) -> Self {
        AlertError::Config(err.to_string())
    }
}

/// Result type for alert configuration.
pub type Result<T> = std::result::Result<T, AlertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag_display() {
        let err = AlertError::EmptyTag { element: "body" };
        assert_eq!(err.to_string(), "body tag must be a non-empty string");
    }

    #[test]
    fn test_io_error_display_and_source() {
        let err = AlertError::Io {
            path: PathBuf::from("alerts.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("alerts.yaml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let err: AlertError = yaml_err.into();
        assert!(matches!(err, AlertError::Config(_)));
    }
}
