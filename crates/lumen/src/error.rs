//! Error types.
//!
//! None of these escape [`ThemeResolver`](crate::ThemeResolver) operations:
//! the resolver logs store failures and carries on. They are returned by the
//! lower-level APIs (stores, config loading, preference parsing).

use std::path::PathBuf;

use thiserror::Error;

/// A token that is not one of `light`, `dark` or `system`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid theme preference '{token}' (expected light, dark or system)")]
pub struct PreferenceParseError {
    pub token: String,
}

/// Failure reading or writing a [`PreferenceStore`](crate::PreferenceStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read preferences from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write preferences to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed preferences file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode preferences: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

/// Failure loading a [`ResolverConfig`](crate::ResolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("palette color '{name}' is not a hex color: '{value}'")]
    InvalidColor { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parse_error_display() {
        let err = PreferenceParseError {
            token: "sepia".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sepia"));
        assert!(msg.contains("light, dark or system"));
    }

    #[test]
    fn test_invalid_color_display() {
        let err = ConfigError::InvalidColor {
            name: "dark.border".to_string(),
            value: "blue;".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dark.border"));
        assert!(msg.contains("blue;"));
    }
}
