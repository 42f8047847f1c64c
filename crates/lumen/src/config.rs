//! Resolver configuration.
//!
//! Configuration is optional: [`ResolverConfig::default`] reproduces the stock
//! storage key and palettes. A YAML file may override any part of it:
//!
//! ```yaml
//! storage_key: dashboard-theme
//! palettes:
//!   dark:
//!     background: "#1f2937"
//!     foreground: "#f9fafb"
//!     border: "#374151"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::Palettes;
use crate::util::parse_hex_color;

/// Key of the durable slot holding the preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Slot the preference is read from and written to.
    pub storage_key: String,
    /// Toast colors per resolved mode.
    pub palettes: Palettes,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            palettes: Palettes::default(),
        }
    }
}

impl ResolverConfig {
    /// Parses and validates a YAML document. An empty document yields defaults.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// Checks the storage key and that every palette value is a hex color.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        for (mode, palette) in [("light", &self.palettes.light), ("dark", &self.palettes.dark)] {
            let fields = [
                ("background", &palette.background),
                ("foreground", &palette.foreground),
                ("border", &palette.border),
            ];
            for (field, value) in fields {
                if parse_hex_color(value).is_none() {
                    return Err(ConfigError::InvalidColor {
                        name: format!("{mode}.{field}"),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ToastPalette;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_matches_stock_values() {
        let config = ResolverConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.palettes.dark, ToastPalette::dark());
        assert_eq!(config.palettes.light, ToastPalette::light());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ResolverConfig::from_yaml_str("  \n").unwrap(),
            ResolverConfig::default()
        );
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let yaml = r##"
palettes:
  dark:
    background: "#000000"
    foreground: "#ffffff"
    border: "#222"
"##;
        let config = ResolverConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.palettes.light, ToastPalette::light());
        assert_eq!(config.palettes.dark.background, "#000000");
        assert_eq!(config.palettes.dark.border, "#222");
    }

    #[test]
    fn test_custom_storage_key() {
        let config = ResolverConfig::from_yaml_str("storage_key: dashboard-theme").unwrap();
        assert_eq!(config.storage_key, "dashboard-theme");
    }

    #[test]
    fn test_rejects_empty_storage_key() {
        let err = ResolverConfig::from_yaml_str("storage_key: ''").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStorageKey));
    }

    #[test]
    fn test_rejects_non_hex_color() {
        let yaml = r##"
palettes:
  light:
    background: white
    foreground: "#111827"
    border: "#e5e7eb"
"##;
        let err = ResolverConfig::from_yaml_str(yaml).unwrap_err();
        match err {
            ConfigError::InvalidColor { name, value } => {
                assert_eq!(name, "light.background");
                assert_eq!(value, "white");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = ResolverConfig::from_yaml_str("storage: theme").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "storage_key: ui-theme").unwrap();
        let config = ResolverConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.storage_key, "ui-theme");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = ResolverConfig::from_yaml_file("/nonexistent/lumen.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
