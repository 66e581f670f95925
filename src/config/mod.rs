//! Import handler configuration
//!
//! Handles parsing of `.mondrian-import.toml` configuration files and
//! environment variable overrides.

use serde::{Deserialize, Serialize};
#[cfg(feature = "config-file")]
use std::path::Path;

/// Repository path delimiter
pub const REPOSITORY_SEPARATOR: &str = "/";

/// Default configuration filename
pub const CONFIG_FILENAME: &str = ".mondrian-import.toml";

/// Environment variable for the repository path delimiter
pub const ENV_REPOSITORY_SEPARATOR: &str = "MONDRIAN_IMPORT_REPOSITORY_SEPARATOR";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Configuration error: {0}")]
    ParseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Repository configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositorySection {
    /// Delimiter placed between `mondrian:` and the catalog name
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    REPOSITORY_SEPARATOR.to_string()
}

impl Default for RepositorySection {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

/// Main configuration structure
///
/// Represents the `.mondrian-import.toml` configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ImportConfig {
    #[serde(default)]
    pub repository: RepositorySection,
}

impl ImportConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a custom repository delimiter
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            repository: RepositorySection {
                separator: separator.into(),
            },
        }
    }

    pub fn repository_separator(&self) -> &str {
        &self.repository.separator
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(separator) = std::env::var(ENV_REPOSITORY_SEPARATOR)
            && !separator.is_empty()
        {
            self.repository.separator = separator;
        }
    }
}

#[cfg(feature = "config-file")]
impl ImportConfig {
    /// Load configuration from a directory
    ///
    /// Looks for `.mondrian-import.toml` in the directory.
    /// Falls back to defaults if not found.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::IoError(format!("Failed to read config: {}", e)))?;

            Self::parse(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse config: {}", e)))
    }

    /// Convert configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = ImportConfig::new();
        assert_eq!(config.repository_separator(), "/");
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn test_parse_config() {
        let toml = r#"
[repository]
separator = ":"
"#;
        let config = ImportConfig::parse(toml).unwrap();
        assert_eq!(config.repository_separator(), ":");
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = ImportConfig::parse("").unwrap();
        assert_eq!(config, ImportConfig::default());
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn test_parse_invalid_config() {
        let err = ImportConfig::parse("[repository\nseparator =").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn test_to_toml_roundtrip() {
        let config = ImportConfig::with_separator("|");
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("separator"));
        assert_eq!(ImportConfig::parse(&toml).unwrap(), config);
    }

    /// Sets or clears an environment variable, restoring the previous value on drop
    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let previous = std::env::var(key).ok();
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe { std::env::set_var(key, value) };
            Self { key, previous }
        }

        fn unset(key: &'static str) -> Self {
            let previous = std::env::var(key).ok();
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe { std::env::remove_var(key) };
            Self { key, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe {
                match &self.previous {
                    Some(value) => std::env::set_var(self.key, value),
                    None => std::env::remove_var(self.key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_env_override_replaces_separator() {
        let _guard = EnvGuard::set(ENV_REPOSITORY_SEPARATOR, "|");
        let mut config = ImportConfig::with_separator(":");
        config.apply_env_overrides();
        assert_eq!(config.repository_separator(), "|");
    }

    #[test]
    #[serial]
    fn test_empty_env_override_is_ignored() {
        let _guard = EnvGuard::set(ENV_REPOSITORY_SEPARATOR, "");
        let mut config = ImportConfig::with_separator(":");
        config.apply_env_overrides();
        assert_eq!(config.repository_separator(), ":");
    }

    #[cfg(feature = "config-file")]
    #[test]
    #[serial]
    fn test_load_from_directory() {
        let _guard = EnvGuard::unset(ENV_REPOSITORY_SEPARATOR);
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[repository]\nseparator = \"\\\\\"\n",
        )
        .unwrap();

        let config = ImportConfig::load(dir.path()).unwrap();
        assert_eq!(config.repository_separator(), "\\");
    }

    #[cfg(feature = "config-file")]
    #[test]
    #[serial]
    fn test_load_env_override_wins_over_file() {
        let _guard = EnvGuard::set(ENV_REPOSITORY_SEPARATOR, "|");
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "[repository]\nseparator = \":\"\n",
        )
        .unwrap();

        let config = ImportConfig::load(dir.path()).unwrap();
        assert_eq!(config.repository_separator(), "|");
    }

    #[cfg(feature = "config-file")]
    #[test]
    #[serial]
    fn test_load_missing_file_uses_defaults() {
        let _guard = EnvGuard::unset(ENV_REPOSITORY_SEPARATOR);
        let dir = tempfile::tempdir().unwrap();
        let config = ImportConfig::load(dir.path()).unwrap();
        assert_eq!(config.repository_separator(), REPOSITORY_SEPARATOR);
    }
}
