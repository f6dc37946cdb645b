//! Configuration constants and the optional TOML configuration file.
//!
//! The listen address is fixed. The file only covers how the pod identity
//! is resolved and how logs are emitted; without a file every value takes
//! its default.

use std::path::Path;

use serde::Deserialize;

// =============================================================================
// Listener
// =============================================================================

/// Port the probe server binds on all interfaces
pub const LISTEN_PORT: u16 = 8080;

// =============================================================================
// Probe responses
// =============================================================================

/// Cache-Control for every probe, toggle and pod response
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Environment variable the pod identity is read from
pub const DEFAULT_IDENTITY_ENV_VAR: &str = "HOSTNAME";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "podprobe=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the pod identity comes from
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pod identity source
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Environment variable read once at startup (default: HOSTNAME)
    #[serde(default = "IdentityConfig::default_env_var")]
    pub env_var: String,
    /// Explicit identity, takes precedence over the environment variable
    pub name: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            env_var: Self::default_env_var(),
            name: None,
        }
    }
}

impl IdentityConfig {
    fn default_env_var() -> String {
        DEFAULT_IDENTITY_ENV_VAR.to_string()
    }

    /// Resolve the pod identity from the process environment.
    ///
    /// An unset or non-unicode variable yields an empty identity.
    pub fn resolve(&self) -> String {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve the pod identity using `lookup` in place of the environment.
    pub fn resolve_with<F>(&self, lookup: F) -> String
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match &self.name {
            Some(name) => name.clone(),
            None => lookup(&self.env_var).unwrap_or_default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
    /// Filter used when neither --log-level nor RUST_LOG is set
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
            filter: None,
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.identity.env_var.trim().is_empty() {
            return Err(ConfigError::Validation(
                "identity.env_var must not be empty".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                other
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.identity.env_var, "HOSTNAME");
        assert!(config.identity.name.is_none());
        assert_eq!(config.logging.format, "text");
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let config = AppConfig::parse(
            r#"
            [identity]
            env_var = "POD_NAME"
            name = "web-7f9"

            [logging]
            format = "json"
            filter = "podprobe=debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.identity.env_var, "POD_NAME");
        assert_eq!(config.identity.name.as_deref(), Some("web-7f9"));
        assert!(config.logging.is_json());
        assert_eq!(config.logging.filter.as_deref(), Some("podprobe=debug"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = AppConfig::parse("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_blank_env_var() {
        let err = AppConfig::parse("[identity]\nenv_var = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AppConfig::parse("[identity").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[identity]\nname = \"from-file\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.identity.name.as_deref(), Some("from-file"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn identity_reads_configured_variable() {
        let identity = IdentityConfig::default();
        let name = identity.resolve_with(|key| {
            assert_eq!(key, "HOSTNAME");
            Some("web-7f9".to_string())
        });
        assert_eq!(name, "web-7f9");
    }

    #[test]
    fn identity_absent_variable_is_empty() {
        let identity = IdentityConfig::default();
        assert_eq!(identity.resolve_with(|_| None), "");
    }

    #[test]
    fn identity_override_wins() {
        let identity = IdentityConfig {
            env_var: "HOSTNAME".to_string(),
            name: Some("pinned".to_string()),
        };
        assert_eq!(identity.resolve_with(|_| Some("ignored".to_string())), "pinned");
    }
}
