//! Client configuration management.
//!
//! Holds the team, access token and API settings the client is built from,
//! plus logging preferences. Configuration is persisted as TOML on disk and
//! can be overridden from `DOCBASE_*` environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{DocbaseError, DocbaseResult};

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// DocBase API settings.
    #[serde(default)]
    pub api: ClientConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings a `DocbaseClient` is constructed from. Immutable once the client
/// has been built.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Team (tenant) name used in every request path.
    #[serde(default)]
    pub team: String,

    /// Access token sent in the `X-DocBaseToken` header.
    #[serde(default)]
    pub token: String,

    /// API version sent in the `X-Api-Version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// API origin, e.g. "https://api.docbase.io".
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, logs go to the console only.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output for the file layer.
    #[serde(default)]
    pub json_output: bool,
}

fn default_api_version() -> String {
    constants::DEFAULT_API_VERSION.to_string()
}

fn default_base_url() -> String {
    constants::DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    constants::DEFAULT_TIMEOUT_MS
}

fn default_connect_timeout() -> u64 {
    constants::DEFAULT_CONNECT_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            team: String::new(),
            token: String::new(),
            api_version: default_api_version(),
            base_url: default_base_url(),
            timeout_ms: default_timeout(),
            connect_timeout_ms: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

// The token never shows up in logs or panic messages.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("team", &self.team)
            .field("token", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}

impl ClientConfig {
    /// Config for the public DocBase API with default version and timeouts.
    pub fn new(team: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    /// Point the client at a different API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the requested API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Check that every value needed to issue requests is present.
    pub fn validate(&self) -> DocbaseResult<()> {
        if self.team.trim().is_empty() {
            return Err(DocbaseError::Config("team must be set".into()));
        }
        if !is_team_label(&self.team) {
            return Err(DocbaseError::Config(format!(
                "team {:?} is not a valid subdomain label",
                self.team
            )));
        }
        if self.token.trim().is_empty() {
            return Err(DocbaseError::Config("token must be set".into()));
        }
        if self.api_version.trim().is_empty() {
            return Err(DocbaseError::Config("api_version must be set".into()));
        }
        if Self::sanitize_base_url(&self.base_url).is_empty() {
            return Err(DocbaseError::Config("base_url must be set".into()));
        }
        Ok(())
    }

    /// Base URL with surrounding whitespace, quotes and trailing slashes removed.
    pub fn sanitize_base_url(base_url: &str) -> String {
        base_url
            .trim()
            .trim_matches('"')
            .trim()
            .trim_end_matches('/')
            .to_string()
    }
}

/// A team name is the subdomain of `{team}.docbase.io`: ASCII letters, digits
/// and inner hyphens.
fn is_team_label(team: &str) -> bool {
    team.len() <= 63
        && !team.starts_with('-')
        && !team.ends_with('-')
        && team.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl AppConfig {
    /// Load configuration from the default config file path, falling back to
    /// defaults when the file does not exist. Environment overrides are applied.
    pub fn load_default() -> DocbaseResult<Self> {
        let path = Self::default_config_path()?;
        let mut config = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> DocbaseResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> DocbaseResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| DocbaseError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    ///
    /// - Linux: `~/.config/docbase/config.toml`
    /// - macOS: `~/Library/Application Support/docbase/config.toml`
    /// - Windows: `%APPDATA%/docbase/config.toml`
    pub fn default_config_path() -> DocbaseResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| DocbaseError::Config("could not determine config directory".into()))?;
        Ok(base.join("docbase").join("config.toml"))
    }

    /// Apply `DOCBASE_*` environment variables on top of the loaded values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(team) = get(constants::env::TEAM) {
            self.api.team = team;
        }
        if let Some(token) = get(constants::env::TOKEN) {
            self.api.token = token;
        }
        if let Some(version) = get(constants::env::API_VERSION) {
            self.api.api_version = version;
        }
        if let Some(base_url) = get(constants::env::BASE_URL) {
            self.api.base_url = base_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.api_version, "2");
        assert_eq!(config.api.base_url, "https://api.docbase.io");
        assert_eq!(config.api.timeout_ms, 30_000);
        assert_eq!(config.logging.level, "info");
        assert!(config.api.validate().is_err());
    }

    #[test]
    fn test_validate_requires_team_and_token() {
        assert!(ClientConfig::new("kray", "secret").validate().is_ok());

        let err = ClientConfig::new("", "secret").validate().unwrap_err();
        assert_eq!(err.to_string(), "configuration error: team must be set");

        let err = ClientConfig::new("kray", "  ").validate().unwrap_err();
        assert_eq!(err.to_string(), "configuration error: token must be set");

        let err = ClientConfig::new("kray", "secret")
            .with_base_url("/")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "configuration error: base_url must be set");
    }

    #[test]
    fn test_validate_rejects_team_outside_subdomain_label() {
        for team in [".", "..", "my team", "a/b", "-kray", "kray-", "kray.io"] {
            let err = ClientConfig::new(team, "secret").validate().unwrap_err();
            assert!(matches!(err, DocbaseError::Config(_)), "{team:?}");
        }
        assert!(ClientConfig::new("kray-dev2", "secret").validate().is_ok());
        assert!(ClientConfig::new("a".repeat(64), "secret").validate().is_err());
    }

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            ClientConfig::sanitize_base_url("https://api.docbase.io/"),
            "https://api.docbase.io"
        );
        assert_eq!(
            ClientConfig::sanitize_base_url("  \"http://127.0.0.1:8080//\"  "),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("kray", "very-secret-token");
        let debug = format!("{config:?}");
        assert!(debug.contains("kray"));
        assert!(!debug.contains("very-secret-token"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DOCBASE_TEAM", "kray"),
            ("DOCBASE_TOKEN", "t0ken"),
            ("DOCBASE_API_VERSION", ""),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.team, "kray");
        assert_eq!(config.api.token, "t0ken");
        // empty values leave the default alone
        assert_eq!(config.api.api_version, "2");
        assert_eq!(config.api.base_url, "https://api.docbase.io");
    }

    #[test]
    fn test_roundtrip_toml_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.api = ClientConfig::new("kray", "t0ken").with_base_url("http://localhost:9000");
        config.logging.json_output = true;
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.team, "kray");
        assert_eq!(loaded.api.token, "t0ken");
        assert_eq!(loaded.api.base_url, "http://localhost:9000");
        assert_eq!(loaded.api.timeout_ms, config.api.timeout_ms);
        assert!(loaded.logging.json_output);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            team = "kray"
            token = "t0ken"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.api_version, "2");
        assert_eq!(config.api.connect_timeout_ms, 15_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\nteam = ").unwrap();
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, DocbaseError::Config(_)));
    }
}
