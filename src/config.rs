//! Configuration System
//!
//! Handles loading configuration for the command-line tools from files and
//! environment variables. Supports TOML config files and environment variable
//! overrides. The web frontend does not read this file; it takes its asset
//! base from `FOLIO_ASSET_BASE` at build time.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Content and asset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Prefix for visual sources
    #[serde(default = "default_asset_base")]
    pub asset_base: String,

    /// Projects document to use instead of the embedded one
    #[serde(default)]
    pub projects_file: Option<PathBuf>,

    /// Site document to use instead of the embedded one
    #[serde(default)]
    pub site_file: Option<PathBuf>,
}

fn default_asset_base() -> String {
    "/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            asset_base: default_asset_base(),
            projects_file: None,
            site_file: None,
        }
    }
}

/// Preview server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built frontend to serve
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("folio-ui/dist")
}

impl ServeConfig {
    /// `host:port` to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(feature = "cli")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("folio").join("config.toml")),
            Some(PathBuf::from("./folio.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var("FOLIO_ASSET_BASE") {
            self.site.asset_base = base;
        }

        if let Ok(host) = std::env::var("FOLIO_SERVE_HOST") {
            self.serve.host = host;
        }
        if let Ok(port) = std::env::var("FOLIO_SERVE_PORT") {
            match port.parse() {
                Ok(p) => self.serve.port = p,
                Err(_) => tracing::warn!("Ignoring invalid FOLIO_SERVE_PORT {:?}", port),
            }
        }
        if let Ok(dir) = std::env::var("FOLIO_DIST_DIR") {
            self.serve.dist_dir = PathBuf::from(dir);
        }

        if let Ok(level) = std::env::var("FOLIO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("FOLIO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Folio Configuration
#
# Environment variables override these settings:
# - FOLIO_ASSET_BASE
# - FOLIO_SERVE_HOST
# - FOLIO_SERVE_PORT
# - FOLIO_DIST_DIR
# - FOLIO_LOG_LEVEL
# - FOLIO_LOG_FORMAT

[site]
# Prefix joined onto relative image paths
asset_base = "/"

# Content documents to use instead of the compiled-in ones
# projects_file = "content/projects.toml"
# site_file = "content/site.toml"

[serve]
# Preview server host
host = "127.0.0.1"

# Preview server port
port = 8084

# Built frontend directory
dist_dir = "folio-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json
format = "pretty"
"#
    .to_string()
}
