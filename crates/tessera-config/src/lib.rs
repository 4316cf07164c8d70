//! Tool configuration for Tessera.
//!
//! Parses `tessera.toml` with serde and discovers it in the current
//! directory or its parents. [`CliSettings`] passed to [`Config::load`]
//! override file values, and the `TESSERA_ENV` variable selects the render
//! mode when no flag does.
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.config_dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tessera_sections::RenderMode;

/// CLI settings that override configuration file values.
///
/// Only `Some` values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Override the directory holding `config.yaml` / `config.json`.
    pub config_dir: Option<PathBuf>,
    pub mode: Option<RenderMode>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tessera.toml";

/// Environment variable selecting the render mode.
pub const MODE_ENV_VAR: &str = "TESSERA_ENV";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// Site section as written in TOML.
    site: SiteConfigRaw,

    /// Resolved site settings (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteSettings,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    #[allow(clippy::derivable_impls)]
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    config_dir: Option<String>,
    mode: Option<RenderMode>,
}

/// Resolved site settings with absolute paths.
#[derive(Debug, Default)]
pub struct SiteSettings {
    /// Directory holding the site configuration document.
    pub config_dir: PathBuf,
    pub mode: RenderMode,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `tessera.toml` in the current directory and parents, falling back
    /// to defaults relative to the current directory.
    ///
    /// Precedence for the render mode: CLI setting, then `TESSERA_ENV`, then
    /// the file, then production.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// `TESSERA_ENV` holds an unknown mode.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        config.apply_env_mode(std::env::var(MODE_ENV_VAR).ok().as_deref())?;
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_env_mode(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
            return Ok(());
        };
        self.site_resolved.mode = value
            .parse()
            .map_err(|e| ConfigError::Validation(format!("{MODE_ENV_VAR}: {e}")))?;
        Ok(())
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(config_dir) = &settings.config_dir {
            self.site_resolved.config_dir.clone_from(config_dir);
        }
        if let Some(mode) = settings.mode {
            self.site_resolved.mode = mode;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            site_resolved: SiteSettings {
                config_dir: base.join("config"),
                mode: RenderMode::default(),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values. Called automatically after loading
    /// from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        if let Some(ref dir) = self.site.config_dir {
            self.site.config_dir = Some(expand::expand_env(dir, "site.config_dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the directory holding `tessera.toml`.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteSettings {
            config_dir: config_dir.join(self.site.config_dir.as_deref().unwrap_or("config")),
            mode: self.site.mode.unwrap_or_default(),
        };
    }
}
