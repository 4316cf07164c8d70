//! Configuration document discovery and parsing.
//!
//! The document lives in a config directory as `config.yaml`, with
//! `config.json` as a fallback when no YAML file exists.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::document::ConfigDocument;

const YAML_FILENAME: &str = "config.yaml";
const JSON_FILENAME: &str = "config.json";

/// Format of the configuration document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Yaml,
    Json,
}

/// A configuration document found on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
}

/// Existence and modification time of the configuration document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ConfigStatus {
    pub exists: bool,
    /// Modification time in milliseconds since the Unix epoch, 0 when absent.
    pub mtime: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ConfigFormat>,
}

/// Error returned when the configuration document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Find the configuration document in `config_dir`. YAML takes precedence.
#[must_use]
pub fn find_config_file(config_dir: &Path) -> Option<ConfigFile> {
    [
        (YAML_FILENAME, ConfigFormat::Yaml),
        (JSON_FILENAME, ConfigFormat::Json),
    ]
    .into_iter()
    .map(|(name, format)| ConfigFile {
        path: config_dir.join(name),
        format,
    })
    .find(|file| file.path.is_file())
}

/// Report whether a configuration document exists and when it changed.
#[must_use]
pub fn check_config(config_dir: &Path) -> ConfigStatus {
    let Some(file) = find_config_file(config_dir) else {
        return ConfigStatus::default();
    };
    ConfigStatus {
        exists: true,
        mtime: mtime_millis(&file.path),
        format: Some(file.format),
    }
}

fn mtime_millis(path: &Path) -> f64 {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .ok()
        .and_then(|modified| modified.duration_since(UNIX_EPOCH).ok())
        .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
}

/// Load the configuration document from `config_dir`.
///
/// Returns `Ok(None)` when neither `config.yaml` nor `config.json` exists.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or parsed.
pub fn load_document(config_dir: &Path) -> Result<Option<ConfigDocument>, LoadError> {
    let Some(file) = find_config_file(config_dir) else {
        tracing::warn!(
            dir = %config_dir.display(),
            "No config file found (checked config.yaml and config.json)"
        );
        return Ok(None);
    };

    let content = std::fs::read_to_string(&file.path).map_err(|source| LoadError::Io {
        path: file.path.clone(),
        source,
    })?;
    let document = parse_document(&content, file.format, &file.path)?;
    tracing::debug!(path = %file.path.display(), format = ?file.format, "Config loaded");
    if document.uses_sections_shorthand() {
        tracing::warn!(
            path = %file.path.display(),
            "Top-level `sections` is deprecated, move them to a page in `pages`"
        );
    }
    Ok(Some(document))
}

/// Parse document text. Blank content is an empty document.
///
/// # Errors
///
/// Returns [`LoadError`] if the text is malformed for its format.
pub fn parse_document(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<ConfigDocument, LoadError> {
    if content.trim().is_empty() {
        return Ok(ConfigDocument::default());
    }
    match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}
