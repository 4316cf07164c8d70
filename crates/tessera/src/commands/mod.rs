//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod sections;
pub(crate) mod serve;
pub(crate) mod validate;

use std::path::PathBuf;

use clap::Args;
use tessera_config::{CliSettings, Config};
use tessera_sections::RenderMode;
use tessera_site::Site;

pub(crate) use render::RenderArgs;
pub(crate) use sections::SectionsArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use validate::ValidateArgs;

use crate::error::CliError;

/// Configuration arguments shared by commands that read a site.
#[derive(Args, Debug, Default)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover tessera.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding config.yaml or config.json (overrides config).
    #[arg(long, env = "TESSERA_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Render in development mode (overrides config and TESSERA_ENV).
    #[arg(long)]
    dev: bool,
}

impl SiteArgs {
    /// Load the tool configuration with these arguments applied on top.
    pub(crate) fn load_config(&self, mut settings: CliSettings) -> Result<Config, CliError> {
        settings.config_dir.clone_from(&self.config_dir);
        if self.dev {
            settings.mode = Some(RenderMode::Development);
        }
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }

    /// Load the tool configuration and open the site it points at.
    pub(crate) fn open_site(&self) -> Result<Site, CliError> {
        let config = self.load_config(CliSettings::default())?;
        Ok(Site::new(
            config.site_resolved.config_dir,
            config.site_resolved.mode,
        ))
    }
}
