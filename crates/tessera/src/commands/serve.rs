//! `tessera serve` command implementation.

use clap::Args;
use tessera_config::CliSettings;
use tessera_server::{run_server, server_config_from_config};
use tessera_site::loader;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            ..Default::default()
        };
        let config = self.site.load_config(cli_settings)?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Config directory: {}",
            config.site_resolved.config_dir.display()
        ));
        output.info(&format!("Mode: {}", config.site_resolved.mode));
        match loader::find_config_file(&config.site_resolved.config_dir) {
            Some(file) => output.info(&format!("Site config: {}", file.path.display())),
            None => output.warning(
                "No config.yaml or config.json yet, serving a placeholder until one appears",
            ),
        }

        output.muted("Press Ctrl-C to stop");

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
