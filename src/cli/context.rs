//! Command execution context
//!
//! Loads config, resolves settings and builds the API client once per command.

use log::debug;

use crate::apps::SwaAppManager;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::OktaClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution: the manager and the output format
pub struct CommandContext {
    /// SWA App Manager bound to a live Okta client
    pub manager: SwaAppManager<OktaClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a command context.
    ///
    /// # Errors
    /// Returns error if the config file cannot be read, or organization or
    /// API key are missing after all layers are applied.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let settings = config.resolve(&opts.overrides())?;

        let client = OktaClient::new(settings.base_url(), settings.api_key.clone())?;
        debug!(
            "Using Okta base URL {} for organization {}",
            client.base_url(),
            settings.organization
        );

        Ok(Self {
            manager: SwaAppManager::new(client),
            format: opts.format,
        })
    }
}
