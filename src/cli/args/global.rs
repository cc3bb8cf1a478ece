//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::Overrides;
use crate::secret::SecretString;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; the config file is layered underneath in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Organization subdomain override
    pub org: Option<String>,

    /// API token override
    pub api_key: Option<SecretString>,

    /// Okta domain override
    pub domain: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,

    /// Custom config file path (defaults to ~/.oktaswa/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org.clone(),
            api_key: cli.api_key.clone(),
            domain: cli.domain.clone(),
            api_host: cli.api_host.clone(),
            config: cli.config.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Flag/env layer for config resolution
    pub fn overrides(&self) -> Overrides<'_> {
        Overrides {
            organization: self.org.as_deref(),
            api_key: self.api_key.as_ref(),
            domain: self.domain.as_deref(),
            api_host: self.api_host.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_overrides() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            org: Some("unicorns".to_string()),
            api_key: Some(SecretString::new("key")),
            domain: Some("oktapreview.com".to_string()),
            api_host: Some("http://localhost:8080".to_string()),
            config: Some("/custom/path".to_string()),
        };

        let overrides = opts.overrides();
        assert_eq!(overrides.organization, Some("unicorns"));
        assert_eq!(overrides.api_key.map(|k| k.expose()), Some("key"));
        assert_eq!(overrides.domain, Some("oktapreview.com"));
        assert_eq!(overrides.api_host, Some("http://localhost:8080"));
        assert_eq!(opts.config_ref(), Some("/custom/path"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Pretty,
            org: None,
            api_key: None,
            domain: None,
            api_host: None,
            config: None,
        };

        let overrides = opts.overrides();
        assert!(overrides.organization.is_none());
        assert!(overrides.api_key.is_none());
        assert_eq!(opts.config_ref(), None);
    }
}
