//! Configuration management for oktaswa
//!
//! Settings come from CLI flags, environment variables (both handled by
//! clap) and an optional YAML file, in that order of precedence.

use serde::Deserialize;
use std::path::PathBuf;

use crate::client::{DEFAULT_DOMAIN, org_base_url};
use crate::error::{ConfigError, Result};
use crate::secret::SecretString;

/// Contents of the optional config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Okta organization subdomain
    #[serde(default)]
    pub organization: Option<String>,

    /// Okta API token
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Okta domain (okta.com, oktapreview.com, okta-emea.com)
    #[serde(default)]
    pub domain: Option<String>,

    /// Full scheme+host override, bypassing organization and domain
    #[serde(default)]
    pub api_host: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub organization: Option<&'a str>,
    pub api_key: Option<&'a SecretString>,
    pub domain: Option<&'a str>,
    pub api_host: Option<&'a str>,
}

/// Fully resolved connection settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub organization: String,
    pub api_key: SecretString,
    pub domain: String,
    pub api_host: Option<String>,
}

impl Settings {
    /// Scheme and host every request goes to
    pub fn base_url(&self) -> String {
        match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None => org_base_url(&self.organization, &self.domain),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".oktaswa").join("config.yaml"))
    }

    /// Path a load would read: the explicit one, or the default
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. A missing default file is treated as
    /// an empty configuration.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        if path.is_none() && !resolved.exists() {
            return Ok(Self::default());
        }
        Self::load_from(resolved)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Layer overrides on top of the file and check that everything
    /// required is present.
    pub fn resolve(self, overrides: &Overrides<'_>) -> Result<Settings> {
        let api_host = overrides
            .api_host
            .map(String::from)
            .or(self.api_host)
            .filter(|h| !h.trim().is_empty());

        let organization = overrides
            .organization
            .map(String::from)
            .or(self.organization)
            .filter(|o| !o.trim().is_empty())
            .ok_or(ConfigError::MissingOrganization)?;
        validate_organization(&organization)?;

        let api_key = overrides
            .api_key
            .cloned()
            .or(self.api_key)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let domain = overrides
            .domain
            .map(String::from)
            .or(self.domain)
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string());

        Ok(Settings {
            organization,
            api_key,
            domain,
            api_host,
        })
    }
}

/// The organization is a single DNS label in front of the Okta domain
fn validate_organization(org: &str) -> Result<()> {
    if org.contains('.') {
        return Err(ConfigError::Invalid(format!(
            "organization '{}' must be the subdomain only; use --domain for the rest",
            org
        ))
        .into());
    }
    if !org.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ConfigError::Invalid(format!(
            "organization '{}' is not a valid subdomain",
            org
        ))
        .into());
    }
    Ok(())
}
