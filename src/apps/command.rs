//! Validated SWA app commands

use reqwest::Url;

use super::credentials::CredentialUpdate;
use crate::client::models::Visibility;
use crate::error::{Error, Result};

/// Dashboard toggles applied when an app is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityOptions {
    pub auto_submit_toolbar: bool,
    pub hide_ios: bool,
    pub hide_web: bool,
}

impl From<VisibilityOptions> for Visibility {
    fn from(opts: VisibilityOptions) -> Self {
        Visibility::new(opts.auto_submit_toolbar, opts.hide_ios, opts.hide_web)
    }
}

/// Create a new SWA application
#[derive(Debug, Clone, PartialEq)]
pub struct CreateApp {
    pub label: Option<String>,
    pub login_url: Option<String>,
    pub redirect_url: Option<String>,
    pub visibility: VisibilityOptions,
}

impl CreateApp {
    pub fn new(
        label: Option<String>,
        login_url: Option<String>,
        redirect_url: Option<String>,
        visibility: VisibilityOptions,
    ) -> Result<Self> {
        Ok(Self {
            label: validate_label(label)?,
            login_url: validate_url("--login-url", login_url)?,
            redirect_url: validate_url("--redirect-url", redirect_url)?,
            visibility,
        })
    }
}

/// Read-modify-write update of an existing SWA application
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateApp {
    pub id: String,
    pub label: Option<String>,
    pub login_url: Option<String>,
    pub redirect_url: Option<String>,
    pub credentials: Option<CredentialUpdate>,
}

impl UpdateApp {
    pub fn new(
        id: impl Into<String>,
        label: Option<String>,
        login_url: Option<String>,
        redirect_url: Option<String>,
        credentials: Option<CredentialUpdate>,
    ) -> Result<Self> {
        Ok(Self {
            id: validate_app_id(id.into())?,
            label: validate_label(label)?,
            login_url: validate_url("--login-url", login_url)?,
            redirect_url: validate_url("--redirect-url", redirect_url)?,
            credentials,
        })
    }

    /// True when the update would send the fetched descriptor back unchanged
    pub fn is_noop(&self) -> bool {
        self.label.is_none()
            && self.login_url.is_none()
            && self.redirect_url.is_none()
            && self.credentials.is_none()
    }
}

/// One invocation of the SWA App Manager
#[derive(Debug, Clone, PartialEq)]
pub enum SwaCommand {
    Create(CreateApp),
    Update(UpdateApp),
}

/// Okta app IDs are opaque alphanumeric strings; anything that could
/// escape the `/apps/{id}` path segment is rejected.
fn validate_app_id(id: String) -> Result<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("application ID must not be empty".to_string()));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::Validation(format!(
            "invalid application ID '{}'",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

fn validate_label(label: Option<String>) -> Result<Option<String>> {
    match label {
        Some(l) if l.trim().is_empty() => {
            Err(Error::Validation("--label must not be blank".to_string()))
        }
        other => Ok(other),
    }
}

fn validate_url(flag: &str, value: Option<String>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };

    let url = Url::parse(&value)
        .map_err(|e| Error::Validation(format!("{} '{}' is not a valid URL: {}", flag, value, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(Some(value)),
        other => Err(Error::Validation(format!(
            "{} must use http or https, got '{}'",
            flag, other
        ))),
    }
}
