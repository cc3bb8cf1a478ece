//! Credential schemes and credential updates for SWA applications

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::client::models::{AppCredentials, PasswordValue, UserNameTemplate};
use crate::error::{Error, Result};
use crate::secret::SecretString;

/// Username template applied when no shared credentials are given
pub const DEFAULT_USERNAME_TEMPLATE: &str = "${source.login}";

/// Template type for Okta's built-in expressions
pub const BUILT_IN_TEMPLATE_TYPE: &str = "BUILT_IN";

/// How credentials for an SWA app are sourced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialScheme {
    /// Administrator sets username and password
    #[value(name = "ADMIN_SETS_CREDENTIALS", alias = "admin-sets-credentials")]
    AdminSetsCredentials,
    /// User edits the password only
    #[value(name = "EDIT_PASSWORD_ONLY", alias = "edit-password-only")]
    EditPasswordOnly,
    /// User edits username and password
    #[value(name = "EDIT_USERNAME_AND_PASSWORD", alias = "edit-username-and-password")]
    EditUsernameAndPassword,
    /// Okta password is synced to the app
    #[value(name = "EXTERNAL_PASSWORD_SYNC", alias = "external-password-sync")]
    ExternalPasswordSync,
    /// Everyone shares one username and password
    #[value(name = "SHARED_USERNAME_AND_PASSWORD", alias = "shared-username-and-password")]
    SharedUsernameAndPassword,
}

impl CredentialScheme {
    /// Wire name used by the Okta API
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialScheme::AdminSetsCredentials => "ADMIN_SETS_CREDENTIALS",
            CredentialScheme::EditPasswordOnly => "EDIT_PASSWORD_ONLY",
            CredentialScheme::EditUsernameAndPassword => "EDIT_USERNAME_AND_PASSWORD",
            CredentialScheme::ExternalPasswordSync => "EXTERNAL_PASSWORD_SYNC",
            CredentialScheme::SharedUsernameAndPassword => "SHARED_USERNAME_AND_PASSWORD",
        }
    }
}

impl fmt::Display for CredentialScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replacement for an application's credentials block
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialUpdate {
    /// Literal shared username and password
    Explicit {
        scheme: CredentialScheme,
        username: String,
        password: SecretString,
    },
    /// Scheme with the built-in `${source.login}` username template
    Template { scheme: CredentialScheme },
}

impl CredentialUpdate {
    /// Combine the optional scheme, username and password inputs.
    ///
    /// Returns `Ok(None)` when nothing was supplied. Username and password
    /// must come together, and both need a scheme.
    pub fn from_parts(
        scheme: Option<CredentialScheme>,
        username: Option<String>,
        password: Option<SecretString>,
    ) -> Result<Option<Self>> {
        match (scheme, username, password) {
            (None, None, None) => Ok(None),
            (None, _, _) => Err(Error::Validation(
                "--username and --password require --scheme".to_string(),
            )),
            (Some(scheme), Some(username), Some(password)) => {
                if username.trim().is_empty() {
                    return Err(Error::Validation("--username must not be empty".to_string()));
                }
                Ok(Some(CredentialUpdate::Explicit {
                    scheme,
                    username,
                    password,
                }))
            }
            (Some(scheme), None, None) => Ok(Some(CredentialUpdate::Template { scheme })),
            (Some(_), Some(_), None) => Err(Error::Validation(
                "--username requires --password".to_string(),
            )),
            (Some(_), None, Some(_)) => Err(Error::Validation(
                "--password requires --username".to_string(),
            )),
        }
    }

    pub fn scheme(&self) -> CredentialScheme {
        match self {
            CredentialUpdate::Explicit { scheme, .. } | CredentialUpdate::Template { scheme } => {
                *scheme
            }
        }
    }

    /// The credentials block that replaces the fetched one
    pub fn to_credentials(&self) -> AppCredentials {
        match self {
            CredentialUpdate::Explicit {
                scheme,
                username,
                password,
            } => AppCredentials {
                scheme: Some(scheme.as_str().to_string()),
                user_name: Some(username.clone()),
                password: Some(PasswordValue {
                    value: Some(password.expose().to_string()),
                    extra: Map::new(),
                }),
                ..Default::default()
            },
            CredentialUpdate::Template { scheme } => AppCredentials {
                scheme: Some(scheme.as_str().to_string()),
                user_name_template: Some(UserNameTemplate {
                    template: Some(DEFAULT_USERNAME_TEMPLATE.to_string()),
                    template_type: Some(BUILT_IN_TEMPLATE_TYPE.to_string()),
                    extra: Map::new(),
                }),
                ..Default::default()
            },
        }
    }
}
