//! Application field arguments shared by `app create` and `app update`

use clap::Args;

use crate::apps::{CredentialScheme, CredentialUpdate, VisibilityOptions};
use crate::error::Result;
use crate::secret::SecretString;

/// Descriptor fields that both create and update can set.
///
/// ```ignore
/// Create {
///     #[command(flatten)]
///     fields: AppFieldArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct AppFieldArgs {
    /// Application label shown on the dashboard
    #[arg(long)]
    pub label: Option<String>,

    /// Login page URL of the target site
    #[arg(long)]
    pub login_url: Option<String>,

    /// URL to send users to after sign-in
    #[arg(long)]
    pub redirect_url: Option<String>,

    /// Accepted for compatibility; has no effect on SWA apps
    #[arg(long, hide = true, default_value = "false", value_parser = ["true", "false"])]
    pub send_email: String,
}

/// Dashboard visibility toggles for `app create`
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct VisibilityArgs {
    /// Show the auto-submit toolbar
    #[arg(long)]
    pub auto_submit_toolbar: bool,

    /// Hide the app on iOS
    #[arg(long)]
    pub hide_ios: bool,

    /// Hide the app on the web dashboard
    #[arg(long)]
    pub hide_web: bool,
}

impl From<VisibilityArgs> for VisibilityOptions {
    fn from(args: VisibilityArgs) -> Self {
        Self {
            auto_submit_toolbar: args.auto_submit_toolbar,
            hide_ios: args.hide_ios,
            hide_web: args.hide_web,
        }
    }
}

/// Credential arguments for `app update`
#[derive(Args, Debug, Default, Clone)]
pub struct CredentialArgs {
    /// Credential scheme
    #[arg(long, value_enum, ignore_case = true)]
    pub scheme: Option<CredentialScheme>,

    /// Shared username (requires --scheme and --password)
    #[arg(long)]
    pub username: Option<String>,

    /// Shared password (requires --scheme and --username)
    #[arg(long)]
    pub password: Option<SecretString>,
}

impl CredentialArgs {
    /// Validate the combination and build the credential update, if any
    pub fn into_update(self) -> Result<Option<CredentialUpdate>> {
        CredentialUpdate::from_parts(self.scheme, self.username, self.password)
    }
}
