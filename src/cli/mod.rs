//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod app;
pub mod args;
pub mod context;
pub mod status;

pub use args::{AppFieldArgs, CredentialArgs, OutputFormat, VisibilityArgs};
pub use context::CommandContext;

use crate::secret::SecretString;

/// oktaswa - manage Okta SWA applications from the command line
#[derive(Parser, Debug)]
#[command(name = "oktaswa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "OKTASWA_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Okta organization subdomain (the `unicorns` in unicorns.okta.com)
    #[arg(long, global = true, env = "OKTA_ORG", hide_env = true)]
    pub org: Option<String>,

    /// Okta API token
    #[arg(long, global = true, env = "OKTA_API_KEY", hide_env_values = true)]
    pub api_key: Option<SecretString>,

    /// Okta domain [default: okta.com]
    #[arg(long, global = true, env = "OKTA_DOMAIN", hide_env = true)]
    pub domain: Option<String>,

    /// Override the API scheme and host (development/testing)
    #[arg(long, global = true, env = "OKTA_API_HOST", hide = true)]
    pub api_host: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "OKTASWA_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "OKTASWA_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage SWA applications
    #[command(subcommand)]
    App(AppCommands),

    /// Show resolved configuration
    Status,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   oktaswa completion bash > /etc/bash_completion.d/oktaswa
  zsh:    oktaswa completion zsh > \"${fpath[1]}/_oktaswa\"
  fish:   oktaswa completion fish > ~/.config/fish/completions/oktaswa.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// SWA application subcommands
#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// Create a new SWA application
    #[command(after_help = "EXAMPLES:\n  \
            oktaswa app create --label \"I Love Unicorns\" \\\n    \
              --login-url https://iloveunicorns.lol/signin \\\n    \
              --redirect-url https://iloveunicorns.lol/redirect\n  \
            oktaswa app create --label \"Hidden\" --hide-ios --hide-web --dry-run")]
    Create {
        #[command(flatten)]
        fields: AppFieldArgs,

        #[command(flatten)]
        visibility: VisibilityArgs,

        /// Print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Update an existing SWA application (GET, merge, PUT)
    #[command(after_help = "EXAMPLES:\n  \
            oktaswa app update 01c5pEucucMPWXjFM456 --scheme ADMIN_SETS_CREDENTIALS\n  \
            oktaswa app update 01c5pEucucMPWXjFM456 --scheme SHARED_USERNAME_AND_PASSWORD \\\n    \
              --username analyst_user --password shared_analyst_password\n  \
            oktaswa app update 01c5pEucucMPWXjFM456 --login-url https://iloveunicorns.lol/signin")]
    Update {
        /// Application ID
        id: String,

        #[command(flatten)]
        fields: AppFieldArgs,

        #[command(flatten)]
        credentials: CredentialArgs,

        /// Fetch and merge, then print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}
