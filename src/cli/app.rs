//! SWA application commands

use colored::Colorize;
use log::debug;

use crate::apps::{CreateApp, SwaCommand, UpdateApp};
use crate::cli::args::GlobalOptions;
use crate::cli::{AppFieldArgs, CommandContext, CredentialArgs, VisibilityArgs};
use crate::error::Result;
use crate::output;

/// Run `app create`
pub async fn create(
    opts: &GlobalOptions,
    fields: AppFieldArgs,
    visibility: VisibilityArgs,
    dry_run: bool,
) -> Result<()> {
    note_send_email(&fields.send_email);

    let cmd = CreateApp::new(
        fields.label,
        fields.login_url,
        fields.redirect_url,
        visibility.into(),
    )?;

    execute(opts, SwaCommand::Create(cmd), dry_run).await
}

/// Run `app update`
pub async fn update(
    opts: &GlobalOptions,
    id: &str,
    fields: AppFieldArgs,
    credentials: CredentialArgs,
    dry_run: bool,
) -> Result<()> {
    note_send_email(&fields.send_email);

    let cmd = UpdateApp::new(
        id,
        fields.label,
        fields.login_url,
        fields.redirect_url,
        credentials.into_update()?,
    )?;

    if cmd.is_noop() {
        eprintln!(
            "{} No changes supplied; {} will be written back as fetched",
            "⚠".yellow(),
            cmd.id
        );
    }

    execute(opts, SwaCommand::Update(cmd), dry_run).await
}

/// Validation has already happened; from here on it's config, then HTTP.
async fn execute(opts: &GlobalOptions, command: SwaCommand, dry_run: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if dry_run {
        let plan = ctx.manager.plan(&command).await?;
        let client = ctx.manager.client();
        let url = match &plan.app_id {
            Some(id) => client.app_url(id),
            None => client.apps_url(),
        };
        return output::print_plan(&plan, &url);
    }

    let result = ctx.manager.run(&command).await?;
    output::print_result(&result, &command, ctx.format)
}

fn note_send_email(send_email: &str) {
    if send_email == "true" {
        debug!("--send-email has no effect on SWA applications; ignoring");
    }
}
