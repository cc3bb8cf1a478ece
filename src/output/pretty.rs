//! Human-oriented summary output

use colored::Colorize;

use crate::apps::{InvocationResult, SwaCommand};
use crate::client::models::AppDescriptor;

/// Summarise a result, e.g.
///
/// ```text
/// ✓ SWA application created (ID: 0oa1)
///   Label:        I Love Unicorns
///   Login URL:    https://iloveunicorns.lol/signin
///   HTTP:         200 OK (812 bytes)
/// ```
pub fn format_pretty(result: &InvocationResult, command: &SwaCommand) -> String {
    let verb = match command {
        SwaCommand::Create(_) => "created",
        SwaCommand::Update(_) => "updated",
    };

    let app: Option<AppDescriptor> = serde_json::from_value(result.json.clone())
        .ok()
        .filter(|a: &AppDescriptor| a.id.is_some());

    let mut lines = Vec::new();
    match app.as_ref().and_then(|a| a.id.as_deref()) {
        Some(id) => lines.push(format!(
            "{} SWA application {} (ID: {})",
            "✓".green(),
            verb,
            id.bold()
        )),
        None => lines.push(format!("{} SWA application {}", "✓".green(), verb)),
    }

    if let Some(app) = &app {
        push_field(&mut lines, "Label", app.label.as_deref());
        push_field(&mut lines, "Status", app.status.as_deref());
        push_field(&mut lines, "Login URL", app.login_url());
        push_field(&mut lines, "Redirect URL", app.redirect_url());
        push_field(&mut lines, "Scheme", app.scheme());
    }

    lines.push(format!("  {:<14}{} {}", "HTTP:", result.status, result.msg));
    lines.push(format!("  {:<14}{}", "URL:", result.url.dimmed()));

    lines.join("\n")
}

fn push_field(lines: &mut Vec<String>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(format!("  {:<14}{}", format!("{}:", name), value));
    }
}
