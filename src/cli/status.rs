//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Resolved configuration, as shown by `status`
#[derive(Debug, Serialize)]
struct StatusReport {
    config_path: String,
    config_found: bool,
    organization: Option<String>,
    domain: Option<String>,
    api_key_configured: bool,
    base_url: Option<String>,
    problem: Option<String>,
}

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let report = build_report(opts)?;

    if opts.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", "oktaswa Configuration Status".bold());

    let found = if report.config_found {
        ""
    } else {
        " (not found)"
    };
    println!("Config file: {}{}", report.config_path.cyan(), found.dimmed());
    println!();

    match &report.organization {
        Some(org) => println!("{} Organization: {}", "✓".green(), org),
        None => {
            println!("{} Organization not configured", "✗".red());
            println!("  → Pass --org or set OKTA_ORG");
        }
    }

    if report.api_key_configured {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Pass --api-key or set OKTA_API_KEY");
    }

    if let Some(domain) = &report.domain {
        println!("{} Domain: {}", "○".dimmed(), domain);
    }

    match (&report.base_url, &report.problem) {
        (Some(url), _) => println!("{} API base URL: {}", "✓".green(), url.cyan()),
        (None, Some(problem)) => println!("{} {}", "⚠".yellow(), problem),
        (None, None) => {}
    }

    println!();
    Ok(())
}

fn build_report(opts: &GlobalOptions) -> Result<StatusReport> {
    let path = Config::resolve_path(opts.config_ref())?;
    let config_found = path.exists();
    let config = Config::load_at(opts.config_ref())?;
    let overrides = opts.overrides();

    let organization = overrides
        .organization
        .map(String::from)
        .or_else(|| config.organization.clone());
    let api_key_configured = overrides.api_key.is_some() || config.api_key.is_some();

    let (base_url, domain, problem) = match config.resolve(&overrides) {
        Ok(settings) => (Some(settings.base_url()), Some(settings.domain), None),
        Err(e) => (None, None, Some(e.to_string())),
    };

    Ok(StatusReport {
        config_path: path.display().to_string(),
        config_found,
        organization,
        domain,
        api_key_configured,
        base_url,
        problem,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::SecretString;
    use std::fs;
    use tempfile::tempdir;

    fn opts(config: Option<String>) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Json,
            org: None,
            api_key: None,
            domain: None,
            api_host: None,
            config,
        }
    }

    #[test]
    fn test_report_from_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "organization: unicorns\napi_key: 00abc\n").unwrap();

        let report = build_report(&opts(Some(path.display().to_string()))).unwrap();

        assert!(report.config_found);
        assert_eq!(report.organization.as_deref(), Some("unicorns"));
        assert!(report.api_key_configured);
        assert_eq!(report.base_url.as_deref(), Some("https://unicorns.okta.com"));
        assert!(report.problem.is_none());
    }

    #[test]
    fn test_report_without_api_key_names_problem() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "organization: unicorns\n").unwrap();

        let report = build_report(&opts(Some(path.display().to_string()))).unwrap();

        assert!(!report.api_key_configured);
        assert!(report.base_url.is_none());
        assert!(report.problem.unwrap().contains("API key"));
    }

    #[test]
    fn test_report_never_contains_api_key() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "organization: unicorns\n").unwrap();

        let mut options = opts(Some(path.display().to_string()));
        options.api_key = Some(SecretString::new("00supersecret"));

        let report = build_report(&options).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("00supersecret"));
        assert!(report.api_key_configured);
    }
}
