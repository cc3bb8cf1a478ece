//! Output formatting for CLI results

use colored::Colorize;

use crate::apps::{InvocationResult, PlannedRequest, SwaCommand};
use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod pretty;
pub mod table;

/// Format and print an invocation result to stdout
pub fn print_result(
    result: &InvocationResult,
    command: &SwaCommand,
    format: OutputFormat,
) -> Result<()> {
    let output = match format {
        OutputFormat::Json => json::format_json(result)?,
        OutputFormat::Table => table::format_table(&[table::AppRow::from(result)]),
        OutputFormat::Pretty => pretty::format_pretty(result, command),
    };
    println!("{}", output);
    Ok(())
}

/// Print what a dry run would have sent.
///
/// The banner goes to stderr so the payload on stdout can be piped.
pub fn print_plan(plan: &PlannedRequest, url: &str) -> Result<()> {
    eprintln!("{}", "DRY RUN - no changes will be made".yellow());
    eprintln!();
    eprintln!("Would {} {}", plan.method, url.bold());
    println!("{}", serde_json::to_string_pretty(&plan.payload.redacted().to_value()?)?);
    Ok(())
}
