//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized summary
    #[default]
    Pretty,
    /// Table format - one row per application
    Table,
    /// JSON format - the raw `{json, status, msg, url}` result
    Json,
}
