//! JSON output formatting

use crate::apps::InvocationResult;

/// Format a result as pretty-printed `{json, status, msg, url}`
pub fn format_json(result: &InvocationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
