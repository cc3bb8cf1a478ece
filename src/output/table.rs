//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::apps::InvocationResult;
use crate::client::models::AppDescriptor;

const EMPTY_CELL: &str = "-";

/// One application in table view
#[derive(Debug, Tabled)]
pub struct AppRow {
    #[tabled(rename = "APP ID")]
    pub id: String,

    #[tabled(rename = "LABEL")]
    pub label: String,

    #[tabled(rename = "SIGN ON MODE")]
    pub sign_on_mode: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "SCHEME")]
    pub scheme: String,

    #[tabled(rename = "HTTP")]
    pub http_status: u16,
}

impl From<&InvocationResult> for AppRow {
    fn from(result: &InvocationResult) -> Self {
        let app: AppDescriptor = serde_json::from_value(result.json.clone()).unwrap_or_default();
        let cell = |v: Option<&str>| v.unwrap_or(EMPTY_CELL).to_string();

        Self {
            id: cell(app.id.as_deref()),
            label: cell(app.label.as_deref()),
            sign_on_mode: cell(app.sign_on_mode.as_deref()),
            status: cell(app.status.as_deref()),
            scheme: cell(app.scheme()),
            http_status: result.status,
        }
    }
}

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
