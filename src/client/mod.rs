//! Okta Apps API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod okta;

#[cfg(test)]
pub use mock::MockOktaClient;
pub use models::AppDescriptor;
pub use okta::OktaClient;

/// Default Okta domain appended to the organization subdomain
pub const DEFAULT_DOMAIN: &str = "okta.com";

/// Path of the Apps collection, relative to the org base URL
pub const APPS_PATH: &str = "/api/v1/apps";

/// Raw outcome of a successful (200) request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,

    /// Reason phrase with body size, e.g. `OK (1024 bytes)`
    pub msg: String,

    /// Unparsed response body
    pub body: String,

    /// URL the request was sent to
    pub url: String,
}

/// Okta Apps API operations needed to manage SWA applications
#[async_trait]
pub trait AppsApi: Send + Sync {
    /// POST a new application descriptor
    async fn create_app(&self, app: &AppDescriptor) -> Result<ApiResponse>;

    /// GET the current descriptor of an application
    async fn get_app(&self, id: &str) -> Result<AppDescriptor>;

    /// PUT a full replacement descriptor for an application
    async fn replace_app(&self, id: &str, app: &AppDescriptor) -> Result<ApiResponse>;
}

/// Base URL for an organization, e.g. `https://unicorns.okta.com`
pub fn org_base_url(organization: &str, domain: &str) -> String {
    format!("https://{}.{}", organization, domain.trim_start_matches('.'))
}
