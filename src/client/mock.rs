//! Mock Okta Apps API client for testing
//!
//! Records every call so tests can assert on the exact request sequence
//! and the payloads that would have gone over the wire.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{APPS_PATH, ApiResponse, AppDescriptor, AppsApi};
use crate::error::{ApiError, Result};

const MOCK_BASE_URL: &str = "https://unicorns.okta.com";

/// A request captured by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// Mock API client.
///
/// # Example
/// ```ignore
/// let mock = MockOktaClient::new().with_app(fetched);
/// let app = mock.get_app("abc").await?;
/// assert_eq!(mock.requests().await.len(), 1);
/// ```
#[derive(Default)]
pub struct MockOktaClient {
    /// Descriptor returned from get_app
    app: Arc<Mutex<Option<AppDescriptor>>>,
    /// Body returned from create_app/replace_app
    response_body: Arc<Mutex<Option<String>>>,
    /// Error to return - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockOktaClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor to hand back from `get_app`
    pub fn with_app(self, app: AppDescriptor) -> Self {
        *self.app.try_lock().expect("mock not shared yet") = Some(app);
        self
    }

    /// Body to hand back from `create_app` / `replace_app`
    pub fn with_response_body(self, body: impl Into<String>) -> Self {
        *self.response_body.try_lock().expect("mock not shared yet") = Some(body.into());
        self
    }

    /// Fail the next call with this error
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// All requests seen so far, in order
    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }

    async fn record(
        &self,
        method: &'static str,
        url: String,
        body: Option<&AppDescriptor>,
    ) -> Result<()> {
        self.captured.lock().await.push(CapturedRequest {
            method,
            url,
            body: body.map(AppDescriptor::to_value).transpose()?,
        });

        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    async fn respond(&self, url: String) -> ApiResponse {
        let body = self
            .response_body
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| "{}".to_string());
        ApiResponse {
            status: 200,
            msg: format!("OK ({} bytes)", body.len()),
            body,
            url,
        }
    }
}

#[async_trait]
impl AppsApi for MockOktaClient {
    async fn create_app(&self, app: &AppDescriptor) -> Result<ApiResponse> {
        let url = format!("{}{}", MOCK_BASE_URL, APPS_PATH);
        self.record("POST", url.clone(), Some(app)).await?;
        Ok(self.respond(url).await)
    }

    async fn get_app(&self, id: &str) -> Result<AppDescriptor> {
        let url = format!("{}{}/{}", MOCK_BASE_URL, APPS_PATH, id);
        self.record("GET", url, None).await?;
        Ok(self.app.lock().await.clone().unwrap_or_default())
    }

    async fn replace_app(&self, id: &str, app: &AppDescriptor) -> Result<ApiResponse> {
        let url = format!("{}{}/{}", MOCK_BASE_URL, APPS_PATH, id);
        self.record("PUT", url.clone(), Some(app)).await?;
        Ok(self.respond(url).await)
    }
}
