//! Okta Apps API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, StatusCode};

use super::{APPS_PATH, ApiResponse, AppDescriptor, AppsApi};
use crate::error::{ApiError, Result};
use crate::secret::SecretString;

/// Per-request timeout
const REQUEST_TIMEOUT_SECS: u64 = 30;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Okta API client authenticated with an SSWS API token
pub struct OktaClient {
    http: HttpClient,
    base_url: String,
    api_key: SecretString,
}

impl OktaClient {
    /// Create a client for an org base URL such as `https://unicorns.okta.com`
    pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the Apps collection
    pub fn apps_url(&self) -> String {
        format!("{}{}", self.base_url, APPS_PATH)
    }

    /// URL of a single application
    pub fn app_url(&self, id: &str) -> String {
        format!("{}/{}", self.apps_url(), id)
    }

    /// Send one request. Anything other than 200 is an `ApiError::Remote`.
    async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<&AppDescriptor>,
    ) -> Result<ApiResponse> {
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(AUTHORIZATION, format!("SSWS {}", self.api_key.expose()));

        if let Some(app) = payload {
            request = request.json(&app.to_value()?);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;
        let msg = status_message(status, body.len());

        debug!("{} {} -> {}", method, url, msg);

        if status != StatusCode::OK {
            return Err(ApiError::Remote {
                status: status.as_u16(),
                msg,
                body,
            }
            .into());
        }

        Ok(ApiResponse {
            status: status.as_u16(),
            msg,
            body,
            url: url.to_string(),
        })
    }
}

/// Reason phrase plus body size, e.g. `OK (512 bytes)`
fn status_message(status: StatusCode, len: usize) -> String {
    format!(
        "{} ({} bytes)",
        status.canonical_reason().unwrap_or("Unknown"),
        len
    )
}

#[async_trait]
impl AppsApi for OktaClient {
    async fn create_app(&self, app: &AppDescriptor) -> Result<ApiResponse> {
        let url = self.apps_url();
        self.send(Method::POST, &url, Some(app)).await
    }

    async fn get_app(&self, id: &str) -> Result<AppDescriptor> {
        let url = self.app_url(id);
        let response = self.send(Method::GET, &url, None).await?;

        serde_json::from_str(&response.body)
            .and_then(AppDescriptor::from_value)
            .map_err(|e| ApiError::MalformedDescriptor(e.to_string()).into())
    }

    async fn replace_app(&self, id: &str, app: &AppDescriptor) -> Result<ApiResponse> {
        let url = self.app_url(id);
        self.send(Method::PUT, &url, Some(app)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Visibility;
    use crate::error::Error;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> OktaClient {
        OktaClient::new(server.url(), SecretString::new("test-key")).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = OktaClient::new("https://unicorns.okta.com/", SecretString::new("k"));
        let client = client.unwrap();
        assert_eq!(client.base_url(), "https://unicorns.okta.com");
        assert_eq!(client.apps_url(), "https://unicorns.okta.com/api/v1/apps");
        assert_eq!(
            client.app_url("01c5pEucucMPWXjFM456"),
            "https://unicorns.okta.com/api/v1/apps/01c5pEucucMPWXjFM456"
        );
    }

    #[test]
    fn test_status_message() {
        assert_eq!(status_message(StatusCode::OK, 42), "OK (42 bytes)");
        assert_eq!(
            status_message(StatusCode::NOT_FOUND, 0),
            "Not Found (0 bytes)"
        );
    }

    #[tokio::test]
    async fn test_create_app_posts_descriptor_with_ssws_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/apps")
            .match_header("authorization", "SSWS test-key")
            .match_header("accept", "application/json")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "label": "I Love Unicorns",
                "signOnMode": "AUTO_LOGIN"
            })))
            .with_status(200)
            .with_body(r#"{"id":"0oa1"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let app = AppDescriptor::for_create(
            Some("I Love Unicorns".to_string()),
            None,
            None,
            Visibility::new(false, false, false),
        );

        let response = client.create_app(&app).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
        assert_eq!(response.msg, "OK (13 bytes)");
        assert_eq!(response.body, r#"{"id":"0oa1"}"#);
        assert_eq!(response.url, format!("{}/api/v1/apps", server.url()));
    }

    #[tokio::test]
    async fn test_non_200_is_remote_error_with_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v1/apps")
            .with_status(400)
            .with_body(r#"{"errorSummary":"Api validation failed: label"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .create_app(&AppDescriptor::default())
            .await
            .unwrap_err();

        match &err {
            Error::Api(ApiError::Remote { status, msg, body }) => {
                assert_eq!(*status, 400);
                assert!(msg.starts_with("Bad Request"));
                assert!(body.contains("Api validation failed"));
            }
            other => panic!("Expected ApiError::Remote, got {:?}", other),
        }
        let text = err.to_string();
        assert!(text.contains("Status: Bad Request"));
        assert!(text.contains("Message: {\"errorSummary\""));
    }

    #[tokio::test]
    async fn test_created_status_is_still_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v1/apps")
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .create_app(&AppDescriptor::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::Remote { status: 201, .. })
        ));
    }

    #[tokio::test]
    async fn test_get_app_parses_descriptor() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/apps/01c5pEucucMPWXjFM456")
            .match_header("authorization", "SSWS test-key")
            .with_status(200)
            .with_body(
                r#"{"id":"01c5pEucucMPWXjFM456","label":"Unicorns","settings":{"signOn":{"loginUrl":"https://a.example/login"}}}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let app = client.get_app("01c5pEucucMPWXjFM456").await.unwrap();

        mock.assert_async().await;
        assert_eq!(app.label.as_deref(), Some("Unicorns"));
        assert_eq!(app.login_url(), Some("https://a.example/login"));
    }

    #[tokio::test]
    async fn test_get_app_rejects_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/apps/abc")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get_app("abc").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::MalformedDescriptor(_))
        ));
    }

    #[tokio::test]
    async fn test_get_app_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/apps/missing")
            .with_status(404)
            .with_body(r#"{"errorCode":"E0000007"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.get_app("missing").await.unwrap_err();
        assert!(err.to_string().contains("E0000007"));
    }

    #[tokio::test]
    async fn test_replace_app_puts_full_descriptor() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/v1/apps/abc")
            .match_body(Matcher::Json(json!({
                "id": "abc",
                "label": "Renamed",
                "name": "template_swa"
            })))
            .with_status(200)
            .with_body(r#"{"id":"abc","label":"Renamed"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let app: AppDescriptor = serde_json::from_value(json!({
            "id": "abc",
            "label": "Renamed",
            "name": "template_swa"
        }))
        .unwrap();

        let response = client.replace_app("abc", &app).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.url, format!("{}/api/v1/apps/abc", server.url()));
    }

    #[tokio::test]
    async fn test_replace_app_conflict_is_remote_error_with_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PUT", "/api/v1/apps/abc")
            .with_status(409)
            .with_body(r#"{"errorCode":"E0000006","errorSummary":"Conflict"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let app: AppDescriptor = serde_json::from_value(json!({ "id": "abc" })).unwrap();
        let err = client.replace_app("abc", &app).await.unwrap_err();

        match &err {
            Error::Api(ApiError::Remote { status, msg, body }) => {
                assert_eq!(*status, 409);
                assert!(msg.starts_with("Conflict"));
                assert!(body.contains("E0000006"));
            }
            other => panic!("Expected ApiError::Remote, got {:?}", other),
        }
        let text = err.to_string();
        assert!(text.contains("Status: Conflict"));
        assert!(text.contains("Message: {\"errorCode\""));
    }

    #[tokio::test]
    async fn test_fetched_nulls_survive_get_then_put() {
        let fetched = r#"{"id":"abc","label":null,"settings":{"signOn":{"loginUrl":"https://a/x","redirectUrl":null}}}"#;
        let mut server = mockito::Server::new_async().await;
        let _get = server
            .mock("GET", "/api/v1/apps/abc")
            .with_status(200)
            .with_body(fetched)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/api/v1/apps/abc")
            .match_body(Matcher::Json(json!({
                "id": "abc",
                "label": null,
                "settings": {
                    "signOn": { "loginUrl": "https://a/x", "redirectUrl": null }
                }
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        let app = client.get_app("abc").await.unwrap();
        client.replace_app("abc", &app).await.unwrap();

        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = OktaClient::new("http://127.0.0.1:1", SecretString::new("k")).unwrap();
        let err = client.get_app("abc").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Network(_))));
    }
}
