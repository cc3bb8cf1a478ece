//! SWA App Manager: create and update orchestration

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use super::command::{CreateApp, SwaCommand, UpdateApp};
use super::merge::apply_update;
use crate::client::models::AppDescriptor;
use crate::client::{ApiResponse, AppsApi};
use crate::error::Result;

/// Result of one invocation, as reported to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationResult {
    /// Parsed response body, or `""` when the body is not JSON
    pub json: Value,

    pub status: u16,

    pub msg: String,

    /// URL of the final request
    pub url: String,
}

impl From<ApiResponse> for InvocationResult {
    fn from(response: ApiResponse) -> Self {
        let json = serde_json::from_str(&response.body).unwrap_or_else(|e| {
            debug!("Response body is not JSON ({}); reporting empty result", e);
            Value::String(String::new())
        });

        Self {
            json,
            status: response.status,
            msg: response.msg,
            url: response.url,
        }
    }
}

/// What a dry run would have sent
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRequest {
    pub method: &'static str,
    pub app_id: Option<String>,
    pub payload: AppDescriptor,
}

/// Manages SWA applications through an [`AppsApi`] implementation
pub struct SwaAppManager<C> {
    client: C,
}

impl<C: AppsApi> SwaAppManager<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Execute a command against Okta
    pub async fn run(&self, command: &SwaCommand) -> Result<InvocationResult> {
        match command {
            SwaCommand::Create(cmd) => self.create(cmd).await,
            SwaCommand::Update(cmd) => self.update(cmd).await,
        }
    }

    /// Work out the request a command would send without sending it.
    ///
    /// Updates still fetch the current descriptor, since the PUT body is
    /// the fetched descriptor with the changes merged in.
    pub async fn plan(&self, command: &SwaCommand) -> Result<PlannedRequest> {
        match command {
            SwaCommand::Create(cmd) => Ok(PlannedRequest {
                method: "POST",
                app_id: None,
                payload: create_payload(cmd),
            }),
            SwaCommand::Update(cmd) => Ok(PlannedRequest {
                method: "PUT",
                app_id: Some(cmd.id.clone()),
                payload: self.merged(cmd).await?,
            }),
        }
    }

    /// POST a new SWA application
    pub async fn create(&self, cmd: &CreateApp) -> Result<InvocationResult> {
        let payload = create_payload(cmd);
        let response = self.client.create_app(&payload).await?;
        info!("Created SWA application ({})", response.msg);
        Ok(response.into())
    }

    /// GET the application, merge the changes, PUT it back.
    ///
    /// No version check happens between the two requests; the last writer
    /// wins.
    pub async fn update(&self, cmd: &UpdateApp) -> Result<InvocationResult> {
        let merged = self.merged(cmd).await?;
        let response = self.client.replace_app(&cmd.id, &merged).await?;
        info!("Updated SWA application {} ({})", cmd.id, response.msg);
        Ok(response.into())
    }

    async fn merged(&self, cmd: &UpdateApp) -> Result<AppDescriptor> {
        let current = self.client.get_app(&cmd.id).await?;
        if let Some(credentials) = &cmd.credentials {
            debug!(
                "Replacing credentials of {} with scheme {}",
                cmd.id,
                credentials.scheme()
            );
        }
        if cmd.is_noop() {
            debug!(
                "No changes supplied for {}; sending descriptor back as fetched",
                cmd.id
            );
        }
        Ok(apply_update(current, cmd))
    }
}

fn create_payload(cmd: &CreateApp) -> AppDescriptor {
    AppDescriptor::for_create(
        cmd.label.clone(),
        cmd.login_url.clone(),
        cmd.redirect_url.clone(),
        cmd.visibility.into(),
    )
}
