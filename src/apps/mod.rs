//! SWA application management
//!
//! - [`command`] - validated `create` / `update` commands
//! - [`credentials`] - credential schemes and credential replacement
//! - [`merge`] - pure merge of an update into a fetched descriptor
//! - [`manager`] - request orchestration over an [`AppsApi`](crate::client::AppsApi)

pub mod command;
pub mod credentials;
pub mod manager;
pub mod merge;

pub use command::{CreateApp, SwaCommand, UpdateApp, VisibilityOptions};
pub use credentials::{CredentialScheme, CredentialUpdate};
pub use manager::{InvocationResult, PlannedRequest, SwaAppManager};
