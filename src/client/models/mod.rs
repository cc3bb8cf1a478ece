//! Okta API data models

mod app;

pub use app::{AppCredentials, AppDescriptor, PasswordValue, UserNameTemplate, Visibility};
