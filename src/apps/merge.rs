//! Merge of an update into a fetched application descriptor

use super::command::UpdateApp;
use crate::client::models::AppDescriptor;

/// Apply caller-supplied values to the descriptor fetched from Okta.
///
/// Only supplied fields are overwritten. Missing `settings`/`signOn`
/// objects are created on demand. A credential update replaces the whole
/// credentials block; without one, credentials are left as fetched.
pub fn apply_update(mut app: AppDescriptor, update: &UpdateApp) -> AppDescriptor {
    if let Some(label) = &update.label {
        app.label = Some(label.clone());
    }

    if update.login_url.is_some() || update.redirect_url.is_some() {
        let sign_on = app.sign_on_mut();
        if let Some(login_url) = &update.login_url {
            sign_on.login_url = Some(login_url.clone());
        }
        if let Some(redirect_url) = &update.redirect_url {
            sign_on.redirect_url = Some(redirect_url.clone());
        }
    }

    if let Some(credentials) = &update.credentials {
        app.replace_credentials(credentials.to_credentials());
    }

    app
}
