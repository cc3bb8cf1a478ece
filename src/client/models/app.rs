//! Application descriptor models
//!
//! Every struct here keeps the fields it doesn't know about in a flattened
//! `extra` map, so a descriptor fetched from Okta serializes back with
//! everything Okta sent. Known fields that arrive as explicit `null` are
//! remembered by [`AppDescriptor::from_value`] and written back by
//! [`AppDescriptor::to_value`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sign-on mode for SWA applications created by this tool
pub const AUTO_LOGIN: &str = "AUTO_LOGIN";

/// Okta application resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDescriptor {
    /// Application ID (assigned by Okta)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Lifecycle status (ACTIVE, INACTIVE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_on_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<AppSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<AppCredentials>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// Object key paths that were `null` in the fetched JSON
    #[serde(skip)]
    null_paths: Vec<Vec<String>>,
}

/// Dashboard visibility of an application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_submit_toolbar: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<HideFlags>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-platform hide toggles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HideFlags {
    #[serde(rename = "iOS", default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Visibility {
    /// Visibility block with every toggle set explicitly
    pub fn new(auto_submit_toolbar: bool, hide_ios: bool, hide_web: bool) -> Self {
        Self {
            auto_submit_toolbar: Some(auto_submit_toolbar),
            hide: Some(HideFlags {
                ios: Some(hide_ios),
                web: Some(hide_web),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_on: Option<SignOnSettings>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// SWA sign-on target URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOnSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Application credential policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCredentials {
    /// Credential scheme, kept as the raw wire string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<PasswordValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name_template: Option<UserNameTemplate>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shared password wrapper (`{"value": "..."}`)
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PasswordValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Debug for PasswordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordValue")
            .field("value", &self.value.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

/// Username template, e.g. `${source.login}` of type `BUILT_IN`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserNameTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppDescriptor {
    /// Build the payload for a new SWA application.
    ///
    /// `settings.signOn` is always present; the URLs and label are only
    /// included when supplied.
    pub fn for_create(
        label: Option<String>,
        login_url: Option<String>,
        redirect_url: Option<String>,
        visibility: Visibility,
    ) -> Self {
        Self {
            label,
            sign_on_mode: Some(AUTO_LOGIN.to_string()),
            features: Some(Vec::new()),
            visibility: Some(visibility),
            settings: Some(AppSettings {
                sign_on: Some(SignOnSettings {
                    login_url,
                    redirect_url,
                    extra: Map::new(),
                }),
                extra: Map::new(),
            }),
            ..Default::default()
        }
    }

    /// Parse a descriptor from Okta's JSON, remembering explicit nulls
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let mut null_paths = Vec::new();
        collect_null_paths(&value, &mut Vec::new(), &mut null_paths);

        let mut app: Self = serde_json::from_value(value)?;
        app.null_paths = null_paths;
        Ok(app)
    }

    /// Wire JSON for this descriptor.
    ///
    /// Fetched nulls are restored where the key would otherwise be absent;
    /// a key that now carries a value keeps it.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        for path in &self.null_paths {
            restore_null(&mut value, path);
        }
        Ok(value)
    }

    /// Replace the credentials block, dropping nulls fetched under it
    pub fn replace_credentials(&mut self, credentials: AppCredentials) {
        self.credentials = Some(credentials);
        self.null_paths
            .retain(|path| path.first().map(String::as_str) != Some("credentials"));
    }

    /// Mutable access to `settings.signOn`, creating missing levels
    pub fn sign_on_mut(&mut self) -> &mut SignOnSettings {
        self.settings
            .get_or_insert_with(AppSettings::default)
            .sign_on
            .get_or_insert_with(SignOnSettings::default)
    }

    pub fn login_url(&self) -> Option<&str> {
        self.sign_on().and_then(|s| s.login_url.as_deref())
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.sign_on().and_then(|s| s.redirect_url.as_deref())
    }

    pub fn scheme(&self) -> Option<&str> {
        self.credentials.as_ref().and_then(|c| c.scheme.as_deref())
    }

    fn sign_on(&self) -> Option<&SignOnSettings> {
        self.settings.as_ref().and_then(|s| s.sign_on.as_ref())
    }

    /// Copy of the descriptor with any shared password masked, for display
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if let Some(password) = copy
            .credentials
            .as_mut()
            .and_then(|c| c.password.as_mut())
            .filter(|p| p.value.is_some())
        {
            password.value = Some("********".to_string());
        }
        copy
    }
}

fn collect_null_paths(value: &Value, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map {
        prefix.push(key.clone());
        if child.is_null() {
            out.push(prefix.clone());
        } else {
            collect_null_paths(child, prefix, out);
        }
        prefix.pop();
    }
}

fn restore_null(value: &mut Value, path: &[String]) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut node = value;
    for key in parents {
        match node.get_mut(key.as_str()) {
            Some(child) => node = child,
            None => return,
        }
    }
    if let Value::Object(map) = node {
        map.entry(last.clone()).or_insert(Value::Null);
    }
}
