//! Configuration loading (`portal.toml` + environment overrides).

use std::path::Path;

use serde::Deserialize;

use portal_types::error::{PortalError, Result};
use portal_types::session::{SessionContext, UserIdentity};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    pub store: StoreConfig,
    #[serde(default)]
    pub session: Option<SessionConfig>,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote store endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the managed store (e.g. `https://proj.supabase.example`).
    pub url: String,
    /// Project API key, sent as `apikey` and bearer token.
    pub api_key: String,
}

/// A static session handed to Portal by the deployment (the auth
/// collaborator proper lives outside this process).
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub access_token: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Grid dimensions for the launcher view.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_cols")]
    pub grid_cols: usize,
    #[serde(default = "default_rows")]
    pub grid_rows: usize,
}

fn default_cols() -> usize {
    4
}
fn default_rows() -> usize {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            grid_cols: default_cols(),
            grid_rows: default_rows(),
        }
    }
}

impl PortalConfig {
    /// Load configuration from a TOML file and apply `PORTAL_*` environment
    /// overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PortalError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config: Self = toml::from_str(&text)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply overrides from a lookup function (the environment in
    /// production, a map in tests).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("PORTAL_STORE_URL") {
            self.store.url = url;
        }
        if let Some(key) = lookup("PORTAL_API_KEY") {
            self.store.api_key = key;
        }
        if let Some(token) = lookup("PORTAL_ACCESS_TOKEN") {
            let session = self.session.get_or_insert(SessionConfig {
                access_token: String::new(),
                user_email: None,
                user_id: None,
            });
            session.access_token = token;
        }
        match self.session {
            Some(ref mut session) => {
                if let Some(email) = lookup("PORTAL_USER_EMAIL") {
                    session.user_email = Some(email);
                }
                if let Some(id) = lookup("PORTAL_USER_ID") {
                    session.user_id = Some(id);
                }
            },
            None => {
                // Identity without a token cannot form a session.
                for name in ["PORTAL_USER_EMAIL", "PORTAL_USER_ID"] {
                    if lookup(name).is_some() {
                        log::warn!("{name} is set but no session is configured; ignoring");
                    }
                }
            },
        }
    }

    /// The configured session, as a [`SessionContext`] for the launch flow.
    ///
    /// A user identity is attached only when an email or id is configured.
    pub fn session_context(&self) -> Option<SessionContext> {
        let session = self.session.as_ref()?;
        let user = match (&session.user_email, &session.user_id) {
            (None, None) => None,
            (email, id) => Some(UserIdentity {
                id: id.clone().unwrap_or_default(),
                email: email.clone().unwrap_or_default(),
            }),
        };
        Some(SessionContext::new(session.access_token.clone(), user))
    }
}
