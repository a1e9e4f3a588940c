//! Catalog queries against the managed store.
//!
//! The store exposes a PostgREST-style query interface. Portal issues a
//! single filtered read per catalog activation:
//! `GET {base}/rest/v1/applications?select=*&is_active=eq.true&order=name.asc`
//! authenticated with the project API key. Filtering and ordering are the
//! store's job; the client does not re-sort or re-filter.

use std::sync::Arc;

use portal_types::backend::CatalogSource;
use portal_types::error::{PortalError, Result};
use portal_types::record::ApplicationRecord;
use portal_types::url::Url;

use crate::http;
use crate::tls::TlsProvider;

/// Path of the application table under the store's REST root.
const APPLICATIONS_PATH: &str = "/rest/v1/applications";

/// The filtered, ordered catalog query.
const CATALOG_QUERY: &str = "select=*&is_active=eq.true&order=name.asc";

/// Client for the remote application store.
pub struct StoreClient {
    base: Url,
    api_key: String,
    tls: Option<Arc<dyn TlsProvider>>,
}

impl StoreClient {
    /// Create a client for the store at `base_url`.
    ///
    /// Fails if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base = Url::parse(base_url)
            .ok_or_else(|| PortalError::Config(format!("invalid store URL: {base_url}")))?;
        if base.scheme != "http" && base.scheme != "https" {
            return Err(PortalError::Config(format!(
                "store URL must be http(s): {base_url}",
            )));
        }
        Ok(Self {
            base,
            api_key: api_key.into(),
            tls: None,
        })
    }

    /// Attach a TLS provider (required for `https` store URLs).
    pub fn with_tls(mut self, provider: Arc<dyn TlsProvider>) -> Self {
        self.tls = Some(provider);
        self
    }

    /// The full catalog query URL.
    pub fn catalog_url(&self) -> Url {
        let mut url = self.base.clone();
        let root = url.path.trim_end_matches('/');
        url.path = format!("{root}{APPLICATIONS_PATH}");
        url.query = Some(CATALOG_QUERY.to_string());
        url.fragment = None;
        url
    }

    /// Fetch all active application records, ordered by name.
    pub fn fetch_active_applications(&self) -> Result<Vec<ApplicationRecord>> {
        let url = self.catalog_url();
        let bearer = format!("Bearer {}", self.api_key);
        let headers = [
            ("apikey", self.api_key.as_str()),
            ("Authorization", bearer.as_str()),
            ("Accept", "application/json"),
        ];

        log::debug!("querying catalog at {}", url.origin());
        let resp = http::http_get(&url, &headers, self.tls.as_deref())?;

        if !(200..300).contains(&resp.status) {
            let snippet = String::from_utf8_lossy(&resp.body);
            log::debug!("store rejected catalog query: {}", snippet.trim());
            return Err(PortalError::Store(format!(
                "catalog query failed with status {}",
                resp.status,
            )));
        }

        let rows: Vec<ApplicationRecord> = serde_json::from_slice(&resp.body)?;
        log::debug!("store returned {} active applications", rows.len());
        Ok(rows)
    }
}

impl CatalogSource for StoreClient {
    fn active_applications(&self) -> Result<Vec<ApplicationRecord>> {
        self.fetch_active_applications()
    }
}
