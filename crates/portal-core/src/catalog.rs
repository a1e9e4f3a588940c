//! Catalog view model.
//!
//! A mounted view starts in `Loading`, issues exactly one catalog query,
//! and settles into `Ready` or `Error` exactly once. There are no retries
//! and no live updates; recovery from an error is a remount (a fresh
//! [`CatalogView`]).

use portal_types::backend::CatalogSource;
use portal_types::record::ApplicationRecord;

/// The fixed user-facing message shown when the catalog fetch fails.
/// The underlying cause is logged, never displayed.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load your applications.";

/// The three mutually exclusive states of the catalog view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// The fetch has not settled yet.
    Loading,
    /// The fetch failed; holds the fixed user-facing message.
    Error(String),
    /// The fetch succeeded. An empty list is a valid, distinct state
    /// (rendered as "no applications"), not an error.
    Ready(Vec<ApplicationRecord>),
}

/// One mount of the application catalog.
///
/// Owns the record list for its lifetime once loaded.
#[derive(Debug)]
pub struct CatalogView {
    state: ViewState,
}

impl CatalogView {
    /// Create a freshly mounted view in `Loading` state.
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Issue the catalog query and settle the view.
    ///
    /// Transitions `Loading -> Ready | Error` exactly once. A settled view
    /// ignores further activation; mount a new view to refetch.
    pub fn activate(&mut self, source: &dyn CatalogSource) {
        if self.state != ViewState::Loading {
            log::warn!("catalog view activated after settling; ignoring");
            return;
        }

        match source.active_applications() {
            Ok(records) => {
                log::info!("catalog loaded: {} active applications", records.len());
                self.state = ViewState::Ready(records);
            },
            Err(e) => {
                log::error!("catalog load failed: {e}");
                self.state = ViewState::Error(LOAD_FAILED_MESSAGE.to_string());
            },
        }
    }

    /// The loaded records, when the view is `Ready`.
    pub fn records(&self) -> Option<&[ApplicationRecord]> {
        match self.state {
            ViewState::Ready(ref records) => Some(records),
            _ => None,
        }
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}
