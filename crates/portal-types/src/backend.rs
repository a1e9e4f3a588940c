//! Collaborator trait definitions.
//!
//! The launch flow is written against these traits and never against a
//! concrete store or auth implementation. `portal-store` supplies the real
//! catalog source; the app binary supplies the auth provider.

use crate::error::Result;
use crate::record::ApplicationRecord;
use crate::session::SessionContext;

/// Read access to the remote application catalog.
///
/// One call issues one filtered query (`is_active = true`, ordered by
/// name); the implementation owns retries-never, timeouts, and transport.
pub trait CatalogSource {
    fn active_applications(&self) -> Result<Vec<ApplicationRecord>>;
}

/// The external auth collaborator.
///
/// Supplies the current session (or none when unauthenticated) and a
/// sign-out action with no result. Portal only ever reads the session at
/// launch time; it never refreshes or validates it.
pub trait AuthProvider {
    fn session(&self) -> Option<&SessionContext>;
    fn sign_out(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;

    struct EmptyCatalog;

    impl CatalogSource for EmptyCatalog {
        fn active_applications(&self) -> Result<Vec<ApplicationRecord>> {
            Ok(Vec::new())
        }
    }

    struct BrokenCatalog;

    impl CatalogSource for BrokenCatalog {
        fn active_applications(&self) -> Result<Vec<ApplicationRecord>> {
            Err(PortalError::Store("unreachable".into()))
        }
    }

    #[test]
    fn catalog_source_is_object_safe() {
        let sources: Vec<Box<dyn CatalogSource>> =
            vec![Box::new(EmptyCatalog), Box::new(BrokenCatalog)];
        assert!(sources[0].active_applications().is_ok());
        assert!(sources[1].active_applications().is_err());
    }

    struct NoAuth;

    impl AuthProvider for NoAuth {
        fn session(&self) -> Option<&SessionContext> {
            None
        }

        fn sign_out(&mut self) {}
    }

    #[test]
    fn auth_provider_is_object_safe() {
        let mut provider = NoAuth;
        let as_dyn: &mut dyn AuthProvider = &mut provider;
        assert!(as_dyn.session().is_none());
        as_dyn.sign_out();
    }
}
