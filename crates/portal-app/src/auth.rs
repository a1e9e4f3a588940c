//! Session holder for the launcher process.
//!
//! Portal does not run an auth flow itself; it is handed a session by the
//! deployment (config file or environment) and exposes it through the
//! [`AuthProvider`] seam so the launch flow never reads config directly.

use portal_types::backend::AuthProvider;
use portal_types::session::SessionContext;

/// An [`AuthProvider`] backed by a session fixed at startup.
pub struct StaticAuthProvider {
    session: Option<SessionContext>,
}

impl StaticAuthProvider {
    pub fn new(session: Option<SessionContext>) -> Self {
        Self { session }
    }
}

impl AuthProvider for StaticAuthProvider {
    fn session(&self) -> Option<&SessionContext> {
        self.session.as_ref()
    }

    fn sign_out(&mut self) {
        if self.session.take().is_some() {
            log::info!("signed out; further launches are unauthenticated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_the_configured_session() {
        let provider = StaticAuthProvider::new(Some(SessionContext::new("tok", None)));
        assert_eq!(provider.session().unwrap().access_token, "tok");
    }

    #[test]
    fn starts_without_session_when_none_configured() {
        let provider = StaticAuthProvider::new(None);
        assert!(provider.session().is_none());
    }

    #[test]
    fn sign_out_drops_the_session() {
        let mut provider = StaticAuthProvider::new(Some(SessionContext::new("tok", None)));
        provider.sign_out();
        assert!(provider.session().is_none());
        // Idempotent.
        provider.sign_out();
        assert!(provider.session().is_none());
    }
}
