//! Session context supplied by the external auth collaborator.
//!
//! Portal never creates, refreshes, or validates sessions; it reads the
//! current one at launch time and appends its fields to the outbound URL.

/// The authenticated user's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
}

/// A bearer session for the current user.
///
/// Present only while authenticated. The user identity can be absent even
/// when a token exists (e.g. a service session); the launch flow then sends
/// empty strings for the identity parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub access_token: String,
    pub user: Option<UserIdentity>,
}

impl SessionContext {
    pub fn new(access_token: impl Into<String>, user: Option<UserIdentity>) -> Self {
        Self {
            access_token: access_token.into(),
            user,
        }
    }

    /// The user's email, or the empty string when no identity is attached.
    pub fn user_email(&self) -> &str {
        self.user.as_ref().map(|u| u.email.as_str()).unwrap_or("")
    }

    /// The user's opaque id, or the empty string when no identity is attached.
    pub fn user_id(&self) -> &str {
        self.user.as_ref().map(|u| u.id.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_with_user() {
        let session = SessionContext::new(
            "tok-123",
            Some(UserIdentity {
                id: "u-9".into(),
                email: "ana@example.com".into(),
            }),
        );
        assert_eq!(session.access_token, "tok-123");
        assert_eq!(session.user_email(), "ana@example.com");
        assert_eq!(session.user_id(), "u-9");
    }

    #[test]
    fn accessors_without_user() {
        let session = SessionContext::new("tok-123", None);
        assert_eq!(session.user_email(), "");
        assert_eq!(session.user_id(), "");
    }
}
