//! Launch dispatcher.
//!
//! Builds the outbound launch target for a selected application as a pure
//! function of the record and the current session context. The result is
//! an explicit command value; executing it (opening a browser tab) is the
//! caller's platform concern.

use portal_types::error::{PortalError, Result};
use portal_types::record::ApplicationRecord;
use portal_types::session::SessionContext;
use portal_types::url::Url;

/// An effect the caller must execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchCommand {
    /// Open the URL in a new, independent browsing context. Fire-and-forget:
    /// nothing reports whether the new context loaded.
    OpenUrl(String),
}

/// Build the launch command for `record` under the current session.
///
/// With a session, the identity parameters `access_token`, `user_email`,
/// and `user_id` are set on the record's URL, overwriting any same-named
/// parameters already present; email and id fall back to the empty string
/// when no user identity is attached. Without a session the URL passes
/// through unmodified (degraded mode, not an error).
///
/// The store's contract is to only hold valid absolute URLs; a record that
/// violates it yields [`PortalError::Url`] and no launch.
pub fn build_launch_command(
    record: &ApplicationRecord,
    session: Option<&SessionContext>,
) -> Result<LaunchCommand> {
    let mut url = Url::parse(&record.url).ok_or_else(|| {
        PortalError::Url(format!(
            "application {:?} has an invalid URL: {:?}",
            record.name, record.url,
        ))
    })?;

    if let Some(session) = session {
        url.set_query_param("access_token", &session.access_token);
        url.set_query_param("user_email", session.user_email());
        url.set_query_param("user_id", session.user_id());
    }

    Ok(LaunchCommand::OpenUrl(url.to_string()))
}
