//! Executes launch commands against the host platform.

use portal_core::LaunchCommand;
use portal_types::error::{PortalError, Result};

/// Seam between the launch flow and the platform; main.rs uses the real
/// opener, tests record.
pub trait CommandExecutor {
    fn execute(&mut self, command: &LaunchCommand) -> Result<()>;
}

/// Opens launch URLs with the platform's default browser.
///
/// Detached: the browser process is not waited on, and nothing reports
/// whether the page loaded.
pub struct SystemOpener;

impl CommandExecutor for SystemOpener {
    fn execute(&mut self, command: &LaunchCommand) -> Result<()> {
        match command {
            LaunchCommand::OpenUrl(url) => {
                log::info!("opening {url}");
                open::that_detached(url)
                    .map_err(|e| PortalError::Launch(format!("cannot open browser: {e}")))
            },
        }
    }
}
