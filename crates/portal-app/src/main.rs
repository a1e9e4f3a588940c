//! Portal terminal entry point.
//!
//! Loads config, fetches the active application catalog from the managed
//! store, and shows a paginated icon grid on stdout. Lines read from stdin
//! drive the cursor and launch applications in the system browser with the
//! session identity appended to the URL.

mod auth;
mod config;
mod input;
mod opener;
mod render;

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use portal_core::{CatalogView, GridState, ViewState, build_launch_command};
use portal_store::{RustlsTlsProvider, StoreClient};
use portal_types::backend::AuthProvider;
use portal_types::error::PortalError;

use auth::StaticAuthProvider;
use config::PortalConfig;
use input::Action;
use opener::{CommandExecutor, SystemOpener};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Config path from CLI arg, PORTAL_CONFIG env var, or the default.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PORTAL_CONFIG").ok())
        .map_or_else(|| PathBuf::from("portal.toml"), PathBuf::from);
    let config = PortalConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    log::info!("Starting Portal against {}", config.store.url);

    let client = StoreClient::new(&config.store.url, &config.store.api_key)?
        .with_tls(Arc::new(RustlsTlsProvider::new()));
    let mut auth = StaticAuthProvider::new(config.session_context());
    if auth.session().is_none() {
        log::warn!("no session configured; launches will be unauthenticated");
    }

    let mut opener = SystemOpener;
    let use_color = std::env::var_os("NO_COLOR").is_none();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    'mount: loop {
        // Each mount starts from Loading and settles exactly once.
        let mut view = CatalogView::new();
        view.activate(&client);
        let count = view.records().map_or(0, |r| r.len());
        let mut grid = GridState::new(config.ui.grid_cols, config.ui.grid_rows, count);

        loop {
            print!("{}\n> ", render::render_view(&view, &grid, use_color));
            std::io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            match input::parse_line(&line?) {
                Action::Quit => return Ok(()),
                Action::Reload => continue 'mount,
                Action::Help => println!("{}", input::HELP),
                Action::SignOut => auth.sign_out(),
                Action::Cursor(mv) => grid.handle_move(mv),
                Action::NextPage => grid.next_page(),
                Action::PrevPage => grid.prev_page(),
                Action::LaunchSelected => {
                    if let Some(idx) = grid.selected_index() {
                        launch(&view, idx, &auth, &mut opener);
                    }
                },
                Action::LaunchNumber(n) => {
                    let idx = grid.page_range().start + (n - 1);
                    if grid.page_range().contains(&idx) {
                        launch(&view, idx, &auth, &mut opener);
                    } else {
                        println!("No application in cell {n} on this page.");
                    }
                },
                Action::Unknown(text) => {
                    println!("Unrecognised input {text:?}; type ? for help.");
                },
            }
        }
    }
}

/// Launch the record at `idx`, reporting failures without exiting.
fn launch(view: &CatalogView, idx: usize, auth: &dyn AuthProvider, opener: &mut dyn CommandExecutor) {
    let ViewState::Ready(records) = view.state() else {
        return;
    };
    let Some(record) = records.get(idx) else {
        return;
    };
    match build_launch_command(record, auth.session()) {
        Ok(command) => {
            if let Err(e) = opener.execute(&command) {
                log::error!("launch of {:?} failed: {e}", record.name);
                println!("Could not launch {:?}.", record.name);
            }
        },
        Err(e @ PortalError::Url(_)) => {
            log::error!("{e}");
            println!("{:?} has a broken link and cannot be launched.", record.name);
        },
        Err(e) => {
            log::error!("launch of {:?} failed: {e}", record.name);
        },
    }
}
