//! Portal launch flow.
//!
//! The authenticated application-launch flow: a three-state catalog view
//! fed by a [`portal_types::backend::CatalogSource`], cursor/selection
//! state for the icon grid, a fixed icon catalog with a total fallback,
//! and the launch dispatcher that turns a record plus the current session
//! into an [`launch::LaunchCommand`].

pub mod catalog;
pub mod grid;
pub mod icon;
pub mod launch;

pub use catalog::{CatalogView, LOAD_FAILED_MESSAGE, ViewState};
pub use grid::{GridState, Move};
pub use icon::Icon;
pub use launch::{LaunchCommand, build_launch_command};
