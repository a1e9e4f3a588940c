//! Foundation types for Portal.
//!
//! This crate contains the types shared by every Portal crate: the error
//! enum, CSS color parsing, application catalog records, the session
//! context, a small URL type, and the collaborator trait definitions the
//! launch flow is written against.

pub mod backend;
pub mod color;
pub mod error;
pub mod record;
pub mod session;
pub mod url;
