//! Remote store access for Portal.
//!
//! A minimal blocking HTTP/1.1 GET client, a TLS provider abstraction
//! (rustls behind the `tls-rustls` feature), and the [`StoreClient`] that
//! issues the filtered application-catalog query.

pub mod client;
pub mod http;
pub mod tls;
#[cfg(feature = "tls-rustls")]
pub mod tls_rustls;

pub use client::StoreClient;
pub use http::{HttpResponse, http_get};
pub use tls::{TlsProvider, Transport};
#[cfg(feature = "tls-rustls")]
pub use tls_rustls::RustlsTlsProvider;
