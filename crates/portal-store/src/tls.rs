//! TLS provider abstraction.
//!
//! The HTTP client uses this trait so it never depends on a concrete TLS
//! library. The app binary supplies a [`crate::RustlsTlsProvider`] when
//! built with the `tls-rustls` feature; tests supply mocks.

use std::io::{Read, Write};
use std::net::TcpStream;

use portal_types::error::Result;

/// A bidirectional byte stream (plain TCP or a TLS session over it).
pub trait Transport: Read + Write + Send {}

impl<T: Read + Write + Send> Transport for T {}

/// Provides TLS client connections.
pub trait TlsProvider: Send + Sync {
    /// Wrap `stream` in a TLS client session, performing the handshake.
    ///
    /// `server_name` is used for SNI and certificate verification.
    fn connect_tls(&self, stream: TcpStream, server_name: &str) -> Result<Box<dyn Transport>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_types::error::PortalError;

    /// A mock provider that refuses one host and passes everything else
    /// through unencrypted.
    struct MockTlsProvider;

    impl TlsProvider for MockTlsProvider {
        fn connect_tls(&self, stream: TcpStream, server_name: &str) -> Result<Box<dyn Transport>> {
            if server_name == "bad.example.com" {
                return Err(PortalError::Tls("mock TLS error".to_string()));
            }
            Ok(Box::new(stream))
        }
    }

    #[test]
    fn trait_is_object_safe_and_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockTlsProvider>();

        let provider = MockTlsProvider;
        let _: &dyn TlsProvider = &provider;
    }

    #[cfg(feature = "tls-rustls")]
    #[test]
    fn rustls_provider_is_constructible() {
        let provider = crate::RustlsTlsProvider::new();
        let _: &dyn TlsProvider = &provider;
    }
}
