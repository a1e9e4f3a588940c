//! Minimal HTTP/1.1 GET client.
//!
//! Blocking `std::net::TcpStream` with connect/read timeouts, optional
//! HTTPS via a [`TlsProvider`], bounded redirect following, chunked
//! transfer decoding, and a response size cap. Just enough HTTP for one
//! read query against the managed store.

use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use portal_types::error::{PortalError, Result};
use portal_types::url::Url;

use crate::tls::TlsProvider;

/// Maximum response body size (2 MB). Catalog responses are tiny; anything
/// bigger is a misbehaving endpoint.
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: u8 = 5;

/// TCP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// TCP read timeout.
const READ_TIMEOUT: Duration = Duration::from_secs(15);

/// A parsed HTTP response.
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code (e.g. 200, 404).
    pub status: u16,
    /// Response headers as (lowercased name, value) pairs.
    pub headers: Vec<(String, String)>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k == &name_lower)
            .map(|(_, v)| v.as_str())
    }
}

/// Perform an HTTP(S) GET request with extra request headers.
///
/// HTTPS URLs require a [`TlsProvider`]; without one they fail instead of
/// silently downgrading. Follows redirects (301/302/307/308) up to
/// [`MAX_REDIRECTS`] hops, re-sending the same headers.
pub fn http_get(
    url: &Url,
    headers: &[(&str, &str)],
    tls: Option<&dyn TlsProvider>,
) -> Result<HttpResponse> {
    let mut current_url = url.clone();
    for _ in 0..MAX_REDIRECTS {
        let resp = do_request(&current_url, headers, tls)?;

        if is_redirect(resp.status)
            && let Some(location) = resp.header("location")
        {
            let location = location.to_string();
            current_url = current_url
                .resolve(&location)
                .ok_or_else(|| PortalError::Http(format!("bad redirect Location: {location}")))?;
            log::debug!("following redirect to {current_url}");
            continue;
        }

        return Ok(resp);
    }

    Err(PortalError::Http("too many redirects".to_string()))
}

// -------------------------------------------------------------------
// Internals
// -------------------------------------------------------------------

/// Connect, optionally upgrade to TLS, send GET, read and parse.
fn do_request(
    url: &Url,
    headers: &[(&str, &str)],
    tls: Option<&dyn TlsProvider>,
) -> Result<HttpResponse> {
    let is_https = match url.scheme.as_str() {
        "http" => false,
        "https" => true,
        scheme => {
            return Err(PortalError::Http(format!(
                "unsupported scheme for HTTP client: {scheme}",
            )));
        },
    };

    // Refuse https without a provider before touching the network.
    let provider = match (is_https, tls) {
        (true, None) => {
            return Err(PortalError::Tls(format!(
                "TLS not available for https://{}",
                url.host,
            )));
        },
        (true, Some(provider)) => Some(provider),
        (false, _) => None,
    };

    let default_port = if is_https { 443 } else { 80 };
    let port = url.port.unwrap_or(default_port);
    let stream = tcp_connect(&url.host, port)?;

    if let Some(provider) = provider {
        let mut tls_stream = provider.connect_tls(stream, &url.host)?;
        send_request(&mut tls_stream, url, headers, is_https)?;
        let raw = read_response(&mut tls_stream)?;
        parse_response(&raw)
    } else {
        let mut stream = stream;
        send_request(&mut stream, url, headers, is_https)?;
        let raw = read_response(&mut stream)?;
        parse_response(&raw)
    }
}

/// Open a TCP connection with a connect timeout.
fn tcp_connect(host: &str, port: u16) -> Result<TcpStream> {
    use std::net::ToSocketAddrs;

    let addr = format!("{host}:{port}")
        .to_socket_addrs()
        .map_err(|e| PortalError::Http(format!("DNS resolution failed: {e}")))?
        .next()
        .ok_or_else(|| PortalError::Http(format!("no addresses for {host}:{port}")))?;

    let stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)
        .map_err(|e| PortalError::Http(format!("TCP connect failed: {e}")))?;

    stream
        .set_read_timeout(Some(READ_TIMEOUT))
        .map_err(|e| PortalError::Http(format!("set read timeout: {e}")))?;

    Ok(stream)
}

/// Send an HTTP/1.1 GET request with the caller's extra headers.
fn send_request(
    stream: &mut impl Write,
    url: &Url,
    headers: &[(&str, &str)],
    is_https: bool,
) -> Result<()> {
    let default_port: u16 = if is_https { 443 } else { 80 };
    let host_header = match url.port {
        Some(p) if p != default_port => format!("{}:{}", url.host, p),
        _ => url.host.clone(),
    };

    let path = if let Some(ref q) = url.query {
        format!("{}?{}", url.path, q)
    } else {
        url.path.clone()
    };

    let mut request = format!(
        "GET {path} HTTP/1.1\r\n\
         Host: {host_header}\r\n\
         User-Agent: Portal/0.1\r\n\
         Connection: close\r\n"
    );
    for (name, value) in headers {
        request.push_str(name);
        request.push_str(": ");
        request.push_str(value);
        request.push_str("\r\n");
    }
    request.push_str("\r\n");

    stream
        .write_all(request.as_bytes())
        .map_err(|e| PortalError::Http(format!("send request: {e}")))?;

    Ok(())
}

/// Read the entire response until EOF or until the read timeout fires.
fn read_response(stream: &mut impl Read) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(8192);
    let mut chunk = [0u8; 8192];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                if buf.len() + n > MAX_BODY_SIZE + 4096 {
                    return Err(PortalError::Http("response too large".to_string()));
                }
                buf.extend_from_slice(&chunk[..n]);
            },
            Err(e)
                if e.kind() == io::ErrorKind::WouldBlock || e.kind() == io::ErrorKind::TimedOut =>
            {
                break;
            },
            Err(e) => {
                return Err(PortalError::Http(format!("read response: {e}")));
            },
        }
    }
    Ok(buf)
}

/// Parse raw bytes into status code, headers, and body.
pub fn parse_response(data: &[u8]) -> Result<HttpResponse> {
    // Find the header/body boundary (\r\n\r\n).
    let header_end = find_subsequence(data, b"\r\n\r\n").ok_or_else(|| {
        PortalError::Http("malformed HTTP response: no header terminator".to_string())
    })?;

    let header_bytes = &data[..header_end];
    let body_start = header_end + 4;

    let header_str = std::str::from_utf8(header_bytes)
        .map_err(|_| PortalError::Http("non-UTF-8 headers".to_string()))?;

    let mut lines = header_str.split("\r\n");

    // Status line: "HTTP/1.x STATUS REASON"
    let status_line = lines
        .next()
        .ok_or_else(|| PortalError::Http("empty response".to_string()))?;
    let status = parse_status_line(status_line)?;

    let mut headers = Vec::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_lowercase(), value.trim().to_string()));
        }
    }

    let resp = HttpResponse {
        status,
        headers,
        body: Vec::new(),
    };

    // Decode body.
    let raw_body = &data[body_start..];
    let body = if resp
        .header("transfer-encoding")
        .is_some_and(|v| v.contains("chunked"))
    {
        decode_chunked(raw_body)?
    } else if let Some(cl) = resp.header("content-length") {
        let len: usize = cl
            .parse()
            .map_err(|_| PortalError::Http("bad Content-Length".to_string()))?;
        if len > MAX_BODY_SIZE {
            return Err(PortalError::Http(
                "response body exceeds 2 MB limit".to_string(),
            ));
        }
        raw_body[..raw_body.len().min(len)].to_vec()
    } else {
        raw_body.to_vec()
    };

    if body.len() > MAX_BODY_SIZE {
        return Err(PortalError::Http(
            "response body exceeds 2 MB limit".to_string(),
        ));
    }

    Ok(HttpResponse { body, ..resp })
}

/// Parse the HTTP status code from the status line.
fn parse_status_line(line: &str) -> Result<u16> {
    // Expected: "HTTP/1.x NNN ..."
    let parts: Vec<&str> = line.splitn(3, ' ').collect();
    if parts.len() < 2 {
        return Err(PortalError::Http(format!("bad status line: {line}")));
    }
    parts[1]
        .parse()
        .map_err(|_| PortalError::Http(format!("bad status code in: {line}")))
}

/// Decode a chunked transfer-encoded body.
fn decode_chunked(data: &[u8]) -> Result<Vec<u8>> {
    let mut result = Vec::new();
    let mut pos = 0;

    while let Some(i) = find_subsequence(&data[pos..], b"\r\n") {
        let line_end = pos + i;

        let size_str = std::str::from_utf8(&data[pos..line_end])
            .map_err(|_| PortalError::Http("bad chunk size".to_string()))?
            .trim();

        // Strip optional chunk extensions (after `;`).
        let size_str = size_str.split(';').next().unwrap_or("").trim();

        let chunk_size = usize::from_str_radix(size_str, 16)
            .map_err(|_| PortalError::Http("bad chunk size".to_string()))?;

        if chunk_size == 0 {
            break;
        }

        let chunk_start = line_end + 2;
        let chunk_end = chunk_start + chunk_size;

        if chunk_start > data.len() || chunk_end > data.len() {
            // Partial chunk -- take what we have.
            result.extend_from_slice(&data[chunk_start.min(data.len())..]);
            break;
        }

        if result.len() + chunk_size > MAX_BODY_SIZE {
            return Err(PortalError::Http(
                "chunked body exceeds 2 MB limit".to_string(),
            ));
        }

        result.extend_from_slice(&data[chunk_start..chunk_end]);
        // Skip past chunk data and trailing \r\n; the buffer may be cut
        // short right at the boundary.
        pos = (chunk_end + 2).min(data.len());
    }

    Ok(result)
}

/// Whether a status code is a redirect we should follow.
fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 307 | 308)
}

/// Find the position of a byte subsequence in a slice.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
