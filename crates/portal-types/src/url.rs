//! URL parsing, resolution, and query-parameter editing (simplified
//! RFC 3986).
//!
//! Launch URLs come from the remote store and must parse as absolute
//! URLs. The launch dispatcher edits their query string; the HTTP client
//! resolves redirect targets against them.

use std::fmt;

/// A parsed absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    /// Scheme component (e.g. `"https"`), lowercased.
    pub scheme: String,
    /// Host component (e.g. `"app.example.com"`).
    pub host: String,
    /// Optional explicit port number.
    pub port: Option<u16>,
    /// Path component starting with `/`.
    pub path: String,
    /// Optional raw query string (without the leading `?`).
    pub query: Option<String>,
    /// Optional fragment (without the leading `#`).
    pub fragment: Option<String>,
}

impl Url {
    /// Parse an absolute URL string (`scheme://host[:port]/path?query#frag`).
    ///
    /// Returns `None` for relative references, empty input, or anything
    /// without a `scheme://` prefix and a host.
    pub fn parse(url: &str) -> Option<Self> {
        let url = url.trim();
        let idx = url.find("://")?;
        let scheme = &url[..idx];
        if scheme.is_empty() {
            return None;
        }
        let rest = &url[idx + 3..];
        Self::parse_authority_and_path(scheme, rest)
    }

    /// Internal helper: parse `host[:port]/path?query#fragment` after the
    /// scheme has been stripped.
    fn parse_authority_and_path(scheme: &str, rest: &str) -> Option<Url> {
        // Split off fragment first.
        let (rest, fragment) = match rest.find('#') {
            Some(i) => (&rest[..i], Some(rest[i + 1..].to_string())),
            None => (rest, None),
        };

        // Split off query.
        let (rest, query) = match rest.find('?') {
            Some(i) => (&rest[..i], Some(rest[i + 1..].to_string())),
            None => (rest, None),
        };

        // Split authority from path.
        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };

        // Parse host and optional port from the authority.
        let (host, port) = match authority.rfind(':') {
            Some(i) => {
                let maybe_port = &authority[i + 1..];
                if let Ok(p) = maybe_port.parse::<u16>() {
                    (&authority[..i], Some(p))
                } else {
                    (authority, None)
                }
            },
            None => (authority, None),
        };

        if host.is_empty() {
            return None;
        }

        Some(Url {
            scheme: scheme.to_lowercase(),
            host: host.to_string(),
            port,
            path: path.to_string(),
            query,
            fragment,
        })
    }

    /// Resolve a reference against this base URL.
    ///
    /// Handles absolute URLs (returned as-is), protocol-relative
    /// (`//host/path`), absolute paths (`/path`), relative paths
    /// (`path`, `../path`), query-only (`?q=x`), and fragment-only
    /// (`#frag`) references. Used for HTTP redirect `Location` headers.
    pub fn resolve(&self, reference: &str) -> Option<Url> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Some(self.clone());
        }

        if reference.contains("://") {
            return Url::parse(reference);
        }

        if reference.starts_with("//") {
            return Url::parse(&format!("{}:{}", self.scheme, reference));
        }

        if let Some(frag) = reference.strip_prefix('#') {
            let mut resolved = self.clone();
            resolved.fragment = Some(frag.to_string());
            return Some(resolved);
        }

        if let Some(query) = reference.strip_prefix('?') {
            let mut resolved = self.clone();
            resolved.query = Some(query.to_string());
            resolved.fragment = None;
            return Some(resolved);
        }

        if reference.starts_with('/') {
            let (path, query, fragment) = split_path_query_fragment(reference);
            return Some(Url {
                scheme: self.scheme.clone(),
                host: self.host.clone(),
                port: self.port,
                path,
                query,
                fragment,
            });
        }

        // Relative path -- resolve against the base directory.
        let base_dir = self.directory();
        let (rel_path, query, fragment) = split_path_query_fragment(reference);
        Some(Url {
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            port: self.port,
            path: resolve_path(base_dir, &rel_path),
            query,
            fragment,
        })
    }

    /// Get the directory portion of the path (everything up to and
    /// including the last `/`).
    pub fn directory(&self) -> &str {
        match self.path.rfind('/') {
            Some(i) => &self.path[..=i],
            None => "/",
        }
    }

    /// Get the origin (`scheme://host[:port]`).
    pub fn origin(&self) -> String {
        let mut s = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            s.push_str(&format!(":{port}"));
        }
        s
    }

    /// Decoded query parameters in document order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let Some(ref query) = self.query else {
            return Vec::new();
        };
        query
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (percent_decode(k), percent_decode(v)),
                None => (percent_decode(pair), String::new()),
            })
            .collect()
    }

    /// Set a query parameter, overwriting any existing parameter with the
    /// same (decoded) name.
    ///
    /// The first occurrence is replaced in place; later duplicates are
    /// removed. Name and value are percent-encoded into the raw query.
    pub fn set_query_param(&mut self, name: &str, value: &str) {
        let encoded = format!("{}={}", percent_encode(name), percent_encode(value));

        let mut parts: Vec<String> = match self.query {
            Some(ref q) => q
                .split('&')
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        let matches_name = |part: &str| {
            let raw_name = part.split_once('=').map(|(k, _)| k).unwrap_or(part);
            percent_decode(raw_name) == name
        };

        match parts.iter().position(|p| matches_name(p)) {
            Some(i) => {
                parts[i] = encoded;
                let mut seen_first = false;
                parts.retain(|p| {
                    if matches_name(p) {
                        let keep = !seen_first;
                        seen_first = true;
                        keep
                    } else {
                        true
                    }
                });
            },
            None => parts.push(encoded),
        }

        self.query = Some(parts.join("&"));
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        write!(f, "{}", self.path)?;
        if let Some(ref q) = self.query {
            write!(f, "?{q}")?;
        }
        if let Some(ref frag) = self.fragment {
            write!(f, "#{frag}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Percent-encoding (query component)
// ---------------------------------------------------------------------------

/// Percent-encode a query name or value. Unreserved characters
/// (`A-Z a-z 0-9 - . _ ~`) pass through; everything else becomes `%XX`.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(byte));
            },
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Decode `%XX` escapes. Malformed escapes are passed through literally.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| char::from(*b).to_digit(16)),
                bytes.get(i + 2).and_then(|b| char::from(*b).to_digit(16)),
            )
        {
            out.push((hi * 16 + lo) as u8);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Split a (possibly relative) path string into `(path, query, fragment)`.
fn split_path_query_fragment(s: &str) -> (String, Option<String>, Option<String>) {
    let (s, fragment) = match s.find('#') {
        Some(i) => (&s[..i], Some(s[i + 1..].to_string())),
        None => (s, None),
    };
    let (path, query) = match s.find('?') {
        Some(i) => (s[..i].to_string(), Some(s[i + 1..].to_string())),
        None => (s.to_string(), None),
    };
    (path, query, fragment)
}

/// Resolve a relative path against a base directory, handling `..` and
/// `.` segments.
fn resolve_path(base_dir: &str, relative: &str) -> String {
    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();

    for seg in relative.split('/') {
        match seg {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            s => segments.push(s),
        }
    }

    format!("/{}", segments.join("/"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- parsing -----------------------------------------------------------

    #[test]
    fn parse_full_https_url() {
        let url = Url::parse("https://app.example.com/launch").unwrap();
        assert_eq!(url.scheme, "https");
        assert_eq!(url.host, "app.example.com");
        assert_eq!(url.port, None);
        assert_eq!(url.path, "/launch");
        assert_eq!(url.query, None);
        assert_eq!(url.fragment, None);
    }

    #[test]
    fn parse_url_with_port() {
        let url = Url::parse("http://localhost:8080/api").unwrap();
        assert_eq!(url.host, "localhost");
        assert_eq!(url.port, Some(8080));
        assert_eq!(url.path, "/api");
    }

    #[test]
    fn parse_url_with_query_and_fragment() {
        let url = Url::parse("https://example.com/search?q=test#results").unwrap();
        assert_eq!(url.path, "/search");
        assert_eq!(url.query, Some("q=test".to_string()));
        assert_eq!(url.fragment, Some("results".to_string()));
    }

    #[test]
    fn parse_bare_host_gets_root_path() {
        let url = Url::parse("https://app.example").unwrap();
        assert_eq!(url.path, "/");
    }

    #[test]
    fn parse_scheme_is_lowercased() {
        let url = Url::parse("HTTPS://app.example/").unwrap();
        assert_eq!(url.scheme, "https");
    }

    #[test]
    fn parse_rejects_relative_and_empty() {
        assert!(Url::parse("").is_none());
        assert!(Url::parse("/path/only").is_none());
        assert!(Url::parse("no-scheme.example.com").is_none());
        assert!(Url::parse("://missing-scheme").is_none());
    }

    #[test]
    fn parse_rejects_empty_host() {
        assert!(Url::parse("https:///path").is_none());
    }

    // -- resolution --------------------------------------------------------

    #[test]
    fn resolve_relative_path() {
        let base = Url::parse("http://example.com/docs/intro").unwrap();
        let resolved = base.resolve("chapter2").unwrap();
        assert_eq!(resolved.path, "/docs/chapter2");
    }

    #[test]
    fn resolve_absolute_path() {
        let base = Url::parse("http://example.com/docs/intro").unwrap();
        let resolved = base.resolve("/other/page").unwrap();
        assert_eq!(resolved.path, "/other/page");
    }

    #[test]
    fn resolve_protocol_relative() {
        let base = Url::parse("https://example.com/page").unwrap();
        let resolved = base.resolve("//cdn.example.com/asset").unwrap();
        assert_eq!(resolved.scheme, "https");
        assert_eq!(resolved.host, "cdn.example.com");
    }

    #[test]
    fn resolve_dotdot_segments() {
        let base = Url::parse("http://example.com/a/b/c").unwrap();
        let resolved = base.resolve("../../d").unwrap();
        assert_eq!(resolved.path, "/d");
    }

    #[test]
    fn resolve_absolute_reference() {
        let base = Url::parse("http://example.com/x").unwrap();
        let resolved = base.resolve("https://other.example/y").unwrap();
        assert_eq!(resolved.host, "other.example");
        assert_eq!(resolved.scheme, "https");
    }

    #[test]
    fn resolve_empty_returns_self() {
        let base = Url::parse("http://example.com/page").unwrap();
        assert_eq!(base.resolve("").unwrap(), base);
    }

    // -- display -----------------------------------------------------------

    #[test]
    fn display_round_trip() {
        let url = Url::parse("https://example.com:8443/path?q=1#frag").unwrap();
        assert_eq!(url.to_string(), "https://example.com:8443/path?q=1#frag");
    }

    #[test]
    fn origin_includes_port() {
        let url = Url::parse("https://example.com:8443/path").unwrap();
        assert_eq!(url.origin(), "https://example.com:8443");
    }

    // -- query parameters --------------------------------------------------

    #[test]
    fn set_query_param_on_bare_url() {
        let mut url = Url::parse("https://app.example/").unwrap();
        url.set_query_param("access_token", "T");
        assert_eq!(url.to_string(), "https://app.example/?access_token=T");
    }

    #[test]
    fn set_query_param_appends() {
        let mut url = Url::parse("https://app.example/?a=1").unwrap();
        url.set_query_param("b", "2");
        assert_eq!(url.to_string(), "https://app.example/?a=1&b=2");
    }

    #[test]
    fn set_query_param_overwrites_in_place() {
        let mut url = Url::parse("https://app.example/?a=1&b=2&c=3").unwrap();
        url.set_query_param("b", "9");
        assert_eq!(url.to_string(), "https://app.example/?a=1&b=9&c=3");
    }

    #[test]
    fn set_query_param_removes_duplicates() {
        let mut url = Url::parse("https://app.example/?t=1&x=2&t=3").unwrap();
        url.set_query_param("t", "9");
        assert_eq!(url.to_string(), "https://app.example/?t=9&x=2");
    }

    #[test]
    fn set_query_param_encodes_value() {
        let mut url = Url::parse("https://app.example/").unwrap();
        url.set_query_param("user_email", "ana maria@example.com");
        assert_eq!(
            url.to_string(),
            "https://app.example/?user_email=ana%20maria%40example.com",
        );
    }

    #[test]
    fn set_query_param_empty_value() {
        let mut url = Url::parse("https://app.example/").unwrap();
        url.set_query_param("user_id", "");
        assert_eq!(url.to_string(), "https://app.example/?user_id=");
    }

    #[test]
    fn query_pairs_decode() {
        let url = Url::parse("https://x.example/?a=1&e=ana%40example.com&flag").unwrap();
        assert_eq!(
            url.query_pairs(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("e".to_string(), "ana@example.com".to_string()),
                ("flag".to_string(), String::new()),
            ],
        );
    }

    // -- encoding helpers --------------------------------------------------

    #[test]
    fn percent_encode_unreserved_passthrough() {
        assert_eq!(percent_encode("AZaz09-._~"), "AZaz09-._~");
    }

    #[test]
    fn percent_encode_reserved() {
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(percent_encode("user@example.com"), "user%40example.com");
    }

    #[test]
    fn percent_encode_utf8() {
        assert_eq!(percent_encode("nóa"), "n%C3%B3a");
    }

    #[test]
    fn percent_decode_round_trip() {
        let original = "token+with spaces&specials=yes@nóa";
        assert_eq!(percent_decode(&percent_encode(original)), original);
    }

    #[test]
    fn percent_decode_malformed_passthrough() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }
}
