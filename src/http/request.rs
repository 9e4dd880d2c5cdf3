use crate::http::headers::HeaderMap;

/// Represents a parsed HTTP request from a client.
///
/// Scoped to exactly one connection. The method, URL and version are kept
/// verbatim as text tokens; the URL in particular is not decoded or
/// normalized. Once constructed all three tokens are non-empty; the only
/// mutation the handler performs afterward is a single URL rewrite to apply
/// the default-document substitution.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method token (e.g., "GET")
    pub method: String,
    /// The request URL/path as received (e.g., "/index.html")
    pub url: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, last write wins on duplicate names
    pub headers: HeaderMap,
}

impl Request {
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        version: impl Into<String>,
        headers: HeaderMap,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            version: version.into(),
            headers,
        }
    }

    /// Retrieves a header value by name (case-sensitive exact match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}
