//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values; the
//! actual network call happens behind the `Transport` trait, which the host
//! binary implements. Status interpretation stays in the core so every
//! transport reports non-2xx responses the same way.

#[cfg(test)]
use mockall::automock;

/// HTTP method for a request. Trello only needs reads and writes here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// `path` is an absolute URL. `query` holds unencoded key/value pairs; the
/// transport is responsible for percent-encoding them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Failure raised by a transport before any response was received
/// (connection refused, DNS, timeout).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Executes one `HttpRequest` and hands back the raw response.
///
/// Implementations must return non-2xx responses as `Ok` data. Only
/// failures that prevent a response from arriving are `Err`.
#[cfg_attr(test, automock)]
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// The server answered, but not with 200 or 201.
#[derive(Debug, thiserror::Error)]
#[error("HTTP {status}: {body}")]
pub struct StatusError {
    pub status: u16,
    pub body: String,
}
