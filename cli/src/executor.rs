//! ureq-backed `Transport`: the only place the process touches the network.
//!
//! # Design
//! One `ureq::Agent` is shared by all requests. Status codes are returned as
//! data so `trello-core` decides what counts as success; only connection
//! failures and timeouts come back as `Err`.

use std::time::Duration;

use trello_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use ureq::RequestBuilder;

/// Fixed per-request timeout covering connect, send and receive.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply headers and query pairs shared by every method.
fn prepare<B>(mut builder: RequestBuilder<B>, req: &HttpRequest) -> RequestBuilder<B> {
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder.query_pairs(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::trace!(method = ?req.method, path = %req.path, "Sending request");
        let mut response = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => prepare(self.agent.get(&req.path), &req).call()?,
            (HttpMethod::Post, Some(body)) => {
                prepare(self.agent.post(&req.path), &req).send(body.as_bytes())?
            }
            (HttpMethod::Post, None) => prepare(self.agent.post(&req.path), &req).send_empty()?,
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
