//! HTTP transport types and the `Transport` capability.
//!
//! # Design
//! Requests and responses are plain data. `ProductSubmitter` builds an
//! `HttpRequest`, hands it to a `Transport`, and parses the `HttpResponse`
//! that comes back. A transport reads the response body to the end before
//! returning, so the underlying stream is released on every path and the
//! client never holds a live body.
//!
//! `UreqTransport` is the default. Any closure with the right signature is
//! also a transport, which is how tests inject canned responses and failures.

use std::time::Duration;

use thiserror::Error;

use crate::error::BoxError;

/// A POST request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The response head arrived but its body could not be read to the end.
#[derive(Debug, Error)]
#[error("failed to read response body: {0}")]
pub struct BodyReadError(#[source] pub ureq::Error);

/// Delivers a request and returns whatever response came back.
///
/// Non-2xx statuses are data, not errors. `Err` is reserved for failures to
/// deliver the request or read the response (DNS, refused connection,
/// timeouts, a body cut short). `UreqTransport` reports the last case as a
/// `BodyReadError`, which also covers bodies over ureq's 10 MB read limit.
pub trait Transport {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, BoxError>,
{
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        self(request)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// Clones share the agent's connection pool. Without a timeout, a call
/// blocks until the agent or the OS gives up.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// A transport with no timeout of its own.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Bound every call (connect, send and receive) by `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
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

impl Transport for UreqTransport {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self.agent.post(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.send(request.body.as_slice())?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_vec().map_err(BodyReadError)?;

        Ok(HttpResponse { status, body })
    }
}
