//! Pluggable HTTP transport.
//!
//! [`Client`](crate::Client) hands every request to a [`Transport`]. The
//! default [`HttpTransport`] is backed by `reqwest`; tests and embedders can
//! supply their own implementation through
//! [`Client::with_transport`](crate::Client::with_transport).

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::request::Method;

/// Request timeout applied by [`HttpTransport`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully resolved request ready to go on the wire.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw status and body returned by the server.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Low-level failure before a response was received (DNS, connect, timeout, TLS).
#[derive(thiserror::Error, Debug, Clone)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one HTTP request and returns the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed transport. One connection pool is shared by all calls
/// made through the same client.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(accept_invalid_certs: bool) -> Result<Self, TransportError> {
        if accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled");
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                TransportError(e.to_string())
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut builder = self.client.request(method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
