//! HTTP transport seam.
//!
//! The client describes each call as a plain `HttpRequest` and hands it to a
//! `Transport`. `ReqwestTransport` is the production implementation; any
//! other `Transport` (a test stub, a proxy-aware wrapper) can be injected
//! through `DocbaseClient::with_transport`.
//!
//! Transports return the response with its body fully read, so the
//! underlying connection is released before the client inspects the status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use tracing::trace;

use docbase_core::config::ClientConfig;
use docbase_core::constants;
use docbase_core::error::{DocbaseError, DocbaseResult};

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    /// Per-request timeout, derived from the caller's deadline.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response with its body already read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Executes an `HttpRequest` and returns the complete response.
///
/// Implementations must be safe to share between tasks. Dropping the
/// returned future must abort the request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> DocbaseResult<HttpResponse>;
}

/// `Transport` backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: Client,
}

impl ReqwestTransport {
    /// Build a transport using the timeouts from the client configuration.
    pub fn new(config: &ClientConfig) -> DocbaseResult<Self> {
        let inner = Client::builder()
            .user_agent(constants::USER_AGENT)
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| DocbaseError::transport("failed to build HTTP client", e))?;

        Ok(Self { inner })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }

    /// Classify a reqwest error into a DocbaseError variant.
    fn classify_error(e: reqwest::Error) -> DocbaseError {
        if e.is_timeout() {
            DocbaseError::timeout("request timed out", e)
        } else if e.is_builder() {
            DocbaseError::RequestBuild(e.to_string())
        } else if e.is_connect() {
            DocbaseError::transport("connection failed", e)
        } else if e.is_body() || e.is_decode() {
            DocbaseError::transport("failed to read response body", e)
        } else {
            DocbaseError::transport("request failed", e)
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> DocbaseResult<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;

        let mut builder = self.inner.request(method, url);
        for (key, value) in &headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(Self::classify_error)?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();

        // Read to the end on every status so the connection returns to the pool.
        let body = response
            .bytes()
            .await
            .map_err(Self::classify_error)?
            .to_vec();
        trace!("received {} bytes with status {}", body.len(), status);

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
