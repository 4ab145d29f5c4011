//! HTTP client for the DocBase REST API.
//!
//! Builds authenticated requests against `{base_url}/teams/{team}/...`,
//! sends them through the injected `Transport` under the caller's
//! `RequestContext`, maps failure statuses to `DocbaseError::Api` and decodes
//! successful bodies. The client holds no mutable state and can be cloned
//! freely and shared across tasks.

use std::sync::Arc;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use docbase_core::config::ClientConfig;
use docbase_core::constants;
use docbase_core::error::{DocbaseError, DocbaseResult};

use crate::context::RequestContext;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Client for one DocBase team.
#[derive(Clone)]
pub struct DocbaseClient {
    transport: Arc<dyn Transport>,
    /// API origin, e.g. "https://api.docbase.io".
    base_url: Url,
    team: String,
    token: String,
    api_version: String,
}

impl DocbaseClient {
    /// Create a client that talks to DocBase over `reqwest`.
    pub fn new(config: &ClientConfig) -> DocbaseResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client that sends every request through `transport`.
    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> DocbaseResult<Self> {
        config.validate()?;

        let sanitized = ClientConfig::sanitize_base_url(&config.base_url);
        let base_url = Url::parse(&sanitized)
            .map_err(|e| DocbaseError::Config(format!("invalid base_url {sanitized:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DocbaseError::Config(format!(
                "base_url {sanitized:?} cannot carry a path"
            )));
        }

        debug!("docbase client created for team {} at {}", config.team, base_url);

        Ok(Self {
            transport,
            base_url,
            team: config.team.clone(),
            token: config.token.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Team the client is bound to.
    pub fn team(&self) -> &str {
        &self.team
    }

    /// API origin requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API version requested on every call.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build `{base_url}/teams/{team}/{segments...}`, percent-encoding each segment.
    pub(crate) fn team_url(&self, segments: &[&str]) -> DocbaseResult<Url> {
        // `Url` silently drops dot segments on push.
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(DocbaseError::RequestBuild(format!(
                "invalid path segment {bad:?}"
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DocbaseError::RequestBuild(format!("base url cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("teams")
            .push(&self.team)
            .extend(segments);
        Ok(url)
    }

    /// Assemble an authenticated request. `body` is sent as JSON.
    pub(crate) fn build_request(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> HttpRequest {
        let mut headers = vec![
            (constants::TOKEN_HEADER.to_string(), self.token.clone()),
            (constants::API_VERSION_HEADER.to_string(), self.api_version.clone()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        HttpRequest {
            method,
            url,
            headers,
            body,
            timeout: ctx.remaining(),
        }
    }

    /// Serialize a request body.
    pub(crate) fn json_body<T: Serialize>(value: &T) -> DocbaseResult<Vec<u8>> {
        serde_json::to_vec(value)
            .map_err(|e| DocbaseError::RequestBuild(format!("failed to serialize body: {e}")))
    }

    /// Send a request under `ctx`, check the status and decode the body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> DocbaseResult<T> {
        let method = request.method.clone();
        let path = request.url.path().to_string();
        debug!("{} {}", method, path);

        let response = ctx.run(self.transport.send(request)).await??;
        let response = Self::check_status(&method, &path, response)?;
        Self::decode(&response)
    }

    /// Convert a failure status into `DocbaseError::Api`, keeping the body verbatim.
    fn check_status(method: &Method, path: &str, response: HttpResponse) -> DocbaseResult<HttpResponse> {
        let status = response.status;
        if status.as_u16() < constants::FAILURE_STATUS_THRESHOLD {
            debug!("{} {} -> {}", method, path, status.as_u16());
            return Ok(response);
        }

        let body = response.text();
        warn!("{} {} failed with status {}", method, path, status.as_u16());
        Err(DocbaseError::Api {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }

    /// Decode a JSON response body.
    fn decode<T: DeserializeOwned>(response: &HttpResponse) -> DocbaseResult<T> {
        serde_json::from_slice(&response.body).map_err(|e| {
            warn!("failed to decode response body: {e}");
            DocbaseError::Decode(e)
        })
    }
}

impl std::fmt::Debug for DocbaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocbaseClient")
            .field("base_url", &self.base_url.as_str())
            .field("team", &self.team)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}
