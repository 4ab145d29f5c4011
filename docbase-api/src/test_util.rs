//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use docbase_core::config::ClientConfig;
use docbase_core::error::{DocbaseError, DocbaseResult};

use crate::client::DocbaseClient;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub(crate) struct StubTransport {
    responses: Mutex<VecDeque<DocbaseResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
    delay: Option<Duration>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sleep before answering, to exercise deadlines and cancellation.
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn push(&self, status: StatusCode, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: vec![("content-type".into(), "application/json".into())],
            body: body.as_bytes().to_vec(),
        }));
    }

    pub(crate) fn push_error(&self, err: DocbaseError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> DocbaseResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DocbaseError::Transport {
                message: "no stubbed response left".into(),
                source: None,
            }))
    }
}

/// A client for team "kray" with token "t0ken" backed by `stub`.
pub(crate) fn client_with(stub: StubTransport) -> (DocbaseClient, Arc<StubTransport>) {
    let stub = Arc::new(stub);
    let client = DocbaseClient::with_transport(&ClientConfig::new("kray", "t0ken"), stub.clone())
        .expect("valid test config");
    (client, stub)
}

/// A complete post as the server renders it.
pub(crate) fn post_json(id: u64, title: &str) -> String {
    serde_json::json!({
        "id": id,
        "title": title,
        "body": "Sample Body",
        "draft": false,
        "archived": false,
        "url": format!("https://kray.docbase.io/posts/{id}"),
        "created_at": "2020-03-01T10:00:00+09:00",
        "updated_at": "2020-03-01T10:00:00+09:00",
        "scope": "private",
        "sharing_url": null,
        "tags": [{"name": "rust"}],
        "user": {"id": 1, "name": "kray-bot", "profile_image_url": "https://img/1.png"},
        "stars_count": 0,
        "good_jobs_count": 2,
        "comments": [],
        "groups": [],
        "attachments": []
    })
    .to_string()
}
