//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use docbase_api::{
    ClientConfig, DocbaseClient, DocbaseError, DocbaseResult, HttpRequest, HttpResponse, Transport,
};

/// Answers each request from a path-keyed table. Unknown paths get a 404.
#[derive(Default)]
pub struct RoutingTransport {
    routes: Mutex<HashMap<String, (StatusCode, String)>>,
    calls: AtomicUsize,
    jitter: bool,
}

impl RoutingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay each answer by a path-dependent amount so responses interleave.
    pub fn with_jitter(mut self) -> Self {
        self.jitter = true;
        self
    }

    pub fn route(&self, path: &str, status: StatusCode, body: impl Into<String>) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for RoutingTransport {
    async fn send(&self, request: HttpRequest) -> DocbaseResult<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let path = request.url.path().to_string();

        if self.jitter {
            let spread = path.bytes().map(u64::from).sum::<u64>() % 7;
            tokio::time::sleep(Duration::from_millis(spread * 3)).await;
        }

        let (status, body) = self
            .routes
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, r#"{"error":"not found"}"#.to_string()));

        Ok(HttpResponse {
            status,
            headers: vec![("content-type".into(), "application/json".into())],
            body: body.into_bytes(),
        })
    }
}

/// A transport that never answers.
pub struct HangingTransport;

#[async_trait]
impl Transport for HangingTransport {
    async fn send(&self, _request: HttpRequest) -> DocbaseResult<HttpResponse> {
        std::future::pending::<()>().await;
        Err(DocbaseError::Transport {
            message: "unreachable".into(),
            source: None,
        })
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::new("kray", "t0ken")
}

pub fn client_with(transport: Arc<dyn Transport>) -> DocbaseClient {
    DocbaseClient::with_transport(&test_config(), transport).expect("valid test config")
}

/// A complete post as the server renders it.
pub fn post_json(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "body": format!("body of {id}"),
        "draft": false,
        "archived": false,
        "url": format!("https://kray.docbase.io/posts/{id}"),
        "created_at": "2020-03-01T10:00:00+09:00",
        "updated_at": "2020-03-04T18:20:05+09:00",
        "scope": "group",
        "sharing_url": null,
        "tags": [{"name": "rust"}, {"name": format!("tag-{id}")}],
        "user": {"id": 3, "name": "kray-bot", "profile_image_url": "https://img/3.png"},
        "stars_count": id % 5,
        "good_jobs_count": 1,
        "comments": [{
            "id": id * 10,
            "body": "looks good",
            "created_at": "2020-03-02T09:00:00+09:00",
            "user": {"id": 4, "name": "ken", "profile_image_url": "https://img/4.png"}
        }],
        "groups": [{"id": 12, "name": "backend"}],
        "attachments": [{
            "id": "f00d.png",
            "name": "diagram.png",
            "size": 2048,
            "url": "https://image.docbase.io/uploads/f00d.png",
            "markdown": "![diagram.png](https://image.docbase.io/uploads/f00d.png)",
            "created_at": "2020-03-01T10:05:00+09:00"
        }]
    })
}
