//! DocBase API - HTTP client for the DocBase REST API.
//!
//! `DocbaseClient` turns typed calls (create/update/get a post, list tags)
//! into authenticated requests against `{base_url}/teams/{team}/...` and
//! decodes the JSON answers. The HTTP round-trip goes through the
//! `Transport` trait, so tests and embedders can substitute their own.
//! Every call takes a `RequestContext` carrying its deadline and
//! cancellation signal.

pub mod client;
pub mod context;
pub mod endpoints;
pub mod transport;

#[cfg(test)]
mod test_util;

// Re-export key types
pub use client::DocbaseClient;
pub use context::{CancelHandle, RequestContext};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

pub use docbase_core::{ClientConfig, DocbaseError, DocbaseResult, ErrorKind, ValidationError};
pub use docbase_models::{
    Attachment, Comment, CreatePostRequest, Group, Post, Scope, Tag, UpdatePostRequest, User,
};
