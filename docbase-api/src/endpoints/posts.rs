//! Post endpoints.

use reqwest::Method;
use tracing::debug;

use docbase_core::error::{DocbaseError, DocbaseResult, ValidationError};
use docbase_models::{CreatePostRequest, Post, UpdatePostRequest};

use crate::client::DocbaseClient;
use crate::context::RequestContext;

impl DocbaseClient {
    /// Create a post. `POST /teams/{team}/posts`.
    ///
    /// The request is validated first; an invalid request never reaches the
    /// transport.
    pub async fn create_post(
        &self,
        ctx: &RequestContext,
        req: &CreatePostRequest,
    ) -> DocbaseResult<Post> {
        req.validate()?;
        let url = self.team_url(&["posts"])?;
        let body = Self::json_body(req)?;
        let request = self.build_request(ctx, Method::POST, url, Some(body));

        let post: Post = self.execute(ctx, request).await?;
        debug!("created post {}", post.id);
        Ok(post)
    }

    /// Update the fields of `req` that are set. `PATCH /teams/{team}/posts/{id}`.
    pub async fn update_post(
        &self,
        ctx: &RequestContext,
        req: &UpdatePostRequest,
    ) -> DocbaseResult<Post> {
        req.validate()?;
        let id = req.id.to_string();
        let url = self.team_url(&["posts", id.as_str()])?;
        let body = Self::json_body(req)?;
        let request = self.build_request(ctx, Method::PATCH, url, Some(body));

        self.execute(ctx, request).await
    }

    /// Fetch a single post. `GET /teams/{team}/posts/{id}`.
    pub async fn get_post(&self, ctx: &RequestContext, id: u64) -> DocbaseResult<Post> {
        if id == 0 {
            return Err(DocbaseError::Validation(ValidationError::MissingId));
        }
        let id = id.to_string();
        let url = self.team_url(&["posts", id.as_str()])?;
        let request = self.build_request(ctx, Method::GET, url, None);

        self.execute(ctx, request).await
    }
}
