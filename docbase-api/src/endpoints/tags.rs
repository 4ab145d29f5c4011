//! Tag endpoints.

use reqwest::Method;
use tracing::debug;

use docbase_core::error::DocbaseResult;
use docbase_models::Tag;

use crate::client::DocbaseClient;
use crate::context::RequestContext;

impl DocbaseClient {
    /// List every tag of the team, in server order. `GET /teams/{team}/tags`.
    pub async fn list_tags(&self, ctx: &RequestContext) -> DocbaseResult<Vec<Tag>> {
        let url = self.team_url(&["tags"])?;
        let request = self.build_request(ctx, Method::GET, url, None);

        let tags: Vec<Tag> = self.execute(ctx, request).await?;
        debug!("listed {} tags", tags.len());
        Ok(tags)
    }
}
