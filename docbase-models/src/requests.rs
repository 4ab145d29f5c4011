//! Request bodies for the post endpoints.
//!
//! Both request types validate themselves before the client touches the
//! network; a failed validation never produces an HTTP request.

use serde::{Deserialize, Serialize};

use docbase_core::error::ValidationError;

use crate::models::scope::Scope;

/// Body of `POST /teams/{team}/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub draft: bool,
    pub scope: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Group ids; required when `scope` is `Group`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<u64>>,
    /// Notify team members about the new post.
    pub notice: bool,
}

impl CreatePostRequest {
    /// A published, team-wide post without tags, groups or notification.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            draft: false,
            scope: Scope::Everyone,
            tags: None,
            groups: None,
            notice: false,
        }
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Group ids to share with. Pair with `with_scope(Scope::Group)`; the
    /// scope is left as is.
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = u64>) -> Self {
        self.groups = Some(groups.into_iter().collect());
        self
    }

    pub fn with_notice(mut self, notice: bool) -> Self {
        self.notice = notice;
        self
    }

    /// Check local preconditions: a non-empty title, and at least one group
    /// when the scope is `Group`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.scope == Scope::Group && is_empty(&self.groups) {
            return Err(ValidationError::GroupRequired);
        }
        Ok(())
    }
}

/// Body of `PATCH /teams/{team}/posts/{id}`.
///
/// Every field except `id` is optional; `None` leaves the server value
/// unchanged and is omitted from the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePostRequest {
    /// Target post. Travels in the URL, never in the body.
    #[serde(skip)]
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<bool>,
}

impl UpdatePostRequest {
    /// An update of post `id` that changes nothing yet.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Group ids to share with. The scope is left as is, so `validate`
    /// rejects groups unless the scope is also set to `Group`.
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = u64>) -> Self {
        self.groups = Some(groups.into_iter().collect());
        self
    }

    pub fn with_notice(mut self, notice: bool) -> Self {
        self.notice = Some(notice);
        self
    }

    /// Check local preconditions: a non-zero id, a non-empty title when one
    /// is given, and groups present exactly when the scope is `Group`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id == 0 {
            return Err(ValidationError::MissingId);
        }
        if matches!(self.title.as_deref(), Some("")) {
            return Err(ValidationError::EmptyTitle);
        }
        let group_scope = self.scope == Some(Scope::Group);
        if group_scope && is_empty(&self.groups) {
            return Err(ValidationError::GroupRequired);
        }
        if !group_scope && !is_empty(&self.groups) {
            return Err(ValidationError::GroupsNotAllowed);
        }
        Ok(())
    }
}

fn is_empty(groups: &Option<Vec<u64>>) -> bool {
    groups.as_ref().map_or(true, Vec::is_empty)
}
