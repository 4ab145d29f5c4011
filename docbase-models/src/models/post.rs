//! Post (memo) entity model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::attachment::Attachment;
use super::comment::Comment;
use super::group::Group;
use super::scope::Scope;
use super::tag::Tag;
use super::user::User;

/// A document stored in DocBase, as returned by the post endpoints.
///
/// Timestamps keep the offset the server sent them with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub draft: bool,
    #[serde(default)]
    pub archived: bool,
    pub url: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub scope: Scope,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub user: User,
    #[serde(default)]
    pub stars_count: u64,
    #[serde(default)]
    pub good_jobs_count: u64,
    /// Public sharing URL, present only while sharing is enabled.
    #[serde(default)]
    pub sharing_url: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Post {
    /// Names of the post's tags, in server order.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// Ids of the groups the post is shared with.
    pub fn group_ids(&self) -> Vec<u64> {
        self.groups.iter().map(|g| g.id).collect()
    }

    /// Whether a public sharing URL is active.
    pub fn is_shared(&self) -> bool {
        self.sharing_url.is_some()
    }
}
