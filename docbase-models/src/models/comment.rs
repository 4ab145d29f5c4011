//! Comment entity model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use super::user::User;

/// A comment left on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id. The server sends a number; it is kept as text.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub body: String,
    pub created_at: DateTime<FixedOffset>,
    pub user: User,
}

/// Accept an id encoded either as a JSON string or a JSON number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
