//! User entity model.

use serde::{Deserialize, Serialize};

/// A team member, as embedded in posts and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub profile_image_url: String,
}
