//! Group entity model.

use serde::{Deserialize, Serialize};

/// A group a post is shared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
}
