//! Attachment entity model.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::comment::string_or_number;

/// A file uploaded to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub url: String,
    /// Markdown snippet that embeds the attachment.
    #[serde(default)]
    pub markdown: String,
    pub created_at: DateTime<FixedOffset>,
}

impl Attachment {
    /// Format the file size in human-readable units (B, KB, MB, GB).
    pub fn human_file_size(&self) -> String {
        let bytes = self.size as f64;
        if bytes < 1024.0 {
            format!("{} B", self.size)
        } else if bytes < 1024.0 * 1024.0 {
            format!("{:.1} KB", bytes / 1024.0)
        } else if bytes < 1024.0 * 1024.0 * 1024.0 {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        } else {
            format!("{:.1} GB", bytes / (1024.0 * 1024.0 * 1024.0))
        }
    }
}
