//! Chat history entry model

use serde::{Deserialize, Serialize};

/// A saved chat as listed in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryItem {
    pub id: String,
    /// Slug used in the chat URL
    pub url_id: String,
    pub description: String,
    /// Last save time (Unix ms), absent for never-saved chats
    #[serde(default)]
    pub last_saved: Option<i64>,
}
