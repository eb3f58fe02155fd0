//! Sidebar entries for saved chats.

use serde::Serialize;

use crate::format::format_distance;
use crate::models::ChatHistoryItem;

/// Display state for one history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItemView {
    pub description: String,
    pub href: String,
    /// "5 minutes ago", absent for never-saved chats
    pub last_saved_label: Option<String>,
    /// Hover text, "Last saved 5 minutes ago"
    pub title: Option<String>,
}

impl HistoryItemView {
    pub fn new(item: &ChatHistoryItem, now_ms: i64) -> Self {
        let last_saved_label = item
            .last_saved
            .map(|last_saved| format_distance(last_saved, now_ms));

        Self {
            description: item.description.clone(),
            href: format!("/chat/{}", item.url_id),
            title: last_saved_label
                .as_ref()
                .map(|label| format!("Last saved {label}")),
            last_saved_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const NOW: i64 = 1_709_993_107_000;

    fn item(last_saved: Option<i64>) -> ChatHistoryItem {
        ChatHistoryItem {
            id: "42".to_string(),
            url_id: "deploy-notes".to_string(),
            description: "Deploy notes".to_string(),
            last_saved,
        }
    }

    #[test]
    fn saved_item_has_label_and_title() {
        assert_eq!(
            HistoryItemView::new(&item(Some(NOW - 5 * 60_000)), NOW),
            HistoryItemView {
                description: "Deploy notes".to_string(),
                href: "/chat/deploy-notes".to_string(),
                last_saved_label: Some("5 minutes ago".to_string()),
                title: Some("Last saved 5 minutes ago".to_string()),
            }
        );
    }

    #[test]
    fn unsaved_item_has_no_label() {
        let view = HistoryItemView::new(&item(None), NOW);
        assert_eq!(view.last_saved_label, None);
        assert_eq!(view.title, None);
    }

    #[test]
    fn item_deserializes_from_camel_case() {
        let parsed: ChatHistoryItem = serde_json::from_str(
            r#"{"id":"42","urlId":"deploy-notes","description":"Deploy notes"}"#,
        )
        .unwrap();
        assert_eq!(parsed, item(None));
    }
}
