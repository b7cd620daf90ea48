use serde::{Deserialize, Serialize};

/// Icon shown next to every addon row.
pub const ADDON_ICON: &str = "fas fa-puzzle-piece";

/// One match returned by `/api/addons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub esoui_id: u64,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads_per_last_30_days: Option<u64>,
}

impl SearchResult {
    pub fn new(esoui_id: u64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            esoui_id,
            title: title.into(),
            author: author.into(),
            category: None,
            downloads_per_last_30_days: None,
        }
    }

    pub fn path(&self) -> String {
        addon_path(self.esoui_id)
    }
}

/// Page path of an addon's statistics view.
pub fn addon_path(esoui_id: u64) -> String {
    format!("/addon/{esoui_id}")
}
