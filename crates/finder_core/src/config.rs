use std::time::Duration;

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);
pub const MIN_QUERY_CHARS: usize = 3;
pub const MAX_VISIBLE_ROWS: usize = 8;

/// How responses are applied when several requests are outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrder {
    /// Only the most recently issued request may update the results.
    #[default]
    LatestOnly,
    /// Every response is applied as it arrives, even if a newer request exists.
    ArrivalOrder,
}

impl ResponseOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "latest" | "latest-only" | "latest_only" => Some(Self::LatestOnly),
            "arrival" | "arrival-order" | "arrival_order" => Some(Self::ArrivalOrder),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub quiet_period: Duration,
    /// Queries shorter than this (in characters, after trimming) never hit the API.
    pub min_query_chars: usize,
    pub max_visible_rows: usize,
    pub response_order: ResponseOrder,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            quiet_period: DEBOUNCE_DELAY,
            min_query_chars: MIN_QUERY_CHARS,
            max_visible_rows: MAX_VISIBLE_ROWS,
            response_order: ResponseOrder::default(),
        }
    }
}
