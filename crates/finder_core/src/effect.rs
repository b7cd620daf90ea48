use std::time::Duration;

use crate::Theme;

/// Identifies one armed debounce slot.
pub type Ticket = u64;

/// Monotonic id stamped on every issued search request.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the debounce slot; report `Msg::DebounceElapsed` after `delay`.
    ScheduleSearch {
        ticket: Ticket,
        query: String,
        delay: Duration,
    },
    /// Disarm a previously scheduled slot that has not fired yet.
    CancelScheduledSearch { ticket: Ticket },
    /// Issue one GET against the search endpoint.
    FetchResults { request_id: RequestId, query: String },
    /// Full-page redirect.
    Navigate { path: String },
    PersistTheme(Theme),
}

impl Effect {
    /// True for effects the controller performs through its UI binding.
    pub fn is_ui(&self) -> bool {
        matches!(self, Effect::Navigate { .. })
    }
}
