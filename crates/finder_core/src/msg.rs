use crate::{RequestId, SearchResult, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The search input's raw text changed.
    InputChanged(String),
    /// The quiet period for `ticket` elapsed without being cancelled.
    DebounceElapsed { ticket: Ticket },
    /// The search endpoint answered with a result sequence.
    ResultsLoaded {
        request_id: RequestId,
        results: Vec<SearchResult>,
    },
    /// The request failed (HTTP status, network or decode error).
    ResultsFailed { request_id: RequestId, reason: String },
    /// A key was pressed while the search input had focus.
    KeyPressed(Key),
    /// A rendered result row was clicked.
    RowActivated { index: usize },
    /// The theme checkbox changed; checked means light.
    ThemeToggled { checked: bool },
    NoOp,
}
