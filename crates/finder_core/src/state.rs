use crate::render::display_results;
use crate::view_model::{ResultsView, SearchViewModel};
use crate::{RequestId, ResponseOrder, SearchConfig, SearchResult, Theme, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSearch {
    ticket: Ticket,
    query: String,
}

/// Everything the search controller owns between callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    config: SearchConfig,
    pending: Option<PendingSearch>,
    next_ticket: Ticket,
    next_request_id: RequestId,
    /// Request whose response is still awaited, under `ResponseOrder::LatestOnly`.
    live_request: Option<RequestId>,
    current_results: Vec<SearchResult>,
    results: ResultsView,
    results_visible: bool,
    loader_visible: bool,
    theme: Theme,
    dirty: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SearchConfig::default(), Theme::default())
    }
}

impl SearchState {
    pub fn new(config: SearchConfig, theme: Theme) -> Self {
        Self {
            config,
            pending: None,
            next_ticket: 1,
            next_request_id: 1,
            live_request: None,
            current_results: Vec::new(),
            results: ResultsView::Empty,
            results_visible: false,
            loader_visible: false,
            theme,
            dirty: false,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn current_results(&self) -> &[SearchResult] {
        &self.current_results
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|pending| pending.ticket)
    }

    pub fn view(&self) -> SearchViewModel {
        SearchViewModel {
            results: self.results.clone(),
            results_visible: self.results_visible,
            loader_visible: self.loader_visible,
            result_count: self.current_results.len(),
            theme: self.theme,
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn take_pending(&mut self) -> Option<Ticket> {
        self.pending.take().map(|pending| pending.ticket)
    }

    /// Installs a new pending search and returns its ticket.
    pub(crate) fn arm_pending(&mut self, query: String) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending = Some(PendingSearch { ticket, query });
        ticket
    }

    /// Consumes the pending search if `ticket` is still the armed one.
    pub(crate) fn fire_pending(&mut self, ticket: Ticket) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending.take().map(|pending| pending.query)
            }
            _ => None,
        }
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.live_request = Some(request_id);
        self.loader_visible = true;
        self.dirty = true;
        request_id
    }

    pub(crate) fn accepts_response(&self, request_id: RequestId) -> bool {
        match self.config.response_order {
            ResponseOrder::LatestOnly => self.live_request == Some(request_id),
            ResponseOrder::ArrivalOrder => true,
        }
    }

    fn finish_request(&mut self, request_id: RequestId) {
        if self.live_request == Some(request_id) {
            self.live_request = None;
        }
        self.loader_visible = false;
    }

    pub(crate) fn apply_results(&mut self, request_id: RequestId, results: Vec<SearchResult>) {
        self.finish_request(request_id);
        self.results = display_results(&results, self.config.max_visible_rows);
        self.current_results = results;
        self.results_visible = true;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, request_id: RequestId) {
        self.finish_request(request_id);
        self.current_results.clear();
        self.results = ResultsView::Error;
        self.results_visible = true;
        self.dirty = true;
    }

    /// Empties and hides the results container.
    pub(crate) fn clear_results(&mut self) {
        self.current_results.clear();
        self.results = ResultsView::Empty;
        self.results_visible = false;
        if self.config.response_order == ResponseOrder::LatestOnly {
            // Outstanding responses must not repopulate a cleared container.
            self.live_request = None;
            self.loader_visible = false;
        }
        self.dirty = true;
    }

    /// Index into the stored sequence, limited to rows actually shown.
    pub(crate) fn visible_result(&self, index: usize) -> Option<&SearchResult> {
        match &self.results {
            ResultsView::Rows { rows, .. } if index < rows.len() => {
                self.current_results.get(index)
            }
            _ => None,
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.dirty = true;
        }
    }
}
