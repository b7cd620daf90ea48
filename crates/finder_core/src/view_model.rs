use crate::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub index: usize,
    pub esoui_id: u64,
    pub title: String,
    pub author: String,
    pub icon: &'static str,
}

/// Contents of the results container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    Empty,
    NoResults,
    Rows {
        rows: Vec<ResultRowView>,
        /// Results beyond the visible cutoff.
        hidden: usize,
    },
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchViewModel {
    pub results: ResultsView,
    pub results_visible: bool,
    pub loader_visible: bool,
    /// Size of the stored result sequence, not just the visible rows.
    pub result_count: usize,
    pub theme: Theme,
    pub dirty: bool,
}
