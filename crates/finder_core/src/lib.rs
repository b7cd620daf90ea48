//! Finder core: pure search state machine, view model and result rendering.
mod binding;
mod config;
mod controller;
mod effect;
mod msg;
mod render;
mod result;
mod state;
mod theme;
mod update;
mod view_model;

pub use binding::{check_required_elements, Document, InitError, PageElement, UiBinding};
pub use config::{
    ResponseOrder, SearchConfig, DEBOUNCE_DELAY, MAX_VISIBLE_ROWS, MIN_QUERY_CHARS,
};
pub use controller::SearchController;
pub use effect::{Effect, RequestId, Ticket};
pub use msg::{Key, Msg};
pub use render::{
    display_results, hidden_results_label, render_results, results_html, ERROR_HTML,
    NO_RESULTS_HTML,
};
pub use result::{addon_path, SearchResult, ADDON_ICON};
pub use state::SearchState;
pub use theme::{resolve_initial_theme, Theme};
pub use update::update;
pub use view_model::{ResultRowView, ResultsView, SearchViewModel};
