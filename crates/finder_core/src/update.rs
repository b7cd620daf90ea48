use finder_logging::{finder_debug, finder_trace};

use crate::{Effect, Key, Msg, SearchState, Theme};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(raw) => {
            let query = raw.trim();
            let mut effects = Vec::with_capacity(2);
            if let Some(ticket) = state.take_pending() {
                effects.push(Effect::CancelScheduledSearch { ticket });
            }
            if query.chars().count() < state.config().min_query_chars {
                state.clear_results();
            } else {
                let query = query.to_owned();
                let ticket = state.arm_pending(query.clone());
                effects.push(Effect::ScheduleSearch {
                    ticket,
                    query,
                    delay: state.config().quiet_period,
                });
            }
            effects
        }
        Msg::DebounceElapsed { ticket } => match state.fire_pending(ticket) {
            Some(query) => {
                let request_id = state.begin_request();
                vec![Effect::FetchResults { request_id, query }]
            }
            None => {
                finder_trace!("Ignoring stale debounce ticket {}", ticket);
                Vec::new()
            }
        },
        Msg::ResultsLoaded {
            request_id,
            results,
        } => {
            if state.accepts_response(request_id) {
                state.apply_results(request_id, results);
            } else {
                finder_debug!("Discarding superseded response for request {}", request_id);
            }
            Vec::new()
        }
        Msg::ResultsFailed { request_id, reason } => {
            if state.accepts_response(request_id) {
                finder_debug!("Request {} failed: {}", request_id, reason);
                state.apply_failure(request_id);
            } else {
                finder_debug!("Discarding superseded failure for request {}", request_id);
            }
            Vec::new()
        }
        Msg::KeyPressed(Key::Enter) => match state.current_results() {
            [only] => vec![Effect::Navigate { path: only.path() }],
            _ => Vec::new(),
        },
        Msg::RowActivated { index } => match state.visible_result(index) {
            Some(result) => vec![Effect::Navigate {
                path: result.path(),
            }],
            None => Vec::new(),
        },
        Msg::ThemeToggled { checked } => {
            let theme = Theme::from_toggle(checked);
            state.set_theme(theme);
            vec![Effect::PersistTheme(theme)]
        }
        Msg::KeyPressed(Key::Other) | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
