use std::sync::Once;

use finder_core::{
    update, Effect, Key, Msg, ResponseOrder, ResultsView, SearchConfig, SearchResult,
    SearchState, Theme, DEBOUNCE_DELAY,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

fn addons(count: u64) -> Vec<SearchResult> {
    (1..=count)
        .map(|id| SearchResult::new(id, format!("Addon {id}"), "Author"))
        .collect()
}

fn type_text(state: SearchState, text: &str) -> (SearchState, Vec<Effect>) {
    update(state, Msg::InputChanged(text.to_string()))
}

/// Types `text` and lets the quiet period elapse; returns the fetch request id.
fn search(state: SearchState, text: &str) -> (SearchState, u64) {
    let (state, _) = type_text(state, text);
    let ticket = state.pending_ticket().expect("search scheduled");
    let (state, effects) = update(state, Msg::DebounceElapsed { ticket });
    let request_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchResults { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("fetch effect");
    (state, request_id)
}

fn load(state: SearchState, text: &str, results: Vec<SearchResult>) -> SearchState {
    let (state, request_id) = search(state, text);
    let (state, _) = update(
        state,
        Msg::ResultsLoaded {
            request_id,
            results,
        },
    );
    state
}

#[test]
fn short_queries_never_schedule_a_search() {
    init_logging();
    for text in ["a", "ab", "  ab  ", " x "] {
        let (state, effects) = type_text(SearchState::default(), text);
        assert!(effects.is_empty(), "unexpected effects for {text:?}");
        assert_eq!(state.pending_ticket(), None);
        let view = state.view();
        assert_eq!(view.results, ResultsView::Empty);
        assert!(!view.results_visible);
    }
}

#[test]
fn query_length_counts_characters_not_bytes() {
    init_logging();
    let (_state, effects) = type_text(SearchState::default(), "éé");
    assert!(effects.is_empty());

    let (_state, effects) = type_text(SearchState::default(), "ééé");
    assert_eq!(effects.len(), 1);
}

#[test]
fn three_characters_schedule_a_debounced_search() {
    init_logging();
    let (state, effects) = type_text(SearchState::default(), "  abc ");

    assert_eq!(
        effects,
        vec![Effect::ScheduleSearch {
            ticket: 1,
            query: "abc".to_string(),
            delay: DEBOUNCE_DELAY,
        }]
    );
    assert_eq!(state.pending_ticket(), Some(1));
}

#[test]
fn rapid_typing_coalesces_into_one_request() {
    init_logging();
    let state = SearchState::default();
    let (state, _) = type_text(state, "a");
    let (state, _) = type_text(state, "ab");
    let (state, first) = type_text(state, "abc");
    let (state, second) = type_text(state, "abcd");

    let first_ticket = match first.as_slice() {
        [Effect::ScheduleSearch { ticket, .. }] => *ticket,
        other => panic!("unexpected effects {other:?}"),
    };
    assert_eq!(
        second,
        vec![
            Effect::CancelScheduledSearch {
                ticket: first_ticket
            },
            Effect::ScheduleSearch {
                ticket: first_ticket + 1,
                query: "abcd".to_string(),
                delay: DEBOUNCE_DELAY,
            },
        ]
    );

    // A timer that slipped through cancellation is ignored.
    let (state, effects) = update(
        state,
        Msg::DebounceElapsed {
            ticket: first_ticket,
        },
    );
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::DebounceElapsed {
            ticket: first_ticket + 1,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::FetchResults {
            request_id: 1,
            query: "abcd".to_string(),
        }]
    );
    assert!(state.view().loader_visible);
    assert_eq!(state.pending_ticket(), None);
}

#[test]
fn debounce_fires_only_once_per_ticket() {
    init_logging();
    let (state, _request_id) = search(SearchState::default(), "abc");
    let (_state, effects) = update(state, Msg::DebounceElapsed { ticket: 1 });
    assert!(effects.is_empty());
}

#[test]
fn clearing_input_hides_results_and_cancels_pending_search() {
    init_logging();
    let state = load(SearchState::default(), "abc", addons(2));
    let (state, effects) = type_text(state, "abcd");
    let ticket = state.pending_ticket().unwrap();

    let (mut state, effects_after_clear) = type_text(state, "   ");
    assert_eq!(effects.len(), 1);
    assert_eq!(
        effects_after_clear,
        vec![Effect::CancelScheduledSearch { ticket }]
    );
    let view = state.view();
    assert_eq!(view.results, ResultsView::Empty);
    assert!(!view.results_visible);
    assert_eq!(view.result_count, 0);
    assert!(state.consume_dirty());
}

#[test]
fn successful_response_stores_and_renders_results() {
    init_logging();
    let (state, request_id) = search(SearchState::default(), "map");
    let (state, effects) = update(
        state,
        Msg::ResultsLoaded {
            request_id,
            results: addons(12),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loader_visible);
    assert!(view.results_visible);
    assert_eq!(view.result_count, 12);
    match view.results {
        ResultsView::Rows { rows, hidden } => {
            assert_eq!(rows.len(), 8);
            assert_eq!(hidden, 4);
            assert_eq!(rows[0].esoui_id, 1);
            assert_eq!(rows[7].esoui_id, 8);
        }
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn empty_response_shows_no_results() {
    init_logging();
    let state = load(SearchState::default(), "zzz", Vec::new());
    let view = state.view();
    assert_eq!(view.results, ResultsView::NoResults);
    assert!(view.results_visible);
}

#[test]
fn failed_request_shows_error_and_hides_loader() {
    init_logging();
    let state = load(SearchState::default(), "abc", addons(1));
    let (state, request_id) = search(state, "abcd");
    let (state, effects) = update(
        state,
        Msg::ResultsFailed {
            request_id,
            reason: "http status 500".to_string(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.results, ResultsView::Error);
    assert!(view.results_visible);
    assert!(!view.loader_visible);

    // The failed query leaves nothing for Enter to act on.
    let (_state, effects) = update(state, Msg::KeyPressed(Key::Enter));
    assert!(effects.is_empty());
}

#[test]
fn enter_navigates_only_with_exactly_one_result() {
    init_logging();
    let single = load(
        SearchState::default(),
        "lam",
        vec![SearchResult::new(1245, "LibAddonMenu-2.0", "Baertram")],
    );
    let (_single, effects) = update(single, Msg::KeyPressed(Key::Enter));
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            path: "/addon/1245".to_string()
        }]
    );

    let (_none, effects) = update(SearchState::default(), Msg::KeyPressed(Key::Enter));
    assert!(effects.is_empty());

    let many = load(SearchState::default(), "lib", addons(2));
    let (_many, effects) = update(many, Msg::KeyPressed(Key::Enter));
    assert!(effects.is_empty());
}

#[test]
fn enter_counts_hidden_results() {
    init_logging();
    let state = load(SearchState::default(), "lib", addons(9));
    let (_state, effects) = update(state, Msg::KeyPressed(Key::Enter));
    assert!(effects.is_empty());
}

#[test]
fn row_activation_navigates_to_visible_rows_only() {
    init_logging();
    let state = load(SearchState::default(), "lib", addons(10));

    let (state, effects) = update(state, Msg::RowActivated { index: 3 });
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            path: "/addon/4".to_string()
        }]
    );

    let (_state, effects) = update(state, Msg::RowActivated { index: 8 });
    assert!(effects.is_empty());
}

#[test]
fn latest_only_discards_superseded_responses() {
    init_logging();
    let (state, first) = search(SearchState::default(), "abc");
    let (state, second) = search(state, "abcd");
    assert!(second > first);

    let (state, _) = update(
        state,
        Msg::ResultsLoaded {
            request_id: second,
            results: addons(1),
        },
    );
    let (state, _) = update(
        state,
        Msg::ResultsLoaded {
            request_id: first,
            results: addons(5),
        },
    );

    assert_eq!(state.view().result_count, 1);
    assert_eq!(state.current_results()[0].esoui_id, 1);
}

#[test]
fn latest_only_keeps_loader_until_latest_response() {
    init_logging();
    let (state, first) = search(SearchState::default(), "abc");
    let (state, second) = search(state, "abcd");

    let (state, _) = update(
        state,
        Msg::ResultsFailed {
            request_id: first,
            reason: "network error".to_string(),
        },
    );
    assert!(state.view().loader_visible);
    assert_eq!(state.view().results, ResultsView::Empty);

    let (state, _) = update(
        state,
        Msg::ResultsLoaded {
            request_id: second,
            results: addons(2),
        },
    );
    assert!(!state.view().loader_visible);
}

#[test]
fn latest_only_ignores_responses_after_input_cleared() {
    init_logging();
    let (state, request_id) = search(SearchState::default(), "abc");
    let (state, _) = type_text(state, "");
    assert!(!state.view().loader_visible);

    let (state, _) = update(
        state,
        Msg::ResultsLoaded {
            request_id,
            results: addons(3),
        },
    );
    let view = state.view();
    assert_eq!(view.results, ResultsView::Empty);
    assert!(!view.results_visible);
}

#[test]
fn arrival_order_applies_every_response() {
    init_logging();
    let config = SearchConfig {
        response_order: ResponseOrder::ArrivalOrder,
        ..SearchConfig::default()
    };
    let state = SearchState::new(config, Theme::Dark);
    let (state, first) = search(state, "abc");
    let (state, second) = search(state, "abcd");

    let (state, _) = update(
        state,
        Msg::ResultsLoaded {
            request_id: second,
            results: addons(1),
        },
    );
    let (state, _) = update(
        state,
        Msg::ResultsLoaded {
            request_id: first,
            results: addons(5),
        },
    );

    // The slower, older response wins.
    assert_eq!(state.view().result_count, 5);
}

#[test]
fn custom_config_changes_thresholds() {
    init_logging();
    let config = SearchConfig {
        min_query_chars: 1,
        max_visible_rows: 2,
        ..SearchConfig::default()
    };
    let state = SearchState::new(config, Theme::Dark);
    let state = load(state, "a", addons(3));
    match state.view().results {
        ResultsView::Rows { rows, hidden } => {
            assert_eq!(rows.len(), 2);
            assert_eq!(hidden, 1);
        }
        other => panic!("unexpected view {other:?}"),
    }
}

#[test]
fn theme_toggle_switches_and_persists() {
    init_logging();
    let (mut state, effects) = update(
        SearchState::default(),
        Msg::ThemeToggled { checked: true },
    );
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Light)]);
    assert_eq!(state.theme(), Theme::Light);
    assert!(state.consume_dirty());

    let (state, effects) = update(state, Msg::ThemeToggled { checked: false });
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Dark)]);
    assert_eq!(state.view().theme, Theme::Dark);
}
