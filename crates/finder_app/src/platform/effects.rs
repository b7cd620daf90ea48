use std::sync::mpsc;
use std::sync::Arc;

use finder_core::{Effect, Msg};
use finder_engine::{EngineEvent, EngineHandle, EventSink, SearchSettings};
use finder_logging::{finder_debug, finder_info};

use super::app::AppEvent;
use super::persistence::ThemeStore;

/// Executes controller effects against the engine and the preference store.
pub struct EffectRunner {
    engine: EngineHandle,
    prefs: ThemeStore,
}

impl EffectRunner {
    pub fn new(
        settings: SearchSettings,
        event_tx: mpsc::Sender<AppEvent>,
        prefs: ThemeStore,
    ) -> anyhow::Result<Self> {
        let sink = Arc::new(MsgSink { tx: event_tx });
        let engine = EngineHandle::with_settings(settings, sink)?;
        Ok(Self { engine, prefs })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleSearch {
                    ticket,
                    query,
                    delay,
                } => {
                    finder_debug!("Schedule ticket={} query={:?} delay={:?}", ticket, query, delay);
                    self.engine.schedule_search(ticket, delay);
                }
                Effect::CancelScheduledSearch { ticket } => {
                    self.engine.cancel_search(ticket);
                }
                Effect::FetchResults { request_id, query } => {
                    finder_info!("Search request_id={} query={:?}", request_id, query);
                    self.engine.fetch(request_id, query);
                }
                Effect::PersistTheme(theme) => self.prefs.save(theme),
                Effect::Navigate { path } => {
                    // Navigation is performed by the controller's binding.
                    finder_debug!("Ignoring navigation effect for {}", path);
                }
            }
        }
    }
}

struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Engine(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DebounceElapsed { ticket } => Msg::DebounceElapsed { ticket },
        EngineEvent::SearchCompleted { request_id, result } => match result {
            Ok(results) => Msg::ResultsLoaded {
                request_id,
                results,
            },
            Err(err) => Msg::ResultsFailed {
                request_id,
                reason: err.to_string(),
            },
        },
    }
}
