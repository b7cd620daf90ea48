use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use finder_core::{RequestId, Ticket};
use finder_logging::{finder_debug, finder_warn};

use crate::client::{ReqwestSearchClient, SearchClient, SearchSettings};
use crate::scheduler::DebounceScheduler;
use crate::{EngineEvent, SearchError};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Schedule { ticket: Ticket, delay: Duration },
    Cancel { ticket: Ticket },
    Fetch { request_id: RequestId, query: String },
}

/// Runs timers and searches on a background tokio runtime.
///
/// Commands are applied in order on one thread; results are reported to the
/// [`EventSink`] from runtime worker threads as they complete.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn SearchClient>, sink: Arc<dyn EventSink>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("finder-engine".to_string())
            .spawn(move || {
                let mut scheduler = DebounceScheduler::new(runtime.handle().clone());
                while let Ok(command) = cmd_rx.recv() {
                    handle_command(&runtime, &mut scheduler, &client, &sink, command);
                }
                finder_debug!("Engine command channel closed");
                drop(scheduler);
                runtime.shutdown_background();
            })?;

        Ok(Self { cmd_tx })
    }

    /// Engine backed by the HTTP client described by `settings`.
    pub fn with_settings(
        settings: SearchSettings,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, SearchError> {
        let client = Arc::new(ReqwestSearchClient::new(settings)?);
        Self::new(client, sink).map_err(|err| {
            SearchError::new(crate::FailureKind::Network, format!("engine runtime: {err}"))
        })
    }

    pub fn schedule_search(&self, ticket: Ticket, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Schedule { ticket, delay });
    }

    pub fn cancel_search(&self, ticket: Ticket) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { ticket });
    }

    pub fn fetch(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            query: query.into(),
        });
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    scheduler: &mut DebounceScheduler,
    client: &Arc<dyn SearchClient>,
    sink: &Arc<dyn EventSink>,
    command: EngineCommand,
) {
    match command {
        EngineCommand::Schedule { ticket, delay } => {
            let sink = sink.clone();
            scheduler.schedule(ticket, delay, move |ticket| {
                sink.emit(EngineEvent::DebounceElapsed { ticket });
            });
        }
        EngineCommand::Cancel { ticket } => {
            if !scheduler.cancel(ticket) {
                finder_debug!("Debounce ticket {} already fired or replaced", ticket);
            }
        }
        EngineCommand::Fetch { request_id, query } => {
            let client = client.clone();
            let sink = sink.clone();
            runtime.spawn(async move {
                let result = client.search(&query).await;
                if let Err(err) = &result {
                    finder_warn!("Search request {} for {:?} failed: {}", request_id, query, err);
                }
                sink.emit(EngineEvent::SearchCompleted { request_id, result });
            });
        }
    }
}
