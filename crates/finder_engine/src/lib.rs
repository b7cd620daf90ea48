//! Finder engine: HTTP search client, debounce timers and effect execution.
mod client;
mod engine;
mod persist;
mod scheduler;
mod types;

pub use client::{ReqwestSearchClient, SearchClient, SearchSettings};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use persist::{AtomicFile, PersistError};
pub use scheduler::DebounceScheduler;
pub use types::{EngineEvent, FailureKind, SearchError};
