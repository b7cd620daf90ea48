use std::time::Duration;

use finder_core::Ticket;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

struct Slot {
    ticket: Ticket,
    token: CancellationToken,
}

/// Single-slot timer: arming a new search always disarms the previous one.
pub struct DebounceScheduler {
    runtime: Handle,
    slot: Option<Slot>,
}

impl DebounceScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            slot: None,
        }
    }

    /// Runs `on_fire(ticket)` after `delay` unless cancelled or replaced first.
    pub fn schedule<F>(&mut self, ticket: Ticket, delay: Duration, on_fire: F)
    where
        F: FnOnce(Ticket) + Send + 'static,
    {
        self.cancel_current();
        let token = CancellationToken::new();
        let armed = token.clone();
        self.runtime.spawn(async move {
            if armed
                .run_until_cancelled(tokio::time::sleep(delay))
                .await
                .is_some()
            {
                on_fire(ticket);
            }
        });
        self.slot = Some(Slot { ticket, token });
    }

    /// Cancels the slot only if it still holds `ticket`.
    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        match &self.slot {
            Some(slot) if slot.ticket == ticket => {
                self.cancel_current();
                true
            }
            _ => false,
        }
    }

    pub fn armed_ticket(&self) -> Option<Ticket> {
        self.slot.as_ref().map(|slot| slot.ticket)
    }

    fn cancel_current(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot.token.cancel();
        }
    }
}

impl Drop for DebounceScheduler {
    fn drop(&mut self) {
        self.cancel_current();
    }
}
