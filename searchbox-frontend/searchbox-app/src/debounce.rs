use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard,
    },
    time::Duration,
};

use futures::future::{abortable, AbortHandle, LocalBoxFuture};

/// Single slot debounce. Arming hands out a ticket and invalidates every ticket handed out before it.
/// At most one timer is pending: re-arming or cancelling aborts the sleep of the previous ticket.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
    pending: Mutex<Option<AbortHandle>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
    pub query: String,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn arm(&self, query: impl Into<String>) -> DebounceTicket {
        self.abort_pending();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        DebounceTicket {
            generation,
            query: query.into(),
        }
    }

    pub fn cancel(&self) {
        self.abort_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: &DebounceTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Runs `sleep` as the single pending timer. Returns true when it ran out and `ticket` is
    /// still the newest one, false when it was aborted or superseded.
    pub async fn wait(&self, ticket: &DebounceTicket, sleep: LocalBoxFuture<'static, ()>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let (sleep, handle) = abortable(sleep);
        if let Some(previous) = self.slot().replace(handle) {
            previous.abort();
        }
        let elapsed = sleep.await.is_ok();
        elapsed && self.is_current(ticket)
    }

    fn abort_pending(&self) {
        if let Some(handle) = self.slot().take() {
            handle.abort();
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
