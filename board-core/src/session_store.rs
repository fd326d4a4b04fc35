use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use board_types::Session;

/// Proof that a session mutation was started. Issued before the request is
/// sent; the commit only lands if no later ticket has been issued since.
#[derive(Debug)]
pub struct WriteTicket(u64);

/// The single shared session value. Every controller reads through this
/// store and mutates it only via the ticketed commit path, so a superseded
/// in-flight request (say, a second login click before the first resolves)
/// has its result discarded instead of clobbering the newer state.
pub struct SessionStore {
    tx: watch::Sender<Option<Session>>,
    issued: AtomicU64,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx,
            issued: AtomicU64::new(0),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Observers (the nav binder, mainly) watch for replacements here.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }

    /// Starts a session-mutating operation. Call this before issuing the
    /// network request, not after it resolves.
    pub fn begin_mutation(&self) -> WriteTicket {
        WriteTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Replaces the session wholesale if `ticket` is still the latest
    /// issued. Returns `false` when the result arrived stale, in which case
    /// the store is left untouched.
    pub fn commit(&self, ticket: WriteTicket, value: Option<Session>) -> bool {
        if ticket.0 != self.issued.load(Ordering::SeqCst) {
            tracing::debug!(
                "discarding stale session mutation (ticket {} superseded)",
                ticket.0
            );
            return false;
        }
        self.tx.send_replace(value);
        true
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
