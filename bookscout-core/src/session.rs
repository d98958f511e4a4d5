//! Search session state with request-generation tagging
//!
//! A session holds the single current [`SearchOutcome`]. Every search takes a [`Ticket`]
//! when it starts; its outcome is applied only if no later search has started since, so
//! the screen always reflects the most recently issued query even when responses arrive
//! out of order.

use crate::catalog::Catalog;
use crate::types::{SearchMode, SearchOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;

/// Generation number handed out when a search starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Current outcome plus the generation that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Latest issued generation (0 before the first search)
    pub generation: u64,

    pub outcome: SearchOutcome,

    /// When the outcome last changed
    pub updated_at: DateTime<Utc>,
}

impl SessionSnapshot {
    fn initial() -> Self {
        Self {
            generation: 0,
            outcome: SearchOutcome::Idle,
            updated_at: Utc::now(),
        }
    }
}

/// Shared search state for one viewer
pub struct SearchSession {
    state: watch::Sender<SessionSnapshot>,
}

impl SearchSession {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionSnapshot::initial());
        Self { state }
    }

    /// Start a search: move to `Loading` and take the next ticket
    pub fn begin(&self) -> Ticket {
        let mut ticket = Ticket(0);
        self.state.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.outcome = SearchOutcome::Loading;
            snapshot.updated_at = Utc::now();
            ticket = Ticket(snapshot.generation);
        });
        ticket
    }

    /// Finish a search; returns `false` and drops the outcome if a newer search has begun
    pub fn complete(&self, ticket: Ticket, outcome: SearchOutcome) -> bool {
        let applied = self.state.send_if_modified(|snapshot| {
            if snapshot.generation != ticket.0 {
                return false;
            }
            snapshot.outcome = outcome;
            snapshot.updated_at = Utc::now();
            true
        });

        if !applied {
            tracing::debug!(
                "Discarding stale outcome for generation {}",
                ticket.generation()
            );
        }
        applied
    }

    /// Run one search through this session
    ///
    /// Returns the ticket used and whether its outcome was applied.
    pub async fn run(&self, catalog: &Catalog, text: &str, mode: SearchMode) -> (Ticket, bool) {
        let ticket = self.begin();
        let outcome = catalog.search(text, mode).await;
        let applied = self.complete(ticket, outcome);
        (ticket, applied)
    }

    pub fn current(&self) -> SearchOutcome {
        self.state.borrow().outcome.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Observe every applied change
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
