//! Deferred mismatch reveal, keyed to a session.
//!
//! A mismatch leaves both cards face-up for a fixed delay. The engine records
//! a `PendingReveal` against its logical clock and hands the host a
//! `RevealTicket` naming the session and the two cards. Whichever fires
//! first (the clock via `advance`, or the host via `resolve_reveal`) applies
//! the reveal; anything carrying an older session is ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one deal. Bumped on every `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Handle for a scheduled mismatch reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealTicket {
    session: SessionId,
    cards: [usize; 2],
    delay: Duration,
}

impl RevealTicket {
    pub(crate) fn new(session: SessionId, cards: [usize; 2], delay: Duration) -> Self {
        Self {
            session,
            cards,
            delay,
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Deck indices of the two mismatched cards.
    #[must_use]
    pub fn cards(&self) -> [usize; 2] {
        self.cards
    }

    /// How long the host should wait before resolving the ticket.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// The reveal the engine is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingReveal {
    pub ticket: RevealTicket,
    pub due_at: Duration,
}

impl PendingReveal {
    pub fn schedule(ticket: RevealTicket, now: Duration) -> Self {
        Self {
            ticket,
            due_at: now.saturating_add(ticket.delay),
        }
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.due_at
    }
}
