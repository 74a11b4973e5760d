//! The match engine: owns one board and runs the selection state machine.
//!
//! ## Turn Flow
//!
//! 1. A pointer select flips the first selectable card under the point.
//! 2. The second flip evaluates the pair:
//!    - equal identities: both cards are matched at once and input stays open;
//!    - different identities: input locks and a reveal is scheduled.
//! 3. The reveal turns both cards back down and reopens input.
//!
//! ## Sessions
//!
//! Every `start` opens a new session and returns a `DealRequest` the host
//! fulfils asynchronously. Deck installs and reveal tickets carry their
//! session; anything from an abandoned session is dropped, so restarting
//! mid-game never lets an old deal or an old reveal touch the new board.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::render::{CardView, RenderModel, VictoryBanner};
use super::reveal::{PendingReveal, RevealTicket, SessionId};
use super::selection::SelectionBuffer;
use super::state::{Controls, GameState};
use crate::artwork::ArtworkProvider;
use crate::cards::{Card, CardIdentity, Deck};
use crate::core::config::MatchConfig;
use crate::core::error::MatchError;
use crate::core::geometry::Point;
use crate::core::rng::GameRng;
use crate::deal::DeckBuilder;

/// Work order for dealing the deck of one session.
///
/// Carries the sampled identities and its own RNG stream, so fulfilling it
/// never borrows the engine.
#[derive(Clone, Debug)]
pub struct DealRequest {
    session: SessionId,
    identities: Vec<CardIdentity>,
    rng: GameRng,
}

impl DealRequest {
    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Identities to resolve, one per pair.
    #[must_use]
    pub fn identities(&self) -> &[CardIdentity] {
        &self.identities
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.identities.len()
    }

    /// Resolve artwork and build the deck for this request.
    pub async fn deal<P>(mut self, builder: &DeckBuilder, provider: &P) -> Result<Deck, MatchError>
    where
        P: ArtworkProvider + ?Sized,
    {
        builder.deal(&self.identities, provider, &mut self.rng).await
    }
}

/// What happened to a delivered deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckInstall {
    /// The deck is on the board.
    Installed { cards: usize },
    /// The deck belonged to an abandoned session and was discarded.
    Stale,
}

/// Result of a pointer select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed: not playing, input locked, or no selectable card there.
    Ignored,
    /// A card turned face-up and waits for its partner.
    Revealed { card: usize },
    /// The two picks matched.
    Matched { cards: [usize; 2], won: bool },
    /// The two picks differ; they turn back down when the ticket resolves.
    Mismatched(RevealTicket),
}

/// Owns the board of one game and applies player input to it.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    builder: DeckBuilder,
    rng: GameRng,
    state: GameState,
    session: SessionId,
    awaiting_deal: bool,
    deck: Deck,
    pair_count: usize,
    selection: SelectionBuffer,
    accepting_input: bool,
    matched_pairs: usize,
    pending_reveal: Option<PendingReveal>,
    clock: Duration,
}

impl MatchEngine {
    /// Create an engine with an empty board.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            builder: DeckBuilder::from_config(&config),
            config,
            rng: GameRng::new(seed),
            state: GameState::NotStarted,
            session: SessionId::default(),
            awaiting_deal: false,
            deck: Deck::empty(),
            pair_count: 0,
            selection: SelectionBuffer::new(),
            accepting_input: true,
            matched_pairs: 0,
            pending_reveal: None,
            clock: Duration::ZERO,
        })
    }

    // === Lifecycle ===

    /// Open a new session and sample its identities.
    ///
    /// Clears the board, the selection and any pending reveal, then moves
    /// to `Playing`. The board stays empty until the returned request is
    /// fulfilled and passed to `install_deck`. On failure the engine is left
    /// in `NotStarted` with an empty board.
    pub fn start(
        &mut self,
        pair_count: usize,
        pool: &[CardIdentity],
    ) -> Result<DealRequest, MatchError> {
        self.abandon_session();

        let capacity = self.config.capacity();
        let cards = pair_count.saturating_mul(2);
        if cards > capacity {
            warn!(cards, capacity, "deck does not fit the grid");
            return Err(MatchError::GridTooSmall { cards, capacity });
        }

        let identities = match DeckBuilder::sample_identities(pair_count, pool, &mut self.rng) {
            Ok(identities) => identities,
            Err(err) => {
                warn!(%err, "cannot start game");
                return Err(err);
            }
        };

        self.pair_count = pair_count;
        self.awaiting_deal = true;
        self.state = GameState::Playing;
        info!(session = %self.session, pair_count, "game started");

        Ok(DealRequest {
            session: self.session,
            identities,
            rng: self.rng.fork(),
        })
    }

    /// Put a dealt deck on the board.
    ///
    /// Decks from any session but the current one are discarded, which
    /// makes a double `start` yield a single deck. A failed deal returns the
    /// engine to `NotStarted` and hands the error back.
    pub fn install_deck(
        &mut self,
        session: SessionId,
        result: Result<Deck, MatchError>,
    ) -> Result<DeckInstall, MatchError> {
        if session != self.session || !self.awaiting_deal {
            warn!(%session, current = %self.session, "discarding deck from abandoned session");
            return Ok(DeckInstall::Stale);
        }
        self.awaiting_deal = false;

        let deck = match result {
            Ok(deck) => deck,
            Err(err) => {
                warn!(%session, %err, "deal failed");
                self.state = GameState::NotStarted;
                self.pair_count = 0;
                return Err(err);
            }
        };

        let cards = deck.len();
        self.pair_count = deck.pair_count();
        self.deck = deck;
        info!(%session, cards, "deck installed");

        if self.pair_count == 0 {
            self.win();
        }
        Ok(DeckInstall::Installed { cards })
    }

    /// Start, deal through `provider` and install, in one call.
    pub async fn start_and_deal<P>(
        &mut self,
        pair_count: usize,
        pool: &[CardIdentity],
        provider: &P,
    ) -> Result<DeckInstall, MatchError>
    where
        P: ArtworkProvider + ?Sized,
    {
        let request = self.start(pair_count, pool)?;
        let session = request.session();
        let builder = self.builder;
        let result = request.deal(&builder, provider).await;
        self.install_deck(session, result)
    }

    fn abandon_session(&mut self) {
        if self.pending_reveal.is_some() {
            debug!(session = %self.session, "dropping pending reveal");
        }
        self.session = self.session.next();
        self.state = GameState::NotStarted;
        self.awaiting_deal = false;
        self.deck = Deck::empty();
        self.pair_count = 0;
        self.selection.clear();
        self.accepting_input = true;
        self.matched_pairs = 0;
        self.pending_reveal = None;
    }

    fn win(&mut self) {
        self.state = GameState::Won;
        info!(session = %self.session, pairs = self.pair_count, "all pairs found");
    }

    // === Input ===

    /// Apply a pointer select at canvas coordinates.
    ///
    /// Flips at most one card: the first in deck order whose bounds contain
    /// the point and which is neither face-up nor matched.
    pub fn handle_pointer_select(&mut self, x: f32, y: f32) -> SelectOutcome {
        if self.state != GameState::Playing || !self.accepting_input {
            return SelectOutcome::Ignored;
        }

        let Some(index) = self.deck.selectable_at(x, y, self.config.card_size) else {
            return SelectOutcome::Ignored;
        };
        if !self.selection.push(index) {
            return SelectOutcome::Ignored;
        }
        if let Some(card) = self.deck.get_mut(index) {
            card.flip_up();
        }
        debug!(card = index, "card revealed");

        match self.selection.pair() {
            Some(pair) => self.evaluate(pair),
            None => SelectOutcome::Revealed { card: index },
        }
    }

    fn evaluate(&mut self, [a, b]: [usize; 2]) -> SelectOutcome {
        self.accepting_input = false;

        let is_match = match (self.deck.get(a), self.deck.get(b)) {
            (Some(first), Some(second)) => first.matches(second),
            _ => false,
        };

        if is_match {
            for index in [a, b] {
                if let Some(card) = self.deck.get_mut(index) {
                    card.mark_matched();
                }
            }
            self.matched_pairs += 1;
            self.selection.clear();
            self.accepting_input = true;
            debug!(cards = ?[a, b], matched = self.matched_pairs, "pair matched");

            let won = self.matched_pairs == self.pair_count;
            if won {
                self.win();
            }
            SelectOutcome::Matched { cards: [a, b], won }
        } else {
            let ticket = RevealTicket::new(self.session, [a, b], self.config.mismatch_delay());
            self.pending_reveal = Some(PendingReveal::schedule(ticket, self.clock));
            debug!(cards = ?[a, b], delay_ms = self.config.mismatch_delay_ms, "pair mismatched");
            SelectOutcome::Mismatched(ticket)
        }
    }

    // === Time ===

    /// Move the engine clock forward, firing the pending reveal when due.
    ///
    /// Returns true if a reveal was applied.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.clock = self.clock.saturating_add(elapsed);
        match self.pending_reveal {
            Some(pending) if pending.is_due(self.clock) => {
                self.apply_reveal(pending.ticket);
                true
            }
            _ => false,
        }
    }

    /// Apply a reveal from a host-owned timer.
    ///
    /// Ignored, returning false, unless the ticket is the one still pending
    /// in the current session.
    pub fn resolve_reveal(&mut self, ticket: &RevealTicket) -> bool {
        match self.pending_reveal {
            Some(pending) if pending.ticket == *ticket => {
                self.apply_reveal(pending.ticket);
                true
            }
            _ => {
                debug!(session = %ticket.session(), "ignoring stale reveal ticket");
                false
            }
        }
    }

    fn apply_reveal(&mut self, ticket: RevealTicket) {
        self.pending_reveal = None;
        for index in ticket.cards() {
            if let Some(card) = self.deck.get_mut(index) {
                card.flip_down();
            }
        }
        self.selection.clear();
        self.accepting_input = true;
        debug!(cards = ?ticket.cards(), "mismatched pair hidden");
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Whether a deal for the current session is still outstanding.
    #[must_use]
    pub fn is_dealing(&self) -> bool {
        self.awaiting_deal
    }

    #[must_use]
    pub fn accepting_input(&self) -> bool {
        self.accepting_input
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs in the current session; 0 until a session is started.
    ///
    /// Outside `Playing` and `Won` this is 0, so `matched_pairs() ==
    /// pair_count()` only signals a win once a deck is installed.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// Deck indices currently in the selection buffer.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        self.selection.as_slice()
    }

    #[must_use]
    pub fn has_pending_reveal(&self) -> bool {
        self.pending_reveal.is_some()
    }

    /// Time accumulated through `advance`.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        self.state.controls()
    }

    /// Snapshot the board for drawing. Works with an empty deck.
    #[must_use]
    pub fn render(&self) -> RenderModel {
        let size = self.config.card_size;
        let canvas = self.config.canvas_size();

        let cards = self
            .deck
            .iter()
            .enumerate()
            .map(|(index, card)| CardView {
                index,
                bounds: card.bounds(size),
                face: card.face(&self.config.back_caption),
            })
            .collect();

        let victory = (self.state == GameState::Won).then(|| VictoryBanner {
            text: self.config.victory_text.clone(),
            center: Point::new(canvas.width / 2.0, canvas.height / 2.0),
        });

        RenderModel {
            state: self.state,
            canvas,
            cards,
            victory,
            controls: self.controls(),
        }
    }
}
