//! # memory-match
//!
//! A memory-matching (concentration) game engine.
//!
//! A grid of face-down cards holds exactly two cards per identity. The
//! player reveals two cards at a time; equal identities stay up as a matched
//! pair, different ones turn back down after a short delay. The game is won
//! when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `MatchEngine` per board, no globals. The host
//!    feeds it pointer selects and clock ticks.
//!
//! 2. **Deterministic Dealing**: Identity sampling, shuffle and layout all
//!    draw from a seeded `GameRng`.
//!
//! 3. **Sessions Over Timers**: Deals and mismatch reveals are tagged with
//!    the session that created them; a restart makes them inert.
//!
//! 4. **Presentation Outside**: Drawing, buttons and image loading belong to
//!    the host. The engine exposes a `RenderModel` and an `ArtworkProvider`
//!    seam.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, geometry
//! - `cards`: Card identities, card entities, decks
//! - `deal`: Shuffle, grid layout, deck builder
//! - `artwork`: Artwork provider trait and sources
//! - `engine`: State machine and render snapshot
//!
//! ## Example
//!
//! ```
//! use futures::executor::block_on;
//! use memory_match::{GameState, MatchConfig, MatchEngine, SpriteUrlProvider};
//!
//! let config = MatchConfig::default();
//! let pool = config.identity_pool();
//! let mut engine = MatchEngine::new(config, 42).unwrap();
//!
//! block_on(engine.start_and_deal(10, &pool, &SpriteUrlProvider::default())).unwrap();
//! assert_eq!(engine.state(), GameState::Playing);
//! assert_eq!(engine.cards().len(), 20);
//! ```

pub mod artwork;
pub mod cards;
pub mod core;
pub mod deal;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchConfig, MatchError, Point, Rect, Size};

pub use crate::cards::{Card, CardFace, CardIdentity, Deck};

pub use crate::deal::{shuffle, DeckBuilder, GridLayout};

pub use crate::artwork::{
    ArtworkError, ArtworkHandle, ArtworkProvider, SpriteUrlProvider, POKEAPI_SPRITE_TEMPLATE,
};

#[cfg(feature = "pokeapi")]
pub use crate::artwork::PokeApiProvider;

pub use crate::engine::{
    CardView, Controls, DealRequest, DeckInstall, GameState, MatchEngine, RenderModel,
    RevealTicket, SelectOutcome, SessionId, VictoryBanner,
};
