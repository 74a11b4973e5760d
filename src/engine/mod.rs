//! Match engine: game state machine, selection handling, timed reveals and
//! render snapshots.
//!
//! ## Key Types
//!
//! - `MatchEngine`: Owns the board and applies input
//! - `GameState` / `Controls`: Lifecycle and the buttons it exposes
//! - `DealRequest` / `DeckInstall`: Asynchronous deal handshake
//! - `SelectOutcome` / `RevealTicket`: Result of a pointer select
//! - `RenderModel`: Read-only snapshot for drawing

pub mod match_engine;
pub mod render;
pub mod reveal;
pub mod selection;
pub mod state;

pub use match_engine::{DealRequest, DeckInstall, MatchEngine, SelectOutcome};
pub use render::{CardView, RenderModel, VictoryBanner};
pub use reveal::{RevealTicket, SessionId};
pub use selection::SelectionBuffer;
pub use state::{Controls, GameState};
