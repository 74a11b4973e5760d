//! Core building blocks: RNG, configuration, errors, geometry.
//!
//! Nothing in here knows about selection rules; the engine and the dealer
//! build on these.

pub mod config;
pub mod error;
pub mod geometry;
pub mod rng;

pub use config::MatchConfig;
pub use error::MatchError;
pub use geometry::{Point, Rect, Size};
pub use rng::GameRng;
