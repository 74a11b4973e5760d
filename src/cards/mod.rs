//! Card system: identities, card entities and decks.
//!
//! ## Key Types
//!
//! - `CardIdentity`: Opaque pair identifier
//! - `Card`: One card on the board (face state, position, artwork)
//! - `CardFace`: Derived display state of a card
//! - `Deck`: Ordered card set of one game session

pub mod card;
pub mod deck;
pub mod identity;

pub use card::{Card, CardFace};
pub use deck::Deck;
pub use identity::CardIdentity;
