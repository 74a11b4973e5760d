//! Dealing: shuffling, grid layout and deck construction.

pub mod builder;
pub mod layout;
pub mod shuffle;

pub use builder::DeckBuilder;
pub use layout::GridLayout;
pub use shuffle::shuffle;
