//! Artwork sources.
//!
//! - `ArtworkProvider`: async trait the dealer resolves identities through
//! - `SpriteUrlProvider`: offline URL template
//! - `PokeApiProvider`: PokeAPI lookup (feature `pokeapi`)

pub mod provider;
pub mod sprite_url;

#[cfg(feature = "pokeapi")]
pub mod pokeapi;

pub use provider::{ArtworkError, ArtworkHandle, ArtworkProvider};
pub use sprite_url::{SpriteUrlProvider, POKEAPI_SPRITE_TEMPLATE};

#[cfg(feature = "pokeapi")]
pub use pokeapi::PokeApiProvider;
