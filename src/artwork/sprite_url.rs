//! Offline artwork source: fills an identity into a URL template.

use async_trait::async_trait;

use super::provider::{ArtworkError, ArtworkHandle, ArtworkProvider};
use crate::cards::CardIdentity;

/// Front sprites of the PokeAPI sprite repository, keyed by Pokédex number.
pub const POKEAPI_SPRITE_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png";

/// Resolves every identity by substituting `{id}` in a template.
///
/// Never touches the network and never fails, which makes it the provider of
/// choice for headless play and tests.
#[derive(Clone, Debug)]
pub struct SpriteUrlProvider {
    template: String,
}

impl SpriteUrlProvider {
    /// Create a provider from a template containing `{id}`.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The handle for an identity.
    #[must_use]
    pub fn url_for(&self, identity: CardIdentity) -> ArtworkHandle {
        ArtworkHandle::new(self.template.replace("{id}", &identity.raw().to_string()))
    }
}

impl Default for SpriteUrlProvider {
    fn default() -> Self {
        Self::new(POKEAPI_SPRITE_TEMPLATE)
    }
}

#[async_trait]
impl ArtworkProvider for SpriteUrlProvider {
    async fn resolve(&self, identity: CardIdentity) -> Result<ArtworkHandle, ArtworkError> {
        Ok(self.url_for(identity))
    }
}
