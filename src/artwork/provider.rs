//! Artwork provider contract.
//!
//! The dealer asks a provider to turn each identity into an image
//! reference. Resolution is asynchronous and may fail; the provider decides
//! nothing about retries.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::cards::CardIdentity;

/// Reference to an image owned by the host (a URL, asset key or path).
///
/// Cloning is cheap; both cards of a pair share one handle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArtworkHandle(Arc<str>);

impl ArtworkHandle {
    /// Wrap an image reference.
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self(source.into())
    }

    /// The image reference as given by the provider.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtworkHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ArtworkHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Failure to resolve one identity's artwork.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtworkError {
    /// The source could not be reached or answered with an error.
    #[error("artwork request failed: {0}")]
    Request(String),

    /// The source has no image for this identity.
    #[error("no artwork available")]
    Missing,
}

/// Resolves identities to displayable artwork.
#[async_trait]
pub trait ArtworkProvider: Send + Sync {
    /// Resolve one identity.
    async fn resolve(&self, identity: CardIdentity) -> Result<ArtworkHandle, ArtworkError>;
}

#[async_trait]
impl<P: ArtworkProvider + ?Sized> ArtworkProvider for Arc<P> {
    async fn resolve(&self, identity: CardIdentity) -> Result<ArtworkHandle, ArtworkError> {
        (**self).resolve(identity).await
    }
}
