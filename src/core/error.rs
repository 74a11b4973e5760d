//! Error types for dealing and game setup.
//!
//! Only setup can fail. Play itself never errors: selecting empty space,
//! selecting while the board is locked, or installing a stale deck are
//! ordinary outcomes reported through return values.

use thiserror::Error;

use crate::artwork::ArtworkError;
use crate::cards::CardIdentity;

/// Errors raised while configuring, starting or dealing a game.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The identity pool holds fewer distinct values than the requested pair count.
    #[error("identity pool has {available} distinct identities, {requested} pairs requested")]
    InsufficientPool { requested: usize, available: usize },

    /// Artwork for one identity could not be resolved; the deal was aborted.
    #[error("artwork resolution failed for {identity}")]
    ArtworkResolution {
        identity: CardIdentity,
        #[source]
        source: ArtworkError,
    },

    /// The deck would not fit on the configured grid.
    #[error("{cards} cards do not fit a grid with {capacity} cells")]
    GridTooSmall { cards: usize, capacity: usize },

    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MatchError {
    /// The identity whose artwork failed, if this is a resolution failure.
    #[must_use]
    pub fn failed_identity(&self) -> Option<CardIdentity> {
        match self {
            MatchError::ArtworkResolution { identity, .. } => Some(*identity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_insufficient_pool_message() {
        let err = MatchError::InsufficientPool { requested: 3, available: 2 };
        assert_eq!(
            err.to_string(),
            "identity pool has 2 distinct identities, 3 pairs requested"
        );
        assert!(err.failed_identity().is_none());
    }

    #[test]
    fn test_artwork_resolution_carries_identity_and_source() {
        let err = MatchError::ArtworkResolution {
            identity: CardIdentity::new(25),
            source: ArtworkError::Missing,
        };

        assert_eq!(err.failed_identity(), Some(CardIdentity::new(25)));
        assert_eq!(err.to_string(), "artwork resolution failed for Identity(25)");
        assert!(err.source().is_some());
    }
}
