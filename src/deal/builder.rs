//! Deck builder: sample identities, resolve artwork, expand, shuffle, lay out.
//!
//! ## Flow
//!
//! 1. `sample_identities` draws `pair_count` distinct identities from the
//!    pool (uniform draws, duplicates rejected).
//! 2. `deal` resolves artwork once per identity, concurrently, and waits for
//!    all of them. The first failure aborts the whole deal; no partial deck
//!    is ever produced.
//! 3. Two cards per identity, Fisher–Yates shuffle, row-major layout.
//!
//! The builder touches no game state; the caller installs the deck.

use futures::future::try_join_all;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::layout::GridLayout;
use super::shuffle::shuffle;
use crate::artwork::ArtworkProvider;
use crate::cards::{CardIdentity, Deck};
use crate::core::config::MatchConfig;
use crate::core::error::MatchError;
use crate::core::rng::GameRng;

/// Builds shuffled, positioned decks.
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder {
    layout: GridLayout,
}

impl DeckBuilder {
    #[must_use]
    pub fn new(layout: GridLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(GridLayout::from_config(config))
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Draw `pair_count` distinct identities from the pool.
    ///
    /// Repeated values in the pool count once. Fails with
    /// `InsufficientPool` when the pool has fewer distinct values than
    /// `pair_count`; a pool of exactly `pair_count` values is fine.
    pub fn sample_identities(
        pair_count: usize,
        pool: &[CardIdentity],
        rng: &mut GameRng,
    ) -> Result<Vec<CardIdentity>, MatchError> {
        let available = pool.iter().collect::<FxHashSet<_>>().len();
        if available < pair_count {
            return Err(MatchError::InsufficientPool {
                requested: pair_count,
                available,
            });
        }

        let mut chosen = Vec::with_capacity(pair_count);
        let mut seen = FxHashSet::default();
        while chosen.len() < pair_count {
            let identity = pool[rng.gen_index(0..=pool.len() - 1)];
            if seen.insert(identity) {
                chosen.push(identity);
            }
        }
        Ok(chosen)
    }

    /// Resolve artwork for the identities and build the deck.
    pub async fn deal<P>(
        &self,
        identities: &[CardIdentity],
        provider: &P,
        rng: &mut GameRng,
    ) -> Result<Deck, MatchError>
    where
        P: ArtworkProvider + ?Sized,
    {
        let resolved = try_join_all(identities.iter().map(|&identity| async move {
            provider
                .resolve(identity)
                .await
                .map(|artwork| (identity, artwork))
                .map_err(|source| MatchError::ArtworkResolution { identity, source })
        }))
        .await?;

        let mut deck = Deck::from_pairs(resolved);
        shuffle(deck.cards_mut(), rng);
        self.layout.apply(deck.cards_mut());

        debug!(pairs = deck.pair_count(), "deck dealt");
        Ok(deck)
    }

    /// Sample and deal in one step.
    pub async fn build_deck<P>(
        &self,
        pair_count: usize,
        pool: &[CardIdentity],
        provider: &P,
        rng: &mut GameRng,
    ) -> Result<Deck, MatchError>
    where
        P: ArtworkProvider + ?Sized,
    {
        let identities = Self::sample_identities(pair_count, pool, rng)?;
        self.deal(&identities, provider, rng).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::{ArtworkError, ArtworkHandle, SpriteUrlProvider};
    use crate::core::geometry::{Point, Size};
    use async_trait::async_trait;
    use futures::executor::block_on;

    fn ids(raw: &[u32]) -> Vec<CardIdentity> {
        raw.iter().copied().map(CardIdentity::new).collect()
    }

    fn builder() -> DeckBuilder {
        DeckBuilder::new(GridLayout::new(5, Size::new(100.0, 100.0), Point::new(10.0, 10.0)))
    }

    struct FailOn(CardIdentity);

    #[async_trait]
    impl ArtworkProvider for FailOn {
        async fn resolve(&self, identity: CardIdentity) -> Result<ArtworkHandle, ArtworkError> {
            if identity == self.0 {
                Err(ArtworkError::Request("404".into()))
            } else {
                Ok(ArtworkHandle::new(format!("{}.png", identity.raw())))
            }
        }
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::new(42);
        let pool: Vec<_> = (1..=151).map(CardIdentity::new).collect();

        let chosen = DeckBuilder::sample_identities(10, &pool, &mut rng).unwrap();

        assert_eq!(chosen.len(), 10);
        let unique: FxHashSet<_> = chosen.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(chosen.iter().all(|id| pool.contains(id)));
    }

    #[test]
    fn test_sample_exact_pool() {
        let mut rng = GameRng::new(1);
        let chosen = DeckBuilder::sample_identities(1, &ids(&[7]), &mut rng).unwrap();
        assert_eq!(chosen, ids(&[7]));
    }

    #[test]
    fn test_sample_insufficient_pool() {
        let mut rng = GameRng::new(1);
        let err = DeckBuilder::sample_identities(3, &ids(&[1, 2]), &mut rng).unwrap_err();

        assert!(matches!(
            err,
            MatchError::InsufficientPool { requested: 3, available: 2 }
        ));
    }

    #[test]
    fn test_sample_counts_distinct_values() {
        let mut rng = GameRng::new(1);
        let err = DeckBuilder::sample_identities(2, &ids(&[4, 4, 4]), &mut rng).unwrap_err();
        assert!(matches!(err, MatchError::InsufficientPool { available: 1, .. }));

        let chosen = DeckBuilder::sample_identities(2, &ids(&[4, 4, 5]), &mut rng).unwrap();
        let mut sorted = chosen.clone();
        sorted.sort();
        assert_eq!(sorted, ids(&[4, 5]));
    }

    #[test]
    fn test_sample_zero_pairs() {
        let mut rng = GameRng::new(1);
        assert!(DeckBuilder::sample_identities(0, &[], &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_deal_builds_positioned_pairs() {
        let mut rng = GameRng::new(42);
        let provider = SpriteUrlProvider::new("{id}.png");

        let deck = block_on(builder().deal(&ids(&[1, 2, 3]), &provider, &mut rng)).unwrap();

        assert_eq!(deck.len(), 6);
        assert!(deck.is_well_paired());
        for (index, card) in deck.iter().enumerate() {
            assert_eq!(card.position(), builder().layout().cell_origin(index));
            assert_eq!(
                card.artwork().map(ArtworkHandle::as_str),
                Some(format!("{}.png", card.identity().raw()).as_str())
            );
            assert!(!card.is_face_up());
        }
    }

    #[test]
    fn test_deal_aborts_on_failure() {
        let mut rng = GameRng::new(42);
        let provider = FailOn(CardIdentity::new(2));

        let err = block_on(builder().deal(&ids(&[1, 2, 3]), &provider, &mut rng)).unwrap_err();

        assert_eq!(err.failed_identity(), Some(CardIdentity::new(2)));
    }

    #[test]
    fn test_build_deck_same_seed_same_deck() {
        let provider = SpriteUrlProvider::default();
        let pool: Vec<_> = (1..=151).map(CardIdentity::new).collect();

        let a = block_on(builder().build_deck(10, &pool, &provider, &mut GameRng::new(9))).unwrap();
        let b = block_on(builder().build_deck(10, &pool, &provider, &mut GameRng::new(9))).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }
}
