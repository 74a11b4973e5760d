//! Property tests for dealing and play invariants.

use futures::executor::block_on;
use proptest::prelude::*;

use memory_match::{
    shuffle, CardIdentity, DeckBuilder, GameRng, GameState, MatchConfig, MatchEngine,
    SelectOutcome, SpriteUrlProvider,
};

proptest! {
    /// Shuffle never drops, duplicates or invents elements.
    #[test]
    fn shuffle_is_a_permutation(mut items in prop::collection::vec(any::<u16>(), 0..64), seed in any::<u64>()) {
        let mut expected = items.clone();
        shuffle(&mut items, &mut GameRng::new(seed));

        expected.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(items, expected);
    }

    /// Every dealt identity appears on exactly two cards.
    #[test]
    fn dealt_decks_are_well_paired(pair_count in 0usize..=20, extra in 0u32..20, seed in any::<u64>()) {
        let pool: Vec<_> = (1..=pair_count as u32 + extra).map(CardIdentity::new).collect();
        let builder = DeckBuilder::from_config(&MatchConfig::new().with_grid(8, 5));
        let mut rng = GameRng::new(seed);

        let deck = block_on(builder.build_deck(pair_count, &pool, &SpriteUrlProvider::default(), &mut rng)).unwrap();

        prop_assert_eq!(deck.len(), pair_count * 2);
        prop_assert!(deck.is_well_paired());
        prop_assert_eq!(deck.identity_counts().len(), pair_count);
        prop_assert!(deck.iter().all(|c| !c.is_face_up() && !c.is_matched()));
    }

    /// Under arbitrary clicks and clock ticks: matched never reverts, the
    /// selection never exceeds two, and Won holds exactly when all pairs are found.
    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        moves in prop::collection::vec((0f32..540.0, 0f32..440.0, 0u64..1500), 1..200),
    ) {
        let config = MatchConfig::default();
        let pool = config.identity_pool();
        let mut engine = MatchEngine::new(config, seed).unwrap();
        block_on(engine.start_and_deal(10, &pool, &SpriteUrlProvider::default())).unwrap();

        let mut matched_before = vec![false; engine.cards().len()];
        for (x, y, tick) in moves {
            let outcome = engine.handle_pointer_select(x, y);
            if engine.state() == GameState::Won {
                let won_outcome = matches!(outcome, SelectOutcome::Matched { won: true, .. } | SelectOutcome::Ignored);
                prop_assert!(won_outcome);
            }
            engine.advance(std::time::Duration::from_millis(tick));

            prop_assert!(engine.selection().len() <= 2);
            for (i, card) in engine.cards().iter().enumerate() {
                prop_assert!(!matched_before[i] || card.is_matched());
                matched_before[i] = card.is_matched();
            }
            prop_assert_eq!(engine.deck().matched_pairs(), engine.matched_pairs());
            prop_assert_eq!(engine.matched_pairs() == engine.pair_count(), engine.state() == GameState::Won);
        }
    }
}
