//! Headless host: deals a board and clears it with a perfect-memory player.
//!
//! ```text
//! RUST_LOG=debug memory-match --pairs 10 --seed 7
//! ```

use std::time::Duration;

use clap::Parser;
use futures::executor::block_on;
use rustc_hash::FxHashMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memory_match::{
    CardIdentity, GameState, MatchConfig, MatchEngine, MatchError, SelectOutcome,
    SpriteUrlProvider, POKEAPI_SPRITE_TEMPLATE,
};

#[derive(Debug, Parser)]
#[command(name = "memory-match", about = "Deal and autoplay a memory-matching board")]
struct Args {
    /// Pairs to deal.
    #[arg(long, default_value_t = 10)]
    pairs: usize,

    /// RNG seed for sampling, shuffle and layout.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Grid columns.
    #[arg(long, default_value_t = 5)]
    cols: usize,

    /// Grid rows.
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Mismatch reveal delay in milliseconds.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Highest identity in the pool (pool is 1..=N).
    #[arg(long, default_value_t = 151)]
    max_identity: u32,

    /// Artwork URL template, `{id}` is replaced by the identity.
    #[arg(long, default_value = POKEAPI_SPRITE_TEMPLATE)]
    sprite_template: String,
}

/// Remembers every card it has seen face-up.
#[derive(Default)]
struct Player {
    seen: FxHashMap<usize, CardIdentity>,
}

impl Player {
    fn observe(&mut self, engine: &MatchEngine, index: usize) {
        if let Some(card) = engine.cards().get(index) {
            self.seen.insert(index, card.identity());
        }
    }

    fn is_open(engine: &MatchEngine, index: usize) -> bool {
        engine.cards().get(index).is_some_and(|c| c.is_selectable())
    }

    /// A remembered, still hidden card with the given identity.
    fn recall(&self, engine: &MatchEngine, identity: CardIdentity, except: usize) -> Option<usize> {
        self.seen
            .iter()
            .filter(|&(&i, &id)| i != except && id == identity && Self::is_open(engine, i))
            .map(|(&i, _)| i)
            .min()
    }

    /// Two remembered hidden cards of the same identity.
    fn known_pair(&self, engine: &MatchEngine) -> Option<[usize; 2]> {
        let mut indices: Vec<_> = self.seen.keys().copied().filter(|&i| Self::is_open(engine, i)).collect();
        indices.sort_unstable();
        indices.iter().find_map(|&a| {
            let identity = self.seen[&a];
            self.recall(engine, identity, a).map(|b| [a, b])
        })
    }

    fn unseen(&self, engine: &MatchEngine, except: Option<usize>) -> Option<usize> {
        (0..engine.cards().len())
            .find(|&i| Some(i) != except && !self.seen.contains_key(&i) && Self::is_open(engine, i))
    }

    fn pick_first(&self, engine: &MatchEngine) -> Option<usize> {
        self.known_pair(engine)
            .map(|[a, _]| a)
            .or_else(|| self.unseen(engine, None))
    }

    fn pick_second(&self, engine: &MatchEngine, first: usize) -> Option<usize> {
        let identity = engine.cards().get(first)?.identity();
        self.recall(engine, identity, first)
            .or_else(|| self.unseen(engine, Some(first)))
    }
}

fn click(engine: &mut MatchEngine, index: usize) -> SelectOutcome {
    let center = engine.cards()[index].bounds(engine.config().card_size).center();
    engine.handle_pointer_select(center.x, center.y)
}

fn main() -> Result<(), MatchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = MatchConfig::new()
        .with_grid(args.cols, args.rows)
        .with_pair_count(args.pairs)
        .with_identity_range(1, args.max_identity)
        .with_mismatch_delay(Duration::from_millis(args.delay_ms));
    let pool = config.identity_pool();
    let provider = SpriteUrlProvider::new(args.sprite_template);

    let mut engine = MatchEngine::new(config, args.seed)?;
    block_on(engine.start_and_deal(args.pairs, &pool, &provider))?;

    let mut player = Player::default();
    let mut turns = 0u32;
    while engine.state() == GameState::Playing {
        let Some(first) = player.pick_first(&engine) else { break };
        click(&mut engine, first);
        player.observe(&engine, first);

        let Some(second) = player.pick_second(&engine, first) else { break };
        let outcome = click(&mut engine, second);
        player.observe(&engine, second);
        turns += 1;

        if let SelectOutcome::Mismatched(ticket) = outcome {
            engine.advance(ticket.delay());
        }
    }

    info!(
        state = ?engine.state(),
        turns,
        pairs = engine.matched_pairs(),
        elapsed_ms = engine.clock().as_millis() as u64,
        "game over"
    );
    Ok(())
}
