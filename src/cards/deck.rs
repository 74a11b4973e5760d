//! Deck - the ordered card set of one game session.
//!
//! A deck is built fresh for every deal and never reused. Deck order is
//! significant: it is both the layout order and the tie-break when a point
//! hits more than one card.

use rustc_hash::FxHashMap;

use super::card::Card;
use super::identity::CardIdentity;
use crate::artwork::ArtworkHandle;
use crate::core::geometry::Size;

/// Ordered sequence of `2 * pair_count` cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A deck with no cards. This is what the board holds while a deal is pending.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Expand resolved identities into a deck with two cards per identity.
    ///
    /// Both cards of a pair share the artwork handle. The result is in pair
    /// order; shuffle and layout happen afterwards.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (CardIdentity, ArtworkHandle)>) -> Self {
        let mut cards = Vec::new();
        for (identity, artwork) in pairs {
            cards.push(Card::new(identity, Some(artwork.clone())));
            cards.push(Card::new(identity, Some(artwork)));
        }
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Index of the first selectable card (deck order) containing the point.
    ///
    /// Face-up and matched cards are skipped, so a click on the shared edge
    /// of a revealed card and a hidden one picks the hidden one.
    #[must_use]
    pub fn selectable_at(&self, px: f32, py: f32, size: Size) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.is_selectable() && card.contains(px, py, size))
    }

    /// How many cards carry each identity.
    #[must_use]
    pub fn identity_counts(&self) -> FxHashMap<CardIdentity, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.identity()).or_insert(0) += 1;
        }
        counts
    }

    /// Check the pairing invariant: every identity appears on exactly two cards.
    #[must_use]
    pub fn is_well_paired(&self) -> bool {
        self.identity_counts().values().all(|&count| count == 2)
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }
}
