//! Card entity - one face of a pair on the board.
//!
//! `Card` is plain data: identity, artwork reference, face state and grid
//! position. Display state is derived through `Card::face`; drawing is left
//! to the host.
//!
//! ## Invariants
//!
//! - `matched` is monotonic: once set it never clears.
//! - `face_up` only toggles while the card is unmatched.
//! - `position` is assigned when the deck is laid out and then left alone.

use serde::Serialize;

use super::identity::CardIdentity;
use crate::artwork::ArtworkHandle;
use crate::core::geometry::{Point, Rect, Size};

/// A card in a dealt deck.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    identity: CardIdentity,
    artwork: Option<ArtworkHandle>,
    face_up: bool,
    matched: bool,
    position: Point,
}

/// Derived display state of a card.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardFace {
    /// Face-down: the host draws the back with this caption.
    Back { caption: String },
    /// Face-up or matched: the host draws the artwork, or just the border
    /// while no artwork is attached.
    Front {
        artwork: Option<ArtworkHandle>,
        matched: bool,
    },
}

impl Card {
    /// Create a face-down, unmatched card at the canvas origin.
    #[must_use]
    pub fn new(identity: CardIdentity, artwork: Option<ArtworkHandle>) -> Self {
        Self {
            identity,
            artwork,
            face_up: false,
            matched: false,
            position: Point::default(),
        }
    }

    /// The pair identity.
    #[must_use]
    pub fn identity(&self) -> CardIdentity {
        self.identity
    }

    /// The resolved artwork, if any.
    #[must_use]
    pub fn artwork(&self) -> Option<&ArtworkHandle> {
        self.artwork.as_ref()
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Top-left corner of the card's grid cell.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The card's bounds for a given cell size.
    #[must_use]
    pub fn bounds(&self, size: Size) -> Rect {
        Rect::new(self.position, size)
    }

    /// Hit test against the card's bounds.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32, size: Size) -> bool {
        self.bounds(size).contains(px, py)
    }

    /// A card can be picked only while it is face-down and unmatched.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Whether two cards form a pair.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.identity == other.identity
    }

    /// Project the card into its display state.
    ///
    /// Matched cards always show their front.
    #[must_use]
    pub fn face(&self, back_caption: &str) -> CardFace {
        if self.face_up || self.matched {
            CardFace::Front {
                artwork: self.artwork.clone(),
                matched: self.matched,
            }
        } else {
            CardFace::Back {
                caption: back_caption.to_string(),
            }
        }
    }

    pub(crate) fn set_artwork(&mut self, artwork: ArtworkHandle) {
        self.artwork = Some(artwork);
    }

    pub(crate) fn place(&mut self, position: Point) {
        self.position = position;
    }

    /// Turn the card face-up. Returns false if it was not selectable.
    pub(crate) fn flip_up(&mut self) -> bool {
        if !self.is_selectable() {
            return false;
        }
        self.face_up = true;
        true
    }

    /// Turn the card back face-down. Matched cards stay face-up.
    pub(crate) fn flip_down(&mut self) -> bool {
        if self.matched || !self.face_up {
            return false;
        }
        self.face_up = false;
        true
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32) -> Card {
        Card::new(CardIdentity::new(id), None)
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = card(7);

        assert_eq!(card.identity(), CardIdentity::new(7));
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
        assert!(card.is_selectable());
        assert!(card.artwork().is_none());
        assert_eq!(card.position(), Point::default());
    }

    #[test]
    fn test_flip_up_and_down() {
        let mut card = card(1);

        assert!(card.flip_up());
        assert!(card.is_face_up());
        assert!(!card.is_selectable());

        // Already face-up
        assert!(!card.flip_up());

        assert!(card.flip_down());
        assert!(!card.is_face_up());
        assert!(!card.flip_down());
    }

    #[test]
    fn test_matched_is_permanent() {
        let mut card = card(1);
        card.flip_up();
        card.mark_matched();

        assert!(card.is_matched());
        assert!(!card.flip_down());
        assert!(card.is_face_up());
        assert!(!card.flip_up());
    }

    #[test]
    fn test_matches_by_identity() {
        assert!(card(3).matches(&card(3)));
        assert!(!card(3).matches(&card(4)));
    }

    #[test]
    fn test_contains_uses_position() {
        let mut card = card(1);
        card.place(Point::new(110.0, 10.0));
        let size = Size::new(100.0, 100.0);

        assert!(card.contains(150.0, 50.0, size));
        assert!(card.contains(110.0, 10.0, size));
        assert!(!card.contains(50.0, 50.0, size));
        assert_eq!(card.bounds(size).center(), Point::new(160.0, 60.0));
    }

    #[test]
    fn test_face_projection() {
        let mut card = card(9);
        assert_eq!(card.face("Poké"), CardFace::Back { caption: "Poké".into() });

        card.set_artwork(ArtworkHandle::new("sprite-9.png"));
        card.flip_up();
        assert_eq!(
            card.face("Poké"),
            CardFace::Front {
                artwork: Some(ArtworkHandle::new("sprite-9.png")),
                matched: false,
            }
        );

        card.mark_matched();
        assert!(matches!(card.face("Poké"), CardFace::Front { matched: true, .. }));
    }
}
