//! Read-only render snapshot handed to the presentation layer.
//!
//! The host draws, per card, a bordered rectangle filled with either the
//! artwork or a back face with a caption; when the game is won it adds the
//! victory text at the center and shows the restart control.

use serde::Serialize;

use super::state::{Controls, GameState};
use crate::cards::CardFace;
use crate::core::geometry::{Point, Rect, Size};

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderModel {
    pub state: GameState,
    pub canvas: Size,
    pub cards: Vec<CardView>,
    pub victory: Option<VictoryBanner>,
    pub controls: Controls,
}

impl RenderModel {
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.victory.is_some()
    }
}

/// One card as the host should draw it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardView {
    /// Deck index of the card.
    pub index: usize,
    pub bounds: Rect,
    pub face: CardFace,
}

/// Victory text centered on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VictoryBanner {
    pub text: String,
    pub center: Point,
}
