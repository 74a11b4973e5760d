//! Grid layout: row-major cell assignment.

use crate::cards::Card;
use crate::core::config::MatchConfig;
use crate::core::geometry::{Point, Size};

/// Maps deck order onto grid cells.
///
/// Card `i` lands in column `i % cols`, row `i / cols`, at
/// `origin + (col * width, row * height)`. Only positions change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub card_size: Size,
    pub origin: Point,
}

impl GridLayout {
    #[must_use]
    pub const fn new(cols: usize, card_size: Size, origin: Point) -> Self {
        Self {
            cols,
            card_size,
            origin,
        }
    }

    /// The layout a configuration describes.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.cols, config.card_size, config.grid_origin())
    }

    /// Top-left corner of the cell for a deck index.
    #[must_use]
    pub fn cell_origin(&self, index: usize) -> Point {
        let cols = self.cols.max(1);
        let col = index % cols;
        let row = index / cols;
        Point::new(
            self.origin.x + col as f32 * self.card_size.width,
            self.origin.y + row as f32 * self.card_size.height,
        )
    }

    /// Assign every card its cell by deck order.
    pub fn apply(&self, cards: &mut [Card]) {
        for (index, card) in cards.iter_mut().enumerate() {
            card.place(self.cell_origin(index));
        }
    }
}
