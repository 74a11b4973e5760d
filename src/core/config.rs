//! Game configuration.
//!
//! `MatchConfig` describes the board (grid shape, cell size, margin), the
//! default deal (pair count, identity pool) and the presentation strings the
//! render snapshot carries. Hosts build it with the builder methods or load
//! it with serde; missing fields fall back to the defaults of the classic
//! 5×4 board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::MatchError;
use super::geometry::{Point, Size};
use crate::cards::CardIdentity;

/// Complete board and rules configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Grid columns.
    pub cols: usize,

    /// Grid rows. Only the canvas height and the capacity check use it;
    /// layout is driven by `cols`.
    pub rows: usize,

    /// Size of one card cell.
    pub card_size: Size,

    /// Offset of the grid origin from the canvas corner, on both axes.
    pub margin: f32,

    /// Pairs dealt when the host does not ask for a specific count.
    pub pair_count: usize,

    /// First identity of the default pool (inclusive).
    pub first_identity: u32,

    /// Last identity of the default pool (inclusive).
    pub last_identity: u32,

    /// How long a mismatched pair stays face-up, in milliseconds.
    pub mismatch_delay_ms: u64,

    /// Caption drawn on face-down cards.
    pub back_caption: String,

    /// Text shown centered on the board once every pair is found.
    pub victory_text: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cols: 5,
            rows: 4,
            card_size: Size::new(100.0, 100.0),
            margin: 10.0,
            pair_count: 10,
            first_identity: 1,
            last_identity: 151,
            mismatch_delay_ms: 1000,
            back_caption: "Poké".to_string(),
            victory_text: "¡Ganaste!".to_string(),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid shape.
    #[must_use]
    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Set the card cell size.
    #[must_use]
    pub fn with_card_size(mut self, width: f32, height: f32) -> Self {
        self.card_size = Size::new(width, height);
        self
    }

    /// Set the grid margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the default pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the default identity pool to `first..=last`.
    #[must_use]
    pub fn with_identity_range(mut self, first: u32, last: u32) -> Self {
        self.first_identity = first;
        self.last_identity = last;
        self
    }

    /// Set the mismatch reveal delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the card back caption.
    #[must_use]
    pub fn with_back_caption(mut self, caption: impl Into<String>) -> Self {
        self.back_caption = caption.into();
        self
    }

    /// Set the victory text.
    #[must_use]
    pub fn with_victory_text(mut self, text: impl Into<String>) -> Self {
        self.victory_text = text.into();
        self
    }

    /// Check that the configuration describes a usable board.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(MatchError::InvalidConfig(format!(
                "grid must have at least one cell, got {}x{}",
                self.cols, self.rows
            )));
        }
        if self.cols.checked_mul(self.rows).is_none() {
            return Err(MatchError::InvalidConfig(format!(
                "grid of {}x{} cells is too large",
                self.cols, self.rows
            )));
        }
        if !(self.card_size.width > 0.0 && self.card_size.height > 0.0) {
            return Err(MatchError::InvalidConfig(format!(
                "card size must be positive, got {}x{}",
                self.card_size.width, self.card_size.height
            )));
        }
        Ok(())
    }

    /// Number of cells on the grid.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    /// The mismatch reveal delay.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Top-left corner of the first cell.
    #[must_use]
    pub fn grid_origin(&self) -> Point {
        Point::new(self.margin, self.margin)
    }

    /// Canvas size: the grid plus the margin on every side.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        Size::new(
            self.cols as f32 * self.card_size.width + 2.0 * self.margin,
            self.rows as f32 * self.card_size.height + 2.0 * self.margin,
        )
    }

    /// The default identity pool, `first_identity..=last_identity`.
    #[must_use]
    pub fn identity_pool(&self) -> Vec<CardIdentity> {
        (self.first_identity..=self.last_identity)
            .map(CardIdentity::new)
            .collect()
    }
}
