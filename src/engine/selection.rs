//! Selection buffer: the one or two cards currently being evaluated.

use smallvec::SmallVec;

/// Deck indices of the face-up, unmatched cards picked this turn.
///
/// Holds at most two entries; a full buffer refuses further pushes until
/// it is cleared by a match or by the mismatch reveal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionBuffer {
    picks: SmallVec<[usize; 2]>,
}

impl SelectionBuffer {
    pub const CAPACITY: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pick. Returns false when the buffer is already full or the
    /// card is already in it.
    pub fn push(&mut self, index: usize) -> bool {
        if self.is_full() || self.picks.contains(&index) {
            return false;
        }
        self.picks.push(index);
        true
    }

    /// The two picks, once the buffer is full.
    #[must_use]
    pub fn pair(&self) -> Option<[usize; 2]> {
        match self.picks.as_slice() {
            &[a, b] => Some([a, b]),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.picks.len() >= Self::CAPACITY
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.picks
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }
}
