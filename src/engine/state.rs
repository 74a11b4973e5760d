//! Game progression and the controls it exposes to the host.

use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
///
/// `NotStarted --start--> Playing --all pairs matched--> Won --start--> Playing`.
/// A failed deal drops back to `NotStarted`. Starting while `Playing`
/// abandons the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    NotStarted,
    Playing,
    Won,
}

impl GameState {
    /// The lifecycle controls the host should show.
    #[must_use]
    pub fn controls(self) -> Controls {
        Controls::for_state(self)
    }
}

/// Which lifecycle buttons are visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub start: bool,
    pub restart: bool,
}

impl Controls {
    /// Start before the first game, restart after a win, nothing during play.
    #[must_use]
    pub const fn for_state(state: GameState) -> Self {
        match state {
            GameState::NotStarted => Self { start: true, restart: false },
            GameState::Playing => Self { start: false, restart: false },
            GameState::Won => Self { start: false, restart: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        assert_eq!(GameState::default(), GameState::NotStarted);
    }

    #[test]
    fn test_controls_per_state() {
        assert_eq!(GameState::NotStarted.controls(), Controls { start: true, restart: false });
        assert_eq!(GameState::Playing.controls(), Controls { start: false, restart: false });
        assert_eq!(GameState::Won.controls(), Controls { start: false, restart: true });
    }
}
