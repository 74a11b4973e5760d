//! Card identities.
//!
//! An identity names a pair: two cards match iff their identities are
//! equal. The engine never interprets the value; the artwork provider maps
//! it to an image (for the PokeAPI source it is the Pokédex number).

use serde::{Deserialize, Serialize};

/// Opaque identifier shared by the two cards of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIdentity(pub u32);

impl CardIdentity {
    /// Create a new identity.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identity value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identity({})", self.0)
    }
}

impl From<u32> for CardIdentity {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let id = CardIdentity::new(25);
        assert_eq!(id.raw(), 25);
        assert_eq!(format!("{}", id), "Identity(25)");
        assert_eq!(CardIdentity::from(25), id);
    }
}
