//! Fisher–Yates shuffle.

use crate::core::rng::GameRng;

/// Shuffle a slice in place.
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly drawn index in `[0, i]`. Slices of length 0 and 1 are left
/// untouched.
pub fn shuffle<T>(items: &mut [T], rng: &mut GameRng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_index(0..=i);
        items.swap(i, j);
    }
}
