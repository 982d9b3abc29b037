//! Slot filler: the shuffled department list spun before a reveal lands.

use rand::seq::SliceRandom;
use rand::Rng;

/// One fresh permutation of `universe`, followed by a copy of its first
/// element so the spin can wrap around onto it. Empty in, empty out.
pub fn build_filler<R: Rng + ?Sized>(universe: &[String], rng: &mut R) -> Vec<String> {
    let mut filler = universe.to_vec();
    filler.shuffle(rng);
    if let Some(first) = filler.first().cloned() {
        filler.push(first);
    }
    filler
}
