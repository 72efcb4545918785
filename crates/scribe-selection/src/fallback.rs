//! Phase 3: uniform random pick when neither name nor corpus evidence won.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniformly random index in `0..len`. A seed makes the draw reproducible.
///
/// `len` must be non-zero; the engine rejects empty catalogues up front.
pub fn pick_index(len: usize, seed: Option<u64>) -> usize {
    debug_assert!(len > 0, "pick_index called with an empty catalogue");
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    rng.gen_range(0..len.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_option_is_always_picked() {
        for _ in 0..16 {
            assert_eq!(pick_index(1, None), 0);
        }
    }

    #[test]
    fn seeded_draws_are_reproducible_and_in_range() {
        for seed in 0..32 {
            let first = pick_index(7, Some(seed));
            assert!(first < 7);
            assert_eq!(first, pick_index(7, Some(seed)));
        }
    }
}
