use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator for reproducible random draws
#[derive(Clone)]
pub struct DrawRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DrawRng {
    /// Create a new DrawRng with an optional seed.
    /// If seed is None, generates a random seed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        let rng = ChaCha8Rng::seed_from_u64(seed);
        DrawRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_produces_same_sequence() {
        let mut rng1 = DrawRng::new(Some(12345));
        let mut rng2 = DrawRng::new(Some(12345));

        for _ in 0..100 {
            assert_eq!(rng1.random_range(52), rng2.random_range(52));
        }
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut rng1 = DrawRng::new(Some(12345));
        let mut rng2 = DrawRng::new(Some(54321));

        let same = (0..100)
            .filter(|_| rng1.random_range(1000) == rng2.random_range(1000))
            .count();
        assert!(same < 5, "Different seeds should produce different sequences");
    }

    #[test]
    fn test_seed_getter() {
        let rng = DrawRng::new(Some(999));
        assert_eq!(rng.seed(), 999);
    }

    #[test]
    fn test_random_range_bounds() {
        let mut rng = DrawRng::new(Some(123));
        for _ in 0..1000 {
            assert!(rng.random_range(10) < 10);
        }
    }
}
