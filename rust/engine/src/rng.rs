use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Seedable random source shared by shuffling and orientation draws.
///
/// Sessions that are not given a seed pick one from process entropy, so
/// repeated runs differ; the seed is kept so a session can be reproduced.
#[derive(Debug, Clone)]
pub struct SessionRng {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SessionRng {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Explicit seed when given, entropy otherwise.
    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new_with_seed(s),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Fair coin flip.
    pub fn flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
