//! Seeded random number generation.
//!
//! Wraps a Xoshiro256** PRNG so every driver run is reproducible from its
//! seed alone.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Deterministic random number generator for script generation.
///
/// Given the same seed, always produces the same sequence.
///
/// # Example
///
/// ```rust
/// use rep_driver::SeedRng;
///
/// let mut a = SeedRng::new(12345);
/// let mut b = SeedRng::new(12345);
/// assert_eq!(a.gen_range(0..100), b.gen_range(0..100));
/// ```
pub struct SeedRng {
    seed: u64,
    rng: Xoshiro256StarStar,
}

impl SeedRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Get the seed used to create this RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random value in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Generate a boolean with the given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0.0, 1.0]"
        );
        self.rng.gen_bool(probability)
    }
}

/// Get the driver seed from the environment or generate a random one.
///
/// Prints the seed for reproduction. Use `REP_SEED=<seed>` to reproduce.
#[must_use]
pub fn seed_from_env() -> u64 {
    match std::env::var("REP_SEED") {
        Ok(s) => {
            let seed: u64 = s.parse().expect("REP_SEED must be a valid u64");
            println!("REP_SEED={} (from environment)", seed);
            seed
        }
        Err(_) => {
            let seed = rand::random::<u64>();
            println!("REP_SEED={} (randomly generated)", seed);
            seed
        }
    }
}
