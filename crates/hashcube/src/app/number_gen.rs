//! Random number generation workflow

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` uniformly distributed `i32` values
///
/// With a seed the output is reproducible; without one the generator is
/// seeded from the OS.
pub fn generate_numbers(count: usize, seed: Option<u64>) -> Vec<i32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let numbers: Vec<i32> = (0..count).map(|_| rng.r#gen::<i32>()).collect();
    tracing::debug!(count, seeded = seed.is_some(), "generated random numbers");
    numbers
}
