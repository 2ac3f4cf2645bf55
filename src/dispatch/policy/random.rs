//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::trait_::Policy;
use crate::dispatch::requests::Requests;
use crate::dispatch::types::State;

/// Picks uniformly among the offers, idle included.
///
/// Used for sanity checks and as a lower-bound baseline.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a seeded random policy.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _state: &State, requests: &Requests, _rewards: &[f64]) -> usize {
        self.rng.gen_range(0..requests.len())
    }

    fn name(&self) -> &str {
        "random"
    }
}
