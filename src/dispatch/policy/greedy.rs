//! Greedy policy: take the offer with the best immediate reward.

use super::trait_::Policy;
use crate::dispatch::requests::Requests;
use crate::dispatch::types::State;

/// Picks the offer with the highest immediate reward.
///
/// Ties go to the earliest offer. Ignores where the ride ends up, so it is
/// a myopic baseline that a trained agent should beat.
#[derive(Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for GreedyPolicy {
    fn select_action(&mut self, _state: &State, requests: &Requests, rewards: &[f64]) -> usize {
        debug_assert_eq!(requests.len(), rewards.len());
        let mut best = requests.len().saturating_sub(1); // idle
        let mut best_reward = f64::NEG_INFINITY;
        for (i, &r) in rewards.iter().enumerate() {
            if r > best_reward {
                best_reward = r;
                best = i;
            }
        }
        best
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
