//! Policy trait for the dispatch environment.

use crate::dispatch::requests::Requests;
use crate::dispatch::types::State;

/// Chooses one of the ride offers available at a state.
pub trait Policy: Send {
    /// Selects an offer.
    ///
    /// # Arguments
    ///
    /// * `state` - Current driver state
    /// * `requests` - Offers at `state`, idle sentinel last
    /// * `rewards` - Immediate reward of each offer, aligned with `requests`
    ///
    /// # Returns
    ///
    /// A position in `requests` (not an action-space index).
    fn select_action(&mut self, state: &State, requests: &Requests, rewards: &[f64]) -> usize;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
