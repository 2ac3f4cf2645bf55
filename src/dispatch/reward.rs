//! Reward function for the dispatch environment.
//!
//! Revenue is earned only on the paid leg; driving cost applies to every
//! hour on the road, repositioning included.

use super::config::CabConfig;
use super::trip::{Trip, IDLE_HOURS};

/// Computes rewards for the dispatch environment.
pub struct RewardComputer;

impl RewardComputer {
    /// Reward for a planned trip.
    ///
    /// # Components
    ///
    /// - **Idle**: `-C` for the hour spent waiting.
    /// - **Ride**: `R × drop_hours - C × (pickup_hours + drop_hours)`.
    pub fn compute(trip: &Trip, config: &CabConfig) -> f64 {
        match *trip {
            Trip::Idle { .. } => -config.cost_per_hour * IDLE_HOURS as f64,
            Trip::Ride {
                pickup_hours,
                drop_hours,
                ..
            } => {
                let revenue = config.revenue_per_hour * drop_hours as f64;
                let cost = config.cost_per_hour * (pickup_hours + drop_hours) as f64;
                revenue - cost
            }
        }
    }
}
