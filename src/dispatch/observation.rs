//! One-hot encodings of states and state-action pairs for network input.

use super::config::CabConfig;
use super::types::{Action, State};

/// Builds flat one-hot vectors from states and actions.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Encodes a state-action pair.
    ///
    /// The vector has length `m + t + d + m + m` with structure:
    /// ```text
    /// [location(m)] ++ [hour(t)] ++ [day(d)] ++ [pickup(m)] ++ [drop(m)]
    /// ```
    ///
    /// Components must be in range; an out-of-range component panics.
    pub fn encode_state_action(state: &State, action: &Action, config: &CabConfig) -> Vec<f64> {
        let mut obs = vec![0.0; config.state_action_dim()];
        Self::fill_state(&mut obs, state, config);
        assert!(action.pickup < config.n_locations, "pickup out of range");
        assert!(action.drop < config.n_locations, "drop out of range");
        let base = config.state_dim();
        obs[base + action.pickup] = 1.0;
        obs[base + config.n_locations + action.drop] = 1.0;
        obs
    }

    /// Encodes a state alone: `[location(m)] ++ [hour(t)] ++ [day(d)]`.
    pub fn encode_state(state: &State, config: &CabConfig) -> Vec<f64> {
        let mut obs = vec![0.0; config.state_dim()];
        Self::fill_state(&mut obs, state, config);
        obs
    }

    fn fill_state(obs: &mut [f64], state: &State, config: &CabConfig) {
        assert!(state.location < config.n_locations, "location out of range");
        assert!(state.hour < config.n_hours, "hour out of range");
        assert!(state.day < config.n_days, "day out of range");
        obs[state.location] = 1.0;
        obs[config.n_locations + state.hour] = 1.0;
        obs[config.n_locations + config.n_hours + state.day] = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_positions(v: &[f64]) -> Vec<usize> {
        v.iter()
            .enumerate()
            .filter(|(_, x)| **x == 1.0)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn state_action_has_five_hot_entries() {
        let config = CabConfig::default();
        let obs = ObservationBuilder::encode_state_action(
            &State::new(2, 10, 3),
            &Action::new(1, 4),
            &config,
        );
        assert_eq!(obs.len(), config.state_action_dim());
        // 2 | 5+10 | 29+3 | 36+1 | 41+4
        assert_eq!(hot_positions(&obs), vec![2, 15, 32, 37, 45]);
        assert_eq!(obs.iter().sum::<f64>(), 5.0);
    }

    #[test]
    fn idle_action_still_sets_pickup_and_drop_blocks() {
        let config = CabConfig::default();
        let obs =
            ObservationBuilder::encode_state_action(&State::new(0, 0, 0), &Action::IDLE, &config);
        assert_eq!(hot_positions(&obs), vec![0, 5, 29, 36, 41]);
    }

    #[test]
    fn state_only_encoding() {
        let config = CabConfig::default();
        let obs = ObservationBuilder::encode_state(&State::new(4, 23, 6), &config);
        assert_eq!(obs.len(), config.state_dim());
        assert_eq!(hot_positions(&obs), vec![4, 28, 35]);
    }

    #[test]
    #[should_panic(expected = "pickup out of range")]
    fn out_of_range_pickup_panics() {
        let config = CabConfig::default();
        ObservationBuilder::encode_state_action(&State::new(0, 0, 0), &Action::new(5, 0), &config);
    }

    #[test]
    #[should_panic(expected = "drop out of range")]
    fn out_of_range_drop_panics() {
        let config = CabConfig::default();
        ObservationBuilder::encode_state_action(&State::new(0, 0, 0), &Action::new(1, 5), &config);
    }

    #[test]
    #[should_panic]
    fn out_of_range_hour_panics() {
        let config = CabConfig::default();
        ObservationBuilder::encode_state(&State::new(0, 24, 0), &config);
    }
}
