//! Passenger request generation.
//!
//! Each step the driver is offered a random set of distinct rides. The
//! number of offers is Poisson-distributed with a rate that depends on the
//! current location, capped at [`CabConfig::max_requests`].

use log::trace;
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Poisson;

use super::config::CabConfig;
use super::error::{ConfigError, EnvError};
use super::types::{Action, State};

/// Ride offers for one step, idle sentinel last.
///
/// `indices[i]` is the position of `actions[i]` in the action space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requests {
    pub indices: Vec<usize>,
    pub actions: Vec<Action>,
}

impl Requests {
    /// Number of choices, including the idle sentinel.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always false: the idle sentinel is always offered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of real ride offers (excluding the idle sentinel).
    pub fn n_rides(&self) -> usize {
        self.actions.len().saturating_sub(1)
    }

    /// Iterates `(action_index, action)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Action)> + '_ {
        self.indices.iter().copied().zip(self.actions.iter().copied())
    }
}

/// Samples ride requests from a fixed action space.
#[derive(Debug, Clone)]
pub struct RequestSampler {
    /// One Poisson distribution per location.
    demand: Vec<Poisson>,
    max_requests: usize,
}

impl RequestSampler {
    /// Builds one demand distribution per location of `config`.
    pub fn new(config: &CabConfig) -> Result<Self, ConfigError> {
        let demand = (0..config.n_locations)
            .map(|location| {
                let rate = config.demand_rate(location)?;
                Poisson::new(rate).map_err(|_| ConfigError::InvalidDemandRate { location, rate })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            demand,
            max_requests: config.max_requests,
        })
    }

    /// Draws the number of ride offers at `state`'s location, capped.
    pub fn draw_count<R: Rng + ?Sized>(&self, state: &State, rng: &mut R) -> usize {
        let drawn: f64 = self.demand[state.location].sample(rng);
        (drawn as usize).min(self.max_requests)
    }

    /// Samples the ride offers available at `state`.
    ///
    /// Picks a Poisson count, then that many distinct non-idle indices from
    /// `action_space`, uniformly and without replacement. The idle sentinel
    /// (index 0) is always appended last.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        state: &State,
        action_space: &[Action],
        rng: &mut R,
    ) -> Result<Requests, EnvError> {
        let count = self.draw_count(state, rng);
        let available = action_space.len().saturating_sub(1);
        if count > available {
            return Err(EnvError::Sampling {
                requested: count,
                available,
            });
        }

        let mut indices: Vec<usize> = rand::seq::index::sample(rng, available, count)
            .into_iter()
            .map(|i| i + 1)
            .collect();
        let mut actions: Vec<Action> = indices.iter().map(|&i| action_space[i]).collect();

        indices.push(0);
        actions.push(Action::IDLE);

        trace!("{} ride requests at {}", count, state);
        Ok(Requests { indices, actions })
    }
}
