//! Cab-dispatch environment.
//!
//! Each step: sample requests → agent picks one → reward → transition.
//! The environment only keeps the episode clock; the caller carries the
//! current state and supplies the travel-time table on every call.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::clock::{Calendar, EpisodeClock, EpisodePhase};
use super::config::CabConfig;
use super::error::{ConfigError, EnvError};
use super::observation::ObservationBuilder;
use super::requests::{RequestSampler, Requests};
use super::reward::RewardComputer;
use super::time_matrix::TravelTimes;
use super::trip::Trip;
use super::types::{Action, Location, State};

/// Result of [`CabEnvironment::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next_state: State,
    /// Hours added to the episode clock by this step.
    pub elapsed_hours: u32,
    /// Whether the episode ended; the clock has already been reset if so.
    pub is_terminal: bool,
}

/// Result of [`CabEnvironment::step`]: reward and transition together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub reward: f64,
    pub next_state: State,
    pub elapsed_hours: u32,
    pub is_terminal: bool,
}

/// What [`CabEnvironment::reset`] hands back.
#[derive(Debug, Clone, Copy)]
pub struct ResetInfo<'a> {
    pub action_space: &'a [Action],
    pub state_space: &'a [State],
    pub initial_state: State,
}

/// All ride actions for `n_locations` zones: idle first, then every
/// `(pickup, drop)` with `pickup != drop` in pickup-major order.
pub fn build_action_space(n_locations: usize) -> Vec<Action> {
    let mut space = Vec::with_capacity(n_locations * n_locations.saturating_sub(1) + 1);
    space.push(Action::IDLE);
    for pickup in 0..n_locations {
        for drop in (0..n_locations).filter(|&d| d != pickup) {
            space.push(Action::new(pickup, drop));
        }
    }
    space
}

/// Every `(location, hour, day)` combination, location-major.
pub fn build_state_space(n_locations: usize, n_hours: usize, n_days: usize) -> Vec<State> {
    let mut space = Vec::with_capacity(n_locations * n_hours * n_days);
    for location in 0..n_locations {
        for hour in 0..n_hours {
            for day in 0..n_days {
                space.push(State::new(location, hour, day));
            }
        }
    }
    space
}

/// Single-driver dispatch environment.
///
/// # Lifecycle
///
/// 1. Build with [`CabEnvironment::new`]; a random initial state is drawn once.
/// 2. Each step, call [`CabEnvironment::requests`] for the offers at the
///    current state, pick one, then call [`CabEnvironment::reward`] and
///    [`CabEnvironment::transition`] (or [`CabEnvironment::step`] for both).
/// 3. When a transition reports `is_terminal`, the clock is already back at
///    zero; start the next episode from [`CabEnvironment::reset`].
///
/// One instance serves one episode stream. Parallel rollouts need one
/// environment per worker.
#[derive(Debug)]
pub struct CabEnvironment {
    config: CabConfig,
    calendar: Calendar,
    action_space: Vec<Action>,
    state_space: Vec<State>,
    initial_state: State,
    clock: EpisodeClock,
    sampler: RequestSampler,
    rng: StdRng,
}

impl CabEnvironment {
    /// Creates an environment with a seeded random source.
    ///
    /// # Arguments
    ///
    /// * `config` - Static parameters, validated here
    /// * `seed` - Seed for the initial state and request draws
    pub fn new(config: CabConfig, seed: u64) -> Result<Self, EnvError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates an environment seeded from OS entropy.
    pub fn from_entropy(config: CabConfig) -> Result<Self, EnvError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: CabConfig, mut rng: StdRng) -> Result<Self, EnvError> {
        config.validate()?;

        let action_space = build_action_space(config.n_locations);
        let state_space = build_state_space(config.n_locations, config.n_hours, config.n_days);
        let initial_state = *state_space
            .choose(&mut rng)
            .ok_or(ConfigError::EmptyCalendar {
                hours: config.n_hours,
                days: config.n_days,
            })?;
        let sampler = RequestSampler::new(&config)?;

        debug!(
            "dispatch environment: {} actions, {} states, initial state {}",
            action_space.len(),
            state_space.len(),
            initial_state
        );

        let mut env = Self {
            calendar: Calendar::from_config(&config),
            clock: EpisodeClock::new(config.max_time),
            config,
            action_space,
            state_space,
            initial_state,
            sampler,
            rng,
        };
        env.reset();
        Ok(env)
    }

    /// Zeroes the episode clock.
    ///
    /// Always returns the initial state drawn at construction.
    pub fn reset(&mut self) -> ResetInfo<'_> {
        self.clock.restart();
        ResetInfo {
            action_space: &self.action_space,
            state_space: &self.state_space,
            initial_state: self.initial_state,
        }
    }

    /// Samples the ride offers available at `state`, idle sentinel last.
    pub fn requests(&mut self, state: &State) -> Result<Requests, EnvError> {
        self.sampler.sample(state, &self.action_space, &mut self.rng)
    }

    /// Reward for taking `action` from `state`. Pure.
    pub fn reward<T: TravelTimes + ?Sized>(&self, state: State, action: Action, times: &T) -> f64 {
        let trip = Trip::plan(state, action, times, &self.calendar);
        RewardComputer::compute(&trip, &self.config)
    }

    /// Applies `action` at `state`: advances the episode clock and returns the next state.
    ///
    /// If the clock passes `max_time`, the episode ends and the clock is reset
    /// before returning.
    pub fn transition<T: TravelTimes + ?Sized>(
        &mut self,
        state: State,
        action: Action,
        times: &T,
    ) -> Transition {
        let trip = Trip::plan(state, action, times, &self.calendar);
        self.advance(&trip)
    }

    /// Reward and transition computed from a single trip plan.
    pub fn step<T: TravelTimes + ?Sized>(
        &mut self,
        state: State,
        action: Action,
        times: &T,
    ) -> StepResult {
        let trip = Trip::plan(state, action, times, &self.calendar);
        let reward = RewardComputer::compute(&trip, &self.config);
        let transition = self.advance(&trip);
        StepResult {
            reward,
            next_state: transition.next_state,
            elapsed_hours: transition.elapsed_hours,
            is_terminal: transition.is_terminal,
        }
    }

    fn advance(&mut self, trip: &Trip) -> Transition {
        let elapsed_hours = trip.elapsed_hours();
        let next_state = trip.next_state();
        let phase = self.clock.advance(elapsed_hours);
        trace!(
            "+{}h -> {} (clock {}h)",
            elapsed_hours,
            next_state,
            self.clock.elapsed()
        );

        let is_terminal = phase == EpisodePhase::Terminated;
        if is_terminal {
            debug!(
                "episode over after {}h (limit {}h), resetting clock",
                self.clock.elapsed(),
                self.clock.max_time()
            );
            self.reset();
        }

        Transition {
            next_state,
            elapsed_hours,
            is_terminal,
        }
    }

    /// One-hot encoding of a state-action pair.
    pub fn encode_state_action(&self, state: &State, action: &Action) -> Vec<f64> {
        ObservationBuilder::encode_state_action(state, action, &self.config)
    }

    /// One-hot encoding of a state.
    pub fn encode_state(&self, state: &State) -> Vec<f64> {
        ObservationBuilder::encode_state(state, &self.config)
    }

    /// Position of `action` in the action space, if it is a valid action.
    pub fn action_index(&self, action: &Action) -> Option<usize> {
        if action.is_idle() {
            return Some(0);
        }
        let m = self.config.n_locations;
        if action.pickup >= m || action.drop >= m || action.pickup == action.drop {
            return None;
        }
        // Each pickup owns m - 1 slots; drops above the pickup shift down by one.
        let drop_slot = if action.drop > action.pickup {
            action.drop - 1
        } else {
            action.drop
        };
        Some(1 + action.pickup * (m - 1) + drop_slot)
    }

    pub fn config(&self) -> &CabConfig {
        &self.config
    }

    pub fn action_space(&self) -> &[Action] {
        &self.action_space
    }

    pub fn state_space(&self) -> &[State] {
        &self.state_space
    }

    /// Initial state drawn at construction.
    pub fn initial_state(&self) -> State {
        self.initial_state
    }

    /// Number of actions, `m(m - 1) + 1`.
    pub fn action_size(&self) -> usize {
        self.action_space.len()
    }

    /// Hours elapsed in the current episode.
    pub fn total_time(&self) -> u32 {
        self.clock.elapsed()
    }

    /// Episode length in hours.
    pub fn max_time(&self) -> u32 {
        self.clock.max_time()
    }

    /// Number of city zones.
    pub fn n_locations(&self) -> Location {
        self.config.n_locations
    }
}
