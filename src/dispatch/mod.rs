//! Single-driver cab-dispatch environment.
//!
//! A driver in one of `m` city zones is offered a random set of rides each
//! step, accepts one (or idles), and is paid for the hours a passenger is on
//! board minus the cost of every hour on the road. Travel durations come
//! from a caller-supplied [`TravelTimes`] table.

pub mod clock;
pub mod config;
pub mod environment;
pub mod error;
pub mod metrics;
pub mod observation;
pub mod policy;
pub mod requests;
pub mod reward;
pub mod time_matrix;
pub mod trip;
pub mod types;

#[cfg(test)]
mod tests;

pub use clock::{Calendar, EpisodeClock, EpisodePhase};
pub use config::CabConfig;
pub use environment::{
    build_action_space, build_state_space, CabEnvironment, ResetInfo, StepResult, Transition,
};
pub use error::{ConfigError, EnvError};
pub use metrics::EvaluationMetrics;
pub use observation::ObservationBuilder;
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
pub use requests::{RequestSampler, Requests};
pub use reward::RewardComputer;
pub use time_matrix::{TimeMatrix, TravelTimes};
pub use trip::Trip;
pub use types::{Action, Location, State};
