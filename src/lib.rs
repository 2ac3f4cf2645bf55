//! cab_dispatch - a cab-driver dispatch problem as a Markov Decision Process
//!
//! An environment for training reinforcement-learning agents: state and
//! action spaces, Poisson ride requests, a revenue-minus-cost reward, and
//! time-dependent transitions driven by a travel-time table.

pub mod dispatch;

pub use dispatch::{
    Action, CabConfig, CabEnvironment, EnvError, Location, Requests, State, StepResult, TimeMatrix,
    Transition, TravelTimes,
};
