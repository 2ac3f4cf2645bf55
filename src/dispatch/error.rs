use thiserror::Error;

use super::types::Location;

/// Invalid static configuration, detected when an environment is built.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("At least 2 locations are required, got {0}")]
    TooFewLocations(usize),

    #[error("Calendar needs at least one hour and one day, got {hours} hours and {days} days")]
    EmptyCalendar { hours: usize, days: usize },

    #[error("No demand rate configured for location {0}")]
    MissingDemandRate(Location),

    #[error("Demand rate for location {location} must be positive and finite, got {rate}")]
    InvalidDemandRate { location: Location, rate: f64 },

    #[error("Episode length must be at least one hour")]
    ZeroMaxTime,
}

/// Errors surfaced by the dispatch environment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot sample {requested} distinct requests from {available} ride actions")]
    Sampling { requested: usize, available: usize },

    #[error("Travel-time table has {actual} entries, expected {expected}")]
    TimeMatrixShape { expected: usize, actual: usize },

    #[error("Pickup and drop are both location {0}; only the idle action may repeat a location")]
    DegenerateAction(Location),

    #[error("{what} {value} is out of range (must be < {bound})")]
    OutOfRange {
        what: &'static str,
        value: usize,
        bound: usize,
    },
}
