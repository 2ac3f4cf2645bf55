//! Core types for the cab-dispatch decision process.
//!
//! Defines the driver state (where and when the cab is) and the ride
//! actions the driver can accept.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a city zone, in `[0, n_locations)`.
pub type Location = usize;

/// Position of the cab in space and time.
///
/// Ordering is location-major, then hour, then day, which is also the order
/// of the environment's state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    pub location: Location,
    /// Hour of day, in `[0, n_hours)`.
    pub hour: usize,
    /// Day of week, in `[0, n_days)`.
    pub day: usize,
}

impl State {
    /// Creates a new state.
    pub fn new(location: Location, hour: usize, day: usize) -> Self {
        Self {
            location,
            hour,
            day,
        }
    }
}

impl From<(Location, usize, usize)> for State {
    fn from((location, hour, day): (Location, usize, usize)) -> Self {
        Self::new(location, hour, day)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(loc {}, hour {}, day {})", self.location, self.hour, self.day)
    }
}

/// A ride offer: drive to `pickup`, then carry the passenger to `drop`.
///
/// [`Action::IDLE`] is the sentinel meaning "accept no ride this step".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Action {
    pub pickup: Location,
    pub drop: Location,
}

impl Action {
    /// The "no ride accepted" sentinel `(0, 0)`.
    pub const IDLE: Action = Action { pickup: 0, drop: 0 };

    /// Creates a new action.
    pub fn new(pickup: Location, drop: Location) -> Self {
        Self { pickup, drop }
    }

    /// Returns true for the idle sentinel.
    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

impl From<(Location, Location)> for Action {
    fn from((pickup, drop): (Location, Location)) -> Self {
        Self::new(pickup, drop)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_idle() {
            write!(f, "idle")
        } else {
            write!(f, "{} -> {}", self.pickup, self.drop)
        }
    }
}
