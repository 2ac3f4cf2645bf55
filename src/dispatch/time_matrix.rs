//! Travel-time lookup between city zones.
//!
//! The environment never builds travel times itself; it reads them through
//! the [`TravelTimes`] trait. [`TimeMatrix`] is the dense 4-D table
//! implementation, indexed `[origin][destination][hour][day]`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::CabConfig;
use super::error::EnvError;
use super::types::Location;

/// Source of travel durations, in whole hours.
pub trait TravelTimes {
    /// Hours needed to drive from `origin` to `destination` when leaving at
    /// `(hour, day)`.
    fn travel_time(&self, origin: Location, destination: Location, hour: usize, day: usize) -> u32;
}

/// Dense travel-time table of shape `[m, m, t, d]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeMatrix {
    n_locations: usize,
    n_hours: usize,
    n_days: usize,
    /// Row-major in `(origin, destination, hour, day)`.
    data: Vec<u32>,
}

impl TimeMatrix {
    /// Builds a table sized for `config` by evaluating `f(origin, destination, hour, day)`.
    pub fn from_fn<F>(config: &CabConfig, mut f: F) -> Self
    where
        F: FnMut(Location, Location, usize, usize) -> u32,
    {
        let (m, t, d) = (config.n_locations, config.n_hours, config.n_days);
        let mut data = Vec::with_capacity(m * m * t * d);
        for origin in 0..m {
            for destination in 0..m {
                for hour in 0..t {
                    for day in 0..d {
                        data.push(f(origin, destination, hour, day));
                    }
                }
            }
        }
        Self {
            n_locations: m,
            n_hours: t,
            n_days: d,
            data,
        }
    }

    /// Wraps a flat row-major buffer, checking its length against `config`.
    pub fn from_flat(config: &CabConfig, data: Vec<u32>) -> Result<Self, EnvError> {
        let expected = config.n_locations * config.n_locations * config.n_hours * config.n_days;
        if data.len() != expected {
            return Err(EnvError::TimeMatrixShape {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            n_locations: config.n_locations,
            n_hours: config.n_hours,
            n_days: config.n_days,
            data,
        })
    }

    /// Builds a table from nested vectors `[origin][destination][hour][day]`.
    ///
    /// Every level must be rectangular; the outer two levels must have the
    /// same length.
    pub fn from_nested(nested: Vec<Vec<Vec<Vec<u32>>>>) -> Result<Self, EnvError> {
        let m = nested.len();
        let t = nested.first().and_then(|o| o.first()).map_or(0, Vec::len);
        let d = nested
            .first()
            .and_then(|o| o.first())
            .and_then(|dst| dst.first())
            .map_or(0, Vec::len);
        let expected = m * m * t * d;

        let mut data = Vec::with_capacity(expected);
        for by_destination in nested {
            if by_destination.len() != m {
                return Err(EnvError::TimeMatrixShape {
                    expected,
                    actual: data.len() + by_destination.len() * t * d,
                });
            }
            for by_hour in by_destination {
                if by_hour.len() != t {
                    return Err(EnvError::TimeMatrixShape {
                        expected,
                        actual: data.len() + by_hour.len() * d,
                    });
                }
                for by_day in by_hour {
                    if by_day.len() != d {
                        return Err(EnvError::TimeMatrixShape {
                            expected,
                            actual: data.len() + by_day.len(),
                        });
                    }
                    data.extend(by_day);
                }
            }
        }

        Ok(Self {
            n_locations: m,
            n_hours: t,
            n_days: d,
            data,
        })
    }

    /// Returns `(n_locations, n_hours, n_days)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.n_locations, self.n_hours, self.n_days)
    }

    /// Whether this table covers the city and calendar of `config`.
    pub fn matches(&self, config: &CabConfig) -> bool {
        self.dims() == (config.n_locations, config.n_hours, config.n_days)
    }

    fn offset(&self, origin: Location, destination: Location, hour: usize, day: usize) -> usize {
        ((origin * self.n_locations + destination) * self.n_hours + hour) * self.n_days + day
    }

    /// Unchecked lookup; panics if any index is out of range.
    pub fn get(&self, origin: Location, destination: Location, hour: usize, day: usize) -> u32 {
        debug_assert!(origin < self.n_locations && destination < self.n_locations);
        debug_assert!(hour < self.n_hours && day < self.n_days);
        self.data[self.offset(origin, destination, hour, day)]
    }

    /// Bounds-checked lookup.
    pub fn try_get(
        &self,
        origin: Location,
        destination: Location,
        hour: usize,
        day: usize,
    ) -> Result<u32, EnvError> {
        let checks = [
            ("origin", origin, self.n_locations),
            ("destination", destination, self.n_locations),
            ("hour", hour, self.n_hours),
            ("day", day, self.n_days),
        ];
        for (what, value, bound) in checks {
            if value >= bound {
                return Err(EnvError::OutOfRange { what, value, bound });
            }
        }
        Ok(self.get(origin, destination, hour, day))
    }
}

impl TravelTimes for TimeMatrix {
    fn travel_time(&self, origin: Location, destination: Location, hour: usize, day: usize) -> u32 {
        self.get(origin, destination, hour, day)
    }
}
