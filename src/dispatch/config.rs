//! Configuration for the cab-dispatch environment.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, EnvError};
use super::types::{Action, Location, State};

/// Static parameters of the dispatch decision process.
///
/// Controls the size of the city and calendar, the economics of a ride,
/// the episode length, and passenger demand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CabConfig {
    // --- Geometry and calendar ---
    /// Number of city zones m.
    pub n_locations: usize,
    /// Hours in a day t.
    pub n_hours: usize,
    /// Days in a week d.
    pub n_days: usize,

    // --- Economics ---
    /// Fuel and other costs per hour of driving C.
    pub cost_per_hour: f64,
    /// Revenue per hour with a passenger on board R.
    pub revenue_per_hour: f64,

    // --- Episode ---
    /// Episode length in hours; the episode ends once the clock exceeds it.
    pub max_time: u32,

    // --- Demand ---
    /// Upper bound on the ride requests offered in one step.
    pub max_requests: usize,
    /// Poisson request rate per location.
    pub demand_rates: BTreeMap<Location, f64>,
}

impl CabConfig {
    /// Checks that the parameters describe a usable environment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_locations < 2 {
            return Err(ConfigError::TooFewLocations(self.n_locations));
        }
        if self.n_hours == 0 || self.n_days == 0 {
            return Err(ConfigError::EmptyCalendar {
                hours: self.n_hours,
                days: self.n_days,
            });
        }
        if self.max_time == 0 {
            return Err(ConfigError::ZeroMaxTime);
        }
        for location in 0..self.n_locations {
            self.demand_rate(location)?;
        }
        Ok(())
    }

    /// Returns the request rate for a location.
    pub fn demand_rate(&self, location: Location) -> Result<f64, ConfigError> {
        let rate = *self
            .demand_rates
            .get(&location)
            .ok_or(ConfigError::MissingDemandRate(location))?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::InvalidDemandRate { location, rate });
        }
        Ok(rate)
    }

    /// Number of actions: every ordered pair of distinct locations plus idle.
    pub fn action_size(&self) -> usize {
        self.n_locations * (self.n_locations - 1) + 1
    }

    /// Number of states: every (location, hour, day) combination.
    pub fn state_size(&self) -> usize {
        self.n_locations * self.n_hours * self.n_days
    }

    /// Length of the state-only encoding.
    pub fn state_dim(&self) -> usize {
        self.n_locations + self.n_hours + self.n_days
    }

    /// Length of the state-action encoding.
    pub fn state_action_dim(&self) -> usize {
        self.state_dim() + 2 * self.n_locations
    }

    /// Checks that every component of `state` is in range.
    pub fn check_state(&self, state: &State) -> Result<(), EnvError> {
        check("location", state.location, self.n_locations)?;
        check("hour", state.hour, self.n_hours)?;
        check("day", state.day, self.n_days)
    }

    /// Checks that `action` is the idle sentinel or a pair of distinct, in-range locations.
    pub fn check_action(&self, action: &Action) -> Result<(), EnvError> {
        check("pickup", action.pickup, self.n_locations)?;
        check("drop", action.drop, self.n_locations)?;
        if !action.is_idle() && action.pickup == action.drop {
            return Err(EnvError::DegenerateAction(action.pickup));
        }
        Ok(())
    }
}

fn check(what: &'static str, value: usize, bound: usize) -> Result<(), EnvError> {
    if value < bound {
        Ok(())
    } else {
        Err(EnvError::OutOfRange { what, value, bound })
    }
}

impl Default for CabConfig {
    fn default() -> Self {
        let demand_rates = BTreeMap::from([(0, 2.0), (1, 12.0), (2, 4.0), (3, 7.0), (4, 8.0)]);

        Self {
            n_locations: 5,
            n_hours: 24,
            n_days: 7,
            cost_per_hour: 5.0,
            revenue_per_hour: 9.0,
            max_time: 24 * 30,
            max_requests: 15,
            demand_rates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = CabConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.action_size(), 21);
        assert_eq!(cfg.state_size(), 5 * 24 * 7);
        assert_eq!(cfg.max_time, 720);
    }

    #[test]
    fn default_demand_rates() {
        let cfg = CabConfig::default();
        let expected = BTreeMap::from([(0, 2.0), (1, 12.0), (2, 4.0), (3, 7.0), (4, 8.0)]);
        assert_eq!(cfg.demand_rates, expected);
        assert_eq!(cfg.demand_rate(1), Ok(12.0));
    }

    #[test]
    fn encoding_dims_match() {
        let cfg = CabConfig::default();
        assert_eq!(cfg.state_dim(), 5 + 24 + 7);
        assert_eq!(cfg.state_action_dim(), 5 + 24 + 7 + 5 + 5);
    }

    #[test]
    fn single_location_rejected() {
        let cfg = CabConfig {
            n_locations: 1,
            ..CabConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::TooFewLocations(1)));
    }

    #[test]
    fn extra_location_without_rate_rejected() {
        let cfg = CabConfig {
            n_locations: 6,
            ..CabConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::MissingDemandRate(5)));
    }

    #[test]
    fn non_positive_rate_rejected() {
        let mut cfg = CabConfig::default();
        cfg.demand_rates.insert(3, 0.0);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidDemandRate {
                location: 3,
                rate: 0.0
            })
        );
    }

    #[test]
    fn empty_calendar_rejected() {
        let cfg = CabConfig {
            n_days: 0,
            ..CabConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::EmptyCalendar { hours: 24, days: 0 })
        ));
    }

    #[test]
    fn check_state_bounds() {
        let cfg = CabConfig::default();
        assert!(cfg.check_state(&State::new(4, 23, 6)).is_ok());
        assert!(matches!(
            cfg.check_state(&State::new(0, 24, 0)),
            Err(EnvError::OutOfRange { what: "hour", .. })
        ));
    }

    #[test]
    fn check_action_rejects_same_pickup_and_drop() {
        let cfg = CabConfig::default();
        assert!(cfg.check_action(&Action::IDLE).is_ok());
        assert!(cfg.check_action(&Action::new(1, 4)).is_ok());
        assert_eq!(
            cfg.check_action(&Action::new(2, 2)),
            Err(EnvError::DegenerateAction(2))
        );
        assert!(cfg.check_action(&Action::new(0, 5)).is_err());
    }
}
