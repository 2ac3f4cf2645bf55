//! Trip planning: how long each leg of an action takes and where it ends.
//!
//! Both the reward and the transition are derived from one [`Trip`], so they
//! always agree on the hour and day at which each leg starts.

use super::clock::Calendar;
use super::time_matrix::TravelTimes;
use super::types::{Action, State};

/// Hours the driver waits when no ride is accepted.
pub const IDLE_HOURS: u32 = 1;

/// The timed outcome of taking an action from a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trip {
    /// No ride accepted: the cab stays put for [`IDLE_HOURS`].
    Idle { next_state: State },
    /// A ride: optional repositioning to the pickup, then the paid leg.
    Ride {
        /// Hours from the current location to the pickup (0 if already there).
        pickup_hours: u32,
        /// Hours from pickup to drop, with the passenger on board.
        drop_hours: u32,
        next_state: State,
    },
}

impl Trip {
    /// Plans `action` from `state` using `times` for leg durations.
    ///
    /// The drop leg is looked up at the hour and day reached after the
    /// pickup leg.
    pub fn plan<T: TravelTimes + ?Sized>(
        state: State,
        action: Action,
        times: &T,
        calendar: &Calendar,
    ) -> Self {
        if action.is_idle() {
            return Trip::Idle {
                next_state: calendar.advance_state(state, IDLE_HOURS),
            };
        }

        let (mut hour, mut day) = (state.hour, state.day);
        let mut pickup_hours = 0;
        if state.location != action.pickup {
            pickup_hours = times.travel_time(state.location, action.pickup, hour, day);
            (hour, day) = calendar.advance(hour, day, pickup_hours);
        }

        let drop_hours = times.travel_time(action.pickup, action.drop, hour, day);
        let (hour, day) = calendar.advance(hour, day, drop_hours);

        Trip::Ride {
            pickup_hours,
            drop_hours,
            next_state: State::new(action.drop, hour, day),
        }
    }

    /// Hours this trip adds to the episode clock.
    pub fn elapsed_hours(&self) -> u32 {
        match self {
            Trip::Idle { .. } => IDLE_HOURS,
            Trip::Ride {
                pickup_hours,
                drop_hours,
                ..
            } => pickup_hours + drop_hours,
        }
    }

    /// State reached at the end of the trip.
    pub fn next_state(&self) -> State {
        match self {
            Trip::Idle { next_state } | Trip::Ride { next_state, .. } => *next_state,
        }
    }
}
