//! Calendar arithmetic and the episode clock.
//!
//! [`Calendar`] moves an (hour, day) pair forward by whole hours and is the
//! single place where the wrap-around rule lives. [`EpisodeClock`] counts the
//! hours elapsed in the current episode and reports when it is over.

use super::config::CabConfig;
use super::types::State;

/// Hour/day wrap-around for a `n_hours` × `n_days` week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub n_hours: usize,
    pub n_days: usize,
}

impl Calendar {
    /// Creates a calendar from the environment configuration.
    pub fn from_config(config: &CabConfig) -> Self {
        Self {
            n_hours: config.n_hours,
            n_days: config.n_days,
        }
    }

    /// Advances `(hour, day)` by `elapsed` hours.
    ///
    /// ```text
    /// hour' = (hour + e) mod t
    /// day'  = (day + (hour + e) div t) mod d
    /// ```
    pub fn advance(&self, hour: usize, day: usize, elapsed: u32) -> (usize, usize) {
        let total = hour + elapsed as usize;
        (
            total % self.n_hours,
            (day + total / self.n_hours) % self.n_days,
        )
    }

    /// Returns `state` moved forward in time by `elapsed` hours, same location.
    pub fn advance_state(&self, state: State, elapsed: u32) -> State {
        let (hour, day) = self.advance(state.hour, state.day, elapsed);
        State::new(state.location, hour, day)
    }
}

/// Phase of the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Elapsed time is within the episode length.
    Running,
    /// Elapsed time has passed the episode length; the clock must be restarted.
    Terminated,
}

/// Hours elapsed since the last reset, with the terminal check.
#[derive(Debug, Clone)]
pub struct EpisodeClock {
    elapsed: u32,
    max_time: u32,
    phase: EpisodePhase,
}

impl EpisodeClock {
    /// Creates a running clock at zero.
    pub fn new(max_time: u32) -> Self {
        Self {
            elapsed: 0,
            max_time,
            phase: EpisodePhase::Running,
        }
    }

    /// Adds `hours` to the clock and returns the resulting phase.
    ///
    /// The episode terminates once the elapsed time is strictly greater than
    /// `max_time`. Once terminated, the clock stays terminated until
    /// [`EpisodeClock::restart`].
    pub fn advance(&mut self, hours: u32) -> EpisodePhase {
        self.elapsed = self.elapsed.saturating_add(hours);
        if self.elapsed > self.max_time {
            self.phase = EpisodePhase::Terminated;
        }
        self.phase
    }

    /// Zeroes the clock and starts a new episode.
    pub fn restart(&mut self) {
        self.elapsed = 0;
        self.phase = EpisodePhase::Running;
    }

    /// Hours elapsed in the current episode.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Episode length in hours.
    pub fn max_time(&self) -> u32 {
        self.max_time
    }

    /// Phase of the current episode.
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }
}
