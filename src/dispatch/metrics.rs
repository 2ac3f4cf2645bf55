//! Evaluation metrics for the dispatch environment.
//!
//! Runs a policy for whole episodes and aggregates what it earned.

use std::fmt;

use log::debug;

use super::environment::CabEnvironment;
use super::error::EnvError;
use super::policy::Policy;
use super::time_matrix::TravelTimes;

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone)]
pub struct EvaluationMetrics {
    /// Mean total reward per episode.
    pub mean_episode_reward: f64,
    /// Mean number of decisions per episode.
    pub mean_steps: f64,
    /// Mean number of rides accepted per episode.
    pub mean_rides: f64,
    /// Mean number of idle decisions per episode.
    pub mean_idle_steps: f64,
    /// Mean hours on the clock at the end of an episode.
    pub mean_hours: f64,
    /// Number of episodes evaluated.
    pub n_episodes: usize,
}

/// Tracks per-episode statistics during evaluation.
#[derive(Debug, Default)]
struct EpisodeStats {
    total_reward: f64,
    steps: u32,
    rides: u32,
    idle_steps: u32,
    hours: u64,
}

impl EvaluationMetrics {
    /// Evaluates a policy over multiple episodes and returns aggregated metrics.
    ///
    /// Every episode starts from the environment's initial state and runs
    /// until a transition reports the end of the episode.
    ///
    /// # Arguments
    ///
    /// * `env` - The environment to evaluate in
    /// * `policy` - The policy to evaluate
    /// * `times` - Travel-time table
    /// * `n_episodes` - Number of episodes to run
    pub fn evaluate<T: TravelTimes + ?Sized>(
        env: &mut CabEnvironment,
        policy: &mut dyn Policy,
        times: &T,
        n_episodes: usize,
    ) -> Result<Self, EnvError> {
        let mut all_stats = Vec::with_capacity(n_episodes);

        for episode in 0..n_episodes {
            let mut state = env.reset().initial_state;
            let mut stats = EpisodeStats::default();

            loop {
                let requests = env.requests(&state)?;
                let rewards: Vec<f64> = requests
                    .actions
                    .iter()
                    .map(|&a| env.reward(state, a, times))
                    .collect();
                let choice = policy.select_action(&state, &requests, &rewards);
                let action = requests.actions[choice];

                let result = env.step(state, action, times);
                stats.total_reward += result.reward;
                stats.steps += 1;
                stats.hours += u64::from(result.elapsed_hours);
                if action.is_idle() {
                    stats.idle_steps += 1;
                } else {
                    stats.rides += 1;
                }

                state = result.next_state;
                if result.is_terminal {
                    break;
                }
            }

            debug!(
                "{} episode {}: reward {:.1}, {} rides, {} idle",
                policy.name(),
                episode,
                stats.total_reward,
                stats.rides,
                stats.idle_steps
            );
            all_stats.push(stats);
        }

        let n = all_stats.len().max(1) as f64;
        let mean = |f: fn(&EpisodeStats) -> f64| all_stats.iter().map(f).sum::<f64>() / n;

        Ok(Self {
            mean_episode_reward: mean(|s| s.total_reward),
            mean_steps: mean(|s| s.steps as f64),
            mean_rides: mean(|s| s.rides as f64),
            mean_idle_steps: mean(|s| s.idle_steps as f64),
            mean_hours: mean(|s| s.hours as f64),
            n_episodes,
        })
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes
        )?;
        writeln!(
            f,
            "  Mean episode reward:     {:.2}",
            self.mean_episode_reward
        )?;
        writeln!(f, "  Mean steps:              {:.1}", self.mean_steps)?;
        writeln!(f, "  Mean rides:              {:.1}", self.mean_rides)?;
        writeln!(f, "  Mean idle steps:         {:.1}", self.mean_idle_steps)?;
        writeln!(f, "  Mean hours:              {:.1}", self.mean_hours)
    }
}
