//! Scenario tests for the dispatch environment.

use rstest::rstest;

use super::*;

/// Table with the two legs of the worked ride example; every other entry is 1.
fn example_matrix(config: &CabConfig) -> TimeMatrix {
    TimeMatrix::from_fn(config, |o, d, h, day| match (o, d, h, day) {
        (2, 1, 10, 3) => 2,
        (1, 4, 12, 3) => 3,
        _ => 1,
    })
}

fn make_env() -> (CabEnvironment, TimeMatrix) {
    let config = CabConfig::default();
    let tm = example_matrix(&config);
    (CabEnvironment::new(config, 42).unwrap(), tm)
}

mod spaces {
    use super::*;

    #[rstest]
    #[case(2, 1, 1)]
    #[case(3, 5, 2)]
    #[case(5, 24, 7)]
    fn sizes_follow_configuration(#[case] m: usize, #[case] t: usize, #[case] d: usize) {
        let config = CabConfig {
            n_locations: m,
            n_hours: t,
            n_days: d,
            demand_rates: (0..m).map(|l| (l, 1.0)).collect(),
            ..CabConfig::default()
        };
        let env = CabEnvironment::new(config, 0).unwrap();
        assert_eq!(env.state_space().len(), m * t * d);
        assert_eq!(env.action_size(), m * (m - 1) + 1);
        assert_eq!(
            env.action_space().iter().filter(|a| a.is_idle()).count(),
            1
        );
    }

    #[test]
    fn state_action_encoding_has_five_ones_everywhere() {
        let (env, _) = make_env();
        for state in env.state_space().iter().step_by(37) {
            for action in env.action_space() {
                let v = env.encode_state_action(state, action);
                assert_eq!(v.iter().filter(|x| **x == 1.0).count(), 5);
                assert_eq!(v.iter().filter(|x| **x == 0.0).count(), v.len() - 5);
            }
        }
    }
}

mod reward_and_transition {
    use super::*;

    #[test]
    fn worked_ride_example() {
        let (mut env, tm) = make_env();
        let state = State::new(2, 10, 3);
        let action = Action::new(1, 4);

        assert_eq!(env.reward(state, action, &tm), 2.0);

        let before = env.total_time();
        let transition = env.transition(state, action, &tm);
        assert_eq!(transition.next_state, State::new(4, 15, 3));
        assert_eq!(transition.elapsed_hours, 5);
        assert!(!transition.is_terminal);
        assert_eq!(env.total_time(), before + 5);
    }

    #[test]
    fn worked_idle_example() {
        let (mut env, tm) = make_env();
        let state = State::new(2, 10, 3);

        assert_eq!(env.reward(state, Action::IDLE, &tm), -5.0);
        let transition = env.transition(state, Action::IDLE, &tm);
        assert_eq!(transition.next_state, State::new(2, 11, 3));
        assert_eq!(env.total_time(), 1);
    }

    #[test]
    fn idle_reward_is_constant() {
        let (env, tm) = make_env();
        for state in env.state_space() {
            assert_eq!(env.reward(*state, Action::IDLE, &tm), -5.0);
        }
    }

    #[rstest]
    #[case(State::new(0, 0, 0), State::new(0, 1, 0))]
    #[case(State::new(3, 22, 4), State::new(3, 23, 4))]
    #[case(State::new(3, 23, 4), State::new(3, 0, 5))]
    #[case(State::new(4, 23, 6), State::new(4, 0, 0))]
    fn idle_transition_advances_one_hour(#[case] state: State, #[case] expected: State) {
        let (mut env, tm) = make_env();
        assert_eq!(env.transition(state, Action::IDLE, &tm).next_state, expected);
    }

    #[test]
    fn reward_does_not_touch_clock() {
        let (env, tm) = make_env();
        env.reward(State::new(2, 10, 3), Action::new(1, 4), &tm);
        assert_eq!(env.total_time(), 0);
    }
}

mod episodes {
    use super::*;

    #[test]
    fn terminal_after_721_idle_hours() {
        let (mut env, tm) = make_env();
        let mut state = env.reset().initial_state;

        for _ in 0..720 {
            let t = env.transition(state, Action::IDLE, &tm);
            assert!(!t.is_terminal);
            state = t.next_state;
        }
        assert_eq!(env.total_time(), 720);

        let last = env.transition(state, Action::IDLE, &tm);
        assert!(last.is_terminal);
        assert_eq!(env.total_time(), 0);
    }

    #[test]
    fn long_ride_overshooting_limit_is_terminal() {
        let config = CabConfig {
            max_time: 10,
            ..CabConfig::default()
        };
        let tm = TimeMatrix::from_fn(&config, |_, _, _, _| 6);
        let mut env = CabEnvironment::new(config, 0).unwrap();
        let state = State::new(0, 0, 0);

        let first = env.step(state, Action::new(0, 1), &tm);
        assert!(!first.is_terminal);
        assert_eq!(env.total_time(), 6);

        let second = env.step(first.next_state, Action::new(0, 2), &tm);
        // 6 h to reach the pickup, 6 h to the drop: clock 18 > 10.
        assert_eq!(second.elapsed_hours, 12);
        assert!(second.is_terminal);
        assert_eq!(second.next_state, State::new(2, 18, 0));
        assert_eq!(env.total_time(), 0);
    }

    #[test]
    fn reset_is_idempotent() {
        let (mut env, tm) = make_env();
        let initial = env.initial_state();
        env.transition(initial, Action::IDLE, &tm);

        for _ in 0..3 {
            let info = env.reset();
            assert_eq!(info.initial_state, initial);
            assert_eq!(info.action_space.len(), 21);
            assert_eq!(info.state_space.len(), 840);
            assert_eq!(env.total_time(), 0);
        }
    }

    #[test]
    fn requests_always_offer_idle() {
        let (mut env, _) = make_env();
        let states: Vec<State> = env.state_space().iter().step_by(11).copied().collect();
        for state in states {
            let req = env.requests(&state).unwrap();
            assert!(req.len() <= 16);
            assert_eq!(req.indices.last(), Some(&0));
            assert_eq!(req.actions.last(), Some(&Action::IDLE));
            assert!(req.indices[..req.n_rides()].iter().all(|&i| i != 0));
        }
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = CabConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: CabConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn time_matrix_round_trip() {
        let config = CabConfig::default();
        let tm = example_matrix(&config);
        let json = serde_json::to_string(&tm).unwrap();
        let restored: TimeMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.get(2, 1, 10, 3), 2);
        assert_eq!(restored, tm);
    }
}
