// Demonstration: evaluate baseline dispatch policies on a synthetic city.
//
// Run from this repo root:
//   RUST_LOG=debug cargo run --example cab_env_demo -- --policy greedy --episodes 20

use std::env;

use cab_dispatch::dispatch::{
    CabConfig, CabEnvironment, EvaluationMetrics, GreedyPolicy, Policy, RandomPolicy, TimeMatrix,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("greedy");
    let episodes: usize = arg_value(&args, "--episodes")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = CabConfig::default();
    // Rush hours (7-9, 17-19) are slower; zones further apart take longer.
    let times = TimeMatrix::from_fn(&config, |origin, destination, hour, day| {
        if origin == destination {
            return 0;
        }
        let distance = origin.abs_diff(destination) as u32;
        let rush = matches!(hour, 7..=9 | 17..=19) && day < 5;
        distance + u32::from(rush) * 2 + ((origin + destination + day) % 3) as u32
    });

    let mut env = match CabEnvironment::new(config, seed) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Cannot build environment: {}", e);
            std::process::exit(1);
        }
    };

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::new(seed)),
        "greedy" => Box::new(GreedyPolicy::new()),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'greedy' or 'random'.", other);
            std::process::exit(2);
        }
    };

    match EvaluationMetrics::evaluate(&mut env, policy.as_mut(), &times, episodes) {
        Ok(metrics) => {
            println!("Policy: {}", policy.name());
            println!("{}", metrics);
        }
        Err(e) => {
            eprintln!("Evaluation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
