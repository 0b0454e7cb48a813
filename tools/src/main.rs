//! sim-runner: headless runner for the outbreak simulation.
//!
//! Usage:
//!   sim-runner --seed 12345 --steps 50
//!   sim-runner --params scenario.json --json > history.json
//!
//! Prints the per-tick state tallies as an aligned table, or as a
//! JSON array with --json. Individual flags override whatever the
//! parameter file (or the built-in defaults) provides.

use anyhow::Result;
use outbreak_core::{config::SimParams, engine::SimEngine, snapshot::StateCounts};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let json_output = args.iter().any(|a| a == "--json");

    let mut params = match args.windows(2).find(|w| w[0] == "--params") {
        Some(w) => SimParams::from_json_file(&w[1])?,
        None => default_params(),
    };
    params.simulation_steps = parse_arg(&args, "--steps", params.simulation_steps);
    params.population_size = parse_arg(&args, "--population", params.population_size);
    params.initial_infected = parse_arg(&args, "--infected", params.initial_infected);

    if !json_output {
        println!("outbreak sim-runner");
        println!("  seed:       {seed}");
        println!("  population: {}", params.population_size);
        println!("  infected:   {}", params.initial_infected);
        println!("  steps:      {}", params.simulation_steps);
        println!();
    }

    let mut engine = SimEngine::new(params, seed)?;
    let history = engine.run().to_vec();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else {
        print_table(&history);
    }

    Ok(())
}

fn print_table(history: &[StateCounts]) {
    println!(
        "{:>5} {:>12} {:>9} {:>10} {:>6}",
        "tick", "susceptible", "infected", "recovered", "dead"
    );
    for (tick, counts) in history.iter().enumerate() {
        println!(
            "{:>5} {:>12} {:>9} {:>10} {:>6}",
            tick, counts.susceptible, counts.infected, counts.recovered, counts.dead
        );
    }
}

/// The original exploratory scenario: 200 agents on a 100×100 area,
/// 5 seed infections, 50 steps.
fn default_params() -> SimParams {
    SimParams {
        population_size: 200,
        initial_infected: 5,
        area_size: 100.0,
        movement_radius: 5.0,
        infection_radius: 5.0,
        transmission_probability: 0.3,
        infection_duration: 10,
        death_probability: 0.02,
        simulation_steps: 50,
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
