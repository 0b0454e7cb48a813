//! Initial population construction.

use crate::agent::Agent;
use crate::config::SimParams;
use crate::rng::SimRng;

/// Build the initial population: every agent at an independently
/// uniform position in [0, area_size]², all Susceptible, then exactly
/// `initial_infected` distinct agents flipped to Infected.
///
/// Caller must have validated `params` — in particular
/// `initial_infected <= population_size`.
pub fn spawn(params: &SimParams, rng: &mut SimRng) -> Vec<Agent> {
    let mut population: Vec<Agent> = (0..params.population_size)
        .map(|_| {
            let x = rng.uniform(0.0, params.area_size);
            let y = rng.uniform(0.0, params.area_size);
            Agent::susceptible_at(x, y)
        })
        .collect();

    // Choose the initially infected without replacement: a partial
    // Fisher-Yates over the index vector, taking the first
    // `initial_infected` slots.
    let mut indices: Vec<usize> = (0..params.population_size).collect();
    for i in 0..params.initial_infected {
        let remaining = (params.population_size - i) as u64;
        let j = i + rng.next_u64_below(remaining) as usize;
        indices.swap(i, j);
        population[indices[i]].infect();
    }

    population
}
