//! Population factory tests.

use outbreak_core::{
    agent::HealthState, config::SimParams, population, rng::SimRng,
};

fn bundle(population_size: usize, initial_infected: usize, area_size: f64) -> SimParams {
    let mut p = SimParams::default_test();
    p.population_size = population_size;
    p.initial_infected = initial_infected;
    p.area_size = area_size;
    p
}

#[test]
fn spawn_produces_exact_population_size() {
    let params = bundle(100, 10, 50.0);
    let mut rng = SimRng::new(42);
    let population = population::spawn(&params, &mut rng);
    assert_eq!(
        population.len(),
        100,
        "Expected 100 agents, got {}",
        population.len()
    );
}

#[test]
fn spawn_infects_exactly_the_configured_count() {
    let params = bundle(100, 10, 50.0);
    let mut rng = SimRng::new(42);
    let population = population::spawn(&params, &mut rng);

    let infected = population
        .iter()
        .filter(|a| a.state == HealthState::Infected)
        .count();
    let susceptible = population
        .iter()
        .filter(|a| a.state == HealthState::Susceptible)
        .count();

    assert_eq!(infected, 10, "Expected 10 initially infected, got {infected}");
    assert_eq!(
        susceptible, 90,
        "Everyone not infected must start susceptible, got {susceptible}"
    );
}

#[test]
fn spawn_places_everyone_inside_the_area() {
    let params = bundle(500, 0, 25.0);
    let mut rng = SimRng::new(99);
    let population = population::spawn(&params, &mut rng);

    for (i, agent) in population.iter().enumerate() {
        assert!(
            (0.0..=25.0).contains(&agent.x) && (0.0..=25.0).contains(&agent.y),
            "Agent {i} at ({}, {}) is outside [0, 25]²",
            agent.x,
            agent.y
        );
    }
}

#[test]
fn spawn_starts_every_infection_clock_at_zero() {
    let params = bundle(50, 50, 10.0);
    let mut rng = SimRng::new(7);
    let population = population::spawn(&params, &mut rng);
    assert!(
        population.iter().all(|a| a.infection_age == 0),
        "All infection clocks must start at 0"
    );
}

#[test]
fn spawn_handles_the_degenerate_bundles() {
    let mut rng = SimRng::new(1);

    let empty = population::spawn(&bundle(0, 0, 10.0), &mut rng);
    assert!(empty.is_empty());

    let all_infected = population::spawn(&bundle(20, 20, 10.0), &mut rng);
    assert!(
        all_infected
            .iter()
            .all(|a| a.state == HealthState::Infected),
        "initial_infected == population_size must infect everyone"
    );
}
