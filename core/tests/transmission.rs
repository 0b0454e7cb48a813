//! Transmission phase tests — the gate boundaries and the
//! phase-start exposure snapshot.

use outbreak_core::{agent::HealthState, config::SimParams, engine::SimEngine};

/// A bundle where everyone is in range of everyone all the time:
/// infection radius covers the whole area.
fn full_contact_bundle() -> SimParams {
    SimParams {
        population_size: 20,
        initial_infected: 3,
        area_size: 10.0,
        movement_radius: 5.0,
        infection_radius: 20.0,
        transmission_probability: 1.0,
        infection_duration: 3,
        death_probability: 0.0,
        simulation_steps: 1,
    }
}

#[test]
fn certain_transmission_in_full_contact_infects_every_susceptible() {
    let mut engine = SimEngine::new(full_contact_bundle(), 42).unwrap();
    let counts = *engine.tick();

    // Every susceptible agent had an infected neighbor in range at
    // phase start, and p = 1.0 makes the first contact draw succeed.
    assert_eq!(
        counts.susceptible, 0,
        "With p=1.0 and full coverage no agent stays susceptible, got {}",
        counts.susceptible
    );
    assert_eq!(counts.infected, 20, "Everyone should be infected after tick 1");
    assert_eq!(counts.total(), 20);
}

#[test]
fn zero_transmission_probability_never_infects() {
    let mut params = full_contact_bundle();
    params.transmission_probability = 0.0;
    params.simulation_steps = 20;

    let mut engine = SimEngine::new(params, 99).unwrap();
    let history = engine.run();

    for (tick, counts) in history.iter().enumerate() {
        assert_eq!(
            counts.susceptible, 17,
            "No new infections may ever occur with p=0.0; tick {tick} lost susceptibles"
        );
    }
}

#[test]
fn zero_infection_radius_never_infects_spread_out_agents() {
    // With radius 0 transmission needs exactly coincident positions,
    // which continuous uniform placement makes a measure-zero event.
    let mut params = full_contact_bundle();
    params.infection_radius = 0.0;
    params.movement_radius = 0.0;
    params.simulation_steps = 5;

    let mut engine = SimEngine::new(params, 1234).unwrap();
    let positions_distinct = {
        let pop = engine.population();
        pop.iter().enumerate().all(|(i, a)| {
            pop.iter()
                .take(i)
                .all(|b| a.distance_to(b) > 0.0)
        })
    };
    assert!(positions_distinct, "Seed 1234 must place all agents apart");

    let history = engine.run();
    assert_eq!(
        history.last().unwrap().susceptible,
        17,
        "Radius 0 with distinct positions must never transmit"
    );
}

#[test]
fn freshly_infected_agents_age_exactly_one_tick() {
    // p=1.0 with full coverage converts every susceptible in one
    // tick. Phase 3 includes agents infected this same tick, so
    // after tick 1 every clock — seed infections and fresh ones —
    // reads exactly 1.
    let mut params = full_contact_bundle();
    params.infection_duration = 5;
    let mut engine = SimEngine::new(params, 7).unwrap();
    engine.tick();

    for agent in engine.population() {
        assert_eq!(agent.state, HealthState::Infected);
        assert_eq!(
            agent.infection_age, 1,
            "Every clock reads 1 after the first tick"
        );
    }
}
