//! The simulation engine — moves the population through time.
//!
//! TICK ORDER (fixed, documented, never reordered):
//!   Phase 1: Movement     — every agent takes a random step.
//!   Phase 2: Transmission — susceptible agents near an infected
//!                           agent may become infected.
//!   Phase 3: Progression  — infection clocks advance; agents at the
//!                           duration threshold resolve to Recovered
//!                           or Dead.
//!
//! RULES:
//!   - Each phase completes for all agents before the next begins.
//!   - Phase 2 reads a health-state snapshot fixed at phase start:
//!     agents infected during the phase never act as sources within
//!     the same tick.
//!   - All randomness flows through the engine's SimRng, in phase
//!     then agent-index order. Fixed seed means fixed history.
//!   - The transmission scan is exhaustive pairwise, O(n²) per tick.

use crate::{
    agent::{Agent, HealthState},
    config::SimParams,
    error::SimResult,
    movement::move_agent,
    population,
    rng::SimRng,
    snapshot::StateCounts,
    types::Tick,
};

pub struct SimEngine {
    params: SimParams,
    rng: SimRng,
    population: Vec<Agent>,
    current_tick: Tick,
    history: Vec<StateCounts>,
}

impl SimEngine {
    /// Validate the parameter bundle, build the initial population
    /// and record the tick-0 tally. Fails only on a malformed bundle
    /// — once constructed, a run cannot error.
    pub fn new(params: SimParams, seed: u64) -> SimResult<Self> {
        params.validate()?;
        let mut rng = SimRng::new(seed);
        let population = population::spawn(&params, &mut rng);
        let initial = StateCounts::tally(&population);
        log::info!(
            "run initialized: seed={seed} population={} infected={}",
            params.population_size,
            initial.infected
        );
        Ok(Self {
            params,
            rng,
            population,
            current_tick: 0,
            history: vec![initial],
        })
    }

    /// Advance one tick. This is the core simulation step.
    pub fn tick(&mut self) -> &StateCounts {
        self.current_tick += 1;

        // Phase 1 — movement. Order-independent: each agent moves
        // from only its own prior position.
        for agent in &mut self.population {
            move_agent(agent, &self.params, &mut self.rng);
        }

        // Phase 2 — transmission. The exposure set is fixed at phase
        // start; agents infected during the scan never join it, so
        // later scans in the same tick cannot see them as sources.
        let exposure_set: Vec<Agent> = self
            .population
            .iter()
            .filter(|a| a.state == HealthState::Infected)
            .cloned()
            .collect();
        for agent in &mut self.population {
            if agent.state != HealthState::Susceptible {
                continue;
            }
            for source in &exposure_set {
                if agent.distance_to(source) <= self.params.infection_radius
                    && self.rng.chance(self.params.transmission_probability)
                {
                    agent.infect();
                    // First successful exposure wins; drop the rest
                    // of the scan for this agent.
                    break;
                }
            }
        }

        // Phase 3 — progression. Agents infected this tick are
        // included; their clocks advance to 1.
        for agent in &mut self.population {
            if agent.state != HealthState::Infected {
                continue;
            }
            agent.infection_age += 1;
            if agent.infection_age >= self.params.infection_duration {
                agent.state = if self.rng.chance(self.params.death_probability) {
                    HealthState::Dead
                } else {
                    HealthState::Recovered
                };
            }
        }

        let counts = StateCounts::tally(&self.population);
        log::debug!(
            "tick={} s={} i={} r={} d={}",
            self.current_tick,
            counts.susceptible,
            counts.infected,
            counts.recovered,
            counts.dead
        );
        let idx = self.history.len();
        self.history.push(counts);
        &self.history[idx]
    }

    /// Run the configured number of steps. Returns the full history:
    /// `simulation_steps + 1` tallies, indexed by tick (entry 0 is
    /// the post-initialization tally).
    pub fn run(&mut self) -> &[StateCounts] {
        let steps = self.params.simulation_steps;
        for _ in 0..steps {
            self.tick();
        }
        log::info!(
            "run complete: {} ticks, final tally {:?}",
            self.current_tick,
            self.history.last()
        );
        &self.history
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Read-only view of the agents. Tests and reporting only;
    /// nothing outside the engine mutates the population.
    pub fn population(&self) -> &[Agent] {
        &self.population
    }

    /// Tallies recorded so far, one per completed tick plus tick 0.
    pub fn history(&self) -> &[StateCounts] {
        &self.history
    }
}
