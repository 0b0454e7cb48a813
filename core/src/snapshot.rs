//! Per-tick population tallies.
//!
//! One StateCounts is recorded after initialization (tick 0) and
//! after every tick. The ordered history of tallies is the sole
//! artifact a run hands to reporting code.

use crate::agent::{Agent, HealthState};
use serde::{Deserialize, Serialize};

/// Count of agents per health state. The four counts always sum to
/// the population size — every agent classifies into exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
    pub dead: usize,
}

impl StateCounts {
    /// Reduce a population to its per-state tally.
    pub fn tally(population: &[Agent]) -> Self {
        let mut counts = Self {
            susceptible: 0,
            infected: 0,
            recovered: 0,
            dead: 0,
        };
        for agent in population {
            match agent.state {
                HealthState::Susceptible => counts.susceptible += 1,
                HealthState::Infected => counts.infected += 1,
                HealthState::Recovered => counts.recovered += 1,
                HealthState::Dead => counts.dead += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered + self.dead
    }
}
