//! One individual in the simulated population.

use crate::types::Tick;
use serde::{Deserialize, Serialize};

/// Health state of an agent. Transitions are one-way:
/// Susceptible → Infected → Recovered or Dead. Dead is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthState {
    Susceptible,
    Infected,
    Recovered,
    Dead,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub x: f64,
    pub y: f64,
    pub state: HealthState,
    /// Ticks spent in the Infected state. Reset to 0 on infection;
    /// not meaningful once the agent leaves Infected.
    pub infection_age: Tick,
}

impl Agent {
    pub fn susceptible_at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            state: HealthState::Susceptible,
            infection_age: 0,
        }
    }

    /// Mark the agent infected, restarting its infection clock.
    pub fn infect(&mut self) {
        self.state = HealthState::Infected;
        self.infection_age = 0;
    }

    /// Euclidean distance to another agent's position.
    pub fn distance_to(&self, other: &Agent) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
