//! Simulation parameters.
//!
//! A parameter bundle is immutable for the whole run. Validation
//! happens once, before any agent is created — a malformed bundle is
//! rejected at the boundary, never silently clamped mid-run.

use crate::error::{SimError, SimResult};
use crate::types::Tick;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimParams {
    /// Total number of agents. Fixed for the run's lifetime.
    pub population_size: usize,
    /// Agents starting in the Infected state, chosen uniformly
    /// without replacement. Must not exceed population_size.
    pub initial_infected: usize,
    /// The area spans [0, area_size] in both x and y.
    pub area_size: f64,
    /// Maximum distance an agent can move along each axis per tick.
    pub movement_radius: f64,
    /// Maximum contact distance at which transmission can occur.
    pub infection_radius: f64,
    /// Probability that one in-range contact transmits, per tick.
    pub transmission_probability: f64,
    /// Ticks an agent stays Infected before the outcome resolves.
    pub infection_duration: Tick,
    /// Probability of death (vs recovery) at outcome resolution.
    pub death_probability: f64,
    /// Number of ticks to run.
    pub simulation_steps: Tick,
}

impl SimParams {
    /// Load a parameter bundle from a JSON file. The bundle is
    /// validated after parsing.
    pub fn from_json_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let params: SimParams = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        params.validate()?;
        Ok(params)
    }

    /// Reject any bundle the engine cannot run. Returns the first
    /// violated constraint.
    pub fn validate(&self) -> SimResult<()> {
        fn invalid(name: &'static str, reason: impl Into<String>) -> SimResult<()> {
            Err(SimError::InvalidParameter {
                name,
                reason: reason.into(),
            })
        }

        if self.initial_infected > self.population_size {
            return invalid(
                "initial_infected",
                format!(
                    "{} exceeds population_size {}",
                    self.initial_infected, self.population_size
                ),
            );
        }
        if !self.area_size.is_finite() || self.area_size <= 0.0 {
            return invalid("area_size", format!("must be finite and > 0, got {}", self.area_size));
        }
        if !self.movement_radius.is_finite() || self.movement_radius < 0.0 {
            return invalid(
                "movement_radius",
                format!("must be finite and >= 0, got {}", self.movement_radius),
            );
        }
        if !self.infection_radius.is_finite() || self.infection_radius < 0.0 {
            return invalid(
                "infection_radius",
                format!("must be finite and >= 0, got {}", self.infection_radius),
            );
        }
        if !(0.0..=1.0).contains(&self.transmission_probability) {
            return invalid(
                "transmission_probability",
                format!("must be in [0, 1], got {}", self.transmission_probability),
            );
        }
        if self.infection_duration == 0 {
            return invalid("infection_duration", "must be >= 1");
        }
        if !(0.0..=1.0).contains(&self.death_probability) {
            return invalid(
                "death_probability",
                format!("must be in [0, 1], got {}", self.death_probability),
            );
        }
        Ok(())
    }

    /// Canonical small bundle used throughout the test suite.
    pub fn default_test() -> Self {
        Self {
            population_size: 50,
            initial_infected: 5,
            area_size: 100.0,
            movement_radius: 5.0,
            infection_radius: 5.0,
            transmission_probability: 0.3,
            infection_duration: 10,
            death_probability: 0.02,
            simulation_steps: 10,
        }
    }
}
