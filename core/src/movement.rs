//! Per-agent random motion.

use crate::agent::{Agent, HealthState};
use crate::config::SimParams;
use crate::rng::SimRng;

/// Perturb one agent's position by an independent uniform delta in
/// [-movement_radius, movement_radius] on each axis (x drawn first),
/// clamping each coordinate into [0, area_size]. Agents stick to the
/// wall rather than reflecting.
///
/// Dead agents never move and consume no draws.
pub fn move_agent(agent: &mut Agent, params: &SimParams, rng: &mut SimRng) {
    if agent.state == HealthState::Dead {
        return;
    }
    let dx = rng.uniform(-params.movement_radius, params.movement_radius);
    let dy = rng.uniform(-params.movement_radius, params.movement_radius);
    agent.x = (agent.x + dx).clamp(0.0, params.area_size);
    agent.y = (agent.y + dy).clamp(0.0, params.area_size);
}
