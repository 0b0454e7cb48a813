//! Shared primitive types used across the entire simulation.

/// A simulation tick. One tick = one simulated day.
pub type Tick = u64;
