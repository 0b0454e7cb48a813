//! outbreak-core: an agent-based epidemic spread simulation.
//!
//! Agents hold a 2D position and a health state (susceptible,
//! infected, recovered, dead). Each tick every agent takes a random
//! step, susceptible agents near infected agents may catch the
//! disease, and infected agents past the infection duration resolve
//! to recovered or dead. The run records a per-state tally after
//! every tick; that tally history is the engine's only output.
//!
//! Everything is deterministic given a seed — see [`rng::SimRng`].

pub mod agent;
pub mod config;
pub mod engine;
pub mod error;
pub mod movement;
pub mod population;
pub mod rng;
pub mod snapshot;
pub mod types;
