//! Per-tick systems operating on the simulation state.
//!
//! Systems are plain functions over the world and the engine's buffers.
//! They do not own state; all state lives in components or the engine.

pub mod adversaries;
pub mod boss;
pub mod cleanup;
pub mod pickups;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
