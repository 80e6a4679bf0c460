//! Combat simulation for SORTIE.
//!
//! Owns the hecs world, runs the per-tick systems and resolves collisions
//! and damage. Headless and deterministic for a given seed and input stream.

pub mod boss_slot;
pub mod collision;
pub mod combat;
pub mod dynamics;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use sortie_ai as ai;
pub use sortie_core as core;
