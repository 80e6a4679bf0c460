//! Host commands sent to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatCommand {
    /// Replace the held player input.
    SetInput { movement: Vec2, fire: bool },
    SetDifficulty { multiplier: f32 },
    Pause,
    Resume,
}
