//! Serialisable view of the simulation for renderers and HUD.

use serde::{Deserialize, Serialize};

use crate::components::{BeamSpan, LaserState};
use crate::enums::*;
use crate::types::SimTime;

/// Running totals kept by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub adversaries_spawned: u32,
    pub adversaries_defeated: u32,
    pub adversaries_escaped: u32,
    pub projectiles_created: u32,
    /// Creation requests refused at the projectile cap.
    pub projectiles_rejected: u32,
    pub bosses_defeated: u32,
    pub pickups_collected: u32,
    pub damage_taken: f32,
    pub score: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub weapon_level: u8,
    pub wingmen: usize,
    pub invulnerable: bool,
    pub live: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdversarySnapshot {
    pub id: u64,
    pub kind: AdversaryKind,
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub state: BehaviorState,
    pub alert: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSnapshot {
    pub id: u64,
    pub kind: ProjectileKind,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<BeamSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupSnapshot {
    pub id: u64,
    pub kind: PickupKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossSnapshot {
    pub kind: BossKind,
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub phase: u8,
    pub movement: BossMovement,
    pub laser: LaserState,
    pub invulnerable: bool,
    pub dying: bool,
}

/// Complete state at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    pub run_state: RunState,
    pub player: PlayerSnapshot,
    pub adversaries: Vec<AdversarySnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub pickups: Vec<PickupSnapshot>,
    pub boss: Option<BossSnapshot>,
    pub stats: CombatStats,
}
