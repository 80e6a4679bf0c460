//! Entity components.
//!
//! Components are plain data structs. Adversaries, projectiles and pickups
//! live in the hecs world as `(Body, X)` pairs; the player and the boss embed
//! their `Body` because there is exactly one of each.

use glam::Vec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Body, BossHandle, TargetRef};

/// Escort flying alongside the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wingman {
    /// Position relative to the player.
    pub offset: Vec2,
    pub fire_timer: f32,
}

/// The player craft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub hp: f32,
    pub max_hp: f32,
    /// Remaining invulnerability (seconds).
    pub invulnerable: f32,
    pub weapon_level: u8,
    pub fire_timer: f32,
    pub missile_timer: f32,
    pub wingmen: Vec<Wingman>,
}

/// Movement input supplied by the host each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Desired direction; clamped to unit length.
    pub movement: Vec2,
    pub fire: bool,
}

/// Shooting parameters of an adversary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub projectile: ProjectileKind,
    pub cooldown: f32,
    pub burst_count: u32,
    pub burst_delay: f32,
    /// 0 = wild, 1 = perfect.
    pub accuracy: f32,
}

/// Burst-fire controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BurstState {
    pub cooldown_timer: f32,
    /// Shots still owed in the current burst.
    pub remaining: u32,
    pub shot_timer: f32,
}

/// Adversary unit state.
#[derive(Debug, Clone, PartialEq)]
pub struct Adversary {
    pub kind: AdversaryKind,
    pub hp: f32,
    pub max_hp: f32,
    pub contact_damage: f32,
    pub score: u32,
    pub speed: f32,
    pub pattern: MovementPattern,
    pub state: BehaviorState,
    pub aggressive: bool,
    pub aggro_range: f32,
    /// Whether engage steers toward the player.
    pub pursuit_capable: bool,
    /// 0..=1
    pub alert: f32,
    pub pattern_time: f32,
    /// Accumulates until the next behavior re-evaluation.
    pub behavior_timer: f32,
    pub leader: Option<Entity>,
    pub formation_offset: Vec2,
    pub weapon: Weapon,
    pub burst: BurstState,
    pub evasion_cooldown: f32,
    pub evasion_velocity: Vec2,
    pub drop_chance: f32,
    pub fate: Fate,
}

impl Adversary {
    pub fn health_ratio(&self) -> f32 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        (self.hp / self.max_hp).clamp(0.0, 1.0)
    }
}

/// Rendered extent of a beam, independent of its collision box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSpan {
    pub start: Vec2,
    pub end: Vec2,
}

/// Direct-pursuit missile progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PursuitState {
    /// Straight launch; the target was chosen at creation.
    Launch {
        elapsed: f32,
        target: Option<TargetRef>,
    },
    Locked {
        target: TargetRef,
        /// Total flight time.
        elapsed: f32,
    },
    /// No longer pursuing; flies straight.
    Released,
}

/// Per-instance motion state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guidance {
    Ballistic,
    Homing,
    Pursuit(PursuitState),
    Beam(BeamSpan),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub alignment: Alignment,
    pub damage: f32,
    pub penetration: u32,
    pub explosion_radius: f32,
    pub homing_strength: f32,
    pub max_age: Option<f32>,
    /// Targets already struck; a target is hit at most once.
    pub struck: Vec<TargetRef>,
    pub guidance: Guidance,
}

/// Laser special-attack progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum LaserState {
    #[default]
    Idle,
    Charging {
        elapsed: f32,
        warning: ChargeWarning,
    },
}

/// Missile barrage in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Barrage {
    pub remaining: u32,
    pub timer: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum BossLife {
    #[default]
    Alive,
    /// Scripted death sequence; inert but not yet removed.
    Dying { elapsed: f32 },
    /// Ready for removal and reward payout.
    Defeated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub handle: BossHandle,
    pub kind: BossKind,
    pub body: Body,
    pub hp: f32,
    pub max_hp: f32,
    pub phase: u8,
    pub max_phases: u8,
    pub score: u32,
    pub movement: BossMovement,
    pub movement_timer: f32,
    /// Altitude the boss settles at after its entrance.
    pub resting_y: f32,
    pub combat_speed: f32,
    /// +1 or -1 horizontal sweep direction.
    pub sweep_dir: f32,
    pub attack_power: f32,
    pub normal_cooldown: f32,
    pub special_cooldown: f32,
    pub normal_timer: f32,
    pub special_timer: f32,
    pub normal_index: usize,
    pub invulnerable: f32,
    pub laser: LaserState,
    pub barrage: Option<Barrage>,
    pub life: BossLife,
}

impl Boss {
    pub fn health_ratio(&self) -> f32 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        (self.hp / self.max_hp).clamp(0.0, 1.0)
    }

    /// Visible and alive: can be hit and homed on.
    pub fn is_targetable(&self) -> bool {
        matches!(self.life, BossLife::Alive)
            && self.movement != BossMovement::Warning
            && !self.body.destroyed
    }

    /// A special attack is charging or firing.
    pub fn special_in_progress(&self) -> bool {
        self.barrage.is_some() || matches!(self.laser, LaserState::Charging { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
}
