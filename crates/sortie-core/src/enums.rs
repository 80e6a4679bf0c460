//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side an entity or projectile fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Player,
    Adversary,
}

impl Alignment {
    pub fn opposing(self) -> Self {
        match self {
            Alignment::Player => Alignment::Adversary,
            Alignment::Adversary => Alignment::Player,
        }
    }

    /// Vertical direction this side fires in (`-1` = up the screen).
    pub fn forward_y(self) -> f32 {
        match self {
            Alignment::Player => -1.0,
            Alignment::Adversary => 1.0,
        }
    }
}

/// How a projectile moves each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionRule {
    Straight,
    /// Re-selects the nearest opposing target every tick.
    Homing,
    /// Locks a single target at launch and blends toward it.
    DirectPursuit,
    /// Stationary span that expires at its maximum age.
    Beam,
}

/// Every projectile the simulation can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    // Player side
    Bullet,
    Plasma,
    Missile,
    CurvedMissile,
    WingmanBullet,
    // Adversary side
    EnemyBullet,
    EnemyMissile,
    BossBullet,
    BossMissile,
    BossLaser,
    Shockwave,
}

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 11] = [
        ProjectileKind::Bullet,
        ProjectileKind::Plasma,
        ProjectileKind::Missile,
        ProjectileKind::CurvedMissile,
        ProjectileKind::WingmanBullet,
        ProjectileKind::EnemyBullet,
        ProjectileKind::EnemyMissile,
        ProjectileKind::BossBullet,
        ProjectileKind::BossMissile,
        ProjectileKind::BossLaser,
        ProjectileKind::Shockwave,
    ];
}

/// Adversary unit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdversaryKind {
    Scout,
    Fighter,
    Bomber,
    Hunter,
    Drone,
}

/// Patrol movement generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPattern {
    Straight,
    Zigzag,
    Sine,
    Spiral,
    Pursuit,
    /// Follows a leader; flies straight when it has none.
    Formation,
}

/// Adversary AI mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorState {
    #[default]
    Patrol,
    Engage,
    Retreat,
    Formation,
}

/// How an adversary's life ends. Only `Defeated` pays rewards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fate {
    #[default]
    Active,
    Defeated,
    Escaped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossKind {
    Dreadnought,
    Carrier,
}

/// Boss movement script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossMovement {
    /// Hidden above the arena while the telegraph plays.
    #[default]
    Warning,
    Entrance,
    Patrol,
    Charge,
    Retreat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalAttack {
    StraightShot,
    SpreadShot,
    CircularShot,
}

impl NormalAttack {
    pub const ROTATION: [NormalAttack; 3] = [
        NormalAttack::StraightShot,
        NormalAttack::SpreadShot,
        NormalAttack::CircularShot,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialAttack {
    LaserBeam,
    MissileBarrage,
    Shockwave,
}

impl SpecialAttack {
    pub const ALL: [SpecialAttack; 3] = [
        SpecialAttack::LaserBeam,
        SpecialAttack::MissileBarrage,
        SpecialAttack::Shockwave,
    ];
}

/// Laser telegraph progress. Only ever advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChargeWarning {
    #[default]
    None,
    First,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Repair,
    WeaponUp,
    Shield,
    Wingman,
}

impl PickupKind {
    pub const ALL: [PickupKind; 4] = [
        PickupKind::Repair,
        PickupKind::WeaponUp,
        PickupKind::Shield,
        PickupKind::Wingman,
    ];
}

/// Whether the engine is currently advancing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}
