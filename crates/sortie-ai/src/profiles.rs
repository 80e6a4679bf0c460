//! Per-kind stat profiles for adversaries and bosses.

use glam::Vec2;

use sortie_core::components::{Adversary, Boss, BossLife, BurstState, LaserState, Weapon};
use sortie_core::constants::*;
use sortie_core::enums::*;
use sortie_core::types::{Body, BossHandle};

/// Static parameters for an adversary kind.
pub struct AdversaryProfile {
    pub hp: f32,
    pub speed: f32,
    pub size: Vec2,
    pub contact_damage: f32,
    pub score: u32,
    pub pattern: MovementPattern,
    /// Aggressive units engage the player inside aggro range.
    pub aggressive: bool,
    pub aggro_range: f32,
    pub pursuit_capable: bool,
    pub weapon: Weapon,
    /// Chance of dropping a pickup when defeated.
    pub drop_chance: f32,
}

pub fn adversary_profile(kind: AdversaryKind) -> AdversaryProfile {
    match kind {
        AdversaryKind::Scout => AdversaryProfile {
            hp: 1.0,
            speed: 150.0,
            size: Vec2::new(24.0, 24.0),
            contact_damage: 10.0,
            score: 100,
            pattern: MovementPattern::Zigzag,
            aggressive: false,
            aggro_range: 250.0,
            pursuit_capable: false,
            weapon: Weapon {
                projectile: ProjectileKind::EnemyBullet,
                cooldown: 2.5,
                burst_count: 1,
                burst_delay: 0.15,
                accuracy: 0.3,
            },
            drop_chance: 0.05,
        },
        AdversaryKind::Fighter => AdversaryProfile {
            hp: 3.0,
            speed: 120.0,
            size: Vec2::new(32.0, 32.0),
            contact_damage: 15.0,
            score: 200,
            pattern: MovementPattern::Sine,
            aggressive: true,
            aggro_range: 300.0,
            pursuit_capable: true,
            weapon: Weapon {
                projectile: ProjectileKind::EnemyBullet,
                cooldown: 2.0,
                burst_count: 3,
                burst_delay: 0.15,
                accuracy: 0.6,
            },
            drop_chance: 0.1,
        },
        AdversaryKind::Bomber => AdversaryProfile {
            hp: 8.0,
            speed: 70.0,
            size: Vec2::new(48.0, 40.0),
            contact_damage: 25.0,
            score: 400,
            pattern: MovementPattern::Straight,
            aggressive: false,
            aggro_range: 200.0,
            pursuit_capable: false,
            weapon: Weapon {
                projectile: ProjectileKind::EnemyMissile,
                cooldown: 3.0,
                burst_count: 2,
                burst_delay: 0.3,
                accuracy: 0.4,
            },
            drop_chance: 0.25,
        },
        AdversaryKind::Hunter => AdversaryProfile {
            hp: 4.0,
            speed: 160.0,
            size: Vec2::new(30.0, 30.0),
            contact_damage: 15.0,
            score: 300,
            pattern: MovementPattern::Pursuit,
            aggressive: true,
            aggro_range: 400.0,
            pursuit_capable: true,
            weapon: Weapon {
                projectile: ProjectileKind::EnemyBullet,
                cooldown: 1.8,
                burst_count: 2,
                burst_delay: 0.12,
                accuracy: 0.8,
            },
            drop_chance: 0.15,
        },
        AdversaryKind::Drone => AdversaryProfile {
            hp: 2.0,
            speed: 100.0,
            size: Vec2::new(26.0, 26.0),
            contact_damage: 10.0,
            score: 150,
            pattern: MovementPattern::Spiral,
            aggressive: false,
            aggro_range: 250.0,
            pursuit_capable: false,
            weapon: Weapon {
                projectile: ProjectileKind::EnemyBullet,
                cooldown: 2.2,
                burst_count: 1,
                burst_delay: 0.15,
                accuracy: 0.5,
            },
            drop_chance: 0.08,
        },
    }
}

impl AdversaryProfile {
    /// Fresh unit state. Health scales with `difficulty`.
    pub fn instantiate(&self, kind: AdversaryKind, difficulty: f32) -> Adversary {
        let hp = (self.hp * difficulty).ceil().max(1.0);
        Adversary {
            kind,
            hp,
            max_hp: hp,
            contact_damage: self.contact_damage,
            score: self.score,
            speed: self.speed,
            pattern: self.pattern,
            state: BehaviorState::Patrol,
            aggressive: self.aggressive,
            aggro_range: self.aggro_range,
            pursuit_capable: self.pursuit_capable,
            alert: 0.0,
            pattern_time: 0.0,
            behavior_timer: 0.0,
            leader: None,
            formation_offset: Vec2::ZERO,
            weapon: self.weapon,
            burst: BurstState {
                // First shot comes half a cooldown after arrival
                cooldown_timer: self.weapon.cooldown * 0.5,
                remaining: 0,
                shot_timer: 0.0,
            },
            evasion_cooldown: 0.0,
            evasion_velocity: Vec2::ZERO,
            drop_chance: self.drop_chance,
            fate: Fate::Active,
        }
    }

    /// Body for a unit entering at `pos`, initially moving down.
    pub fn body(&self, pos: Vec2) -> Body {
        Body::new(pos, Vec2::new(0.0, self.speed), self.size)
    }
}

/// Static parameters for a boss kind.
pub struct BossProfile {
    pub max_hp: f32,
    pub max_phases: u8,
    pub size: Vec2,
    pub combat_speed: f32,
    pub score: u32,
    pub normal_cooldown: f32,
    pub special_cooldown: f32,
}

pub fn boss_profile(kind: BossKind) -> BossProfile {
    match kind {
        BossKind::Dreadnought => BossProfile {
            max_hp: 5000.0,
            max_phases: 3,
            size: Vec2::new(160.0, 100.0),
            combat_speed: 80.0,
            score: 5000,
            normal_cooldown: 1.5,
            special_cooldown: 8.0,
        },
        BossKind::Carrier => BossProfile {
            max_hp: 8000.0,
            max_phases: 4,
            size: Vec2::new(200.0, 110.0),
            combat_speed: 60.0,
            score: 8000,
            normal_cooldown: 1.8,
            special_cooldown: 7.0,
        },
    }
}

impl BossProfile {
    /// A boss in its warning state, hidden above column `station.x`.
    /// It settles at `station.y` after the entrance.
    pub fn instantiate(
        &self,
        kind: BossKind,
        handle: BossHandle,
        station: Vec2,
        difficulty: f32,
    ) -> Boss {
        let hp = (self.max_hp * difficulty).ceil().max(1.0);
        let hidden = Vec2::new(station.x, -self.size.y * 2.0);
        Boss {
            handle,
            kind,
            body: Body::new(hidden, Vec2::ZERO, self.size),
            hp,
            max_hp: hp,
            phase: self.max_phases,
            max_phases: self.max_phases,
            score: self.score,
            movement: BossMovement::Warning,
            movement_timer: BOSS_WARNING_SECS,
            resting_y: station.y,
            combat_speed: self.combat_speed,
            sweep_dir: 1.0,
            attack_power: 1.0,
            normal_cooldown: self.normal_cooldown,
            special_cooldown: self.special_cooldown,
            normal_timer: BOSS_FIRST_ATTACK_DELAY,
            special_timer: self.special_cooldown,
            normal_index: 0,
            invulnerable: 0.0,
            laser: LaserState::Idle,
            barrage: None,
            life: BossLife::Alive,
        }
    }
}
