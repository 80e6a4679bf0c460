//! Projectile registration table.
//!
//! Alignment and motion are properties of the kind, so ownership
//! classification never depends on who fired the projectile.

use glam::Vec2;

use crate::constants::BEAM_DURATION;
use crate::enums::{Alignment, MotionRule, ProjectileKind};

/// Static parameters for one projectile kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileProfile {
    pub alignment: Alignment,
    pub motion: MotionRule,
    /// Launch speed.
    pub speed: f32,
    pub damage: f32,
    /// Additional hits survived (0 = destroyed on first hit).
    pub penetration: u32,
    /// Area-damage radius on destruction, 0 for none.
    pub explosion_radius: f32,
    pub homing_strength: f32,
    pub size: Vec2,
    pub max_age: Option<f32>,
}

/// Look up the registration entry for `kind`.
pub fn projectile_profile(kind: ProjectileKind) -> ProjectileProfile {
    let base = ProjectileProfile {
        alignment: Alignment::Player,
        motion: MotionRule::Straight,
        speed: 600.0,
        damage: 1.0,
        penetration: 0,
        explosion_radius: 0.0,
        homing_strength: 0.0,
        size: Vec2::new(4.0, 12.0),
        max_age: None,
    };

    match kind {
        ProjectileKind::Bullet => base,
        ProjectileKind::Plasma => ProjectileProfile {
            speed: 700.0,
            damage: 2.0,
            penetration: 2,
            size: Vec2::new(6.0, 16.0),
            ..base
        },
        ProjectileKind::Missile => ProjectileProfile {
            motion: MotionRule::Homing,
            speed: 350.0,
            damage: 3.0,
            explosion_radius: 40.0,
            homing_strength: 4.0,
            size: Vec2::new(8.0, 16.0),
            max_age: Some(4.0),
            ..base
        },
        ProjectileKind::CurvedMissile => ProjectileProfile {
            motion: MotionRule::DirectPursuit,
            speed: 500.0,
            damage: 2.0,
            size: Vec2::new(8.0, 14.0),
            ..base
        },
        ProjectileKind::WingmanBullet => ProjectileProfile {
            speed: 550.0,
            size: Vec2::new(4.0, 10.0),
            ..base
        },
        ProjectileKind::EnemyBullet => ProjectileProfile {
            alignment: Alignment::Adversary,
            speed: 250.0,
            damage: 10.0,
            size: Vec2::new(6.0, 6.0),
            ..base
        },
        ProjectileKind::EnemyMissile => ProjectileProfile {
            alignment: Alignment::Adversary,
            motion: MotionRule::Homing,
            speed: 200.0,
            damage: 15.0,
            explosion_radius: 30.0,
            homing_strength: 2.0,
            size: Vec2::new(8.0, 14.0),
            max_age: Some(5.0),
            ..base
        },
        ProjectileKind::BossBullet => ProjectileProfile {
            alignment: Alignment::Adversary,
            speed: 280.0,
            damage: 15.0,
            size: Vec2::new(10.0, 10.0),
            ..base
        },
        ProjectileKind::BossMissile => ProjectileProfile {
            alignment: Alignment::Adversary,
            motion: MotionRule::Homing,
            speed: 220.0,
            damage: 20.0,
            explosion_radius: 40.0,
            homing_strength: 3.0,
            size: Vec2::new(10.0, 18.0),
            max_age: Some(6.0),
            ..base
        },
        ProjectileKind::BossLaser => ProjectileProfile {
            alignment: Alignment::Adversary,
            motion: MotionRule::Beam,
            speed: 0.0,
            damage: 30.0,
            penetration: u32::MAX,
            size: Vec2::new(crate::constants::BEAM_WIDTH, 0.0),
            max_age: Some(BEAM_DURATION),
            ..base
        },
        ProjectileKind::Shockwave => ProjectileProfile {
            alignment: Alignment::Adversary,
            speed: 180.0,
            damage: 12.0,
            size: Vec2::new(14.0, 14.0),
            ..base
        },
    }
}

impl ProjectileKind {
    pub fn alignment(self) -> Alignment {
        projectile_profile(self).alignment
    }

    pub fn motion(self) -> MotionRule {
        projectile_profile(self).motion
    }
}
