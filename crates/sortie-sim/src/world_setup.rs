//! Entity spawn factories.
//!
//! Builds the player, adversary and pickup component bundles and turns
//! projectile requests into `(Body, Projectile)` pairs.

use glam::Vec2;
use hecs::{Entity, World};

use sortie_ai::profiles::adversary_profile;
use sortie_core::components::*;
use sortie_core::constants::*;
use sortie_core::context::ProjectileRequest;
use sortie_core::enums::*;
use sortie_core::profiles::projectile_profile;
use sortie_core::types::{Arena, Body, TargetRef};

/// Slot offsets of the four formation wingers relative to the leader.
const FORMATION_SLOTS: [Vec2; 4] = [
    Vec2::new(-40.0, -25.0),
    Vec2::new(40.0, -25.0),
    Vec2::new(-80.0, -50.0),
    Vec2::new(80.0, -50.0),
];

/// Fresh player near the bottom centre of the arena.
pub fn new_player(arena: Arena) -> Player {
    let pos = Vec2::new(arena.width * 0.5, arena.height - PLAYER_SIZE * 2.0);
    Player {
        body: Body::new(pos, Vec2::ZERO, Vec2::splat(PLAYER_SIZE)),
        hp: PLAYER_MAX_HP,
        max_hp: PLAYER_MAX_HP,
        invulnerable: 0.0,
        weapon_level: 1,
        fire_timer: 0.0,
        missile_timer: 0.0,
        wingmen: Vec::new(),
    }
}

/// Spawn a single adversary of `kind` centred on `pos`.
pub fn spawn_adversary(
    world: &mut World,
    kind: AdversaryKind,
    pos: Vec2,
    difficulty: f32,
) -> Entity {
    let profile = adversary_profile(kind);
    world.spawn((profile.body(pos), profile.instantiate(kind, difficulty)))
}

/// Spawn a Fighter leading four Scouts in a V. Returns every member,
/// leader first.
pub fn spawn_formation(world: &mut World, leader_pos: Vec2, difficulty: f32) -> Vec<Entity> {
    let leader = spawn_adversary(world, AdversaryKind::Fighter, leader_pos, difficulty);
    let leader_vel = world
        .get::<&Body>(leader)
        .map(|b| b.vel)
        .unwrap_or(Vec2::ZERO);

    let mut members = Vec::with_capacity(FORMATION_SLOTS.len() + 1);
    members.push(leader);

    let profile = adversary_profile(AdversaryKind::Scout);
    for offset in FORMATION_SLOTS {
        let mut unit = profile.instantiate(AdversaryKind::Scout, difficulty);
        unit.pattern = MovementPattern::Formation;
        unit.state = BehaviorState::Formation;
        unit.leader = Some(leader);
        unit.formation_offset = offset;
        let body = Body::new(leader_pos + offset, leader_vel, profile.size);
        members.push(world.spawn((body, unit)));
    }
    members
}

pub fn spawn_pickup(world: &mut World, kind: PickupKind, pos: Vec2) -> Entity {
    let body = Body::new(
        pos,
        Vec2::new(0.0, PICKUP_FALL_SPEED),
        Vec2::splat(PICKUP_SIZE),
    );
    world.spawn((body, Pickup { kind }))
}

/// Build the components for a projectile request. `target` is the pursuit
/// lock for direct-pursuit kinds and ignored otherwise.
pub fn build_projectile(
    request: &ProjectileRequest,
    target: Option<TargetRef>,
) -> (Body, Projectile) {
    let profile = projectile_profile(request.kind);

    let (size, vel, guidance) = match profile.motion {
        MotionRule::Straight => (profile.size, request.vel, Guidance::Ballistic),
        MotionRule::Homing => (profile.size, request.vel, Guidance::Homing),
        MotionRule::DirectPursuit => (
            profile.size,
            request.vel,
            Guidance::Pursuit(PursuitState::Launch {
                elapsed: 0.0,
                target,
            }),
        ),
        MotionRule::Beam => {
            let span = request.span.unwrap_or(BeamSpan {
                start: request.pos,
                end: request.pos,
            });
            // Collision box covers the span, at least the registered width
            let extent = (span.end - span.start).abs();
            let size = Vec2::new(extent.x.max(profile.size.x), extent.y.max(profile.size.y));
            (size, Vec2::ZERO, Guidance::Beam(span))
        }
    };

    let body = Body::new(request.pos, vel, size);
    let projectile = Projectile {
        kind: request.kind,
        alignment: profile.alignment,
        damage: profile.damage * request.damage_scale,
        penetration: profile.penetration,
        explosion_radius: profile.explosion_radius,
        homing_strength: profile.homing_strength,
        max_age: profile.max_age,
        struck: Vec::new(),
        guidance,
    };
    (body, projectile)
}
