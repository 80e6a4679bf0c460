//! Per-unit adversary update.
//!
//! Runs alert tracking, the once-per-second behavior re-evaluation, steering,
//! reactive evasion and the burst-fire controller for one unit. Shots are
//! written to the context's request buffer; the unit never touches other
//! entities directly.

use glam::Vec2;

use sortie_core::components::Adversary;
use sortie_core::constants::*;
use sortie_core::context::{CombatContext, ProjectileRequest};
use sortie_core::enums::BehaviorState;
use sortie_core::profiles::projectile_profile;
use sortie_core::types::Body;

use crate::aim::aim_direction;
use crate::behavior::{
    effective_cooldown, evaluate, steer, BehaviorContext, LeaderView, SteeringInput,
};
use crate::burst;
use crate::evasion::{evasion_impulse, nearest_incoming, Threat};

/// What the unit can see of other entities this tick.
pub struct Surroundings<'a> {
    /// The unit's leader, if it still exists and is live.
    pub leader: Option<LeaderView>,
    /// Player-aligned projectiles.
    pub threats: &'a [Threat],
}

#[derive(Debug, Default, PartialEq)]
pub struct UnitUpdate {
    pub state_changed: bool,
    pub evaded: bool,
    pub shots: u32,
}

/// Advance one adversary by `ctx.dt`. Sets `body.vel`; integration is left
/// to the caller.
pub fn update(
    unit: &mut Adversary,
    body: &mut Body,
    surroundings: &Surroundings<'_>,
    ctx: &mut CombatContext<'_>,
) -> UnitUpdate {
    let dt = ctx.dt;
    let mut result = UnitUpdate::default();
    unit.pattern_time += dt;

    // Leader lost: drop the handle and fall back to patrol immediately.
    if surroundings.leader.is_none() && unit.leader.is_some() {
        unit.leader = None;
        if unit.state == BehaviorState::Formation {
            unit.state = BehaviorState::Patrol;
            result.state_changed = true;
        }
    }

    let player_pos = ctx.player.live.then_some(ctx.player.pos);
    let distance = player_pos.map_or(f32::INFINITY, |p| body.pos.distance(p));

    if distance < unit.aggro_range {
        unit.alert = (unit.alert + ALERT_RISE_RATE * dt).min(1.0);
    } else {
        unit.alert = (unit.alert - ALERT_DECAY_RATE * dt).max(0.0);
    }

    unit.behavior_timer += dt;
    if unit.behavior_timer >= BEHAVIOR_EVAL_INTERVAL {
        unit.behavior_timer -= BEHAVIOR_EVAL_INTERVAL;
        let update = evaluate(&BehaviorContext {
            state: unit.state,
            health_ratio: unit.health_ratio(),
            has_live_leader: surroundings.leader.is_some(),
            distance_to_player: distance,
            aggro_range: unit.aggro_range,
            aggressive: unit.aggressive,
        });
        if update.state_changed {
            log::trace!("{:?} {:?} -> {:?}", unit.kind, unit.state, update.new_state);
            unit.state = update.new_state;
            result.state_changed = true;
        }
    }

    unit.evasion_cooldown = (unit.evasion_cooldown - dt).max(0.0);
    if unit.alert > EVASION_ALERT_THRESHOLD && unit.evasion_cooldown <= 0.0 {
        let threat = nearest_incoming(body.pos, surroundings.threats, EVASION_SCAN_RADIUS);
        if let Some(threat) = threat {
            unit.evasion_velocity += evasion_impulse(body.pos, &threat);
            unit.evasion_cooldown = EVASION_COOLDOWN;
            result.evaded = true;
        }
    }

    let steering = steer(&SteeringInput {
        state: unit.state,
        pattern: unit.pattern,
        pattern_time: unit.pattern_time,
        speed: unit.speed,
        pos: body.pos,
        player_pos,
        pursuit_capable: unit.pursuit_capable,
        leader: surroundings.leader,
        formation_offset: unit.formation_offset,
    });
    body.vel = steering + unit.evasion_velocity;
    unit.evasion_velocity *= (-EVASION_DECAY * dt).exp();

    let can_fire = player_pos.is_some()
        && unit.state != BehaviorState::Retreat
        && ctx.arena.is_visible(body);
    if can_fire {
        let cooldown = effective_cooldown(unit.state, unit.weapon.cooldown);
        let shots = burst::tick(&mut unit.burst, &unit.weapon, cooldown, dt);
        if shots > 0 {
            fire(unit, body, shots, ctx);
            result.shots = shots;
        }
    }

    result
}

fn fire(unit: &Adversary, body: &Body, shots: u32, ctx: &mut CombatContext<'_>) {
    let kind = unit.weapon.projectile;
    let speed = projectile_profile(kind).speed;
    let muzzle = body.pos + Vec2::new(0.0, body.size.y * 0.5);
    for _ in 0..shots {
        let dir = aim_direction(
            muzzle,
            ctx.player.pos,
            ctx.player.vel,
            speed,
            unit.weapon.accuracy,
            ctx.rng,
        );
        ctx.fire(ProjectileRequest::aimed(kind, muzzle, dir));
    }
}
