//! Snapshot system: builds a `CombatSnapshot` from the current state.
//!
//! This system is read-only. Entity lists are ordered by id so equal states
//! serialise identically.

use hecs::World;

use sortie_core::components::*;
use sortie_core::enums::RunState;
use sortie_core::state::*;
use sortie_core::types::{Body, SimTime};

use crate::boss_slot::BossSlot;

pub fn build_snapshot(
    world: &World,
    player: &Player,
    boss: &BossSlot,
    time: SimTime,
    run_state: RunState,
    stats: &CombatStats,
) -> CombatSnapshot {
    CombatSnapshot {
        time,
        run_state,
        player: build_player(player),
        adversaries: build_adversaries(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        boss: boss.get().map(build_boss),
        stats: *stats,
    }
}

fn build_player(player: &Player) -> PlayerSnapshot {
    PlayerSnapshot {
        x: player.body.pos.x,
        y: player.body.pos.y,
        hp: player.hp,
        max_hp: player.max_hp,
        weapon_level: player.weapon_level,
        wingmen: player.wingmen.len(),
        invulnerable: player.invulnerable > 0.0,
        live: player.body.is_live(),
    }
}

fn build_adversaries(world: &World) -> Vec<AdversarySnapshot> {
    let mut adversaries: Vec<AdversarySnapshot> = world
        .query::<(&Body, &Adversary)>()
        .iter()
        .filter(|(_, (body, _))| body.is_live())
        .map(|(entity, (body, unit))| AdversarySnapshot {
            id: entity.to_bits().get(),
            kind: unit.kind,
            x: body.pos.x,
            y: body.pos.y,
            hp: unit.hp,
            max_hp: unit.max_hp,
            state: unit.state,
            alert: unit.alert,
        })
        .collect();
    adversaries.sort_by_key(|a| a.id);
    adversaries
}

fn build_projectiles(world: &World) -> Vec<ProjectileSnapshot> {
    let mut projectiles: Vec<ProjectileSnapshot> = world
        .query::<(&Body, &Projectile)>()
        .iter()
        .filter(|(_, (body, _))| body.is_live())
        .map(|(entity, (body, projectile))| ProjectileSnapshot {
            id: entity.to_bits().get(),
            kind: projectile.kind,
            x: body.pos.x,
            y: body.pos.y,
            vx: body.vel.x,
            vy: body.vel.y,
            span: match projectile.guidance {
                Guidance::Beam(span) => Some(span),
                _ => None,
            },
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_pickups(world: &World) -> Vec<PickupSnapshot> {
    let mut pickups: Vec<PickupSnapshot> = world
        .query::<(&Body, &Pickup)>()
        .iter()
        .filter(|(_, (body, _))| body.is_live())
        .map(|(entity, (body, pickup))| PickupSnapshot {
            id: entity.to_bits().get(),
            kind: pickup.kind,
            x: body.pos.x,
            y: body.pos.y,
        })
        .collect();
    pickups.sort_by_key(|p| p.id);
    pickups
}

fn build_boss(boss: &Boss) -> BossSnapshot {
    BossSnapshot {
        kind: boss.kind,
        x: boss.body.pos.x,
        y: boss.body.pos.y,
        hp: boss.hp,
        max_hp: boss.max_hp,
        phase: boss.phase,
        movement: boss.movement,
        laser: boss.laser,
        invulnerable: boss.invulnerable > 0.0,
        dying: !matches!(boss.life, BossLife::Alive),
    }
}
