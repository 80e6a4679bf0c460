//! Collision resolver.
//!
//! Discrete AABB overlap once per tick, resolved in a fixed order: player
//! shots against adversaries, then against the boss, hostile shots against the
//! player, adversary rams, boss contact and finally pickups. Target boxes are
//! gathered up front and liveness is re-checked for every pair.

use hecs::Entity;

use sortie_core::components::{Adversary, Pickup};
use sortie_core::constants::*;
use sortie_core::enums::{Alignment, Fate, PickupKind};
use sortie_core::events::CombatEvent;
use sortie_core::types::{Aabb, Body, TargetRef};

use crate::combat::{gather_shots, write_back, Battlefield};
use crate::systems::player::apply_pickup;

/// Resolve every collision for this tick. `contact_cooldown` rate-limits the
/// boss contact message and is ticked down by the engine.
pub fn run(bf: &mut Battlefield<'_>, contact_cooldown: &mut f32) {
    player_shots(bf);
    hostile_shots(bf);
    rams(bf);
    boss_contact(bf, contact_cooldown);
    pickups(bf);
}

fn adversary_boxes(bf: &Battlefield<'_>) -> Vec<(Entity, Aabb)> {
    bf.world
        .query::<(&Body, &Adversary)>()
        .iter()
        .filter(|(_, (body, unit))| body.is_live() && unit.fate == Fate::Active)
        .map(|(entity, (body, _))| (entity, body.aabb()))
        .collect()
}

fn player_shots(bf: &mut Battlefield<'_>) {
    let mut shots = gather_shots(bf.world, Alignment::Player);
    if shots.is_empty() {
        return;
    }

    let targets = adversary_boxes(bf);
    for shot in shots.iter_mut() {
        for &(entity, aabb) in &targets {
            if shot.body.destroyed {
                break;
            }
            if shot.body.aabb().overlaps(&aabb) {
                bf.resolve_hit(shot, TargetRef::Adversary(entity));
            }
        }
    }

    let boss = bf
        .boss
        .get()
        .filter(|b| b.is_targetable())
        .map(|b| (b.handle, b.body.aabb()));
    if let Some((handle, aabb)) = boss {
        for shot in shots.iter_mut() {
            if !shot.body.destroyed && shot.body.aabb().overlaps(&aabb) {
                bf.resolve_hit(shot, TargetRef::Boss(handle));
            }
        }
    }

    write_back(bf.world, shots);
}

fn hostile_shots(bf: &mut Battlefield<'_>) {
    if !bf.player.body.is_live() {
        return;
    }
    let mut shots = gather_shots(bf.world, Alignment::Adversary);
    let player_box = bf.player.body.aabb();
    for shot in shots.iter_mut() {
        if !bf.player.body.is_live() {
            break;
        }
        if shot.body.aabb().overlaps(&player_box) {
            bf.resolve_hit(shot, TargetRef::Player);
        }
    }
    write_back(bf.world, shots);
}

/// Adversary bodies against the player: the player takes contact damage and
/// the rammer is defeated.
fn rams(bf: &mut Battlefield<'_>) {
    if !bf.player.body.is_live() {
        return;
    }
    let player_box = bf.player.body.aabb();
    let contacts: Vec<(Entity, f32, f32)> = bf
        .world
        .query::<(&Body, &Adversary)>()
        .iter()
        .filter(|(_, (body, unit))| {
            body.is_live() && unit.fate == Fate::Active && body.aabb().overlaps(&player_box)
        })
        .map(|(entity, (_, unit))| (entity, unit.contact_damage, unit.hp))
        .collect();

    for (entity, contact_damage, hp) in contacts {
        if !bf.player.body.is_live() {
            break;
        }
        bf.strike(TargetRef::Player, contact_damage);
        bf.strike(TargetRef::Adversary(entity), hp);
    }
}

/// Cosmetic only; no damage either way.
fn boss_contact(bf: &mut Battlefield<'_>, contact_cooldown: &mut f32) {
    if *contact_cooldown > 0.0 || !bf.player.body.is_live() {
        return;
    }
    let touching = bf
        .boss
        .get()
        .filter(|b| b.is_targetable())
        .is_some_and(|b| b.body.aabb().overlaps(&bf.player.body.aabb()));
    if touching {
        bf.events.push(CombatEvent::message("Collision with boss!", MESSAGE_SHORT_MS));
        *contact_cooldown = BOSS_CONTACT_MESSAGE_INTERVAL;
    }
}

fn pickups(bf: &mut Battlefield<'_>) {
    if !bf.player.body.is_live() {
        return;
    }
    let player_box = bf.player.body.aabb();
    let collected: Vec<PickupKind> = bf
        .world
        .query_mut::<(&mut Body, &Pickup)>()
        .into_iter()
        .filter(|(_, (body, _))| body.is_live() && body.aabb().overlaps(&player_box))
        .map(|(_, (body, pickup))| {
            body.destroyed = true;
            pickup.kind
        })
        .collect();

    for kind in collected {
        apply_pickup(bf.player, kind);
        bf.stats.pickups_collected = bf.stats.pickups_collected.saturating_add(1);
        bf.events.push(CombatEvent::PickupCollected { kind });
    }
}
