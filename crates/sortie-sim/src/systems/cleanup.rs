//! Cleanup system: prunes destroyed entities, materialises queued drops and
//! pays out a defeated boss.

use glam::Vec2;
use hecs::{Entity, World};

use sortie_core::enums::PickupKind;
use sortie_core::events::{CombatEvent, KillTarget};
use sortie_core::state::CombatStats;
use sortie_core::types::Body;

use crate::boss_slot::BossSlot;
use crate::combat::PickupDrop;
use crate::world_setup;

/// Pickups every defeated boss leaves behind, with their offsets.
const BOSS_DROPS: [(PickupKind, f32); 3] = [
    (PickupKind::WeaponUp, -40.0),
    (PickupKind::Repair, 0.0),
    (PickupKind::Shield, 40.0),
];

/// Despawn destroyed entities, remove a defeated boss and spawn queued drops.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    drops: &mut Vec<PickupDrop>,
    boss: &mut BossSlot,
    events: &mut Vec<CombatEvent>,
    stats: &mut CombatStats,
) {
    despawn_buffer.clear();
    for (entity, body) in world.query_mut::<&Body>() {
        if body.destroyed {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if let Some(defeated) = boss.take_defeated() {
        log::info!("boss {:?} defeated, awarding {}", defeated.kind, defeated.score);
        let pos = defeated.body.pos;
        stats.bosses_defeated = stats.bosses_defeated.saturating_add(1);
        stats.score = stats.score.saturating_add(defeated.score as u64);
        events.push(CombatEvent::Kill {
            target: KillTarget::Boss(defeated.kind),
            score: defeated.score,
            x: pos.x,
            y: pos.y,
        });
        for (kind, dx) in BOSS_DROPS {
            drops.push(PickupDrop {
                kind,
                pos: pos + Vec2::new(dx, 0.0),
            });
        }
    }

    for drop in drops.drain(..) {
        world_setup::spawn_pickup(world, drop.kind, drop.pos);
    }
}
