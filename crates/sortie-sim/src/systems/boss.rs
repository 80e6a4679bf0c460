//! Boss system: drives the occupant of the boss slot through the director.

use sortie_ai::boss::{self as boss_ai, BossTick};
use sortie_core::context::CombatContext;

use crate::boss_slot::BossSlot;

/// Advance and move the boss, if there is one.
pub fn run(slot: &mut BossSlot, ctx: &mut CombatContext<'_>) -> Option<BossTick> {
    let boss = slot.get_mut()?;
    let tick = boss_ai::update(boss, ctx);
    if tick == BossTick::Entered {
        log::info!("boss {:?} entering the arena", boss.kind);
    }
    boss.body.integrate(ctx.dt);
    Some(tick)
}
