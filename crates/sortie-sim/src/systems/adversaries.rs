//! Adversary system: runs every live unit through the AI controller.
//!
//! Leader and threat views are gathered before the mutable pass, so a unit
//! only ever sees other entities through plain copies.

use std::collections::HashMap;

use hecs::{Entity, World};

use sortie_ai::behavior::LeaderView;
use sortie_ai::controller::{self, Surroundings};
use sortie_ai::evasion::Threat;
use sortie_core::components::{Adversary, Projectile};
use sortie_core::context::CombatContext;
use sortie_core::enums::{Alignment, Fate};
use sortie_core::state::CombatStats;
use sortie_core::types::{Arena, Body};

/// Update, move and bounds-check every live adversary.
pub fn run(world: &mut World, ctx: &mut CombatContext<'_>, stats: &mut CombatStats) {
    let leaders: HashMap<Entity, LeaderView> = world
        .query::<(&Body, &Adversary)>()
        .iter()
        .filter(|(_, (body, unit))| body.is_live() && unit.fate == Fate::Active)
        .map(|(entity, (body, _))| {
            (
                entity,
                LeaderView {
                    pos: body.pos,
                    vel: body.vel,
                },
            )
        })
        .collect();

    let threats: Vec<Threat> = world
        .query::<(&Body, &Projectile)>()
        .iter()
        .filter(|(_, (body, p))| body.is_live() && p.alignment == Alignment::Player)
        .map(|(_, (body, _))| Threat {
            pos: body.pos,
            vel: body.vel,
        })
        .collect();

    for (_entity, (body, unit)) in world.query_mut::<(&mut Body, &mut Adversary)>() {
        if !body.is_live() || unit.fate != Fate::Active {
            continue;
        }

        let surroundings = Surroundings {
            leader: unit.leader.and_then(|l| leaders.get(&l).copied()),
            threats: &threats,
        };
        controller::update(unit, body, &surroundings, ctx);
        body.integrate(ctx.dt);

        if has_escaped(ctx.arena, body) {
            log::debug!("{:?} escaped at ({:.0}, {:.0})", unit.kind, body.pos.x, body.pos.y);
            unit.fate = Fate::Escaped;
            body.destroyed = true;
            stats.adversaries_escaped = stats.adversaries_escaped.saturating_add(1);
        }
    }
}

/// Left the inflated play area. Units still descending from above the top
/// edge have not entered yet and do not count.
fn has_escaped(arena: Arena, body: &Body) -> bool {
    arena.has_left(body) && (body.pos.y > 0.0 || body.vel.y < 0.0)
}
