//! Damage application shared by collision, pursuit strikes and detonations.
//!
//! Every hit goes through [`Battlefield::strike`], which re-validates the
//! target before touching it. A target that dies is marked destroyed on the
//! spot, so every later pairing in the same tick skips it.

use glam::Vec2;
use hecs::{Entity, World};

use sortie_ai::boss::{self as boss_ai, BossDamage};
use sortie_core::components::{Adversary, Player, Projectile};
use sortie_core::constants::*;
use sortie_core::enums::{Alignment, Fate, PickupKind};
use sortie_core::events::{CombatEvent, KillTarget};
use sortie_core::random::RandomSource;
use sortie_core::state::CombatStats;
use sortie_core::types::{Body, TargetRef};

use crate::boss_slot::BossSlot;
use crate::dynamics::Candidate;

/// A pickup queued for creation during cleanup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupDrop {
    pub kind: PickupKind,
    pub pos: Vec2,
}

/// Outcome of striking one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// Target gone, destroyed or not hittable.
    Invalid,
    /// Target is invulnerable and lets the projectile through.
    PassThrough,
    /// Target is invulnerable but still stops the projectile.
    Absorbed,
    Damaged,
    Killed,
}

impl Strike {
    /// Whether the hit counts against the projectile.
    pub fn consumes(self) -> bool {
        matches!(self, Strike::Absorbed | Strike::Damaged | Strike::Killed)
    }
}

/// Area damage left behind by an expiring projectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blast {
    pub pos: Vec2,
    pub radius: f32,
    pub damage: f32,
    pub alignment: Alignment,
}

/// A projectile copied out of the world for resolution.
#[derive(Debug, Clone)]
pub struct Shot {
    pub entity: Entity,
    pub body: Body,
    pub projectile: Projectile,
}

impl Shot {
    pub fn fetch(world: &World, entity: Entity) -> Option<Shot> {
        let body = *world.get::<&Body>(entity).ok()?;
        let projectile = (*world.get::<&Projectile>(entity).ok()?).clone();
        Some(Shot {
            entity,
            body,
            projectile,
        })
    }

    pub fn store(self, world: &mut World) {
        if let Ok((body, projectile)) =
            world.query_one_mut::<(&mut Body, &mut Projectile)>(self.entity)
        {
            *body = self.body;
            *projectile = self.projectile;
        }
    }
}

/// Live projectiles of one alignment.
pub fn gather_shots(world: &World, alignment: Alignment) -> Vec<Shot> {
    world
        .query::<(&Body, &Projectile)>()
        .iter()
        .filter(|(_, (body, projectile))| body.is_live() && projectile.alignment == alignment)
        .map(|(entity, (body, projectile))| Shot {
            entity,
            body: *body,
            projectile: projectile.clone(),
        })
        .collect()
}

pub fn write_back(world: &mut World, shots: Vec<Shot>) {
    for shot in shots {
        shot.store(world);
    }
}

/// Every live, hittable entity fighting for `side`.
pub fn live_targets(
    world: &World,
    player: &Player,
    boss: &BossSlot,
    side: Alignment,
) -> Vec<Candidate> {
    match side {
        Alignment::Player => {
            if player.body.is_live() {
                vec![Candidate {
                    target: TargetRef::Player,
                    pos: player.body.pos,
                }]
            } else {
                Vec::new()
            }
        }
        Alignment::Adversary => {
            let mut targets: Vec<Candidate> = world
                .query::<(&Body, &Adversary)>()
                .iter()
                .filter(|(_, (body, unit))| body.is_live() && unit.fate == Fate::Active)
                .map(|(entity, (body, _))| Candidate {
                    target: TargetRef::Adversary(entity),
                    pos: body.pos,
                })
                .collect();
            if let Some(b) = boss.get().filter(|b| b.is_targetable()) {
                targets.push(Candidate {
                    target: TargetRef::Boss(b.handle),
                    pos: b.body.pos,
                });
            }
            targets
        }
    }
}

/// Mutable view of everything damage can reach.
pub struct Battlefield<'a> {
    pub world: &'a mut World,
    pub player: &'a mut Player,
    pub boss: &'a mut BossSlot,
    pub rng: &'a mut dyn RandomSource,
    pub events: &'a mut Vec<CombatEvent>,
    pub drops: &'a mut Vec<PickupDrop>,
    pub stats: &'a mut CombatStats,
}

impl Battlefield<'_> {
    /// Position of `target` if it is still live.
    pub fn target_position(&self, target: TargetRef) -> Option<Vec2> {
        match target {
            TargetRef::Adversary(entity) => {
                let unit = self.world.get::<&Adversary>(entity).ok()?;
                let body = self.world.get::<&Body>(entity).ok()?;
                (body.is_live() && unit.fate == Fate::Active).then_some(body.pos)
            }
            TargetRef::Boss(handle) => self
                .boss
                .resolve(handle)
                .filter(|b| b.is_targetable())
                .map(|b| b.body.pos),
            TargetRef::Player => self.player.body.is_live().then_some(self.player.body.pos),
        }
    }

    /// Apply `damage` to `target`.
    pub fn strike(&mut self, target: TargetRef, damage: f32) -> Strike {
        match target {
            TargetRef::Adversary(entity) => self.strike_adversary(entity, damage),
            TargetRef::Boss(handle) => {
                let boss = match self.boss.resolve_mut(handle) {
                    Some(b) if b.is_targetable() => b,
                    _ => return Strike::Invalid,
                };
                match boss_ai::apply_damage(boss, damage, self.events) {
                    BossDamage::Ignored => Strike::Invalid,
                    BossDamage::Absorbed => Strike::Absorbed,
                    BossDamage::Damaged { .. } => Strike::Damaged,
                    BossDamage::Killed => Strike::Killed,
                }
            }
            TargetRef::Player => self.strike_player(damage),
        }
    }

    fn strike_adversary(&mut self, entity: Entity, damage: f32) -> Strike {
        let (kind, score, pos, drop_chance) =
            match self.world.query_one_mut::<(&mut Body, &mut Adversary)>(entity) {
                Ok((body, unit)) => {
                    if !body.is_live() || unit.fate != Fate::Active {
                        return Strike::Invalid;
                    }
                    unit.hp -= damage;
                    if unit.hp > 0.0 {
                        return Strike::Damaged;
                    }
                    unit.hp = 0.0;
                    unit.fate = Fate::Defeated;
                    body.destroyed = true;
                    (unit.kind, unit.score, body.pos, unit.drop_chance)
                }
                Err(_) => return Strike::Invalid,
            };

        self.stats.adversaries_defeated = self.stats.adversaries_defeated.saturating_add(1);
        self.stats.score = self.stats.score.saturating_add(score as u64);
        self.events.push(CombatEvent::Kill {
            target: KillTarget::Adversary(kind),
            score,
            x: pos.x,
            y: pos.y,
        });
        if drop_chance > 0.0 && self.rng.chance(drop_chance) {
            let kind = PickupKind::ALL[self.rng.index(PickupKind::ALL.len())];
            self.drops.push(PickupDrop { kind, pos });
        }
        Strike::Killed
    }

    fn strike_player(&mut self, damage: f32) -> Strike {
        let player = &mut *self.player;
        if !player.body.is_live() {
            return Strike::Invalid;
        }
        if player.invulnerable > 0.0 {
            return Strike::PassThrough;
        }

        player.hp = (player.hp - damage).max(0.0);
        player.invulnerable = PLAYER_HIT_INVULNERABILITY;
        self.stats.damage_taken += damage;
        self.events.push(CombatEvent::PlayerDamaged { amount: damage });

        if player.hp > 0.0 {
            return Strike::Damaged;
        }
        player.body.destroyed = true;
        player.body.active = false;
        player.body.vel = Vec2::ZERO;
        log::info!("player destroyed");
        self.events.push(CombatEvent::PlayerDown);
        self.events.push(CombatEvent::message("GAME OVER", MESSAGE_LONG_MS));
        Strike::Killed
    }

    /// Area damage with linear falloff to every opposing entity within
    /// `radius` of `center`, except `exclude`.
    pub fn detonate(
        &mut self,
        center: Vec2,
        radius: f32,
        damage: f32,
        alignment: Alignment,
        exclude: Option<TargetRef>,
    ) {
        if radius <= 0.0 {
            return;
        }
        self.events.push(CombatEvent::Explosion {
            x: center.x,
            y: center.y,
            radius,
        });

        let victims: Vec<(TargetRef, f32)> =
            live_targets(self.world, self.player, self.boss, alignment.opposing())
                .into_iter()
                .filter(|c| Some(c.target) != exclude)
                .map(|c| (c.target, c.pos.distance(center)))
                .filter(|&(_, d)| d < radius)
                .collect();
        for (target, distance) in victims {
            self.strike(target, damage * (1.0 - distance / radius));
        }
    }

    /// Apply `shot` to `target`, spending penetration or destroying the
    /// projectile. Destruction by a hit detonates explosive projectiles.
    pub fn resolve_hit(&mut self, shot: &mut Shot, target: TargetRef) -> Strike {
        if shot.body.destroyed || shot.projectile.struck.contains(&target) {
            return Strike::Invalid;
        }
        let outcome = self.strike(target, shot.projectile.damage);
        if !outcome.consumes() {
            return outcome;
        }

        shot.projectile.struck.push(target);
        if shot.projectile.penetration > 0 {
            shot.projectile.penetration -= 1;
        } else {
            shot.body.destroyed = true;
            self.detonate(
                shot.body.pos,
                shot.projectile.explosion_radius,
                shot.projectile.damage,
                shot.projectile.alignment,
                Some(target),
            );
        }
        outcome
    }

    /// Pursuit strikes and expiry blasts reported by the projectile system.
    pub fn apply_dynamics(&mut self, strikes: &[(Entity, TargetRef)], blasts: &[Blast]) {
        for &(entity, target) in strikes {
            if let Some(mut shot) = Shot::fetch(self.world, entity) {
                self.resolve_hit(&mut shot, target);
                shot.store(self.world);
            }
        }
        for blast in blasts {
            self.detonate(blast.pos, blast.radius, blast.damage, blast.alignment, None);
        }
    }
}
