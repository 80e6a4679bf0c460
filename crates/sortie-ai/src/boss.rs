//! Boss attack director.
//!
//! A movement script (warning → entrance → patrol ⇄ charge/retreat) composed
//! with an independent attack cycle: rotating normal attacks, randomly chosen
//! special attacks (charged laser, missile barrage, shockwave), health-driven
//! phase escalation and a scripted death sequence.

use glam::Vec2;

use sortie_core::components::{Barrage, BeamSpan, Boss, BossLife, LaserState};
use sortie_core::constants::*;
use sortie_core::context::{CombatContext, ProjectileRequest};
use sortie_core::enums::*;
use sortie_core::events::CombatEvent;
use sortie_core::types::direction;

/// Result of one director tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossTick {
    Active,
    /// The warning ended and the boss started its entrance.
    Entered,
    /// The death sequence finished; the boss is ready for removal.
    Defeated,
}

/// Result of applying damage to the boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossDamage {
    /// The boss cannot be damaged right now (warning, dying or defeated).
    Ignored,
    /// Hit during invulnerability; no health lost.
    Absorbed,
    Damaged { new_phase: Option<u8> },
    /// Health reached zero and the death sequence began.
    Killed,
}

/// Phase for a health ratio: `ceil(ratio × max_phases)` clamped to `1..=max_phases`.
pub fn phase_for(health_ratio: f32, max_phases: u8) -> u8 {
    let raw = (health_ratio.clamp(0.0, 1.0) * max_phases as f32).ceil() as u8;
    raw.clamp(1, max_phases.max(1))
}

/// Re-derive the phase from current health. A decrease grants invulnerability,
/// raises attack power and shortens cooldowns once; anything else is a no-op.
pub fn evaluate_phase(boss: &mut Boss, events: &mut Vec<CombatEvent>) -> Option<u8> {
    let next = phase_for(boss.health_ratio(), boss.max_phases);
    if next >= boss.phase {
        return None;
    }

    boss.phase = next;
    boss.invulnerable = BOSS_PHASE_INVULNERABILITY;
    boss.attack_power *= BOSS_PHASE_POWER_FACTOR;
    boss.normal_cooldown =
        (boss.normal_cooldown * BOSS_PHASE_COOLDOWN_FACTOR).max(BOSS_NORMAL_COOLDOWN_FLOOR);
    boss.special_cooldown =
        (boss.special_cooldown * BOSS_PHASE_COOLDOWN_FACTOR).max(BOSS_SPECIAL_COOLDOWN_FLOOR);

    log::info!(
        "boss {:?} entered phase {} (attack power {:.2})",
        boss.kind,
        next,
        boss.attack_power
    );
    events.push(CombatEvent::BossPhaseChanged { phase: next });
    events.push(CombatEvent::message(format!("PHASE {next}"), MESSAGE_SHORT_MS));
    Some(next)
}

pub fn apply_damage(boss: &mut Boss, amount: f32, events: &mut Vec<CombatEvent>) -> BossDamage {
    if !matches!(boss.life, BossLife::Alive) || boss.movement == BossMovement::Warning {
        return BossDamage::Ignored;
    }
    if boss.invulnerable > 0.0 {
        return BossDamage::Absorbed;
    }

    boss.hp = (boss.hp - amount).max(0.0);
    if boss.hp <= 0.0 {
        begin_death(boss, events);
        return BossDamage::Killed;
    }

    BossDamage::Damaged {
        new_phase: evaluate_phase(boss, events),
    }
}

fn begin_death(boss: &mut Boss, events: &mut Vec<CombatEvent>) {
    log::info!("boss {:?} destroyed, death sequence started", boss.kind);
    boss.life = BossLife::Dying { elapsed: 0.0 };
    boss.laser = LaserState::Idle;
    boss.barrage = None;
    boss.body.vel = Vec2::ZERO;
    events.push(CombatEvent::message("BOSS DESTROYED", MESSAGE_LONG_MS));
}

/// Advance the boss by `ctx.dt`. Sets `boss.body.vel`; integration is left
/// to the caller.
pub fn update(boss: &mut Boss, ctx: &mut CombatContext<'_>) -> BossTick {
    let dt = ctx.dt;
    boss.invulnerable = (boss.invulnerable - dt).max(0.0);

    match boss.life {
        BossLife::Defeated => return BossTick::Defeated,
        BossLife::Dying { elapsed } => {
            let elapsed = elapsed + dt;
            boss.body.vel = Vec2::ZERO;
            if elapsed >= BOSS_DEATH_SECS {
                boss.life = BossLife::Defeated;
                return BossTick::Defeated;
            }
            boss.life = BossLife::Dying { elapsed };
            return BossTick::Active;
        }
        BossLife::Alive => {}
    }

    let tick = update_movement(boss, ctx);
    if matches!(
        boss.movement,
        BossMovement::Patrol | BossMovement::Charge | BossMovement::Retreat
    ) {
        update_attacks(boss, ctx);
    }
    tick
}

fn update_movement(boss: &mut Boss, ctx: &mut CombatContext<'_>) -> BossTick {
    let dt = ctx.dt;
    let half_w = boss.body.size.x * 0.5;

    match boss.movement {
        BossMovement::Warning => {
            boss.body.vel = Vec2::ZERO;
            boss.movement_timer -= dt;
            if boss.movement_timer <= 0.0 {
                boss.movement = BossMovement::Entrance;
                boss.body.pos.y = -boss.body.size.y * 0.5;
                boss.body.vel = Vec2::new(0.0, BOSS_ENTRANCE_SPEED);
                log::info!("boss {:?} entering", boss.kind);
                return BossTick::Entered;
            }
        }
        BossMovement::Entrance => {
            if boss.body.pos.y >= boss.resting_y {
                boss.body.pos.y = boss.resting_y;
                enter_patrol(boss);
                boss.normal_timer = BOSS_FIRST_ATTACK_DELAY;
                boss.special_timer = boss.special_cooldown;
            } else {
                boss.body.vel = Vec2::new(0.0, BOSS_ENTRANCE_SPEED);
            }
        }
        BossMovement::Patrol => {
            let left = boss.body.pos.x - half_w;
            let right = boss.body.pos.x + half_w;
            if left <= BOSS_SIDE_MARGIN {
                boss.sweep_dir = 1.0;
            } else if right >= ctx.arena.width - BOSS_SIDE_MARGIN {
                boss.sweep_dir = -1.0;
            }
            boss.body.vel = Vec2::new(boss.combat_speed * boss.sweep_dir, 0.0);

            boss.movement_timer -= dt;
            if boss.movement_timer <= 0.0 {
                boss.movement = BossMovement::Charge;
                boss.movement_timer = BOSS_CHARGE_SECS;
            }
        }
        BossMovement::Charge => {
            let column = if ctx.player.live {
                ctx.player.pos.x
            } else {
                boss.body.pos.x
            };
            let target = Vec2::new(
                column.clamp(half_w, (ctx.arena.width - half_w).max(half_w)),
                boss.resting_y + BOSS_CHARGE_DEPTH,
            );
            let to_target = target - boss.body.pos;
            let speed = boss.combat_speed * BOSS_CHARGE_SPEED_FACTOR;
            boss.body.vel = if to_target.length() < speed * dt {
                Vec2::ZERO
            } else {
                to_target.normalize() * speed
            };

            boss.movement_timer -= dt;
            if boss.movement_timer <= 0.0 {
                boss.movement = BossMovement::Retreat;
            }
        }
        BossMovement::Retreat => {
            if boss.body.pos.y <= boss.resting_y {
                boss.body.pos.y = boss.resting_y;
                enter_patrol(boss);
            } else {
                boss.body.vel = Vec2::new(0.0, -boss.combat_speed);
            }
        }
    }
    BossTick::Active
}

fn enter_patrol(boss: &mut Boss) {
    boss.movement = BossMovement::Patrol;
    boss.movement_timer = BOSS_PATROL_SECS;
    boss.body.vel = Vec2::new(boss.combat_speed * boss.sweep_dir, 0.0);
}

fn update_attacks(boss: &mut Boss, ctx: &mut CombatContext<'_>) {
    let dt = ctx.dt;

    boss.normal_timer -= dt;
    if boss.normal_timer <= 0.0 {
        let attack = NormalAttack::ROTATION[boss.normal_index % NormalAttack::ROTATION.len()];
        fire_normal(boss, attack, ctx);
        boss.normal_index = boss.normal_index.wrapping_add(1);
        boss.normal_timer = boss.normal_cooldown;
    }

    update_laser(boss, ctx);
    update_barrage(boss, ctx);

    // The special cooldown is frozen while a special is running.
    if !boss.special_in_progress() {
        boss.special_timer -= dt;
        if boss.special_timer <= 0.0 {
            let special = SpecialAttack::ALL[ctx.rng.index(SpecialAttack::ALL.len())];
            log::debug!("boss {:?} special attack {:?}", boss.kind, special);
            start_special(boss, special, ctx);
            boss.special_timer = boss.special_cooldown;
        }
    }
}

fn muzzle(boss: &Boss) -> Vec2 {
    boss.body.pos + Vec2::new(0.0, boss.body.size.y * 0.5)
}

/// Direction from `from` to the player, straight down without a live player.
fn toward_player(from: Vec2, ctx: &CombatContext<'_>) -> Vec2 {
    if !ctx.player.live {
        return Vec2::Y;
    }
    let to = ctx.player.pos - from;
    if to.length_squared() < 1e-6 {
        Vec2::Y
    } else {
        to.normalize()
    }
}

fn fire_normal(boss: &Boss, attack: NormalAttack, ctx: &mut CombatContext<'_>) {
    let power = boss.attack_power;
    let origin = muzzle(boss);

    match attack {
        NormalAttack::StraightShot => {
            for side in [-1.0, 1.0] {
                let cannon = origin + Vec2::new(side * boss.body.size.x * 0.3, 0.0);
                let dir = toward_player(cannon, ctx);
                ctx.fire(
                    ProjectileRequest::aimed(ProjectileKind::BossBullet, cannon, dir)
                        .with_damage_scale(power),
                );
            }
        }
        NormalAttack::SpreadShot => {
            let base = toward_player(origin, ctx);
            let base_angle = base.y.atan2(base.x);
            let n = SPREAD_SHOT_PROJECTILES;
            for i in 0..n {
                let t = i as f32 / (n - 1) as f32;
                let angle = base_angle - SPREAD_SHOT_HALF_ANGLE + t * 2.0 * SPREAD_SHOT_HALF_ANGLE;
                ctx.fire(
                    ProjectileRequest::aimed(ProjectileKind::BossBullet, origin, direction(angle))
                        .with_damage_scale(power),
                );
            }
        }
        NormalAttack::CircularShot => {
            fire_ring(
                ProjectileKind::BossBullet,
                boss.body.pos,
                CIRCULAR_SHOT_PROJECTILES,
                power,
                ctx,
            );
        }
    }
}

fn fire_ring(
    kind: ProjectileKind,
    center: Vec2,
    count: u32,
    power: f32,
    ctx: &mut CombatContext<'_>,
) {
    for i in 0..count {
        let angle = i as f32 * std::f32::consts::TAU / count as f32;
        ctx.fire(ProjectileRequest::aimed(kind, center, direction(angle)).with_damage_scale(power));
    }
}

fn start_special(boss: &mut Boss, special: SpecialAttack, ctx: &mut CombatContext<'_>) {
    match special {
        SpecialAttack::LaserBeam => {
            boss.laser = LaserState::Charging {
                elapsed: 0.0,
                warning: ChargeWarning::None,
            };
            ctx.emit(CombatEvent::message("LASER CHARGING", MESSAGE_SHORT_MS));
        }
        SpecialAttack::MissileBarrage => {
            boss.barrage = Some(Barrage {
                remaining: BARRAGE_MISSILES,
                timer: 0.0,
            });
        }
        SpecialAttack::Shockwave => {
            fire_ring(
                ProjectileKind::Shockwave,
                boss.body.pos,
                SHOCKWAVE_PROJECTILES,
                boss.attack_power,
                ctx,
            );
        }
    }
}

/// Charge → warning at 1.0 s → warning at 1.8 s → one discharge at 2.0 s.
fn update_laser(boss: &mut Boss, ctx: &mut CombatContext<'_>) {
    let LaserState::Charging { elapsed, mut warning } = boss.laser else {
        return;
    };
    let elapsed = elapsed + ctx.dt;

    if elapsed >= LASER_FIRST_WARNING_SECS && warning < ChargeWarning::First {
        warning = ChargeWarning::First;
        ctx.emit(CombatEvent::LaserWarning { stage: warning });
    }
    if elapsed >= LASER_FINAL_WARNING_SECS && warning < ChargeWarning::Final {
        warning = ChargeWarning::Final;
        ctx.emit(CombatEvent::LaserWarning { stage: warning });
    }
    if elapsed >= LASER_CHARGE_SECS {
        discharge_laser(boss, ctx);
        boss.laser = LaserState::Idle;
        return;
    }
    boss.laser = LaserState::Charging { elapsed, warning };
}

fn discharge_laser(boss: &Boss, ctx: &mut CombatContext<'_>) {
    let top = boss.body.pos.y + boss.body.size.y * 0.5;
    let bottom = ctx.arena.height;
    for offset in LASER_BEAM_OFFSETS {
        let x = boss.body.pos.x + offset;
        let span = BeamSpan {
            start: Vec2::new(x, top),
            end: Vec2::new(x, bottom.max(top)),
        };
        ctx.fire(
            ProjectileRequest::beam(ProjectileKind::BossLaser, span)
                .with_damage_scale(boss.attack_power),
        );
    }
    ctx.emit(CombatEvent::LaserDischarged {
        beams: LASER_BEAM_OFFSETS.len() as u32,
    });
}

fn update_barrage(boss: &mut Boss, ctx: &mut CombatContext<'_>) {
    let Some(mut barrage) = boss.barrage else {
        return;
    };

    barrage.timer -= ctx.dt;
    while barrage.remaining > 0 && barrage.timer <= 0.0 {
        // Alternate launch rails
        let side = if barrage.remaining % 2 == 0 { -1.0 } else { 1.0 };
        let rail = muzzle(boss) + Vec2::new(side * boss.body.size.x * 0.4, 0.0);
        let dir = Vec2::new(side * 0.3, 1.0);
        ctx.fire(
            ProjectileRequest::aimed(ProjectileKind::BossMissile, rail, dir)
                .with_damage_scale(boss.attack_power),
        );
        barrage.remaining -= 1;
        barrage.timer += BARRAGE_INTERVAL;
    }

    boss.barrage = (barrage.remaining > 0).then_some(barrage);
}
