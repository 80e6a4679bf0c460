//! Projectile system: guidance, integration, expiry and bounds removal.
//!
//! Target candidates are gathered once per side before the mutable pass.
//! Pursuit strikes and expiry blasts touch other entities, so they are
//! reported back and applied by the damage layer afterwards.

use hecs::{Entity, World};

use sortie_core::components::{Guidance, Player, Projectile, PursuitState};
use sortie_core::constants::*;
use sortie_core::enums::Alignment;
use sortie_core::types::{Arena, Body, TargetRef};

use crate::boss_slot::BossSlot;
use crate::combat::{live_targets, Blast};
use crate::dynamics::{self, Candidate};

/// Interactions the damage layer must apply after the motion pass.
#[derive(Debug, Default)]
pub struct DynamicsOutcome {
    /// Pursuit missiles that reached their target this tick.
    pub strikes: Vec<(Entity, TargetRef)>,
    /// Explosive projectiles that expired this tick.
    pub blasts: Vec<Blast>,
}

pub fn run(
    world: &mut World,
    player: &Player,
    boss: &BossSlot,
    arena: Arena,
    dt: f32,
) -> DynamicsOutcome {
    let adversary_side = live_targets(world, player, boss, Alignment::Adversary);
    let player_side = live_targets(world, player, boss, Alignment::Player);
    let mut outcome = DynamicsOutcome::default();

    for (entity, (body, projectile)) in world.query_mut::<(&mut Body, &mut Projectile)>() {
        if !body.is_live() {
            continue;
        }
        let targets = match projectile.alignment.opposing() {
            Alignment::Adversary => &adversary_side,
            Alignment::Player => &player_side,
        };

        match &mut projectile.guidance {
            Guidance::Ballistic => {}
            Guidance::Homing => {
                if let Some(c) = dynamics::nearest(body.pos, targets, Some(HOMING_RADIUS)) {
                    body.vel = dynamics::homing_velocity(
                        body.pos,
                        body.vel,
                        c.pos,
                        projectile.homing_strength,
                        dt,
                    );
                }
            }
            Guidance::Pursuit(state) => {
                steer_pursuit(state, body, projectile.alignment, targets, dt);
            }
            Guidance::Beam(_) => body.vel = glam::Vec2::ZERO,
        }

        body.integrate(dt);

        if arena.has_left(body) {
            body.destroyed = true;
            continue;
        }

        if let Guidance::Pursuit(PursuitState::Locked { target, .. }) = projectile.guidance {
            if let Some(c) = find(targets, target) {
                if body.pos.distance(c.pos) <= PURSUIT_STRIKE_RADIUS {
                    body.pos = c.pos;
                    outcome.strikes.push((entity, target));
                    continue;
                }
            }
        }

        if projectile.max_age.is_some_and(|max| body.age >= max) {
            body.destroyed = true;
            if projectile.explosion_radius > 0.0 {
                outcome.blasts.push(Blast {
                    pos: body.pos,
                    radius: projectile.explosion_radius,
                    damage: projectile.damage,
                    alignment: projectile.alignment,
                });
            }
        }
    }

    outcome
}

fn find(targets: &[Candidate], target: TargetRef) -> Option<Candidate> {
    targets.iter().find(|c| c.target == target).copied()
}

/// One tick of the direct-pursuit state machine. Sets `body.vel`.
fn steer_pursuit(
    state: &mut PursuitState,
    body: &mut Body,
    alignment: Alignment,
    targets: &[Candidate],
    dt: f32,
) {
    match *state {
        PursuitState::Launch { elapsed, target } => {
            let elapsed = elapsed + dt;
            if elapsed < PURSUIT_LAUNCH_SECS {
                *state = PursuitState::Launch { elapsed, target };
                return;
            }
            match target.and_then(|t| find(targets, t)) {
                Some(c) => {
                    body.vel = dynamics::pursuit_velocity(body.pos, body.vel, c.pos);
                    *state = PursuitState::Locked {
                        target: c.target,
                        elapsed,
                    };
                }
                None => {
                    body.vel = dynamics::fallback_velocity(alignment);
                    *state = PursuitState::Released;
                }
            }
        }
        PursuitState::Locked { target, elapsed } => {
            let elapsed = elapsed + dt;
            match find(targets, target) {
                Some(c) if elapsed < PURSUIT_TIMEOUT_SECS => {
                    body.vel = dynamics::pursuit_velocity(body.pos, body.vel, c.pos);
                    *state = PursuitState::Locked { target, elapsed };
                }
                // Lost or timed out: keep flying the current heading
                _ => *state = PursuitState::Released,
            }
        }
        PursuitState::Released => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn launch(target: Option<TargetRef>) -> (PursuitState, Body) {
        (
            PursuitState::Launch {
                elapsed: 0.0,
                target,
            },
            Body::new(Vec2::new(400.0, 500.0), Vec2::new(0.0, -500.0), Vec2::splat(8.0)),
        )
    }

    #[test]
    fn launch_holds_heading() {
        let (mut state, mut body) = launch(None);
        steer_pursuit(&mut state, &mut body, Alignment::Player, &[], 0.05);
        assert!(matches!(state, PursuitState::Launch { .. }));
        assert_eq!(body.vel, Vec2::new(0.0, -500.0));
    }

    #[test]
    fn no_target_after_launch_releases_forward() {
        let (mut state, mut body) = launch(None);
        for _ in 0..4 {
            steer_pursuit(&mut state, &mut body, Alignment::Player, &[], 1.0 / 30.0);
        }
        assert_eq!(state, PursuitState::Released);
        assert_eq!(body.vel, Vec2::new(0.0, -PURSUIT_FALLBACK_SPEED));
    }

    #[test]
    fn lost_lock_keeps_velocity() {
        let (mut state, mut body) = launch(Some(TargetRef::Player));
        let targets = [Candidate {
            target: TargetRef::Player,
            pos: Vec2::new(500.0, 100.0),
        }];
        for _ in 0..4 {
            steer_pursuit(&mut state, &mut body, Alignment::Adversary, &targets, 1.0 / 30.0);
        }
        assert!(matches!(state, PursuitState::Locked { .. }));
        let vel = body.vel;
        steer_pursuit(&mut state, &mut body, Alignment::Adversary, &[], 1.0 / 30.0);
        assert_eq!(state, PursuitState::Released);
        assert_eq!(body.vel, vel);
    }

    #[test]
    fn lock_times_out() {
        let target = TargetRef::Player;
        let mut state = PursuitState::Locked {
            target,
            elapsed: PURSUIT_TIMEOUT_SECS - 0.01,
        };
        let mut body = Body::new(Vec2::ZERO, Vec2::new(0.0, 500.0), Vec2::splat(8.0));
        let targets = [Candidate {
            target,
            pos: Vec2::new(0.0, 400.0),
        }];
        steer_pursuit(&mut state, &mut body, Alignment::Adversary, &targets, 0.02);
        assert_eq!(state, PursuitState::Released);
    }
}
