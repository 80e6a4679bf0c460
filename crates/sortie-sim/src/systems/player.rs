//! Player craft and wingmen: movement, primary volleys, missiles and pickup
//! effects.

use glam::Vec2;

use sortie_core::components::{Player, PlayerInput, Wingman};
use sortie_core::constants::*;
use sortie_core::context::{CombatContext, ProjectileRequest};
use sortie_core::enums::{PickupKind, ProjectileKind};
use sortie_core::types::Arena;

/// Move the player, tick its timers and fire while the trigger is held.
pub fn run(player: &mut Player, input: PlayerInput, ctx: &mut CombatContext<'_>) {
    let dt = ctx.dt;
    player.invulnerable = (player.invulnerable - dt).max(0.0);

    if !player.body.is_live() {
        player.body.vel = Vec2::ZERO;
        return;
    }

    player.body.vel = input.movement.clamp_length_max(1.0) * PLAYER_SPEED;
    player.body.integrate(dt);
    keep_inside(player, ctx.arena);

    player.fire_timer = (player.fire_timer - dt).max(0.0);
    player.missile_timer = (player.missile_timer - dt).max(0.0);
    for wingman in &mut player.wingmen {
        wingman.fire_timer = (wingman.fire_timer - dt).max(0.0);
    }

    if !input.fire {
        return;
    }

    if player.fire_timer <= 0.0 {
        fire_volley(player, ctx);
        player.fire_timer = PLAYER_FIRE_INTERVAL;
    }
    if player.weapon_level >= 3 && player.missile_timer <= 0.0 {
        fire_missiles(player, ctx);
        player.missile_timer = PLAYER_MISSILE_INTERVAL;
    }
    let pos = player.body.pos;
    for wingman in &mut player.wingmen {
        if wingman.fire_timer <= 0.0 {
            ctx.fire(ProjectileRequest::aimed(
                ProjectileKind::WingmanBullet,
                pos + wingman.offset,
                Vec2::NEG_Y,
            ));
            wingman.fire_timer = WINGMAN_FIRE_INTERVAL;
        }
    }
}

fn keep_inside(player: &mut Player, arena: Arena) {
    let half = player.body.size * 0.5;
    let pos = &mut player.body.pos;
    pos.x = pos.x.clamp(half.x, (arena.width - half.x).max(half.x));
    pos.y = pos.y.clamp(half.y, (arena.height - half.y).max(half.y));
}

/// `Vec2::NEG_Y` turned by `angle` radians.
fn forward(angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(Vec2::NEG_Y)
}

fn fire_volley(player: &Player, ctx: &mut CombatContext<'_>) {
    let muzzle = player.body.pos - Vec2::new(0.0, player.body.size.y * 0.5);
    let spread = PLAYER_SPREAD_ANGLE;
    match player.weapon_level {
        0 | 1 => {
            ctx.fire(ProjectileRequest::aimed(ProjectileKind::Bullet, muzzle, forward(0.0)));
        }
        2 | 3 => {
            for angle in [-spread, 0.0, spread] {
                ctx.fire(ProjectileRequest::aimed(ProjectileKind::Bullet, muzzle, forward(angle)));
            }
        }
        _ => {
            ctx.fire(ProjectileRequest::aimed(ProjectileKind::Plasma, muzzle, forward(0.0)));
            for angle in [-2.0 * spread, -spread, spread, 2.0 * spread] {
                ctx.fire(ProjectileRequest::aimed(ProjectileKind::Bullet, muzzle, forward(angle)));
            }
        }
    }
}

fn fire_missiles(player: &Player, ctx: &mut CombatContext<'_>) {
    let pos = player.body.pos;
    for side in [-1.0, 1.0] {
        ctx.fire(ProjectileRequest::aimed(
            ProjectileKind::Missile,
            pos + Vec2::new(side * 12.0, 0.0),
            forward(side * 0.3),
        ));
    }
    if player.weapon_level >= PLAYER_MAX_WEAPON_LEVEL {
        for side in [-1.0, 1.0] {
            ctx.fire(ProjectileRequest::aimed(
                ProjectileKind::CurvedMissile,
                pos + Vec2::new(side * 20.0, 0.0),
                forward(side * 0.6),
            ));
        }
    }
}

/// Apply a collected pickup to the player.
pub fn apply_pickup(player: &mut Player, kind: PickupKind) {
    match kind {
        PickupKind::Repair => {
            player.hp = (player.hp + REPAIR_AMOUNT).min(player.max_hp);
        }
        PickupKind::WeaponUp => {
            player.weapon_level = (player.weapon_level + 1).min(PLAYER_MAX_WEAPON_LEVEL);
        }
        PickupKind::Shield => {
            player.invulnerable = player.invulnerable.max(SHIELD_SECS);
        }
        PickupKind::Wingman => {
            if player.wingmen.len() < MAX_WINGMEN {
                let side = if player.wingmen.is_empty() { -1.0 } else { 1.0 };
                player.wingmen.push(Wingman {
                    offset: Vec2::new(side * WINGMAN_OFFSET_X, WINGMAN_OFFSET_Y),
                    fire_timer: 0.0,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortie_core::context::PlayerView;
    use sortie_core::events::CombatEvent;
    use sortie_core::random::SequenceRandom;

    use crate::world_setup::new_player;

    fn step(player: &mut Player, input: PlayerInput, dt: f32) -> Vec<ProjectileRequest> {
        let mut rng = SequenceRandom::constant(0.5);
        let mut requests = Vec::new();
        let mut events: Vec<CombatEvent> = Vec::new();
        let mut ctx = CombatContext {
            dt,
            arena: Arena::default(),
            difficulty: 1.0,
            player: PlayerView {
                pos: player.body.pos,
                vel: player.body.vel,
                live: player.body.is_live(),
            },
            rng: &mut rng,
            requests: &mut requests,
            events: &mut events,
        };
        run(player, input, &mut ctx);
        requests
    }

    fn firing() -> PlayerInput {
        PlayerInput {
            movement: Vec2::ZERO,
            fire: true,
        }
    }

    #[test]
    fn movement_is_clamped_to_the_arena() {
        let mut player = new_player(Arena::default());
        let input = PlayerInput {
            movement: Vec2::new(10.0, 0.0),
            fire: false,
        };
        for _ in 0..200 {
            step(&mut player, input, 1.0 / 30.0);
        }
        assert_eq!(player.body.pos.x, 800.0 - PLAYER_SIZE * 0.5);
        assert_eq!(player.body.vel.length(), PLAYER_SPEED);
    }

    #[test]
    fn volley_grows_with_weapon_level() {
        let counts: Vec<usize> = (1..=4)
            .map(|level| {
                let mut player = new_player(Arena::default());
                player.weapon_level = level;
                step(&mut player, firing(), 0.01)
                    .iter()
                    .filter(|r| matches!(r.kind, ProjectileKind::Bullet | ProjectileKind::Plasma))
                    .count()
            })
            .collect();
        assert_eq!(counts, vec![1, 3, 3, 5]);
    }

    #[test]
    fn missiles_from_level_three() {
        let mut player = new_player(Arena::default());
        player.weapon_level = 4;
        let requests = step(&mut player, firing(), 0.01);
        let missiles = requests.iter().filter(|r| r.kind == ProjectileKind::Missile).count();
        let curved = requests
            .iter()
            .filter(|r| r.kind == ProjectileKind::CurvedMissile)
            .count();
        assert_eq!((missiles, curved), (2, 2));
        assert!(requests.iter().all(|r| r.vel.y < 0.0));
    }

    #[test]
    fn fire_rate_is_limited() {
        let mut player = new_player(Arena::default());
        let mut shots = 0;
        for _ in 0..30 {
            shots += step(&mut player, firing(), 0.01).len();
        }
        // 0.3 s of held trigger at a 0.15 s interval
        assert_eq!(shots, 2);
    }

    #[test]
    fn pickups_respect_limits() {
        let mut player = new_player(Arena::default());
        player.hp = 90.0;
        apply_pickup(&mut player, PickupKind::Repair);
        assert_eq!(player.hp, PLAYER_MAX_HP);

        for _ in 0..6 {
            apply_pickup(&mut player, PickupKind::WeaponUp);
            apply_pickup(&mut player, PickupKind::Wingman);
        }
        assert_eq!(player.weapon_level, PLAYER_MAX_WEAPON_LEVEL);
        assert_eq!(player.wingmen.len(), MAX_WINGMEN);
        assert_eq!(player.wingmen[0].offset.x, -WINGMAN_OFFSET_X);
        assert_eq!(player.wingmen[1].offset.x, WINGMAN_OFFSET_X);

        apply_pickup(&mut player, PickupKind::Shield);
        assert_eq!(player.invulnerable, SHIELD_SECS);
    }

    #[test]
    fn wingmen_fire_alongside() {
        let mut player = new_player(Arena::default());
        apply_pickup(&mut player, PickupKind::Wingman);
        let requests = step(&mut player, firing(), 0.01);
        assert_eq!(
            requests
                .iter()
                .filter(|r| r.kind == ProjectileKind::WingmanBullet)
                .count(),
            1
        );
    }
}
