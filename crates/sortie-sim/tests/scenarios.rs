use glam::Vec2;

use sortie_sim::core::components::{Adversary, Guidance, Projectile, PursuitState};
use sortie_sim::core::config::{SimConfig, SpawnerConfig};
use sortie_sim::core::constants::*;
use sortie_sim::core::enums::*;
use sortie_sim::core::events::{CombatEvent, FeedbackSink, KillTarget};
use sortie_sim::core::types::Body;
use sortie_sim::SimulationEngine;

const DT: f32 = 1.0 / 30.0;

/// Engine with the wave spawner switched off, so only hand-placed
/// entities take part.
fn quiet_engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        seed: 7,
        spawner: SpawnerConfig {
            enabled: false,
            ..Default::default()
        },
        ..Default::default()
    })
}

#[derive(Default)]
struct Rewards {
    kills: Vec<(KillTarget, u32)>,
}

impl FeedbackSink for Rewards {
    fn on_kill(&mut self, target: KillTarget, score: u32, _x: f32, _y: f32) {
        self.kills.push((target, score));
    }

    fn on_player_damaged(&mut self, _amount: f32) {}

    fn on_message(&mut self, _text: &str, _duration_ms: u32) {}
}

fn adversary_count(engine: &SimulationEngine) -> usize {
    engine.world().query::<&Adversary>().iter().count()
}

#[test]
fn single_hit_kills_one_hp_scout_and_pays_once() {
    let mut engine = quiet_engine();
    let pos = Vec2::new(400.0, 150.0);
    let scout = engine.create_adversary(pos, AdversaryKind::Scout);
    let shot = engine
        .create_projectile(pos, Vec2::ZERO, ProjectileKind::Bullet)
        .unwrap();

    engine.advance(DT);

    let mut rewards = Rewards::default();
    engine.flush_events(&mut rewards);
    assert_eq!(
        rewards.kills,
        vec![(KillTarget::Adversary(AdversaryKind::Scout), 100)]
    );
    assert!(!engine.world().contains(scout));
    assert!(!engine.world().contains(shot));
    assert_eq!(engine.stats().score, 100);
}

#[test]
fn heavy_hit_drops_boss_one_phase() {
    let mut engine = quiet_engine();
    engine.create_boss(Vec2::new(400.0, BOSS_RESTING_Y), BossKind::Dreadnought);
    {
        let boss = engine.boss_mut().get_mut().unwrap();
        boss.movement = BossMovement::Patrol;
        boss.movement_timer = 1_000.0;
        boss.combat_speed = 0.0;
        boss.normal_timer = 1_000.0;
        boss.special_timer = 1_000.0;
        boss.body.pos = Vec2::new(400.0, BOSS_RESTING_Y);
    }
    let shot = engine
        .create_projectile(
            Vec2::new(400.0, BOSS_RESTING_Y),
            Vec2::ZERO,
            ProjectileKind::Bullet,
        )
        .unwrap();
    engine
        .world_mut()
        .get::<&mut Projectile>(shot)
        .unwrap()
        .damage = 1700.0;
    engine.drain_events();

    engine.advance(DT);

    let boss = engine.boss().get().unwrap();
    assert_eq!(boss.hp, 3300.0);
    assert_eq!(boss.phase, 2);
    assert_eq!(boss.invulnerable, BOSS_PHASE_INVULNERABILITY);
    assert!((boss.attack_power - 1.15).abs() < 1e-5);
    let phase_events: Vec<CombatEvent> = engine
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, CombatEvent::BossPhaseChanged { .. }))
        .collect();
    assert_eq!(phase_events, vec![CombatEvent::BossPhaseChanged { phase: 2 }]);
}

#[test]
fn pursuit_missile_without_targets_flies_straight() {
    let mut engine = quiet_engine();
    let missile = engine
        .create_projectile(
            Vec2::new(400.0, 450.0),
            Vec2::new(0.0, -500.0),
            ProjectileKind::CurvedMissile,
        )
        .unwrap();

    engine.advance(DT);
    assert!(matches!(
        engine.world().get::<&Projectile>(missile).unwrap().guidance,
        Guidance::Pursuit(PursuitState::Launch { target: None, .. })
    ));

    for _ in 0..4 {
        engine.advance(DT);
    }
    let projectile = engine.world().get::<&Projectile>(missile).unwrap();
    assert_eq!(projectile.guidance, Guidance::Pursuit(PursuitState::Released));
    let body = engine.world().get::<&Body>(missile).unwrap();
    assert_eq!(body.vel, Vec2::new(0.0, -PURSUIT_FALLBACK_SPEED));
}

#[test]
fn pursuit_missile_locks_and_strikes() {
    let mut engine = quiet_engine();
    let bomber = engine.create_adversary(Vec2::new(300.0, 150.0), AdversaryKind::Bomber);
    let missile = engine
        .create_projectile(
            Vec2::new(400.0, 450.0),
            Vec2::new(0.0, -500.0),
            ProjectileKind::CurvedMissile,
        )
        .unwrap();

    let mut struck = false;
    for _ in 0..90 {
        engine.advance(DT);
        let hp = engine.world().get::<&Adversary>(bomber).unwrap().hp;
        if hp < 8.0 {
            struck = true;
            break;
        }
    }
    assert!(struck, "pursuit missile never reached the bomber");
    assert!(!engine.world().contains(missile));
}

#[test]
fn dead_adversary_is_not_hit_again_same_tick() {
    let mut engine = quiet_engine();
    let pos = Vec2::new(400.0, 150.0);
    engine.create_adversary(pos, AdversaryKind::Scout);
    engine.create_projectile(pos, Vec2::ZERO, ProjectileKind::Bullet);
    engine.create_projectile(pos, Vec2::ZERO, ProjectileKind::Bullet);

    engine.advance(DT);

    let kills = engine
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, CombatEvent::Kill { .. }))
        .count();
    assert_eq!(kills, 1);
    assert_eq!(adversary_count(&engine), 0);
    // The second bullet found nothing live to hit and is still flying.
    assert_eq!(engine.projectile_count(), 1);
}

#[test]
fn plasma_spends_penetration_then_dies() {
    let mut engine = quiet_engine();
    let pos = Vec2::new(400.0, 200.0);
    let bombers: Vec<_> = (0..4)
        .map(|_| engine.create_adversary(pos, AdversaryKind::Bomber))
        .collect();
    let plasma = engine
        .create_projectile(pos, Vec2::ZERO, ProjectileKind::Plasma)
        .unwrap();

    engine.advance(DT);

    assert!(!engine.world().contains(plasma));
    let mut health: Vec<f32> = bombers
        .iter()
        .map(|&e| engine.world().get::<&Adversary>(e).unwrap().hp)
        .collect();
    health.sort_by(f32::total_cmp);
    // Penetration 2: three distinct hits, the fourth bomber is untouched.
    assert_eq!(health, vec![6.0, 6.0, 6.0, 8.0]);
}

#[test]
fn projectile_removed_on_the_tick_it_leaves() {
    let mut engine = quiet_engine();
    let missile = engine
        .create_projectile(
            Vec2::new(400.0, -30.0),
            Vec2::new(0.0, -600.0),
            ProjectileKind::Missile,
        )
        .unwrap();

    // Still overlapping the margin after the first step.
    engine.advance(DT);
    assert!(engine.world().contains(missile));

    engine.advance(DT);
    assert!(!engine.world().contains(missile));
    let exploded = engine
        .drain_events()
        .iter()
        .any(|e| matches!(e, CombatEvent::Explosion { .. }));
    assert!(!exploded, "leaving the arena must not detonate");
}

#[test]
fn missile_expiry_detonates_nearby_units() {
    let mut engine = quiet_engine();
    let bomber = engine.create_adversary(Vec2::new(400.0, 100.0), AdversaryKind::Bomber);
    let missile = engine
        .create_projectile(Vec2::new(400.0, 130.0), Vec2::ZERO, ProjectileKind::Missile)
        .unwrap();
    engine.world_mut().get::<&mut Body>(missile).unwrap().age = 4.0 - DT / 2.0;

    engine.advance(DT);

    assert!(!engine.world().contains(missile));
    let hp = engine.world().get::<&Adversary>(bomber).unwrap().hp;
    assert!(hp < 8.0, "bomber inside the blast radius took no damage");
}

#[test]
fn long_autopilot_run_keeps_player_inside_arena() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 99,
        ..Default::default()
    });
    let arena = engine.arena();
    for tick in 0..1800u32 {
        let movement = match (tick / 45) % 4 {
            0 => Vec2::new(1.0, -1.0),
            1 => Vec2::new(-1.0, 0.0),
            2 => Vec2::new(0.0, 1.0),
            _ => Vec2::new(1.0, 0.5),
        };
        engine.queue_command(sortie_sim::core::commands::CombatCommand::SetInput {
            movement,
            fire: true,
        });
        engine.advance(DT);
        engine.drain_events();

        let player = engine.player();
        if player.body.is_live() {
            let half = player.body.size / 2.0;
            assert!(player.body.pos.x >= half.x - 1e-3);
            assert!(player.body.pos.x <= arena.width - half.x + 1e-3);
            assert!(player.body.pos.y >= half.y - 1e-3);
            assert!(player.body.pos.y <= arena.height - half.y + 1e-3);
        }
        assert!(engine.projectile_count() <= DEFAULT_PROJECTILE_CAP);
    }
    assert!(engine.stats().adversaries_spawned > 0);
}

#[test]
fn boss_laser_expires_on_its_timer() {
    let mut engine = quiet_engine();
    let beam = engine
        .create_projectile(Vec2::new(400.0, 250.0), Vec2::ZERO, ProjectileKind::BossLaser)
        .unwrap();
    let hp = engine.player().hp;

    for _ in 0..34 {
        engine.advance(DT);
    }
    assert!(engine.world().contains(beam), "beam gone before its duration");
    assert_eq!(engine.world().get::<&Body>(beam).unwrap().pos, Vec2::new(400.0, 250.0));

    for _ in 0..4 {
        engine.advance(DT);
    }
    assert!(!engine.world().contains(beam), "beam outlived its duration");
    assert_eq!(engine.player().hp, hp);
    let exploded = engine
        .drain_events()
        .iter()
        .any(|e| matches!(e, CombatEvent::Explosion { .. }));
    assert!(!exploded);
}

#[test]
fn homing_missile_steers_toward_nearest_in_range() {
    let mut engine = quiet_engine();
    engine.create_adversary(Vec2::new(560.0, 300.0), AdversaryKind::Bomber);
    engine.create_adversary(Vec2::new(150.0, 300.0), AdversaryKind::Bomber);
    let missile = engine
        .create_projectile(
            Vec2::new(400.0, 300.0),
            Vec2::new(0.0, -HOMING_MAX_SPEED),
            ProjectileKind::Missile,
        )
        .unwrap();

    for _ in 0..3 {
        engine.advance(DT);
        let vel = engine.world().get::<&Body>(missile).unwrap().vel;
        assert!(vel.x > 0.0, "missile turned toward the farther bomber: {vel}");
        assert!(vel.length() <= HOMING_MAX_SPEED + 1e-3);
    }
}

#[test]
fn homing_missile_ignores_targets_beyond_radius() {
    let mut engine = quiet_engine();
    engine.create_adversary(Vec2::new(150.0, 300.0), AdversaryKind::Bomber);
    let launch = Vec2::new(0.0, -350.0);
    let missile = engine
        .create_projectile(Vec2::new(400.0, 300.0), launch, ProjectileKind::Missile)
        .unwrap();

    engine.advance(DT);

    let vel = engine.world().get::<&Body>(missile).unwrap().vel;
    assert_eq!(vel, launch);
}
