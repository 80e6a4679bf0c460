//! Wave spawner: timed adversary arrivals from a staged probability table,
//! periodic formations and the scheduled boss.

use sortie_core::config::{SpawnStage, SpawnWeight, SpawnerConfig};
use sortie_core::constants::SPAWN_EDGE_INSET;
use sortie_core::enums::{AdversaryKind, BossKind};
use sortie_core::random::RandomSource;
use sortie_core::types::Arena;

/// Horizontal room a formation needs on each side of its leader.
const FORMATION_HALF_WIDTH: f32 = 80.0;

/// Spawner progress.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerState {
    /// Wave time in seconds.
    pub elapsed: f32,
    pub spawn_timer: f32,
    pub formation_timer: f32,
    pub boss_spawned: bool,
}

impl SpawnerState {
    pub fn new(config: &SpawnerConfig) -> Self {
        Self {
            elapsed: 0.0,
            spawn_timer: config.base_interval,
            formation_timer: config.formation_interval,
            boss_spawned: false,
        }
    }
}

/// Something the engine should create this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnOrder {
    Single { kind: AdversaryKind, x: f32 },
    Formation { x: f32 },
    Boss { kind: BossKind },
}

/// First kind whose cumulative weight exceeds `roll`; Scout when nothing matches.
pub fn pick_kind(weights: &[SpawnWeight], roll: f32) -> AdversaryKind {
    let mut cumulative = 0.0;
    for entry in weights {
        cumulative += entry.weight;
        if roll < cumulative {
            return entry.kind;
        }
    }
    AdversaryKind::Scout
}

/// Latest stage that has started by `elapsed`.
pub fn stage_for(stages: &[SpawnStage], elapsed: f32) -> Option<&SpawnStage> {
    stages.iter().rev().find(|s| s.from_secs <= elapsed)
}

/// Interval between single spawns: shrinks with wave time and difficulty,
/// never below the configured minimum.
pub fn spawn_interval(config: &SpawnerConfig, elapsed: f32, difficulty: f32) -> f32 {
    let ramp = 1.0 + elapsed / config.ramp_secs.max(f32::EPSILON);
    (config.base_interval / ramp / difficulty.max(f32::EPSILON)).max(config.min_interval)
}

/// Advance wave time and decide what to spawn. Regular spawns pause while a
/// boss is present.
pub fn run(
    state: &mut SpawnerState,
    config: &SpawnerConfig,
    difficulty: f32,
    boss_present: bool,
    arena: Arena,
    dt: f32,
    rng: &mut dyn RandomSource,
) -> Vec<SpawnOrder> {
    let mut orders = Vec::new();
    if !config.enabled {
        return orders;
    }
    state.elapsed += dt;

    if let Some(at) = config.boss_at_secs {
        if !state.boss_spawned && state.elapsed >= at {
            state.boss_spawned = true;
            orders.push(SpawnOrder::Boss {
                kind: config.boss_kind,
            });
            return orders;
        }
    }
    if boss_present {
        return orders;
    }

    state.spawn_timer -= dt;
    if state.spawn_timer <= 0.0 {
        state.spawn_timer += spawn_interval(config, state.elapsed, difficulty);
        let weights = stage_for(&config.stages, state.elapsed)
            .map(|s| s.weights.as_slice())
            .unwrap_or(&[]);
        let kind = pick_kind(weights, rng.unit());
        let x = rng.range(SPAWN_EDGE_INSET, arena.width - SPAWN_EDGE_INSET);
        orders.push(SpawnOrder::Single { kind, x });
    }

    state.formation_timer -= dt;
    if state.formation_timer <= 0.0 {
        state.formation_timer += config.formation_interval;
        let inset = SPAWN_EDGE_INSET + FORMATION_HALF_WIDTH;
        let x = rng.range(inset, arena.width - inset);
        orders.push(SpawnOrder::Formation { x });
    }

    orders
}
