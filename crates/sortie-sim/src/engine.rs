//! Simulation engine: the per-tick driver.
//!
//! `SimulationEngine` owns the hecs world (adversaries, projectiles and
//! pickups), the player, the boss slot and every buffer the systems share.
//! It is completely headless, enabling deterministic testing: the same
//! config, command stream and dt stream always produce the same run.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};

use sortie_ai::profiles::{adversary_profile, boss_profile};
use sortie_core::commands::CombatCommand;
use sortie_core::components::{Player, PlayerInput, Projectile};
use sortie_core::config::{SimConfig, SpawnerConfig};
use sortie_core::constants::*;
use sortie_core::context::{CombatContext, PlayerView, ProjectileRequest};
use sortie_core::enums::{AdversaryKind, BossKind, MotionRule, ProjectileKind, RunState};
use sortie_core::events::{CombatEvent, FeedbackSink};
use sortie_core::profiles::projectile_profile;
use sortie_core::random::{RandomSource, SeededRandom};
use sortie_core::state::{CombatSnapshot, CombatStats};
use sortie_core::types::{Arena, Body, BossHandle, SimTime};

use crate::boss_slot::BossSlot;
use crate::collision;
use crate::combat::{live_targets, Battlefield, PickupDrop};
use crate::dynamics;
use crate::systems;
use crate::systems::spawner::{SpawnOrder, SpawnerState};
use crate::world_setup;

/// Accepted range for the difficulty multiplier.
const DIFFICULTY_RANGE: (f32, f32) = (0.25, 4.0);

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    player: Player,
    input: PlayerInput,
    boss: BossSlot,
    arena: Arena,
    difficulty: f32,
    projectile_cap: usize,
    rng: Box<dyn RandomSource>,
    time: SimTime,
    run_state: RunState,
    spawner_config: SpawnerConfig,
    spawner: SpawnerState,
    command_queue: VecDeque<CombatCommand>,
    requests: Vec<ProjectileRequest>,
    events: Vec<CombatEvent>,
    drops: Vec<PickupDrop>,
    despawn_buffer: Vec<Entity>,
    /// Sim-time until the next boss contact message may be shown.
    boss_contact_cooldown: f32,
    stats: CombatStats,
}

impl SimulationEngine {
    /// Create an engine drawing randomness from a ChaCha8 stream seeded by
    /// `config.seed`.
    pub fn new(config: SimConfig) -> Self {
        let rng = Box::new(SeededRandom::new(config.seed));
        Self::with_random(config, rng)
    }

    /// Create an engine with an explicit random source (scripted tests).
    pub fn with_random(config: SimConfig, rng: Box<dyn RandomSource>) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");
        log::debug!(
            "starting simulation: seed {}, arena {}x{}, difficulty {}",
            config.seed,
            config.arena.width,
            config.arena.height,
            config.difficulty
        );
        Self {
            world: World::new(),
            player: world_setup::new_player(config.arena),
            input: PlayerInput::default(),
            boss: BossSlot::default(),
            arena: config.arena,
            difficulty: config.difficulty,
            projectile_cap: config.projectile_cap,
            rng,
            time: SimTime::default(),
            run_state: RunState::Running,
            spawner: SpawnerState::new(&config.spawner),
            spawner_config: config.spawner,
            command_queue: VecDeque::new(),
            requests: Vec::new(),
            events: Vec::new(),
            drops: Vec::new(),
            despawn_buffer: Vec::new(),
            boss_contact_cooldown: 0.0,
            stats: CombatStats::default(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: CombatCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = CombatCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held player input immediately.
    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    pub fn set_difficulty(&mut self, multiplier: f32) {
        let (lo, hi) = DIFFICULTY_RANGE;
        let clamped = if multiplier.is_finite() {
            multiplier.clamp(lo, hi)
        } else {
            1.0
        };
        if clamped != multiplier {
            log::warn!("difficulty {multiplier} out of range, using {clamped}");
        }
        self.difficulty = clamped;
    }

    /// Advance the simulation by `dt` seconds (clamped to `[0, 1/30]`).
    /// A non-positive or non-finite `dt` only applies queued commands.
    pub fn advance(&mut self, dt: f32) {
        self.process_commands();
        if self.run_state == RunState::Paused {
            return;
        }
        let dt = if dt.is_finite() { dt.min(MAX_DT) } else { 0.0 };
        if dt <= 0.0 {
            return;
        }
        self.time.advance(dt);

        // 1. Wave spawner
        self.run_spawner(dt);

        // 2. Player, adversaries and boss; shots land in the request buffer
        {
            let mut ctx = CombatContext {
                dt,
                arena: self.arena,
                difficulty: self.difficulty,
                player: player_view(&self.player),
                rng: &mut *self.rng,
                requests: &mut self.requests,
                events: &mut self.events,
            };
            systems::player::run(&mut self.player, self.input, &mut ctx);
            ctx.player = player_view(&self.player);
            systems::adversaries::run(&mut self.world, &mut ctx, &mut self.stats);
            systems::boss::run(&mut self.boss, &mut ctx);
        }

        // 3. Materialise requests so they take part in this tick's collision
        self.materialize_requests();

        // 4. Projectile dynamics and pickup drift
        let outcome =
            systems::projectiles::run(&mut self.world, &self.player, &self.boss, self.arena, dt);
        systems::pickups::run(&mut self.world, self.arena, dt);
        self.boss_contact_cooldown = (self.boss_contact_cooldown - dt).max(0.0);

        // 5. Damage from pursuit strikes and expiry blasts, then collision
        {
            let mut bf = Battlefield {
                world: &mut self.world,
                player: &mut self.player,
                boss: &mut self.boss,
                rng: &mut *self.rng,
                events: &mut self.events,
                drops: &mut self.drops,
                stats: &mut self.stats,
            };
            bf.apply_dynamics(&outcome.strikes, &outcome.blasts);
            collision::run(&mut bf, &mut self.boss_contact_cooldown);
        }

        // 6. Prune, pay out a defeated boss, spawn drops
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.drops,
            &mut self.boss,
            &mut self.events,
            &mut self.stats,
        );
    }

    /// Create a projectile of `kind`. Returns `None` when the cap is reached
    /// and no destroyed projectile can be reclaimed.
    pub fn create_projectile(
        &mut self,
        pos: Vec2,
        vel: Vec2,
        kind: ProjectileKind,
    ) -> Option<Entity> {
        self.spawn_projectile(&ProjectileRequest::new(kind, pos, vel))
    }

    /// Spawn an adversary of `kind` centred on `pos`.
    pub fn create_adversary(&mut self, pos: Vec2, kind: AdversaryKind) -> Entity {
        let entity = world_setup::spawn_adversary(&mut self.world, kind, pos, self.difficulty);
        self.stats.adversaries_spawned = self.stats.adversaries_spawned.saturating_add(1);
        log::debug!("spawned {:?} at ({:.0}, {:.0})", kind, pos.x, pos.y);
        entity
    }

    /// Place a boss that will settle at `pos`. Fails while the slot is occupied.
    pub fn create_boss(&mut self, pos: Vec2, kind: BossKind) -> Option<BossHandle> {
        let difficulty = self.difficulty;
        let handle = self
            .boss
            .try_occupy(|handle| boss_profile(kind).instantiate(kind, handle, pos, difficulty));
        match handle {
            Some(_) => {
                log::info!("boss {:?} approaching", kind);
                self.events
                    .push(CombatEvent::message("WARNING: BOSS APPROACHING", MESSAGE_LONG_MS));
            }
            None => log::debug!("boss slot occupied, {:?} not created", kind),
        }
        handle
    }

    /// Take every event buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deliver buffered events to `sink` and clear the buffer.
    pub fn flush_events(&mut self, sink: &mut dyn FeedbackSink) {
        for event in self.events.drain(..) {
            event.dispatch(sink);
        }
    }

    pub fn snapshot(&self) -> CombatSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.player,
            &self.boss,
            self.time,
            self.run_state,
            &self.stats,
        )
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for hosts and tests that stage scenarios.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn boss(&self) -> &BossSlot {
        &self.boss
    }

    pub fn boss_mut(&mut self) -> &mut BossSlot {
        &mut self.boss
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    /// Projectiles in the store, including destroyed ones awaiting pruning.
    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: CombatCommand) {
        match command {
            CombatCommand::SetInput { movement, fire } => {
                self.input = PlayerInput { movement, fire };
            }
            CombatCommand::SetDifficulty { multiplier } => self.set_difficulty(multiplier),
            CombatCommand::Pause => {
                if self.run_state == RunState::Running {
                    self.run_state = RunState::Paused;
                }
            }
            CombatCommand::Resume => {
                if self.run_state == RunState::Paused {
                    self.run_state = RunState::Running;
                }
            }
        }
    }

    fn run_spawner(&mut self, dt: f32) {
        let orders = systems::spawner::run(
            &mut self.spawner,
            &self.spawner_config,
            self.difficulty,
            self.boss.is_occupied(),
            self.arena,
            dt,
            &mut *self.rng,
        );
        for order in orders {
            match order {
                SpawnOrder::Single { kind, x } => {
                    let entry_y = -adversary_profile(kind).size.y;
                    self.create_adversary(Vec2::new(x, entry_y), kind);
                }
                SpawnOrder::Formation { x } => {
                    let entry_y = -adversary_profile(AdversaryKind::Fighter).size.y;
                    let members = world_setup::spawn_formation(
                        &mut self.world,
                        Vec2::new(x, entry_y),
                        self.difficulty,
                    );
                    let count = u32::try_from(members.len()).unwrap_or(u32::MAX);
                    self.stats.adversaries_spawned =
                        self.stats.adversaries_spawned.saturating_add(count);
                    log::debug!("spawned formation of {} at x {:.0}", members.len(), x);
                }
                SpawnOrder::Boss { kind } => {
                    let station = Vec2::new(self.arena.width * 0.5, BOSS_RESTING_Y);
                    self.create_boss(station, kind);
                }
            }
        }
    }

    fn materialize_requests(&mut self) {
        let mut requests = std::mem::take(&mut self.requests);
        for request in requests.drain(..) {
            self.spawn_projectile(&request);
        }
        // Hand the allocation back for the next tick
        self.requests = requests;
    }

    fn spawn_projectile(&mut self, request: &ProjectileRequest) -> Option<Entity> {
        if self.projectile_count() >= self.projectile_cap {
            self.reclaim_destroyed_projectiles();
            if self.projectile_count() >= self.projectile_cap {
                self.stats.projectiles_rejected = self.stats.projectiles_rejected.saturating_add(1);
                log::debug!(
                    "projectile cap {} reached, {:?} rejected",
                    self.projectile_cap,
                    request.kind
                );
                return None;
            }
        }

        let profile = projectile_profile(request.kind);
        let target = if profile.motion == MotionRule::DirectPursuit {
            let candidates = live_targets(
                &self.world,
                &self.player,
                &self.boss,
                profile.alignment.opposing(),
            );
            dynamics::nearest(request.pos, &candidates, None).map(|c| c.target)
        } else {
            None
        };

        let (body, projectile) = world_setup::build_projectile(request, target);
        self.stats.projectiles_created = self.stats.projectiles_created.saturating_add(1);
        Some(self.world.spawn((body, projectile)))
    }

    fn reclaim_destroyed_projectiles(&mut self) {
        self.despawn_buffer.clear();
        for (entity, (body, _)) in self.world.query_mut::<(&Body, &Projectile)>() {
            if body.destroyed {
                self.despawn_buffer.push(entity);
            }
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }
}

fn player_view(player: &Player) -> PlayerView {
    PlayerView {
        pos: player.body.pos,
        vel: player.body.vel,
        live: player.body.is_live(),
    }
}
