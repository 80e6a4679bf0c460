//! Simulation configuration and its JSON loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{AdversaryKind, BossKind};
use crate::types::Arena;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One entry of a spawn probability table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnWeight {
    pub kind: AdversaryKind,
    pub weight: f32,
}

/// Probability table active from `from_secs` of wave time onward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnStage {
    pub from_secs: f32,
    pub weights: Vec<SpawnWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub enabled: bool,
    pub base_interval: f32,
    pub min_interval: f32,
    pub ramp_secs: f32,
    pub formation_interval: f32,
    /// Wave time at which the boss arrives, `None` for no boss.
    pub boss_at_secs: Option<f32>,
    pub boss_kind: BossKind,
    /// Stages ordered by `from_secs`.
    pub stages: Vec<SpawnStage>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        use AdversaryKind::*;
        let stage = |from_secs: f32, weights: &[(AdversaryKind, f32)]| SpawnStage {
            from_secs,
            weights: weights
                .iter()
                .map(|&(kind, weight)| SpawnWeight { kind, weight })
                .collect(),
        };
        Self {
            enabled: true,
            base_interval: SPAWN_BASE_INTERVAL,
            min_interval: SPAWN_MIN_INTERVAL,
            ramp_secs: SPAWN_RAMP_SECS,
            formation_interval: FORMATION_INTERVAL,
            boss_at_secs: Some(BOSS_SPAWN_SECS),
            boss_kind: BossKind::Dreadnought,
            stages: vec![
                stage(0.0, &[(Scout, 0.6), (Drone, 0.25), (Fighter, 0.15)]),
                stage(
                    30.0,
                    &[
                        (Scout, 0.35),
                        (Fighter, 0.3),
                        (Drone, 0.15),
                        (Bomber, 0.1),
                        (Hunter, 0.1),
                    ],
                ),
                stage(
                    60.0,
                    &[
                        (Scout, 0.2),
                        (Fighter, 0.3),
                        (Bomber, 0.2),
                        (Hunter, 0.2),
                        (Drone, 0.1),
                    ],
                ),
            ],
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and inputs produce the same run.
    pub seed: u64,
    pub arena: Arena,
    /// Scales adversary health and spawn rate (1.0 = normal).
    pub difficulty: f32,
    pub projectile_cap: usize,
    pub spawner: SpawnerConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: Arena::default(),
            difficulty: 1.0,
            projectile_cap: DEFAULT_PROJECTILE_CAP,
            spawner: SpawnerConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        if !(arena.width > 0.0 && arena.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena must have positive size, got {}x{}",
                arena.width, arena.height
            )));
        }
        if !(arena.margin >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena margin must be non-negative, got {}",
                arena.margin
            )));
        }
        if !(self.difficulty > 0.0 && self.difficulty.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "difficulty must be positive, got {}",
                self.difficulty
            )));
        }
        if self.projectile_cap == 0 {
            return Err(ConfigError::Invalid("projectile_cap must be non-zero".into()));
        }

        let spawner = &self.spawner;
        if !(spawner.min_interval > 0.0 && spawner.base_interval >= spawner.min_interval) {
            return Err(ConfigError::Invalid(format!(
                "spawn intervals must satisfy 0 < min ({}) <= base ({})",
                spawner.min_interval, spawner.base_interval
            )));
        }
        if !(spawner.formation_interval > 0.0) {
            return Err(ConfigError::Invalid(
                "formation_interval must be positive".into(),
            ));
        }
        if spawner
            .stages
            .windows(2)
            .any(|pair| pair[1].from_secs < pair[0].from_secs)
        {
            return Err(ConfigError::Invalid(
                "spawn stages must be ordered by from_secs".into(),
            ));
        }
        if spawner
            .stages
            .iter()
            .flat_map(|s| s.weights.iter())
            .any(|w| w.weight < 0.0 || !w.weight.is_finite())
        {
            return Err(ConfigError::Invalid(
                "spawn weights must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}
