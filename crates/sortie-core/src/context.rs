//! Per-tick services handed to AI and Director updates.
//!
//! Decision code never reaches into the entity store. It reads the world
//! through the views here and writes back through the request and event
//! buffers, which the engine drains after the update.

use glam::Vec2;

use crate::components::BeamSpan;
use crate::enums::ProjectileKind;
use crate::events::CombatEvent;
use crate::profiles::projectile_profile;
use crate::random::RandomSource;
use crate::types::Arena;

/// Read-only view of the player for decision code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub live: bool,
}

/// A projectile some update wants created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileRequest {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Multiplier on the kind's base damage.
    pub damage_scale: f32,
    pub span: Option<BeamSpan>,
}

impl ProjectileRequest {
    pub fn new(kind: ProjectileKind, pos: Vec2, vel: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel,
            damage_scale: 1.0,
            span: None,
        }
    }

    /// Launch along `dir` at the kind's registered speed.
    pub fn aimed(kind: ProjectileKind, pos: Vec2, dir: Vec2) -> Self {
        let speed = projectile_profile(kind).speed;
        Self::new(kind, pos, dir.normalize_or_zero() * speed)
    }

    pub fn with_damage_scale(mut self, scale: f32) -> Self {
        self.damage_scale = scale;
        self
    }

    /// Stationary beam covering `span`.
    pub fn beam(kind: ProjectileKind, span: BeamSpan) -> Self {
        let mid = (span.start + span.end) * 0.5;
        Self {
            kind,
            pos: mid,
            vel: Vec2::ZERO,
            damage_scale: 1.0,
            span: Some(span),
        }
    }
}

pub struct CombatContext<'a> {
    pub dt: f32,
    pub arena: Arena,
    pub difficulty: f32,
    pub player: PlayerView,
    pub rng: &'a mut dyn RandomSource,
    pub requests: &'a mut Vec<ProjectileRequest>,
    pub events: &'a mut Vec<CombatEvent>,
}

impl CombatContext<'_> {
    pub fn fire(&mut self, request: ProjectileRequest) {
        self.requests.push(request);
    }

    pub fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}
