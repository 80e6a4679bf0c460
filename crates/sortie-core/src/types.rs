//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box centred on `center` with full extents `size`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test. Boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Grow the box by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    /// True if this box lies entirely outside `other`.
    pub fn fully_outside(&self, other: &Aabb) -> bool {
        self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Kinematic entity: position, velocity, size and lifetime.
///
/// Positions are box centres, `+y` points down the screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Seconds since spawn.
    pub age: f32,
    pub active: bool,
    pub destroyed: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel,
            size,
            age: 0.0,
            active: true,
            destroyed: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Explicit Euler step.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.age += dt;
    }

    /// Alive for gameplay purposes: active and not yet destroyed.
    pub fn is_live(&self) -> bool {
        self.active && !self.destroyed
    }

    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }
}

/// The play rectangle `[0, width] × [0, height]` plus the despawn margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// How far outside the play rectangle an entity may drift before removal.
    pub margin: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: crate::constants::ARENA_WIDTH,
            height: crate::constants::ARENA_HEIGHT,
            margin: crate::constants::DESPAWN_MARGIN,
        }
    }
}

impl Arena {
    pub fn rect(&self) -> Aabb {
        Aabb {
            min: Vec2::ZERO,
            max: Vec2::new(self.width, self.height),
        }
    }

    /// Play rectangle grown by the despawn margin.
    pub fn despawn_rect(&self) -> Aabb {
        self.rect().inflate(self.margin)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True once `body` has drifted entirely outside the inflated rectangle.
    pub fn has_left(&self, body: &Body) -> bool {
        body.aabb().fully_outside(&self.despawn_rect())
    }

    /// True if `body`'s centre is on screen.
    pub fn is_visible(&self, body: &Body) -> bool {
        self.rect().contains_point(body.pos)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of advanced ticks.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Handle to the boss occupying the boss slot.
///
/// Each boss created gets a fresh handle, so a reference to a removed boss
/// never resolves to its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BossHandle(pub u32);

/// Non-owning reference to something a projectile can strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRef {
    Adversary(hecs::Entity),
    Boss(BossHandle),
    Player,
}

/// Unit vector for `angle` radians, measured from `+x` toward `+y`.
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
