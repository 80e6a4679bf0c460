//! Reactive evasion against incoming player fire.

use glam::Vec2;

use sortie_core::constants::EVASION_IMPULSE;

/// An incoming projectile as seen by the evading unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threat {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Nearest threat within `radius` that is moving toward `pos`.
pub fn nearest_incoming(pos: Vec2, threats: &[Threat], radius: f32) -> Option<Threat> {
    threats
        .iter()
        .filter(|t| t.vel.dot(pos - t.pos) > 0.0)
        .map(|t| (t, t.pos.distance_squared(pos)))
        .filter(|(_, d2)| *d2 <= radius * radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(t, _)| *t)
}

/// Lateral impulse that moves `pos` off the threat's line of flight.
pub fn evasion_impulse(pos: Vec2, threat: &Threat) -> Vec2 {
    let heading = threat.vel.normalize_or_zero();
    let mut lateral = heading.perp();
    if lateral == Vec2::ZERO {
        lateral = Vec2::X;
    }
    if lateral.dot(pos - threat.pos) < 0.0 {
        lateral = -lateral;
    }
    lateral * EVASION_IMPULSE
}
