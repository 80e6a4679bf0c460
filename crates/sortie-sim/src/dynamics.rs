//! Guidance laws for projectiles.
//!
//! Homing steering with a speed ceiling, direct-pursuit heading blending,
//! nearest-target selection and the straight-flight fallback.

use glam::Vec2;

use sortie_core::constants::*;
use sortie_core::enums::Alignment;
use sortie_core::types::TargetRef;

/// A live entity a projectile could steer toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub target: TargetRef,
    pub pos: Vec2,
}

/// Nearest candidate to `pos`, optionally limited to `radius`.
pub fn nearest(pos: Vec2, candidates: &[Candidate], radius: Option<f32>) -> Option<Candidate> {
    candidates
        .iter()
        .map(|c| (c, c.pos.distance_squared(pos)))
        .filter(|(_, d2)| radius.map_or(true, |r| *d2 <= r * r))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| *c)
}

/// Accelerate toward `target` in proportion to `strength`, then clamp the
/// speed to the homing ceiling.
pub fn homing_velocity(pos: Vec2, vel: Vec2, target: Vec2, strength: f32, dt: f32) -> Vec2 {
    let to_target = target - pos;
    if to_target.length_squared() < 1e-6 {
        return vel;
    }
    let steered = vel + to_target.normalize() * strength * HOMING_ACCEL * dt;
    steered.clamp_length_max(HOMING_MAX_SPEED)
}

/// Blend the current heading 70/30 toward `target` at pursuit speed.
pub fn pursuit_velocity(pos: Vec2, vel: Vec2, target: Vec2) -> Vec2 {
    let desired = (target - pos).normalize_or_zero();
    let current = vel.normalize_or_zero();
    let blended = current * PURSUIT_BLEND_KEEP + desired * (1.0 - PURSUIT_BLEND_KEEP);
    let heading = if blended.length_squared() < 1e-6 {
        desired
    } else {
        blended.normalize()
    };
    heading * PURSUIT_SPEED
}

/// Straight flight in the alignment's firing direction.
pub fn fallback_velocity(alignment: Alignment) -> Vec2 {
    Vec2::new(0.0, alignment.forward_y() * PURSUIT_FALLBACK_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_respects_radius() {
        let candidates = [
            Candidate {
                target: TargetRef::Player,
                pos: Vec2::new(0.0, 250.0),
            },
        ];
        assert!(nearest(Vec2::ZERO, &candidates, Some(HOMING_RADIUS)).is_none());
        assert!(nearest(Vec2::ZERO, &candidates, None).is_some());
    }

    #[test]
    fn homing_speed_is_capped() {
        let v = homing_velocity(
            Vec2::ZERO,
            Vec2::new(0.0, -390.0),
            Vec2::new(0.0, -100.0),
            10.0,
            0.1,
        );
        assert!(v.length() <= HOMING_MAX_SPEED + 1e-3);
    }

    #[test]
    fn homing_turns_toward_target() {
        let v = homing_velocity(
            Vec2::ZERO,
            Vec2::new(0.0, -300.0),
            Vec2::new(100.0, 0.0),
            4.0,
            0.1,
        );
        assert!(v.x > 0.0);
    }

    #[test]
    fn pursuit_blends_and_holds_speed() {
        let v = pursuit_velocity(Vec2::ZERO, Vec2::new(0.0, -500.0), Vec2::new(100.0, 0.0));
        assert!((v.length() - PURSUIT_SPEED).abs() < 1e-2);
        assert!(v.x > 0.0 && v.y < 0.0, "partly turned, got {v:?}");
    }

    #[test]
    fn fallback_points_forward() {
        assert_eq!(fallback_velocity(Alignment::Player), Vec2::new(0.0, -600.0));
        assert_eq!(fallback_velocity(Alignment::Adversary), Vec2::new(0.0, 600.0));
    }
}
