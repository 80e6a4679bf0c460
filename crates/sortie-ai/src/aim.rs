//! Aim model: optional lead prediction plus accuracy-scaled angular error.

use glam::Vec2;

use sortie_core::constants::{AIM_LEAD_ACCURACY, AIM_MAX_ERROR};
use sortie_core::random::RandomSource;
use sortie_core::types::direction;

/// Where a projectile fired now at `speed` meets a target moving at
/// constant velocity. Two refinement passes are enough at game ranges.
pub fn lead_point(origin: Vec2, target_pos: Vec2, target_vel: Vec2, speed: f32) -> Vec2 {
    if speed <= 0.0 {
        return target_pos;
    }
    let mut aim = target_pos;
    for _ in 0..2 {
        let t = origin.distance(aim) / speed;
        aim = target_pos + target_vel * t;
    }
    aim
}

/// Unit firing direction from `origin` toward the target.
///
/// Above the lead threshold the shot leads the target. The angular error is
/// drawn uniformly within `±(1 - accuracy) × 30°`.
pub fn aim_direction(
    origin: Vec2,
    target_pos: Vec2,
    target_vel: Vec2,
    projectile_speed: f32,
    accuracy: f32,
    rng: &mut dyn RandomSource,
) -> Vec2 {
    let accuracy = accuracy.clamp(0.0, 1.0);
    let aim_point = if accuracy > AIM_LEAD_ACCURACY {
        lead_point(origin, target_pos, target_vel, projectile_speed)
    } else {
        target_pos
    };

    let to_target = aim_point - origin;
    let base = if to_target.length_squared() < 1e-6 {
        Vec2::Y
    } else {
        to_target.normalize()
    };

    let max_error = (1.0 - accuracy) * AIM_MAX_ERROR;
    let error = (rng.unit() * 2.0 - 1.0) * max_error;
    direction(base.y.atan2(base.x) + error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortie_core::random::SequenceRandom;

    #[test]
    fn perfect_accuracy_hits_stationary_target() {
        let mut rng = SequenceRandom::constant(0.9);
        let dir = aim_direction(
            Vec2::ZERO,
            Vec2::new(0.0, 100.0),
            Vec2::ZERO,
            200.0,
            1.0,
            &mut rng,
        );
        assert!((dir - Vec2::Y).length() < 1e-5);
    }

    #[test]
    fn high_accuracy_leads_moving_target() {
        let mut rng = SequenceRandom::constant(0.5);
        let dir = aim_direction(
            Vec2::ZERO,
            Vec2::new(0.0, 200.0),
            Vec2::new(100.0, 0.0),
            200.0,
            0.9,
            &mut rng,
        );
        assert!(dir.x > 0.1, "should lead to the right, got {dir:?}");
    }

    #[test]
    fn low_accuracy_does_not_lead() {
        let mut rng = SequenceRandom::constant(0.5);
        let dir = aim_direction(
            Vec2::ZERO,
            Vec2::new(0.0, 200.0),
            Vec2::new(100.0, 0.0),
            200.0,
            0.4,
            &mut rng,
        );
        // Sample 0.5 means zero error
        assert!(dir.x.abs() < 1e-5);
    }

    #[test]
    fn error_bounded_by_thirty_degrees() {
        for sample in [0.0, 0.25, 0.75, 0.999] {
            let mut rng = SequenceRandom::constant(sample);
            let dir = aim_direction(
                Vec2::ZERO,
                Vec2::new(0.0, 100.0),
                Vec2::ZERO,
                200.0,
                0.0,
                &mut rng,
            );
            let angle = dir.dot(Vec2::Y).clamp(-1.0, 1.0).acos();
            assert!(angle <= AIM_MAX_ERROR + 1e-4, "angle {angle} too large");
        }
    }
}
