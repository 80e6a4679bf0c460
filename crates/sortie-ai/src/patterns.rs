//! Patrol movement generators.
//!
//! Each pattern is a pure function of the unit's pattern time and fixed
//! amplitude/frequency constants. Only `Pursuit` reads the player offset.

use glam::Vec2;

use sortie_core::constants::*;
use sortie_core::enums::MovementPattern;

/// Inputs shared by all patterns.
#[derive(Debug, Clone, Copy)]
pub struct PatternInput {
    /// Seconds the unit has been following its pattern.
    pub t: f32,
    /// Base speed of the unit.
    pub speed: f32,
    /// Vector from the unit to the player.
    pub to_player: Vec2,
}

/// Velocity the pattern prescribes at time `input.t`.
pub fn pattern_velocity(pattern: MovementPattern, input: PatternInput) -> Vec2 {
    let s = input.speed;
    let t = input.t;
    match pattern {
        MovementPattern::Straight | MovementPattern::Formation => Vec2::new(0.0, s),
        MovementPattern::Zigzag => {
            let phase = (std::f32::consts::TAU * ZIGZAG_FREQ * t).sin();
            let side = if phase >= 0.0 { 1.0 } else { -1.0 };
            Vec2::new(side * ZIGZAG_AMPLITUDE * s, s)
        }
        MovementPattern::Sine => Vec2::new((t * SINE_FREQ).cos() * SINE_AMPLITUDE, s),
        MovementPattern::Spiral => {
            let angle = t * SPIRAL_ANGULAR_SPEED;
            Vec2::new(
                angle.cos() * s * SPIRAL_RADIUS_FACTOR,
                s * SPIRAL_DESCENT_FACTOR + angle.sin() * s * 0.5,
            )
        }
        MovementPattern::Pursuit => {
            let vx = (input.to_player.x * PURSUIT_PATTERN_GAIN).clamp(-s, s);
            Vec2::new(vx, s * PURSUIT_PATTERN_DESCENT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(t: f32) -> PatternInput {
        PatternInput {
            t,
            speed: 100.0,
            to_player: Vec2::new(300.0, 200.0),
        }
    }

    #[test]
    fn straight_moves_down_at_speed() {
        let v = pattern_velocity(MovementPattern::Straight, input(3.0));
        assert_eq!(v, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn zigzag_alternates_sides() {
        // Quarter and three-quarter period
        let period = 1.0 / ZIGZAG_FREQ;
        let a = pattern_velocity(MovementPattern::Zigzag, input(period * 0.25));
        let b = pattern_velocity(MovementPattern::Zigzag, input(period * 0.75));
        assert!(a.x > 0.0);
        assert!(b.x < 0.0);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn patterns_are_pure_functions_of_time() {
        for pattern in [
            MovementPattern::Zigzag,
            MovementPattern::Sine,
            MovementPattern::Spiral,
        ] {
            assert_eq!(
                pattern_velocity(pattern, input(1.7)),
                pattern_velocity(pattern, input(1.7))
            );
        }
    }

    #[test]
    fn pursuit_clamps_lateral_speed() {
        let v = pattern_velocity(MovementPattern::Pursuit, input(0.0));
        assert_eq!(v.x, 100.0);
        assert!(v.y > 0.0);
    }
}
