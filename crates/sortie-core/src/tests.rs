#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::config::{ConfigError, SimConfig};
    use crate::enums::*;
    use crate::events::{CombatEvent, FeedbackSink, KillTarget};
    use crate::profiles::projectile_profile;
    use crate::random::{RandomSource, SeededRandom, SequenceRandom};
    use crate::types::{Aabb, Arena, Body};

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&b));

        let c = Aabb::from_center(Vec2::new(9.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_arena_has_left_only_beyond_margin() {
        let arena = Arena::default();
        let size = Vec2::new(10.0, 10.0);

        // Just above the top edge but inside the margin
        let near = Body::new(Vec2::new(100.0, -40.0), Vec2::ZERO, size);
        assert!(!arena.has_left(&near));

        // Bottom edge of the box is above the inflated rectangle
        let gone = Body::new(Vec2::new(100.0, -arena.margin - 6.0), Vec2::ZERO, size);
        assert!(arena.has_left(&gone));

        let right = Body::new(
            Vec2::new(arena.width + arena.margin + 6.0, 300.0),
            Vec2::ZERO,
            size,
        );
        assert!(arena.has_left(&right));
    }

    #[test]
    fn test_projectile_alignment_table() {
        let player_side = [
            ProjectileKind::Bullet,
            ProjectileKind::Plasma,
            ProjectileKind::Missile,
            ProjectileKind::CurvedMissile,
            ProjectileKind::WingmanBullet,
        ];
        for kind in ProjectileKind::ALL {
            let expected = if player_side.contains(&kind) {
                Alignment::Player
            } else {
                Alignment::Adversary
            };
            assert_eq!(kind.alignment(), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_profiles_are_sane() {
        for kind in ProjectileKind::ALL {
            let p = projectile_profile(kind);
            assert!(p.damage > 0.0, "{kind:?} has no damage");
            assert!(p.size.x > 0.0, "{kind:?} has no width");
            assert_eq!(p.homing_strength > 0.0, p.motion == MotionRule::Homing);
            if p.motion == MotionRule::Beam {
                assert!(p.max_age.is_some(), "beams must expire");
            }
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_config_uses_defaults() {
        let config = SimConfig::from_json_str(r#"{ "seed": 7, "difficulty": 1.5 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.difficulty, 1.5);
        assert_eq!(config.projectile_cap, SimConfig::default().projectile_cap);
        assert!(!config.spawner.stages.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = SimConfig::from_json_str(r#"{ "difficulty": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json_str(r#"{ "projectile_cap": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unordered_spawn_stages_rejected() {
        let mut config = SimConfig::default();
        config.spawner.stages.reverse();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sequence_random_cycles() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.9]);
        assert_eq!(rng.unit(), 0.1);
        assert_eq!(rng.unit(), 0.9);
        assert_eq!(rng.unit(), 0.1);
        assert_eq!(rng.index(3), 2);
    }

    #[test]
    fn test_seeded_random_is_deterministic() {
        let mut a = SeededRandom::new(99);
        let mut b = SeededRandom::new(99);
        for _ in 0..100 {
            let x = a.unit();
            assert_eq!(x, b.unit());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        kills: Vec<(KillTarget, u32)>,
        damage: f32,
        messages: Vec<String>,
    }

    impl FeedbackSink for RecordingSink {
        fn on_kill(&mut self, target: KillTarget, score: u32, _x: f32, _y: f32) {
            self.kills.push((target, score));
        }
        fn on_player_damaged(&mut self, amount: f32) {
            self.damage += amount;
        }
        fn on_message(&mut self, text: &str, _duration_ms: u32) {
            self.messages.push(text.to_string());
        }
    }

    #[test]
    fn test_event_dispatch_routes_to_sink() {
        let mut sink = RecordingSink::default();
        let events = vec![
            CombatEvent::Kill {
                target: KillTarget::Adversary(AdversaryKind::Scout),
                score: 100,
                x: 0.0,
                y: 0.0,
            },
            CombatEvent::PlayerDamaged { amount: 10.0 },
            CombatEvent::message("hello", 1000),
            CombatEvent::BossPhaseChanged { phase: 2 },
        ];
        for event in &events {
            event.dispatch(&mut sink);
        }
        assert_eq!(
            sink.kills,
            vec![(KillTarget::Adversary(AdversaryKind::Scout), 100)]
        );
        assert_eq!(sink.damage, 10.0);
        assert_eq!(sink.messages, vec!["hello".to_string()]);
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let json = serde_json::to_string(&CombatEvent::PlayerDamaged { amount: 5.0 }).unwrap();
        assert!(json.contains("\"type\":\"PlayerDamaged\""));
    }
}
