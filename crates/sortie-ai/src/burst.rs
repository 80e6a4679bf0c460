//! Burst-fire controller.
//!
//! When the cooldown expires one shot fires immediately, the rest of the
//! burst follows at `burst_delay` spacing, then the cooldown restarts.

use sortie_core::components::{BurstState, Weapon};

/// Advance the controller by `dt` and return how many shots fire this tick.
pub fn tick(state: &mut BurstState, weapon: &Weapon, cooldown: f32, dt: f32) -> u32 {
    let mut shots = 0;

    if state.remaining == 0 {
        state.cooldown_timer -= dt;
        if state.cooldown_timer > 0.0 {
            return 0;
        }
        shots += 1;
        state.remaining = weapon.burst_count.saturating_sub(1);
        state.shot_timer = weapon.burst_delay;
        state.cooldown_timer = cooldown;
        return shots;
    }

    state.shot_timer -= dt;
    while state.remaining > 0 && state.shot_timer <= 0.0 {
        shots += 1;
        state.remaining -= 1;
        state.shot_timer += weapon.burst_delay.max(f32::EPSILON);
    }
    if state.remaining == 0 {
        state.shot_timer = 0.0;
    }
    shots
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortie_core::enums::ProjectileKind;

    fn weapon(burst_count: u32) -> Weapon {
        Weapon {
            projectile: ProjectileKind::EnemyBullet,
            cooldown: 2.0,
            burst_count,
            burst_delay: 0.1,
            accuracy: 1.0,
        }
    }

    #[test]
    fn single_shot_waits_for_cooldown() {
        let w = weapon(1);
        let mut state = BurstState {
            cooldown_timer: 0.5,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &w, 2.0, 0.25), 0);
        assert_eq!(tick(&mut state, &w, 2.0, 0.25), 1);
        assert_eq!(state.cooldown_timer, 2.0);
        assert_eq!(tick(&mut state, &w, 2.0, 0.25), 0);
    }

    #[test]
    fn burst_spaces_follow_up_shots() {
        let w = weapon(3);
        let mut state = BurstState::default();
        let dt = 0.05;
        let mut fired = Vec::new();
        for _ in 0..10 {
            fired.push(tick(&mut state, &w, 2.0, dt));
        }
        // First shot on tick 0, then one every 0.1s
        assert_eq!(fired.iter().sum::<u32>(), 3);
        assert_eq!(fired[0], 1);
        assert_eq!(fired[1], 0);
        assert_eq!(fired[2], 1);
        assert_eq!(fired[4], 1);
    }

    #[test]
    fn large_step_fires_owed_shots_together() {
        let w = weapon(4);
        let mut state = BurstState::default();
        assert_eq!(tick(&mut state, &w, 2.0, 0.01), 1);
        assert_eq!(tick(&mut state, &w, 2.0, 0.35), 3);
        assert_eq!(state.remaining, 0);
    }
}
