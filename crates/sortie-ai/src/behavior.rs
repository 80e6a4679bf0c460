//! Adversary behavior finite state machine.
//!
//! Pure functions that pick the behavior state and the steering velocity for
//! a unit from plain data. No ECS dependency.

use glam::Vec2;

use sortie_core::constants::*;
use sortie_core::enums::{BehaviorState, MovementPattern};

use crate::patterns::{pattern_velocity, PatternInput};

/// Input to a behavior re-evaluation.
pub struct BehaviorContext {
    pub state: BehaviorState,
    pub health_ratio: f32,
    /// Formation member whose leader is still alive.
    pub has_live_leader: bool,
    /// Distance to the player, `f32::INFINITY` when there is no live player.
    pub distance_to_player: f32,
    pub aggro_range: f32,
    pub aggressive: bool,
}

pub struct BehaviorUpdate {
    pub new_state: BehaviorState,
    pub state_changed: bool,
}

/// Choose the next behavior state. Retreat outranks formation, formation
/// outranks engage, anything else patrols.
pub fn evaluate(ctx: &BehaviorContext) -> BehaviorUpdate {
    let new_state = if ctx.health_ratio < RETREAT_HEALTH_RATIO {
        BehaviorState::Retreat
    } else if ctx.has_live_leader {
        BehaviorState::Formation
    } else if ctx.aggressive && ctx.distance_to_player < ctx.aggro_range {
        BehaviorState::Engage
    } else {
        BehaviorState::Patrol
    };

    BehaviorUpdate {
        new_state,
        state_changed: new_state != ctx.state,
    }
}

/// Cooldown between bursts in `state`.
pub fn effective_cooldown(state: BehaviorState, base: f32) -> f32 {
    match state {
        BehaviorState::Engage => (base * ENGAGE_COOLDOWN_FACTOR).max(ENGAGE_COOLDOWN_FLOOR),
        _ => base,
    }
}

/// Leader state as seen by a formation member.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderView {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Everything steering needs for one unit.
pub struct SteeringInput {
    pub state: BehaviorState,
    pub pattern: MovementPattern,
    pub pattern_time: f32,
    pub speed: f32,
    pub pos: Vec2,
    pub player_pos: Option<Vec2>,
    pub pursuit_capable: bool,
    pub leader: Option<LeaderView>,
    pub formation_offset: Vec2,
}

/// Velocity for the unit's current state, before evasion.
pub fn steer(input: &SteeringInput) -> Vec2 {
    let to_player = input
        .player_pos
        .map(|p| p - input.pos)
        .unwrap_or(Vec2::ZERO);
    let patrol = || {
        pattern_velocity(
            input.pattern,
            PatternInput {
                t: input.pattern_time,
                speed: input.speed,
                to_player,
            },
        )
    };

    match input.state {
        BehaviorState::Patrol => patrol(),
        BehaviorState::Engage => match input.player_pos {
            Some(player) if input.pursuit_capable => engage_velocity(input, player),
            _ => patrol(),
        },
        BehaviorState::Retreat => {
            let sweep = (input.pattern_time * RETREAT_SWEEP_FREQ).sin();
            Vec2::new(
                sweep * input.speed * RETREAT_SWEEP_FACTOR,
                -input.speed * RETREAT_SPEED_FACTOR,
            )
        }
        BehaviorState::Formation => match input.leader {
            Some(leader) => {
                let slot = leader.pos + input.formation_offset;
                (slot - input.pos) * FORMATION_GAIN + leader.vel
            }
            None => patrol(),
        },
    }
}

/// Close laterally on the player while holding a stand-off above it.
fn engage_velocity(input: &SteeringInput, player: Vec2) -> Vec2 {
    let s = input.speed;
    let dx = player.x - input.pos.x;
    let desired_y = player.y - ENGAGE_STANDOFF;
    let dy = desired_y - input.pos.y;
    Vec2::new(
        (dx * ENGAGE_LATERAL_GAIN).clamp(-s, s),
        (dy * ENGAGE_VERTICAL_GAIN).clamp(-s * 0.5, s),
    )
}
