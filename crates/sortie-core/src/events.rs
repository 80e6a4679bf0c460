//! Events emitted by the simulation for scoring, audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// What was destroyed for a kill reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillTarget {
    Adversary(AdversaryKind),
    Boss(BossKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// Reward for a defeated adversary or boss.
    Kill {
        target: KillTarget,
        score: u32,
        x: f32,
        y: f32,
    },
    PlayerDamaged { amount: f32 },
    /// Transient on-screen text.
    Message { text: String, duration_ms: u32 },
    BossPhaseChanged { phase: u8 },
    LaserWarning { stage: ChargeWarning },
    LaserDischarged { beams: u32 },
    Explosion { x: f32, y: f32, radius: f32 },
    PickupCollected { kind: PickupKind },
    PlayerDown,
}

impl CombatEvent {
    pub fn message(text: impl Into<String>, duration_ms: u32) -> Self {
        CombatEvent::Message {
            text: text.into(),
            duration_ms,
        }
    }

    /// Forward this event to the matching sink callback, if it has one.
    pub fn dispatch(&self, sink: &mut dyn FeedbackSink) {
        match self {
            CombatEvent::Kill {
                target,
                score,
                x,
                y,
            } => sink.on_kill(*target, *score, *x, *y),
            CombatEvent::PlayerDamaged { amount } => sink.on_player_damaged(*amount),
            CombatEvent::Message { text, duration_ms } => sink.on_message(text, *duration_ms),
            _ => {}
        }
    }
}

/// Host-side receiver for rewards and feedback. The core only calls it.
pub trait FeedbackSink {
    fn on_kill(&mut self, target: KillTarget, score: u32, x: f32, y: f32);
    fn on_player_damaged(&mut self, amount: f32);
    fn on_message(&mut self, text: &str, duration_ms: u32);
}
