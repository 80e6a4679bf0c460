//! Decision logic for SORTIE.
//!
//! Adversary behavior state machines, movement patterns, burst fire, aiming,
//! evasion, and the boss attack director. Everything here operates on plain
//! data plus a `CombatContext`; the simulation crate owns the entities.

pub mod aim;
pub mod behavior;
pub mod boss;
pub mod burst;
pub mod controller;
pub mod evasion;
pub mod patterns;
pub mod profiles;

pub use sortie_core as core;
