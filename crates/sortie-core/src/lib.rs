//! Core types and definitions for the SORTIE combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, the projectile registration table, events,
//! configuration, the injectable random source and state snapshots.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod context;
pub mod enums;
pub mod events;
pub mod profiles;
pub mod random;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
