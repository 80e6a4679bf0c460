//! Pickup drift.

use glam::Vec2;
use hecs::World;

use sortie_core::components::Pickup;
use sortie_core::constants::PICKUP_FALL_SPEED;
use sortie_core::types::{Arena, Body};

/// Drift every pickup down the screen; pickups that leave are dropped silently.
pub fn run(world: &mut World, arena: Arena, dt: f32) {
    for (_entity, (body, _pickup)) in world.query_mut::<(&mut Body, &Pickup)>() {
        if !body.is_live() {
            continue;
        }
        body.vel = Vec2::new(0.0, PICKUP_FALL_SPEED);
        body.integrate(dt);
        if arena.has_left(body) {
            body.destroyed = true;
        }
    }
}
