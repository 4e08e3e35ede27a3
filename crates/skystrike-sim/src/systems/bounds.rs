//! Arena boundary system.
//!
//! Clamps the drone inside the play area and reflects target drift off
//! the walls (sign flip on the offending axis, position clamped). Also
//! invoked directly on resize to pull entities into the new bounds.

use hecs::World;

use skystrike_core::components::{Drone, Target, Wander};
use skystrike_core::constants::{DRONE_HALF_EXTENT, TARGET_RADIUS};
use skystrike_core::types::{ArenaBounds, Position};

pub fn run(world: &mut World, arena: &ArenaBounds) {
    for (_entity, (_drone, pos)) in world.query_mut::<(&Drone, &mut Position)>() {
        pos.x = pos.x.clamp(DRONE_HALF_EXTENT, arena.width - DRONE_HALF_EXTENT);
        pos.y = pos.y.clamp(DRONE_HALF_EXTENT, arena.height - DRONE_HALF_EXTENT);
    }

    for (_entity, (_target, pos, wander)) in
        world.query_mut::<(&Target, &mut Position, &mut Wander)>()
    {
        if pos.x < TARGET_RADIUS {
            pos.x = TARGET_RADIUS;
            wander.drift.x = wander.drift.x.abs();
        } else if pos.x > arena.width - TARGET_RADIUS {
            pos.x = arena.width - TARGET_RADIUS;
            wander.drift.x = -wander.drift.x.abs();
        }
        if pos.y < TARGET_RADIUS {
            pos.y = TARGET_RADIUS;
            wander.drift.y = wander.drift.y.abs();
        } else if pos.y > arena.height - TARGET_RADIUS {
            pos.y = arena.height - TARGET_RADIUS;
            wander.drift.y = -wander.drift.y.abs();
        }
    }
}
