//! Target steering system.
//!
//! Calls the steering function from skystrike-behavior for each target:
//! flee directly away from the drone inside the escape radius, otherwise
//! follow the stored constant drift.

use hecs::World;

use skystrike_behavior::steering::{steer, SteerContext};
use skystrike_core::components::{Target, Wander};
use skystrike_core::types::{Position, Velocity};

/// Set each target's velocity for this tick.
pub fn run(world: &mut World) {
    let drone_pos = match super::drone_position(world) {
        Some(pos) => pos,
        None => return,
    };

    for (_entity, (_target, pos, vel, wander)) in
        world.query_mut::<(&Target, &Position, &mut Velocity, &Wander)>()
    {
        *vel = steer(&SteerContext {
            position: *pos,
            drift: wander.drift,
            drone_position: drone_pos,
        });
    }
}
