//! Drone control system — held keys to velocity, descend state machine.

use hecs::World;

use skystrike_behavior::descend::{self, DescendContext};
use skystrike_core::components::{Drone, DroneRig};
use skystrike_core::constants::DRONE_SPEED;
use skystrike_core::types::Velocity;

use crate::engine::InputState;

/// Apply the pressed-key set to the drone's velocity and advance the
/// descend state machine by one tick.
pub fn run(world: &mut World, input: &InputState, current_tick: u64) {
    for (_entity, (_drone, vel, rig)) in world.query_mut::<(&Drone, &mut Velocity, &mut DroneRig)>()
    {
        let mut vx = 0.0;
        let mut vy = 0.0;
        if input.left {
            vx -= DRONE_SPEED;
        }
        if input.right {
            vx += DRONE_SPEED;
        }
        if input.up {
            vy -= DRONE_SPEED;
        }
        if input.down {
            vy += DRONE_SPEED;
        }
        *vel = Velocity::new(vx, vy);

        let update = descend::step(
            &DescendContext {
                phase: rig.descend,
                scale: rig.scale,
                key_held: input.descend,
            },
            current_tick,
        );
        rig.descend = update.phase;
        rig.scale = update.scale;
    }
}
