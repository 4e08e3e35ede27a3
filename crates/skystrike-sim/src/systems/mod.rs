//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or
//! is passed in from the engine.

use hecs::World;

use skystrike_core::components::Drone;
use skystrike_core::types::Position;

pub mod bounds;
pub mod chatter;
pub mod cleanup;
pub mod collision;
pub mod drone_control;
pub mod fire_control;
pub mod movement;
pub mod snapshot;
pub mod target_ai;

/// Position of the drone singleton, if one exists.
pub(crate) fn drone_position(world: &World) -> Option<Position> {
    world
        .query::<(&Drone, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
