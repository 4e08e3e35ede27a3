//! Fire control system — targets fire projectiles at the drone.
//!
//! Each target fires at most once per interval. Once the interval has
//! elapsed, a probability gate is rolled every tick until a shot goes
//! out, so eligible targets fire after a short random delay rather than
//! on a synchronized schedule. The shot is aimed at the drone's position
//! at fire time and never re-aimed.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{FireControl, Target};
use skystrike_core::constants::{DT, FIRE_INTERVAL_SECS, PROJECTILE_SPEED};
use skystrike_core::types::{Position, Velocity};

use crate::world_setup;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, current_tick: u64, fire_probability: f64) {
    let drone_pos = match super::drone_position(world) {
        Some(pos) => pos,
        None => return,
    };

    let interval_ticks = (FIRE_INTERVAL_SECS / DT) as i64;
    let mut shots: Vec<(Position, Velocity)> = Vec::new();

    for (_entity, (_target, pos, fire)) in
        world.query_mut::<(&Target, &Position, &mut FireControl)>()
    {
        if current_tick as i64 - fire.last_fired_tick < interval_ticks {
            continue;
        }
        if !rng.gen_bool(fire_probability) {
            continue;
        }
        let (dx, dy) = pos.unit_to(&drone_pos);
        if dx == 0.0 && dy == 0.0 {
            // Target is sitting on the drone; no aim direction exists.
            continue;
        }
        shots.push((
            *pos,
            Velocity::new(dx * PROJECTILE_SPEED, dy * PROJECTILE_SPEED),
        ));
        fire.last_fired_tick = current_tick as i64;
    }

    for (position, velocity) in shots {
        world_setup::spawn_projectile(world, position, velocity);
    }
}
