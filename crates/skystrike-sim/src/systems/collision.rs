//! Collision resolution system.
//!
//! Drone-vs-projectile ends the session. Drone-vs-target, while the drone
//! is descending, destroys every qualifying target in the same frame
//! (unified multi-kill policy) plus any neighbor inside the chain radius
//! of a destroyed target. Each kill spawns an explosion, bumps the score,
//! and is paired with exactly one replacement spawn, so the population
//! stays constant. Any kill resets the drone to its spawn point and ends
//! the descend cycle.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Drone, DroneRig, Projectile, Target};
use skystrike_core::constants::{
    CHAIN_KILL_RADIUS, DRONE_RADIUS, PROJECTILE_RADIUS, TARGET_RADIUS,
};
use skystrike_core::enums::DescendPhase;
use skystrike_core::events::AudioEvent;
use skystrike_core::types::{ArenaBounds, Position};

use crate::world_setup;

/// What collision resolution decided this frame.
pub struct CollisionOutcome {
    /// A projectile reached the drone; the engine freezes the session.
    pub drone_down: bool,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &ArenaBounds,
    current_tick: u64,
    next_target_id: &mut u32,
    score: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
) -> CollisionOutcome {
    let no_hit = CollisionOutcome { drone_down: false };

    let drone = world
        .query::<(&Drone, &Position, &DroneRig)>()
        .iter()
        .next()
        .map(|(entity, (_, pos, rig))| (entity, *pos, rig.descend.is_descending()));
    let (drone_entity, drone_pos, descending) = match drone {
        Some(d) => d,
        None => return no_hit,
    };

    // Projectile hit wins over anything else this frame.
    let projectile_hit = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .any(|(_, (_, pos))| pos.range_to(&drone_pos) < DRONE_RADIUS + PROJECTILE_RADIUS);
    if projectile_hit {
        audio_events.push(AudioEvent::DroneDown);
        return CollisionOutcome { drone_down: true };
    }

    // Kills only happen while descending.
    if !descending {
        return no_hit;
    }

    let targets: Vec<(hecs::Entity, u32, Position)> = world
        .query::<(&Target, &Position)>()
        .iter()
        .map(|(entity, (target, pos))| (entity, target.id, *pos))
        .collect();

    let kill_range = DRONE_RADIUS + TARGET_RADIUS;
    let mut dead = vec![false; targets.len()];

    for i in 0..targets.len() {
        if dead[i] || drone_pos.range_to(&targets[i].2) >= kill_range {
            continue;
        }
        dead[i] = true;
        // Chain: one scan over the remaining targets around this kill.
        for j in 0..targets.len() {
            if !dead[j] && targets[j].2.range_to(&targets[i].2) < CHAIN_KILL_RADIUS {
                dead[j] = true;
            }
        }
    }

    let killed: Vec<&(hecs::Entity, u32, Position)> = targets
        .iter()
        .zip(&dead)
        .filter_map(|(t, &d)| d.then_some(t))
        .collect();
    if killed.is_empty() {
        return no_hit;
    }

    for &&(entity, id, pos) in &killed {
        let _ = world.despawn(entity);
        world_setup::spawn_explosion(world, pos, current_tick);
        *score += 1;
        audio_events.push(AudioEvent::Explosion { target_id: id });
    }

    // One replacement per kill; replacements are not kill candidates
    // this frame because the scan above already ran.
    for _ in &killed {
        world_setup::spawn_target(world, rng, arena, next_target_id, current_tick);
    }

    // Landing: back to the spawn point, descend cycle over.
    if let Ok(mut pos) = world.get::<&mut Position>(drone_entity) {
        *pos = world_setup::drone_spawn_point(arena);
    }
    if let Ok(mut rig) = world.get::<&mut DroneRig>(drone_entity) {
        rig.scale = 1.0;
        rig.descend = DescendPhase::Idle;
    }

    no_hit
}
