//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the drone, edge-spawned targets, projectiles, and explosion
//! markers with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::*;
use skystrike_core::constants::*;
use skystrike_core::enums::SpawnEdge;
use skystrike_core::types::{ArenaBounds, Position, Velocity};

/// Set up a fresh session: the drone plus the full target population.
pub fn setup_session(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &ArenaBounds,
    next_target_id: &mut u32,
    current_tick: u64,
    target_count: usize,
) {
    spawn_drone(world, arena);
    for _ in 0..target_count {
        spawn_target(world, rng, arena, next_target_id, current_tick);
    }
}

/// The fixed point the drone spawns at and resets to after a kill.
pub fn drone_spawn_point(arena: &ArenaBounds) -> Position {
    Position::new(DRONE_SPAWN_X, arena.height - DRONE_SPAWN_BOTTOM_MARGIN)
}

/// Spawn the player's drone at the spawn point, hovering at full scale.
pub fn spawn_drone(world: &mut World, arena: &ArenaBounds) -> hecs::Entity {
    world.spawn((
        Drone,
        drone_spawn_point(arena),
        Velocity::default(),
        DroneRig::default(),
    ))
}

/// Spawn a single target on a random arena edge with an inward drift.
///
/// The firing clock is staggered by a random fraction of the interval so
/// freshly spawned populations never fire synchronized volleys, and the
/// first speech bubble is scheduled a random gap out.
pub fn spawn_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &ArenaBounds,
    next_target_id: &mut u32,
    current_tick: u64,
) -> hecs::Entity {
    let id = *next_target_id;
    *next_target_id += 1;

    let edge = match rng.gen_range(0..4) {
        0 => SpawnEdge::Left,
        1 => SpawnEdge::Right,
        2 => SpawnEdge::Top,
        _ => SpawnEdge::Bottom,
    };

    let (position, drift) = match edge {
        SpawnEdge::Left => (
            Position::new(0.0, rng.gen_range(0.0..arena.height)),
            Velocity::new(TARGET_DRIFT_SPEED, 0.0),
        ),
        SpawnEdge::Right => (
            Position::new(arena.width, rng.gen_range(0.0..arena.height)),
            Velocity::new(-TARGET_DRIFT_SPEED, 0.0),
        ),
        SpawnEdge::Top => (
            Position::new(rng.gen_range(0.0..arena.width), 0.0),
            Velocity::new(0.0, TARGET_DRIFT_SPEED),
        ),
        SpawnEdge::Bottom => (
            Position::new(rng.gen_range(0.0..arena.width), arena.height),
            Velocity::new(0.0, -TARGET_DRIFT_SPEED),
        ),
    };

    let interval_ticks = (FIRE_INTERVAL_SECS / DT) as i64;
    let fire = FireControl {
        last_fired_tick: current_tick as i64 - rng.gen_range(0..=interval_ticks),
    };

    let gap_secs = rng.gen_range(CHATTER_MIN_GAP_SECS..CHATTER_MAX_GAP_SECS);
    let chatter = Chatter {
        line: None,
        until_tick: 0,
        next_line_tick: current_tick + (gap_secs / DT) as u64,
    };

    world.spawn((
        Target { id },
        position,
        Velocity::default(),
        Wander { drift },
        fire,
        chatter,
    ))
}

/// Spawn a projectile with a fixed velocity (aimed at spawn time).
pub fn spawn_projectile(world: &mut World, position: Position, velocity: Velocity) -> hecs::Entity {
    world.spawn((Projectile, position, velocity))
}

/// Spawn an explosion marker. Despawned by cleanup after the fixed TTL.
pub fn spawn_explosion(world: &mut World, position: Position, current_tick: u64) -> hecs::Entity {
    world.spawn((
        Explosion {
            spawned_tick: current_tick,
        },
        position,
    ))
}
