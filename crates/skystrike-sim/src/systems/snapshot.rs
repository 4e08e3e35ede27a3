//! Snapshot system: queries the ECS world and builds a complete
//! GameSnapshot. This system is read-only — it never modifies the world.

use hecs::World;

use skystrike_behavior::steering::is_fleeing;
use skystrike_core::components::*;
use skystrike_core::constants::{DT, EXPLOSION_TTL_SECS};
use skystrike_core::enums::GamePhase;
use skystrike_core::events::AudioEvent;
use skystrike_core::state::*;
use skystrike_core::types::{ArenaBounds, Position, SimTime, Velocity};

/// Build a complete GameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: u32,
    arena: ArenaBounds,
    audio_events: Vec<AudioEvent>,
) -> GameSnapshot {
    let drone = build_drone(world);
    let drone_pos = drone.position;

    GameSnapshot {
        time: *time,
        phase,
        score,
        arena: arena.into(),
        drone,
        targets: build_targets(world, &drone_pos),
        projectiles: build_projectiles(world),
        explosions: build_explosions(world, time.tick),
        audio_events,
    }
}

/// Build the DroneView from the drone singleton.
fn build_drone(world: &World) -> DroneView {
    world
        .query::<(&Drone, &Position, &DroneRig)>()
        .iter()
        .next()
        .map(|(_, (_, pos, rig))| DroneView {
            position: *pos,
            scale: rig.scale,
            descending: rig.descend.is_descending(),
        })
        .unwrap_or_default()
}

/// Build TargetView list, sorted by id for deterministic output.
fn build_targets(world: &World, drone_pos: &Position) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position, &Velocity, &Chatter)>()
        .iter()
        .map(|(_, (target, pos, vel, chatter))| TargetView {
            id: target.id,
            position: *pos,
            velocity: *vel,
            fleeing: is_fleeing(pos, drone_pos),
            speech: chatter.line.clone(),
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (_, pos, vel))| ProjectileView {
            position: *pos,
            velocity: *vel,
        })
        .collect()
}

fn build_explosions(world: &World, current_tick: u64) -> Vec<ExplosionView> {
    let ttl_ticks = EXPLOSION_TTL_SECS / DT;
    world
        .query::<(&Explosion, &Position)>()
        .iter()
        .map(|(_, (explosion, pos))| ExplosionView {
            position: *pos,
            age_frac: (current_tick.saturating_sub(explosion.spawned_tick) as f64 / ttl_ticks)
                .clamp(0.0, 1.0),
        })
        .collect()
}
