//! Cleanup system: removes projectiles that left the arena and explosion
//! markers past their TTL. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use skystrike_core::components::{Explosion, Projectile};
use skystrike_core::constants::{DT, EXPLOSION_TTL_SECS};
use skystrike_core::types::{ArenaBounds, Position};

pub fn run(
    world: &mut World,
    arena: &ArenaBounds,
    current_tick: u64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (_projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if !arena.contains(pos) {
            despawn_buffer.push(entity);
        }
    }

    let ttl_ticks = (EXPLOSION_TTL_SECS / DT) as u64;
    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if current_tick.saturating_sub(explosion.spawned_tick) >= ttl_ticks {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
