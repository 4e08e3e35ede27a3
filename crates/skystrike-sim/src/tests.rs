//! Tests for the simulation engine: determinism, movement bounds, firing,
//! collision resolution, descend mechanics, and session lifecycle.

use skystrike_core::commands::PlayerCommand;
use skystrike_core::components::{FireControl, Target, Wander};
use skystrike_core::constants::*;
use skystrike_core::enums::{GamePhase, MoveDirection};
use skystrike_core::events::AudioEvent;
use skystrike_core::types::{Position, Velocity};

use crate::engine::{SimConfig, SimulationEngine};

/// Config with firing disabled, so tests can position entities without a
/// stray projectile ending the session.
fn quiet_config(target_count: usize) -> SimConfig {
    SimConfig {
        fire_probability: 0.0,
        target_count,
        ..Default::default()
    }
}

fn started_engine(config: SimConfig) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::Start);
    engine
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started_engine(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = started_engine(SimConfig {
        seed: 12345,
        ..Default::default()
    });

    engine_a.queue_command(PlayerCommand::MoveKeyDown {
        direction: MoveDirection::Right,
    });
    engine_b.queue_command(PlayerCommand::MoveKeyDown {
        direction: MoveDirection::Right,
    });

    for _ in 0..600 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = started_engine(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = started_engine(SimConfig {
        seed: 222,
        ..Default::default()
    });

    // Spawn edges and drift headings come from the seed, so the very
    // first populated snapshots should already differ.
    let mut diverged = false;
    for _ in 0..60 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "different seeds should produce divergent output");
}

// ---- Session lifecycle ----

#[test]
fn test_ready_until_start() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Ready);
    assert!(snap.targets.is_empty());
    assert_eq!(engine.time().tick, 0);

    engine.queue_command(PlayerCommand::Start);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.targets.len(), DEFAULT_TARGET_COUNT);
    assert_eq!(engine.time().tick, 1);
}

#[test]
fn test_pause_stops_simulation() {
    let mut engine = started_engine(SimConfig::default());
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 10);

    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 10, "time should not advance while paused");
    assert_eq!(engine.phase(), GamePhase::Paused);

    engine.queue_command(PlayerCommand::Resume);
    for _ in 0..10 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, 20);
    assert_eq!(engine.phase(), GamePhase::Active);
}

#[test]
fn test_restart_resets_everything() {
    let mut engine = started_engine(quiet_config(3));
    for _ in 0..30 {
        engine.tick();
    }

    // Force a kill to move the score off zero.
    engine.queue_command(PlayerCommand::DescendPressed);
    engine.tick();
    let snap = engine.tick();
    engine.place_drone(snap.targets[0].position);
    engine.tick();
    assert!(engine.score() > 0);

    engine.queue_command(PlayerCommand::Restart);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.score, 0);
    assert_eq!(engine.time().tick, 1);
    assert_eq!(snap.targets.len(), 3);
    // Target handles restart from zero on a fresh session.
    let ids: Vec<u32> = snap.targets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert!(snap.projectiles.is_empty());
    assert!(snap.explosions.is_empty());
}

// ---- Drone movement ----

#[test]
fn test_drone_clamped_to_arena() {
    let mut engine = started_engine(quiet_config(DEFAULT_TARGET_COUNT));
    engine.queue_command(PlayerCommand::MoveKeyDown {
        direction: MoveDirection::Left,
    });
    engine.queue_command(PlayerCommand::MoveKeyDown {
        direction: MoveDirection::Up,
    });

    for _ in 0..600 {
        let snap = engine.tick();
        let pos = snap.drone.position;
        assert!(pos.x >= DRONE_HALF_EXTENT && pos.x <= snap.arena.width - DRONE_HALF_EXTENT);
        assert!(pos.y >= DRONE_HALF_EXTENT && pos.y <= snap.arena.height - DRONE_HALF_EXTENT);
    }

    // Ten seconds into a corner run the drone sits exactly on the clamp.
    let snap = engine.tick();
    assert_eq!(snap.drone.position.x, DRONE_HALF_EXTENT);
    assert_eq!(snap.drone.position.y, DRONE_HALF_EXTENT);
}

#[test]
fn test_resize_reclamps_entities() {
    let mut engine = started_engine(SimConfig::default());
    engine.tick();

    engine.queue_command(PlayerCommand::Resize {
        width: 400.0,
        height: 300.0,
    });
    let snap = engine.tick();
    assert_eq!(snap.arena.width, 400.0);
    assert_eq!(snap.arena.height, 300.0);

    let pos = snap.drone.position;
    assert!(pos.x >= DRONE_HALF_EXTENT && pos.x <= 400.0 - DRONE_HALF_EXTENT);
    assert!(pos.y >= DRONE_HALF_EXTENT && pos.y <= 300.0 - DRONE_HALF_EXTENT);
    for target in &snap.targets {
        assert!(target.position.x >= TARGET_RADIUS);
        assert!(target.position.x <= 400.0 - TARGET_RADIUS);
        assert!(target.position.y >= TARGET_RADIUS);
        assert!(target.position.y <= 300.0 - TARGET_RADIUS);
    }
}

// ---- Target behavior ----

#[test]
fn test_target_reflects_off_wall() {
    let mut engine = started_engine(quiet_config(0));
    engine.tick();
    engine.spawn_target_at(
        Position::new(750.0, 100.0),
        Velocity::new(TARGET_DRIFT_SPEED, 0.0),
    );

    for _ in 0..100 {
        engine.tick();
    }

    let world = engine.world();
    let mut query = world.query::<(&Target, &Position, &Wander)>();
    let (_, (_, pos, wander)) = query.iter().next().expect("target should still exist");
    assert!(pos.x <= 800.0 - TARGET_RADIUS);
    assert!(
        wander.drift.x < 0.0,
        "drift should have reflected off the right wall"
    );
}

#[test]
fn test_target_population_invariant_across_kills() {
    let mut engine = started_engine(quiet_config(DEFAULT_TARGET_COUNT));
    engine.queue_command(PlayerCommand::DescendPressed);
    engine.tick();

    for _ in 0..3 {
        let snap = engine.tick();
        assert_eq!(snap.targets.len(), DEFAULT_TARGET_COUNT);
        // Teleport onto a target; the next tick must kill and replace it.
        engine.place_drone(snap.targets[0].position);
        let snap = engine.tick();
        assert_eq!(
            snap.targets.len(),
            DEFAULT_TARGET_COUNT,
            "every destroy must be paired with exactly one spawn"
        );
    }
    assert!(engine.score() >= 3);
}

// ---- Collision: descend kills ----

#[test]
fn test_no_kill_outside_combined_radius() {
    let mut engine = started_engine(quiet_config(0));
    engine.queue_command(PlayerCommand::DescendPressed);
    engine.tick();

    // 100px apart: far beyond the combined radius, and exactly on the
    // escape threshold so the target holds still (zero drift).
    engine.spawn_target_at(Position::new(200.0, 300.0), Velocity::default());
    engine.place_drone(Position::new(300.0, 300.0));

    for _ in 0..30 {
        let snap = engine.tick();
        assert_eq!(snap.score, 0, "no kill may occur at distance >= 35");
        assert_eq!(snap.targets.len(), 1);
    }
}

#[test]
fn test_no_kill_without_descending() {
    let mut engine = started_engine(quiet_config(0));
    engine.tick();
    engine.spawn_target_at(Position::new(200.0, 300.0), Velocity::default());
    engine.place_drone(Position::new(210.0, 300.0));

    let snap = engine.tick();
    assert!(!snap.drone.descending);
    assert_eq!(snap.score, 0, "contact without descending must not kill");
    assert_eq!(snap.targets.len(), 1);
}

#[test]
fn test_kill_within_combined_radius() {
    let mut engine = started_engine(quiet_config(0));
    engine.queue_command(PlayerCommand::DescendPressed);
    engine.tick();

    let first_id = engine.spawn_target_at(Position::new(200.0, 300.0), Velocity::default());
    engine.place_drone(Position::new(230.0, 300.0)); // distance 30 < 35

    let snap = engine.tick();
    assert_eq!(snap.score, 1);
    assert_eq!(snap.targets.len(), 1, "killed target is replaced");
    assert_ne!(snap.targets[0].id, first_id);
    assert_eq!(snap.explosions.len(), 1);
    assert!(snap
        .audio_events
        .iter()
        .any(|e| matches!(e, AudioEvent::Explosion { target_id } if *target_id == first_id)));

    // Landing resets the drone to the spawn point and ends the descend.
    let spawn = Position::new(DRONE_SPAWN_X, snap.arena.height - DRONE_SPAWN_BOTTOM_MARGIN);
    assert_eq!(snap.drone.position, spawn);
    assert_eq!(snap.drone.scale, 1.0);
}

#[test]
fn test_chain_kill_destroys_overlapping_neighbor() {
    let mut engine = started_engine(quiet_config(0));
    engine.queue_command(PlayerCommand::DescendPressed);
    engine.tick();

    // Primary is in kill range of the drone; the neighbor is outside
    // kill range but inside the chain radius of the primary. The third
    // target is far from everything.
    engine.spawn_target_at(Position::new(202.0, 200.0), Velocity::default());
    engine.spawn_target_at(Position::new(206.0, 200.0), Velocity::default());
    engine.spawn_target_at(Position::new(500.0, 400.0), Velocity::default());
    engine.place_drone(Position::new(170.0, 200.0));

    let snap = engine.tick();
    assert_eq!(snap.score, 2, "primary kill plus one chained kill");
    assert_eq!(snap.targets.len(), 3);
    assert_eq!(snap.explosions.len(), 2);
}

#[test]
fn test_explosions_expire_after_ttl() {
    let mut engine = started_engine(quiet_config(0));
    engine.queue_command(PlayerCommand::DescendPressed);
    engine.tick();
    engine.spawn_target_at(Position::new(200.0, 300.0), Velocity::default());
    engine.place_drone(Position::new(210.0, 300.0));

    let snap = engine.tick();
    assert_eq!(snap.explosions.len(), 1);
    assert!(snap.explosions[0].age_frac < 0.1);

    let ttl_ticks = (EXPLOSION_TTL_SECS / DT) as u64;
    let mut snap = snap;
    for _ in 0..=ttl_ticks {
        snap = engine.tick();
    }
    assert!(snap.explosions.is_empty(), "explosion should expire after TTL");
}

// ---- Collision: projectile hit ----

#[test]
fn test_projectile_hit_is_terminal_and_irreversible() {
    let mut engine = started_engine(quiet_config(0));
    let snap = engine.tick();
    engine.spawn_projectile_at(snap.drone.position, Velocity::default());

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(snap
        .audio_events
        .iter()
        .any(|e| matches!(e, AudioEvent::DroneDown)));

    // Frozen: no time passes, the phase never flips back on its own.
    let frozen_tick = engine.time().tick;
    for _ in 0..60 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(engine.time().tick, frozen_tick);
    }

    // Only an explicit restart leaves the terminal state.
    engine.queue_command(PlayerCommand::Restart);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.score, 0);
}

#[test]
fn test_projectile_misses_at_distance() {
    let mut engine = started_engine(quiet_config(0));
    let snap = engine.tick();
    let drone = snap.drone.position;
    // Just outside the combined radius, flying away.
    engine.spawn_projectile_at(
        Position::new(drone.x + DRONE_RADIUS + PROJECTILE_RADIUS + 1.0, drone.y),
        Velocity::new(PROJECTILE_SPEED, 0.0),
    );

    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
}

// ---- Firing ----

#[test]
fn test_every_target_fires_within_first_interval() {
    let mut engine = started_engine(SimConfig {
        fire_probability: 1.0,
        ..Default::default()
    });
    engine.tick();

    let interval_ticks = (FIRE_INTERVAL_SECS / DT) as u64;
    for _ in 0..=interval_ticks {
        engine.tick();
        if engine.phase() != GamePhase::Active {
            // A projectile found the idle drone; firing clearly worked.
            return;
        }
    }

    // The spawn stagger is at most one interval, so with the gate forced
    // open every original target has fired by now.
    let world = engine.world();
    let mut query = world.query::<&FireControl>();
    for (_, fire) in query.iter() {
        // Replacement targets do not exist here (no kills occurred), so
        // every clock must have been stamped with a real fire tick.
        assert!(
            fire.last_fired_tick >= 0,
            "target never fired within the first interval: {}",
            fire.last_fired_tick
        );
    }
}

#[test]
fn test_projectile_aimed_at_drone_at_fire_time() {
    // One shooter far from the drone, with the probability gate forced open.
    let mut engine = started_engine(SimConfig {
        fire_probability: 1.0,
        target_count: 0,
        ..Default::default()
    });
    engine.tick();
    engine.spawn_target_at(Position::new(400.0, 100.0), Velocity::default());

    let interval_ticks = (FIRE_INTERVAL_SECS / DT) as u64;
    let mut fired: Option<(Position, Velocity)> = None;
    for _ in 0..=interval_ticks + 1 {
        let snap = engine.tick();
        if let Some(p) = snap.projectiles.first() {
            fired = Some((p.position, p.velocity));
            break;
        }
    }

    let (pos, vel) = fired.expect("shooter should fire within one interval");
    assert!((vel.speed() - PROJECTILE_SPEED).abs() < 1e-9);
    // Velocity points from the muzzle toward the drone spawn point.
    let drone = Position::new(DRONE_SPAWN_X, 600.0 - DRONE_SPAWN_BOTTOM_MARGIN);
    let (ux, uy) = pos.unit_to(&drone);
    let dot = (vel.x * ux + vel.y * uy) / PROJECTILE_SPEED;
    assert!(dot > 0.999, "projectile should fly straight at the drone, dot={dot}");
}

#[test]
fn test_projectile_despawns_out_of_bounds() {
    let mut engine = started_engine(quiet_config(0));
    engine.tick();
    engine.spawn_projectile_at(Position::new(10.0, 10.0), Velocity::new(-PROJECTILE_SPEED, 0.0));

    let mut seen = false;
    let mut gone = false;
    for _ in 0..20 {
        let snap = engine.tick();
        if !snap.projectiles.is_empty() {
            seen = true;
        } else if seen {
            gone = true;
            break;
        }
    }
    assert!(seen, "projectile should appear in snapshots first");
    assert!(gone, "projectile should despawn after leaving the arena");
}

// ---- Descend mechanics ----

#[test]
fn test_descend_scale_shrinks_and_release_resets() {
    let mut engine = started_engine(quiet_config(0));
    engine.tick();

    engine.queue_command(PlayerCommand::DescendPressed);
    let mut last_scale = 1.0;
    for _ in 0..30 {
        let snap = engine.tick();
        assert!(snap.drone.descending);
        assert!(snap.drone.scale <= last_scale);
        assert!(snap.drone.scale >= DESCEND_FLOOR);
        last_scale = snap.drone.scale;
    }
    assert!(last_scale < 1.0);

    engine.queue_command(PlayerCommand::DescendReleased);
    let snap = engine.tick();
    assert!(!snap.drone.descending);
    assert_eq!(snap.drone.scale, 1.0, "release resets scale immediately");
}

#[test]
fn test_descend_reaches_floor_before_timeout() {
    let mut engine = started_engine(quiet_config(0));
    engine.tick();
    engine.queue_command(PlayerCommand::DescendPressed);

    let shrink_ticks = ((1.0 - DESCEND_FLOOR) / (DESCEND_RATE * DT)).ceil() as u64 + 1;
    let mut snap = engine.tick();
    for _ in 0..shrink_ticks {
        snap = engine.tick();
    }
    assert!((snap.drone.scale - DESCEND_FLOOR).abs() < 1e-9);
    assert!(snap.drone.descending);
}

// ---- Chatter ----

#[test]
fn test_speech_bubbles_appear_and_expire() {
    let mut engine = started_engine(quiet_config(DEFAULT_TARGET_COUNT));

    let mut appeared = false;
    let mut expired = false;
    let mut speaking: Option<u32> = None;

    // 20 seconds covers the maximum chatter gap plus display time.
    for _ in 0..(20 * TICK_RATE as u64) {
        let snap = engine.tick();
        match speaking {
            None => {
                if let Some(t) = snap.targets.iter().find(|t| t.speech.is_some()) {
                    appeared = true;
                    speaking = Some(t.id);
                }
            }
            Some(id) => {
                let target = snap.targets.iter().find(|t| t.id == id);
                if target.map_or(true, |t| t.speech.is_none()) {
                    expired = true;
                    break;
                }
            }
        }
    }

    assert!(appeared, "some target should taunt within 20 seconds");
    assert!(expired, "speech bubbles must expire");
}
