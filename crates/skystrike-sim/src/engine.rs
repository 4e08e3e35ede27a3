//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems once per tick, and produces `GameSnapshot`s.
//! Completely headless (no rendering dependency), enabling deterministic
//! testing: the same seed and command schedule replay identically.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::constants::{
    ARENA_DEFAULT_HEIGHT, ARENA_DEFAULT_WIDTH, DEFAULT_FIRE_PROBABILITY, DEFAULT_TARGET_COUNT,
    DRONE_SIZE,
};
use skystrike_core::enums::{GamePhase, MoveDirection};
use skystrike_core::events::AudioEvent;
use skystrike_core::state::GameSnapshot;
use skystrike_core::types::{ArenaBounds, SimTime};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial arena width in pixels.
    pub arena_width: f64,
    /// Initial arena height in pixels.
    pub arena_height: f64,
    /// Target population, held constant by replacement-on-kill.
    pub target_count: usize,
    /// Probability gate rolled each tick a target is interval-eligible.
    pub fire_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_width: ARENA_DEFAULT_WIDTH,
            arena_height: ARENA_DEFAULT_HEIGHT,
            target_count: DEFAULT_TARGET_COUNT,
            fire_probability: DEFAULT_FIRE_PROBABILITY,
        }
    }
}

/// The held-key set consumed by the drone control system each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub descend: bool,
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    arena: ArenaBounds,
    rng: ChaCha8Rng,
    score: u32,
    next_target_id: u32,
    target_count: usize,
    fire_probability: f64,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            arena: ArenaBounds::new(
                config.arena_width.max(DRONE_SIZE * 2.0),
                config.arena_height.max(DRONE_SIZE * 2.0),
            ),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: 0,
            next_target_id: 0,
            target_count: config.target_count,
            fire_probability: config.fire_probability.clamp(0.0, 1.0),
            input: InputState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Outside the Active phase the world is frozen: commands are still
    /// processed and a snapshot is still produced, but no system runs and
    /// time does not advance.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            self.arena,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current arena bounds.
    pub fn arena(&self) -> ArenaBounds {
        self.arena
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                if self.phase == GamePhase::Ready {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                self.start_session();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::MoveKeyDown { direction } => {
                self.set_move_key(direction, true);
            }
            PlayerCommand::MoveKeyUp { direction } => {
                self.set_move_key(direction, false);
            }
            PlayerCommand::DescendPressed => {
                self.input.descend = true;
            }
            PlayerCommand::DescendReleased => {
                self.input.descend = false;
            }
            PlayerCommand::Resize { width, height } => {
                self.arena = ArenaBounds::new(
                    width.max(DRONE_SIZE * 2.0),
                    height.max(DRONE_SIZE * 2.0),
                );
                // Pull everything back inside the new bounds right away,
                // even while paused or game over.
                systems::bounds::run(&mut self.world, &self.arena);
            }
        }
    }

    fn set_move_key(&mut self, direction: MoveDirection, held: bool) {
        match direction {
            MoveDirection::Up => self.input.up = held,
            MoveDirection::Down => self.input.down = held,
            MoveDirection::Left => self.input.left = held,
            MoveDirection::Right => self.input.right = held,
        }
    }

    /// Reset all entity collections, counters, and timers and relaunch.
    /// Physical key state outlives the reset, so the held-key set is kept.
    fn start_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.score = 0;
        self.next_target_id = 0;
        self.audio_events.clear();
        world_setup::setup_session(
            &mut self.world,
            &mut self.rng,
            &self.arena,
            &mut self.next_target_id,
            self.time.tick,
            self.target_count,
        );
        self.phase = GamePhase::Active;
    }

    /// Run all systems in frame order.
    fn run_systems(&mut self) {
        // 1. Held keys -> drone velocity; descend state machine step
        systems::drone_control::run(&mut self.world, &self.input, self.time.tick);
        // 2. Target steering (flee within the escape radius, else drift)
        systems::target_ai::run(&mut self.world);
        // 3. Kinematic integration for every moving entity
        systems::movement::run(&mut self.world);
        // 4. Drone clamp, target wall reflection
        systems::bounds::run(&mut self.world, &self.arena);
        // 5. Per-target interval/probability firing
        systems::fire_control::run(
            &mut self.world,
            &mut self.rng,
            self.time.tick,
            self.fire_probability,
        );
        // 6. Collision resolution: projectile hit, descend kills, chains
        let outcome = systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &self.arena,
            self.time.tick,
            &mut self.next_target_id,
            &mut self.score,
            &mut self.audio_events,
        );
        if outcome.drone_down {
            self.phase = GamePhase::GameOver;
        }
        // 7. Speech bubble timers
        systems::chatter::run(&mut self.world, &mut self.rng, self.time.tick);
        // 8. Cleanup (out-of-bounds projectiles, expired explosions)
        systems::cleanup::run(
            &mut self.world,
            &self.arena,
            self.time.tick,
            &mut self.despawn_buffer,
        );
    }

    /// Move the drone to an exact position (for tests).
    #[cfg(test)]
    pub fn place_drone(&mut self, position: skystrike_core::types::Position) {
        use skystrike_core::components::Drone;
        for (_entity, (_drone, pos)) in self
            .world
            .query_mut::<(&Drone, &mut skystrike_core::types::Position)>()
        {
            *pos = position;
        }
    }

    /// Spawn a target at an exact position with a fixed drift (for tests).
    /// The target never chatters and starts with a full firing cooldown.
    #[cfg(test)]
    pub fn spawn_target_at(
        &mut self,
        position: skystrike_core::types::Position,
        drift: skystrike_core::types::Velocity,
    ) -> u32 {
        use skystrike_core::components::{Chatter, FireControl, Target, Wander};
        use skystrike_core::types::Velocity;

        let id = self.next_target_id;
        self.next_target_id += 1;
        self.world.spawn((
            Target { id },
            position,
            Velocity::default(),
            Wander { drift },
            FireControl {
                last_fired_tick: self.time.tick as i64,
            },
            Chatter {
                line: None,
                until_tick: 0,
                next_line_tick: u64::MAX,
            },
        ));
        id
    }

    /// Spawn a projectile at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_projectile_at(
        &mut self,
        position: skystrike_core::types::Position,
        velocity: skystrike_core::types::Velocity,
    ) {
        world_setup::spawn_projectile(&mut self.world, position, velocity);
    }
}
