//! Simulation constants and tuning parameters.
//!
//! Speeds and rates are expressed per second; systems scale by DT.

/// Simulation tick rate (Hz), matching a typical display refresh.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Default arena width in pixels (overridden by window resize).
pub const ARENA_DEFAULT_WIDTH: f64 = 800.0;

/// Default arena height in pixels.
pub const ARENA_DEFAULT_HEIGHT: f64 = 600.0;

// --- Drone ---

/// Drone body size (tip-to-tip, pixels).
pub const DRONE_SIZE: f64 = 40.0;

/// Half extent used to clamp the drone inside the arena.
pub const DRONE_HALF_EXTENT: f64 = DRONE_SIZE / 2.0;

/// Collision radius of the drone (smaller than the visual frame).
pub const DRONE_RADIUS: f64 = 15.0;

/// Drone movement speed (px/s).
pub const DRONE_SPEED: f64 = 240.0;

/// Spawn point x coordinate.
pub const DRONE_SPAWN_X: f64 = 40.0;

/// Spawn point distance from the bottom edge.
pub const DRONE_SPAWN_BOTTOM_MARGIN: f64 = 40.0;

// --- Descend ---

/// Minimum visual scale reached while descending.
pub const DESCEND_FLOOR: f64 = 0.6;

/// Scale shrink rate while descending (scale units per second).
pub const DESCEND_RATE: f64 = 0.6;

/// Maximum duration of one descend cycle before auto-revert (seconds).
pub const DESCEND_MAX_SECS: f64 = 2.0;

/// Scale recovery rate while idle (scale units per second).
pub const SCALE_RECOVER_RATE: f64 = 0.6;

// --- Targets ---

/// Target collision/visual radius.
pub const TARGET_RADIUS: f64 = 20.0;

/// Constant drift speed along the stored heading (px/s).
pub const TARGET_DRIFT_SPEED: f64 = 48.0;

/// Range at which a target abandons its drift and flees the drone.
pub const ESCAPE_RADIUS: f64 = 100.0;

/// Flee speed directly away from the drone (px/s).
pub const ESCAPE_SPEED: f64 = 120.0;

/// Target population, held constant by replacement-on-kill.
pub const DEFAULT_TARGET_COUNT: usize = 5;

/// Radius around a destroyed target within which neighbors die in the
/// same chain (pixels). Targets must practically overlap.
pub const CHAIN_KILL_RADIUS: f64 = 5.0;

// --- Projectiles ---

/// Projectile collision/visual radius.
pub const PROJECTILE_RADIUS: f64 = 3.0;

/// Projectile speed (px/s).
pub const PROJECTILE_SPEED: f64 = 180.0;

/// Minimum interval between shots from one target (seconds).
pub const FIRE_INTERVAL_SECS: f64 = 5.0;

/// Probability gate rolled each tick a target is interval-eligible.
pub const DEFAULT_FIRE_PROBABILITY: f64 = 0.4;

// --- Explosions ---

/// Time-to-live of an explosion marker (seconds). Purely visual.
pub const EXPLOSION_TTL_SECS: f64 = 1.0;

// --- Chatter ---

/// How long a speech bubble stays on screen (seconds).
pub const CHATTER_DISPLAY_SECS: f64 = 2.5;

/// Minimum gap before a target speaks again (seconds).
pub const CHATTER_MIN_GAP_SECS: f64 = 6.0;

/// Maximum gap before a target speaks again (seconds).
pub const CHATTER_MAX_GAP_SECS: f64 = 14.0;

/// Taunt lines targets cycle through at random.
pub const TAUNT_LINES: &[&str] = &[
    "You can't catch me!",
    "Too slow!",
    "Down here!",
    "Missed again!",
    "Nice drone. Shame about the pilot.",
];
