//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::DescendPhase;
use crate::types::Velocity;

/// Marks the player's drone. Singleton.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drone;

/// Drone visual/attack state driven by the descend state machine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DroneRig {
    /// Visual scale factor (1.0 hovering, shrinks toward the floor
    /// while descending).
    pub scale: f64,
    pub descend: DescendPhase,
}

impl Default for DroneRig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            descend: DescendPhase::Idle,
        }
    }
}

/// Marks a hostile target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    /// Stable integer handle assigned at spawn, unique for the session.
    pub id: u32,
}

/// Stored constant drift for a target, preserved across flee episodes.
/// Wall reflection flips the sign of one component.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Wander {
    pub drift: Velocity,
}

/// Per-target firing clock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireControl {
    /// Tick of the last shot. Signed so the random spawn-time stagger can
    /// predate tick 0, preventing synchronized volleys.
    pub last_fired_tick: i64,
}

/// Speech-bubble timers and text. Purely cosmetic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chatter {
    /// Line currently displayed, if any.
    pub line: Option<String>,
    /// Tick at which the current line disappears.
    pub until_tick: u64,
    /// Tick at which the target next speaks.
    pub next_line_tick: u64,
}

/// Marks a projectile. Velocity is fixed at spawn, aimed at the drone's
/// position at fire time (not tracking).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Explosion marker left behind by a kill. No gameplay effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    /// Tick at which the explosion was spawned (for the fixed TTL).
    pub spawned_tick: u64,
}
