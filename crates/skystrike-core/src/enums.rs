//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the session to start.
    #[default]
    Ready,
    /// Simulation running.
    Active,
    /// Simulation frozen by the player.
    Paused,
    /// Terminal state after a projectile hit. Only Restart leaves it.
    GameOver,
}

/// Movement directions mapped from the held-key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Descend (attack) state of the drone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum DescendPhase {
    /// Hovering at full scale.
    #[default]
    Idle,
    /// Shrinking toward the scale floor; kills on contact.
    Descending {
        /// Tick at which this descend cycle began (for the auto-revert timeout).
        since_tick: u64,
    },
}

impl DescendPhase {
    pub fn is_descending(&self) -> bool {
        matches!(self, DescendPhase::Descending { .. })
    }
}

/// Arena edge a target spawns on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}
