//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Input the frontend cannot map to a command is silently dropped there,
//! so malformed input is unrepresentable here.

use serde::{Deserialize, Serialize};

use crate::enums::MoveDirection;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement keys ---
    /// A movement key went down.
    MoveKeyDown { direction: MoveDirection },
    /// A movement key was released.
    MoveKeyUp { direction: MoveDirection },

    // --- Descend key ---
    /// The descend key went down.
    DescendPressed,
    /// The descend key was released.
    DescendReleased,

    // --- Session control ---
    /// Start a session from the ready screen.
    Start,
    /// Reset all entities, counters and timers and relaunch.
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Surface ---
    /// The rendering surface changed size; entities are re-clamped.
    Resize { width: f64, height: f64 },
}
