//! Game state snapshot — the complete visible state handed to the frontend
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::AudioEvent;
use crate::types::{ArenaBounds, Position, SimTime, Velocity};

/// Complete game state produced by the engine after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub arena: ArenaView,
    pub drone: DroneView,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Current arena dimensions for the renderer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ArenaView {
    pub width: f64,
    pub height: f64,
}

impl From<ArenaBounds> for ArenaView {
    fn from(bounds: ArenaBounds) -> Self {
        Self {
            width: bounds.width,
            height: bounds.height,
        }
    }
}

/// The drone as drawn by the frontend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DroneView {
    pub position: Position,
    /// Visual scale factor (1.0 hovering, down to the descend floor).
    pub scale: f64,
    pub descending: bool,
}

/// A live target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub position: Position,
    pub velocity: Velocity,
    /// Whether the target is currently fleeing the drone.
    pub fleeing: bool,
    /// Speech bubble text, if one is showing.
    pub speech: Option<String>,
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
}

/// An explosion marker.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    /// Age as a fraction of the TTL, 0.0 fresh to 1.0 expiring.
    pub age_frac: f64,
}
