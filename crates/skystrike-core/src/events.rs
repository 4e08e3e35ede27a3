//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Audio events for the frontend sound system. Fire-and-forget: the
/// frontend restarts playback from time zero if the cue is already playing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A target was destroyed.
    Explosion { target_id: u32 },
    /// The drone was hit by a projectile.
    DroneDown,
}
