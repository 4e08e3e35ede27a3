//! Descend (attack) state machine for the drone.
//!
//! Idle → (key pressed) Descending: scale shrinks linearly toward the
//! floor. Every exit — key release, timeout, or a kill handled by the
//! collision system — resets the scale to exactly 1.0.

use skystrike_core::constants::{
    DESCEND_FLOOR, DESCEND_MAX_SECS, DESCEND_RATE, DT, SCALE_RECOVER_RATE,
};
use skystrike_core::enums::DescendPhase;

/// Input to the descend state machine for one tick.
pub struct DescendContext {
    pub phase: DescendPhase,
    pub scale: f64,
    /// Whether the descend key is currently held.
    pub key_held: bool,
}

/// Output from the descend state machine.
pub struct DescendUpdate {
    pub phase: DescendPhase,
    pub scale: f64,
}

/// Advance the descend state machine by one tick.
pub fn step(ctx: &DescendContext, current_tick: u64) -> DescendUpdate {
    match ctx.phase {
        DescendPhase::Idle => {
            if ctx.key_held {
                DescendUpdate {
                    phase: DescendPhase::Descending {
                        since_tick: current_tick,
                    },
                    scale: shrink(ctx.scale),
                }
            } else {
                DescendUpdate {
                    phase: DescendPhase::Idle,
                    scale: (ctx.scale + SCALE_RECOVER_RATE * DT).min(1.0),
                }
            }
        }
        DescendPhase::Descending { since_tick } => {
            if !ctx.key_held {
                return exit_to_idle();
            }
            let elapsed_secs = current_tick.saturating_sub(since_tick) as f64 * DT;
            if elapsed_secs >= DESCEND_MAX_SECS {
                return exit_to_idle();
            }
            DescendUpdate {
                phase: ctx.phase,
                scale: shrink(ctx.scale),
            }
        }
    }
}

fn shrink(scale: f64) -> f64 {
    (scale - DESCEND_RATE * DT).max(DESCEND_FLOOR)
}

fn exit_to_idle() -> DescendUpdate {
    DescendUpdate {
        phase: DescendPhase::Idle,
        scale: 1.0,
    }
}
