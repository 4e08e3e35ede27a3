//! Target steering: flee the drone inside the escape radius, otherwise
//! drift along the stored constant heading.

use skystrike_core::constants::{ESCAPE_RADIUS, ESCAPE_SPEED};
use skystrike_core::types::{Position, Velocity};

/// Input to the steering function for a single target.
pub struct SteerContext {
    pub position: Position,
    /// Stored constant drift, preserved across flee episodes.
    pub drift: Velocity,
    pub drone_position: Position,
}

/// Compute the velocity a target moves with this tick.
///
/// Within `ESCAPE_RADIUS` of the drone the target steers directly away at
/// the fixed escape speed; otherwise it keeps its drift. A target exactly
/// on top of the drone has no away direction and keeps drifting.
pub fn steer(ctx: &SteerContext) -> Velocity {
    let range = ctx.position.range_to(&ctx.drone_position);
    if range < ESCAPE_RADIUS && range > f64::EPSILON {
        let (dx, dy) = ctx.drone_position.unit_to(&ctx.position);
        Velocity::new(dx * ESCAPE_SPEED, dy * ESCAPE_SPEED)
    } else {
        ctx.drift
    }
}

/// Whether a target at `position` is in flee mode relative to the drone.
pub fn is_fleeing(position: &Position, drone_position: &Position) -> bool {
    position.range_to(drone_position) < ESCAPE_RADIUS
}
