//! Fixed-cadence spin tick and landing math
//!
//! Once decelerating, speed drops by exactly one unit per tick, so the
//! distance still to travel is a pure function of the current speed:
//! `D(s) = s * (s + 1) / 2`. start() picks a speed from the inverse of that
//! function, and stop() zeroes the angle so the sum starts counting from the
//! pointer's frame of reference.

use super::state::SpinSession;
use crate::consts::*;
use crate::normalize_degrees;

/// Distance covered while decelerating from `speed` to the floor
#[inline]
pub fn distance_for_speed(speed: f64) -> f64 {
    speed * (speed + 1.0) / 2.0
}

/// Speed whose deceleration covers `distance`
#[inline]
pub fn speed_for_distance(distance: f64) -> f64 {
    ((1.0 + 8.0 * distance.max(0.0)).sqrt() - 1.0) / 2.0
}

/// Distance window `[from, to)` that leaves the pointer inside `target`
///
/// `margin` is clamped to a quarter of a wedge so the window never collapses.
pub fn landing_window(target: usize, count: usize, extra_revolutions: u32, margin: f64) -> (f64, f64) {
    let sweep = CIRCLE_DEGREES / count as f64;
    let landing = POINTER_ANGLE - (target + 1) as f64 * sweep;
    let from = extra_revolutions as f64 * CIRCLE_DEGREES + landing;
    let margin = margin.clamp(0.0, sweep / 4.0);
    (from + margin, from + sweep - margin)
}

/// Start speed bounds `[speed_from, speed_to)` for a target sector
pub fn speed_window(target: usize, count: usize, extra_revolutions: u32, margin: f64) -> (f64, f64) {
    let (from, to) = landing_window(target, count, extra_revolutions, margin);
    (speed_for_distance(from), speed_for_distance(to))
}

/// Sector currently under the fixed pointer
pub fn sector_at_pointer(angle: f64, count: usize) -> usize {
    let sweep = CIRCLE_DEGREES / count as f64;
    let offset = normalize_degrees(POINTER_ANGLE - angle);
    ((offset / sweep).floor() as usize).min(count - 1)
}

/// Advance the session by one tick
///
/// Returns true on the tick the wheel comes to rest.
pub fn advance(session: &mut SpinSession) -> bool {
    session.angle += session.speed;

    if !session.decelerating {
        return false;
    }

    session.speed -= DECELERATION;
    if session.speed <= MIN_SPEED {
        session.speed = MIN_SPEED;
        session.decelerating = false;
        return true;
    }
    false
}
