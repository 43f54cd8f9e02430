//! Lucky Wheel - a prize wheel that spins down onto a chosen sector
//!
//! Core modules:
//! - `wheel`: Deterministic spin state machine (sectors, session, tick)
//! - `controller`: Non-repeating prize selection
//! - `draw`: Spin lock and stop timer wiring around the engine
//! - `render`: Fixed-cadence render loop driving the ticks
//! - `settings`: JSON-backed tuning

pub mod controller;
pub mod draw;
pub mod error;
pub mod render;
pub mod settings;
pub mod wheel;

pub use controller::SpinController;
pub use draw::{LuckyDraw, SharedDraw};
pub use error::{SettingsError, WheelError};
pub use render::{Animated, RenderLoop, WheelRenderer};
pub use settings::{Palette, Settings};
pub use wheel::{SectorCatalog, SpinOutcome, WheelEngine, WheelFrame};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Wheel configuration constants
pub mod consts {
    /// Degrees in a full revolution
    pub const CIRCLE_DEGREES: f64 = 360.0;
    /// Number of sectors on the stock wheel
    pub const SECTOR_COUNT: usize = 16;
    /// Fixed pointer position; sector 0 starts here before the first spin
    pub const POINTER_ANGLE: f64 = -90.0;

    /// Render cadence (20 Hz)
    pub const FRAME_DELAY_MS: u64 = 50;
    /// Time between start() and stop()
    pub const SPIN_DURATION_MS: u64 = 1000;

    /// Full turns the wheel makes on top of the landing offset
    pub const EXTRA_REVOLUTIONS: u32 = 3;
    /// Speed floor at which the wheel is considered stopped
    pub const MIN_SPEED: f64 = 0.0;
    /// Speed lost per tick while decelerating
    pub const DECELERATION: f64 = 1.0;
    /// Inset of the landing window so the pointer never rests on a seam
    pub const LANDING_MARGIN_DEG: f64 = 0.5;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(consts::CIRCLE_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= consts::CIRCLE_DEGREES { 0.0 } else { a }
}

/// Convert polar (r, degrees) to cartesian (x, y) in screen space (y down)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f64) -> Vec2 {
    let theta = degrees.to_radians() as f32;
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Seeded RNG for reproducible draws, or entropy-seeded when `seed` is None
///
/// `stream` keeps components that share one seed from drawing identical
/// sequences.
pub fn seeded_rng(seed: Option<u64>, stream: u64) -> Pcg32 {
    match seed {
        Some(seed) => Pcg32::seed_from_u64(seed.wrapping_add(stream)),
        None => Pcg32::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert!((normalize_degrees(1170.5) - 90.5).abs() < 1e-9);
        assert!(normalize_degrees(-1e-18) < consts::CIRCLE_DEGREES);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-5 && p.y.abs() < 1e-5);

        // -90 degrees points up on screen
        let up = polar_to_cartesian(10.0, consts::POINTER_ANGLE);
        assert!(up.x.abs() < 1e-4);
        assert!((up.y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_seeded_rng_streams() {
        use rand::Rng;

        let mut a = seeded_rng(Some(7), 0);
        let mut b = seeded_rng(Some(7), 0);
        let mut c = seeded_rng(Some(7), 1);
        let xs: Vec<u64> = (0..4).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.random()).collect();
        let zs: Vec<u64> = (0..4).map(|_| c.random()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs, zs);
    }
}
