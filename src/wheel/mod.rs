//! Deterministic wheel animation
//!
//! The spin itself is pure and deterministic given the start speed:
//! - One owned session, mutated only by start/stop/tick
//! - Integer-step deceleration so the landing distance is closed form
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod engine;
pub mod sector;
pub mod state;
pub mod tick;

pub use engine::{CompletionListener, WheelEngine, WheelFrame};
pub use sector::{IconRef, Sector, SectorCatalog, SectorWedge};
pub use state::{SpinOutcome, SpinPhase, SpinSession};
pub use tick::{
    advance, distance_for_speed, landing_window, sector_at_pointer, speed_for_distance,
    speed_window,
};
