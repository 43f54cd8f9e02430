//! Spin state machine
//!
//! Owns the session, turns a target sector into a start speed and runs the
//! deceleration down to rest. Rendering is external: the engine only exposes
//! a [`WheelFrame`] per tick.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::sector::{SectorCatalog, SectorWedge};
use super::state::{SpinOutcome, SpinPhase, SpinSession};
use super::tick::{advance, sector_at_pointer, speed_window};
use crate::consts::POINTER_ANGLE;
use crate::error::WheelError;
use crate::seeded_rng;
use crate::settings::{Palette, Settings};

/// RNG stream for start-speed jitter
const ENGINE_STREAM: u64 = 0x5EED_0001;

/// Called once per completed spin, while the engine is borrowed
pub type CompletionListener = Box<dyn FnMut(&SpinOutcome) + Send>;

/// Snapshot handed to the renderer each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelFrame {
    /// Rotation of sector 0's leading edge (degrees)
    pub angle: f64,
    pub phase: SpinPhase,
    /// Fixed pointer angle
    pub pointer: f64,
    /// One wedge per sector, in index order
    pub wedges: Vec<SectorWedge>,
}

impl WheelFrame {
    /// Wedge currently under the pointer
    pub fn wedge_under_pointer(&self) -> Option<&SectorWedge> {
        self.wedges.iter().find(|w| w.contains_angle(self.pointer))
    }
}

/// The prize wheel engine
pub struct WheelEngine {
    catalog: SectorCatalog,
    palette: Palette,
    extra_revolutions: u32,
    landing_margin: f64,
    session: SpinSession,
    rng: Pcg32,
    listener: Option<CompletionListener>,
    torn_down: bool,
}

impl WheelEngine {
    pub fn new(catalog: SectorCatalog, settings: &Settings) -> Self {
        Self {
            catalog,
            palette: settings.palette,
            extra_revolutions: settings.extra_revolutions,
            landing_margin: settings.landing_margin_deg,
            session: SpinSession::default(),
            rng: seeded_rng(settings.seed, ENGINE_STREAM),
            listener: None,
            torn_down: false,
        }
    }

    /// Register the completion listener, replacing any previous one
    ///
    /// The listener runs inside `tick()`; it must not call back into the engine.
    pub fn on_spin_complete<F>(&mut self, listener: F)
    where
        F: FnMut(&SpinOutcome) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Lock in `target` and spin up to the speed that lands on it
    pub fn start(&mut self, target: usize) -> Result<(), WheelError> {
        if self.torn_down {
            return Err(WheelError::PreconditionViolation("engine has been torn down"));
        }
        self.catalog.check_index(target)?;

        if !self.session.is_idle() {
            log::warn!(
                "Restarting wheel while {:?} (target {} -> {})",
                self.session.phase(),
                self.session.target,
                target
            );
        }

        let (speed_from, speed_to) = speed_window(
            target,
            self.catalog.len(),
            self.extra_revolutions,
            self.landing_margin,
        );
        let speed = speed_from + self.rng.random::<f64>() * (speed_to - speed_from);
        if !speed.is_finite() || speed <= 0.0 {
            return Err(WheelError::InvalidSettings {
                field: "landing_margin_deg",
                reason: "start speed is not a positive number",
            });
        }
        self.session.arm(target, speed);

        log::debug!(
            "Spin started: target={} speed={:.3} window=[{:.3}, {:.3}) angle={:.1}",
            target,
            speed,
            speed_from,
            speed_to,
            self.session.angle
        );
        Ok(())
    }

    /// Begin decelerating; the angle is re-anchored to 0
    ///
    /// Ignored unless the wheel is spinning at constant speed, so repeated
    /// calls leave a running deceleration untouched.
    pub fn stop(&mut self) {
        if self.torn_down {
            return;
        }
        match self.session.phase() {
            SpinPhase::Spinning => {
                self.session.begin_deceleration();
                log::debug!("Decelerating from speed {:.3}", self.session.speed);
            }
            phase => log::debug!("stop() ignored while {:?}", phase),
        }
    }

    /// Advance one frame; returns the outcome on the tick the wheel stops
    pub fn tick(&mut self) -> Option<SpinOutcome> {
        if self.torn_down {
            return None;
        }
        if !advance(&mut self.session) {
            return None;
        }

        let index = self.session.target;
        let label = self
            .catalog
            .get(index)
            .map(|s| s.label.clone())
            .unwrap_or_default();
        let outcome = SpinOutcome { index, label };
        log::info!("Spin complete: sector {} ({})", outcome.index, outcome.label);

        if let Some(listener) = self.listener.as_mut() {
            listener(&outcome);
        }
        Some(outcome)
    }

    /// Halt the engine for good and drop the listener
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.listener = None;
        self.session = SpinSession::default();
        log::debug!("Wheel engine torn down");
    }

    /// Current rotation and per-sector geometry for the renderer
    pub fn frame(&self) -> WheelFrame {
        let sweep = self.catalog.sweep();
        let wedges = (0..self.catalog.len())
            .map(|index| SectorWedge {
                index,
                start: self.session.angle + index as f64 * sweep,
                sweep,
                color: self.palette.wedge_color(index),
            })
            .collect();

        WheelFrame {
            angle: self.session.angle,
            phase: self.session.phase(),
            pointer: POINTER_ANGLE,
            wedges,
        }
    }

    /// Sector currently under the pointer
    pub fn sector_at_pointer(&self) -> usize {
        sector_at_pointer(self.session.angle, self.catalog.len())
    }

    #[inline]
    pub fn phase(&self) -> SpinPhase {
        self.session.phase()
    }

    #[inline]
    pub fn session(&self) -> &SpinSession {
        &self.session
    }

    #[inline]
    pub fn catalog(&self) -> &SectorCatalog {
        &self.catalog
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
