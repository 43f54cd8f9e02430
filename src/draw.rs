//! Draw wiring around the engine
//!
//! Holds the spin lock, asks the controller for a prize, starts the engine and
//! fires stop() once the spin duration has elapsed. The stop timer counts
//! ticks, so stop() runs on the same path as tick() and never races it.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::controller::SpinController;
use crate::error::WheelError;
use crate::settings::Settings;
use crate::wheel::{SectorCatalog, SpinOutcome, WheelEngine};

/// Draw shared between the render loop and the input path
pub type SharedDraw = Arc<Mutex<LuckyDraw>>;

pub struct LuckyDraw {
    engine: WheelEngine,
    controller: SpinController,
    spin_ticks: u32,
    /// Ticks left before stop() fires
    stop_countdown: Option<u32>,
    spinning: bool,
}

impl LuckyDraw {
    pub fn new(catalog: SectorCatalog, settings: &Settings) -> Result<Self, WheelError> {
        settings.validate()?;
        let pool = if settings.reserve_consolation_sector && catalog.len() > 1 {
            catalog.len() - 1
        } else {
            catalog.len()
        };
        let controller = SpinController::new(pool, settings.seed)?;
        let engine = WheelEngine::new(catalog, settings);

        log::debug!(
            "Lucky draw ready: {} sectors, prize pool {}, stop after {} ticks",
            engine.catalog().len(),
            pool,
            settings.spin_ticks()
        );

        Ok(Self {
            engine,
            controller,
            spin_ticks: settings.spin_ticks(),
            stop_countdown: None,
            spinning: false,
        })
    }

    /// Stock 16-sector wheel
    pub fn stock(settings: &Settings) -> Result<Self, WheelError> {
        Self::new(SectorCatalog::stock(), settings)
    }

    pub fn into_shared(self) -> SharedDraw {
        Arc::new(Mutex::new(self))
    }

    /// Pick a prize and start spinning toward it
    pub fn spin(&mut self) -> Result<usize, WheelError> {
        if self.spinning {
            return Err(WheelError::PreconditionViolation("a spin is already in progress"));
        }
        if self.engine.is_torn_down() {
            return Err(WheelError::PreconditionViolation("engine has been torn down"));
        }

        let index = self.controller.pick_next();
        self.engine.start(index)?;
        self.spinning = true;

        if self.spin_ticks == 0 {
            self.engine.stop();
            self.stop_countdown = None;
        } else {
            self.stop_countdown = Some(self.spin_ticks);
        }
        Ok(index)
    }

    /// Advance one frame; releases the spin lock when the wheel comes to rest
    pub fn tick(&mut self) -> Option<SpinOutcome> {
        let outcome = self.engine.tick();

        if let Some(remaining) = self.stop_countdown {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                self.engine.stop();
                self.stop_countdown = None;
            } else {
                self.stop_countdown = Some(remaining);
            }
        }

        if outcome.is_some() {
            self.spinning = false;
        }
        outcome
    }

    /// Stop the engine for good
    pub fn teardown(&mut self) {
        self.engine.teardown();
        self.stop_countdown = None;
        self.spinning = false;
    }

    /// True from spin() until the completion event
    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    #[inline]
    pub fn engine(&self) -> &WheelEngine {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut WheelEngine {
        &mut self.engine
    }

    #[inline]
    pub fn controller(&self) -> &SpinController {
        &self.controller
    }
}
