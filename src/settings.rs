//! Wheel settings and tuning
//!
//! Loaded from an optional JSON file; every field falls back to the stock
//! wheel's value.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Wedge and decoration colors (ARGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Even-indexed wedges
    pub primary: u32,
    /// Odd-indexed wedges
    pub secondary: u32,
    /// Ring drawn behind the wedges
    pub ring: u32,
    /// Prize label text
    pub text: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: 0xFFF7_F0DE,
            secondary: 0xFFFF_FFFF,
            ring: 0xFFDF_C89C,
            text: 0xFFA5_8453,
        }
    }
}

impl Palette {
    /// Wedge color for a sector, alternating by index parity
    #[inline]
    pub fn wedge_color(&self, index: usize) -> u32 {
        if index % 2 == 0 { self.primary } else { self.secondary }
    }
}

/// Wheel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Render loop frame budget in milliseconds
    pub frame_delay_ms: u64,
    /// Time the wheel spins at full speed before it starts to slow down
    pub spin_duration_ms: u64,

    // === Landing ===
    /// Full turns on top of the landing offset (at least 3)
    pub extra_revolutions: u32,
    /// Degrees kept clear of each wedge edge when choosing the start speed
    pub landing_margin_deg: f64,

    // === Selection ===
    /// Keep the last sector (the consolation slot) out of the prize pool
    pub reserve_consolation_sector: bool,
    /// Fixed RNG seed for reproducible draws; entropy when unset
    pub seed: Option<u64>,

    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_delay_ms: FRAME_DELAY_MS,
            spin_duration_ms: SPIN_DURATION_MS,
            extra_revolutions: EXTRA_REVOLUTIONS,
            landing_margin_deg: LANDING_MARGIN_DEG,
            reserve_consolation_sector: true,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges the landing math depends on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.frame_delay_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "frame_delay_ms",
                reason: "must be greater than zero",
            });
        }
        if self.extra_revolutions < EXTRA_REVOLUTIONS {
            return Err(SettingsError::Invalid {
                field: "extra_revolutions",
                reason: "must be at least 3",
            });
        }
        if !self.landing_margin_deg.is_finite() || self.landing_margin_deg < 0.0 {
            return Err(SettingsError::Invalid {
                field: "landing_margin_deg",
                reason: "must be a non-negative number",
            });
        }
        Ok(())
    }

    /// Frame budget as a duration
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Number of ticks between start() and stop(), rounded up
    pub fn spin_ticks(&self) -> u32 {
        let delay = self.frame_delay_ms.max(1);
        u32::try_from(self.spin_duration_ms.div_ceil(delay)).unwrap_or(u32::MAX)
    }
}
