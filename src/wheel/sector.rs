//! Sector catalog and wedge geometry
//!
//! Angles are in degrees, screen convention (clockwise, 0° = east, -90° = up).
//! A wedge is defined by:
//! - start: absolute angle of its leading edge
//! - sweep: angular extent (360 / N)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CIRCLE_DEGREES;
use crate::error::WheelError;
use crate::{normalize_degrees, polar_to_cartesian};

/// Opaque icon handle resolved by the host's image loader
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef(pub String);

/// One prize slot on the wheel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub label: String,
    pub icon: IconRef,
}

impl Sector {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: IconRef(icon.into()),
        }
    }
}

/// Ordered, non-empty list of sectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct SectorCatalog {
    sectors: Vec<Sector>,
}

/// Wire shape of a catalog before the non-empty check
#[derive(Deserialize)]
struct RawCatalog {
    sectors: Vec<Sector>,
}

impl TryFrom<RawCatalog> for SectorCatalog {
    type Error = WheelError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.sectors)
    }
}

impl SectorCatalog {
    pub fn new(sectors: Vec<Sector>) -> Result<Self, WheelError> {
        if sectors.is_empty() {
            return Err(WheelError::EmptyCatalog);
        }
        Ok(Self { sectors })
    }

    /// The stock 16-prize wheel; the last slot is the consolation prize
    pub fn stock() -> Self {
        let sectors = [
            ("Mouse", "mouse"),
            ("Mechanical Keyboard", "keyboard"),
            ("Electric Toothbrush", "toothbrush"),
            ("Badminton Racket", "racket"),
            ("Mouse", "mouse"),
            ("Speaker", "speaker"),
            ("Router", "router"),
            ("Mouse", "mouse"),
            ("Badminton Racket", "racket"),
            ("Power Bank", "power_bank"),
            ("Speaker", "speaker"),
            ("Shaver", "shaver"),
            ("Power Bank", "power_bank"),
            ("Electric Toothbrush", "toothbrush"),
            ("Router", "router"),
            ("Better Luck Next Time", "consolation"),
        ]
        .into_iter()
        .map(|(label, icon)| Sector::new(label, icon))
        .collect();
        Self { sectors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// Always false; kept for the `len` convention
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sector> {
        self.sectors.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sector> {
        self.sectors.iter()
    }

    /// Angular width of one sector
    #[inline]
    pub fn sweep(&self) -> f64 {
        CIRCLE_DEGREES / self.sectors.len() as f64
    }

    /// Reject indices outside [0, N)
    pub fn check_index(&self, index: usize) -> Result<(), WheelError> {
        if index < self.sectors.len() {
            Ok(())
        } else {
            Err(WheelError::InvalidArgument {
                index,
                count: self.sectors.len(),
            })
        }
    }
}

impl Default for SectorCatalog {
    fn default() -> Self {
        Self::stock()
    }
}

/// A sector's wedge at the current rotation, ready for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorWedge {
    pub index: usize,
    /// Absolute start angle (degrees, not normalized)
    pub start: f64,
    /// Angular extent (degrees)
    pub sweep: f64,
    /// Fill color (ARGB)
    pub color: u32,
}

impl SectorWedge {
    /// Angle through the middle of the wedge
    #[inline]
    pub fn mid_angle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }

    /// Check if an absolute angle falls within [start, start + sweep)
    pub fn contains_angle(&self, angle: f64) -> bool {
        let offset = normalize_degrees(angle - self.start);
        offset < self.sweep
    }

    /// Icon center, half way out from the hub along the mid angle
    pub fn icon_anchor(&self, center: Vec2, radius: f32) -> Vec2 {
        center + polar_to_cartesian(radius / 2.0, self.mid_angle())
    }

    /// Widest label that still fits inside the wedge's arc
    pub fn max_label_width(&self, radius: f32) -> f32 {
        let arc_len = radius * (self.sweep as f32).to_radians() / 2.0;
        arc_len * 0.8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedge(start: f64, sweep: f64) -> SectorWedge {
        SectorWedge {
            index: 0,
            start,
            sweep,
            color: 0,
        }
    }

    #[test]
    fn test_stock_catalog() {
        let catalog = SectorCatalog::stock();
        assert_eq!(catalog.len(), 16);
        assert!((catalog.sweep() - 22.5).abs() < 1e-12);
        assert_eq!(catalog.get(15).unwrap().label, "Better Luck Next Time");
        assert_eq!(catalog.get(1).unwrap().icon, IconRef("keyboard".into()));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(SectorCatalog::new(Vec::new()), Err(WheelError::EmptyCatalog));
    }

    #[test]
    fn test_deserialize_rejects_empty_catalog() {
        let err = serde_json::from_str::<SectorCatalog>(r#"{"sectors":[]}"#).unwrap_err();
        assert!(err.to_string().contains("at least one sector"));
    }

    #[test]
    fn test_deserialize_catalog() {
        let json = serde_json::to_string(&SectorCatalog::stock()).unwrap();
        let catalog: SectorCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, SectorCatalog::stock());

        let catalog: SectorCatalog = serde_json::from_str(
            r#"{"sectors":[{"label":"Mug","icon":"mug"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().label, "Mug");
    }

    #[test]
    fn test_check_index() {
        let catalog = SectorCatalog::stock();
        assert!(catalog.check_index(15).is_ok());
        assert_eq!(
            catalog.check_index(16),
            Err(WheelError::InvalidArgument { index: 16, count: 16 })
        );
    }

    #[test]
    fn test_wedge_contains_angle() {
        let w = wedge(-90.0, 22.5);
        assert!(w.contains_angle(-90.0));
        assert!(w.contains_angle(-80.0));
        assert!(!w.contains_angle(-67.5));
        assert!(!w.contains_angle(-91.0));
        // Same direction, several turns later
        assert!(w.contains_angle(-80.0 + 3.0 * 360.0));
    }

    #[test]
    fn test_wedge_contains_angle_wraparound() {
        let w = wedge(350.0, 22.5);
        assert!(w.contains_angle(355.0));
        assert!(w.contains_angle(5.0));
        assert!(!w.contains_angle(15.0));
    }

    #[test]
    fn test_icon_anchor() {
        // Wedge centered on east
        let w = wedge(-11.25, 22.5);
        let anchor = w.icon_anchor(Vec2::new(100.0, 100.0), 80.0);
        assert!((anchor.x - 140.0).abs() < 1e-3);
        assert!((anchor.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_max_label_width() {
        // r * pi / N * 0.8 for the stock wheel
        let w = wedge(0.0, 22.5);
        let expected = 160.0 * std::f32::consts::PI / 16.0 * 0.8;
        assert!((w.max_label_width(160.0) - expected).abs() < 1e-3);
    }
}
