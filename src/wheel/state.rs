//! Spin session state
//!
//! Everything a tick reads or writes lives in one owned struct; nothing is
//! shared across threads except through the owner's lock.

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_SPEED, POINTER_ANGLE};

/// Derived phase of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinPhase {
    /// Not moving; initial and terminal state
    Idle,
    /// Constant speed after start(), waiting for stop()
    Spinning,
    /// Losing one unit of speed per tick
    Decelerating,
}

/// Transient animation state of one spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinSession {
    /// Rotation of sector 0's leading edge (degrees, accumulates)
    pub angle: f64,
    /// Degrees advanced per tick
    pub speed: f64,
    /// Sector the wheel will land on
    pub target: usize,
    pub decelerating: bool,
}

impl Default for SpinSession {
    fn default() -> Self {
        Self {
            angle: POINTER_ANGLE,
            speed: MIN_SPEED,
            target: 0,
            decelerating: false,
        }
    }
}

impl SpinSession {
    pub fn phase(&self) -> SpinPhase {
        if self.decelerating {
            SpinPhase::Decelerating
        } else if self.speed > MIN_SPEED {
            SpinPhase::Spinning
        } else {
            SpinPhase::Idle
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase() == SpinPhase::Idle
    }

    /// Arm a new spin at the given speed
    pub fn arm(&mut self, target: usize, speed: f64) {
        self.target = target;
        self.speed = speed.max(MIN_SPEED);
        self.decelerating = false;
    }

    /// Re-anchor the angle and begin slowing down
    pub fn begin_deceleration(&mut self) {
        self.angle = 0.0;
        self.decelerating = true;
    }
}

/// Completion payload of a spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Index locked in at start()
    pub index: usize,
    /// Label of the winning sector
    pub label: String,
}

impl SpinOutcome {
    /// Message shown to the player
    pub fn announcement(&self) -> String {
        format!("Congratulations! You won: {}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let mut session = SpinSession::default();
        assert_eq!(session.phase(), SpinPhase::Idle);
        assert_eq!(session.angle, POINTER_ANGLE);

        session.arm(3, 42.0);
        assert_eq!(session.phase(), SpinPhase::Spinning);
        assert_eq!(session.target, 3);

        session.angle = 500.0;
        session.begin_deceleration();
        assert_eq!(session.phase(), SpinPhase::Decelerating);
        assert_eq!(session.angle, 0.0);
    }

    #[test]
    fn test_arm_clamps_negative_speed() {
        let mut session = SpinSession::default();
        session.arm(0, -4.0);
        assert_eq!(session.speed, MIN_SPEED);
        assert!(session.is_idle());
    }

    #[test]
    fn test_announcement() {
        let outcome = SpinOutcome {
            index: 5,
            label: "Speaker".into(),
        };
        assert_eq!(outcome.announcement(), "Congratulations! You won: Speaker");
    }
}
