//! Error types for the wheel and its settings

use thiserror::Error;

/// Errors raised by the engine, the controller and the draw wiring
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("sector index {index} out of range (wheel has {count} sectors)")]
    InvalidArgument { index: usize, count: usize },
    #[error("wheel needs at least one sector")]
    EmptyCatalog,
    #[error("selection pool must not be empty")]
    EmptyPool,
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSettings {
        field: &'static str,
        reason: &'static str,
    },
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
}

/// Errors raised while loading or validating [`crate::Settings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl From<SettingsError> for WheelError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::Invalid { field, reason } => WheelError::InvalidSettings { field, reason },
            SettingsError::Io(_) | SettingsError::Parse(_) => WheelError::InvalidSettings {
                field: "settings",
                reason: "could not be loaded",
            },
        }
    }
}
