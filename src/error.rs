//! Error types for cnc-motion.
//!
//! Provides unified error handling across configuration and motor actuation.

use thiserror::Error;

use crate::config::units::PinId;
use crate::effector::EffectorError;
use crate::motor::MotorKind;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all cnc-motion operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration parsing or validation error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Pin actuation error
    #[error("actuation error: {0}")]
    Actuation(#[from] ActuationError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Pin sequence length does not match what the motor kind requires
    #[error("motor '{motor}': {kind} motor needs {expected} pins, got {actual}")]
    PinCount {
        /// Motor label (usually the axis name)
        motor: String,
        /// Configured motor kind
        kind: MotorKind,
        /// Pin count the kind requires
        expected: usize,
        /// Pin count that was configured
        actual: usize,
    },
    /// Failed to read a configuration file
    #[error("I/O error: {0}")]
    Io(String),
    /// Failed to parse TOML configuration
    #[error("parse error: {0}")]
    Parse(String),
}

/// Pin actuation errors.
///
/// Any failure here is terminal for the operation it occurred in: the
/// remaining steps of a forward/backward call are not issued, and the
/// recorded axis position is no longer trustworthy until the machine is
/// recalibrated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActuationError {
    /// A pin could not be configured for output during motor setup
    #[error("motor '{motor}': setup of pin {pin} failed: {source}")]
    Setup {
        /// Motor label (usually the axis name)
        motor: String,
        /// Pin that failed to configure
        pin: PinId,
        /// Underlying effector failure
        source: EffectorError,
    },
    /// A pin write failed during stop/step/forward/backward
    #[error("motor '{motor}': write to pin {pin} failed: {source}")]
    Write {
        /// Motor label (usually the axis name)
        motor: String,
        /// Pin that failed to write
        pin: PinId,
        /// Underlying effector failure
        source: EffectorError,
    },
}

impl ActuationError {
    /// The underlying effector failure.
    pub fn effector_error(&self) -> &EffectorError {
        match self {
            ActuationError::Setup { source, .. } | ActuationError::Write { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::PinId;

    #[test]
    fn pin_count_error_names_motor_and_kind() {
        let err = Error::from(ConfigError::PinCount {
            motor: "z".into(),
            kind: MotorKind::Dc,
            expected: 3,
            actual: 4,
        });
        let msg = err.to_string();
        assert!(msg.contains("'z'"));
        assert!(msg.contains("dc"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn actuation_error_exposes_source() {
        let err = ActuationError::Write {
            motor: "x".into(),
            pin: PinId(11),
            source: EffectorError::new("bus fault"),
        };
        assert_eq!(err.effector_error().to_string(), "bus fault");
    }
}
