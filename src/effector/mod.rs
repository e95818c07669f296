//! Pin effector capability.
//!
//! The hardware-facing seam of the crate: everything the motion core does to
//! the outside world goes through [`PinEffector`]. Real deployments back it
//! with a GPIO driver; tests and demos use [`RecordingEffector`].

mod recording;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::units::PinId;

pub use recording::{RecordingEffector, WriteRecord};

/// Digital level of an output pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Pin driven low (de-energized).
    Low,
    /// Pin driven high (energized).
    High,
}

impl Level {
    /// Whether this level is [`Level::High`].
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Failure reported by a [`PinEffector`] operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EffectorError {
    message: String,
}

impl EffectorError {
    /// Create a new effector error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability for configuring and writing digital output pins.
///
/// Both operations complete asynchronously; a resolved future means the
/// hardware side effect has been applied. Implementations are handles
/// (cheaply cloneable, internally shared) so one effector can serve every
/// axis of a machine, matching how a single GPIO controller owns the whole
/// pin address space. Keeping the pin sets of concurrent callers disjoint is
/// the configuration's responsibility.
#[async_trait]
pub trait PinEffector: Send + Sync {
    /// Configure a pin for output.
    async fn configure(&self, pin: PinId) -> Result<(), EffectorError>;

    /// Drive a pin to the given level.
    async fn write(&self, pin: PinId, level: Level) -> Result<(), EffectorError>;
}
