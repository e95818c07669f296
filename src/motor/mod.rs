//! Motor module for cnc-motion.
//!
//! Provides the pin-level motor driver and the half-step phase sequencer.

mod driver;
mod sequence;

use core::fmt;

use serde::Deserialize;

pub use driver::MotorDriver;
pub use sequence::{Direction, StepSequencer, PHASE_COUNT};

/// Kind of motor bound to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotorKind {
    /// DC motor: 3 pins (two direction lines plus enable), driven by
    /// energizing a directional pattern for a timed duration.
    #[default]
    Dc,
    /// 4-wire stepper motor, advanced one half-step phase at a time.
    Stepper,
}

impl MotorKind {
    /// Number of pins a motor of this kind requires.
    #[inline]
    pub const fn required_pins(self) -> usize {
        match self {
            MotorKind::Dc => 3,
            MotorKind::Stepper => 4,
        }
    }
}

impl fmt::Display for MotorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorKind::Dc => write!(f, "dc"),
            MotorKind::Stepper => write!(f, "stepper"),
        }
    }
}
