//! Per-axis motor configuration from TOML.

use std::time::Duration;

use serde::Deserialize;

use crate::motor::MotorKind;

use super::units::{Millis, PinId};

/// Configuration for one axis's motor.
///
/// An axis whose table is absent from the machine configuration has no bound
/// motor and is ignored by every move.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Ordered GPIO pin sequence (3 pins for DC, 4 for stepper).
    pub pins: Vec<PinId>,

    /// Motor kind driving this axis.
    #[serde(default)]
    pub kind: MotorKind,

    /// Delay applied after each pin write, in milliseconds.
    ///
    /// This delay paces the motor: half-step cadence for steppers, run
    /// duration unit for DC motors.
    #[serde(default = "default_step_delay")]
    pub step_delay_ms: Millis,
}

fn default_step_delay() -> Millis {
    Millis(5)
}

impl AxisConfig {
    /// Create a configuration from parts.
    pub fn new(pins: Vec<PinId>, kind: MotorKind, step_delay_ms: Millis) -> Self {
        Self {
            pins,
            kind,
            step_delay_ms,
        }
    }

    /// The per-step delay as a [`Duration`].
    #[inline]
    pub fn step_delay(&self) -> Duration {
        self.step_delay_ms.to_duration()
    }

    /// Whether the pin sequence length matches what the kind requires.
    #[inline]
    pub fn pin_count_matches(&self) -> bool {
        self.pins.len() == self.kind.required_pins()
    }
}
