//! Pin-level motor driver for DC and stepper motors.

use std::time::Duration;

use futures::future::try_join_all;
use log::debug;
use tokio::time::sleep;

use crate::config::units::PinId;
use crate::config::AxisConfig;
use crate::effector::{Level, PinEffector};
use crate::error::{ActuationError, ConfigError, Result};

use super::sequence::{Direction, StepSequencer};
use super::MotorKind;

/// DC energization pattern for forward travel.
const DC_FORWARD: [Level; 3] = [Level::Low, Level::High, Level::High];

/// DC energization pattern for backward travel.
const DC_BACKWARD: [Level; 3] = [Level::High, Level::Low, Level::High];

/// Driver for one motor: owns its pin set, per-step pacing delay, and (for
/// steppers) the half-step phase state.
///
/// All actuation goes through the injected [`PinEffector`]. A pin write
/// counts as complete only once the configured step delay has elapsed after
/// it; that delay, not raw GPIO latency, is what paces the motor.
///
/// "Steps" are signed: a DC motor interprets them as a run-duration
/// multiplier, a stepper as discrete half-steps.
pub struct MotorDriver<E> {
    /// Label used in log output and errors (usually the axis name).
    label: String,
    /// Ordered pin sequence (3 for DC, 4 for stepper).
    pins: Vec<PinId>,
    /// Pacing delay applied after every pin write.
    step_delay: Duration,
    /// Motor kind.
    kind: MotorKind,
    /// Half-step phase state; only advanced for steppers.
    sequencer: StepSequencer,
    /// Injected pin capability.
    effector: E,
}

impl<E: PinEffector> MotorDriver<E> {
    /// Create a driver from an axis configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PinCount`] if the configured pin sequence
    /// length does not match what the motor kind requires.
    pub fn new(label: impl Into<String>, config: &AxisConfig, effector: E) -> Result<Self> {
        let label = label.into();

        let expected = config.kind.required_pins();
        if config.pins.len() != expected {
            return Err(ConfigError::PinCount {
                motor: label,
                kind: config.kind,
                expected,
                actual: config.pins.len(),
            }
            .into());
        }

        Ok(Self {
            label,
            pins: config.pins.clone(),
            step_delay: config.step_delay(),
            kind: config.kind,
            sequencer: StepSequencer::new(),
            effector,
        })
    }

    /// Configure every pin for output.
    ///
    /// Pin configurations proceed concurrently; the future resolves only
    /// once all of them have completed.
    pub async fn setup(&self) -> Result<()> {
        debug!("motor '{}': configuring {} pins", self.label, self.pins.len());
        try_join_all(self.pins.iter().map(|&pin| async move {
            self.effector
                .configure(pin)
                .await
                .map_err(|source| ActuationError::Setup {
                    motor: self.label.clone(),
                    pin,
                    source,
                })
        }))
        .await?;
        Ok(())
    }

    /// The driver's label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The motor kind.
    #[inline]
    pub fn kind(&self) -> MotorKind {
        self.kind
    }

    /// The ordered pin sequence.
    #[inline]
    pub fn pins(&self) -> &[PinId] {
        &self.pins
    }

    /// The pacing delay applied after each pin write.
    #[inline]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// The current half-step phase index, in `[0, 7]`.
    ///
    /// Stays 0 for DC motors, which have no phase sequence.
    #[inline]
    pub fn phase(&self) -> u8 {
        self.sequencer.phase()
    }

    /// Drive every pin low.
    pub async fn stop(&self) -> Result<()> {
        debug!("motor '{}': stop", self.label);
        let levels = vec![Level::Low; self.pins.len()];
        self.write(&levels).await
    }

    /// Energize the coil pattern of the current half-step phase.
    ///
    /// Steppers only; a DC motor has no phase sequence and this does
    /// nothing.
    pub async fn step(&self) -> Result<()> {
        match self.kind {
            MotorKind::Stepper => self.write(&self.sequencer.pattern()).await,
            MotorKind::Dc => Ok(()),
        }
    }

    /// Run the motor forward by `steps`.
    ///
    /// `steps <= 0` is equivalent to [`stop`](Self::stop).
    ///
    /// # Errors
    ///
    /// A pin write failure aborts the remaining steps of this call. The
    /// phase index and any position bookkeeping based on it are then out of
    /// sync with the physical motor until recalibration.
    pub async fn forward(&mut self, steps: i64) -> Result<()> {
        debug!("motor '{}': forward {}", self.label, steps);
        self.run(Direction::Forward, steps).await
    }

    /// Run the motor backward by `steps`.
    ///
    /// `steps <= 0` is equivalent to [`stop`](Self::stop). Failure semantics
    /// match [`forward`](Self::forward).
    pub async fn backward(&mut self, steps: i64) -> Result<()> {
        debug!("motor '{}': backward {}", self.label, steps);
        self.run(Direction::Backward, steps).await
    }

    async fn run(&mut self, direction: Direction, steps: i64) -> Result<()> {
        if steps <= 0 {
            return self.stop().await;
        }

        match self.kind {
            MotorKind::Dc => {
                let pattern = match direction {
                    Direction::Forward => DC_FORWARD,
                    Direction::Backward => DC_BACKWARD,
                };
                self.write(&pattern).await?;
                // Steps scale the run duration for a DC motor.
                let run = u32::try_from(steps).unwrap_or(u32::MAX);
                sleep(self.step_delay.saturating_mul(run)).await;
                self.stop().await
            }
            MotorKind::Stepper => {
                // Half-steps are strictly sequential: coil ordering is
                // position-significant, so no step starts before the
                // previous one has fully settled.
                for _ in 0..steps {
                    let pattern = self.sequencer.advance(direction);
                    self.write(&pattern).await?;
                }
                Ok(())
            }
        }
    }

    /// Write one level per pin, pairwise in pin order.
    ///
    /// The individual pin writes proceed concurrently; each completes only
    /// after the pacing delay, and the call resolves once all have.
    async fn write(&self, levels: &[Level]) -> Result<()> {
        debug_assert_eq!(levels.len(), self.pins.len());
        try_join_all(
            self.pins
                .iter()
                .zip(levels)
                .map(|(&pin, &level)| self.write_pin(pin, level)),
        )
        .await?;
        Ok(())
    }

    async fn write_pin(
        &self,
        pin: PinId,
        level: Level,
    ) -> core::result::Result<(), ActuationError> {
        self.effector
            .write(pin, level)
            .await
            .map_err(|source| ActuationError::Write {
                motor: self.label.clone(),
                pin,
                source,
            })?;
        sleep(self.step_delay).await;
        Ok(())
    }
}
