//! Per-axis position bookkeeping.

use core::fmt;

use log::warn;

use crate::config::units::Steps;
use crate::effector::PinEffector;
use crate::error::Result;
use crate::motor::MotorDriver;

/// One of the machine's three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisId {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl AxisId {
    /// All axes, in coordinate order.
    pub const ALL: [AxisId; 3] = [AxisId::X, AxisId::Y, AxisId::Z];

    /// Position of this axis within a coordinate triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            AxisId::X => 0,
            AxisId::Y => 1,
            AxisId::Z => 2,
        }
    }

    /// Lowercase axis name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            AxisId::X => "x",
            AxisId::Y => "y",
            AxisId::Z => "z",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One linear degree of freedom: a tracked position plus, when configured,
/// the motor that drives it.
///
/// An axis without a bound motor is inert: it keeps position 0 and every
/// move skips it.
pub struct Axis<E> {
    id: AxisId,
    position: Steps,
    motor: Option<MotorDriver<E>>,
}

impl<E: PinEffector> Axis<E> {
    pub(crate) fn new(id: AxisId, motor: Option<MotorDriver<E>>) -> Self {
        Self {
            id,
            position: Steps::default(),
            motor,
        }
    }

    /// The axis identifier.
    #[inline]
    pub fn id(&self) -> AxisId {
        self.id
    }

    /// Current position in steps (net steps issued since initialization).
    #[inline]
    pub fn position(&self) -> Steps {
        self.position
    }

    /// Whether a motor is bound to this axis.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.motor.is_some()
    }

    /// The bound motor, if any.
    #[inline]
    pub fn motor(&self) -> Option<&MotorDriver<E>> {
        self.motor.as_ref()
    }

    /// Drive this axis to `target`, issuing nothing when already there or
    /// when no motor is bound.
    ///
    /// The recorded position is committed only after the actuation has fully
    /// completed. On failure it keeps its pre-move value while the physical
    /// axis may have partially moved; the machine then needs recalibration.
    pub(crate) async fn seek(&mut self, target: Steps) -> Result<()> {
        let Some(motor) = self.motor.as_mut() else {
            return Ok(());
        };

        let delta = target - self.position;
        let moved = match delta.value() {
            0 => return Ok(()),
            d if d > 0 => motor.forward(d).await,
            d => motor.backward(-d).await,
        };

        if let Err(err) = moved {
            warn!(
                "axis {}: actuation aborted, position {} needs recalibration: {}",
                self.id, self.position, err
            );
            return Err(err);
        }

        self.position = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Millis, PinId};
    use crate::config::AxisConfig;
    use crate::effector::RecordingEffector;
    use crate::motor::MotorKind;

    fn stepper_axis(effector: &RecordingEffector) -> Axis<RecordingEffector> {
        let config = AxisConfig::new(
            vec![PinId(15), PinId(11), PinId(13), PinId(12)],
            MotorKind::Stepper,
            Millis(5),
        );
        let motor = MotorDriver::new("x", &config, effector.clone()).unwrap();
        Axis::new(AxisId::X, Some(motor))
    }

    #[tokio::test(start_paused = true)]
    async fn test_seek_commits_position_after_completion() {
        let effector = RecordingEffector::new();
        let mut axis = stepper_axis(&effector);

        axis.seek(Steps(3)).await.unwrap();
        assert_eq!(axis.position(), Steps(3));

        axis.seek(Steps(1)).await.unwrap();
        assert_eq!(axis.position(), Steps(1));
        // 3 forward + 2 backward half-steps, 4 pins each.
        assert_eq!(effector.write_count(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_seek_in_place_issues_no_writes() {
        let effector = RecordingEffector::new();
        let mut axis = stepper_axis(&effector);

        axis.seek(Steps(0)).await.unwrap();
        assert_eq!(effector.write_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbound_axis_is_inert() {
        let mut axis: Axis<RecordingEffector> = Axis::new(AxisId::Y, None);

        axis.seek(Steps(42)).await.unwrap();
        assert_eq!(axis.position(), Steps(0));
        assert!(!axis.is_bound());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_seek_keeps_previous_position() {
        let effector = RecordingEffector::new();
        let mut axis = stepper_axis(&effector);

        effector.fail_writes_after(4);
        assert!(axis.seek(Steps(3)).await.is_err());
        assert_eq!(axis.position(), Steps(0));
    }
}
