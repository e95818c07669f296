//! Three-axis machine controller.

use log::{error, info};

use crate::config::units::Steps;
use crate::config::MachineConfig;
use crate::effector::PinEffector;
use crate::error::{Error, Result};
use crate::motor::MotorDriver;

use super::axis::{Axis, AxisId};
use super::point::Point;

/// The machine-level controller: owns one optional motor per axis, tracks
/// axis positions, and serializes paths into ordered single moves.
///
/// [`move_to`](Self::move_to) and [`trace`](Self::trace) take `&mut self`,
/// so at most one motion operation can be in flight per machine; the
/// compiler enforces what would otherwise need a busy flag. To share a
/// machine across tasks, wrap it in an async mutex.
pub struct Machine<E> {
    name: String,
    axes: [Axis<E>; 3],
}

impl<E: PinEffector + Clone> Machine<E> {
    /// Build the machine and set up every configured axis.
    ///
    /// Axis setups run independently and all settle before the result is
    /// decided: one axis's failure never prevents its siblings from
    /// configuring their pins. Every failure is logged with its axis label;
    /// the first is returned.
    ///
    /// The effector handle is cloned per axis, mirroring a single GPIO
    /// controller serving the whole pin space.
    pub async fn init(config: MachineConfig, effector: E) -> Result<Self> {
        info!("{}: initializing", config.name);

        let setups = AxisId::ALL.map(|id| {
            let axis_config = config.axis(id).cloned();
            let effector = effector.clone();
            async move {
                let Some(axis_config) = axis_config else {
                    return Ok(None);
                };
                let motor = MotorDriver::new(id.as_str(), &axis_config, effector)?;
                motor.setup().await?;
                Ok(Some(motor))
            }
        });

        let results: Vec<Result<Option<MotorDriver<E>>>> =
            futures::future::join_all(setups).await;

        let mut first_err: Option<Error> = None;
        let mut motors = results.into_iter().zip(AxisId::ALL).map(|(result, id)| {
            match result {
                Ok(motor) => motor,
                Err(err) => {
                    error!("{}: axis {} failed to initialize: {}", config.name, id, err);
                    if first_err.is_none() {
                        first_err = Some(err);
                    }
                    None
                }
            }
        });
        let axes = AxisId::ALL.map(|id| Axis::new(id, motors.next().flatten()));
        drop(motors);

        if let Some(err) = first_err {
            return Err(err);
        }

        info!("{}: done initializing", config.name);
        Ok(Self {
            name: config.name,
            axes,
        })
    }
}

impl<E: PinEffector> Machine<E> {
    /// The machine name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One axis of the machine.
    pub fn axis(&self, id: AxisId) -> &Axis<E> {
        &self.axes[id.index()]
    }

    /// Current position of one axis, in steps.
    pub fn axis_position(&self, id: AxisId) -> Steps {
        self.axis(id).position()
    }

    /// Current position of all three axes.
    pub fn position(&self) -> Point {
        Point::new(
            self.axis_position(AxisId::X).value(),
            self.axis_position(AxisId::Y).value(),
            self.axis_position(AxisId::Z).value(),
        )
    }

    /// Move every configured axis to its target coordinate.
    ///
    /// Per-axis actuations run concurrently with each other on this task;
    /// unconfigured axes and axes already at their target issue nothing.
    /// All axes settle before the call resolves, and the first axis failure
    /// is then surfaced.
    pub async fn move_to(&mut self, target: Point) -> Result<()> {
        info!("{}: moving to {}", self.name, target);

        let [x, y, z] = &mut self.axes;
        let (rx, ry, rz) = tokio::join!(
            x.seek(target.get(AxisId::X)),
            y.seek(target.get(AxisId::Y)),
            z.seek(target.get(AxisId::Z)),
        );

        rx.and(ry).and(rz)
    }

    /// Visit every point of `path` strictly in order.
    ///
    /// Each point's move fully completes before the next begins; within one
    /// point the axes still run concurrently. An empty path resolves
    /// immediately. A failed move stops the trace at that point.
    pub async fn trace(&mut self, path: &[Point]) -> Result<()> {
        if path.is_empty() {
            return Ok(());
        }

        info!("{}: tracing {} points", self.name, path.len());
        for &point in path {
            self.move_to(point).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::effector::RecordingEffector;

    const XZ_CONFIG: &str = r#"
name = "test-rig"

[x]
pins = [15, 11, 13, 12]
kind = "stepper"

[z]
pins = [18, 16, 22]
kind = "dc"
step_delay_ms = 10
"#;

    #[tokio::test(start_paused = true)]
    async fn test_init_binds_only_configured_axes() {
        let effector = RecordingEffector::new();
        let machine = Machine::init(parse_config(XZ_CONFIG).unwrap(), effector.clone())
            .await
            .unwrap();

        assert!(machine.axis(AxisId::X).is_bound());
        assert!(!machine.axis(AxisId::Y).is_bound());
        assert!(machine.axis(AxisId::Z).is_bound());
        // 4 stepper pins + 3 dc pins configured for output.
        assert_eq!(effector.configured_pins().len(), 7);
        assert_eq!(machine.position(), Point::ORIGIN);
    }

    #[tokio::test(start_paused = true)]
    async fn test_move_tracks_position() {
        let effector = RecordingEffector::new();
        let mut machine = Machine::init(parse_config(XZ_CONFIG).unwrap(), effector)
            .await
            .unwrap();

        machine.move_to(Point::new(3, 0, 2)).await.unwrap();
        assert_eq!(machine.position(), Point::new(3, 0, 2));

        machine.move_to(Point::new(-1, 5, 2)).await.unwrap();
        // Y has no motor: its coordinate is ignored, position stays 0.
        assert_eq!(machine.position(), Point::new(-1, 0, 2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_move_in_place_issues_no_writes() {
        let effector = RecordingEffector::new();
        let mut machine = Machine::init(parse_config(XZ_CONFIG).unwrap(), effector.clone())
            .await
            .unwrap();
        effector.clear();

        machine.move_to(Point::ORIGIN).await.unwrap();
        assert_eq!(effector.write_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_trace_resolves_immediately() {
        let effector = RecordingEffector::new();
        let mut machine = Machine::init(parse_config(XZ_CONFIG).unwrap(), effector.clone())
            .await
            .unwrap();
        effector.clear();

        machine.trace(&[]).await.unwrap();
        assert_eq!(effector.write_count(), 0);
    }
}
