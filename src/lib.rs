//! # cnc-motion
//!
//! Async three-axis motion control for GPIO-driven DC and stepper motors.
//!
//! ## Features
//!
//! - **Pin-level actuation**: target coordinates become ordered digital pin
//!   writes through an injected [`PinEffector`] capability
//! - **Half-step sequencing**: 8-phase state machine for 4-wire steppers
//! - **Timed DC drive**: energize-then-stop control for 3-pin DC motors
//! - **Position tracking**: per-axis step position, committed only after the
//!   hardware actuation completes
//! - **Ordered path tracing**: multi-point paths execute strictly in order,
//!   with the axes of each point driven concurrently
//! - **Configuration-driven**: define axes, pins, and step delays in TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cnc_motion::{load_config, Machine, Point};
//!
//! let config = load_config("machine.toml")?;
//! let mut machine = Machine::init(config, effector).await?;
//!
//! // Single move: every configured axis seeks its target concurrently.
//! machine.move_to(Point::new(120, 80, 0)).await?;
//!
//! // Path: points are visited strictly in order.
//! machine.trace(&[Point::new(0, 0, 1), Point::new(40, 40, 0)]).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod effector;
pub mod error;
pub mod machine;
pub mod motor;

// Re-exports for ergonomic API
pub use config::{load_config, parse_config, validate_config, AxisConfig, MachineConfig};
pub use effector::{EffectorError, Level, PinEffector, RecordingEffector};
pub use error::{ActuationError, ConfigError, Error, Result};
pub use machine::{Axis, AxisId, Machine, Point};
pub use motor::{Direction, MotorDriver, MotorKind, StepSequencer};

// Unit types
pub use config::units::{Millis, PinId, Steps};
