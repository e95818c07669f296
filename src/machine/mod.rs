//! Machine module for cnc-motion.
//!
//! Provides the three-axis coordinator that turns target coordinates into
//! per-axis motor actuation.

mod axis;
mod controller;
mod point;

pub use axis::{Axis, AxisId};
pub use controller::Machine;
pub use point::Point;
