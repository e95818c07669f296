//! Configuration module for cnc-motion.
//!
//! Provides types for loading and validating axis and machine configurations
//! from TOML files or pre-parsed data.

mod axis;
mod loader;
mod machine;
pub mod units;
mod validation;

pub use axis::AxisConfig;
pub use loader::{load_config, parse_config};
pub use machine::MachineConfig;
pub use validation::validate_config;

// Re-export unit types at config level
pub use units::{Millis, PinId, Steps};
