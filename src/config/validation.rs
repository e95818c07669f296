//! Configuration validation.

use crate::error::{ConfigError, Result};
use crate::machine::AxisId;

use super::{AxisConfig, MachineConfig};

/// Validate a machine configuration.
///
/// Checks that every configured axis's pin sequence length matches what its
/// motor kind requires. Pin disjointness across axes is the configuration's
/// responsibility and is not enforced here.
pub fn validate_config(config: &MachineConfig) -> Result<()> {
    for (id, axis) in config.configured_axes() {
        validate_axis(id, axis)?;
    }

    Ok(())
}

fn validate_axis(id: AxisId, config: &AxisConfig) -> Result<()> {
    if !config.pin_count_matches() {
        return Err(ConfigError::PinCount {
            motor: id.to_string(),
            kind: config.kind,
            expected: config.kind.required_pins(),
            actual: config.pins.len(),
        }
        .into());
    }

    Ok(())
}
