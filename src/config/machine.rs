//! Machine configuration - root configuration structure.

use serde::Deserialize;

use crate::machine::AxisId;

use super::axis::AxisConfig;

/// Root configuration structure from TOML.
///
/// Each axis table is optional; omitting one leaves that axis unbound.
///
/// ```toml
/// name = "plotter"
///
/// [x]
/// pins = [15, 11, 13, 12]
/// kind = "stepper"
/// step_delay_ms = 5
///
/// [z]
/// pins = [18, 16, 22]
/// kind = "dc"
/// step_delay_ms = 10
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MachineConfig {
    /// Machine name, used in log output.
    #[serde(default = "default_name")]
    pub name: String,

    /// X axis motor configuration.
    #[serde(default)]
    pub x: Option<AxisConfig>,

    /// Y axis motor configuration.
    #[serde(default)]
    pub y: Option<AxisConfig>,

    /// Z axis motor configuration.
    #[serde(default)]
    pub z: Option<AxisConfig>,
}

fn default_name() -> String {
    "machine".to_owned()
}

impl MachineConfig {
    /// Get the configuration for one axis, if present.
    pub fn axis(&self, id: AxisId) -> Option<&AxisConfig> {
        match id {
            AxisId::X => self.x.as_ref(),
            AxisId::Y => self.y.as_ref(),
            AxisId::Z => self.z.as_ref(),
        }
    }

    /// Iterate over the axes that have a configuration.
    pub fn configured_axes(&self) -> impl Iterator<Item = (AxisId, &AxisConfig)> {
        AxisId::ALL
            .into_iter()
            .filter_map(|id| self.axis(id).map(|cfg| (id, cfg)))
    }
}
