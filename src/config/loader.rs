//! Configuration loading from files.

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Result};

use super::MachineConfig;

/// Load machine configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use cnc_motion::load_config;
///
/// let config = load_config("machine.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MachineConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::Io(e.to_string()))?;

    parse_config(&content)
}

/// Parse machine configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<MachineConfig> {
    let config: MachineConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.message().to_owned()))?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::machine::AxisId;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[x]
pins = [15, 11, 13, 12]
kind = "stepper"
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.axis(AxisId::X).is_some());
    }

    #[test]
    fn test_parse_rejects_pin_count_mismatch() {
        let toml = r#"
[x]
pins = [15, 11, 13]
kind = "stepper"
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::PinCount { .. }))
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        let result = parse_config("pins = [");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
