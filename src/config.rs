//! Mode configuration supplied by the host editor.

use crate::error::{ConfigError, ConfigResult, GoModeResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings the host passes when it instantiates the mode.
///
/// Field names follow editor conventions (`indentUnit`, `tabSize`,
/// `indentWithTabs`) so an existing editor config can be read as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ModeConfig {
    /// Columns per indentation level.
    pub indent_unit: u32,
    /// Width of a tab stop.
    pub tab_size: u32,
    /// Emit tabs instead of spaces when re-indenting.
    pub indent_with_tabs: bool,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            tab_size: 4,
            indent_with_tabs: false,
        }
    }
}

impl ModeConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.indent_unit == 0 {
            return Err(ConfigError::ZeroIndentUnit);
        }
        if self.tab_size == 0 {
            return Err(ConfigError::ZeroTabSize);
        }
        Ok(())
    }

    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: ModeConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> GoModeResult<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(Self::from_json_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let config = ModeConfig::from_json_str(r#"{ "indentUnit": 4 }"#).unwrap();
        assert_eq!(
            config,
            ModeConfig {
                indent_unit: 4,
                tab_size: 4,
                indent_with_tabs: false,
            }
        );
        assert_eq!(ModeConfig::from_json_str("{}").unwrap(), ModeConfig::default());
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            ModeConfig::from_json_str(r#"{ "indentUnit": 0 }"#),
            Err(ConfigError::ZeroIndentUnit)
        );
        assert_eq!(
            ModeConfig::from_json_str(r#"{ "tabSize": 0 }"#),
            Err(ConfigError::ZeroTabSize)
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ModeConfig::from_json_str(r#"{ "indentUnit": "two" }"#),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            ModeConfig::from_json_str(r#"{ "indent": 2 }"#),
            Err(ConfigError::Parse { .. })
        ));
    }
}
