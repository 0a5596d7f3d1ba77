//! Selector configuration
//!
//! Settings live in the `[selector]` table of a TOML file. Keys missing from a
//! user file fall back to the defaults embedded from `selectorbox.toml`.

use std::fs;
use lazy_static::lazy_static;
use log::debug;
use crate::errors::{SelectorError, SelectorResult};

#[cfg(test)]
mod tests;

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: SelectorConfig = {
        let content = include_str!("../../selectorbox.toml");
        SelectorConfig::parse_over(content, SelectorConfig::builtin()).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse default selector config: {}", e);
                SelectorConfig::builtin()
            })
    };
}

/// Options for [`crate::selector::SelectorBoxCalculator`] and the CLI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Clamp negative widths/heights to zero
    pub clamp_negative: bool,
    /// Reject NaN/infinite inputs
    pub validate_inputs: bool,
    /// Zoom used when none is given
    pub default_zoom: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        *DEFAULT_CONFIG
    }
}

impl SelectorConfig {
    // Legacy behaviour, used if the embedded file is broken
    fn builtin() -> Self {
        SelectorConfig {
            clamp_negative: false,
            validate_inputs: false,
            default_zoom: 1.0,
        }
    }

    /// Parse a config from a TOML string, filling gaps with the defaults
    pub fn from_str(content: &str) -> SelectorResult<Self> {
        Self::parse_over(content, SelectorConfig::default())
    }

    /// Load a config from a TOML file
    pub fn from_file(path: &str) -> SelectorResult<Self> {
        debug!("Loading selector config from {}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn parse_over(content: &str, base: SelectorConfig) -> SelectorResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(SelectorError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = base;

        let table = match toml_value.get("selector") {
            Some(v) => v.as_table()
                .ok_or_else(|| SelectorError::ConfigError("[selector] must be a table".to_string()))?,
            None => return Ok(config),
        };

        if let Some(v) = table.get("clamp_negative") {
            config.clamp_negative = Self::read_bool(v, "clamp_negative")?;
        }
        if let Some(v) = table.get("validate_inputs") {
            config.validate_inputs = Self::read_bool(v, "validate_inputs")?;
        }
        if let Some(v) = table.get("default_zoom") {
            let zoom = match v {
                toml::Value::Float(f) => *f,
                toml::Value::Integer(i) => *i as f64,
                _ => return Err(SelectorError::ConfigError("default_zoom must be a number".to_string())),
            };
            if !zoom.is_finite() || zoom <= 0.0 {
                return Err(SelectorError::InvalidZoom(zoom));
            }
            config.default_zoom = zoom;
        }

        Ok(config)
    }

    fn read_bool(value: &toml::Value, key: &str) -> SelectorResult<bool> {
        value.as_bool()
            .ok_or_else(|| SelectorError::ConfigError(format!("{} must be true or false", key)))
    }
}
