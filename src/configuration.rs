use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::info;

use crate::manager::managererror::ManagerError;
use crate::math::quadrature::methodregistry::MethodRegistry;

pub const DEFAULT_CURVE_STEPS: usize = 200;
pub const DEFAULT_DISPLAY_DIGITS: u32 = 8;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default = "default_curve_steps")]
    curve_steps: usize,
    #[serde(default = "default_display_digits")]
    display_digits: u32,
    #[serde(default)]
    method_descriptors: Vec<serde_json::Value>,
}

fn default_curve_steps() -> usize {
    DEFAULT_CURVE_STEPS
}

fn default_display_digits() -> u32 {
    DEFAULT_DISPLAY_DIGITS
}

pub struct Configuration {
    curve_steps: usize,
    display_digits: u32,
    method_registry: MethodRegistry,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            curve_steps: DEFAULT_CURVE_STEPS,
            display_digits: DEFAULT_DISPLAY_DIGITS,
            method_registry: MethodRegistry::builtin(),
        }
    }

    pub fn curve_steps(&self) -> usize {
        self.curve_steps
    }

    pub fn display_digits(&self) -> u32 {
        self.display_digits
    }

    pub fn method_registry(&self) -> &MethodRegistry {
        &self.method_registry
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        let configuration = Configuration::from_json(json_value)?;
        info!(
            file_path,
            curve_steps = configuration.curve_steps,
            display_digits = configuration.display_digits,
            "configuration loaded"
        );
        Ok(configuration)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        if json_prop.curve_steps == 0 {
            return Err(ManagerError::InvalidSetting {
                name: "curve_steps",
                reason: "must be at least 1".to_owned(),
            });
        }
        if json_prop.display_digits > 17 {
            return Err(ManagerError::InvalidSetting {
                name: "display_digits",
                reason: format!("{} exceeds the 17 significant digits of f64", json_prop.display_digits),
            });
        }
        let method_registry = MethodRegistry::with_overrides(&json_prop.method_descriptors)?;
        Ok(Configuration {
            curve_steps: json_prop.curve_steps,
            display_digits: json_prop.display_digits,
            method_registry,
        })
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
