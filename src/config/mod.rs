use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Physical parameters of one aircraft, fixed for its lifetime.
///
/// Values are arcade-tuned coefficients rather than certified aerodynamic
/// data; the presets reproduce a docile trainer and a fast interceptor.
/// Every field must be finite and non-negative, and `zero_lift_speed`
/// strictly positive. Hand-built configs should go through [`Self::validate`]
/// before use; [`Self::from_file`] validates on load.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    /// Lift-effect value a fresh flight state reports before its first step
    pub lift_effect_gain: f64,
    /// Linear drag per unit of speed
    pub linear_drag_factor: f64,
    /// Angular drag per unit of forward speed
    pub angular_drag_factor: f64,
    /// Air density in the lift equation [kg/m³]
    pub air_density: f64,
    /// Rate at which the velocity vector is pulled onto the nose axis
    pub air_dynamic_effect: f64,
    /// Engine thrust at full throttle [N]
    pub max_engine_power: f64,
    /// Forward speed at which the lift ramp saturates [m/s]; must be positive
    pub zero_lift_speed: f64,
    /// Extra drag per unit of speed while the airbrakes are out (applied
    /// squared)
    pub air_brake_effect: f64,
    /// Fuel on board when the aircraft is created [throttle-s]
    pub fuel_capacity: f64,
    /// Pitch torque per unit of input and forward speed
    pub pitch_effect: f64,
    /// Roll torque per unit of input and forward speed
    pub roll_effect: f64,
    /// Yaw torque per unit of input and forward speed
    pub yaw_effect: f64,
    /// Throttle lever travel per second at full input [1/s]
    pub throttle_change_rate: f64,
    /// Wing reference area [m²]
    pub wing_area: f64,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self::trainer()
    }
}

impl AircraftConfig {
    /// Docile trainer, the baseline tuning
    pub fn trainer() -> Self {
        Self {
            lift_effect_gain: 0.002,
            linear_drag_factor: 0.001,
            angular_drag_factor: 0.05,
            air_density: 2.0,
            air_dynamic_effect: 2.0,
            max_engine_power: 300.0,
            zero_lift_speed: 1000.0,
            air_brake_effect: 0.09,
            fuel_capacity: 200.0,
            pitch_effect: 2.5,
            roll_effect: 4.0,
            yaw_effect: 1.2,
            throttle_change_rate: 0.3,
            wing_area: 0.01,
        }
    }

    /// Fast, twitchy interceptor with a small tank
    pub fn interceptor() -> Self {
        Self {
            lift_effect_gain: 0.002,
            linear_drag_factor: 0.0012,
            angular_drag_factor: 0.04,
            air_density: 2.0,
            air_dynamic_effect: 2.5,
            max_engine_power: 800.0,
            zero_lift_speed: 1400.0,
            air_brake_effect: 0.12,
            fuel_capacity: 120.0,
            pitch_effect: 3.5,
            roll_effect: 6.0,
            yaw_effect: 1.0,
            throttle_change_rate: 0.5,
            wing_area: 0.008,
        }
    }

    /// Load and validate a configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("lift_effect_gain", self.lift_effect_gain),
            ("linear_drag_factor", self.linear_drag_factor),
            ("angular_drag_factor", self.angular_drag_factor),
            ("air_density", self.air_density),
            ("air_dynamic_effect", self.air_dynamic_effect),
            ("max_engine_power", self.max_engine_power),
            ("zero_lift_speed", self.zero_lift_speed),
            ("air_brake_effect", self.air_brake_effect),
            ("fuel_capacity", self.fuel_capacity),
            ("pitch_effect", self.pitch_effect),
            ("roll_effect", self.roll_effect),
            ("yaw_effect", self.yaw_effect),
            ("throttle_change_rate", self.throttle_change_rate),
            ("wing_area", self.wing_area),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
            if value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }
        if self.zero_lift_speed == 0.0 {
            return Err(ConfigError::ValidationError(
                "zero_lift_speed must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
