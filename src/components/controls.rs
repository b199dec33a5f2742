use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Pilot commands for one simulation step.
///
/// The host writes these each tick (keyboard, gamepad, autopilot); the
/// flight model clamps every axis before it is applied.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightControls {
    /// Pitch command [-1, 1], positive raises the nose
    pub pitch: f64,
    /// Roll command [-1, 1], positive drops the right wing
    pub roll: f64,
    /// Yaw command [-1, 1], positive yaws the nose left
    pub yaw: f64,
    /// Throttle lever command [-1, 1], integrated into the throttle
    /// setting over time rather than applied directly
    pub throttle: f64,
    /// Airbrake deployment flag
    pub airbrakes: bool,
}

impl Default for FlightControls {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            throttle: 0.0,
            airbrakes: false,
        }
    }
}

impl FlightControls {
    /// Copy of the commands with every axis clamped to [-1, 1]
    pub fn clamped(&self) -> Self {
        Self {
            pitch: self.pitch.clamp(-1.0, 1.0),
            roll: self.roll.clamp(-1.0, 1.0),
            yaw: self.yaw.clamp(-1.0, 1.0),
            throttle: self.throttle.clamp(-1.0, 1.0),
            airbrakes: self.airbrakes,
        }
    }
}
