use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::FlightControls;
use crate::config::AircraftConfig;

/// Per-aircraft flight model state, rewritten once per accepted step.
///
/// Everything here is derived from the rigid-body snapshot and the previous
/// state; hosts read it for HUDs, telemetry and autopilots but should never
/// write it.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Throttle setting [0-1], the lever position the engine follows
    pub throttle: f64,
    /// Fuel remaining [throttle-s]; floors at zero
    pub fuel_remaining: f64,
    /// Control inputs applied on the last step, each axis clamped to [-1, 1]
    pub inputs: FlightControls,
    /// Speed along the nose axis [m/s], floored at zero
    pub forward_speed: f64,
    /// Pitch angle [rad], positive nose up
    pub pitch_angle: f64,
    /// Roll angle [rad], positive right wing down
    pub roll_angle: f64,
    /// Yaw angle [rad], clockwise from north
    pub yaw_angle: f64,
    /// Height above the ground directly below, or above the world origin
    /// plane when no ground is hit [m]
    pub altitude: f64,
    /// Power the engine delivers this step [N]; zero once the tank is dry
    pub engine_power: f64,
    /// Fraction of full lift available at the current forward speed [0-1]
    pub lift_effect: f64,
}

impl FlightState {
    /// State for a freshly fuelled aircraft that has not stepped yet
    pub fn new(config: &AircraftConfig) -> Self {
        Self {
            throttle: 0.0,
            fuel_remaining: config.fuel_capacity,
            inputs: FlightControls::default(),
            forward_speed: 0.0,
            pitch_angle: 0.0,
            roll_angle: 0.0,
            yaw_angle: 0.0,
            altitude: 0.0,
            engine_power: 0.0,
            lift_effect: config.lift_effect_gain,
        }
    }
}
