use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Outputs of one flight model step, addressed to the host rigid body.
///
/// Forces and the torque are expressed in the world frame. The host applies
/// the forces at the centre of mass, applies the torque, feeds both drag
/// coefficients to its damping model and adopts `velocity` before
/// integrating.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightForces {
    /// Lift along the body up axis [N]
    pub lift_force: Vector3<f64>,
    /// Thrust along the body forward axis [N]
    pub engine_force: Vector3<f64>,
    /// Control torque about the centre of mass [N·m]
    pub control_torque: Vector3<f64>,
    /// Linear drag coefficient for this step
    pub linear_drag: f64,
    /// Angular drag coefficient for this step
    pub angular_drag: f64,
    /// World velocity after drift correction [m/s]; replaces the rigid
    /// body's velocity for this step
    pub velocity: Vector3<f64>,
}

impl Default for FlightForces {
    fn default() -> Self {
        Self {
            lift_force: Vector3::zeros(),
            engine_force: Vector3::zeros(),
            control_torque: Vector3::zeros(),
            linear_drag: 0.0,
            angular_drag: 0.0,
            velocity: Vector3::zeros(),
        }
    }
}
