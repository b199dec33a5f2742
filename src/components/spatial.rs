use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid-body snapshot the flight model reads each step.
///
/// Axes follow the NED convention: world x north, y east, z down; body x
/// out the nose, y out the right wing, z down through the belly. The host
/// integrator owns this data, the flight model only reads it.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a new spatial component at a specific position, at rest
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a spatial component in level flight at `speed` along `heading`
    /// (radians clockwise from north)
    pub fn at_airspeed(position: Vector3<f64>, speed: f64, heading: f64) -> Self {
        let attitude = UnitQuaternion::from_euler_angles(0.0, 0.0, heading);
        Self {
            position,
            velocity: attitude * Vector3::new(speed, 0.0, 0.0),
            attitude,
            angular_velocity: Vector3::zeros(),
        }
    }
}
