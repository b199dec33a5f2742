use crate::components::SpatialComponent;
use crate::utils::inverse_lerp;

/// Attitude and speed quantities derived from one rigid-body snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AirData {
    /// Roll angle [rad]
    pub roll_angle: f64,
    /// Pitch angle [rad]
    pub pitch_angle: f64,
    /// Yaw angle [rad]
    pub yaw_angle: f64,
    /// Speed along the body nose axis [m/s], floored at zero
    pub forward_speed: f64,
    /// Fraction of full lift available at this forward speed [0-1]
    pub lift_effect: f64,
}

impl AirData {
    /// Derive air data from the snapshot.
    ///
    /// Forward speed is the body-frame x component of the world velocity,
    /// floored at zero so rearward drift never produces negative speed.
    /// The lift fraction ramps linearly from 0 at standstill to 1 at
    /// `zero_lift_speed`.
    pub fn calculate(spatial: &SpatialComponent, zero_lift_speed: f64) -> Self {
        let (roll_angle, pitch_angle, yaw_angle) = spatial.attitude.euler_angles();

        let velocity_body = spatial.attitude.inverse() * spatial.velocity;
        let forward_speed = velocity_body.x.max(0.0);
        let lift_effect = inverse_lerp(0.0, zero_lift_speed, forward_speed);

        Self {
            roll_angle,
            pitch_angle,
            yaw_angle,
            forward_speed,
            lift_effect,
        }
    }
}
