use nalgebra::Vector3;

use crate::components::{FlightControls, FlightForces, SpatialComponent};
use crate::config::AircraftConfig;
use crate::systems::AirData;
use crate::utils::lerp_vec3;

/// Calculates the force, torque and drag outputs for one step.
///
/// All vectors are world frame. `inputs` must already be clamped and
/// `engine_power` already reflects the fuel state; both come from the
/// earlier pipeline stages.
///
/// The velocity field of the result is the drift-corrected world velocity:
/// the snapshot velocity pulled toward the nose axis by the alignment
/// factor. Drag is computed from that corrected velocity, not from the
/// snapshot one.
pub fn calculate_flight_forces(
    config: &AircraftConfig,
    spatial: &SpatialComponent,
    air: &AirData,
    inputs: &FlightControls,
    engine_power: f64,
    dt: f64,
) -> FlightForces {
    let forward = spatial.attitude * Vector3::x();
    let right = spatial.attitude * Vector3::y();
    let up = spatial.attitude * -Vector3::z();

    // Drift correction: the pull toward the nose axis scales with the
    // squared alignment of velocity and nose.
    let speed = spatial.velocity.norm();
    let velocity = if speed > 0.0 {
        let alignment = forward.dot(&(spatial.velocity / speed)).powi(2);
        let target = forward * air.forward_speed;
        lerp_vec3(
            &spatial.velocity,
            &target,
            alignment * config.air_dynamic_effect * dt,
        )
    } else {
        spatial.velocity
    };

    let lift = 0.5
        * air.lift_effect
        * config.air_density
        * air.forward_speed
        * air.forward_speed
        * config.wing_area;
    let lift_force = up * lift;

    let engine_force = forward * engine_power;

    let mut linear_drag = velocity.norm() * config.linear_drag_factor;
    if inputs.airbrakes {
        linear_drag += velocity.norm() * config.air_brake_effect * config.air_brake_effect;
    }
    let angular_drag = air.forward_speed * config.angular_drag_factor;

    // Control authority scales with forward speed.
    let control_torque = (right * (inputs.pitch * config.pitch_effect)
        + forward * (inputs.roll * config.roll_effect)
        + up * (inputs.yaw * config.yaw_effect))
        * air.forward_speed;

    FlightForces {
        lift_force,
        engine_force,
        control_torque,
        linear_drag,
        angular_drag,
        velocity,
    }
}
