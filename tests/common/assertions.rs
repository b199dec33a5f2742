use airframe::{FlightForces, FlightState};

/// Assert that a flight state obeys its documented ranges
#[track_caller]
pub fn assert_flight_state_valid(state: &FlightState) {
    assert!(
        (0.0..=1.0).contains(&state.throttle),
        "Throttle {} outside [0, 1]",
        state.throttle
    );
    assert!(
        state.fuel_remaining >= 0.0,
        "Negative fuel {}",
        state.fuel_remaining
    );
    assert!(
        state.forward_speed >= 0.0,
        "Negative forward speed {}",
        state.forward_speed
    );
    assert!(
        (0.0..=1.0).contains(&state.lift_effect),
        "Lift effect {} outside [0, 1]",
        state.lift_effect
    );
    assert!(
        state.engine_power >= 0.0,
        "Negative engine power {}",
        state.engine_power
    );

    assert!(state.pitch_angle.is_finite(), "Pitch angle is not finite");
    assert!(state.roll_angle.is_finite(), "Roll angle is not finite");
    assert!(state.yaw_angle.is_finite(), "Yaw angle is not finite");
    assert!(state.altitude.is_finite(), "Altitude is not finite");

    assert!(
        state.inputs.pitch.abs() <= 1.0
            && state.inputs.roll.abs() <= 1.0
            && state.inputs.yaw.abs() <= 1.0
            && state.inputs.throttle.abs() <= 1.0,
        "Stored inputs exceed [-1, 1]: {:?}",
        state.inputs
    );
}

/// Assert that a force bundle contains no NaN or infinity
#[track_caller]
pub fn assert_forces_finite(forces: &FlightForces) {
    assert!(
        forces.lift_force.iter().all(|x| x.is_finite()),
        "Lift force contains non-finite values"
    );
    assert!(
        forces.engine_force.iter().all(|x| x.is_finite()),
        "Engine force contains non-finite values"
    );
    assert!(
        forces.control_torque.iter().all(|x| x.is_finite()),
        "Control torque contains non-finite values"
    );
    assert!(
        forces.velocity.iter().all(|x| x.is_finite()),
        "Corrected velocity contains non-finite values"
    );
    assert!(
        forces.linear_drag.is_finite() && forces.linear_drag >= 0.0,
        "Invalid linear drag {}",
        forces.linear_drag
    );
    assert!(
        forces.angular_drag.is_finite() && forces.angular_drag >= 0.0,
        "Invalid angular drag {}",
        forces.angular_drag
    );
}
