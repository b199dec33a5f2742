use bevy::prelude::*;
use nalgebra::Vector3;
use thiserror::Error;

use crate::components::{FlightControls, FlightForces, FlightState, SpatialComponent};
use crate::config::AircraftConfig;
use crate::resources::PhysicsConfig;
use crate::systems::{calculate_flight_forces, update_powerplant, AirData};
use crate::terrain::{TerrainModel, TerrainQuery};

/// Why a step was refused. The caller's state is untouched on refusal.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StepError {
    /// dt must be positive and finite
    #[error("invalid timestep: {0}")]
    InvalidTimestep(f64),
    /// A rigid-body field held NaN or infinity
    #[error("non-finite motion state: {0}")]
    NonFiniteMotion(&'static str),
    /// A control axis held NaN or infinity
    #[error("non-finite control input: {0}")]
    NonFiniteControl(&'static str),
}

fn finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

fn validate(
    spatial: &SpatialComponent,
    controls: &FlightControls,
    dt: f64,
) -> Result<(), StepError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(StepError::InvalidTimestep(dt));
    }
    if !finite(&spatial.position) {
        return Err(StepError::NonFiniteMotion("position"));
    }
    if !finite(&spatial.velocity) {
        return Err(StepError::NonFiniteMotion("velocity"));
    }
    if !spatial.attitude.coords.iter().all(|c| c.is_finite()) {
        return Err(StepError::NonFiniteMotion("attitude"));
    }
    if !finite(&spatial.angular_velocity) {
        return Err(StepError::NonFiniteMotion("angular_velocity"));
    }
    // NaN slips straight through clamp, so bad axes are refused up front.
    if !controls.pitch.is_finite() {
        return Err(StepError::NonFiniteControl("pitch"));
    }
    if !controls.roll.is_finite() {
        return Err(StepError::NonFiniteControl("roll"));
    }
    if !controls.yaw.is_finite() {
        return Err(StepError::NonFiniteControl("yaw"));
    }
    if !controls.throttle.is_finite() {
        return Err(StepError::NonFiniteControl("throttle"));
    }
    Ok(())
}

/// Advance the flight model by one step of `dt` seconds.
///
/// Reads the rigid-body snapshot and the previous flight state, returns the
/// next flight state and the forces for the host to apply. Pure: no
/// globals, no clocks, identical inputs give identical outputs, and a
/// refused step leaves everything exactly as it was.
pub fn step(
    config: &AircraftConfig,
    state: &FlightState,
    spatial: &SpatialComponent,
    controls: &FlightControls,
    dt: f64,
    terrain: &dyn TerrainQuery,
) -> Result<(FlightState, FlightForces), StepError> {
    validate(spatial, controls, dt)?;

    let inputs = controls.clamped();
    let air = AirData::calculate(spatial, config.zero_lift_speed);
    let powerplant = update_powerplant(
        config,
        state.throttle,
        state.fuel_remaining,
        inputs.throttle,
        dt,
    );
    let forces = calculate_flight_forces(config, spatial, &air, &inputs, powerplant.engine_power, dt);
    let altitude = terrain
        .ground_distance(&spatial.position)
        .unwrap_or(-spatial.position.z);

    let next = FlightState {
        throttle: powerplant.throttle,
        fuel_remaining: powerplant.fuel_remaining,
        inputs,
        forward_speed: air.forward_speed,
        pitch_angle: air.pitch_angle,
        roll_angle: air.roll_angle,
        yaw_angle: air.yaw_angle,
        altitude,
        engine_power: powerplant.engine_power,
        lift_effect: air.lift_effect,
    };

    Ok((next, forces))
}

/// Steps every aircraft once per fixed update.
///
/// A refused step is logged and skipped, leaving that aircraft's state and
/// forces from the previous tick in place.
pub fn flight_dynamics_system(
    mut aircraft: Query<(
        Entity,
        &AircraftConfig,
        &FlightControls,
        &SpatialComponent,
        &mut FlightState,
        &mut FlightForces,
    )>,
    physics: Res<PhysicsConfig>,
    terrain: Res<TerrainModel>,
) {
    for (entity, config, controls, spatial, mut state, mut forces) in aircraft.iter_mut() {
        match step(config, &state, spatial, controls, physics.timestep, &*terrain) {
            Ok((next_state, next_forces)) => {
                *state = next_state;
                *forces = next_forces;
            }
            Err(err) => {
                warn!("Skipping flight step for {:?}: {}", entity, err);
            }
        }
    }
}
