use airframe::{AircraftConfig, FlightControls, SpatialComponent};
use nalgebra::{UnitQuaternion, Vector3};

/// Creates a spatial component in straight and level flight
pub fn straight_level_spatial() -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 0.0, -1000.0),
        velocity: Vector3::new(50.0, 0.0, 0.0),
        attitude: UnitQuaternion::identity(),
        angular_velocity: Vector3::zeros(),
    }
}

/// Creates a spatial component in a gentle climb
pub fn climbing_spatial() -> SpatialComponent {
    let attitude = UnitQuaternion::from_euler_angles(0.0, 0.1, 0.0);
    SpatialComponent {
        position: Vector3::new(0.0, 0.0, -1000.0),
        velocity: attitude * Vector3::new(50.0, 0.0, 0.0),
        attitude,
        angular_velocity: Vector3::zeros(),
    }
}

/// Creates a spatial component flying forward with sideslip
pub fn sideslip_spatial() -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 0.0, -1000.0),
        velocity: Vector3::new(45.0, 15.0, 0.0),
        attitude: UnitQuaternion::identity(),
        angular_velocity: Vector3::zeros(),
    }
}

/// Creates controls holding full throttle with neutral surfaces
pub fn full_throttle_controls() -> FlightControls {
    FlightControls {
        throttle: 1.0,
        ..Default::default()
    }
}

/// Creates a trainer with a nearly empty tank
pub fn low_fuel_config() -> AircraftConfig {
    AircraftConfig {
        fuel_capacity: 0.05,
        ..AircraftConfig::trainer()
    }
}
