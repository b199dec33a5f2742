use bevy::prelude::*;

/// Fixed timestep of the physics loop [s].
///
/// The flight dynamics system reads dt from here rather than from
/// `Time<Fixed>` so headless hosts and tests can run the schedule by hand
/// and still step deterministically.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Seconds advanced per fixed update
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0,
        }
    }
}
