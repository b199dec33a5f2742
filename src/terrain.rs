use bevy::prelude::*;
use nalgebra::Vector3;

/// Ground lookup the flight model performs once per step.
///
/// Implementations must answer synchronously; the call happens inside the
/// fixed-update step. A backend that resolves height asynchronously should
/// return its last known answer rather than block.
pub trait TerrainQuery {
    /// Distance straight down from `position` to the ground [m], or `None`
    /// when no ground lies below
    fn ground_distance(&self, position: &Vector3<f64>) -> Option<f64>;
}

/// Level ground at a fixed elevation, the reference backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatTerrain {
    /// Height of the ground plane above the world origin [m]
    pub elevation: f64,
}

impl FlatTerrain {
    pub fn at_sea_level() -> Self {
        Self { elevation: 0.0 }
    }
}

impl Default for FlatTerrain {
    fn default() -> Self {
        Self::at_sea_level()
    }
}

impl TerrainQuery for FlatTerrain {
    fn ground_distance(&self, position: &Vector3<f64>) -> Option<f64> {
        // NED, so down is +z and the plane sits at z = -elevation.
        let distance = -self.elevation - position.z;
        (distance >= 0.0).then_some(distance)
    }
}

/// Terrain backend handed to the flight dynamics system.
///
/// Hosts insert their own implementation before the plugin runs; the
/// default is flat ground at sea level.
#[derive(Resource)]
pub struct TerrainModel(pub Box<dyn TerrainQuery + Send + Sync>);

impl TerrainModel {
    pub fn new(terrain: impl TerrainQuery + Send + Sync + 'static) -> Self {
        Self(Box::new(terrain))
    }
}

impl Default for TerrainModel {
    fn default() -> Self {
        Self::new(FlatTerrain::default())
    }
}

impl TerrainQuery for TerrainModel {
    fn ground_distance(&self, position: &Vector3<f64>) -> Option<f64> {
        self.0.ground_distance(position)
    }
}
