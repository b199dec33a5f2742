pub mod components;
pub mod config;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod terrain;
pub mod utils;

pub use components::{FlightControls, FlightForces, FlightState, SpatialComponent};
pub use config::{AircraftConfig, ConfigError};
pub use plugins::{AircraftBundle, FlightDynamicsPlugin, FlightDynamicsSet};
pub use resources::PhysicsConfig;
pub use systems::{flight_dynamics_system, step, StepError};
pub use terrain::{FlatTerrain, TerrainModel, TerrainQuery};
